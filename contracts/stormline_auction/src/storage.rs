use soroban_sdk::{contracttype, Address, String, Vec};

// Constants

/// Number of bid tiers (Ember = 0, Gale = 1, Flash = 2)
pub const TIER_COUNT: u32 = 3;
/// Sentinel for "no winning tier" (unsettled or push outcome)
pub const NO_TIER: u32 = 255;
/// Minimum stake per bid, in 1e7-scaled token units (0.0004)
pub const MIN_STAKE: i128 = 4_000;
/// Minimum series duration: 10 minutes
pub const MIN_DURATION: u64 = 10 * 60;
/// Maximum series duration: 96 hours
pub const MAX_DURATION: u64 = 96 * 60 * 60;

#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Series {
    /// Unique series ID, never reused
    pub series_id: String,
    /// Display label for the lot
    pub lot_label: String,
    /// Creator address; only actor allowed to cancel
    pub creator: Address,
    /// Exact stake every bid must pay
    pub bid_stake: i128,
    /// Timestamp after which bids close and settlement opens
    pub lock_time: u64,
    /// Running total of accepted stakes
    pub prize_pool: i128,
    /// Count of distinct bidders
    pub total_bidders: u32,
    /// Bids per tier; all zero until settlement reveals them
    pub tier_counts: Vec<u32>,
    pub settled: bool,
    pub cancelled: bool,
    /// Settlement ended in a push (tie or no bidders); refunds only
    pub push_all: bool,
    /// Winning tier index, NO_TIER when push or unsettled
    pub winning_tier: u32,
    /// Bidders whose revealed tier equals winning_tier
    pub winner_count: u32,
}

#[contracttype]
#[derive(Clone)]
pub enum DataKey {
    Initialized,
    StakeToken,
    TierOracle,
    SeriesIds,                    // Vec<String>
    Series(String),               // series_id → Series
    Bid(String, Address),         // (series_id, bidder) → BytesN<32> sealed handle
    Bidders(String),              // series_id → Vec<Address>
    RevealedTier(String, Address), // (series_id, bidder) → u32, set at settlement
    Claimed(String, Address),     // (series_id, bidder) → bool, write-once
}
