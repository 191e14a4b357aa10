use soroban_sdk::contracterror;

#[contracterror]
#[derive(Copy, Clone, Debug, Eq, PartialEq, PartialOrd, Ord)]
#[repr(u32)]
pub enum Error {
    // ============================================
    // INITIALIZATION ERRORS (1-5)
    // ============================================
    /// Contract already initialized
    AlreadyInitialized = 1,
    /// Contract not initialized
    NotInitialized = 2,

    // ============================================
    // AUTHORIZATION ERRORS (10-15)
    // ============================================
    /// Caller is not the series creator
    NotCreator = 10,

    // ============================================
    // SERIES ERRORS (20-29)
    // ============================================
    /// Series not found
    SeriesMissing = 20,
    /// Series already exists with this ID
    SeriesExists = 21,

    // ============================================
    // VALIDATION ERRORS (30-39)
    // ============================================
    /// Stake below minimum, or payment does not match the series stake
    InvalidStake = 30,
    /// Duration outside [MIN_DURATION, MAX_DURATION]
    InvalidDuration = 31,
    /// Sealed bid failed oracle validity verification
    InvalidProof = 32,

    // ============================================
    // LIFECYCLE ERRORS (40-49)
    // ============================================
    /// Operation not valid in the series' current lifecycle phase
    /// (past lock time, already settled, or cancelled)
    Locked = 40,
    /// Series not yet settled
    NotSettled = 41,
    /// Series is neither cancelled nor a settled push
    NotRefundable = 42,

    // ============================================
    // BID ERRORS (50-59)
    // ============================================
    /// Bidder already entered this series
    AlreadyBid = 50,
    /// No bid stored for this (series, bidder) pair
    BidMissing = 51,

    // ============================================
    // CLAIM ERRORS (60-69)
    // ============================================
    /// Bidder's revealed tier is not the winning tier
    NotWinner = 60,
    /// Prize or refund already paid for this (series, bidder) pair
    AlreadyClaimed = 61,
}
