use soroban_sdk::{contracttype, Address, String};

#[contracttype]
#[derive(Clone, Debug)]
pub struct SeriesCreatedEvent {
    pub series_id: String,
    pub lot_label: String,
    pub bid_stake: i128,
    pub lock_time: u64,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct BidPlacedEvent {
    pub series_id: String,
    pub bidder: Address,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct SeriesCancelledEvent {
    pub series_id: String,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct SeriesSettledEvent {
    pub series_id: String,
    pub push_all: bool,
    pub winning_tier: u32,
    pub winner_count: u32,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct PrizeClaimedEvent {
    pub series_id: String,
    pub bidder: Address,
    pub amount: i128,
}

#[contracttype]
#[derive(Clone, Debug)]
pub struct RefundClaimedEvent {
    pub series_id: String,
    pub bidder: Address,
    pub amount: i128,
}
