use crate::storage::{MAX_DURATION, MIN_DURATION, MIN_STAKE, NO_TIER, TIER_COUNT};

/// Settlement outcome of the minority rule.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Outcome {
    pub push_all: bool,
    pub winning_tier: u32,
    pub winner_count: u32,
}

/// Apply the minority rule to revealed tier counts.
///
/// The winning tier is the tier with the strictly smallest non-zero count.
/// Tiers nobody picked are ignored; an empty tier cannot win.
///
/// Example:
/// - counts (2, 1, 0) → tier 1 wins, winner_count = 1
/// - counts (1, 1, 1) → push (three-way tie)
/// - counts (0, 0, 0) → push (no bidders)
pub fn minority_outcome(counts: &[u32; TIER_COUNT as usize]) -> Outcome {
    let mut min_count = u32::MAX;
    for &c in counts.iter() {
        if c > 0 && c < min_count {
            min_count = c;
        }
    }

    // No tier has any bids: push with no winners
    if min_count == u32::MAX {
        return Outcome {
            push_all: true,
            winning_tier: NO_TIER,
            winner_count: 0,
        };
    }

    let mut winning_tier = NO_TIER;
    let mut tied = false;
    for (tier, &c) in counts.iter().enumerate() {
        if c == min_count {
            if winning_tier == NO_TIER {
                winning_tier = tier as u32;
            } else {
                tied = true;
            }
        }
    }

    if tied {
        Outcome {
            push_all: true,
            winning_tier: NO_TIER,
            winner_count: 0,
        }
    } else {
        Outcome {
            push_all: false,
            winning_tier,
            winner_count: min_count,
        }
    }
}

/// Duration must be within [MIN_DURATION, MAX_DURATION], bounds inclusive.
pub fn duration_in_bounds(duration: u64) -> bool {
    (MIN_DURATION..=MAX_DURATION).contains(&duration)
}

/// Stake must be at least MIN_STAKE.
pub fn stake_at_least_min(stake: i128) -> bool {
    stake >= MIN_STAKE
}
