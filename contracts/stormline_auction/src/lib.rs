#![no_std]

mod error;
mod events;
mod storage;
mod validation;

use error::Error;
use events::*;
use storage::{DataKey, Series, NO_TIER, TIER_COUNT};
use validation::{duration_in_bounds, minority_outcome, stake_at_least_min};

use soroban_sdk::{
    contract, contractimpl, token, vec, Address, Bytes, BytesN, Env, IntoVal, String, Symbol, Vec,
};

#[contract]
pub struct StormlineAuction;

#[contractimpl]
impl StormlineAuction {
    // ============================================
    // INITIALIZATION
    // ============================================

    /// Wire the stake token and confidential-compute oracle. Callable once;
    /// there is no admin and no post-deployment configuration.
    ///
    /// # Errors
    /// - `AlreadyInitialized`: Contract already initialized
    pub fn initialize(env: Env, stake_token: Address, tier_oracle: Address) -> Result<(), Error> {
        if env.storage().instance().has(&DataKey::Initialized) {
            return Err(Error::AlreadyInitialized);
        }

        env.storage().instance().set(&DataKey::Initialized, &true);
        env.storage().instance().set(&DataKey::StakeToken, &stake_token);
        env.storage().instance().set(&DataKey::TierOracle, &tier_oracle);

        Ok(())
    }

    // ============================================
    // FLOW 1: CREATE SERIES
    // ============================================

    /// Open a new auction series. Any caller may create one.
    ///
    /// # Errors
    /// - `SeriesExists`: Series ID already used
    /// - `InvalidStake`: Stake below minimum
    /// - `InvalidDuration`: Duration outside [MIN_DURATION, MAX_DURATION]
    pub fn create_series(
        env: Env,
        creator: Address,
        series_id: String,
        lot_label: String,
        bid_stake: i128,
        duration: u64,
    ) -> Result<(), Error> {
        creator.require_auth();

        if env
            .storage()
            .persistent()
            .has(&DataKey::Series(series_id.clone()))
        {
            return Err(Error::SeriesExists);
        }

        if !stake_at_least_min(bid_stake) {
            return Err(Error::InvalidStake);
        }

        if !duration_in_bounds(duration) {
            return Err(Error::InvalidDuration);
        }

        let lock_time = env.ledger().timestamp() + duration;

        let series = Series {
            series_id: series_id.clone(),
            lot_label: lot_label.clone(),
            creator,
            bid_stake,
            lock_time,
            prize_pool: 0,
            total_bidders: 0,
            tier_counts: vec![&env, 0, 0, 0],
            settled: false,
            cancelled: false,
            push_all: false,
            winning_tier: NO_TIER,
            winner_count: 0,
        };

        env.storage()
            .persistent()
            .set(&DataKey::Series(series_id.clone()), &series);

        let mut ids: Vec<String> = env
            .storage()
            .persistent()
            .get(&DataKey::SeriesIds)
            .unwrap_or(vec![&env]);
        ids.push_back(series_id.clone());
        env.storage().persistent().set(&DataKey::SeriesIds, &ids);

        env.events().publish(
            (Symbol::new(&env, "series_created"), series_id.clone()),
            SeriesCreatedEvent {
                series_id,
                lot_label,
                bid_stake,
                lock_time,
            },
        );

        Ok(())
    }

    // ============================================
    // FLOW 2: ENTER SERIES (SEALED BID)
    // ============================================

    /// Place a sealed bid. The tier choice stays opaque inside `handle`
    /// until settlement; only the bidder's identity becomes public.
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `SeriesMissing`: Series doesn't exist
    /// - `Locked`: Past lock time, cancelled, or settled
    /// - `AlreadyBid`: Bidder already entered this series
    /// - `InvalidStake`: Payment does not match the series stake
    /// - `InvalidProof`: Oracle rejected the sealed value
    pub fn place_bid(
        env: Env,
        bidder: Address,
        series_id: String,
        payment: i128,
        handle: BytesN<32>,
        proof: Bytes,
    ) -> Result<(), Error> {
        bidder.require_auth();

        let mut series = Self::load_series(&env, &series_id)?;

        if env.ledger().timestamp() >= series.lock_time || series.cancelled || series.settled {
            return Err(Error::Locked);
        }

        if env
            .storage()
            .persistent()
            .has(&DataKey::Bid(series_id.clone(), bidder.clone()))
        {
            return Err(Error::AlreadyBid);
        }

        if payment != series.bid_stake {
            return Err(Error::InvalidStake);
        }

        let oracle = Self::tier_oracle(&env)?;
        let valid: bool = env.invoke_contract(
            &oracle,
            &Symbol::new(&env, "verify_bid"),
            vec![&env, handle.into_val(&env), proof.into_val(&env)],
        );
        if !valid {
            return Err(Error::InvalidProof);
        }

        let stake_token = Self::stake_token(&env)?;
        let token_client = token::Client::new(&env, &stake_token);
        token_client.transfer(&bidder, &env.current_contract_address(), &payment);

        env.storage()
            .persistent()
            .set(&DataKey::Bid(series_id.clone(), bidder.clone()), &handle);

        let mut bidders = Self::bidders_of(&env, &series_id);
        bidders.push_back(bidder.clone());
        env.storage()
            .persistent()
            .set(&DataKey::Bidders(series_id.clone()), &bidders);

        series.prize_pool += payment;
        series.total_bidders += 1;
        env.storage()
            .persistent()
            .set(&DataKey::Series(series_id.clone()), &series);

        env.events().publish(
            (Symbol::new(&env, "bid_placed"), series_id.clone()),
            BidPlacedEvent { series_id, bidder },
        );

        Ok(())
    }

    // ============================================
    // FLOW 3: CANCEL SERIES
    // ============================================

    /// Cancel an open series. Creator only, and only strictly before lock
    /// time; once the deadline passes the only exit is `settle_series`.
    /// Collected stakes stay in the pool for refund claims.
    ///
    /// # Errors
    /// - `SeriesMissing`: Series doesn't exist
    /// - `NotCreator`: Caller is not the series creator
    /// - `Locked`: Already settled, already cancelled, or past lock time
    pub fn cancel_series(env: Env, caller: Address, series_id: String) -> Result<(), Error> {
        caller.require_auth();

        let mut series = Self::load_series(&env, &series_id)?;

        if caller != series.creator {
            return Err(Error::NotCreator);
        }

        if series.settled || series.cancelled || env.ledger().timestamp() >= series.lock_time {
            return Err(Error::Locked);
        }

        series.cancelled = true;
        env.storage()
            .persistent()
            .set(&DataKey::Series(series_id.clone()), &series);

        env.events().publish(
            (Symbol::new(&env, "series_cancelled"), series_id.clone()),
            SeriesCancelledEvent { series_id },
        );

        Ok(())
    }

    // ============================================
    // FLOW 4: SETTLE SERIES
    // ============================================

    /// Settle a series past its lock time. Permissionless: the deadline is
    /// the authorization. Reveals every sealed bid in one oracle batch,
    /// tallies tiers, and freezes the minority outcome exactly once.
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `SeriesMissing`: Series doesn't exist
    /// - `Locked`: Lock time not reached, already settled, or cancelled
    pub fn settle_series(env: Env, series_id: String) -> Result<(), Error> {
        let mut series = Self::load_series(&env, &series_id)?;

        if env.ledger().timestamp() < series.lock_time || series.settled || series.cancelled {
            return Err(Error::Locked);
        }

        let bidders = Self::bidders_of(&env, &series_id);
        let mut counts = [0u32; TIER_COUNT as usize];

        if !bidders.is_empty() {
            let mut handles: Vec<BytesN<32>> = vec![&env];
            for bidder in bidders.iter() {
                let handle: BytesN<32> = env
                    .storage()
                    .persistent()
                    .get(&DataKey::Bid(series_id.clone(), bidder.clone()))
                    .ok_or(Error::BidMissing)?;
                handles.push_back(handle);
            }

            let oracle = Self::tier_oracle(&env)?;
            let tiers: Vec<u32> = env.invoke_contract(
                &oracle,
                &Symbol::new(&env, "reveal_bids"),
                vec![&env, handles.into_val(&env)],
            );

            for (bidder, tier) in bidders.iter().zip(tiers.iter()) {
                env.storage().persistent().set(
                    &DataKey::RevealedTier(series_id.clone(), bidder.clone()),
                    &tier,
                );
                if tier < TIER_COUNT {
                    counts[tier as usize] += 1;
                }
            }
        }

        let outcome = minority_outcome(&counts);

        series.tier_counts = Vec::from_array(&env, counts);
        series.settled = true;
        series.push_all = outcome.push_all;
        series.winning_tier = outcome.winning_tier;
        series.winner_count = outcome.winner_count;
        env.storage()
            .persistent()
            .set(&DataKey::Series(series_id.clone()), &series);

        env.events().publish(
            (Symbol::new(&env, "series_settled"), series_id.clone()),
            SeriesSettledEvent {
                series_id,
                push_all: outcome.push_all,
                winning_tier: outcome.winning_tier,
                winner_count: outcome.winner_count,
            },
        );

        Ok(())
    }

    // ============================================
    // FLOW 5: CLAIM PRIZE
    // ============================================

    /// Claim an equal share of the pool after a unique-minority settlement.
    /// Integer division; any remainder stays in the contract.
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `SeriesMissing`: Series doesn't exist
    /// - `NotSettled`: Series not yet settled
    /// - `NotWinner`: Push outcome, never bid, or tier is not the winner
    /// - `AlreadyClaimed`: Prize already paid to this bidder
    pub fn claim_prize(env: Env, bidder: Address, series_id: String) -> Result<i128, Error> {
        bidder.require_auth();

        let series = Self::load_series(&env, &series_id)?;

        if !series.settled {
            return Err(Error::NotSettled);
        }

        // On a push no tier matches the sentinel, so nobody is a winner
        if series.push_all {
            return Err(Error::NotWinner);
        }

        let tier: u32 = env
            .storage()
            .persistent()
            .get(&DataKey::RevealedTier(series_id.clone(), bidder.clone()))
            .ok_or(Error::NotWinner)?;
        if tier != series.winning_tier {
            return Err(Error::NotWinner);
        }

        if Self::is_claimed(&env, &series_id, &bidder) {
            return Err(Error::AlreadyClaimed);
        }

        let payout = series.prize_pool / series.winner_count as i128;

        // Claim record before transfer: no re-entry path back into a payout
        env.storage()
            .persistent()
            .set(&DataKey::Claimed(series_id.clone(), bidder.clone()), &true);

        let stake_token = Self::stake_token(&env)?;
        let token_client = token::Client::new(&env, &stake_token);
        token_client.transfer(&env.current_contract_address(), &bidder, &payout);

        env.events().publish(
            (Symbol::new(&env, "prize_claimed"), series_id.clone()),
            PrizeClaimedEvent {
                series_id,
                bidder,
                amount: payout,
            },
        );

        Ok(payout)
    }

    // ============================================
    // FLOW 6: CLAIM REFUND
    // ============================================

    /// Claim the stake back after a cancellation or a settled push.
    ///
    /// # Errors
    /// - `NotInitialized`: Contract not initialized
    /// - `SeriesMissing`: Series doesn't exist
    /// - `NotRefundable`: Series is neither cancelled nor a settled push
    /// - `BidMissing`: Bidder never entered this series
    /// - `AlreadyClaimed`: Refund already paid to this bidder
    pub fn claim_refund(env: Env, bidder: Address, series_id: String) -> Result<i128, Error> {
        bidder.require_auth();

        let series = Self::load_series(&env, &series_id)?;

        if !(series.cancelled || (series.settled && series.push_all)) {
            return Err(Error::NotRefundable);
        }

        if !env
            .storage()
            .persistent()
            .has(&DataKey::Bid(series_id.clone(), bidder.clone()))
        {
            return Err(Error::BidMissing);
        }

        if Self::is_claimed(&env, &series_id, &bidder) {
            return Err(Error::AlreadyClaimed);
        }

        let payout = series.bid_stake;

        env.storage()
            .persistent()
            .set(&DataKey::Claimed(series_id.clone(), bidder.clone()), &true);

        let stake_token = Self::stake_token(&env)?;
        let token_client = token::Client::new(&env, &stake_token);
        token_client.transfer(&env.current_contract_address(), &bidder, &payout);

        env.events().publish(
            (Symbol::new(&env, "refund_claimed"), series_id.clone()),
            RefundClaimedEvent {
                series_id,
                bidder,
                amount: payout,
            },
        );

        Ok(payout)
    }

    // ============================================
    // VIEW FUNCTIONS
    // ============================================

    /// Get series details
    pub fn get_series(env: Env, series_id: String) -> Result<Series, Error> {
        Self::load_series(&env, &series_id)
    }

    /// List every series ID ever created
    pub fn list_series_ids(env: Env) -> Vec<String> {
        env.storage()
            .persistent()
            .get(&DataKey::SeriesIds)
            .unwrap_or(vec![&env])
    }

    /// Get the bidders of a series, in entry order
    pub fn get_bidders(env: Env, series_id: String) -> Result<Vec<Address>, Error> {
        Self::load_series(&env, &series_id)?;
        Ok(Self::bidders_of(&env, &series_id))
    }

    /// Get a bidder's sealed handle; the tier inside stays opaque
    pub fn get_bid_handle(
        env: Env,
        series_id: String,
        bidder: Address,
    ) -> Result<BytesN<32>, Error> {
        Self::load_series(&env, &series_id)?;
        env.storage()
            .persistent()
            .get(&DataKey::Bid(series_id, bidder))
            .ok_or(Error::BidMissing)
    }

    // ============================================
    // INTERNAL HELPERS
    // ============================================

    fn load_series(env: &Env, series_id: &String) -> Result<Series, Error> {
        env.storage()
            .persistent()
            .get(&DataKey::Series(series_id.clone()))
            .ok_or(Error::SeriesMissing)
    }

    fn bidders_of(env: &Env, series_id: &String) -> Vec<Address> {
        env.storage()
            .persistent()
            .get(&DataKey::Bidders(series_id.clone()))
            .unwrap_or(vec![env])
    }

    fn is_claimed(env: &Env, series_id: &String, bidder: &Address) -> bool {
        env.storage()
            .persistent()
            .get::<DataKey, bool>(&DataKey::Claimed(series_id.clone(), bidder.clone()))
            .unwrap_or(false)
    }

    fn stake_token(env: &Env) -> Result<Address, Error> {
        env.storage()
            .instance()
            .get(&DataKey::StakeToken)
            .ok_or(Error::NotInitialized)
    }

    fn tier_oracle(env: &Env) -> Result<Address, Error> {
        env.storage()
            .instance()
            .get(&DataKey::TierOracle)
            .ok_or(Error::NotInitialized)
    }
}
