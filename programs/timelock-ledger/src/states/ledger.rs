use anchor_lang::prelude::*;

use crate::error::ErrorCode;

pub const USER_LOCKER_SEED: &str = "user_locker";

/// A single deposit held in custody. `lock_id` is the record's index in the
/// owning account's lock sequence and stays valid forever: records are
/// appended, never removed.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct LockRecord {
    pub lock_id: u64,    // Index into the owner's lock sequence
    pub amount: u64,     // Locked principal, immutable after creation
    pub start_time: u64, // Unix timestamp at creation, immutable
    pub end_time: u64,   // Maturity; only grows, via extension
    pub claimed: bool,   // Set true exactly once, by a successful claim
}

impl LockRecord {
    /// Serialized size of one lock record (in bytes)
    pub const LEN: usize = 8 +   // lock_id
        8 +   // amount
        8 +   // start_time
        8 +   // end_time
        1; // claimed
}

/// Audit-trail entry written by a successful claim. Never mutated afterwards.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClaimRecord {
    pub lock_id: u64,    // The lock that was claimed
    pub amount: u64,     // Principal released, equals the lock's amount
    pub claimed_at: u64, // Unix timestamp of the claim, >= the lock's end_time
}

impl ClaimRecord {
    /// Serialized size of one claim record (in bytes)
    pub const LEN: usize = 8 +   // lock_id
        8 +   // amount
        8; // claimed_at
}

/// Per-user bookkeeping store. Holds the two append-only sequences and the
/// materialized sum of unclaimed principal. This account is uniquely
/// identified by the owner's wallet and grows by realloc as records are
/// appended.
///
/// Every state transition lives here and takes `now` explicitly, so the
/// instruction handlers stay thin and the whole machine can be driven in
/// tests without a cluster clock.
#[account]
#[derive(Default, Debug)]
pub struct UserLocker {
    pub bump: u8,                  // PDA bump for address derivation
    pub owner: Pubkey,             // Wallet that owns these sequences
    pub total_locked_amount: u64,  // Sum of `amount` over this owner's unclaimed locks
    pub locks: Vec<LockRecord>,    // Append-only, indexed by lock_id
    pub claims: Vec<ClaimRecord>,  // Append-only audit trail
}

impl UserLocker {
    /// Space taken by the account before any record is appended (in bytes)
    pub const BASE_LEN: usize = 8 +   // discriminator
        1 +   // bump
        32 +  // owner
        8 +   // total_locked_amount
        4 +   // locks vec length prefix
        4; // claims vec length prefix

    /// Total space required to hold the given number of records (in bytes)
    pub fn space_for(locks: usize, claims: usize) -> usize {
        Self::BASE_LEN + locks * LockRecord::LEN + claims * ClaimRecord::LEN
    }

    /// Appends a new lock and returns its id. All validation happens before
    /// any field is touched, so a failure leaves the store unchanged.
    pub fn push_lock(&mut self, amount: u64, now: u64, duration: u64) -> Result<u64> {
        require_gt!(amount, 0, ErrorCode::InvalidAmount);
        require_gt!(duration, 0, ErrorCode::InvalidDuration);

        let end_time = now.checked_add(duration).ok_or(ErrorCode::Overflow)?;
        let new_total = self
            .total_locked_amount
            .checked_add(amount)
            .ok_or(ErrorCode::Overflow)?;

        let lock_id = self.locks.len() as u64;
        self.locks.push(LockRecord {
            lock_id,
            amount,
            start_time: now,
            end_time,
            claimed: false,
        });
        self.total_locked_amount = new_total;
        Ok(lock_id)
    }

    /// Pushes a lock's maturity further out and returns the new end time.
    /// No cap on the extension: maturity may grow without bound.
    pub fn extend(&mut self, lock_id: u64, additional_duration: u64) -> Result<u64> {
        require_gt!(additional_duration, 0, ErrorCode::InvalidDuration);

        let lock = self.lock_mut(lock_id)?;
        require!(!lock.claimed, ErrorCode::AlreadyClaimed);

        let new_end_time = lock
            .end_time
            .checked_add(additional_duration)
            .ok_or(ErrorCode::Overflow)?;
        lock.end_time = new_end_time;
        Ok(new_end_time)
    }

    /// Marks a matured lock as claimed, appends the audit record and returns
    /// the principal to release. Validation precedes every write; a failure
    /// leaves the store unchanged.
    pub fn settle_claim(&mut self, lock_id: u64, now: u64) -> Result<u64> {
        let total = self.total_locked_amount;

        let lock = self.lock_mut(lock_id)?;
        require!(!lock.claimed, ErrorCode::AlreadyClaimed);
        require_gte!(now, lock.end_time, ErrorCode::StillLocked);

        let amount = lock.amount;
        let new_total = total.checked_sub(amount).ok_or(ErrorCode::UnderflowError)?;
        lock.claimed = true;

        self.total_locked_amount = new_total;
        self.claims.push(ClaimRecord {
            lock_id,
            amount,
            claimed_at: now,
        });
        Ok(amount)
    }

    /// The amount a claim would release right now, or zero for any lock that
    /// is out of range, already claimed or not yet matured. Never fails.
    pub fn claimable(&self, lock_id: u64, now: u64) -> u64 {
        match usize::try_from(lock_id).ok().and_then(|id| self.locks.get(id)) {
            Some(lock) if !lock.claimed && now >= lock.end_time => lock.amount,
            _ => 0,
        }
    }

    pub fn lock_history_page(&self, offset: u64, limit: u64) -> Vec<LockRecord> {
        history_page(&self.locks, offset, limit)
    }

    pub fn claim_history_page(&self, offset: u64, limit: u64) -> Vec<ClaimRecord> {
        history_page(&self.claims, offset, limit)
    }

    fn lock_mut(&mut self, lock_id: u64) -> Result<&mut LockRecord> {
        usize::try_from(lock_id)
            .ok()
            .and_then(|id| self.locks.get_mut(id))
            .ok_or_else(|| error!(ErrorCode::InvalidLockId))
    }
}

/// Returns the records in `[offset, min(offset + limit, len))`. An offset at
/// or past the end yields an empty page, and `offset + limit` saturates
/// instead of overflowing.
fn history_page<T: Clone>(records: &[T], offset: u64, limit: u64) -> Vec<T> {
    let total = records.len() as u64;
    if offset >= total {
        return Vec::new();
    }
    let end = offset.saturating_add(limit).min(total);
    records[offset as usize..end as usize].to_vec()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn locker_with(entries: &[(u64, u64, u64)]) -> UserLocker {
        let mut locker = UserLocker::default();
        for (amount, now, duration) in entries {
            locker.push_lock(*amount, *now, *duration).unwrap();
        }
        locker
    }

    fn unclaimed_sum(locker: &UserLocker) -> u64 {
        locker
            .locks
            .iter()
            .filter(|lock| !lock.claimed)
            .map(|lock| lock.amount)
            .sum()
    }

    #[test]
    fn test_lock_ids_are_dense_and_zero_based() {
        let mut locker = UserLocker::default();
        for expected in 0..5u64 {
            let lock_id = locker.push_lock(100, 0, 1000).unwrap();
            assert_eq!(lock_id, expected);
            assert_eq!(locker.locks[expected as usize].lock_id, expected);
        }
        assert_eq!(locker.locks.len(), 5);
    }

    #[test]
    fn test_push_lock_records_times_and_totals() {
        let mut locker = locker_with(&[(250, 40, 60)]);
        let lock = &locker.locks[0];
        assert_eq!(lock.start_time, 40);
        assert_eq!(lock.end_time, 100);
        assert!(!lock.claimed);
        assert_eq!(locker.total_locked_amount, 250);

        locker.push_lock(750, 50, 10).unwrap();
        assert_eq!(locker.total_locked_amount, 1000);
        assert_eq!(unclaimed_sum(&locker), 1000);
    }

    #[test]
    fn test_zero_amount_is_rejected() {
        let mut locker = UserLocker::default();
        assert_eq!(
            locker.push_lock(0, 0, 1000),
            Err(ErrorCode::InvalidAmount.into())
        );
        assert!(locker.locks.is_empty());
        assert_eq!(locker.total_locked_amount, 0);
    }

    #[test]
    fn test_zero_duration_is_rejected() {
        let mut locker = UserLocker::default();
        assert_eq!(
            locker.push_lock(100, 0, 0),
            Err(ErrorCode::InvalidDuration.into())
        );
        assert!(locker.locks.is_empty());
    }

    #[test]
    fn test_end_time_overflow_leaves_store_unchanged() {
        let mut locker = UserLocker::default();
        assert_eq!(
            locker.push_lock(100, u64::MAX, 1),
            Err(ErrorCode::Overflow.into())
        );
        assert!(locker.locks.is_empty());
        assert_eq!(locker.total_locked_amount, 0);
    }

    #[test]
    fn test_claim_before_maturity_fails_still_locked() {
        let mut locker = locker_with(&[(100, 0, 1000)]);
        assert_eq!(
            locker.settle_claim(0, 999),
            Err(ErrorCode::StillLocked.into())
        );
        assert!(!locker.locks[0].claimed);
        assert!(locker.claims.is_empty());
        assert_eq!(locker.total_locked_amount, 100);
    }

    #[test]
    fn test_claim_at_exact_maturity_succeeds() {
        let mut locker = locker_with(&[(100, 0, 1000)]);
        assert_eq!(locker.settle_claim(0, 1000), Ok(100));
        assert!(locker.locks[0].claimed);
        assert_eq!(locker.total_locked_amount, 0);
    }

    #[test]
    fn test_claim_appends_matching_audit_record() {
        let mut locker = locker_with(&[(100, 0, 1000), (40, 0, 500)]);
        locker.settle_claim(1, 700).unwrap();

        assert_eq!(locker.claims.len(), 1);
        let claim = &locker.claims[0];
        assert_eq!(claim.lock_id, 1);
        assert_eq!(claim.amount, 40);
        assert_eq!(claim.claimed_at, 700);
        assert!(claim.claimed_at >= locker.locks[1].end_time);
    }

    #[test]
    fn test_double_claim_fails_already_claimed() {
        let mut locker = locker_with(&[(100, 0, 1000)]);
        locker.settle_claim(0, 1500).unwrap();
        assert_eq!(
            locker.settle_claim(0, 2000),
            Err(ErrorCode::AlreadyClaimed.into())
        );
        assert_eq!(locker.claims.len(), 1);
        assert_eq!(locker.total_locked_amount, 0);
    }

    #[test]
    fn test_claim_out_of_range_fails_invalid_lock_id() {
        let mut locker = locker_with(&[(100, 0, 1000)]);
        assert_eq!(
            locker.settle_claim(1, 5000),
            Err(ErrorCode::InvalidLockId.into())
        );
        assert_eq!(
            locker.settle_claim(u64::MAX, 5000),
            Err(ErrorCode::InvalidLockId.into())
        );
    }

    #[test]
    fn test_extend_adds_exactly_the_requested_duration() {
        let mut locker = locker_with(&[(100, 0, 1000)]);
        assert_eq!(locker.extend(0, 500), Ok(1500));
        assert_eq!(locker.locks[0].end_time, 1500);
        // amount and start_time are untouched
        assert_eq!(locker.locks[0].amount, 100);
        assert_eq!(locker.locks[0].start_time, 0);
    }

    #[test]
    fn test_extend_is_unbounded_across_repeats() {
        let mut locker = locker_with(&[(100, 0, 1)]);
        for _ in 0..10 {
            locker.extend(0, u64::MAX / 32).unwrap();
        }
        assert_eq!(locker.locks[0].end_time, 1 + (u64::MAX / 32) * 10);
    }

    #[test]
    fn test_extend_rejects_zero_claimed_and_unknown_locks() {
        let mut locker = locker_with(&[(100, 0, 1000)]);
        assert_eq!(locker.extend(0, 0), Err(ErrorCode::InvalidDuration.into()));
        assert_eq!(locker.extend(3, 10), Err(ErrorCode::InvalidLockId.into()));

        locker.settle_claim(0, 1000).unwrap();
        assert_eq!(locker.extend(0, 10), Err(ErrorCode::AlreadyClaimed.into()));
        assert_eq!(locker.locks[0].end_time, 1000);
    }

    #[test]
    fn test_extend_overflow_leaves_end_time_unchanged() {
        let mut locker = locker_with(&[(100, 0, 1000)]);
        assert_eq!(
            locker.extend(0, u64::MAX),
            Err(ErrorCode::Overflow.into())
        );
        assert_eq!(locker.locks[0].end_time, 1000);
    }

    #[test]
    fn test_claimable_across_the_whole_lifecycle() {
        let mut locker = locker_with(&[(100, 0, 1000)]);

        assert_eq!(locker.claimable(0, 0), 0);
        assert_eq!(locker.claimable(0, 999), 0);
        assert_eq!(locker.claimable(0, 1000), 100);

        locker.extend(0, 500).unwrap();
        assert_eq!(locker.claimable(0, 1000), 0);
        assert_eq!(locker.claimable(0, 1500), 100);

        locker.settle_claim(0, 1500).unwrap();
        assert_eq!(locker.claimable(0, 1500), 0);
        assert_eq!(locker.claimable(0, u64::MAX), 0);

        // out-of-range ids are an empty answer, not an error
        assert_eq!(locker.claimable(7, u64::MAX), 0);
    }

    #[test]
    fn test_round_trip_scenario() {
        let mut locker = UserLocker::default();

        let lock_id = locker.push_lock(100, 0, 1000).unwrap();
        assert_eq!(lock_id, 0);
        assert_eq!(locker.locks[0].end_time, 1000);

        assert_eq!(
            locker.settle_claim(0, 500),
            Err(ErrorCode::StillLocked.into())
        );

        assert_eq!(locker.extend(0, 500), Ok(1500));

        assert_eq!(locker.settle_claim(0, 1500), Ok(100));
        assert_eq!(locker.claims.len(), 1);
        assert_eq!(locker.claims[0].amount, 100);

        assert_eq!(
            locker.settle_claim(0, 1500),
            Err(ErrorCode::AlreadyClaimed.into())
        );
    }

    #[test]
    fn test_totals_track_unclaimed_locks_through_mixed_operations() {
        let mut locker = locker_with(&[(100, 0, 10), (200, 0, 20), (300, 0, 30)]);
        assert_eq!(locker.total_locked_amount, unclaimed_sum(&locker));

        locker.settle_claim(1, 20).unwrap();
        assert_eq!(locker.total_locked_amount, 400);
        assert_eq!(locker.total_locked_amount, unclaimed_sum(&locker));

        locker.push_lock(50, 25, 5).unwrap();
        locker.settle_claim(0, 30).unwrap();
        assert_eq!(locker.total_locked_amount, 350);
        assert_eq!(locker.total_locked_amount, unclaimed_sum(&locker));
    }

    #[test]
    fn test_lock_history_pagination_matches_slices() {
        let locker = locker_with(&[
            (10, 0, 100),
            (20, 0, 100),
            (30, 0, 100),
            (40, 0, 100),
            (50, 0, 100),
        ]);

        assert_eq!(locker.lock_history_page(0, 2), locker.locks[0..2].to_vec());
        assert_eq!(locker.lock_history_page(2, 2), locker.locks[2..4].to_vec());
        // limit runs past the end and clamps
        assert_eq!(locker.lock_history_page(3, 10), locker.locks[3..5].to_vec());
        assert_eq!(locker.lock_history_page(0, u64::MAX), locker.locks);
    }

    #[test]
    fn test_pagination_degenerate_inputs_yield_empty_pages() {
        let locker = locker_with(&[(10, 0, 100), (20, 0, 100)]);

        assert!(locker.lock_history_page(2, 1).is_empty());
        assert!(locker.lock_history_page(u64::MAX, 10).is_empty());
        assert!(locker.lock_history_page(0, 0).is_empty());
        assert!(locker.claim_history_page(0, 10).is_empty());
    }

    #[test]
    fn test_claim_history_pagination() {
        let mut locker = locker_with(&[(10, 0, 1), (20, 0, 2), (30, 0, 3)]);
        locker.settle_claim(0, 100).unwrap();
        locker.settle_claim(2, 200).unwrap();
        locker.settle_claim(1, 300).unwrap();

        let page = locker.claim_history_page(1, 5);
        assert_eq!(page, locker.claims[1..3].to_vec());
        assert_eq!(page[0].lock_id, 2);
        assert_eq!(page[1].lock_id, 1);
    }

    #[test]
    fn test_space_for_tracks_record_growth() {
        assert_eq!(UserLocker::space_for(0, 0), UserLocker::BASE_LEN);
        assert_eq!(
            UserLocker::space_for(2, 1),
            UserLocker::BASE_LEN + 2 * LockRecord::LEN + ClaimRecord::LEN
        );
    }
}
