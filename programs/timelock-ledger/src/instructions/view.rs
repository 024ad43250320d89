use crate::error::ErrorCode;
use crate::states::*;
use anchor_lang::prelude::*;

/// Read-only access to one account's histories. Any wallet may read any
/// other wallet's locker; the owner here is a key, not a signer.
#[derive(Accounts)]
pub struct ViewLocker<'info> {
    /// CHECK: only the key is used, to derive the locker address
    pub owner: UncheckedAccount<'info>,

    #[account(
        seeds = [
            USER_LOCKER_SEED.as_bytes(),
            owner.key().as_ref(),
        ],
        bump = locker.bump,
    )]
    pub locker: Box<Account<'info, UserLocker>>,
}

pub fn claimable_amount(ctx: Context<ViewLocker>, lock_id: u64) -> Result<u64> {
    let block_timestamp: u64 = Clock::get()
        .map_err(|_| error!(ErrorCode::ClockUnavailable))?
        .unix_timestamp
        .try_into()
        .map_err(|_| error!(ErrorCode::InvalidTimestamp))?;

    Ok(ctx.accounts.locker.claimable(lock_id, block_timestamp))
}

pub fn lock_history(ctx: Context<ViewLocker>) -> Result<Vec<LockRecord>> {
    Ok(ctx.accounts.locker.locks.clone())
}

pub fn claim_history(ctx: Context<ViewLocker>) -> Result<Vec<ClaimRecord>> {
    Ok(ctx.accounts.locker.claims.clone())
}

pub fn lock_history_paginated(
    ctx: Context<ViewLocker>,
    offset: u64,
    limit: u64,
) -> Result<Vec<LockRecord>> {
    Ok(ctx.accounts.locker.lock_history_page(offset, limit))
}

pub fn claim_history_paginated(
    ctx: Context<ViewLocker>,
    offset: u64,
    limit: u64,
) -> Result<Vec<ClaimRecord>> {
    Ok(ctx.accounts.locker.claim_history_page(offset, limit))
}
