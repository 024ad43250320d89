pub mod error;
pub mod instructions;
pub mod states;
pub mod utils;
use anchor_lang::prelude::*;
use instructions::*;
use states::{ClaimRecord, LockRecord};

#[cfg(not(feature = "no-entrypoint"))]
solana_security_txt::security_txt! {
    name: "timelock_ledger"
}

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

pub const AUTH_SEED: &str = "timelock_auth_seed";
pub const LEDGER_VAULT_SEED: &str = "timelock_vault";

#[program]
pub mod timelock_ledger {
    use super::*;

    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize(ctx)
    }

    pub fn lock(ctx: Context<Lock>, amount: u64, duration: u64) -> Result<u64> {
        instructions::lock(ctx, amount, duration)
    }

    pub fn extend_lock(
        ctx: Context<ExtendLock>,
        lock_id: u64,
        additional_duration: u64,
    ) -> Result<()> {
        instructions::extend_lock(ctx, lock_id, additional_duration)
    }

    pub fn claim(ctx: Context<Claim>, lock_id: u64) -> Result<()> {
        instructions::claim(ctx, lock_id)
    }

    pub fn claimable_amount(ctx: Context<ViewLocker>, lock_id: u64) -> Result<u64> {
        instructions::claimable_amount(ctx, lock_id)
    }

    pub fn lock_history(ctx: Context<ViewLocker>) -> Result<Vec<LockRecord>> {
        instructions::lock_history(ctx)
    }

    pub fn claim_history(ctx: Context<ViewLocker>) -> Result<Vec<ClaimRecord>> {
        instructions::claim_history(ctx)
    }

    pub fn lock_history_paginated(
        ctx: Context<ViewLocker>,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<LockRecord>> {
        instructions::lock_history_paginated(ctx, offset, limit)
    }

    pub fn claim_history_paginated(
        ctx: Context<ViewLocker>,
        offset: u64,
        limit: u64,
    ) -> Result<Vec<ClaimRecord>> {
        instructions::claim_history_paginated(ctx, offset, limit)
    }
}
