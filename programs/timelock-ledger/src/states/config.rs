use anchor_lang::prelude::*;

pub const LEDGER_CONFIG_SEED: &str = "ledger_config";

/// Binds the ledger to the token it takes into custody. Created exactly once;
/// there is no instruction that mutates `admin`, `token_mint` or `vault`
/// afterwards.
#[account]
#[derive(Default, Debug)]
pub struct LedgerConfig {
    pub bump: u8,           // PDA bump for address derivation
    pub admin: Pubkey,      // Wallet that performed the one-time setup
    pub token_mint: Pubkey, // Mint of the token held in custody
    pub vault: Pubkey,      // Token account holding all locked principal
    pub total_locked: u64,  // Sum of `amount` over all unclaimed locks, ledger-wide
}

impl LedgerConfig {
    /// Total space required for the LedgerConfig account (in bytes)
    pub const LEN: usize = 8 +   // discriminator
        1 +   // bump
        32 +  // admin
        32 +  // token_mint
        32 +  // vault
        8; // total_locked
}
