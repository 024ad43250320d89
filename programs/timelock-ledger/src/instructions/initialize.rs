use crate::states::*;
use crate::LEDGER_VAULT_SEED;
use anchor_lang::prelude::*;
use anchor_spl::token::Token;
use anchor_spl::token_interface::{Mint, TokenAccount};

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    /// CHECK: ledger vault authority
    #[account(
        seeds = [
            crate::AUTH_SEED.as_bytes(),
        ],
        bump,
    )]
    pub vault_authority: UncheckedAccount<'info>,

    /// Mint of the token the ledger takes into custody
    pub token_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        init,
        seeds = [
            LEDGER_CONFIG_SEED.as_bytes(),
        ],
        bump,
        payer = admin,
        space = LedgerConfig::LEN,
    )]
    pub ledger_config: Box<Account<'info, LedgerConfig>>,

    /// The vault that holds all locked principal
    #[account(
        init,
        seeds = [
            LEDGER_VAULT_SEED.as_bytes(),
            token_mint.key().as_ref(),
        ],
        bump,
        payer = admin,
        token::mint = token_mint,
        token::authority = vault_authority,
        token::token_program = token_program,
    )]
    pub ledger_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    /// token Program
    pub token_program: Program<'info, Token>,

    pub system_program: Program<'info, System>,
}

pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
    let ledger_config = &mut ctx.accounts.ledger_config;
    ledger_config.bump = ctx.bumps.ledger_config;
    ledger_config.admin = ctx.accounts.admin.key();
    ledger_config.token_mint = ctx.accounts.token_mint.key();
    ledger_config.vault = ctx.accounts.ledger_vault.key();
    ledger_config.total_locked = 0;

    msg!(
        "Ledger bound to mint {} with vault {}",
        ledger_config.token_mint,
        ledger_config.vault
    );

    Ok(())
}
