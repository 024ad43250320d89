use crate::error::ErrorCode;
use crate::states::*;
use crate::utils::*;
use anchor_lang::prelude::*;
use anchor_spl::token::Token;
use anchor_spl::token_interface::{Mint, TokenAccount};

#[derive(Accounts)]
pub struct Claim<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

    /// CHECK: ledger vault authority
    #[account(
        seeds = [
            crate::AUTH_SEED.as_bytes(),
        ],
        bump,
    )]
    pub vault_authority: UncheckedAccount<'info>,

    #[account(
        mut,
        seeds = [
            LEDGER_CONFIG_SEED.as_bytes(),
        ],
        bump = ledger_config.bump,
    )]
    pub ledger_config: Box<Account<'info, LedgerConfig>>,

    /// Mint of the token held in custody
    #[account(
        address = ledger_config.token_mint @ ErrorCode::IncorrectMint,
    )]
    pub token_mint: Box<InterfaceAccount<'info, Mint>>,

    /// The owner's token account the principal is released to
    #[account(
        mut,
        token::mint = token_mint,
        token::authority = owner,
        token::token_program = token_program,
    )]
    pub owner_token: Box<InterfaceAccount<'info, TokenAccount>>,

    /// The vault that holds all locked principal
    #[account(
        mut,
        address = ledger_config.vault @ ErrorCode::InvalidVault,
    )]
    pub ledger_vault: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        mut,
        seeds = [
            USER_LOCKER_SEED.as_bytes(),
            owner.key().as_ref(),
        ],
        bump = locker.bump,
    )]
    pub locker: Box<Account<'info, UserLocker>>,

    /// token Program
    pub token_program: Program<'info, Token>,

    pub system_program: Program<'info, System>,
}

pub fn claim(ctx: Context<Claim>, lock_id: u64) -> Result<()> {
    let locker = &mut ctx.accounts.locker;

    grow_account(
        &locker.to_account_info(),
        &ctx.accounts.owner.to_account_info(),
        &ctx.accounts.system_program.to_account_info(),
        UserLocker::space_for(locker.locks.len(), locker.claims.len() + 1),
    )?;

    let block_timestamp: u64 = match Clock::get() {
        Ok(clock) => match clock.unix_timestamp.try_into() {
            Ok(timestamp) => timestamp,
            Err(_) => {
                return Err(error!(ErrorCode::InvalidTimestamp));
            }
        },
        Err(_) => {
            return Err(error!(ErrorCode::ClockUnavailable));
        }
    };

    // The claim is committed before the custody transfer; a declined transfer
    // aborts the transaction, which also rolls the commit back.
    let amount = locker.settle_claim(lock_id, block_timestamp)?;

    let ledger_config = &mut ctx.accounts.ledger_config;
    ledger_config.total_locked = ledger_config
        .total_locked
        .checked_sub(amount)
        .ok_or(ErrorCode::UnderflowError)?;

    transfer_from_ledger_vault_to_user(
        ctx.accounts.vault_authority.to_account_info(),
        ctx.accounts.ledger_vault.to_account_info(),
        ctx.accounts.owner_token.to_account_info(),
        ctx.accounts.token_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        amount,
        ctx.accounts.token_mint.decimals,
        &[&[crate::AUTH_SEED.as_bytes(), &[ctx.bumps.vault_authority]]],
    )?;

    emit!(ClaimedEvent {
        user: ctx.accounts.owner.key(),
        lock_id,
        amount,
        claimed_at: block_timestamp,
    });

    Ok(())
}
