use crate::error::ErrorCode;
use crate::states::*;
use crate::utils::*;
use anchor_lang::prelude::*;
use anchor_spl::token::Token;
use anchor_spl::token_interface::{Mint, TokenAccount};

#[derive(Accounts)]
pub struct Lock<'info> {
    #[account(mut)]
    pub owner: Signer<'info>,

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

    /// The owner's token account the principal is pulled from
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
        init_if_needed,
        seeds = [
            USER_LOCKER_SEED.as_bytes(),
            owner.key().as_ref(),
        ],
        bump,
        payer = owner,
        space = UserLocker::space_for(1, 0),
    )]
    pub locker: Box<Account<'info, UserLocker>>,

    /// token Program
    pub token_program: Program<'info, Token>,

    pub system_program: Program<'info, System>,
}

pub fn lock(ctx: Context<Lock>, amount: u64, duration: u64) -> Result<u64> {
    let locker = &mut ctx.accounts.locker;

    // Freshly created in this transaction
    if locker.owner == Pubkey::default() {
        locker.bump = ctx.bumps.locker;
        locker.owner = ctx.accounts.owner.key();
        locker.total_locked_amount = 0;
    }

    grow_account(
        &locker.to_account_info(),
        &ctx.accounts.owner.to_account_info(),
        &ctx.accounts.system_program.to_account_info(),
        UserLocker::space_for(locker.locks.len() + 1, locker.claims.len()),
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

    let lock_id = locker.push_lock(amount, block_timestamp, duration)?;
    let end_time = locker.locks[lock_id as usize].end_time;

    let ledger_config = &mut ctx.accounts.ledger_config;
    ledger_config.total_locked = ledger_config
        .total_locked
        .checked_add(amount)
        .ok_or(ErrorCode::Overflow)?;

    transfer_from_user_to_ledger_vault(
        ctx.accounts.owner.to_account_info(),
        ctx.accounts.owner_token.to_account_info(),
        ctx.accounts.ledger_vault.to_account_info(),
        ctx.accounts.token_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        amount,
        ctx.accounts.token_mint.decimals,
    )?;

    emit!(LockedEvent {
        user: ctx.accounts.owner.key(),
        lock_id,
        amount,
        start_time: block_timestamp,
        end_time,
    });

    Ok(lock_id)
}
