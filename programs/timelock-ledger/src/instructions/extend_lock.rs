use crate::states::*;
use anchor_lang::prelude::*;

#[derive(Accounts)]
pub struct ExtendLock<'info> {
    pub owner: Signer<'info>,

    #[account(
        mut,
        seeds = [
            USER_LOCKER_SEED.as_bytes(),
            owner.key().as_ref(),
        ],
        bump = locker.bump,
    )]
    pub locker: Box<Account<'info, UserLocker>>,
}

pub fn extend_lock(ctx: Context<ExtendLock>, lock_id: u64, additional_duration: u64) -> Result<()> {
    let locker = &mut ctx.accounts.locker;
    let new_end_time = locker.extend(lock_id, additional_duration)?;

    msg!("Lock {} now matures at {}", lock_id, new_end_time);

    emit!(LockExtendedEvent {
        user: ctx.accounts.owner.key(),
        lock_id,
        new_end_time,
    });

    Ok(())
}
