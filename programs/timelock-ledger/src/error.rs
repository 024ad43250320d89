use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Lock amount must be greater than zero")]
    InvalidAmount,

    #[msg("Lock duration must be greater than zero")]
    InvalidDuration,

    #[msg("No lock with this id exists for the account")]
    InvalidLockId,

    #[msg("This lock has already been claimed")]
    AlreadyClaimed,

    #[msg("Unlock time has not yet been reached")]
    StillLocked,

    #[msg("Token custody transfer failed")]
    TransferFailed,

    #[msg("Address of the provided token mint is incorrect")]
    IncorrectMint,

    #[msg("Invalid vault account")]
    InvalidVault,

    #[msg("Invalid timestamp conversion")]
    InvalidTimestamp,

    #[msg("Clock sysvar is unavailable")]
    ClockUnavailable,

    #[msg("Arithmetic overflow occurred")]
    Overflow,

    #[msg("Underflow occurred")]
    UnderflowError,
}
