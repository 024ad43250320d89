use anchor_lang::prelude::*;
use anchor_spl::token_interface::{self, TransferChecked};

use crate::error::ErrorCode;

/// Pulls locked principal from the user's token account into the ledger
/// vault. A declined transfer surfaces as `TransferFailed` and aborts the
/// whole transaction.
pub fn transfer_from_user_to_ledger_vault<'info>(
    signer: AccountInfo<'info>,
    from: AccountInfo<'info>,
    to_vault: AccountInfo<'info>,
    mint: AccountInfo<'info>,
    token_program: AccountInfo<'info>,
    amount: u64,
    mint_decimals: u8,
) -> Result<()> {
    token_interface::transfer_checked(
        CpiContext::new(
            token_program,
            TransferChecked {
                from,
                mint,
                to: to_vault,
                authority: signer,
            },
        ),
        amount,
        mint_decimals,
    )
    .map_err(|_| error!(ErrorCode::TransferFailed))
}

/// Pushes claimed principal from the ledger vault back to the user, signed by
/// the vault authority PDA.
pub fn transfer_from_ledger_vault_to_user<'info>(
    vault_authority: AccountInfo<'info>,
    from_vault: AccountInfo<'info>,
    to: AccountInfo<'info>,
    mint: AccountInfo<'info>,
    token_program: AccountInfo<'info>,
    amount: u64,
    mint_decimals: u8,
    signer_seeds: &[&[&[u8]]],
) -> Result<()> {
    token_interface::transfer_checked(
        CpiContext::new_with_signer(
            token_program,
            TransferChecked {
                from: from_vault,
                mint,
                to,
                authority: vault_authority,
            },
            signer_seeds,
        ),
        amount,
        mint_decimals,
    )
    .map_err(|_| error!(ErrorCode::TransferFailed))
}
