use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer};

/// Grows a record-holding account in place so the next append fits, topping
/// up rent from the payer first. Shrinking never happens: histories are
/// append-only.
pub fn grow_account<'info>(
    account: &AccountInfo<'info>,
    payer: &AccountInfo<'info>,
    system_program_info: &AccountInfo<'info>,
    new_len: usize,
) -> Result<()> {
    if new_len <= account.data_len() {
        return Ok(());
    }

    let required_lamports = Rent::get()?.minimum_balance(new_len);
    let current_lamports = account.lamports();
    if required_lamports > current_lamports {
        system_program::transfer(
            CpiContext::new(
                system_program_info.clone(),
                Transfer {
                    from: payer.clone(),
                    to: account.clone(),
                },
            ),
            required_lamports - current_lamports,
        )?;
    }

    account.realloc(new_len, false)?;
    Ok(())
}
