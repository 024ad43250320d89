use anchor_client::{Client, Cluster};
use anyhow::Result;
use solana_sdk::{instruction::Instruction, pubkey::Pubkey, system_program};
use std::rc::Rc;

use timelock_ledger::accounts as ledger_accounts;
use timelock_ledger::instruction as ledger_instructions;
use timelock_ledger::states::{LEDGER_CONFIG_SEED, USER_LOCKER_SEED};
use timelock_ledger::{AUTH_SEED, LEDGER_VAULT_SEED};

use super::super::{read_keypair_file, ClientConfig};

pub fn initialize_instr(config: &ClientConfig, token_mint: Pubkey) -> Result<Vec<Instruction>> {
    let admin = read_keypair_file(&config.admin_path)?;
    let url = Cluster::Custom(config.http_url.clone(), config.ws_url.clone());
    // Client.
    let client = Client::new(url, Rc::new(admin));
    let program = client.program(config.timelock_program)?;

    let (vault_authority, _bump) =
        Pubkey::find_program_address(&[AUTH_SEED.as_bytes()], &program.id());
    let (ledger_config, _bump) =
        Pubkey::find_program_address(&[LEDGER_CONFIG_SEED.as_bytes()], &program.id());
    let (ledger_vault, _bump) = Pubkey::find_program_address(
        &[LEDGER_VAULT_SEED.as_bytes(), token_mint.as_ref()],
        &program.id(),
    );

    let instructions = program
        .request()
        .accounts(ledger_accounts::Initialize {
            admin: program.payer(),
            vault_authority,
            token_mint,
            ledger_config,
            ledger_vault,
            token_program: anchor_spl::token::ID,
            system_program: system_program::id(),
        })
        .args(ledger_instructions::Initialize {})
        .instructions()?;
    Ok(instructions)
}

pub fn lock_instr(
    config: &ClientConfig,
    ledger_config: Pubkey,
    token_mint: Pubkey,
    owner_token: Pubkey,
    ledger_vault: Pubkey,
    locker: Pubkey,
    amount: u64,
    duration: u64,
) -> Result<Vec<Instruction>> {
    let payer = read_keypair_file(&config.payer_path)?;
    let url = Cluster::Custom(config.http_url.clone(), config.ws_url.clone());
    // Client.
    let client = Client::new(url, Rc::new(payer));
    let program = client.program(config.timelock_program)?;

    let instructions = program
        .request()
        .accounts(ledger_accounts::Lock {
            owner: program.payer(),
            ledger_config,
            token_mint,
            owner_token,
            ledger_vault,
            locker,
            token_program: anchor_spl::token::ID,
            system_program: system_program::id(),
        })
        .args(ledger_instructions::Lock { amount, duration })
        .instructions()?;
    Ok(instructions)
}

pub fn extend_lock_instr(
    config: &ClientConfig,
    locker: Pubkey,
    lock_id: u64,
    additional_duration: u64,
) -> Result<Vec<Instruction>> {
    let payer = read_keypair_file(&config.payer_path)?;
    let url = Cluster::Custom(config.http_url.clone(), config.ws_url.clone());
    // Client.
    let client = Client::new(url, Rc::new(payer));
    let program = client.program(config.timelock_program)?;

    let instructions = program
        .request()
        .accounts(ledger_accounts::ExtendLock {
            owner: program.payer(),
            locker,
        })
        .args(ledger_instructions::ExtendLock {
            lock_id,
            additional_duration,
        })
        .instructions()?;
    Ok(instructions)
}

pub fn claim_instr(
    config: &ClientConfig,
    ledger_config: Pubkey,
    token_mint: Pubkey,
    owner_token: Pubkey,
    ledger_vault: Pubkey,
    locker: Pubkey,
    lock_id: u64,
) -> Result<Vec<Instruction>> {
    let payer = read_keypair_file(&config.payer_path)?;
    let url = Cluster::Custom(config.http_url.clone(), config.ws_url.clone());
    // Client.
    let client = Client::new(url, Rc::new(payer));
    let program = client.program(config.timelock_program)?;

    let (vault_authority, _bump) =
        Pubkey::find_program_address(&[AUTH_SEED.as_bytes()], &program.id());

    let instructions = program
        .request()
        .accounts(ledger_accounts::Claim {
            owner: program.payer(),
            vault_authority,
            ledger_config,
            token_mint,
            owner_token,
            ledger_vault,
            locker,
            token_program: anchor_spl::token::ID,
            system_program: system_program::id(),
        })
        .args(ledger_instructions::Claim { lock_id })
        .instructions()?;
    Ok(instructions)
}

pub fn user_locker_key(config: &ClientConfig, owner: &Pubkey) -> Pubkey {
    let (user_locker, _bump) = Pubkey::find_program_address(
        &[USER_LOCKER_SEED.as_bytes(), owner.as_ref()],
        &config.timelock_program,
    );
    user_locker
}
