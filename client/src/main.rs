#![allow(dead_code)]
use anchor_client::{Client, Cluster};
use anyhow::{format_err, Result};
use clap::Parser;
use configparser::ini::Ini;
use solana_client::rpc_client::RpcClient;
use solana_sdk::{
    pubkey::Pubkey,
    signature::{Keypair, Signer},
    transaction::Transaction,
};
use std::rc::Rc;
use std::str::FromStr;
use std::time::{SystemTime, UNIX_EPOCH};
use timelock_ledger::states::{LedgerConfig, UserLocker, LEDGER_CONFIG_SEED};

mod instructions;
use instructions::ledger_instructions::*;
use instructions::rpc::*;

#[derive(Clone, Debug, PartialEq)]
pub struct ClientConfig {
    http_url: String,
    ws_url: String,
    payer_path: String,
    admin_path: String,
    timelock_program: Pubkey,
}

fn load_cfg(client_config: &String) -> Result<ClientConfig> {
    let mut config = Ini::new();
    let _map = config.load(client_config).unwrap();
    let http_url = config.get("Global", "http_url").unwrap();
    if http_url.is_empty() {
        panic!("http_url must not be empty");
    }
    let ws_url = config.get("Global", "ws_url").unwrap();
    if ws_url.is_empty() {
        panic!("ws_url must not be empty");
    }
    let payer_path = config.get("Global", "payer_path").unwrap();
    if payer_path.is_empty() {
        panic!("payer_path must not be empty");
    }
    let admin_path = config.get("Global", "admin_path").unwrap();
    if admin_path.is_empty() {
        panic!("admin_path must not be empty");
    }

    let timelock_program_str = config.get("Global", "timelock_program").unwrap();
    if timelock_program_str.is_empty() {
        panic!("timelock_program must not be empty");
    }
    let timelock_program = Pubkey::from_str(&timelock_program_str).unwrap();

    Ok(ClientConfig {
        http_url,
        ws_url,
        payer_path,
        admin_path,
        timelock_program,
    })
}

fn read_keypair_file(s: &str) -> Result<Keypair> {
    solana_sdk::signature::read_keypair_file(s)
        .map_err(|_| format_err!("failed to read keypair from {}", s))
}

#[derive(Debug, Parser)]
pub struct Opts {
    #[clap(subcommand)]
    pub command: TimelockCommands,
}

#[derive(Debug, Parser)]
pub enum TimelockCommands {
    Initialize {
        #[arg(long)]
        mint: Pubkey,
    },
    Lock {
        #[arg(long)]
        amount: u64,
        #[arg(long)]
        duration: u64,
    },
    Extend {
        #[arg(long)]
        lock_id: u64,
        #[arg(long)]
        additional_duration: u64,
    },
    Claim {
        #[arg(long)]
        lock_id: u64,
    },
    LockHistory {
        #[arg(long)]
        owner: Option<Pubkey>,
        #[arg(long, default_value_t = 0)]
        offset: u64,
        #[arg(long, default_value_t = u64::MAX)]
        limit: u64,
    },
    ClaimHistory {
        #[arg(long)]
        owner: Option<Pubkey>,
        #[arg(long, default_value_t = 0)]
        offset: u64,
        #[arg(long, default_value_t = u64::MAX)]
        limit: u64,
    },
    Claimable {
        #[arg(long)]
        owner: Option<Pubkey>,
        #[arg(long)]
        lock_id: u64,
    },
}

fn main() -> Result<()> {
    let client_config = "client_config.ini";
    let cli_config = load_cfg(&client_config.to_string()).unwrap();
    // cluster params.
    let payer = read_keypair_file(&cli_config.payer_path)?;
    // solana rpc client
    let rpc_client = RpcClient::new(cli_config.http_url.to_string());

    // anchor client.
    let anchor_config = cli_config.clone();
    let url = Cluster::Custom(anchor_config.http_url, anchor_config.ws_url);
    let wallet = read_keypair_file(&cli_config.payer_path)?;
    let anchor_client = Client::new(url, Rc::new(wallet));
    let program = anchor_client.program(cli_config.timelock_program)?;

    let opts = Opts::parse();
    match opts.command {
        TimelockCommands::Initialize { mint } => {
            let admin = read_keypair_file(&cli_config.admin_path)?;
            let mut instructions = Vec::new();
            let initialize_instr = initialize_instr(&cli_config, mint)?;
            instructions.extend(initialize_instr);
            let signers = vec![&admin];
            let recent_hash = rpc_client.get_latest_blockhash()?;
            let txn = Transaction::new_signed_with_payer(
                &instructions,
                Some(&admin.pubkey()),
                &signers,
                recent_hash,
            );
            let signature = send_txn(&rpc_client, &txn, true)?;
            println!("{}", signature);
        }
        TimelockCommands::Lock { amount, duration } => {
            let (ledger_config_key, _) = Pubkey::find_program_address(
                &[LEDGER_CONFIG_SEED.as_bytes()],
                &program.id(),
            );
            let ledger_config: LedgerConfig = program.account(ledger_config_key)?;
            let owner_token = anchor_spl::associated_token::get_associated_token_address(
                &payer.pubkey(),
                &ledger_config.token_mint,
            );
            let user_locker = user_locker_key(&cli_config, &payer.pubkey());
            let mut instructions = Vec::new();
            let lock_instr = lock_instr(
                &cli_config,
                ledger_config_key,
                ledger_config.token_mint,
                owner_token,
                ledger_config.vault,
                user_locker,
                amount,
                duration,
            )?;
            instructions.extend(lock_instr);
            let signers = vec![&payer];
            let recent_hash = rpc_client.get_latest_blockhash()?;
            let txn = Transaction::new_signed_with_payer(
                &instructions,
                Some(&payer.pubkey()),
                &signers,
                recent_hash,
            );
            let signature = send_txn(&rpc_client, &txn, true)?;
            println!("{}", signature);
        }
        TimelockCommands::Extend {
            lock_id,
            additional_duration,
        } => {
            let user_locker = user_locker_key(&cli_config, &payer.pubkey());
            let mut instructions = Vec::new();
            let extend_instr =
                extend_lock_instr(&cli_config, user_locker, lock_id, additional_duration)?;
            instructions.extend(extend_instr);
            let signers = vec![&payer];
            let recent_hash = rpc_client.get_latest_blockhash()?;
            let txn = Transaction::new_signed_with_payer(
                &instructions,
                Some(&payer.pubkey()),
                &signers,
                recent_hash,
            );
            let signature = send_txn(&rpc_client, &txn, true)?;
            println!("{}", signature);
        }
        TimelockCommands::Claim { lock_id } => {
            let (ledger_config_key, _) = Pubkey::find_program_address(
                &[LEDGER_CONFIG_SEED.as_bytes()],
                &program.id(),
            );
            let ledger_config: LedgerConfig = program.account(ledger_config_key)?;
            let owner_token = anchor_spl::associated_token::get_associated_token_address(
                &payer.pubkey(),
                &ledger_config.token_mint,
            );
            let user_locker = user_locker_key(&cli_config, &payer.pubkey());
            let mut instructions = Vec::new();
            let claim_instr = claim_instr(
                &cli_config,
                ledger_config_key,
                ledger_config.token_mint,
                owner_token,
                ledger_config.vault,
                user_locker,
                lock_id,
            )?;
            instructions.extend(claim_instr);
            let signers = vec![&payer];
            let recent_hash = rpc_client.get_latest_blockhash()?;
            let txn = Transaction::new_signed_with_payer(
                &instructions,
                Some(&payer.pubkey()),
                &signers,
                recent_hash,
            );
            let signature = send_txn(&rpc_client, &txn, true)?;
            println!("{}", signature);
        }
        TimelockCommands::LockHistory {
            owner,
            offset,
            limit,
        } => {
            let owner = owner.unwrap_or_else(|| payer.pubkey());
            let user_locker = user_locker_key(&cli_config, &owner);
            let locker: UserLocker = program.account(user_locker)?;
            for record in locker.lock_history_page(offset, limit) {
                println!("{:?}", record);
            }
        }
        TimelockCommands::ClaimHistory {
            owner,
            offset,
            limit,
        } => {
            let owner = owner.unwrap_or_else(|| payer.pubkey());
            let user_locker = user_locker_key(&cli_config, &owner);
            let locker: UserLocker = program.account(user_locker)?;
            for record in locker.claim_history_page(offset, limit) {
                println!("{:?}", record);
            }
        }
        TimelockCommands::Claimable { owner, lock_id } => {
            let owner = owner.unwrap_or_else(|| payer.pubkey());
            let user_locker = user_locker_key(&cli_config, &owner);
            let locker: UserLocker = program.account(user_locker)?;
            let now = SystemTime::now().duration_since(UNIX_EPOCH)?.as_secs();
            println!("{}", locker.claimable(lock_id, now));
        }
    }
    Ok(())
}
