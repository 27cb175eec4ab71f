//! ledgerkeep: command-line access to a Ledgerkeep backend
//!
//! Usage:
//!   ledgerkeep accounts                                  List accounts
//!   ledgerkeep transactions [--limit N] [--account ID]   List transactions
//!   ledgerkeep budget [--from TS] [--to TS]              Show budget statistics
//!   ledgerkeep balances                                  Show balance history

use ledgerkeep::{BudgetQuery, LedgerClient, ListTransactionsQuery};
use serde::Serialize;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args: Vec<String> = std::env::args().collect();
    if args.len() < 2 {
        print_usage();
        std::process::exit(1);
    }

    let result = match args[1].as_str() {
        "accounts" => cmd_accounts().await,
        "transactions" => cmd_transactions(&args[2..]).await,
        "budget" => cmd_budget(&args[2..]).await,
        "balances" => cmd_balances().await,
        "version" | "--version" | "-V" => {
            println!("ledgerkeep {}", env!("CARGO_PKG_VERSION"));
            Ok(())
        }
        "help" | "--help" | "-h" => {
            print_usage();
            Ok(())
        }
        other => {
            eprintln!("Unknown command: {other}");
            eprintln!();
            print_usage();
            std::process::exit(1);
        }
    };

    if let Err(e) = result {
        eprintln!("{e}");
        std::process::exit(1);
    }
}

fn print_usage() {
    println!(
        r#"ledgerkeep: Ledgerkeep command-line client

USAGE:
    ledgerkeep <COMMAND> [OPTIONS]

COMMANDS:
    accounts                              List accounts
    transactions [--limit N] [--account ID]
                                          List transactions, newest first
    budget [--from TS] [--to TS]          Show budget statistics
    balances                              Show balance history
    version                               Show version information
    help                                  Show this help message

ENVIRONMENT:
    LEDGERKEEP_USER                       Backend username
    LEDGERKEEP_PASSWORD                   Backend password
    LEDGERKEEP_CONFIG                     Config file path or URL
    RUST_LOG                              Log filter (e.g. ledgerkeep=debug)"#
    );
}

fn flag_value<'a>(args: &'a [String], flag: &str) -> Option<&'a str> {
    args.iter()
        .position(|a| a == flag)
        .and_then(|i| args.get(i + 1))
        .map(String::as_str)
}

async fn connect() -> ledgerkeep::Result<LedgerClient> {
    let client = LedgerClient::builder().build()?;
    let user = std::env::var("LEDGERKEEP_USER").unwrap_or_default();
    let pass = std::env::var("LEDGERKEEP_PASSWORD").unwrap_or_default();
    client.login(&user, &pass).await?;
    Ok(client)
}

fn print_json<T: Serialize>(value: &T) -> ledgerkeep::Result<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn cmd_accounts() -> ledgerkeep::Result<()> {
    let client = connect().await?;
    print_json(&client.list_accounts().await?)
}

async fn cmd_transactions(args: &[String]) -> ledgerkeep::Result<()> {
    let mut query = ListTransactionsQuery::default();
    if let Some(limit) = flag_value(args, "--limit").and_then(|v| v.parse::<u32>().ok()) {
        query = query.with_limit(limit);
    }
    if let Some(account) = flag_value(args, "--account") {
        query = query.with_account(account);
    }

    let client = connect().await?;
    let page = client.list_transactions(&query).await?;
    eprintln!("{} of {} transactions", page.list.len(), page.count);
    print_json(&page.list)
}

async fn cmd_budget(args: &[String]) -> ledgerkeep::Result<()> {
    let query = BudgetQuery {
        start_time: flag_value(args, "--from").and_then(|v| v.parse().ok()),
        end_time: flag_value(args, "--to").and_then(|v| v.parse().ok()),
    };
    let client = connect().await?;
    print_json(&client.get_budget(&query).await?)
}

async fn cmd_balances() -> ledgerkeep::Result<()> {
    let client = connect().await?;
    print_json(&client.get_balances().await?)
}
