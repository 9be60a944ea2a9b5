mod chain;
mod config;
mod constants;
mod faucet;
mod runner;
mod wallet;

use anyhow::{Context, Result};
use clap::Parser;

use crate::config::Config;
use crate::runner::{LiveOps, Runner, TokioClock};

#[derive(Parser, Debug)]
#[clap(author, version, about = "Maitrix testnet faucet & staking automation")]
struct Args {
    /// Path to the wallet file (JSON array of address/private-key records)
    #[clap(short, long, default_value = "wallets.json")]
    wallets: String,

    /// Path to the proxy list (one URL per line)
    #[clap(short, long, default_value = "proxy.txt")]
    proxies: String,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();
    env_logger::init();

    let args = Args::parse();

    let rpc_url = std::env::var("RPC_URL").context("RPC_URL must be set")?;
    let config = Config::load(&args.wallets, &args.proxies, &rpc_url)?;

    println!("Using RPC endpoint: {}", config.rpc_url);
    println!(
        "Loaded {} wallet(s), {} proxies",
        config.wallets.len(),
        config.proxies.len()
    );

    let ops = LiveOps::new(&config);
    let runner = Runner::new(config.wallets, ops, TokioClock);
    runner.run().await;

    Ok(())
}
