use std::io::{self, Write};
use std::time::Duration;

use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::chain::{self, display_units, MintOutcome, StakeOutcome};
use crate::config::Config;
use crate::constants::{StakeTarget, COOLDOWN_SECS, STAKE_TARGETS, WALLET_DELAY_SECS};
use crate::faucet::{FaucetClient, FaucetOutcome};
use crate::wallet::{self, WalletRecord};

/// The three per-wallet operations, behind a seam so the run loop can be
/// exercised without a network or a chain.
pub trait WalletOps {
    async fn claim_faucets(&self, address: &str) -> Vec<FaucetOutcome>;
    async fn mint_ausd(&self, wallet: &WalletRecord) -> MintOutcome;
    async fn stake(&self, wallet: &WalletRecord, target: &StakeTarget) -> StakeOutcome;
}

/// Timer seam for the inter-wallet delay and the cooldown ticks.
pub trait Clock {
    async fn sleep(&self, duration: Duration);
}

pub struct TokioClock;

impl Clock for TokioClock {
    async fn sleep(&self, duration: Duration) {
        tokio::time::sleep(duration).await;
    }
}

/// Production operations: real faucet HTTP plus a signer bound to the RPC
/// endpoint for each call.
pub struct LiveOps {
    rpc_url: url::Url,
    faucet: FaucetClient,
}

impl LiveOps {
    pub fn new(config: &Config) -> Self {
        Self {
            rpc_url: config.rpc_url.clone(),
            faucet: FaucetClient::new(config.proxies.clone()),
        }
    }
}

impl WalletOps for LiveOps {
    async fn claim_faucets(&self, address: &str) -> Vec<FaucetOutcome> {
        let mut rng = StdRng::from_entropy();
        self.faucet.claim_all(address, &mut rng).await
    }

    async fn mint_ausd(&self, wallet: &WalletRecord) -> MintOutcome {
        match wallet::bind_signer(&self.rpc_url, wallet) {
            Ok((owner, provider)) => chain::mint_ausd(owner, &provider).await,
            Err(err) => MintOutcome::Failed {
                reason: format!("{err:#}"),
            },
        }
    }

    async fn stake(&self, wallet: &WalletRecord, target: &StakeTarget) -> StakeOutcome {
        match wallet::bind_signer(&self.rpc_url, wallet) {
            Ok((owner, provider)) => chain::stake(owner, &provider, target).await,
            Err(err) => StakeOutcome::Failed {
                reason: format!("{err:#}"),
            },
        }
    }
}

/// Drives the whole bot: one pass over all wallets, then a counted-down
/// cooldown, forever.
pub struct Runner<O: WalletOps, C: Clock> {
    wallets: Vec<WalletRecord>,
    ops: O,
    clock: C,
    wallet_delay: Duration,
    cooldown_ticks: u64,
}

impl<O: WalletOps, C: Clock> Runner<O, C> {
    pub fn new(wallets: Vec<WalletRecord>, ops: O, clock: C) -> Self {
        Self {
            wallets,
            ops,
            clock,
            wallet_delay: Duration::from_secs(WALLET_DELAY_SECS),
            cooldown_ticks: COOLDOWN_SECS,
        }
    }

    #[cfg(test)]
    fn with_timing(
        wallets: Vec<WalletRecord>,
        ops: O,
        clock: C,
        wallet_delay: Duration,
        cooldown_ticks: u64,
    ) -> Self {
        Self {
            wallets,
            ops,
            clock,
            wallet_delay,
            cooldown_ticks,
        }
    }

    pub async fn run(&self) {
        loop {
            self.run_pass().await;
            self.cooldown().await;
        }
    }

    /// One pass over every wallet, with the fixed delay between wallets
    /// and none after the last.
    pub async fn run_pass(&self) {
        for (i, wallet) in self.wallets.iter().enumerate() {
            self.process_wallet(wallet).await;
            if i + 1 < self.wallets.len() {
                println!(
                    "⏳ Waiting {} seconds before the next wallet...",
                    self.wallet_delay.as_secs()
                );
                self.clock.sleep(self.wallet_delay).await;
            }
        }
    }

    /// Faucets, then mint, then the three stakes, in that order no matter
    /// what each stage reports. All operator output happens here.
    pub async fn process_wallet(&self, wallet: &WalletRecord) {
        println!("\n🚀 Processing wallet: {}", wallet.address);

        println!("💧 Claiming faucets for {}", wallet.address);
        for outcome in self.ops.claim_faucets(&wallet.address).await {
            match outcome.result {
                Ok(body) => println!("✅ Faucet OK: {} {}", outcome.endpoint, body),
                Err(err) => eprintln!("❌ Faucet fail {}: {}", outcome.endpoint, err),
            }
        }

        match self.ops.mint_ausd(wallet).await {
            MintOutcome::Minted {
                balance,
                approve_hash,
                mint_hash,
            } => {
                println!("🔎 ATH balance: {} ATH", display_units(balance));
                println!("✅ Approved ATH: {}", approve_hash);
                println!("✅ Minted AUSD: {}", mint_hash);
            }
            MintOutcome::InsufficientBalance { balance } => {
                println!("🔎 ATH balance: {} ATH", display_units(balance));
                println!("❌ Not enough ATH to mint, skip");
            }
            MintOutcome::Failed { reason } => eprintln!("❌ Mint error: {}", reason),
        }

        for target in &STAKE_TARGETS {
            match self.ops.stake(wallet, target).await {
                StakeOutcome::Staked {
                    amount,
                    approve_hash,
                    stake_hash,
                } => {
                    println!(
                        "✅ Approved {}: {} ({})",
                        target.name,
                        approve_hash,
                        display_units(amount)
                    );
                    println!("✅ Staked {}: {}", target.name, stake_hash);
                }
                StakeOutcome::EmptyBalance => {
                    println!("❌ {} balance = 0, skip", target.name)
                }
                StakeOutcome::Failed { reason } => {
                    eprintln!("❌ {} stake error: {}", target.name, reason)
                }
            }
        }

        println!("✅ Done for {}", wallet.address);
    }

    /// Count the cooldown away one second at a time, overwriting a single
    /// status line.
    pub async fn cooldown(&self) {
        println!(
            "🕛 Pass complete. Next pass in {} seconds.\n",
            self.cooldown_ticks
        );
        for remaining in (1..=self.cooldown_ticks).rev() {
            print!("⏳ Restarting in {}s...\r", remaining);
            let _ = io::stdout().flush();
            self.clock.sleep(Duration::from_secs(1)).await;
        }
        println!();
    }
}
