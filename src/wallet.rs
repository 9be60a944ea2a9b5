use alloy::network::EthereumWallet;
use alloy::primitives::Address;
use alloy::providers::{Provider, ProviderBuilder};
use alloy::signers::local::PrivateKeySigner;
use anyhow::{Context, Result};
use serde::Deserialize;
use url::Url;

/// One wallet as it appears in the wallet file. The key is accepted under
/// both the camelCase and snake_case spelling.
#[derive(Debug, Clone, Deserialize)]
pub struct WalletRecord {
    pub address: String,
    #[serde(alias = "privateKey")]
    pub private_key: String,
}

pub fn parse_wallets(raw: &str) -> Result<Vec<WalletRecord>> {
    let wallets: Vec<WalletRecord> =
        serde_json::from_str(raw).context("Wallet file is not a JSON array of records")?;
    Ok(wallets)
}

/// Bind a wallet's private key to the RPC endpoint. Returns the signer
/// address derived from the key (the on-chain identity used for balance
/// reads) together with a provider that signs and fills transactions.
pub fn bind_signer(rpc_url: &Url, record: &WalletRecord) -> Result<(Address, impl Provider + Clone)> {
    let signer: PrivateKeySigner = record
        .private_key
        .trim()
        .parse()
        .with_context(|| format!("Invalid private key for wallet {}", record.address))?;
    let owner = signer.address();

    let wallet = EthereumWallet::from(signer);
    let provider = ProviderBuilder::new()
        .wallet(wallet)
        .connect_http(rpc_url.clone());

    Ok((owner, provider))
}
