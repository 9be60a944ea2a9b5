use alloy::primitives::{address, Address};
use std::time::Duration;

// TOKENS
pub const ATH_TOKEN: Address = address!("1428444Eacdc0Fd115dd4318FcE65B61Cd1ef399");
pub const USDE_TOKEN: Address = address!("f4BE938070f59764C85fAcE374F92A4670ff3877");
pub const LVLUSD_TOKEN: Address = address!("8802b7bcF8EedCc9E1bA6C20E139bEe89dd98E83");

// CONTRACTS
pub const AUSD_MINTER: Address = address!("2cFDeE1d5f04dD235AEA47E1aD2fB66e3A61C13e");
pub const AUSD_STAKING: Address = address!("3988053b7c748023a1aE19a8ED4c1Bf217932bDB");
pub const USDE_STAKING: Address = address!("3988053b7c748023a1aE19a8ED4c1Bf217932bDB");
pub const LVLUSD_STAKING: Address = address!("5De3fBd40D4c3892914c3b67b5B529D776A1483A");

/// One stake operation: which ERC20 balance to drain and into which pool.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StakeTarget {
    pub name: &'static str,
    pub token: Address,
    pub pool: Address,
}

// The AUSD pool doubles as the token it pays out; its balance is read from
// the pool address itself.
pub const STAKE_TARGETS: [StakeTarget; 3] = [
    StakeTarget { name: "AUSD", token: AUSD_STAKING, pool: AUSD_STAKING },
    StakeTarget { name: "USDe", token: USDE_TOKEN, pool: USDE_STAKING },
    StakeTarget { name: "LVLUSD", token: LVLUSD_TOKEN, pool: LVLUSD_STAKING },
];

// FAUCETS
pub const FAUCET_ENDPOINTS: [&str; 3] = [
    "https://app.x-network.io/maitrix-faucet/faucet",
    "https://app.x-network.io/maitrix-usde/faucet",
    "https://app.x-network.io/maitrix-lvl/faucet",
];

pub const FAUCET_ORIGIN: &str = "https://app.testnet.themaitrix.ai";
pub const FAUCET_REFERER: &str = "https://app.testnet.themaitrix.ai/";
pub const FAUCET_USER_AGENT: &str = "Mozilla/5.0";
pub const FAUCET_TIMEOUT: Duration = Duration::from_secs(10);

// TIMING
pub const WALLET_DELAY_SECS: u64 = 10;
pub const COOLDOWN_SECS: u64 = 24 * 60 * 60;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn stake_targets_keep_the_deployed_order() {
        let names: Vec<_> = STAKE_TARGETS.iter().map(|t| t.name).collect();
        assert_eq!(names, vec!["AUSD", "USDe", "LVLUSD"]);
    }

    // The deployment really does reuse addresses: the AUSD pool is its own
    // stake token, and AUSD and USDe share a pool contract.
    #[test]
    fn address_aliasing_is_intentional() {
        assert_eq!(STAKE_TARGETS[0].token, STAKE_TARGETS[0].pool);
        assert_eq!(AUSD_STAKING, USDE_STAKING);
        assert_ne!(USDE_TOKEN, USDE_STAKING);
    }
}
