use alloy::primitives::utils::format_units;
use alloy::primitives::{Address, TxHash, U256};
use alloy::providers::Provider;
use alloy::sol;
use anyhow::{Context, Result};

use crate::constants::{StakeTarget, ATH_TOKEN, AUSD_MINTER};

sol! {
    #[sol(rpc)]
    interface IERC20 {
        function approve(address spender, uint256 amount) external returns (bool);
        function balanceOf(address owner) external view returns (uint256);
    }

    #[sol(rpc)]
    interface IAusdMinter {
        function mintAUSD(uint256 amount) external;
    }

    #[sol(rpc)]
    interface IStakingPool {
        function stake(uint256 _tokens) external;
    }
}

/// Minting needs at least this much ATH: 50 tokens at 18 decimals.
pub fn mint_amount() -> U256 {
    U256::from(50) * U256::from(10).pow(U256::from(18))
}

/// 18-decimal balance rendered for the status line.
pub fn display_units(amount: U256) -> String {
    format_units(amount, 18).unwrap_or_else(|_| amount.to_string())
}

#[derive(Debug, Clone)]
pub enum MintOutcome {
    Minted {
        balance: U256,
        approve_hash: TxHash,
        mint_hash: TxHash,
    },
    InsufficientBalance {
        balance: U256,
    },
    Failed {
        reason: String,
    },
}

#[derive(Debug, Clone)]
pub enum StakeOutcome {
    Staked {
        amount: U256,
        approve_hash: TxHash,
        stake_hash: TxHash,
    },
    EmptyBalance,
    Failed {
        reason: String,
    },
}

/// Approve 50 ATH to the minter and mint AUSD, waiting out both receipts.
/// Every failure is folded into the outcome; nothing escapes the call.
pub async fn mint_ausd<P: Provider + Clone>(owner: Address, provider: &P) -> MintOutcome {
    match try_mint_ausd(owner, provider).await {
        Ok(outcome) => outcome,
        Err(err) => MintOutcome::Failed {
            reason: format!("{err:#}"),
        },
    }
}

async fn try_mint_ausd<P: Provider + Clone>(owner: Address, provider: &P) -> Result<MintOutcome> {
    let amount = mint_amount();
    let token = IERC20::new(ATH_TOKEN, provider.clone());

    let balance = token
        .balanceOf(owner)
        .call()
        .await
        .context("balanceOf(ATH)")?;
    if balance < amount {
        return Ok(MintOutcome::InsufficientBalance { balance });
    }

    let approve = token
        .approve(AUSD_MINTER, amount)
        .send()
        .await
        .context("approve(ATH)")?
        .get_receipt()
        .await
        .context("approve(ATH) confirmation")?;

    let minter = IAusdMinter::new(AUSD_MINTER, provider.clone());
    let mint = minter
        .mintAUSD(amount)
        .send()
        .await
        .context("mintAUSD")?
        .get_receipt()
        .await
        .context("mintAUSD confirmation")?;

    Ok(MintOutcome::Minted {
        balance,
        approve_hash: approve.transaction_hash,
        mint_hash: mint.transaction_hash,
    })
}

/// Stake the wallet's entire balance of the target token into its pool.
pub async fn stake<P: Provider + Clone>(
    owner: Address,
    provider: &P,
    target: &StakeTarget,
) -> StakeOutcome {
    match try_stake(owner, provider, target).await {
        Ok(outcome) => outcome,
        Err(err) => StakeOutcome::Failed {
            reason: format!("{err:#}"),
        },
    }
}

async fn try_stake<P: Provider + Clone>(
    owner: Address,
    provider: &P,
    target: &StakeTarget,
) -> Result<StakeOutcome> {
    let token = IERC20::new(target.token, provider.clone());

    let balance = token
        .balanceOf(owner)
        .call()
        .await
        .with_context(|| format!("balanceOf({})", target.name))?;
    if balance.is_zero() {
        return Ok(StakeOutcome::EmptyBalance);
    }

    let approve = token
        .approve(target.pool, balance)
        .send()
        .await
        .with_context(|| format!("approve({})", target.name))?
        .get_receipt()
        .await
        .with_context(|| format!("approve({}) confirmation", target.name))?;

    let pool = IStakingPool::new(target.pool, provider.clone());
    let staked = pool
        .stake(balance)
        .send()
        .await
        .with_context(|| format!("stake({})", target.name))?
        .get_receipt()
        .await
        .with_context(|| format!("stake({}) confirmation", target.name))?;

    Ok(StakeOutcome::Staked {
        amount: balance,
        approve_hash: approve.transaction_hash,
        stake_hash: staked.transaction_hash,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mint_amount_is_fifty_tokens_at_18_decimals() {
        assert_eq!(mint_amount(), U256::from(50_000_000_000_000_000_000u128));
    }

    #[test]
    fn display_units_strips_the_decimals() {
        assert_eq!(display_units(mint_amount()), "50.000000000000000000");
        assert_eq!(display_units(U256::ZERO), "0.000000000000000000");
    }
}
