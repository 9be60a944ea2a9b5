use rand::seq::SliceRandom;
use rand::Rng;

use crate::constants::{
    FAUCET_ENDPOINTS, FAUCET_ORIGIN, FAUCET_REFERER, FAUCET_TIMEOUT, FAUCET_USER_AGENT,
};

/// What one faucet endpoint did with a claim. `Ok` carries the verbatim
/// response body, `Err` the error payload or transport message.
#[derive(Debug, Clone)]
pub struct FaucetOutcome {
    pub endpoint: &'static str,
    pub result: Result<String, String>,
}

/// Issues the drip requests. Holds only the proxy pool; endpoints and
/// headers are fixed.
pub struct FaucetClient {
    proxies: Vec<String>,
}

impl FaucetClient {
    pub fn new(proxies: Vec<String>) -> Self {
        Self { proxies }
    }

    /// Claim every faucet once, in order. A failing endpoint never stops
    /// the ones after it, and nothing here is retried.
    pub async fn claim_all(&self, address: &str, rng: &mut impl Rng) -> Vec<FaucetOutcome> {
        // Proxy picks are drawn up front so the RNG borrow ends before the
        // first await.
        let picks = self.proxy_plan(rng);

        let mut outcomes = Vec::with_capacity(FAUCET_ENDPOINTS.len());
        for (endpoint, proxy) in FAUCET_ENDPOINTS.into_iter().zip(picks) {
            let result = request_drip(endpoint, address, proxy.as_deref()).await;
            outcomes.push(FaucetOutcome { endpoint, result });
        }
        outcomes
    }

    /// One uniformly random proxy per endpoint, `None` everywhere when the
    /// pool is empty.
    fn proxy_plan(&self, rng: &mut impl Rng) -> Vec<Option<String>> {
        FAUCET_ENDPOINTS
            .iter()
            .map(|_| self.proxies.choose(&mut *rng).cloned())
            .collect()
    }
}

async fn request_drip(
    endpoint: &str,
    address: &str,
    proxy: Option<&str>,
) -> Result<String, String> {
    // The client is built per call: the proxy rotates with every request.
    let mut builder = reqwest::Client::builder().timeout(FAUCET_TIMEOUT);
    if let Some(proxy) = proxy {
        builder = builder.proxy(reqwest::Proxy::all(proxy).map_err(|e| e.to_string())?);
    }
    let client = builder.build().map_err(|e| e.to_string())?;

    let response = client
        .post(endpoint)
        .header("Origin", FAUCET_ORIGIN)
        .header("Referer", FAUCET_REFERER)
        .header("User-Agent", FAUCET_USER_AGENT)
        .json(&serde_json::json!({ "address": address }))
        .send()
        .await
        .map_err(|e| e.to_string())?;

    let status = response.status();
    let body = response.text().await.map_err(|e| e.to_string())?;
    log::debug!("faucet {} -> {} {}", endpoint, status, body);

    if status.is_success() {
        Ok(body)
    } else {
        Err(format!("HTTP {}: {}", status, body))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn empty_pool_means_direct_connections() {
        let client = FaucetClient::new(vec![]);
        let mut rng = StdRng::seed_from_u64(7);
        let plan = client.proxy_plan(&mut rng);
        assert_eq!(plan.len(), FAUCET_ENDPOINTS.len());
        assert!(plan.iter().all(Option::is_none));
    }

    #[test]
    fn picks_come_from_the_pool_and_are_seed_deterministic() {
        let pool = vec![
            "http://a:8080".to_string(),
            "http://b:8080".to_string(),
            "http://c:8080".to_string(),
        ];
        let client = FaucetClient::new(pool.clone());

        let mut rng = StdRng::seed_from_u64(42);
        let first = client.proxy_plan(&mut rng);
        assert_eq!(first.len(), FAUCET_ENDPOINTS.len());
        for pick in &first {
            let pick = pick.as_ref().expect("non-empty pool always yields a pick");
            assert!(pool.contains(pick));
        }

        let mut rng = StdRng::seed_from_u64(42);
        assert_eq!(client.proxy_plan(&mut rng), first);
    }
}
