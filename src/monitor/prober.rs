use async_trait::async_trait;
use reqwest::redirect::Policy;
use tokio::time::{Duration, Instant};

use crate::config::Config;
use crate::core::constants::error_messages;
use crate::core::error::Result;
use crate::core::types::ProbeResult;

/// Seam for issuing a single probe, so schedulers can be exercised
/// without a network.
#[async_trait]
pub trait Probe: Send + Sync {
    /// Perform exactly one HTTP check against `url`, bounded by `timeout`.
    ///
    /// All outcomes are encoded in the returned value: this call never
    /// fails and never retries.
    async fn check(&self, url: &str, timeout: Duration) -> ProbeResult;
}

/// Probe implementation backed by a shared reqwest client.
///
/// Redirects are followed; latency is measured from dispatch to the final
/// response headers.
#[derive(Debug, Clone)]
pub struct HttpProber {
    client: reqwest::Client,
    use_head: bool,
}

impl HttpProber {
    /// Build a prober from configuration, mirroring the client settings the
    /// rest of the stack expects (pooling, keepalive, proxy, TLS).
    pub fn from_config(config: &Config) -> Result<Self> {
        let redirect_policy = Policy::limited(10);
        let user_agent = config.user_agent.as_deref().unwrap_or(concat!(
            env!("CARGO_PKG_NAME"),
            "/",
            env!("CARGO_PKG_VERSION")
        ));

        let mut client_builder = reqwest::Client::builder()
            .redirect(redirect_policy)
            .user_agent(user_agent)
            .pool_max_idle_per_host(config.batch_size_or_default().min(20))
            .pool_idle_timeout(Duration::from_secs(30))
            .tcp_keepalive(Duration::from_secs(60));

        // Timeout is applied per request so one prober can serve sweeps
        // with different timeout settings.

        if config.skip_ssl_verification.unwrap_or(false) {
            client_builder = client_builder.danger_accept_invalid_certs(true);
        }

        if let Some(ref proxy_url) = config.proxy
            && let Ok(proxy) = reqwest::Proxy::all(proxy_url)
        {
            client_builder = client_builder.proxy(proxy);
        }

        let client = client_builder.build()?;

        Ok(Self {
            client,
            use_head: config.use_head_requests.unwrap_or(false),
        })
    }

    /// Prober around an existing client, GET requests only
    pub fn with_client(client: reqwest::Client) -> Self {
        Self {
            client,
            use_head: false,
        }
    }
}

#[async_trait]
impl Probe for HttpProber {
    async fn check(&self, url: &str, timeout: Duration) -> ProbeResult {
        let request = if self.use_head {
            self.client.head(url)
        } else {
            self.client.get(url)
        };

        let started = Instant::now();
        match request.timeout(timeout).send().await {
            Ok(response) => ProbeResult::response(
                url,
                response.status().as_u16(),
                started.elapsed().as_secs_f64(),
            ),
            Err(err) if err.is_timeout() => ProbeResult::failure(url, error_messages::TIMEOUT),
            Err(err) => {
                // The top-level reqwest error is wordy; the source carries
                // the actual DNS/connect/TLS message.
                let description = std::error::Error::source(&err)
                    .map(|e| e.to_string())
                    .unwrap_or_else(|| err.to_string());
                ProbeResult::failure(url, &description)
            }
        }
    }
}
