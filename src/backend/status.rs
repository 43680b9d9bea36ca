#![cfg(feature = "server")]
use crate::shared::types::Health;
use once_cell::sync::Lazy;
use reqwest::{Client, StatusCode};
use std::env;

/// The stub endpoint the dashboard shipped with; overridable via env.
const DEFAULT_STATUS_URL: &str = "https://incrementify.free.beeceptor.com/status";

static CLIENT: Lazy<Client> = Lazy::new(|| {
    Client::builder()
        .connect_timeout(std::time::Duration::from_secs(2))
        .timeout(std::time::Duration::from_secs(10))
        .build()
        .expect("client")
});

pub fn status_url() -> String {
    env::var("INCREMENTIFY_STATUS_URL").unwrap_or_else(|_| DEFAULT_STATUS_URL.to_string())
}

pub fn health_from_status(status: StatusCode) -> Health {
    if status.is_success() {
        Health::Healthy
    } else {
        Health::Unhealthy
    }
}

/// One best-effort GET against the status endpoint. No retry, no backoff:
/// every failure mode folds into `Unhealthy` rather than escaping to the
/// rendering layer.
pub async fn probe() -> Health {
    let url = status_url();
    match CLIENT.get(&url).send().await {
        Ok(res) => {
            let health = health_from_status(res.status());
            if health == Health::Unhealthy {
                eprintln!("[status] GET {} returned {}", url, res.status());
            }
            health
        }
        Err(e) => {
            eprintln!("[status] GET {} failed: {}", url, e);
            if e.is_timeout() {
                eprintln!("[status] hint: request timed out (client timeout ~10s)");
            }
            if e.is_connect() {
                eprintln!(
                    "[status] hint: connection failed (DNS/route/refused/TLS). Check INCREMENTIFY_STATUS_URL"
                );
            }
            Health::Unhealthy
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn two_xx_is_healthy() {
        assert_eq!(health_from_status(StatusCode::OK), Health::Healthy);
        assert_eq!(health_from_status(StatusCode::NO_CONTENT), Health::Healthy);
    }

    #[test]
    fn everything_else_is_unhealthy() {
        for code in [
            StatusCode::MOVED_PERMANENTLY,
            StatusCode::BAD_REQUEST,
            StatusCode::NOT_FOUND,
            StatusCode::INTERNAL_SERVER_ERROR,
            StatusCode::BAD_GATEWAY,
        ] {
            assert_eq!(health_from_status(code), Health::Unhealthy);
        }
    }

    #[tokio::test]
    async fn failed_probe_degrades_to_unhealthy() {
        // Unroutable per RFC 5737; the probe must swallow the transport error.
        std::env::set_var("INCREMENTIFY_STATUS_URL", "http://192.0.2.1:9/status");
        assert_eq!(probe().await, Health::Unhealthy);
    }
}
