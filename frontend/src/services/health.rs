//! Liveness probe for the model backend.

use gloo_net::http::Request;

use crate::config::AppConfig;
use crate::types::BackendStatus;

/// `GET {backend_base_url}/`, any 2xx counts as online.
pub async fn check_backend(config: &AppConfig) -> BackendStatus {
    let url = config.health_url();
    match Request::get(&url).send().await {
        Ok(response) => status_from_code(response.status()),
        Err(e) => {
            log::warn!("Backend at {} is unreachable: {}", url, e);
            BackendStatus::Offline
        }
    }
}

fn status_from_code(status: u16) -> BackendStatus {
    if (200..300).contains(&status) {
        BackendStatus::Online
    } else {
        log::warn!("Backend health check returned status {}", status);
        BackendStatus::Offline
    }
}
