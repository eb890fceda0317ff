//! HTTP transport used to check stream reachability
//!
//! The transport is a trait so the HEAD/GET fallback policy in
//! [`resolve_status`] can be exercised without a network.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::{Client, redirect::Policy};
use tracing::debug;

use crate::errors::{AppError, AppResult, ProbeError, ProbeResult};
use crate::utils::status_code_matcher::{UNREACHABLE_STATUS, needs_get_fallback};
use crate::utils::url::UrlUtils;

/// Maximum redirects followed per request
pub const MAX_REDIRECTS: usize = 10;

/// Minimal HTTP surface needed to check a stream
#[async_trait]
pub trait HttpProbe: Send + Sync {
    /// Issue a HEAD request and return the final status code
    async fn head(&self, url: &str) -> ProbeResult<u16>;

    /// Issue a GET request and return the final status code without
    /// downloading the body
    async fn get(&self, url: &str) -> ProbeResult<u16>;
}

/// Production transport backed by reqwest
pub struct ReqwestProbe {
    client: Client,
}

impl ReqwestProbe {
    pub fn new(timeout: Duration, user_agent: &str) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(timeout)
            .redirect(Policy::limited(MAX_REDIRECTS))
            .user_agent(user_agent)
            .build()
            .map_err(|e| AppError::configuration(format!("Failed to create HTTP client: {e}")))?;

        Ok(Self { client })
    }
}

#[async_trait]
impl HttpProbe for ReqwestProbe {
    async fn head(&self, url: &str) -> ProbeResult<u16> {
        let response = self
            .client
            .head(url)
            .send()
            .await
            .map_err(|e| ProbeError::from_reqwest(url, &e))?;
        Ok(response.status().as_u16())
    }

    async fn get(&self, url: &str) -> ProbeResult<u16> {
        // The response is dropped unread; only the status line matters
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| ProbeError::from_reqwest(url, &e))?;
        Ok(response.status().as_u16())
    }
}

/// Resolve the status recorded for `url`
///
/// HEAD first; a HEAD status of 400 or above is retried once with GET and the
/// GET status is final, whatever it is. Any transport error yields `0`.
pub async fn resolve_status<P: HttpProbe + ?Sized>(probe: &P, url: &str) -> u16 {
    let head_status = match probe.head(url).await {
        Ok(status) => status,
        Err(e) => {
            debug!("HEAD failed: {e}");
            return UNREACHABLE_STATUS;
        }
    };

    if !needs_get_fallback(head_status) {
        return head_status;
    }

    debug!(
        "HEAD {} returned {}, retrying with GET",
        UrlUtils::obfuscate_credentials(url),
        head_status
    );
    match probe.get(url).await {
        Ok(status) => status,
        Err(e) => {
            debug!("GET failed: {e}");
            UNREACHABLE_STATUS
        }
    }
}
