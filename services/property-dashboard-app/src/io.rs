//! HTTP client abstraction for testability

use async_trait::async_trait;

/// HTTP response from a request
#[derive(Debug, Clone)]
pub struct HttpResponse {
    pub status: u16,
    pub body: String,
}

impl HttpResponse {
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }
}

/// Abstraction over HTTP client for dependency injection
///
/// Browser fetch futures are not `Send`, so neither are these.
#[async_trait(?Send)]
#[cfg_attr(test, mockall::automock)]
pub trait HttpClient: Send + Sync {
    /// Send a GET request to the given URL
    async fn get(&self, url: &str) -> crate::Result<HttpResponse>;
}

/// Native HTTP client using reqwest
#[cfg(not(target_arch = "wasm32"))]
#[derive(Default)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

#[cfg(not(target_arch = "wasm32"))]
#[async_trait(?Send)]
impl HttpClient for ReqwestHttpClient {
    async fn get(&self, url: &str) -> crate::Result<HttpResponse> {
        tracing::debug!("GET {}", url);
        let response = self
            .client
            .get(url)
            .send()
            .await
            .map_err(|e| crate::DashboardError::Http(format!("GET {} failed: {}", url, e)))?;

        let status = response.status().as_u16();
        let body = response
            .text()
            .await
            .map_err(|e| crate::DashboardError::Http(format!("Reading response body: {}", e)))?;

        tracing::debug!("GET {} -> {} ({} bytes)", url, status, body.len());
        Ok(HttpResponse { status, body })
    }
}

/// Browser HTTP client using the fetch API
#[cfg(all(feature = "csr", target_arch = "wasm32"))]
#[derive(Default)]
pub struct BrowserHttpClient;

#[cfg(all(feature = "csr", target_arch = "wasm32"))]
#[async_trait(?Send)]
impl HttpClient for BrowserHttpClient {
    async fn get(&self, url: &str) -> crate::Result<HttpResponse> {
        tracing::debug!("GET {}", url);
        let response = gloo_net::http::Request::get(url)
            .send()
            .await
            .map_err(|e| crate::DashboardError::Http(format!("GET {} failed: {}", url, e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| crate::DashboardError::Http(format!("Reading response body: {}", e)))?;

        tracing::debug!("GET {} -> {} ({} bytes)", url, status, body.len());
        Ok(HttpResponse { status, body })
    }
}

/// The HTTP client for the current target
pub fn default_http_client() -> std::sync::Arc<dyn HttpClient> {
    #[cfg(all(feature = "csr", target_arch = "wasm32"))]
    {
        std::sync::Arc::new(BrowserHttpClient)
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        std::sync::Arc::new(ReqwestHttpClient::default())
    }
}
