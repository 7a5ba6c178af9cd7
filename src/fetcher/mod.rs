//! HTTP fetching from the fixed listing source

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use thiserror::Error;

use crate::traits::PageSource;

/// URL pattern for the listing pages, with a {page} placeholder.
const URL_TEMPLATE: &str = "https://www.scrapethissite.com/pages/forms/?page_num={page}";

const USER_AGENT: &str = "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36";

/// Why a single listing page could not be fetched.
#[derive(Debug, Error)]
pub enum FetchError {
    /// The server answered with a non-success status.
    #[error("request failed for page {page}: {status}")]
    RequestFailed { page: u32, status: StatusCode },
    /// The request or body read failed at the transport level.
    #[error("transport error for page {page}: {source}")]
    Transport {
        page: u32,
        #[source]
        source: reqwest::Error,
    },
}

/// `PageSource` backed by reqwest.
pub struct HttpPageSource {
    client: Client,
}

impl HttpPageSource {
    pub fn new() -> anyhow::Result<Self> {
        let client = Client::builder().user_agent(USER_AGENT).build()?;
        Ok(Self { client })
    }

    fn page_url(page: u32) -> String {
        URL_TEMPLATE.replace("{page}", &page.to_string())
    }
}

#[async_trait]
impl PageSource for HttpPageSource {
    async fn fetch_page(&self, page: u32) -> Result<Vec<u8>, FetchError> {
        let response = self
            .client
            .get(Self::page_url(page))
            .send()
            .await
            .map_err(|source| FetchError::Transport { page, source })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::RequestFailed { page, status });
        }

        let body = response
            .bytes()
            .await
            .map_err(|source| FetchError::Transport { page, source })?;

        Ok(body.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_url_substitutes_page_number() {
        assert_eq!(
            HttpPageSource::page_url(7),
            "https://www.scrapethissite.com/pages/forms/?page_num=7"
        );
    }

    #[test]
    fn request_failed_message_names_page_and_status() {
        let err = FetchError::RequestFailed {
            page: 3,
            status: StatusCode::SERVICE_UNAVAILABLE,
        };
        assert_eq!(
            err.to_string(),
            "request failed for page 3: 503 Service Unavailable"
        );
    }
}
