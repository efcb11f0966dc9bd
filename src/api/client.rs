//! HTTP implementation of [`CatalogSource`] backed by reqwest.

use std::time::Duration;

use async_trait::async_trait;
use log::{debug, info, warn};

use super::source::{CatalogSource, FetchError};
use super::types::{Book, CatalogPage};

/// Talks to `GET {base_url}/api/books?page={n}`.
pub struct CatalogClient {
    base_url: String,
    client: reqwest::Client,
}

impl CatalogClient {
    /// Builds a client for the given base URL. A trailing slash is tolerated.
    /// # Example
    /// ```no_run
    /// use std::time::Duration;
    /// use shelf::api::{CatalogClient, CatalogSource};
    /// # async fn demo() -> Result<(), shelf::api::FetchError> {
    /// let client = CatalogClient::new("http://localhost:3000", Duration::from_secs(10))?;
    /// let catalog = client.load_catalog(1).await?;
    /// println!("{} PDF books", catalog.pdf_books.len());
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, FetchError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        if base_url.is_empty() {
            return Err(FetchError::Config("base URL is empty".to_string()));
        }

        let client = reqwest::Client::builder()
            .timeout(timeout)
            .build()
            .map_err(|e| FetchError::Config(e.to_string()))?;

        Ok(Self { base_url, client })
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn books_url(&self) -> String {
        format!("{}/api/books", self.base_url)
    }
}

#[async_trait]
impl CatalogSource for CatalogClient {
    fn name(&self) -> &str {
        "http"
    }

    async fn fetch_page(&self, page: u32) -> Result<Vec<Book>, FetchError> {
        if page == 0 {
            return Err(FetchError::InvalidPage(page));
        }

        let url = self.books_url();
        info!("Catalog request: GET {}?page={}", url, page);

        let response = self
            .client
            .get(&url)
            .query(&[("page", page)])
            .send()
            .await?;

        debug!("Catalog response status: {}", response.status());

        if !response.status().is_success() {
            let status = response.status().as_u16();
            let err_body = response
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            warn!("Catalog API error: {} - {}", status, err_body);
            return Err(FetchError::Api {
                status,
                message: err_body,
            });
        }

        let body = response.text().await?;
        let catalog_page: CatalogPage =
            serde_json::from_str(&body).map_err(|e| FetchError::Parse(e.to_string()))?;

        Ok(catalog_page.data)
    }
}
