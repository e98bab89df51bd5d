//! REST API client.

use async_trait::async_trait;
use config::ClientSettings;
use promptmaster::{Category, HistoryItem, OptimizeRequest, OptimizeResponse, Template};
use reqwest::Response;
use serde::Deserialize;

use crate::ClientError;

/// The five operations the client needs from the backend.
#[async_trait]
pub trait PromptApi: Send + Sync {
    async fn categories(&self) -> Result<Vec<Category>, ClientError>;

    /// Newest first. `None` leaves the page size to the server default.
    async fn history(&self, limit: Option<u32>) -> Result<Vec<HistoryItem>, ClientError>;

    /// `category` of `None` lists every template.
    async fn templates(&self, category: Option<&str>) -> Result<Vec<Template>, ClientError>;

    async fn optimize(&self, request: &OptimizeRequest) -> Result<OptimizeResponse, ClientError>;

    async fn delete_history(&self, id: &str) -> Result<(), ClientError>;
}

#[derive(Deserialize)]
struct CategoriesBody {
    categories: Vec<Category>,
}

#[derive(Deserialize)]
struct DetailBody {
    detail: String,
}

/// [`PromptApi`] over HTTP. `base_url` ends with `/api`, e.g. `http://127.0.0.1:8001/api`.
pub struct HttpApi {
    base_url: String,
    http: reqwest::Client,
}

impl HttpApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            http: reqwest::Client::new(),
        }
    }

    pub fn from_settings(settings: &ClientSettings) -> Self {
        Self::new(settings.api_url.clone())
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// `{base}/history/{id}` with `id` percent-encoded as a single path segment.
    fn history_item_url(&self, id: &str) -> Result<reqwest::Url, ClientError> {
        let mut url = reqwest::Url::parse(&self.url("/history")).map_err(|e| {
            ClientError::InvalidUrl(format!("{}: {}", self.base_url, e))
        })?;
        url.path_segments_mut()
            .map_err(|_| ClientError::InvalidUrl(self.base_url.clone()))?
            .push(id);
        Ok(url)
    }

    /// Passes 2xx through; anything else becomes [`ClientError::Status`].
    async fn check(resp: Response) -> Result<Response, ClientError> {
        let status = resp.status();
        if status.is_success() {
            return Ok(resp);
        }
        let text = resp.text().await.unwrap_or_default();
        let detail = serde_json::from_str::<DetailBody>(&text)
            .map(|b| b.detail)
            .unwrap_or_else(|_| {
                status
                    .canonical_reason()
                    .map(str::to_string)
                    .unwrap_or(text)
            });
        Err(ClientError::Status {
            status: status.as_u16(),
            detail,
        })
    }
}

#[async_trait]
impl PromptApi for HttpApi {
    async fn categories(&self) -> Result<Vec<Category>, ClientError> {
        let resp = self.http.get(self.url("/categories")).send().await?;
        let body: CategoriesBody = Self::check(resp).await?.json().await?;
        Ok(body.categories)
    }

    async fn history(&self, limit: Option<u32>) -> Result<Vec<HistoryItem>, ClientError> {
        let mut req = self.http.get(self.url("/history"));
        if let Some(n) = limit {
            req = req.query(&[("limit", n)]);
        }
        let resp = req.send().await?;
        Ok(Self::check(resp).await?.json().await?)
    }

    async fn templates(&self, category: Option<&str>) -> Result<Vec<Template>, ClientError> {
        let mut req = self.http.get(self.url("/templates"));
        if let Some(c) = category {
            req = req.query(&[("category", c)]);
        }
        let resp = req.send().await?;
        Ok(Self::check(resp).await?.json().await?)
    }

    async fn optimize(&self, request: &OptimizeRequest) -> Result<OptimizeResponse, ClientError> {
        tracing::debug!(category = %request.category, "POST /optimize");
        let resp = self
            .http
            .post(self.url("/optimize"))
            .json(request)
            .send()
            .await?;
        Ok(Self::check(resp).await?.json().await?)
    }

    async fn delete_history(&self, id: &str) -> Result<(), ClientError> {
        let resp = self.http.delete(self.history_item_url(id)?).send().await?;
        Self::check(resp).await?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn base_url_loses_trailing_slash() {
        let api = HttpApi::new("http://localhost:8001/api/");
        assert_eq!(api.base_url(), "http://localhost:8001/api");
        assert_eq!(api.url("/history"), "http://localhost:8001/api/history");
    }

    #[test]
    fn history_item_id_is_one_encoded_segment() {
        let api = HttpApi::new("http://localhost:8001/api");
        assert_eq!(
            api.history_item_url("abc-123").unwrap().as_str(),
            "http://localhost:8001/api/history/abc-123"
        );
        assert_eq!(
            api.history_item_url("abc?x").unwrap().as_str(),
            "http://localhost:8001/api/history/abc%3Fx"
        );
        assert_eq!(
            api.history_item_url("a/b").unwrap().as_str(),
            "http://localhost:8001/api/history/a%2Fb"
        );
    }

    #[test]
    fn invalid_base_url_is_an_error() {
        let api = HttpApi::new("not a url");
        assert!(matches!(
            api.history_item_url("x"),
            Err(ClientError::InvalidUrl(_))
        ));
    }

    #[test]
    fn from_settings_uses_api_url() {
        let settings = ClientSettings {
            api_url: "http://example.test/api".to_string(),
        };
        assert_eq!(HttpApi::from_settings(&settings).base_url(), "http://example.test/api");
    }
}
