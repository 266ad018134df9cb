//! NewsAPI top-headlines client.
//!
//! NewsAPI reports failures in the JSON body (`status: "error"` plus a
//! `message`), often alongside a non-2xx HTTP status, so the body is decoded
//! before the status code is considered.

use log::{debug, info, warn};
use serde::Deserialize;

use crate::inference::ProviderError;

pub const DEFAULT_NEWS_BASE_URL: &str = "https://newsapi.org/v2";
pub const NEWS_API_KEY_VAR: &str = "NEWS_API_KEY";
/// Headlines are always requested for this country.
pub const NEWS_COUNTRY: &str = "us";

/// Connection settings for the headline provider.
#[derive(Debug, Clone, PartialEq)]
pub struct NewsSettings {
    pub api_key: Option<String>,
    pub base_url: String,
}

/// One headline, reduced to what the listing shows.
#[derive(Debug, Clone, PartialEq)]
pub struct Headline {
    pub title: String,
    pub source: String,
}

// ============================================================================
// NewsAPI Types
// ============================================================================

#[derive(Deserialize, Debug)]
struct TopHeadlinesResponse {
    status: String,
    #[serde(default)]
    articles: Vec<Article>,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Deserialize, Debug)]
struct Article {
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    source: ArticleSource,
}

#[derive(Deserialize, Debug, Default)]
struct ArticleSource {
    #[serde(default)]
    name: Option<String>,
}

impl From<Article> for Headline {
    fn from(article: Article) -> Self {
        Headline {
            title: article.title.unwrap_or_else(|| "Untitled".to_string()),
            source: article
                .source
                .name
                .unwrap_or_else(|| "Unknown source".to_string()),
        }
    }
}

// ============================================================================
// Client
// ============================================================================

pub struct NewsClient {
    settings: NewsSettings,
    client: reqwest::Client,
}

impl NewsClient {
    pub fn new(settings: NewsSettings) -> Self {
        Self {
            settings,
            client: reqwest::Client::new(),
        }
    }

    /// Fetches up to `limit` top headlines for `category`.
    pub async fn top_headlines(
        &self,
        category: &str,
        limit: u32,
    ) -> Result<Vec<Headline>, ProviderError> {
        let api_key = self
            .settings
            .api_key
            .as_deref()
            .ok_or(ProviderError::MissingCredential {
                provider: "News",
                env_var: NEWS_API_KEY_VAR,
            })?;

        info!("NewsAPI request: category={}, limit={}", category, limit);

        let page_size = limit.to_string();
        let response = self
            .client
            .get(format!(
                "{}/top-headlines",
                self.settings.base_url.trim_end_matches('/')
            ))
            .query(&[
                ("country", NEWS_COUNTRY),
                ("category", category),
                ("pageSize", page_size.as_str()),
                ("apiKey", api_key),
            ])
            .send()
            .await
            .map_err(network_error)?;

        let status = response.status();
        debug!("NewsAPI response status: {}", status);

        let body = response
            .text()
            .await
            .map_err(network_error)?;

        let decoded: TopHeadlinesResponse = match serde_json::from_str(&body) {
            Ok(decoded) => decoded,
            Err(_) if !status.is_success() => {
                warn!("NewsAPI error: {} - {}", status, body);
                return Err(ProviderError::Api {
                    status: status.as_u16(),
                    message: body,
                });
            }
            Err(e) => return Err(ProviderError::Parse(e.to_string())),
        };

        if decoded.status != "ok" {
            let message = decoded
                .message
                .unwrap_or_else(|| "Unknown error".to_string());
            warn!("NewsAPI reported status {}: {}", decoded.status, message);
            return Err(ProviderError::Upstream(message));
        }

        Ok(decoded.articles.into_iter().map(Headline::from).collect())
    }
}

/// The request URL carries the API key, so it is stripped from the error.
fn network_error(e: reqwest::Error) -> ProviderError {
    ProviderError::Network(e.without_url().to_string())
}

/// Renders headlines as a numbered listing under a category heading.
pub fn format_headlines(category: &str, headlines: &[Headline]) -> String {
    let mut text = format!("📰 Today's {category} news:\n\n");
    for (i, headline) in headlines.iter().enumerate() {
        text.push_str(&format!(
            "{}. {} ({})\n",
            i + 1,
            headline.title,
            headline.source
        ));
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_headlines_numbers_in_order() {
        let headlines = vec![
            Headline {
                title: "First".to_string(),
                source: "Wire".to_string(),
            },
            Headline {
                title: "Second".to_string(),
                source: "Daily".to_string(),
            },
        ];
        assert_eq!(
            format_headlines("business", &headlines),
            "📰 Today's business news:\n\n1. First (Wire)\n2. Second (Daily)\n"
        );
    }

    #[test]
    fn test_format_headlines_empty_is_heading_only() {
        assert_eq!(
            format_headlines("general", &[]),
            "📰 Today's general news:\n\n"
        );
    }

    #[test]
    fn test_article_with_nulls_gets_placeholders() {
        let article: Article =
            serde_json::from_str(r#"{"title":null,"source":{"id":null,"name":null}}"#).unwrap();
        let headline = Headline::from(article);
        assert_eq!(headline.title, "Untitled");
        assert_eq!(headline.source, "Unknown source");
    }

    #[tokio::test]
    async fn test_network_error_omits_api_key() {
        // Nothing listens on port 1.
        let client = NewsClient::new(NewsSettings {
            api_key: Some("SECRET-KEY-123".to_string()),
            base_url: "http://127.0.0.1:1".to_string(),
        });
        match client.top_headlines("general", 5).await {
            Err(ProviderError::Network(message)) => {
                assert!(!message.contains("SECRET-KEY-123"), "leaked: {message}");
                assert!(!message.contains("apiKey"), "leaked: {message}");
            }
            other => panic!("expected network error, got {other:?}"),
        }
    }

    #[test]
    fn test_error_body_deserializes_without_articles() {
        let response: TopHeadlinesResponse = serde_json::from_str(
            r#"{"status":"error","code":"apiKeyInvalid","message":"Your API key is invalid."}"#,
        )
        .unwrap();
        assert_eq!(response.status, "error");
        assert!(response.articles.is_empty());
        assert_eq!(response.message.as_deref(), Some("Your API key is invalid."));
    }
}
