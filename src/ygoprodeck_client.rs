use std::time::Duration;

use async_trait::async_trait;
use log::debug;
use reqwest::StatusCode;
use thiserror::Error;

use crate::cards::catalog_record::CatalogResponse;
use crate::utilities::constants::YGOPRODECK_API_URL;

#[derive(Debug, Error)]
pub enum LookupError {
    #[error("request for card '{card_id}' failed: {source}")]
    Request {
        card_id: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("could not decode response for card '{card_id}' (HTTP {status}): {source}")]
    Decode {
        card_id: String,
        status: StatusCode,
        #[source]
        source: serde_json::Error,
    },
}

/// Resolves a card id against the remote catalog.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait CardLookup {
    async fn lookup(&self, card_id: &str) -> Result<CatalogResponse, LookupError>;
}

pub struct YgoProDeckClient {
    client: reqwest::Client,
    base_url: String,
}

impl YgoProDeckClient {
    pub fn new(base_url: Option<&str>, client: reqwest::Client) -> Self {
        YgoProDeckClient {
            client,
            base_url: base_url.unwrap_or(YGOPRODECK_API_URL).to_string(),
        }
    }

    /// Without a timeout a stalled service blocks the run indefinitely.
    pub fn build_http_client(timeout: Option<Duration>) -> reqwest::Result<reqwest::Client> {
        let builder = reqwest::Client::builder();
        match timeout {
            Some(timeout) => builder.timeout(timeout).build(),
            None => builder.build(),
        }
    }

    fn setup_http_headers() -> reqwest::header::HeaderMap {
        let mut header_map = reqwest::header::HeaderMap::new();
        header_map.insert(
            reqwest::header::ACCEPT,
            reqwest::header::HeaderValue::from_static("application/json"),
        );
        header_map.insert(
            reqwest::header::USER_AGENT,
            reqwest::header::HeaderValue::from_static(concat!(
                env!("CARGO_PKG_NAME"),
                "/",
                env!("CARGO_PKG_VERSION")
            )),
        );
        header_map
    }

    pub fn card_url(&self, card_id: &str) -> String {
        format!("{}?id={}", self.base_url, urlencoding::encode(card_id))
    }
}

#[async_trait]
impl CardLookup for YgoProDeckClient {
    async fn lookup(&self, card_id: &str) -> Result<CatalogResponse, LookupError> {
        let url = self.card_url(card_id);
        debug!("GET {}", url);

        let request_error = |source| LookupError::Request {
            card_id: card_id.to_string(),
            source,
        };
        let response = self
            .client
            .get(&url)
            .headers(Self::setup_http_headers())
            .send()
            .await
            .map_err(request_error)?;
        // The status is only reported, never branched on.
        let status = response.status();
        let body = response.text().await.map_err(request_error)?;

        serde_json::from_str(&body).map_err(|source| LookupError::Decode {
            card_id: card_id.to_string(),
            status,
            source,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Matcher;

    struct TestContext {
        server: mockito::ServerGuard,
        client: YgoProDeckClient,
    }

    impl TestContext {
        fn new() -> Self {
            let _ = env_logger::builder().is_test(true).try_init();
            let server = std::thread::spawn(|| mockito::Server::new())
                .join()
                .unwrap();
            let client = YgoProDeckClient::new(
                Some(&format!("{}/api/v7/cardinfo.php", server.url())),
                reqwest::Client::new(),
            );
            TestContext { server, client }
        }
    }

    #[test]
    fn test_card_url_uses_default_endpoint() {
        let client = YgoProDeckClient::new(None, reqwest::Client::new());
        assert_eq!(
            client.card_url("89631139"),
            "https://db.ygoprodeck.com/api/v7/cardinfo.php?id=89631139"
        );
    }

    #[test]
    fn test_card_url_encodes_id() {
        let client =
            YgoProDeckClient::new(Some("http://localhost/cardinfo.php"), reqwest::Client::new());
        assert_eq!(
            client.card_url("LOB 001&x"),
            "http://localhost/cardinfo.php?id=LOB%20001%26x"
        );
    }

    #[tokio::test]
    async fn test_lookup_decodes_card() {
        let mut ctx = TestContext::new();
        let mock = ctx
            .server
            .mock("GET", "/api/v7/cardinfo.php")
            .match_query(Matcher::UrlEncoded("id".into(), "89631139".into()))
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(include_str!("test/blue_eyes_resp.json"))
            .create();

        let response = ctx.client.lookup("89631139").await.unwrap();

        mock.assert();
        assert_eq!(response.data.len(), 1);
        assert_eq!(response.data[0].name, "Blue-Eyes White Dragon");
    }

    #[tokio::test]
    async fn test_unknown_card_decodes_to_empty_list() {
        let mut ctx = TestContext::new();
        let _mock = ctx
            .server
            .mock("GET", "/api/v7/cardinfo.php")
            .match_query(Matcher::Any)
            .with_status(400)
            .with_body(r#"{"error":"No card matching your query was found in the database."}"#)
            .create();

        let response = ctx.client.lookup("1").await.unwrap();
        assert!(response.data.is_empty());
    }

    #[tokio::test]
    async fn test_non_json_body_is_decode_error_with_status() {
        let mut ctx = TestContext::new();
        let _mock = ctx
            .server
            .mock("GET", "/api/v7/cardinfo.php")
            .match_query(Matcher::Any)
            .with_status(503)
            .with_body("<html>Service Unavailable</html>")
            .create();

        let err = ctx.client.lookup("89631139").await.unwrap_err();

        match err {
            LookupError::Decode {
                card_id, status, ..
            } => {
                assert_eq!(card_id, "89631139");
                assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_unreachable_service_is_request_error() {
        let client = YgoProDeckClient::new(
            Some("http://127.0.0.1:1/cardinfo.php"),
            reqwest::Client::new(),
        );

        let err = client.lookup("89631139").await.unwrap_err();
        assert!(matches!(err, LookupError::Request { .. }));
    }
}
