use std::time::Duration;
use tracing::{debug, info};

use crate::config::{ApiProfile, ApiRevision, ResponseShape};
use crate::error::GenerationError;
use crate::models::{GenerationRequest, GenerationResult, ListResponse, Product};

// Talks to the list generation backend
#[derive(Clone, Debug)]
pub struct ListClient {
    http: reqwest::Client,
    endpoint: String,
    revision: ApiRevision,
    profile: ApiProfile,
}

impl ListClient {
    pub fn new(base_url: &str, revision: ApiRevision, timeout: Option<Duration>) -> Result<Self, GenerationError> {
        let mut builder = reqwest::Client::builder();
        if let Some(timeout) = timeout {
            builder = builder.timeout(timeout);
        }
        let http = builder
            .build()
            .map_err(|e| GenerationError::Transport(format!("client setup: {}", e)))?;
        Ok(Self::with_http(http, base_url, revision))
    }

    pub fn with_http(http: reqwest::Client, base_url: &str, revision: ApiRevision) -> Self {
        let profile = revision.profile();
        // add http:// if not present
        let base = if base_url.starts_with("http") {
            base_url.trim_end_matches('/').to_string()
        } else {
            format!("http://{}", base_url.trim_end_matches('/'))
        };
        Self {
            http,
            endpoint: format!("{}{}", base, profile.endpoint_path),
            revision,
            profile,
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// POST the request once and decode the answer for this revision.
    pub async fn generate(&self, request: &GenerationRequest) -> GenerationResult {
        info!(endpoint = %self.endpoint, "requesting shopping list");

        let res = self
            .http
            .post(&self.endpoint)
            .json(&request.payload(self.revision.whole_budget()))
            .send()
            .await
            .map_err(|e| GenerationError::Transport(e.to_string()))?;

        let status = res.status();
        if !status.is_success() {
            return Err(GenerationError::Transport(format!("backend answered {}", status)));
        }

        let body = res
            .bytes()
            .await
            .map_err(|e| GenerationError::Transport(e.to_string()))?;
        debug!(bytes = body.len(), "response received");

        decode(self.profile.response_shape, &body)
    }
}

pub fn decode(shape: ResponseShape, body: &[u8]) -> GenerationResult {
    match shape {
        ResponseShape::Text => String::from_utf8(body.to_vec())
            .map(ListResponse::Text)
            .map_err(|e| GenerationError::Decode(e.to_string())),
        ResponseShape::Products => serde_json::from_slice::<Vec<Product>>(body)
            .map(ListResponse::Products)
            .map_err(|e| GenerationError::Decode(e.to_string())),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{refused_base_url, spawn_stub, StubReply};
    use serde_json::json;

    fn request() -> GenerationRequest {
        GenerationRequest::new("croque monsieur", 2, 50.0, vec!["BIO".into(), "PROCHE".into()])
    }

    #[test]
    fn endpoint_joins_base_and_revision_path() {
        let client = ListClient::with_http(reqwest::Client::new(), "localhost:3000/", ApiRevision::Legacy);
        assert_eq!(client.endpoint(), "http://localhost:3000/api/get_listes");
        let client = ListClient::with_http(reqwest::Client::new(), "https://api.example", ApiRevision::Current);
        assert_eq!(client.endpoint(), "https://api.example/api/shopping-list");
    }

    #[test]
    fn decode_rejects_wrong_shape() {
        assert!(matches!(
            decode(ResponseShape::Products, br#"{"error": "nope"}"#),
            Err(GenerationError::Decode(_))
        ));
        assert!(matches!(
            decode(ResponseShape::Text, &[0xff, 0xfe]),
            Err(GenerationError::Decode(_))
        ));
        assert_eq!(
            decode(ResponseShape::Products, b"[]"),
            Ok(ListResponse::Products(vec![]))
        );
    }

    #[tokio::test]
    async fn current_revision_decodes_products() {
        let body = json!([
            { "cost": 1.99, "volume": "250 g", "productName": "Jambon", "brand": "Herta",
              "image": "https://img.example/jambon.png", "AIProposition": false },
            { "cost": 0.89, "volume": "1 pc", "productName": "Pain de mie", "brand": "Harrys",
              "image": "https://img.example/pain.png", "AIProposition": true }
        ]);
        let stub = spawn_stub("/api/shopping-list", StubReply::json(body)).await;
        let client = ListClient::new(&stub.base_url, ApiRevision::Current, None).unwrap();

        let products = match client.generate(&request()).await.unwrap() {
            ListResponse::Products(p) => p,
            other => panic!("expected products, got {:?}", other),
        };
        assert_eq!(products.len(), 2);
        assert_eq!(products[1].name, "Pain de mie");
        assert!(products[1].ai_suggested);

        let seen = stub.last_body().unwrap();
        assert_eq!(
            seen,
            json!({ "recipe": "croque monsieur", "people": 2, "budget": 50.0, "tags": ["BIO", "PROCHE"] })
        );
    }

    #[tokio::test]
    async fn legacy_revision_returns_text() {
        let stub = spawn_stub("/api/get_listes", StubReply::text("2 tranches de jambon")).await;
        let client = ListClient::new(&stub.base_url, ApiRevision::Legacy, None).unwrap();

        let answer = client.generate(&request()).await.unwrap();
        assert_eq!(answer, ListResponse::Text("2 tranches de jambon".into()));
        assert_eq!(stub.last_body().unwrap()["budget"], json!(50));
    }

    #[tokio::test]
    async fn malformed_body_is_a_decode_failure() {
        let stub = spawn_stub("/api/shopping-list", StubReply::text("not json at all")).await;
        let client = ListClient::new(&stub.base_url, ApiRevision::Current, None).unwrap();

        let err = client.generate(&request()).await.unwrap_err();
        assert!(matches!(err, GenerationError::Decode(_)), "got {:?}", err);
    }

    #[tokio::test]
    async fn server_error_is_a_transport_failure() {
        let stub = spawn_stub("/api/shopping-list", StubReply::status(500)).await;
        let client = ListClient::new(&stub.base_url, ApiRevision::Current, None).unwrap();

        let err = client.generate(&request()).await.unwrap_err();
        assert!(matches!(err, GenerationError::Transport(_)), "got {:?}", err);
    }

    #[tokio::test]
    async fn unreachable_backend_is_a_transport_failure() {
        let base = refused_base_url().await;
        let client = ListClient::new(&base, ApiRevision::Current, Some(Duration::from_secs(5))).unwrap();

        let err = client.generate(&request()).await.unwrap_err();
        assert!(matches!(err, GenerationError::Transport(_)), "got {:?}", err);
    }
}
