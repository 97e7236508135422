//! HTTP client for the reply generator service.

use async_trait::async_trait;
use secrecy::ExposeSecret;

use crate::config::GatewayConfig;
use crate::error::GatewayError;

use super::{ClientReply, ReplyGateway, ReplyRequest};

/// Reply generator reached over plain JSON HTTP.
pub struct HttpReplyGateway {
    config: GatewayConfig,
    client: reqwest::Client,
}

impl HttpReplyGateway {
    pub fn new(config: GatewayConfig) -> Self {
        Self {
            config,
            client: reqwest::Client::new(),
        }
    }

    fn replies_url(&self) -> String {
        format!("{}/v1/replies", self.config.base_url.trim_end_matches('/'))
    }
}

#[async_trait]
impl ReplyGateway for HttpReplyGateway {
    async fn client_reply(&self, request: &ReplyRequest) -> Result<ClientReply, GatewayError> {
        let body = serde_json::json!({
            "profile": self.config.profile,
            "module": request.module,
            "instructions": request.instructions,
            "user_text": request.user_text,
            "emotion": request.emotion,
        });

        let response = self
            .client
            .post(self.replies_url())
            .bearer_auth(self.config.api_key.expose_secret())
            .json(&body)
            .send()
            .await
            .map_err(|e| GatewayError::RequestFailed {
                reason: e.to_string(),
            })?;

        if !response.status().is_success() {
            let status = response.status();
            let detail = response.text().await.unwrap_or_default();
            return Err(GatewayError::RequestFailed {
                reason: format!("status {status}: {detail}"),
            });
        }

        response
            .json::<ClientReply>()
            .await
            .map_err(|e| GatewayError::InvalidResponse(e.to_string()))
    }

    fn name(&self) -> &str {
        "http"
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use secrecy::SecretString;

    fn make_gateway(base_url: &str) -> HttpReplyGateway {
        HttpReplyGateway::new(GatewayConfig {
            base_url: base_url.to_string(),
            api_key: SecretString::from("test-key"),
            profile: "sales-client-v1".to_string(),
        })
    }

    #[test]
    fn replies_url_joins_cleanly() {
        let gateway = make_gateway("http://localhost:9000");
        assert_eq!(gateway.replies_url(), "http://localhost:9000/v1/replies");

        // Trailing slash must not double up.
        let gateway = make_gateway("http://localhost:9000/");
        assert_eq!(gateway.replies_url(), "http://localhost:9000/v1/replies");
    }
}
