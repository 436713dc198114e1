use reqwest::{Client, StatusCode};
use tracing::{error, info};

use crate::errors::TokenError;
use crate::sources::{ClientCredentials, FetchToken};

const GRANT_TYPE: (&str, &str) = ("grant_type", "client_credentials");

impl FetchToken for ClientCredentials {
    /// `POST grant_type=client_credentials` with HTTP Basic client authentication.
    /// Only `200 OK` counts as success; there is no retry.
    async fn fetch_token(&self, client: &Client) -> Result<Vec<u8>, TokenError> {
        info!(endpoint = %self.endpoint, client_id = %self.client_id, "requesting client credentials token");

        let response = client
            .post(&self.endpoint)
            .basic_auth(&self.client_id, Some(&self.client_secret))
            .form(&[GRANT_TYPE])
            .send()
            .await
            .map_err(|source| TokenError::Transport {
                endpoint: self.endpoint.clone(),
                source,
            })?;

        let status = response.status();
        if status != StatusCode::OK {
            let body = response.text().await.unwrap_or_default();
            error!(status_code = status.as_u16(), response_body = %body, "token request rejected");
            return Err(TokenError::Status {
                status: status.as_u16(),
                body,
            });
        }
        let body = response.bytes().await.map_err(TokenError::ResponseBody)?;
        Ok(body.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use base64::engine::general_purpose::STANDARD;
    use base64::Engine;
    use httpmock::Method::POST;
    use httpmock::MockServer;

    #[tokio::test]
    async fn sends_form_encoded_grant_with_basic_auth() {
        let server = MockServer::start_async().await;
        let expected_auth = format!("Basic {}", STANDARD.encode("abc:xyz"));
        let mock = server
            .mock_async(|when, then| {
                when.method(POST)
                    .path("/token")
                    .header("authorization", expected_auth.as_str())
                    .header("content-type", "application/x-www-form-urlencoded")
                    .body("grant_type=client_credentials");
                then.status(200)
                    .body(r#"{"access_token":"T1","token_type":"Bearer","expires_in":300}"#);
            })
            .await;

        let creds = ClientCredentials::new(server.url("/token"), "abc", "xyz");
        let body = creds.fetch_token(&Client::new()).await.unwrap();

        mock.assert_calls_async(1).await;
        assert_eq!(
            body,
            br#"{"access_token":"T1","token_type":"Bearer","expires_in":300}"#
        );
    }

    #[tokio::test]
    async fn non_ok_success_status_is_rejected() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/token");
                then.status(201).body("{}");
            })
            .await;

        let creds = ClientCredentials::new(server.url("/token"), "abc", "xyz");
        let err = creds.fetch_token(&Client::new()).await.unwrap_err();
        assert!(matches!(err, TokenError::Status { status: 201, .. }));
    }

    #[tokio::test]
    async fn rejection_without_body_keeps_status() {
        let server = MockServer::start_async().await;
        server
            .mock_async(|when, then| {
                when.method(POST).path("/token");
                then.status(503);
            })
            .await;

        let creds = ClientCredentials::new(server.url("/token"), "abc", "xyz");
        let err = creds.fetch_token(&Client::new()).await.unwrap_err();
        match err {
            TokenError::Status { status, body } => {
                assert_eq!(status, 503);
                assert!(body.is_empty());
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[tokio::test]
    async fn unreachable_endpoint_is_transport_error() {
        let creds = ClientCredentials::new("http://127.0.0.1:9/token", "abc", "xyz");
        let err = creds.fetch_token(&Client::new()).await.unwrap_err();
        assert!(matches!(err, TokenError::Transport { .. }));
    }
}
