use async_trait::async_trait;
use log::{error, info};
use reqwest::{Client, StatusCode};
use serde::Serialize;

use crate::config::{AuthHeader, Config};
use crate::error::AlertDispatchError;

pub const NOTIFOX_ALERT_URL: &str = "https://api.notifox.com/alert";

#[derive(Debug, PartialEq, Serialize)]
pub struct AlertPayload<'a> {
    pub audience: Vec<&'a str>,
    pub alert: &'a str,
}

pub struct NotifoxClient {
    client: Client,
    url: String,
    audience: String,
    api_key: String,
    auth_header: AuthHeader,
}

#[async_trait]
pub trait Notify {
    async fn send_alert(&self, message: &str) -> Result<(), AlertDispatchError>;
}

#[async_trait]
impl Notify for NotifoxClient {
    async fn send_alert(&self, message: &str) -> Result<(), AlertDispatchError> {
        info!("Preparing to send Notifox alert");
        info!("Alert message: {}", message);

        let request = self.client.post(&self.url).json(&self.payload(message));
        let request = match self.auth_header {
            AuthHeader::Bearer => request.bearer_auth(&self.api_key),
            AuthHeader::ApiKey => request.header("x-api-key", &self.api_key),
        };

        info!("Sending POST request to Notifox API: {}", self.url);
        let response = request.send().await?;
        let status = response.status();
        let body = response.text().await?;
        info!("Notifox API response status: {}", status.as_u16());
        info!("Notifox API response body: {}", body);

        if status != StatusCode::OK {
            error!("Failed to send alert: {}", body);
            return Err(AlertDispatchError::Rejected {
                status: status.as_u16(),
                body,
            });
        }
        Ok(())
    }
}

impl NotifoxClient {
    pub fn from_config(config: &Config) -> Self {
        Self::new_with_client(Client::new(), NOTIFOX_ALERT_URL, config)
    }

    fn new_with_client(client: Client, url: &str, config: &Config) -> Self {
        NotifoxClient {
            client,
            url: url.to_string(),
            audience: config.audience.clone(),
            api_key: config.api_key.clone(),
            auth_header: config.auth_header,
        }
    }

    fn payload<'a>(&'a self, message: &'a str) -> AlertPayload<'a> {
        AlertPayload {
            audience: vec![self.audience.as_str()],
            alert: message,
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use crate::config::{AuthHeader, Config};
    use crate::error::AlertDispatchError;
    use crate::notifox_client::{AlertPayload, NotifoxClient, Notify};
    use log::Level;
    use reqwest::Client;
    use serde_json::{json, Value};
    use tokio::io::{AsyncReadExt, AsyncWriteExt};
    use tokio::net::TcpListener;
    use tokio::task::JoinHandle;

    pub(crate) fn config(auth_header: AuthHeader) -> Config {
        Config {
            audience: "ops-team".to_string(),
            api_key: "secret-key".to_string(),
            auth_header,
            log_level: Level::Info,
        }
    }

    pub(crate) fn local_client(url: &str, auth_header: AuthHeader) -> NotifoxClient {
        let client = Client::builder().no_proxy().build().unwrap();
        NotifoxClient::new_with_client(client, url, &config(auth_header))
    }

    /// Accepts a single connection, answers it with `status` and `body`, and
    /// yields the raw request that was received.
    pub(crate) async fn respond_once(
        status: &'static str,
        body: &'static str,
    ) -> (String, JoinHandle<String>) {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}/alert", listener.local_addr().unwrap());

        let handle = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = Vec::new();
            let mut buffer = [0u8; 1024];
            loop {
                let read = socket.read(&mut buffer).await.unwrap();
                request.extend_from_slice(&buffer[..read]);
                if read == 0 || is_complete(&request) {
                    break;
                }
            }

            let response = format!(
                concat!(
                    "HTTP/1.1 {}\r\n",
                    "content-type: text/plain\r\n",
                    "content-length: {}\r\n",
                    "connection: close\r\n\r\n{}",
                ),
                status,
                body.len(),
                body
            );
            socket.write_all(response.as_bytes()).await.unwrap();
            let _ = socket.shutdown().await;
            String::from_utf8(request).unwrap()
        });
        (url, handle)
    }

    fn is_complete(request: &[u8]) -> bool {
        let text = String::from_utf8_lossy(request);
        let (head, body) = match text.split_once("\r\n\r\n") {
            Some(parts) => parts,
            None => return false,
        };
        let content_length = head
            .lines()
            .filter_map(|line| line.split_once(':'))
            .find(|(name, _)| name.trim().eq_ignore_ascii_case("content-length"))
            .and_then(|(_, value)| value.trim().parse::<usize>().ok())
            .unwrap_or(0);
        body.len() >= content_length
    }

    pub(crate) fn request_body(request: &str) -> Value {
        let (_, body) = request.split_once("\r\n\r\n").unwrap();
        serde_json::from_str(body).unwrap()
    }

    #[test]
    fn test_payload() {
        let client = NotifoxClient::from_config(&config(AuthHeader::Bearer));
        let payload = client.payload("hello");

        assert_eq!(
            payload,
            AlertPayload {
                audience: vec!["ops-team"],
                alert: "hello",
            }
        );
        assert_eq!(
            serde_json::to_value(&payload).unwrap(),
            json!({"audience": ["ops-team"], "alert": "hello"})
        );
    }

    #[tokio::test]
    async fn test_send_alert_with_bearer() {
        let (url, server) = respond_once("200 OK", "{\"status\":\"queued\"}").await;
        let client = local_client(&url, AuthHeader::Bearer);

        client.send_alert("monthly cost").await.unwrap();

        let request = server.await.unwrap();
        assert!(request.starts_with("POST /alert HTTP/1.1"));
        assert!(request.contains("authorization: Bearer secret-key"));
        assert!(request.contains("content-type: application/json"));
        assert!(!request.contains("x-api-key"));
        assert_eq!(
            request_body(&request),
            json!({"audience": ["ops-team"], "alert": "monthly cost"})
        );
    }

    #[tokio::test]
    async fn test_send_alert_with_api_key_header() {
        let (url, server) = respond_once("200 OK", "ok").await;
        let client = local_client(&url, AuthHeader::ApiKey);

        client.send_alert("monthly cost").await.unwrap();

        let request = server.await.unwrap();
        assert!(request.contains("x-api-key: secret-key"));
        assert!(!request.contains("authorization:"));
    }

    #[tokio::test]
    async fn test_send_alert_rejected() {
        let responses = [
            ("401 Unauthorized", 401u16),
            ("500 Internal Server Error", 500),
            ("201 Created", 201),
        ];
        for (status, code) in responses.iter() {
            let (url, server) = respond_once(*status, "server error").await;
            let client = local_client(&url, AuthHeader::Bearer);

            let result = client.send_alert("monthly cost").await;
            server.await.unwrap();

            match result {
                Err(AlertDispatchError::Rejected { status, body }) => {
                    assert_eq!(status, *code);
                    assert_eq!(body, "server error");
                }
                other => panic!("unexpected result: {:?}", other),
            }
        }
    }

    #[tokio::test]
    async fn test_send_alert_connection_refused() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let url = format!("http://{}/alert", listener.local_addr().unwrap());
        drop(listener);

        let client = local_client(&url, AuthHeader::Bearer);
        let result = client.send_alert("monthly cost").await;

        assert!(matches!(result, Err(AlertDispatchError::Request(_))));
    }
}
