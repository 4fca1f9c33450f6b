use crate::config::service_config::{HttpClientConfig, ProtocolPreference};
use crate::utils::error::{EtlError, Result};
use reqwest::{Client, RequestBuilder};

/// reqwest Client 加上 4xx/5xx 檢查，取代全域 client factory
#[derive(Debug, Clone)]
pub struct HttpTransport {
    service: &'static str,
    client: Client,
    raise_on_error_status: bool,
}

impl HttpTransport {
    pub fn new(service: &'static str, config: &HttpClientConfig) -> Result<Self> {
        // 逾時套用在連線與每次讀取，不限制整體傳輸時間
        // 不重用連線：每次呼叫結束後即釋放
        let mut builder = Client::builder()
            .connect_timeout(config.timeout())
            .read_timeout(config.timeout())
            .pool_max_idle_per_host(0);

        if config.protocol == ProtocolPreference::Http1Only {
            builder = builder.http1_only();
        }

        let client = builder
            .build()
            .map_err(|e| EtlError::ConfigValidationError {
                field: "http".to_string(),
                message: format!("Failed to build HTTP client: {}", e),
            })?;

        Ok(Self {
            service,
            client,
            raise_on_error_status: config.raise_on_error_status,
        })
    }

    pub fn client(&self) -> &Client {
        &self.client
    }

    /// 送出請求並回傳原始 body
    pub async fn send(&self, request: RequestBuilder) -> Result<Vec<u8>> {
        let response = request
            .send()
            .await
            .map_err(|e| EtlError::remote(self.service, e))?;

        let status = response.status();
        tracing::debug!(
            "{} responded with {} ({:?})",
            self.service,
            status,
            response.version()
        );

        if self.raise_on_error_status && (status.is_client_error() || status.is_server_error()) {
            return Err(EtlError::RemoteServiceError {
                service: self.service.to_string(),
                status: Some(status.as_u16()),
                message: status
                    .canonical_reason()
                    .unwrap_or("unexpected status")
                    .to_string(),
            });
        }

        let body = response
            .bytes()
            .await
            .map_err(|e| EtlError::remote(self.service, e))?;

        Ok(body.to_vec())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use httpmock::prelude::*;
    use std::time::Duration;

    fn transport(config: HttpClientConfig) -> HttpTransport {
        HttpTransport::new("test", &config).unwrap()
    }

    #[tokio::test]
    async fn test_success_returns_body_bytes() {
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET).path("/ok");
            then.status(200).body("payload");
        });

        let http = transport(HttpClientConfig::default());
        let body = http.send(http.client().get(server.url("/ok"))).await.unwrap();

        mock.assert();
        assert_eq!(body, b"payload");
    }

    #[tokio::test]
    async fn test_error_status_is_raised() {
        let server = MockServer::start();
        for (path, code) in [("/missing", 404u16), ("/broken", 500u16)] {
            server.mock(|when, then| {
                when.method(GET).path(path);
                then.status(code);
            });
        }

        let http = transport(HttpClientConfig::default());

        for (path, code) in [("/missing", 404u16), ("/broken", 500u16)] {
            let err = http
                .send(http.client().get(server.url(path)))
                .await
                .unwrap_err();

            match err {
                EtlError::RemoteServiceError {
                    service, status, ..
                } => {
                    assert_eq!(service, "test");
                    assert_eq!(status, Some(code));
                }
                other => panic!("unexpected error: {:?}", other),
            }
        }
    }

    #[tokio::test]
    async fn test_error_status_passes_through_when_not_raising() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/broken");
            then.status(500).body("server says no");
        });

        let http = transport(HttpClientConfig {
            raise_on_error_status: false,
            ..HttpClientConfig::default()
        });
        let body = http
            .send(http.client().get(server.url("/broken")))
            .await
            .unwrap();

        assert_eq!(body, b"server says no");
    }

    #[tokio::test]
    async fn test_timeout_maps_to_remote_service_error() {
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET).path("/slow");
            then.status(200).delay(Duration::from_secs(3));
        });

        let http = transport(HttpClientConfig {
            timeout_seconds: 1,
            ..HttpClientConfig::default()
        });
        let err = http
            .send(http.client().get(server.url("/slow")))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            EtlError::RemoteServiceError { status: None, .. }
        ));
    }

    #[tokio::test]
    async fn test_slow_body_longer_than_timeout_still_completes() {
        use tokio::io::{AsyncReadExt, AsyncWriteExt};

        let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let addr = listener.local_addr().unwrap();

        // 每段間隔 600ms，總長 1.8s 超過 1s 逾時，但單次讀取都在期限內
        let server = tokio::spawn(async move {
            let (mut socket, _) = listener.accept().await.unwrap();
            let mut request = [0u8; 1024];
            let _ = socket.read(&mut request).await.unwrap();

            socket
                .write_all(b"HTTP/1.1 200 OK\r\nContent-Length: 6\r\nConnection: close\r\n\r\n")
                .await
                .unwrap();
            for chunk in [b"ab", b"cd", b"ef"] {
                tokio::time::sleep(Duration::from_millis(600)).await;
                socket.write_all(chunk).await.unwrap();
                socket.flush().await.unwrap();
            }
        });

        let http = transport(HttpClientConfig {
            timeout_seconds: 1,
            ..HttpClientConfig::default()
        });
        let body = http
            .send(http.client().get(format!("http://{}/stream", addr)))
            .await
            .unwrap();

        assert_eq!(body, b"abcdef");
        server.await.unwrap();
    }

    #[tokio::test]
    async fn test_connection_failure_maps_to_remote_service_error() {
        let http = transport(HttpClientConfig::default());
        let err = http
            .send(http.client().get("http://127.0.0.1:1/unreachable"))
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            EtlError::RemoteServiceError { status: None, .. }
        ));
    }
}
