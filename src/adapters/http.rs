use crate::domain::model::ReportResult;
use crate::domain::ports::ReportSource;
use crate::utils::error::Result;
use async_trait::async_trait;
use reqwest::Client;

/// Plain GET with the client's default timeout and no custom headers.
#[derive(Debug, Clone, Default)]
pub struct HttpReportSource {
    client: Client,
}

impl HttpReportSource {
    pub fn new() -> Self {
        Self {
            client: Client::new(),
        }
    }
}

#[async_trait]
impl ReportSource for HttpReportSource {
    async fn fetch(&self, url: &str) -> Result<ReportResult> {
        tracing::debug!("GET {}", url);
        let response = self.client.get(url).send().await?;
        let status = response.status().as_u16();
        tracing::debug!("Response status for {}: {}", url, status);
        let body = response.text().await?;

        Ok(ReportResult {
            url: url.to_string(),
            body,
            status,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::ReportError;
    use httpmock::prelude::*;

    #[tokio::test]
    async fn test_fetch_returns_body_and_status() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/data/PQR/AFDPQR");
                then.status(200)
                    .header("Content-Type", "text/plain")
                    .body("AREA FORECAST DISCUSSION\n");
            })
            .await;

        let source = HttpReportSource::new();
        let url = server.url("/data/PQR/AFDPQR");
        let result = source.fetch(&url).await.unwrap();

        mock.assert_async().await;
        assert_eq!(result.url, url);
        assert_eq!(result.status, 200);
        assert_eq!(result.body, "AREA FORECAST DISCUSSION\n");
    }

    #[tokio::test]
    async fn test_fetch_error_status_is_not_an_error() {
        let server = MockServer::start_async().await;
        let mock = server
            .mock_async(|when, then| {
                when.method(GET).path("/data/PQR/STQPQR");
                then.status(404).body("<b>Cannot find STQPQR</b>");
            })
            .await;

        let source = HttpReportSource::new();
        let result = source.fetch(&server.url("/data/PQR/STQPQR")).await.unwrap();

        mock.assert_async().await;
        assert_eq!(result.status, 404);
        assert_eq!(result.body, "<b>Cannot find STQPQR</b>");
    }

    #[tokio::test]
    async fn test_fetch_connection_refused() {
        // Port 1 is reserved (tcpmux) and closed on test hosts.
        let source = HttpReportSource::new();
        let err = source.fetch("http://127.0.0.1:1/data/PQR/AFDPQR").await.unwrap_err();
        assert!(matches!(err, ReportError::HttpError(_)));
    }
}
