// HTTP dashboard API implementation
use crate::application::dashboard_api::DashboardApi;
use crate::application::error::FetchError;
use crate::domain::alert::AlertNotice;
use crate::domain::identity::SubjectId;
use crate::domain::snapshot::DashboardSnapshot;
use async_trait::async_trait;
use serde_json::Value;

#[derive(Debug, Clone)]
pub struct HttpDashboardApi {
    base_url: String,
    client: reqwest::Client,
}

impl HttpDashboardApi {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self::with_client(base_url, reqwest::Client::new())
    }

    pub fn with_client(base_url: impl Into<String>, client: reqwest::Client) -> Self {
        let base_url: String = base_url.into();
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            client,
        }
    }

    fn metrics_url(&self, subject: &SubjectId) -> String {
        format!(
            "{}/api/dashboard/metrics/{}",
            self.base_url,
            urlencoding::encode(subject.as_str())
        )
    }

    fn alerts_url(&self) -> String {
        format!("{}/api/dashboard/alerts", self.base_url)
    }

    async fn get_json(&self, url: &str) -> Result<Value, FetchError> {
        let response = self
            .client
            .get(url)
            .header("Accept", "application/json")
            .send()
            .await
            .map_err(|e| FetchError::Transport {
                url: url.to_string(),
                reason: e.to_string(),
            })?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Response {
                url: url.to_string(),
                status: status.as_u16(),
            });
        }

        response.json::<Value>().await.map_err(|e| {
            if e.is_decode() {
                FetchError::Payload {
                    url: url.to_string(),
                    reason: e.to_string(),
                }
            } else {
                FetchError::Transport {
                    url: url.to_string(),
                    reason: e.to_string(),
                }
            }
        })
    }
}

#[async_trait]
impl DashboardApi for HttpDashboardApi {
    async fn fetch_metrics(&self, subject: &SubjectId) -> Result<DashboardSnapshot, FetchError> {
        let url = self.metrics_url(subject);
        tracing::debug!(%url, "fetching dashboard metrics");
        let payload = self.get_json(&url).await?;
        Ok(DashboardSnapshot::from_payload(&payload))
    }

    async fn fetch_alerts(&self) -> Result<Vec<AlertNotice>, FetchError> {
        let url = self.alerts_url();
        tracing::debug!(%url, "fetching alerts");
        let payload = self.get_json(&url).await?;
        Ok(AlertNotice::list_from_payload(&payload))
    }
}
