// Repository trait for the dashboard backend
use crate::application::error::FetchError;
use crate::domain::alert::AlertNotice;
use crate::domain::identity::SubjectId;
use crate::domain::snapshot::DashboardSnapshot;
use async_trait::async_trait;

#[async_trait]
pub trait DashboardApi: Send + Sync {
    /// Fetch and normalize the metrics of one subject. A sparse payload is
    /// never an error; only transport, status or non-JSON failures are.
    async fn fetch_metrics(&self, subject: &SubjectId) -> Result<DashboardSnapshot, FetchError>;

    /// Fetch the alert feed in delivered order.
    async fn fetch_alerts(&self) -> Result<Vec<AlertNotice>, FetchError>;
}
