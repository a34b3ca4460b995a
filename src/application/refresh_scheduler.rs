// Refresh scheduler - drives fetch-and-render cycles on a fixed interval
use crate::application::dashboard_api::DashboardApi;
use crate::application::dashboard_view::{ApplyOutcome, DashboardView};
use crate::domain::identity::SubjectId;
use crate::presentation::page::Page;
use std::sync::Arc;
use std::sync::atomic::{AtomicU64, Ordering};
use std::time::Duration;
use tokio::sync::Mutex;
use tokio::time::MissedTickBehavior;
use tokio_stream::StreamExt;
use tokio_stream::wrappers::IntervalStream;

pub const DEFAULT_REFRESH_INTERVAL: Duration = Duration::from_secs(5);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleOutcome {
    Applied,
    Stale,
    Failed,
}

impl From<ApplyOutcome> for CycleOutcome {
    fn from(outcome: ApplyOutcome) -> Self {
        match outcome {
            ApplyOutcome::Applied => CycleOutcome::Applied,
            ApplyOutcome::Stale => CycleOutcome::Stale,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CycleReport {
    pub cycle: u64,
    pub metrics: CycleOutcome,
    pub alerts: CycleOutcome,
}

pub struct RefreshScheduler<P> {
    api: Arc<dyn DashboardApi>,
    view: Arc<Mutex<DashboardView<P>>>,
    subject: SubjectId,
    interval: Duration,
    cycles: Arc<AtomicU64>,
}

impl<P> Clone for RefreshScheduler<P> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            view: self.view.clone(),
            subject: self.subject.clone(),
            interval: self.interval,
            cycles: self.cycles.clone(),
        }
    }
}

impl<P: Page + 'static> RefreshScheduler<P> {
    pub fn new(
        api: Arc<dyn DashboardApi>,
        view: Arc<Mutex<DashboardView<P>>>,
        subject: SubjectId,
        interval: Duration,
    ) -> Self {
        Self {
            api,
            view,
            subject,
            interval,
            cycles: Arc::new(AtomicU64::new(0)),
        }
    }

    /// Run one cycle immediately and then one per interval, forever. Each
    /// cycle is its own task, so a slow or failing cycle never delays or
    /// cancels the next one.
    pub async fn run(self) {
        let mut interval = tokio::time::interval(self.interval);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);
        let mut ticks = IntervalStream::new(interval);

        tracing::info!(
            subject = %self.subject,
            interval = ?self.interval,
            "refresh scheduler started"
        );

        while ticks.next().await.is_some() {
            let scheduler = self.clone();
            tokio::spawn(async move {
                scheduler.run_cycle().await;
            });
        }
    }

    /// Fetch metrics and alerts concurrently; each result is applied as soon
    /// as its own fetch resolves. Failures are logged and absorbed.
    pub async fn run_cycle(&self) -> CycleReport {
        let cycle = self.cycles.fetch_add(1, Ordering::SeqCst) + 1;

        let metrics = async {
            match self.api.fetch_metrics(&self.subject).await {
                Ok(snapshot) => {
                    tracing::debug!(cycle, "dashboard metrics loaded");
                    CycleOutcome::from(self.view.lock().await.apply_snapshot(cycle, &snapshot))
                }
                Err(e) => {
                    tracing::warn!(cycle, subject = %self.subject, error = %e, "error loading dashboard metrics");
                    CycleOutcome::Failed
                }
            }
        };

        let alerts = async {
            match self.api.fetch_alerts().await {
                Ok(alerts) => CycleOutcome::from(self.view.lock().await.apply_alerts(cycle, &alerts)),
                Err(e) => {
                    tracing::warn!(cycle, error = %e, "error loading alerts");
                    CycleOutcome::Failed
                }
            }
        };

        let (metrics, alerts) = futures::join!(metrics, alerts);
        CycleReport { cycle, metrics, alerts }
    }
}
