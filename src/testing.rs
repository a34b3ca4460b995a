// Test doubles shared across module tests
use crate::application::dashboard_api::DashboardApi;
use crate::application::error::FetchError;
use crate::domain::alert::AlertNotice;
use crate::domain::chart::ChartSpec;
use crate::domain::identity::SubjectId;
use crate::domain::snapshot::DashboardSnapshot;
use crate::presentation::page::{ChartHandle, Fragment, Page, Slot, SlotAbsent};
use async_trait::async_trait;
use serde_json::json;
use std::collections::{HashMap, HashSet, VecDeque};
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

/// Page that records every write and tracks live chart instances.
#[derive(Debug, Default)]
pub struct RecordingPage {
    pub absent: HashSet<Slot>,
    pub texts: HashMap<Slot, String>,
    pub fragments: HashMap<Slot, Vec<Fragment>>,
    pub live_charts: HashMap<ChartHandle, (Slot, ChartSpec)>,
    pub events: Vec<String>,
    pub commits: usize,
    next_handle: u64,
}

impl RecordingPage {
    pub fn without(slots: &[Slot]) -> Self {
        Self {
            absent: slots.iter().copied().collect(),
            ..Default::default()
        }
    }

    pub fn text(&self, slot: Slot) -> Option<&str> {
        self.texts.get(&slot).map(String::as_str)
    }

    pub fn charts_on(&self, slot: Slot) -> Vec<&ChartSpec> {
        self.live_charts
            .values()
            .filter(|(s, _)| *s == slot)
            .map(|(_, spec)| spec)
            .collect()
    }

    fn check(&self, slot: Slot) -> Result<(), SlotAbsent> {
        if self.absent.contains(&slot) {
            Err(SlotAbsent(slot))
        } else {
            Ok(())
        }
    }
}

impl Page for RecordingPage {
    fn has_slot(&self, slot: Slot) -> bool {
        !self.absent.contains(&slot)
    }

    fn write_text(&mut self, slot: Slot, text: &str) -> Result<(), SlotAbsent> {
        self.check(slot)?;
        self.texts.insert(slot, text.to_string());
        Ok(())
    }

    fn write_fragments(&mut self, slot: Slot, fragments: Vec<Fragment>) -> Result<(), SlotAbsent> {
        self.check(slot)?;
        self.fragments.insert(slot, fragments);
        Ok(())
    }

    fn draw_chart(&mut self, slot: Slot, spec: &ChartSpec) -> Result<ChartHandle, SlotAbsent> {
        self.check(slot)?;
        self.next_handle += 1;
        let handle = ChartHandle(self.next_handle);
        self.live_charts.insert(handle, (slot, spec.clone()));
        self.events.push(format!("draw {} #{}", slot, handle.0));
        Ok(handle)
    }

    fn destroy_chart(&mut self, handle: ChartHandle) {
        if let Some((slot, _)) = self.live_charts.remove(&handle) {
            self.events.push(format!("destroy {} #{}", slot, handle.0));
        }
    }

    fn commit(&mut self) {
        self.commits += 1;
    }
}

/// API double answering from scripted queues, falling back to defaults.
#[derive(Default)]
pub struct ScriptedApi {
    metrics: Mutex<VecDeque<(Duration, Result<DashboardSnapshot, FetchError>)>>,
    alerts: Mutex<VecDeque<Result<Vec<AlertNotice>, FetchError>>>,
    pub metrics_calls: AtomicUsize,
    pub alerts_calls: AtomicUsize,
}

impl ScriptedApi {
    pub fn push_metrics(&self, result: Result<DashboardSnapshot, FetchError>) {
        self.push_delayed_metrics(Duration::ZERO, result);
    }

    pub fn push_delayed_metrics(&self, delay: Duration, result: Result<DashboardSnapshot, FetchError>) {
        self.metrics.lock().unwrap().push_back((delay, result));
    }

    pub fn push_alerts(&self, result: Result<Vec<AlertNotice>, FetchError>) {
        self.alerts.lock().unwrap().push_back(result);
    }

    pub fn metrics_calls(&self) -> usize {
        self.metrics_calls.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl DashboardApi for ScriptedApi {
    async fn fetch_metrics(&self, _subject: &SubjectId) -> Result<DashboardSnapshot, FetchError> {
        self.metrics_calls.fetch_add(1, Ordering::SeqCst);
        let next = self.metrics.lock().unwrap().pop_front();
        match next {
            Some((delay, result)) => {
                if !delay.is_zero() {
                    tokio::time::sleep(delay).await;
                }
                result
            }
            None => Ok(DashboardSnapshot::default()),
        }
    }

    async fn fetch_alerts(&self) -> Result<Vec<AlertNotice>, FetchError> {
        self.alerts_calls.fetch_add(1, Ordering::SeqCst);
        let next = self.alerts.lock().unwrap().pop_front();
        next.unwrap_or_else(|| Ok(Vec::new()))
    }
}

pub fn transport_error() -> FetchError {
    FetchError::Transport {
        url: "http://127.0.0.1:9/api".to_string(),
        reason: "connection refused".to_string(),
    }
}

/// The demo organisation's metrics payload.
pub fn demo_snapshot() -> DashboardSnapshot {
    DashboardSnapshot::from_payload(&json!({
        "user": {"organization": "SyncFlow Solutions", "role": "IT Manager"},
        "kpis": {
            "training_completion": {"completed": 2, "total": 4, "percentage": 50.0},
            "average_quiz_score": 86.5,
            "risk_score": 45.0
        },
        "completion_timeline": [
            {"date": "Day 1", "completed": 0},
            {"date": "Day 2", "completed": 1},
            {"date": "Day 3", "completed": 2},
            {"date": "Day 4", "completed": 2}
        ],
        "modules": [
            {"name": "Phishing Awareness", "status": "completed", "score": 88},
            {"name": "Password Security", "status": "completed", "score": 85},
            {"name": "Ransomware Prevention", "status": "in_progress", "score": null},
            {"name": "Data Protection Basics", "status": "not_started", "score": null}
        ]
    }))
}
