// Dashboard snapshot - one fetched metrics payload with every field defaulted
use serde_json::Value;
use std::fmt;

/// Text shown where a value is missing from the payload.
pub const PLACEHOLDER: &str = "--";

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSnapshot {
    pub user: UserProfile,
    pub kpis: Kpis,
    pub completion_timeline: Vec<TimelinePoint>,
    pub modules: Vec<ModuleProgress>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct UserProfile {
    pub organization: String,
    pub role: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Kpis {
    pub training_completion: TrainingCompletion,
    pub average_quiz_score: f64,
    /// Risk score as delivered, or the placeholder.
    pub risk_score: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TrainingCompletion {
    pub percentage: f64,
    pub completed: f64,
    pub total: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct TimelinePoint {
    pub date: String,
    pub completed: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ModuleProgress {
    pub name: String,
    pub status: ModuleStatus,
    pub score: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ModuleStatus {
    Completed,
    InProgress,
    NotStarted,
    /// Any status string outside the three known ones, kept verbatim.
    Other(String),
}

impl ModuleStatus {
    pub fn from_wire(value: &str) -> Self {
        match value {
            "completed" => ModuleStatus::Completed,
            "in_progress" => ModuleStatus::InProgress,
            "not_started" => ModuleStatus::NotStarted,
            other => ModuleStatus::Other(other.to_string()),
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ModuleStatus::Completed => "completed",
            ModuleStatus::InProgress => "in_progress",
            ModuleStatus::NotStarted => "not_started",
            ModuleStatus::Other(other) => other,
        }
    }
}

impl fmt::Display for ModuleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Default for DashboardSnapshot {
    fn default() -> Self {
        Self::from_payload(&Value::Null)
    }
}

impl DashboardSnapshot {
    /// Normalize a metrics payload. Absent fields, nulls and values of the
    /// wrong JSON type all resolve to the same defaults, so this never fails.
    pub fn from_payload(payload: &Value) -> Self {
        let user = &payload["user"];
        let kpis = &payload["kpis"];
        let completion = &kpis["training_completion"];

        Self {
            user: UserProfile {
                organization: text_or_placeholder(&user["organization"]),
                role: text_or_placeholder(&user["role"]),
            },
            kpis: Kpis {
                training_completion: TrainingCompletion {
                    percentage: number_or_zero(&completion["percentage"]),
                    completed: number_or_zero(&completion["completed"]),
                    total: number_or_zero(&completion["total"]),
                },
                average_quiz_score: number_or_zero(&kpis["average_quiz_score"]),
                risk_score: verbatim_or_placeholder(&kpis["risk_score"]),
            },
            completion_timeline: items(&payload["completion_timeline"])
                .map(|point| TimelinePoint {
                    date: text_or_placeholder(&point["date"]),
                    completed: number_or_zero(&point["completed"]),
                })
                .collect(),
            modules: items(&payload["modules"])
                .map(|module| ModuleProgress {
                    name: text_or_placeholder(&module["name"]),
                    status: module["status"]
                        .as_str()
                        .map(ModuleStatus::from_wire)
                        .unwrap_or_else(|| ModuleStatus::Other(PLACEHOLDER.to_string())),
                    score: module["score"].as_f64(),
                })
                .collect(),
        }
    }
}

/// Render a number the way the dashboard shows it: integral values carry no
/// fractional part.
pub fn format_number(value: f64) -> String {
    if value == 0.0 {
        // collapses -0
        return "0".to_string();
    }
    value.to_string()
}

fn items(value: &Value) -> impl Iterator<Item = &Value> {
    value.as_array().into_iter().flatten()
}

fn number_or_zero(value: &Value) -> f64 {
    value.as_f64().filter(|n| n.is_finite()).unwrap_or(0.0)
}

fn text_or_placeholder(value: &Value) -> String {
    match value.as_str() {
        Some(text) if !text.is_empty() => text.to_string(),
        _ => PLACEHOLDER.to_string(),
    }
}

fn verbatim_or_placeholder(value: &Value) -> String {
    match value {
        Value::Number(n) => n.as_f64().map(format_number).unwrap_or_else(|| n.to_string()),
        Value::String(s) if !s.is_empty() => s.clone(),
        _ => PLACEHOLDER.to_string(),
    }
}
