// Chart domain models - what a chart instance is constructed from
use super::snapshot::{ModuleProgress, ModuleStatus, TimelinePoint};

#[derive(Debug, Clone, PartialEq)]
pub enum ChartKind {
    Line,
    Doughnut,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum LegendPosition {
    Hidden,
    Bottom,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SeriesData {
    pub name: String,
    pub values: Vec<f64>,
    /// One colour for the whole series, or one per value for categorical charts.
    pub colors: Vec<String>,
}

impl SeriesData {
    pub fn new(name: impl Into<String>, values: Vec<f64>, colors: &[&str]) -> Self {
        Self {
            name: name.into(),
            values,
            colors: colors.iter().map(|c| c.to_string()).collect(),
        }
    }
}

/// Everything the drawing capability needs to construct one chart instance.
#[derive(Debug, Clone, PartialEq)]
pub struct ChartSpec {
    pub kind: ChartKind,
    pub labels: Vec<String>,
    pub series: Vec<SeriesData>,
    pub legend: LegendPosition,
    pub y_begin_at_zero: bool,
}

impl ChartSpec {
    /// Time-series of completed modules; labels and values in delivered order.
    pub fn progress(timeline: &[TimelinePoint]) -> Self {
        let labels = timeline.iter().map(|p| p.date.clone()).collect();
        let values = timeline.iter().map(|p| p.completed).collect();

        Self {
            kind: ChartKind::Line,
            labels,
            series: vec![SeriesData::new("Modules Completed", values, &["#667eea"])],
            legend: LegendPosition::Hidden,
            y_begin_at_zero: true,
        }
    }

    /// Categorical breakdown of module statuses.
    pub fn module_breakdown(modules: &[ModuleProgress]) -> Self {
        let breakdown = StatusBreakdown::from_modules(modules);

        Self {
            kind: ChartKind::Doughnut,
            labels: StatusBreakdown::LABELS.iter().map(|l| l.to_string()).collect(),
            series: vec![SeriesData::new(
                "Modules",
                breakdown.values(),
                &["#28a745", "#ffc107", "#e9ecef"],
            )],
            legend: LegendPosition::Bottom,
            y_begin_at_zero: false,
        }
    }

    /// Values of the first series, the data a single-series chart plots.
    pub fn values(&self) -> &[f64] {
        self.series.first().map(|s| s.values.as_slice()).unwrap_or_default()
    }
}

/// Module counts per known status. Unknown statuses are not counted anywhere.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StatusBreakdown {
    pub completed: usize,
    pub in_progress: usize,
    pub not_started: usize,
}

impl StatusBreakdown {
    pub const LABELS: [&'static str; 3] = ["Completed", "In Progress", "Not Started"];

    pub fn from_modules(modules: &[ModuleProgress]) -> Self {
        modules
            .iter()
            .fold(Self::default(), |mut acc, module| {
                match module.status {
                    ModuleStatus::Completed => acc.completed += 1,
                    ModuleStatus::InProgress => acc.in_progress += 1,
                    ModuleStatus::NotStarted => acc.not_started += 1,
                    ModuleStatus::Other(_) => {}
                }
                acc
            })
    }

    #[cfg(test)]
    pub fn total(&self) -> usize {
        self.completed + self.in_progress + self.not_started
    }

    pub fn values(&self) -> Vec<f64> {
        vec![
            self.completed as f64,
            self.in_progress as f64,
            self.not_started as f64,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn module(status: &str) -> ModuleProgress {
        ModuleProgress {
            name: "m".to_string(),
            status: ModuleStatus::from_wire(status),
            score: None,
        }
    }

    #[test]
    fn test_progress_chart_keeps_delivered_order() {
        let timeline = vec![
            TimelinePoint { date: "2024-01-01".into(), completed: 2.0 },
            TimelinePoint { date: "2024-01-08".into(), completed: 5.0 },
        ];

        let spec = ChartSpec::progress(&timeline);
        assert_eq!(spec.kind, ChartKind::Line);
        assert_eq!(spec.labels, ["2024-01-01", "2024-01-08"]);
        assert_eq!(spec.values(), [2.0, 5.0]);
    }

    #[test]
    fn test_unsorted_timeline_is_not_sorted() {
        let timeline = vec![
            TimelinePoint { date: "Day 4".into(), completed: 2.0 },
            TimelinePoint { date: "Day 1".into(), completed: 0.0 },
        ];
        assert_eq!(ChartSpec::progress(&timeline).labels, ["Day 4", "Day 1"]);
    }

    #[test]
    fn test_breakdown_counts() {
        let modules = vec![
            module("completed"),
            module("completed"),
            module("in_progress"),
            module("not_started"),
        ];

        let spec = ChartSpec::module_breakdown(&modules);
        assert_eq!(spec.kind, ChartKind::Doughnut);
        assert_eq!(spec.values(), [2.0, 1.0, 1.0]);
        assert_eq!(spec.labels, StatusBreakdown::LABELS);
    }

    #[test]
    fn test_unknown_statuses_excluded() {
        let modules = vec![
            module("completed"),
            module("archived"),
            module("COMPLETED"),
            module("not_started"),
        ];

        let breakdown = StatusBreakdown::from_modules(&modules);
        assert_eq!(breakdown, StatusBreakdown { completed: 1, in_progress: 0, not_started: 1 });
        assert!(breakdown.total() <= modules.len());
    }

    #[test]
    fn test_empty_inputs() {
        assert!(ChartSpec::progress(&[]).labels.is_empty());
        assert_eq!(ChartSpec::module_breakdown(&[]).values(), [0.0, 0.0, 0.0]);
    }
}
