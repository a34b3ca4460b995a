// Chart lifecycle manager - owns the live chart instance of each chart slot
use crate::domain::chart::ChartSpec;
use crate::domain::snapshot::DashboardSnapshot;
use crate::presentation::page::{ChartHandle, Page, Slot};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ChartSlot {
    Progress,
    Modules,
}

impl ChartSlot {
    pub fn slot(self) -> Slot {
        match self {
            ChartSlot::Progress => Slot::ProgressChart,
            ChartSlot::Modules => Slot::ModulesChart,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SlotState {
    /// No drawing surface on the page. Terminal; rendering is a no-op.
    Absent,
    Uninitialized,
    Live(ChartHandle),
}

#[derive(Debug)]
pub struct ChartLifecycleManager {
    progress: SlotState,
    modules: SlotState,
}

impl ChartLifecycleManager {
    pub fn new() -> Self {
        Self {
            progress: SlotState::Uninitialized,
            modules: SlotState::Uninitialized,
        }
    }

    /// Rebuild both charts from a snapshot.
    pub fn render(&mut self, page: &mut dyn Page, snapshot: &DashboardSnapshot) {
        self.replace(page, ChartSlot::Progress, &ChartSpec::progress(&snapshot.completion_timeline));
        self.replace(page, ChartSlot::Modules, &ChartSpec::module_breakdown(&snapshot.modules));
        tracing::trace!(
            progress = ?self.state(ChartSlot::Progress),
            modules = ?self.state(ChartSlot::Modules),
            "charts rendered"
        );
    }

    /// Destroy the slot's live instance, then construct a new one from `spec`.
    /// Instances are never patched in place and never overlap.
    pub fn replace(&mut self, page: &mut dyn Page, chart: ChartSlot, spec: &ChartSpec) -> SlotState {
        let slot = chart.slot();
        match self.state(chart) {
            SlotState::Absent => return SlotState::Absent,
            SlotState::Live(previous) => page.destroy_chart(previous),
            SlotState::Uninitialized => {}
        }

        let next = if !page.has_slot(slot) {
            tracing::trace!(%slot, "chart surface absent");
            SlotState::Absent
        } else {
            match page.draw_chart(slot, spec) {
                Ok(handle) => SlotState::Live(handle),
                Err(absent) => {
                    tracing::debug!(%absent, "chart surface disappeared before drawing");
                    SlotState::Absent
                }
            }
        };
        *self.state_mut(chart) = next;
        next
    }

    pub fn state(&self, chart: ChartSlot) -> SlotState {
        match chart {
            ChartSlot::Progress => self.progress,
            ChartSlot::Modules => self.modules,
        }
    }

    fn state_mut(&mut self, chart: ChartSlot) -> &mut SlotState {
        match chart {
            ChartSlot::Progress => &mut self.progress,
            ChartSlot::Modules => &mut self.modules,
        }
    }
}

impl Default for ChartLifecycleManager {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{RecordingPage, demo_snapshot};

    #[test]
    fn test_first_render_goes_live() {
        let mut page = RecordingPage::default();
        let mut charts = ChartLifecycleManager::new();
        assert_eq!(charts.state(ChartSlot::Progress), SlotState::Uninitialized);

        charts.render(&mut page, &demo_snapshot());

        assert!(matches!(charts.state(ChartSlot::Progress), SlotState::Live(_)));
        assert!(matches!(charts.state(ChartSlot::Modules), SlotState::Live(_)));
        assert_eq!(page.charts_on(Slot::ModulesChart)[0].values(), [2.0, 1.0, 1.0]);
    }

    #[test]
    fn test_repeated_renders_keep_one_instance_per_slot() {
        let mut page = RecordingPage::default();
        let mut charts = ChartLifecycleManager::new();
        let snapshot = demo_snapshot();

        for _ in 0..5 {
            charts.render(&mut page, &snapshot);
            assert_eq!(page.charts_on(Slot::ProgressChart).len(), 1);
            assert_eq!(page.charts_on(Slot::ModulesChart).len(), 1);
        }
        assert_eq!(page.live_charts.len(), 2);
    }

    #[test]
    fn test_destroy_precedes_construct() {
        let mut page = RecordingPage::default();
        let mut charts = ChartLifecycleManager::new();
        let spec = ChartSpec::progress(&[]);

        charts.replace(&mut page, ChartSlot::Progress, &spec);
        charts.replace(&mut page, ChartSlot::Progress, &spec);

        assert_eq!(
            page.events,
            ["draw progressChart #1", "destroy progressChart #1", "draw progressChart #2"]
        );
        assert_eq!(charts.state(ChartSlot::Progress), SlotState::Live(ChartHandle(2)));
    }

    #[test]
    fn test_absent_surface_is_noop() {
        let mut page = RecordingPage::without(&[Slot::ModulesChart]);
        let mut charts = ChartLifecycleManager::new();

        charts.render(&mut page, &demo_snapshot());
        charts.render(&mut page, &demo_snapshot());

        assert!(page.charts_on(Slot::ModulesChart).is_empty());
        assert_eq!(charts.state(ChartSlot::Modules), SlotState::Absent);
        assert_eq!(
            charts.replace(&mut page, ChartSlot::Modules, &ChartSpec::module_breakdown(&[])),
            SlotState::Absent
        );
        assert_eq!(page.charts_on(Slot::ProgressChart).len(), 1);
    }

    #[test]
    fn test_missing_surface_stays_absent() {
        let mut page = RecordingPage::without(&[Slot::ModulesChart]);
        let mut charts = ChartLifecycleManager::new();
        assert_eq!(charts.state(ChartSlot::Modules), SlotState::Uninitialized);

        charts.render(&mut page, &demo_snapshot());
        assert_eq!(charts.state(ChartSlot::Modules), SlotState::Absent);
        assert!(matches!(charts.state(ChartSlot::Progress), SlotState::Live(_)));

        let spec = ChartSpec::module_breakdown(&[]);
        assert_eq!(charts.replace(&mut page, ChartSlot::Modules, &spec), SlotState::Absent);
        assert_eq!(charts.state(ChartSlot::Modules), SlotState::Absent);
        assert!(!page.events.iter().any(|e| e.contains("modulesChart")));
    }
}
