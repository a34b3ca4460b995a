// Dashboard view - applies fetched results to the page
use crate::application::chart_manager::ChartLifecycleManager;
use crate::application::{alert_feed, kpi_renderer, launcher, module_list};
use crate::domain::alert::AlertNotice;
use crate::domain::catalog::ModuleCatalog;
use crate::domain::snapshot::DashboardSnapshot;
use crate::presentation::page::Page;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApplyOutcome {
    Applied,
    /// A later cycle already applied its result.
    Stale,
}

/// Owns the page and everything rendered onto it. Metrics and alerts are
/// guarded by separate cycle counters so an older result never overwrites a
/// newer one.
pub struct DashboardView<P> {
    page: P,
    charts: ChartLifecycleManager,
    catalog: ModuleCatalog,
    metrics_cycle: u64,
    alerts_cycle: u64,
}

impl<P: Page> DashboardView<P> {
    pub fn new(page: P, catalog: ModuleCatalog) -> Self {
        Self {
            page,
            charts: ChartLifecycleManager::new(),
            catalog,
            metrics_cycle: 0,
            alerts_cycle: 0,
        }
    }

    #[cfg(test)]
    pub fn page(&self) -> &P {
        &self.page
    }

    /// Fan a snapshot out to the KPI tiles, charts, module list and selector.
    pub fn apply_snapshot(&mut self, cycle: u64, snapshot: &DashboardSnapshot) -> ApplyOutcome {
        if cycle <= self.metrics_cycle {
            tracing::debug!(cycle, applied = self.metrics_cycle, "dropping stale metrics");
            return ApplyOutcome::Stale;
        }
        self.metrics_cycle = cycle;

        let page: &mut dyn Page = &mut self.page;
        kpi_renderer::render(page, snapshot);
        self.charts.render(page, snapshot);
        module_list::render(page, &snapshot.modules);
        launcher::render_selector(page, &self.catalog);
        page.commit();

        ApplyOutcome::Applied
    }

    pub fn apply_alerts(&mut self, cycle: u64, alerts: &[AlertNotice]) -> ApplyOutcome {
        if cycle <= self.alerts_cycle {
            tracing::debug!(cycle, applied = self.alerts_cycle, "dropping stale alerts");
            return ApplyOutcome::Stale;
        }
        self.alerts_cycle = cycle;

        alert_feed::render(&mut self.page, alerts);
        self.page.commit();

        ApplyOutcome::Applied
    }
}
