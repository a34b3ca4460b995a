// Display abstraction - named slots that receive text, fragments or charts
use crate::domain::chart::ChartSpec;
use std::fmt;

/// A named location in the displayed view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Slot {
    OrgName,
    UserRole,
    CompletionPercentage,
    AvgScore,
    ModulesCompleted,
    RiskScore,
    AlertsSection,
    ProgressChart,
    ModulesChart,
    ModulesList,
    ModuleSelector,
}

impl Slot {
    /// Element identifier of the slot in the page markup.
    pub fn element_id(self) -> &'static str {
        match self {
            Slot::OrgName => "org-name",
            Slot::UserRole => "user-role",
            Slot::CompletionPercentage => "completion-percentage",
            Slot::AvgScore => "avg-score",
            Slot::ModulesCompleted => "modules-completed",
            Slot::RiskScore => "risk-score",
            Slot::AlertsSection => "alerts-section",
            Slot::ProgressChart => "progressChart",
            Slot::ModulesChart => "modulesChart",
            Slot::ModulesList => "modules-list",
            Slot::ModuleSelector => "module-selector",
        }
    }
}

impl fmt::Display for Slot {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.element_id())
    }
}

/// A rendered entry inside a list-like slot.
#[derive(Debug, Clone, PartialEq)]
pub enum Fragment {
    Alert {
        class: String,
        message: String,
    },
    Module {
        name: String,
        status: String,
        score: Option<String>,
    },
    /// Actionable control bound to a catalog module name.
    LaunchButton {
        module: String,
    },
}

/// Opaque handle to a live chart instance drawn by the page.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ChartHandle(pub u64);

/// The requested slot does not exist on this page. Expected, never fatal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
#[error("slot `{0}` is not present on the page")]
pub struct SlotAbsent(pub Slot);

pub trait Page: Send {
    fn has_slot(&self, slot: Slot) -> bool;

    /// Replace the text content of a slot.
    fn write_text(&mut self, slot: Slot, text: &str) -> Result<(), SlotAbsent>;

    /// Replace the whole content of a list slot.
    fn write_fragments(&mut self, slot: Slot, fragments: Vec<Fragment>) -> Result<(), SlotAbsent>;

    /// Construct a chart instance on the slot's drawing surface.
    fn draw_chart(&mut self, slot: Slot, spec: &ChartSpec) -> Result<ChartHandle, SlotAbsent>;

    fn destroy_chart(&mut self, handle: ChartHandle);

    /// Called once after a batch of writes has been applied.
    fn commit(&mut self) {}
}

/// Write text, treating an absent slot as a no-op.
pub fn write_text_or_skip(page: &mut dyn Page, slot: Slot, text: &str) {
    if let Err(absent) = page.write_text(slot, text) {
        tracing::trace!(%absent, "skipping text update");
    }
}

/// Write fragments, treating an absent slot as a no-op.
pub fn write_fragments_or_skip(page: &mut dyn Page, slot: Slot, fragments: Vec<Fragment>) {
    if let Err(absent) = page.write_fragments(slot, fragments) {
        tracing::trace!(%absent, "skipping fragment update");
    }
}
