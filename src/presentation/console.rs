// Console front end - renders the dashboard as a text frame
use crate::application::launcher::{ModuleLauncher, Navigator, SelectionDialog};
use crate::domain::catalog::ModuleCatalog;
use crate::domain::chart::{ChartKind, ChartSpec};
use crate::domain::snapshot::format_number;
use crate::presentation::page::{ChartHandle, Fragment, Page, Slot, SlotAbsent};
use std::collections::{BTreeMap, HashMap};
use std::fmt::Write;
use std::io::BufRead;
use tokio::sync::{mpsc, oneshot};

const BAR_WIDTH: f64 = 30.0;

/// Page printing a full frame to stdout after each applied update.
#[derive(Debug, Default)]
pub struct ConsolePage {
    texts: BTreeMap<Slot, String>,
    fragments: BTreeMap<Slot, Vec<Fragment>>,
    charts: HashMap<ChartHandle, (Slot, ChartSpec)>,
    next_handle: u64,
}

impl ConsolePage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn live_chart_count(&self) -> usize {
        self.charts.len()
    }

    pub fn render_frame(&self) -> String {
        let mut out = String::new();
        let text = |slot: Slot| self.texts.get(&slot).map(String::as_str).unwrap_or("--");

        let _ = writeln!(out, "=== {} | {} ===", text(Slot::OrgName), text(Slot::UserRole));
        let _ = writeln!(
            out,
            "Completion {}  Avg score {}  Modules {}  Risk {}",
            text(Slot::CompletionPercentage),
            text(Slot::AvgScore),
            text(Slot::ModulesCompleted),
            text(Slot::RiskScore),
        );

        for slot in [Slot::ProgressChart, Slot::ModulesChart] {
            if let Some((_, spec)) = self.charts.values().find(|(s, _)| *s == slot) {
                out.push('\n');
                render_chart(&mut out, spec);
            }
        }

        for (title, slot) in [
            ("Modules", Slot::ModulesList),
            ("Alerts", Slot::AlertsSection),
            ("Start a module (m to open, number to launch)", Slot::ModuleSelector),
        ] {
            if let Some(fragments) = self.fragments.get(&slot) {
                let _ = writeln!(out, "\n{}:", title);
                for (index, fragment) in fragments.iter().enumerate() {
                    let _ = writeln!(out, "  {}", render_fragment(index, fragment));
                }
            }
        }

        out
    }
}

fn render_fragment(index: usize, fragment: &Fragment) -> String {
    match fragment {
        Fragment::Alert { class, message } => format!("[{}] {}", class, message),
        Fragment::Module { name, status, score } => match score {
            Some(score) => format!("{:<28} {:<12} {}", name, status, score),
            None => format!("{:<28} {}", name, status),
        },
        Fragment::LaunchButton { module } => format!("{}) {}", index + 1, module),
    }
}

fn render_chart(out: &mut String, spec: &ChartSpec) {
    let title = match spec.kind {
        ChartKind::Line => "Progress",
        ChartKind::Doughnut => "Module status",
    };
    let _ = writeln!(out, "{}:", title);

    let values = spec.values();
    let max = values.iter().copied().fold(0.0_f64, f64::max);
    for (label, value) in spec.labels.iter().zip(values) {
        let width = if max > 0.0 {
            ((value / max) * BAR_WIDTH).round().max(0.0) as usize
        } else {
            0
        };
        let _ = writeln!(out, "  {:<12} {:<30} {}", label, "#".repeat(width), format_number(*value));
    }
}

impl Page for ConsolePage {
    fn has_slot(&self, _slot: Slot) -> bool {
        true
    }

    fn write_text(&mut self, slot: Slot, text: &str) -> Result<(), SlotAbsent> {
        self.texts.insert(slot, text.to_string());
        Ok(())
    }

    fn write_fragments(&mut self, slot: Slot, fragments: Vec<Fragment>) -> Result<(), SlotAbsent> {
        self.fragments.insert(slot, fragments);
        Ok(())
    }

    fn draw_chart(&mut self, slot: Slot, spec: &ChartSpec) -> Result<ChartHandle, SlotAbsent> {
        self.next_handle += 1;
        let handle = ChartHandle(self.next_handle);
        self.charts.insert(handle, (slot, spec.clone()));
        Ok(handle)
    }

    fn destroy_chart(&mut self, handle: ChartHandle) {
        self.charts.remove(&handle);
    }

    fn commit(&mut self) {
        let stamp = chrono::Local::now().format("%H:%M:%S");
        tracing::trace!(charts = self.live_chart_count(), "frame committed");
        println!("\n[{}]\n{}", stamp, self.render_frame());
    }
}

/// Selection dialog listing the catalog on stdout.
pub struct ConsoleDialog {
    catalog: ModuleCatalog,
}

impl ConsoleDialog {
    pub fn new(catalog: ModuleCatalog) -> Self {
        Self { catalog }
    }
}

impl SelectionDialog for ConsoleDialog {
    fn show(&mut self) {
        println!("\nSelect a training module:");
        for (index, module) in self.catalog.modules().iter().enumerate() {
            println!("  {}) {}", index + 1, module);
        }
    }

    fn hide(&mut self) {
        tracing::debug!("module dialog closed");
    }
}

/// Hands the destination to whoever owns the page lifetime.
pub struct ConsoleNavigator {
    exit: Option<oneshot::Sender<String>>,
}

impl ConsoleNavigator {
    pub fn new() -> (Self, oneshot::Receiver<String>) {
        let (tx, rx) = oneshot::channel();
        (Self { exit: Some(tx) }, rx)
    }
}

impl Navigator for ConsoleNavigator {
    fn navigate(&mut self, url: &str) {
        if let Some(exit) = self.exit.take() {
            let _ = exit.send(url.to_string());
        }
    }
}

/// Line printed when the page is left for a training destination.
pub fn navigation_notice(url: &str) -> String {
    format!("Navigating to {}", url)
}

/// Forward stdin lines from a dedicated thread, so a pending read never
/// holds up runtime shutdown. The channel closes at end of input.
pub fn spawn_stdin_reader() -> mpsc::UnboundedReceiver<String> {
    let (tx, rx) = mpsc::unbounded_channel();
    std::thread::spawn(move || {
        for line in std::io::stdin().lock().lines() {
            let Ok(line) = line else { break };
            if tx.send(line).is_err() {
                break;
            }
        }
    });
    rx
}

/// Read user commands until a module is launched, then return its
/// destination. `m` opens the selection dialog; a catalog number or name
/// starts that module. If input ends, the page stays open.
pub async fn run_commands(
    mut commands: mpsc::UnboundedReceiver<String>,
    mut launcher: ModuleLauncher<ConsoleNavigator>,
    destination: oneshot::Receiver<String>,
) -> anyhow::Result<String> {
    while let Some(line) = commands.recv().await {
        let command = line.trim();
        if command.is_empty() {
            continue;
        }

        if command.eq_ignore_ascii_case("m") {
            if launcher.is_selector_open() {
                tracing::debug!("module dialog already open, reopening");
            }
            let dialog = ConsoleDialog::new(launcher.catalog().clone());
            launcher.open_selector(Box::new(dialog));
            continue;
        }

        match launcher.catalog().lookup(command).map(str::to_string) {
            Some(module) => {
                launcher.start(&module);
                return Ok(destination.await?);
            }
            None => println!("Unknown module: {}", command),
        }
    }

    tracing::debug!("command input closed");
    std::future::pending().await
}
