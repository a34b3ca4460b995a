// Main entry point - Dependency injection and dashboard startup
mod application;
mod domain;
mod infrastructure;
mod presentation;
#[cfg(test)]
mod testing;

use std::sync::Arc;
use tokio::sync::Mutex;
use tracing_subscriber::EnvFilter;

use crate::application::dashboard_view::DashboardView;
use crate::application::identity_resolver::IdentityResolver;
use crate::application::launcher::ModuleLauncher;
use crate::application::refresh_scheduler::RefreshScheduler;
use crate::domain::catalog::ModuleCatalog;
use crate::domain::identity::NavigationContext;
use crate::infrastructure::config::load_dashboard_config;
use crate::infrastructure::http_api::HttpDashboardApi;
use crate::infrastructure::state_store::FileIdentityStore;
use crate::presentation::console::{
    ConsoleNavigator, ConsolePage, navigation_notice, run_commands, spawn_stdin_reader,
};

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    // Load configuration
    let config = load_dashboard_config()?;

    // Resolve whose dashboard this page load shows
    let address = std::env::args().nth(1).unwrap_or_default();
    let store = FileIdentityStore::new(&config.identity.state_file);
    let subject = IdentityResolver::new(store).resolve(&NavigationContext::parse(&address));

    // Create backend client (infrastructure layer)
    let api = Arc::new(HttpDashboardApi::new(config.api.base_url.clone()));

    // Create view and scheduler (application layer)
    let catalog = ModuleCatalog::default();
    let view = Arc::new(Mutex::new(DashboardView::new(ConsolePage::new(), catalog.clone())));
    let scheduler = RefreshScheduler::new(api, view, subject.clone(), config.refresh.interval());

    tracing::info!(base_url = %config.api.base_url, subject = %subject, "dashboard loaded");
    let refresh = tokio::spawn(scheduler.run());

    // User-triggered launches run independently of the refresh cycle
    let (navigator, destination) = ConsoleNavigator::new();
    let launcher = ModuleLauncher::new(subject, catalog, navigator);
    let commands = spawn_stdin_reader();

    tokio::select! {
        url = run_commands(commands, launcher, destination) => {
            let url = url?;
            println!("{}", navigation_notice(&url));
        }
        _ = tokio::signal::ctrl_c() => {
            tracing::info!("dashboard closed");
        }
    }

    refresh.abort();
    Ok(())
}
