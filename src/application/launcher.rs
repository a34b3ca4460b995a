// Module selector and launch controller
use crate::domain::catalog::ModuleCatalog;
use crate::domain::identity::{SubjectId, USER_ID_KEY};
use crate::presentation::page::{Fragment, Page, Slot, write_fragments_or_skip};

/// Moves the browsing context to another address.
pub trait Navigator {
    fn navigate(&mut self, url: &str);
}

/// The module selection dialog.
pub trait SelectionDialog {
    fn show(&mut self);
    fn hide(&mut self);
}

/// Render one launch control per catalog entry, in catalog order.
pub fn render_selector(page: &mut dyn Page, catalog: &ModuleCatalog) {
    let buttons = catalog
        .modules()
        .iter()
        .map(|module| Fragment::LaunchButton {
            module: module.clone(),
        })
        .collect();

    write_fragments_or_skip(page, Slot::ModuleSelector, buttons);
}

/// Training destination for a module and subject.
pub fn training_url(module: &str, subject: &SubjectId) -> String {
    format!(
        "/training?module={}&{}={}",
        urlencoding::encode(module),
        USER_ID_KEY,
        urlencoding::encode(subject.as_str())
    )
}

pub struct ModuleLauncher<N> {
    subject: SubjectId,
    catalog: ModuleCatalog,
    navigator: N,
    open_dialog: Option<Box<dyn SelectionDialog + Send>>,
}

impl<N: Navigator> ModuleLauncher<N> {
    pub fn new(subject: SubjectId, catalog: ModuleCatalog, navigator: N) -> Self {
        Self {
            subject,
            catalog,
            navigator,
            open_dialog: None,
        }
    }

    pub fn catalog(&self) -> &ModuleCatalog {
        &self.catalog
    }

    /// Show the selection dialog and keep hold of it until a module starts.
    pub fn open_selector(&mut self, mut dialog: Box<dyn SelectionDialog + Send>) {
        if let Some(mut previous) = self.open_dialog.take() {
            previous.hide();
        }
        dialog.show();
        self.open_dialog = Some(dialog);
    }

    pub fn is_selector_open(&self) -> bool {
        self.open_dialog.is_some()
    }

    /// Close the dialog if one is open, then leave the page for the training
    /// destination. Returns the navigator so the caller can observe the exit.
    pub fn start(mut self, module: &str) -> N {
        tracing::info!(module, subject = %self.subject, "starting module");

        if let Some(mut dialog) = self.open_dialog.take() {
            dialog.hide();
        }

        let url = training_url(module, &self.subject);
        tracing::info!(%url, "navigating to training");
        self.navigator.navigate(&url);
        self.navigator
    }
}
