// Alert feed renderer
use crate::domain::alert::AlertNotice;
use crate::presentation::page::{Fragment, Page, Slot, write_fragments_or_skip};

/// Replace the alert section with the given notices.
pub fn render(page: &mut dyn Page, alerts: &[AlertNotice]) {
    let fragments = alerts
        .iter()
        .map(|a| Fragment::Alert {
            class: a.css_class(),
            message: a.message.clone(),
        })
        .collect();

    write_fragments_or_skip(page, Slot::AlertsSection, fragments);
}
