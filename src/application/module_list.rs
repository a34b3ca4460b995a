// Module list renderer - status list of assigned modules
use crate::domain::snapshot::{ModuleProgress, format_number};
use crate::presentation::page::{Fragment, Page, Slot, write_fragments_or_skip};

pub fn render(page: &mut dyn Page, modules: &[ModuleProgress]) {
    let fragments = modules
        .iter()
        .map(|m| Fragment::Module {
            name: m.name.clone(),
            status: m.status.to_string(),
            score: m.score.map(|s| format!("{}%", format_number(s))),
        })
        .collect();

    write_fragments_or_skip(page, Slot::ModulesList, fragments);
}
