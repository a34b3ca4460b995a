// KPI renderer - scalar summary values and the header
use crate::domain::snapshot::{DashboardSnapshot, Kpis, UserProfile, format_number};
use crate::presentation::page::{Page, Slot, write_text_or_skip};

pub fn render_header(page: &mut dyn Page, user: &UserProfile) {
    write_text_or_skip(page, Slot::OrgName, &user.organization);
    write_text_or_skip(page, Slot::UserRole, &user.role);
}

/// Write the four KPI tiles. Missing slots are skipped.
pub fn render_kpis(page: &mut dyn Page, kpis: &Kpis) {
    let completion = &kpis.training_completion;

    write_text_or_skip(page, Slot::CompletionPercentage, &format_percentage(completion.percentage));
    write_text_or_skip(page, Slot::AvgScore, &format_percentage(kpis.average_quiz_score));
    write_text_or_skip(
        page,
        Slot::ModulesCompleted,
        &format!("{}/{}", format_number(completion.completed), format_number(completion.total)),
    );
    write_text_or_skip(page, Slot::RiskScore, &kpis.risk_score);
}

pub fn render(page: &mut dyn Page, snapshot: &DashboardSnapshot) {
    render_header(page, &snapshot.user);
    render_kpis(page, &snapshot.kpis);
}

/// Round half-up to an integer and suffix with `%`.
pub fn format_percentage(value: f64) -> String {
    format!("{}%", format_number((value + 0.5).floor()))
}
