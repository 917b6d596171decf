//! Plain-text user report

use super::entity::User;

pub const REPORT_TITLE: &str = "Relatório de Usuários";
pub const EMPTY_REPORT: &str = "Nenhum usuário cadastrado";

/// Render a report listing `users` in the given order
pub fn render_report(users: &[User]) -> String {
    if users.is_empty() {
        return format!("{}.\n", EMPTY_REPORT);
    }

    let mut lines = vec![format!("--- {} ---", REPORT_TITLE)];
    lines.extend(users.iter().map(report_line));

    let mut report = lines.join("\n");
    report.push('\n');
    report
}

fn report_line(user: &User) -> String {
    format!(
        "ID: {}, Nome: {}, Email: {}, Idade: {}, Admin: {}, Status: {}",
        user.id(),
        user.name(),
        user.email(),
        user.age(),
        if user.is_admin() { "sim" } else { "não" },
        user.status(),
    )
}
