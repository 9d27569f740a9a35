//! Mechanic display formatting

use crate::models::Mechanic;

/// Format the mechanic roster as a table
pub fn format_mechanic_list(mechanics: &[Mechanic]) -> String {
    if mechanics.is_empty() {
        return "No mechanics found.".to_string();
    }

    let name_width = mechanics
        .iter()
        .map(|m| m.name.len())
        .max()
        .unwrap_or(4)
        .max(4);

    let mut output = String::new();
    output.push_str(&format!(
        "{:<name_width$}  {:<18}  {}\n",
        "Name",
        "Role",
        "Status",
        name_width = name_width,
    ));
    output.push_str(&format!(
        "{:-<name_width$}  {:-<18}  {:-<10}\n",
        "",
        "",
        "",
        name_width = name_width,
    ));

    for mechanic in mechanics {
        output.push_str(&format!(
            "{:<name_width$}  {:<18}  {}\n",
            mechanic.name,
            mechanic.role.to_string(),
            mechanic.status,
            name_width = name_width,
        ));
    }

    output
}
