//! Plain-text output for `--print`.

use unicode_width::UnicodeWidthStr;

use crate::error::{AppError, CheckError, Result};
use crate::inventory::InventoryPayload;
use crate::panel::ERROR_MESSAGE;
use crate::types::DisplayRow;

/// Rows as aligned `label  value` lines; missing libraries are marked with `!`
pub fn render_rows(rows: &[DisplayRow]) -> String {
    let label_width = rows.iter().map(|r| r.label.width()).max().unwrap_or(0);

    let mut out = String::new();
    for row in rows {
        let marker = if row.missing { '!' } else { ' ' };
        let pad = label_width - row.label.width();
        out.push_str(&format!(
            "{} {}{}  {}\n",
            marker,
            row.label,
            " ".repeat(pad),
            row.value
        ));
    }
    out
}

/// The single row a failed check leaves in the panel
pub fn render_failure(err: &CheckError) -> String {
    format!("{} ({})\n", ERROR_MESSAGE, err)
}

/// The raw payload, indented
pub fn render_json(payload: &InventoryPayload) -> Result<String> {
    serde_json::to_string_pretty(payload).map_err(|e| AppError::display(e.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn aligns_labels() {
        let rows = vec![
            DisplayRow::new("CPU", "Apple M2 Pro"),
            DisplayRow::new("Python version", "3.12.4"),
            DisplayRow::missing("xformers", "Not installed"),
        ];
        assert_eq!(
            render_rows(&rows),
            "  CPU             Apple M2 Pro\n\
             \x20 Python version  3.12.4\n\
             ! xformers        Not installed\n"
        );
    }

    #[test]
    fn failure_is_one_line() {
        assert_eq!(
            render_failure(&CheckError::Status(404)),
            "Failed to get system information (Status 404)\n"
        );
    }

    #[test]
    fn json_keeps_unknown_keys() {
        let payload = InventoryPayload::from_json(r#"{"cuda":{"version":"12.4"}}"#).unwrap();
        let text = render_json(&payload).unwrap();
        assert!(text.contains("\"version\": \"12.4\""));
    }
}
