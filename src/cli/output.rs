//! Output formatting utilities for the CLI.

use comfy_table::{presets, Attribute, Cell, ContentArrangement, Table};
use serde::Serialize;

use crate::domain::models::SearchPage;

/// Command results that render as text or JSON
pub trait CommandOutput: Serialize {
    /// Terminal rendering
    fn to_human(&self) -> String;
    /// JSON rendering
    fn to_json(&self) -> serde_json::Value;
}

/// Print `result` to stdout in the selected format
pub fn output<T: CommandOutput>(result: &T, json_mode: bool) {
    if json_mode {
        println!("{}", serde_json::to_string_pretty(&result.to_json()).unwrap_or_default());
    } else {
        println!("{}", result.to_human());
    }
}

/// Truncate a string to a maximum number of characters, appending "..." if truncated.
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

impl CommandOutput for SearchPage {
    fn to_human(&self) -> String {
        if self.results.is_empty() {
            return "No matching messages.".to_string();
        }

        let mut table = Table::new();
        table
            .load_preset(presets::UTF8_FULL_CONDENSED)
            .set_content_arrangement(ContentArrangement::Dynamic)
            .set_header(vec![
                Cell::new("#").add_attribute(Attribute::Bold),
                Cell::new("Message").add_attribute(Attribute::Bold),
            ]);

        let offset = (self.page - 1) * self.page_size;
        for (i, text) in self.results.iter().enumerate() {
            table.add_row(vec![
                Cell::new(offset + i + 1),
                Cell::new(truncate(text, 120)),
            ]);
        }

        format!(
            "{table}\nPage {} of {} ({} match{})",
            self.page,
            self.total_pages,
            self.total,
            if self.total == 1 { "" } else { "es" }
        )
    }

    fn to_json(&self) -> serde_json::Value {
        serde_json::to_value(self).unwrap_or_default()
    }
}
