// File: helpbot-core/src/services/help/layout.rs
//
// Two-column help table rows:
//
//   help COMMAND              Lists help information for terms or commands
//                             that begin with COMMAND.

use crate::config::HelpConfig;

/// Column widths for the help table, in characters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TableLayout {
    pub key_width: usize,
    pub value_width: usize,
}

impl TableLayout {
    pub fn new(key_width: usize, value_width: usize) -> Self {
        Self { key_width, value_width }
    }

    pub fn format_row(&self, key: &str, description: &str) -> String {
        format_row(key, description, self.key_width, self.value_width)
    }
}

impl From<&HelpConfig> for TableLayout {
    fn from(cfg: &HelpConfig) -> Self {
        Self::new(cfg.key_width, cfg.value_width)
    }
}

/// Renders `key` padded to `key_width`, followed by `description` packed
/// greedily into lines of at most `value_width` characters. Continuation
/// lines are indented by `key_width + 1` so they sit under the description
/// column. Keys wider than the column and words wider than a line are kept
/// whole. The result never ends with a newline.
pub fn format_row(key: &str, description: &str, key_width: usize, value_width: usize) -> String {
    let indent = " ".repeat(key_width + 1);
    let mut row = format!("{:<width$}", key, width = key_width);

    let mut line = String::new();
    let mut line_len = 0usize;
    let mut first_line = true;

    for word in description.split_whitespace() {
        let word_len = word.chars().count();

        if line_len > 0 && line_len + 1 + word_len > value_width {
            push_line(&mut row, &line, first_line, &indent);
            first_line = false;
            line.clear();
            line_len = 0;
        }

        if line_len > 0 {
            line.push(' ');
            line_len += 1;
        }
        line.push_str(word);
        line_len += word_len;
    }

    if line_len > 0 {
        push_line(&mut row, &line, first_line, &indent);
    }

    row
}

fn push_line(row: &mut String, line: &str, first_line: bool, indent: &str) {
    if first_line {
        row.push(' ');
    } else {
        row.push('\n');
        row.push_str(indent);
    }
    row.push_str(line);
}
