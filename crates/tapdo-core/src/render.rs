use std::io::Write;

use tapdo_model::{RowView, ScreenStyle, TaskListScreen};
use unicode_width::UnicodeWidthStr;

use crate::config::Config;

const MIN_INPUT_WIDTH: usize = 30;

#[derive(Debug, Clone)]
pub struct Renderer {
    color: bool,
    style: ScreenStyle,
}

impl Renderer {
    pub fn new(cfg: &Config, color: bool) -> Self {
        Self {
            color: color && cfg.style.color,
            style: cfg.screen_style(),
        }
    }

    pub fn style(&self) -> &ScreenStyle {
        &self.style
    }

    #[tracing::instrument(skip_all, fields(rows = screen.len()))]
    pub fn render<W: Write>(&self, mut out: W, screen: &TaskListScreen) -> anyhow::Result<()> {
        writeln!(out, "{}", self.paint(&self.style.title, "1"))?;

        let (shown, is_placeholder) = if screen.draft().is_empty() {
            (self.style.placeholder.as_str(), true)
        } else {
            (screen.draft(), false)
        };
        let width = UnicodeWidthStr::width(shown).max(MIN_INPUT_WIDTH);
        let padding = width - UnicodeWidthStr::width(shown);
        let shown = if is_placeholder {
            self.paint(shown, "2")
        } else {
            shown.to_string()
        };
        writeln!(out, "[ {}{} ]", shown, " ".repeat(padding))?;
        writeln!(out, "< {} >", self.style.add_label)?;

        let rows = screen.rows(&self.style);
        let index_width = rows.len().saturating_sub(1).to_string().len();
        for row in &rows {
            writeln!(
                out,
                "{:>width$}  {}",
                row.index,
                self.paint_row(row),
                width = index_width
            )?;
        }

        Ok(())
    }

    fn paint_row(&self, row: &RowView) -> String {
        let mut codes = Vec::with_capacity(2);
        if row.strikethrough {
            codes.push("9");
        }
        if let Some(code) = color_code(&row.color) {
            codes.push(code);
        }
        if codes.is_empty() {
            return row.text.clone();
        }
        self.paint(&row.text, &codes.join(";"))
    }

    fn paint(&self, text: &str, code: &str) -> String {
        if !self.color {
            return text.to_string();
        }
        format!("\x1b[{code}m{text}\x1b[0m")
    }
}

fn color_code(name: &str) -> Option<&'static str> {
    let code = match name.trim().to_ascii_lowercase().as_str() {
        "black" => "30",
        "red" => "31",
        "green" => "32",
        "yellow" => "33",
        "blue" => "34",
        "magenta" => "35",
        "cyan" => "36",
        "white" => "37",
        "gray" | "grey" => "90",
        _ => return None,
    };
    Some(code)
}
