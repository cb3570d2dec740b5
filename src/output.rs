//! 端末への結果表示

use colored::Colorize;
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Cell, Color, ContentArrangement, Table};
use rule_check_common::{BodyView, ResultView, StatusCategory, VerdictRow};

/// 確信度バーの長さ（文字数）
const BAR_WIDTH: usize = 10;

/// 結果を表示用テキストに整形
pub fn render_result(view: &ResultView) -> String {
    let mut out = String::new();

    out.push_str(&format!(
        "{} {}    {} {}",
        "Pages:".dimmed(),
        view.pages_label.bold(),
        "Model:".dimmed(),
        view.model_label.bold()
    ));
    if let Some(filename) = &view.filename {
        out.push_str(&format!("    {} {}", "File:".dimmed(), filename));
    }
    out.push('\n');

    match &view.body {
        BodyView::Table(rows) => out.push_str(&render_table(rows).to_string()),
        BodyView::Raw(text) => out.push_str(text),
    }
    out
}

fn render_table(rows: &[VerdictRow]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(vec!["Rule", "Status", "Evidence", "Reasoning", "Confidence"]);

    for row in rows {
        table.add_row(vec![
            Cell::new(format!("{}\n{}", row.rule, row.index_label)),
            status_cell(row),
            Cell::new(&row.evidence),
            Cell::new(&row.reasoning),
            Cell::new(format!(
                "{}\n{}",
                row.confidence_label,
                confidence_bar(row.bar_percent)
            )),
        ]);
    }
    table
}

fn status_cell(row: &VerdictRow) -> Cell {
    let color = match row.category {
        StatusCategory::Pass => Color::Green,
        StatusCategory::Fail => Color::Red,
        StatusCategory::Other => Color::Yellow,
    };
    Cell::new(&row.status_label).fg(color)
}

/// 0〜100% を `█░` のバーにする
pub fn confidence_bar(percent: f64) -> String {
    let percent = if percent.is_finite() { percent.clamp(0.0, 100.0) } else { 0.0 };
    let filled = ((percent / 100.0) * BAR_WIDTH as f64).round() as usize;
    format!("{}{}", "█".repeat(filled), "░".repeat(BAR_WIDTH - filled))
}

pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red(), message.red());
}
