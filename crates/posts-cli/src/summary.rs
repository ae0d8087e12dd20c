use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use posts_lexicon::{StopWordSet, StopWordSource};

use crate::types::RunSummary;

/// Summary table for a dataset run; goes to stderr so stdout stays data.
pub fn print_summary(summary: &RunSummary) {
    eprintln!("{}", summary_table(summary));
}

pub fn summary_table(summary: &RunSummary) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Command"),
        header_cell("Input"),
        header_cell("Output"),
        header_cell("Rows in"),
        header_cell("Rows out"),
        header_cell("Skipped"),
        header_cell("Elapsed"),
    ]);
    apply_table_style(&mut table);
    for index in 3..=6 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    let output = summary
        .output
        .as_ref()
        .map_or_else(|| "stdout".to_string(), |path| path.display().to_string());
    table.add_row(vec![
        Cell::new(summary.command).add_attribute(Attribute::Bold),
        Cell::new(summary.input.display()),
        Cell::new(output),
        Cell::new(summary.rows_in),
        Cell::new(summary.rows_out),
        skipped_cell(summary.skipped),
        Cell::new(format!("{:.2?}", summary.elapsed)),
    ]);
    table
}

/// Source, version and size of the active stop-word list.
pub fn stop_word_table(set: &StopWordSet, source: &StopWordSource) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Source"),
        header_cell("Version"),
        header_cell("Entries"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    let source = match source {
        StopWordSource::Directory(dir) => Cell::new(dir.display()),
        StopWordSource::Builtin => Cell::new("builtin").fg(Color::Cyan),
    };
    table.add_row(vec![source, Cell::new(set.version()), Cell::new(set.len())]);
    table
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label).add_attribute(Attribute::Bold)
}

fn skipped_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count)
            .fg(Color::Yellow)
            .add_attribute(Attribute::Bold)
    } else {
        Cell::new(count).add_attribute(Attribute::Dim)
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
