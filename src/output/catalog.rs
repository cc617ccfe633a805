use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ContentArrangement, Table,
    modifiers::UTF8_SOLID_INNER_BORDERS, presets::UTF8_FULL,
};

use crate::syllabus::{CourseDuration, SUBJECT_CATALOG};

fn header_cell(text: &str, use_color: bool) -> Cell {
    let mut cell = Cell::new(text).add_attribute(Attribute::Bold);
    if use_color {
        cell = cell.fg(Color::Cyan);
    }
    cell
}

/// Subjects table: catalog number (usable as `#N`) and name
pub(crate) fn subjects_table(use_color: bool) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table.set_header(vec![
        header_cell("#", use_color),
        header_cell("Subject", use_color),
    ]);
    for (i, subject) in SUBJECT_CATALOG.iter().enumerate() {
        table.add_row(vec![
            Cell::new(format!("#{}", i + 1)).set_alignment(CellAlignment::Right),
            Cell::new(subject),
        ]);
    }
    table.add_row(vec![
        Cell::new(""),
        Cell::new("Any other text is used as a custom subject").add_attribute(Attribute::Italic),
    ]);
    table
}

pub(crate) fn durations_line() -> String {
    let labels: Vec<String> = CourseDuration::all().map(|d| d.label()).collect();
    format!(
        "Durations: {} (default {})",
        labels.join(", "),
        CourseDuration::default()
    )
}

pub(crate) fn print_catalog(use_color: bool) {
    println!("{}", subjects_table(use_color));
    println!("\n  {}\n", durations_line());
}
