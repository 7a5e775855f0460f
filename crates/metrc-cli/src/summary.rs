use std::path::Path;

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::types::ExtractResult;

pub fn print_summary(result: &ExtractResult) {
    if let Some(path) = &result.output_path {
        println!("Output: {}", path.display());
    }
    if let Some(path) = &result.report_path {
        println!("Run report: {}", path.display());
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("File"),
        header_cell("Manifest"),
        header_cell("Customer"),
        header_cell("Packages"),
        header_cell("Services"),
        header_cell("Rows"),
    ]);
    apply_table_style(&mut table);
    for index in 3..6 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    let mut total_packages = 0usize;
    let mut total_rows = 0usize;
    for document in &result.documents {
        total_packages += document.package_count;
        total_rows += document.row_count;
        table.add_row(vec![
            Cell::new(file_label(&document.source_file)),
            text_cell(document.header.manifest_number.as_deref()),
            text_cell(document.customer.as_deref()),
            count_cell(document.package_count),
            count_cell(document.service_count),
            count_cell(document.row_count),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        dim_cell("-"),
        Cell::new(total_packages).add_attribute(Attribute::Bold),
        dim_cell("-"),
        Cell::new(total_rows).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
    if !result.errors.is_empty() {
        eprintln!("Errors:");
        for error in &result.errors {
            eprintln!("- {error}");
        }
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn file_label(source_file: &str) -> String {
    Path::new(source_file)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| source_file.to_string())
}

fn text_cell(value: Option<&str>) -> Cell {
    match value {
        Some(value) if !value.is_empty() => Cell::new(value),
        _ => dim_cell("-"),
    }
}

fn count_cell(value: usize) -> Cell {
    if value == 0 {
        dim_cell(value)
    } else {
        Cell::new(value)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
