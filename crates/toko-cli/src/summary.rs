use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::types::MigrateResult;

pub fn print_summary(result: &MigrateResult) {
    println!("Output: {}", result.output_dir.display());
    if let Some(path) = &result.bundle_path {
        println!("Bundle: {}", path.display());
    }
    if let Some(path) = &result.rejects_path {
        println!("Rejects: {}", path.display());
    }

    let mut table = Table::new();
    table.set_header(vec![header_cell("Entity"), header_cell("Records")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    let stats = &result.stats;
    let rows: [(&str, usize); 10] = [
        ("products", stats.products),
        ("customers", stats.customers),
        ("invoices", stats.invoices),
        ("invoice_items", stats.invoice_items),
        ("payments", stats.payments),
        ("non_faktur", stats.non_faktur),
        ("payment_allocations", stats.payment_allocations),
        ("returns", stats.returns),
        ("return_items", stats.return_items),
        ("stock_history", stats.stock_history),
    ];
    let mut total = 0usize;
    for (entity, count) in rows {
        total += count;
        table.add_row(vec![entity_cell(entity), count_cell(count, Color::Green)]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(total).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");

    print_reject_table(result);
}

fn print_reject_table(result: &MigrateResult) {
    if result.rejects.is_empty() {
        return;
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Type"),
        header_cell("Id"),
        header_cell("Reason"),
    ]);
    apply_table_style(&mut table);
    for reject in &result.rejects {
        let kind = format!("{:?}", reject.kind).to_lowercase();
        table.add_row(vec![
            Cell::new(kind).fg(Color::Yellow),
            Cell::new(&reject.id),
            Cell::new(&reject.reason).fg(Color::Red),
        ]);
    }
    println!();
    println!("Rejected rows ({}):", result.rejects.len());
    println!("{table}");
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn entity_cell(name: &str) -> Cell {
    Cell::new(name).fg(Color::Blue)
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color)
    } else {
        Cell::new(count).fg(Color::DarkGrey)
    }
}
