use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use patent_cli::report::OptionsListing;
use patent_core::DashboardSnapshot;
use patent_model::{Share, Summary, format_numeric};

pub fn print_report(snapshot: &DashboardSnapshot) {
    let selection = &snapshot.selection;
    println!(
        "Countries: {}",
        join_or(selection.countries.iter().map(String::as_str), "(none)")
    );
    println!("Years: {}", selection.year_range);
    println!(
        "Technology filter: {}",
        snapshot
            .technology_filter_label
            .as_deref()
            .unwrap_or("(all domains)")
    );
    println!();

    println!("{}", summary_table(&snapshot.summary));

    println!("Patents by country");
    let mut table = series_table(&["#", "Country", "Patents", "Share"], 2);
    for (rank, total) in snapshot.country_totals.iter().enumerate() {
        table.add_row(vec![
            dim_cell(rank + 1),
            Cell::new(&total.country),
            Cell::new(format_numeric(total.patents)),
            share_cell(&snapshot.country_shares, &total.country),
        ]);
    }
    print_series(table, snapshot.country_totals.is_empty());

    println!("Patents by year");
    let mut table = series_table(&["Year", "Patents"], 1);
    for total in &snapshot.yearly_totals {
        table.add_row(vec![
            Cell::new(total.year),
            Cell::new(format_numeric(total.patents)),
        ]);
    }
    print_series(table, snapshot.yearly_totals.is_empty());

    println!("Technology domains");
    let mut table = series_table(&["Domain", "Patents", "Share"], 1);
    for total in &snapshot.technology_totals {
        table.add_row(vec![
            Cell::new(&total.name),
            Cell::new(format_numeric(total.value)),
            share_cell(&snapshot.technology_shares, &total.name),
        ]);
    }
    print_series(table, snapshot.technology_totals.is_empty());

    println!("Patent authorities");
    let mut table = series_table(&["Authority", "Patents"], 1);
    for total in &snapshot.authority_totals {
        table.add_row(vec![
            Cell::new(&total.authority),
            Cell::new(format_numeric(total.patents)),
        ]);
    }
    print_series(table, snapshot.authority_totals.is_empty());

    println!("Top countries over time");
    let countries: Vec<&str> = snapshot
        .multi_country_trend
        .first()
        .map(|point| point.countries.iter().map(|(name, _)| name.as_str()).collect())
        .unwrap_or_default();
    let mut headers = vec!["Year"];
    headers.extend(countries.iter().copied());
    let mut table = series_table(&headers, 1);
    for point in &snapshot.multi_country_trend {
        let mut row = vec![Cell::new(point.year)];
        row.extend(
            point
                .countries
                .iter()
                .map(|(_, value)| Cell::new(format_numeric(*value))),
        );
        table.add_row(row);
    }
    print_series(table, snapshot.multi_country_trend.is_empty());
}

pub fn print_options(listing: &OptionsListing) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Countries"), header_cell("Technologies")]);
    apply_table_style(&mut table);
    let rows = listing.countries.len().max(listing.technologies.len());
    for idx in 0..rows {
        table.add_row(vec![
            Cell::new(listing.countries.get(idx).map_or("", String::as_str)),
            Cell::new(listing.technologies.get(idx).map_or("", String::as_str)),
        ]);
    }
    println!("{table}");
    println!(
        "{} countries, {} technologies",
        listing.countries.len(),
        listing.technologies.len()
    );
}

fn summary_table(summary: &Summary) -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Metric"), header_cell("Value")]);
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(80);
    align_column(&mut table, 1, CellAlignment::Right);

    let top = if summary.top_country.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(&summary.top_country).add_attribute(Attribute::Bold)
    };
    let growth = if summary.avg_growth_is_placeholder {
        Cell::new(format!("{}% (placeholder)", format_numeric(summary.avg_growth)))
            .fg(Color::DarkGrey)
    } else {
        Cell::new(format!("{}%", format_numeric(summary.avg_growth)))
    };
    let measured = match summary.measured_growth {
        Some(value) => Cell::new(format!("{value:.1}%")),
        None => dim_cell("-"),
    };

    table.add_row(vec![
        Cell::new("Total patents"),
        Cell::new(summary.total_patents).add_attribute(Attribute::Bold),
    ]);
    table.add_row(vec![Cell::new("Countries"), Cell::new(summary.country_count)]);
    table.add_row(vec![Cell::new("Top country"), top]);
    table.add_row(vec![Cell::new("Avg. growth"), growth]);
    table.add_row(vec![Cell::new("Measured growth"), measured]);
    table
}

/// Columns from `numeric_from` on are right-aligned.
fn series_table(headers: &[&str], numeric_from: usize) -> Table {
    let mut table = Table::new();
    table.set_header(headers.iter().copied().map(header_cell).collect::<Vec<_>>());
    apply_table_style(&mut table);
    for index in numeric_from..headers.len() {
        align_column(&mut table, index, CellAlignment::Right);
    }
    table
}

fn print_series(table: Table, empty: bool) {
    if empty {
        println!("  (no data for the current selection)");
    } else {
        println!("{table}");
    }
    println!();
}

fn share_cell(shares: &[Share], key: &str) -> Cell {
    match shares.iter().find(|share| share.key == key) {
        Some(share) => Cell::new(format!("{:.1}%", share.percent)),
        None => dim_cell("-"),
    }
}

fn join_or<'a>(values: impl Iterator<Item = &'a str>, empty: &str) -> String {
    let joined: Vec<&str> = values.collect();
    if joined.is_empty() {
        empty.to_string()
    } else {
        joined.join(", ")
    }
}

fn apply_table_style(table: &mut Table) {
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

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
