use comfy_table::{Attribute, Cell, ContentArrangement, Table};
use crossterm::style::Stylize;

use hms_listview::data::fetch::FetchStatus;
use hms_listview::records::ListRecord;
use hms_listview::{DerivedView, ListViewController};

pub fn display_page<R: ListRecord>(view: &DerivedView<'_, R>) {
    if view.is_empty() {
        println!("{}", "No records match.".yellow());
        println!("{}", view.range_label().dark_grey());
        return;
    }

    let mut table = Table::new();
    table.set_content_arrangement(ContentArrangement::Dynamic);

    let headers: Vec<Cell> = R::headers()
        .iter()
        .map(|h| Cell::new(h).add_attribute(Attribute::Bold))
        .collect();
    table.set_header(headers);

    for record in &view.items {
        table.add_row(record.cells());
    }

    println!("{table}");
    println!(
        "\n{}  {}",
        view.range_label().green(),
        format!("page {}/{}", view.page, view.total_pages).dark_grey()
    );
}

/// One line describing the active search, filters and sort
pub fn display_state<R>(controller: &ListViewController<R>) {
    let mut parts = Vec::new();
    if !controller.search().trim().is_empty() {
        parts.push(format!("search={:?}", controller.search()));
    }
    for (field, value) in controller.filters().iter() {
        parts.push(format!("{}={}", field, value));
    }
    if let Some(sort) = controller.sort() {
        parts.push(format!("sort={} {:?}", sort.key, sort.direction));
    }
    if let FetchStatus::Failed(msg) = controller.fetch_status() {
        parts.push(format!("last fetch failed: {}", msg));
    }

    if !parts.is_empty() {
        println!("{}", parts.join("  ").cyan());
    }
}
