use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use launchdash_core::aggregation::{booster_outcome_summary, filter_view};
use launchdash_core::query::{PayloadRange, SiteSelector};
use launchdash_core::Dashboard;

pub fn print(dashboard: &Dashboard) {
    let dataset = dashboard.dataset();
    let controls = dashboard.controls();

    println!("\n🔎 === {} === 🔎", controls.heading);
    println!(
        "   {} launches | payload {:.0} kg to {:.0} kg | fingerprint {}",
        dataset.len(),
        dataset.min_payload(),
        dataset.max_payload(),
        &dataset.fingerprint()[..12]
    );

    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Site").add_attribute(Attribute::Bold),
        Cell::new("Launches"),
        Cell::new("Success").fg(Color::Green),
        Cell::new("Failure").fg(Color::Red),
        Cell::new("Rate").fg(Color::Cyan),
    ]);

    // The dataset bounds always form a valid range.
    let Ok(full_range) = PayloadRange::new(dataset.min_payload(), dataset.max_payload()) else {
        return;
    };

    for site in dataset.sites() {
        let view = filter_view(dataset, &SiteSelector::parse(site), &full_range);
        let totals = booster_outcome_summary(&view).total;
        let rate = if totals.total > 0 {
            totals.successes as f64 / totals.total as f64 * 100.0
        } else {
            0.0
        };

        table.add_row(vec![
            Cell::new(site).add_attribute(Attribute::Bold),
            Cell::new(totals.total),
            Cell::new(totals.successes).fg(Color::Green),
            Cell::new(totals.failures).fg(Color::Red),
            Cell::new(format!("{:.1}%", rate)).fg(Color::Cyan),
        ]);
    }

    for i in 1..=4 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
    println!("{}", table);

    println!(
        "\n   Payload slider: {:.0} to {:.0} kg, step {:.0}",
        controls.payload.min, controls.payload.max, controls.payload.step
    );
}
