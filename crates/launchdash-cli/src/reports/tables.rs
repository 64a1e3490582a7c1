use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use launchdash_core::aggregation::BoosterOutcomeSummary;
use launchdash_core::chart::model::{PieChart, ScatterChart};

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn align_right(table: &mut Table, columns: std::ops::RangeInclusive<usize>) {
    for i in columns {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
}

pub fn pie(chart: &PieChart) {
    println!("\n📊 {}", chart.title);

    if chart.slices.is_empty() {
        println!("   (no launches recorded for this selection)");
        return;
    }

    let total: usize = chart.slices.iter().map(|s| s.value).sum();

    let mut table = new_table();
    table.set_header(vec![
        Cell::new("Label").add_attribute(Attribute::Bold),
        Cell::new("Count").fg(Color::Cyan),
        Cell::new("Share"),
    ]);

    for slice in &chart.slices {
        let share = if total > 0 {
            slice.value as f64 / total as f64 * 100.0
        } else {
            0.0
        };
        table.add_row(vec![
            Cell::new(&slice.label).add_attribute(Attribute::Bold),
            Cell::new(slice.value).fg(Color::Cyan),
            Cell::new(format!("{:.1}%", share)),
        ]);
    }
    align_right(&mut table, 1..=2);
    println!("{}", table);
}

pub fn scatter(chart: &ScatterChart, show_points: bool) {
    println!("\n📈 {}", chart.title);

    let bounds: Vec<String> = chart
        .reference_lines
        .iter()
        .map(|l| format!("{:.0}", l.x))
        .collect();
    println!(
        "   Axis {:.0} kg to {:.0} kg | Filter at {} kg | {} points",
        chart.x_axis.range.0,
        chart.x_axis.range.1,
        bounds.join(" / "),
        chart.point_count()
    );

    match &chart.summary {
        Some(summary) => booster_summary(summary),
        None => {
            for note in &chart.annotations {
                println!("\n   ⚠️  {}", note.text);
            }
        }
    }

    if show_points && !chart.series.is_empty() {
        points(chart);
    }
}

fn booster_summary(summary: &BoosterOutcomeSummary) {
    let mut table = new_table();
    table.set_header(vec![
        Cell::new("Booster").add_attribute(Attribute::Bold),
        Cell::new("Success").fg(Color::Green),
        Cell::new("Failure").fg(Color::Red),
        Cell::new("Total"),
    ]);

    for row in &summary.categories {
        table.add_row(vec![
            Cell::new(&row.category),
            Cell::new(row.successes).fg(Color::Green),
            Cell::new(row.failures).fg(Color::Red),
            Cell::new(row.total),
        ]);
    }

    let t = &summary.total;
    table.add_row(vec![
        Cell::new(&t.category).add_attribute(Attribute::Bold),
        Cell::new(t.successes).add_attribute(Attribute::Bold),
        Cell::new(t.failures).add_attribute(Attribute::Bold),
        Cell::new(t.total).add_attribute(Attribute::Bold),
    ]);

    align_right(&mut table, 1..=3);
    println!("\n{}", table);
}

fn points(chart: &ScatterChart) {
    let mut table = new_table();
    table.set_header(vec![
        Cell::new("Booster").add_attribute(Attribute::Bold),
        Cell::new("Payload (kg)"),
        Cell::new("Class (jittered)"),
    ]);

    for series in &chart.series {
        for p in &series.points {
            table.add_row(vec![
                Cell::new(&series.name),
                Cell::new(format!("{:.0}", p.x)),
                Cell::new(format!("{:.3}", p.y)),
            ]);
        }
    }

    align_right(&mut table, 1..=2);
    println!("\n{}", table);
}
