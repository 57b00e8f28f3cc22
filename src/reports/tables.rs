use crate::cmd::simulate::SimulationStep;
use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use tapwise::predictor::TextStats;
use tapwise::verifier::VerificationReport;

fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);
    table
}

fn align_right(table: &mut Table, cols: std::ops::RangeInclusive<usize>) {
    for i in cols {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }
}

pub fn simulation(steps: &[SimulationStep]) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Key").add_attribute(Attribute::Bold),
        Cell::new("Tap"),
        Cell::new("Best").fg(Color::Cyan),
        Cell::new("Suggestions"),
        Cell::new("Display").add_attribute(Attribute::Bold),
    ]);

    for step in steps {
        let tap = match step.tap {
            Some((x, y)) => format!("{:.0},{:.0}", x, y),
            None => "-".to_string(),
        };
        table.add_row(vec![
            Cell::new(&step.input).add_attribute(Attribute::Bold),
            Cell::new(tap),
            Cell::new(&step.result.best_completion).fg(Color::Cyan),
            Cell::new(step.result.suggestions.join(" | ")),
            Cell::new(&step.result.full_display_text),
        ]);
    }
    println!("\n{}", table);
}

pub fn sentence_stats(stats: &TextStats) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Phrase").add_attribute(Attribute::Bold),
        Cell::new("Secs"),
        Cell::new("WPM").fg(Color::Cyan),
        Cell::new("Backsp"),
        Cell::new("Picks"),
        Cell::new("Valid"),
    ]);
    align_right(&mut table, 1..=4);

    let valid = if stats.valid {
        Cell::new("yes").fg(Color::Green)
    } else {
        Cell::new("no").fg(Color::Red)
    };
    table.add_row(vec![
        Cell::new(&stats.final_phrase).add_attribute(Attribute::Bold),
        Cell::new(format!("{:.1}", stats.input_time_secs())),
        Cell::new(format!("{:.2}", stats.words_per_minute())).fg(Color::Cyan),
        Cell::new(stats.backspace_count),
        Cell::new(stats.suggestion_pick_count),
        valid,
    ]);
    println!("\n{}", table);
}

pub fn verification(report: &VerificationReport, show_failures: usize) {
    let mut summary = new_table();
    summary.add_row(vec![
        Cell::new("Phrases").add_attribute(Attribute::Bold),
        Cell::new("Exact").fg(Color::Green),
        Cell::new("Accuracy").fg(Color::Cyan),
        Cell::new("Mean Edit"),
    ]);
    align_right(&mut summary, 0..=3);
    summary.add_row(vec![
        Cell::new(report.total()),
        Cell::new(report.correct()).fg(Color::Green),
        Cell::new(format!("{:.1}%", report.accuracy() * 100.0)).fg(Color::Cyan),
        Cell::new(format!("{:.2}", report.mean_edit_distance())),
    ]);
    println!("\n{}", summary);

    if show_failures == 0 || report.correct() == report.total() {
        return;
    }

    let mut failures = new_table();
    failures.add_row(vec![
        Cell::new("Target").add_attribute(Attribute::Bold),
        Cell::new("Typed").fg(Color::Red),
        Cell::new("Edit"),
    ]);
    align_right(&mut failures, 2..=2);
    for o in report.failures().take(show_failures) {
        let typed = match &o.error {
            Some(e) => format!("<{}>", e),
            None => o.typed.clone(),
        };
        failures.add_row(vec![
            Cell::new(&o.target),
            Cell::new(typed).fg(Color::Red),
            Cell::new(o.edit_distance),
        ]);
    }
    println!("{}", failures);
}

pub fn probe(ranked: &[(char, f64, f64)]) {
    let mut table = new_table();
    table.add_row(vec![
        Cell::new("Key").add_attribute(Attribute::Bold),
        Cell::new("P(key)").fg(Color::Cyan),
        Cell::new("Dist px"),
    ]);
    align_right(&mut table, 1..=2);
    for (c, p, d) in ranked {
        table.add_row(vec![
            Cell::new(c).add_attribute(Attribute::Bold),
            Cell::new(format!("{:.4}", p)).fg(Color::Cyan),
            Cell::new(format!("{:.1}", d)),
        ]);
    }
    println!("\n{}", table);
}
