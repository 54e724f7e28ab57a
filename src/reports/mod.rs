use comfy_table::presets::ASCII_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use seatforge::optimizer::ProgressReport;
use seatforge::scorer::{ScoreDetails, Scorer};
use seatforge::util::round_to;
use seatforge::votes::VoteVector;

fn print_block(score: f64, sorted: &[f64], seats: usize, durability: f64, evasion: f64) {
    println!("-----------");
    println!("{}", score);
    println!("{:?}", sorted);
    println!(
        "Seats: {}, Durability: {}, Evasion: {}",
        seats, durability, evasion
    );
}

pub fn print_summary(votes: &VoteVector, details: &ScoreDetails) {
    print_block(
        details.total,
        &votes.sorted_rounded(3),
        details.rep_seats,
        round_to(details.durability, 6),
        round_to(details.evasion, 6),
    );
}

pub fn print_progress(report: &ProgressReport) {
    print_block(
        report.score,
        &report.sorted_shares,
        report.rep_seats,
        report.durability,
        report.evasion,
    );
}

pub fn print_restart() {
    println!();
    println!("-- RESTARTING --");
    println!();
}

fn pass_cell(passed: bool) -> Cell {
    if passed {
        Cell::new("pass").fg(Color::Green)
    } else {
        Cell::new("FAIL").fg(Color::Red)
    }
}

pub fn print_score_table(results: &[(String, VoteVector, ScoreDetails)], scorer: &Scorer) {
    let l = &scorer.limits;
    let mut table = Table::new();
    table
        .load_preset(ASCII_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Map").add_attribute(Attribute::Bold),
        Cell::new("Total").fg(Color::Cyan),
        Cell::new("Seats"),
        Cell::new("Tests"),
        Cell::new("Dur"),
        Cell::new("Evas"),
        Cell::new("R/D"),
        Cell::new("Share"),
        Cell::new("MM"),
        Cell::new("p"),
        Cell::new("MM test"),
        Cell::new("t test"),
    ]);

    for i in 1..=9 {
        if let Some(col) = table.column_mut(i) {
            col.set_cell_alignment(CellAlignment::Right);
        }
    }

    for (name, _, d) in results {
        let mm = d
            .mean_median_diff
            .map_or("n/a".to_string(), |m| format!("{:.4}", m));
        let mm_passed = d
            .mean_median_diff
            .is_some_and(|m| m <= l.mean_median_diff_cutoff);

        table.add_row(vec![
            Cell::new(name).add_attribute(Attribute::Bold),
            Cell::new(format!("{:.3}", d.total)).fg(Color::Cyan),
            Cell::new(format!("{:.2}", d.seats_component)),
            Cell::new(format!("{:.2}", d.test_component)),
            Cell::new(format!("{:.3}", d.durability_component)),
            Cell::new(format!("{:.3}", d.evasion_component)),
            Cell::new(format!("{}/{}", d.rep_seats, d.dem_seats)),
            Cell::new(format!("{:.4}", d.total_dem_share)),
            Cell::new(mm),
            Cell::new(format!("{:.4}", d.p_value)),
            pass_cell(mm_passed),
            pass_cell(d.p_value >= l.t_test_p_cutoff),
        ]);
    }

    println!("\n{}", table);
    println!(
        "Cutoffs: mean-median <= {}, p >= {}, seats >= {}, district band [{}, {}]",
        l.mean_median_diff_cutoff, l.t_test_p_cutoff, l.min_republican_seats, l.min_vote, l.max_vote
    );
}
