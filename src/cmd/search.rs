use crate::reports;
use clap::Args;
use seatforge::config::Config;
use seatforge::error::SfResult;
use seatforge::optimizer::runner::{OptimizationOptions, Optimizer, ProgressCallback};
use seatforge::optimizer::ProgressReport;
use seatforge::presets::StartingPoint;
use seatforge::scorer::Scorer;
use seatforge::votes::VoteVector;
use std::sync::Arc;
use std::time::Duration;
use tracing::info;

#[derive(Args, Debug, Clone)]
pub struct SearchArgs {
    #[command(flatten)]
    pub config: Config,

    /// `uniform` or a known dataset name (e.g. pennsylvania_2012).
    #[arg(long, default_value = "uniform")]
    pub start: String,

    /// CSV with a `dem_share` or `dem_pct` column; overrides --start.
    #[arg(long)]
    pub start_file: Option<String>,

    /// Stop after this many seconds.
    #[arg(short = 'T', long)]
    pub time: Option<u64>,

    /// Stop after this many iterations.
    #[arg(long)]
    pub steps: Option<u64>,

    /// Stop after this many restarts.
    #[arg(long)]
    pub restarts: Option<usize>,

    #[arg(short = 'S', long)]
    pub seed: Option<u64>,
}

struct ConsoleReporter {
    scorer: Arc<Scorer>,
}

impl ProgressCallback for ConsoleReporter {
    fn on_improvement(&self, report: &ProgressReport) -> bool {
        info!("Step {}: improved to {:.6}", report.step, report.score);
        reports::print_progress(report);
        true
    }

    fn on_restart(&self, restarts: usize) -> bool {
        info!(
            "Restart #{} (min seats {})",
            restarts, self.scorer.limits.min_republican_seats
        );
        reports::print_restart();
        true
    }
}

pub fn run(args: SearchArgs, config: Config) -> SfResult<()> {
    let num_districts = config.search.num_districts;

    let initial = match &args.start_file {
        Some(path) => {
            info!("Loading starting shares from: {}", path);
            let votes = VoteVector::load_from_csv(path)?;
            votes.ensure_len(num_districts)?;
            votes
        }
        None => StartingPoint::parse(&args.start)?.resolve(num_districts)?,
    };

    if !initial.within(config.limits.min_vote, config.limits.max_vote) {
        info!(
            "Starting vector leaves the [{}, {}] band; out-of-band districts only move back inward",
            config.limits.min_vote, config.limits.max_vote
        );
    }

    let scorer = Arc::new(Scorer::from_config(&config));
    reports::print_summary(&initial, &scorer.score_details(&initial));

    let options = OptimizationOptions {
        max_time: args.time.map(Duration::from_secs),
        max_steps: args.steps,
        max_restarts: args.restarts,
    };

    let optimizer = Optimizer::new(scorer.clone(), config, options);
    let result = optimizer.run(
        initial,
        args.seed,
        ConsoleReporter {
            scorer: scorer.clone(),
        },
    );

    println!("\n=== FINAL RESULT ===");
    println!("Steps: {} | Restarts: {}", result.steps, result.restarts);
    reports::print_summary(&result.best_votes, &scorer.score_details(&result.best_votes));
    println!("Best score: {:.6}", result.best_score);
    Ok(())
}
