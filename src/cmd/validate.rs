use crate::reports;
use clap::Args;
use seatforge::config::Config;
use seatforge::error::SfResult;
use seatforge::presets::get_all_datasets;
use seatforge::scorer::Scorer;
use seatforge::votes::VoteVector;

#[derive(Args, Debug, Clone)]
pub struct ValidateArgs {
    #[command(flatten)]
    pub config: Config,

    /// Only score known datasets whose name contains this text.
    #[arg(short, long)]
    pub dataset: Option<String>,

    /// Also score the shares in this CSV file.
    #[arg(short, long)]
    pub file: Option<String>,

    /// Print the breakdown as JSON instead of a table.
    #[arg(long, default_value_t = false)]
    pub json: bool,
}

pub fn run(args: ValidateArgs, config: Config) -> SfResult<()> {
    let scorer = Scorer::from_config(&config);
    let mut entries: Vec<(String, VoteVector)> = Vec::new();

    for (dataset, votes) in get_all_datasets() {
        let name = dataset.to_string();
        if let Some(ref filter) = args.dataset {
            if !name.contains(&filter.to_lowercase()) {
                continue;
            }
        }
        entries.push((name, votes));
    }

    if let Some(path) = &args.file {
        entries.push((path.clone(), VoteVector::load_from_csv(path)?));
    }

    let mut results: Vec<_> = entries
        .into_iter()
        .map(|(name, votes)| {
            let details = scorer.score_details(&votes);
            (name, votes, details)
        })
        .collect();

    results.sort_by(|a, b| b.2.total.total_cmp(&a.2.total));

    if args.json {
        let rows: Vec<_> = results
            .iter()
            .map(|(name, votes, details)| {
                serde_json::json!({ "name": name, "votes": votes, "score": details })
            })
            .collect();
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    println!("\n=== DETECTION AUDIT ===");
    for (name, votes, details) in &results {
        println!("\n{}", name);
        reports::print_summary(votes, details);
    }
    reports::print_score_table(&results, &scorer);
    Ok(())
}
