use clap::{CommandFactory, FromArgMatches, Parser};
use seatforge::config::{Config, DetectionLimits, ScoringWeights, SearchParams};
use seatforge::error::SeatForgeError;
use std::io::Write;
use tempfile::NamedTempFile;

#[derive(Parser, Debug)]
struct TestCli {
    #[command(flatten)]
    config: Config,
}

fn parse(args: &[&str]) -> (Config, clap::ArgMatches) {
    let mut full = vec!["test"];
    full.extend_from_slice(args);
    let matches = TestCli::command().get_matches_from(full);
    let cli = TestCli::from_arg_matches(&matches).unwrap();
    (cli.config, matches)
}

fn write_json(json: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{}", json).unwrap();
    file
}

// --- DEFAULTS ---

#[test]
fn test_defaults_match_detection_constants() {
    let c = Config::default();

    assert_eq!(c.search.num_districts, 18);
    assert_eq!(c.search.max_iterations, 100_000);
    assert_eq!(c.search.num_mutations, 10);

    assert_eq!(c.limits.min_republican_seats, 11);
    assert_eq!(c.limits.mean_median_diff_cutoff, 0.3);
    assert_eq!(c.limits.t_test_p_cutoff, 0.05);
    assert_eq!(c.limits.min_vote, 0.15);
    assert_eq!(c.limits.max_vote, 0.85);
    assert_eq!(c.limits.min_total_share, 0.494999);
    assert_eq!(c.limits.max_total_share, 0.505001);

    assert_eq!(c.weights.seats_weight, 0.5);
    assert_eq!(c.weights.evasion_weight, 2.0);
    assert_eq!(c.weights.durability_til_10_pct_weight, 4.0);
    assert_eq!(c.weights.durability_past_10_pct_weight, 1.0);
    assert_eq!(c.weights.insufficient_seats_penalty, -100.0);
    assert_eq!(c.weights.vote_share_not_in_range_penalty, -10.0);
    assert_eq!(c.weights.evasion_failure_penalty, -100.0);
}

#[test]
fn test_clap_defaults_agree_with_default_impl() {
    let (parsed, _) = parse(&[]);
    assert_eq!(parsed, Config::default());
}

#[test]
fn test_band_helpers_are_inclusive() {
    let l = DetectionLimits::default();
    assert!(l.vote_in_band(0.15));
    assert!(l.vote_in_band(0.85));
    assert!(!l.vote_in_band(0.149));
    assert!(!l.vote_in_band(0.851));

    assert!(l.total_in_band(0.5));
    assert!(l.total_in_band(0.494999));
    assert!(!l.total_in_band(0.494));
    assert!(!l.total_in_band(0.506));
}

// --- FILE LOADING ---

#[test]
fn test_partial_file_falls_back_to_defaults() {
    let file = write_json(r#"{ "search": { "num_districts": 5 }, "limits": { "max_vote": 0.8 } }"#);
    let c = Config::load_from_file(file.path()).unwrap();

    assert_eq!(c.search.num_districts, 5);
    assert_eq!(c.search.num_mutations, 10);
    assert_eq!(c.limits.max_vote, 0.8);
    assert_eq!(c.limits.min_vote, 0.15);
    assert_eq!(c.weights, ScoringWeights::default());
}

#[test]
fn test_empty_object_is_default() {
    let file = write_json("{}");
    assert_eq!(Config::load_from_file(file.path()).unwrap(), Config::default());
}

#[test]
fn test_malformed_file_is_json_error() {
    let file = write_json("{ not json");
    let err = Config::load_from_file(file.path()).unwrap_err();
    assert!(matches!(err, SeatForgeError::Json(_)));
}

#[test]
fn test_missing_file_is_io_error() {
    let err = Config::load_from_file("/definitely/not/here.json").unwrap_err();
    assert!(matches!(err, SeatForgeError::Io(_)));
}

// --- CLI MERGE ---

#[test]
fn test_cli_overrides_only_typed_flags() {
    let file = write_json(r#"{ "limits": { "max_vote": 0.8, "min_vote": 0.1 } }"#);
    let mut c = Config::load_from_file(file.path()).unwrap();

    let (cli, matches) = parse(&["--min-vote", "0.2"]);
    c.merge_from_cli(&cli, &matches);

    assert_eq!(c.limits.min_vote, 0.2);
    // Not typed: the file value survives instead of the clap default
    assert_eq!(c.limits.max_vote, 0.8);
}

#[test]
fn test_cli_accepts_negative_penalties() {
    let (cli, matches) = parse(&[
        "--insufficient-seats-penalty",
        "-50",
        "--evasion-failure-penalty",
        "-3.5",
        "--num-mutations",
        "4",
    ]);

    let mut c = Config::default();
    c.merge_from_cli(&cli, &matches);

    assert_eq!(c.weights.insufficient_seats_penalty, -50.0);
    assert_eq!(c.weights.evasion_failure_penalty, -3.5);
    assert_eq!(c.weights.vote_share_not_in_range_penalty, -10.0);
    assert_eq!(c.search.num_mutations, 4);
}

// --- VALIDATION ---

#[test]
fn test_default_config_validates() {
    assert!(Config::default().validate().is_ok());
}

fn invalid(c: Config) {
    assert!(
        matches!(c.validate(), Err(SeatForgeError::Config(_))),
        "{:?} should not validate",
        c
    );
}

#[test]
fn test_rejects_zero_districts() {
    invalid(Config {
        search: SearchParams {
            num_districts: 0,
            ..Default::default()
        },
        ..Default::default()
    });
}

#[test]
fn test_rejects_zero_max_iterations() {
    invalid(Config {
        search: SearchParams {
            max_iterations: 0,
            ..Default::default()
        },
        ..Default::default()
    });
}

#[test]
fn test_rejects_bad_vote_band() {
    for (min_vote, max_vote) in [(0.9, 0.1), (-0.1, 0.5), (0.2, 1.5)] {
        invalid(Config {
            limits: DetectionLimits {
                min_vote,
                max_vote,
                ..Default::default()
            },
            ..Default::default()
        });
    }
}

#[test]
fn test_rejects_inverted_total_band() {
    invalid(Config {
        limits: DetectionLimits {
            min_total_share: 0.6,
            max_total_share: 0.4,
            ..Default::default()
        },
        ..Default::default()
    });
}

#[test]
fn test_config_round_trips_through_json() {
    let mut c = Config::default();
    c.search.num_districts = 7;
    c.weights.seats_weight = 1.25;
    let json = serde_json::to_string(&c).unwrap();
    let back: Config = serde_json::from_str(&json).unwrap();
    assert_eq!(back, c);
}
