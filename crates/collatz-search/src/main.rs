use anyhow::Context;
use clap::Parser;
use num_bigint::BigUint;
use tracing::*;
use tracing_subscriber::EnvFilter;

use collatz_search::core::decimal;
use collatz_search::{
    LocalNode, NodeDescriber, Search, SearchConfig, TracingSink, UserCredentials,
};

#[derive(Parser, Debug)]
#[command(about, version)]
struct Args {
    #[arg(long, value_name = "DECIMAL", value_parser = parse_initial, help = "First seed to test; must be odd")]
    initial: Option<BigUint>,

    #[arg(long, value_name = "COUNT", help = "Width of each worker's block; must be even")]
    block_size: Option<u64>,

    #[arg(long, value_name = "COUNT", help = "Number of parallel workers (defaults to logical CPUs)")]
    workers: Option<usize>,

    #[arg(long, value_name = "SEEDS", help = "Seeds between progress lines (0 disables)")]
    progress_every: Option<u64>,

    #[arg(long, help = "Report seed 1 returning to itself as a cycle")]
    report_trivial_cycle: bool,

    #[arg(long, env = "COLLATZ_USER_ID", default_value = "anonymous")]
    user_id: String,

    #[arg(long, env = "COLLATZ_USER_SECRET", default_value = "", hide_env_values = true)]
    secret: String,

    #[arg(long, env = "COLLATZ_USER_SECRET_VERSION", default_value = "1")]
    secret_version: String,

    #[arg(long, help = "Print the completed work reports as JSON on stdout")]
    json: bool,
}

fn parse_initial(s: &str) -> Result<BigUint, String> {
    decimal::parse(s).map_err(|e| e.to_string())
}

fn init_log() {
    let env_filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}

fn config_from(args: &Args) -> SearchConfig {
    let mut config = SearchConfig::default()
        .with_report_trivial_cycle(args.report_trivial_cycle)
        .with_credentials(UserCredentials::new(
            args.user_id.clone(),
            args.secret_version.clone(),
            args.secret.clone(),
        ));
    if let Some(initial) = &args.initial {
        config = config.with_initial(initial.clone());
    }
    if let Some(block_size) = args.block_size {
        config = config.with_block_size(block_size);
    }
    if let Some(workers) = args.workers {
        config = config.with_workers(workers);
    }
    if let Some(every) = args.progress_every {
        config = config.with_progress_interval(every);
    }
    config
}

fn main() -> anyhow::Result<()> {
    init_log();

    let args = Args::parse();
    let config = config_from(&args);

    let node = LocalNode::new();
    let node_info = node.describe().context("describing node")?;
    info!(
        "node {} ({}/{}), cores {} logical / {} physical",
        node_info.host_info.hostname,
        node_info.host_info.os,
        node_info.host_info.arch,
        node_info.cpu_info.logical_cores,
        node_info.cpu_info.physical_cores
    );

    let search = Search::new(config, node, TracingSink);
    let report = search.run().context("running search")?;

    if !report.summary.interesting.is_empty() {
        warn!("found {} interesting seed(s)", report.summary.interesting.len());
    }

    if args.json {
        let json = serde_json::to_string_pretty(&report.reports).context("encoding reports")?;
        println!("{json}");
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_map_onto_config() {
        let args = Args::parse_from([
            "crunch",
            "--initial",
            "1001",
            "--block-size",
            "100",
            "--workers",
            "2",
            "--progress-every",
            "0",
            "--report-trivial-cycle",
            "--user-id",
            "alice",
            "--secret",
            "s3cret",
            "--secret-version",
            "v7",
        ]);
        let config = config_from(&args);
        assert_eq!(config.initial, BigUint::from(1001u32));
        assert_eq!(config.block_size, 100);
        assert_eq!(config.workers, Some(2));
        assert_eq!(config.progress_interval, 0);
        assert!(config.stepper.report_trivial_cycle);
        assert_eq!(config.credentials, UserCredentials::new("alice", "v7", "s3cret"));
    }

    #[test]
    fn test_rejects_non_decimal_initial() {
        assert!(Args::try_parse_from(["crunch", "--initial", "0x11"]).is_err());
    }

    #[test]
    fn test_defaults_when_flags_absent() {
        let args = Args::parse_from(["crunch"]);
        let config = config_from(&args);
        assert_eq!(config.block_size, SearchConfig::default().block_size);
        assert_eq!(config.workers, None);
        assert!(!args.json);
    }
}
