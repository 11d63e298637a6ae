//! CLI command implementations

use super::Cli;
use anyhow::{Context, Result};
use data_ingestion::{Config, DatasetPreparer, SplitSummary};

/// Merge config file and flags. Flags win over the file, the file wins over defaults.
pub fn resolve_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::from_file(path)
            .with_context(|| format!("Failed to load config from {}", path.display()))?,
        None => Config::default(),
    };

    if let Some(test_size) = cli.test_size {
        config.split.test_fraction = test_size;
    }
    if let Some(seed) = cli.random_state {
        config.split.random_state = Some(seed);
    }
    if cli.no_wrap {
        config.output.wrap_as_string_literal = false;
    }
    if cli.pretty {
        config.output.pretty = true;
    }

    Ok(config)
}

pub fn ingest(cli: Cli) -> Result<()> {
    let config = resolve_config(&cli)?;
    let summary = DatasetPreparer::new(config)
        .prepare(&cli.data)
        .with_context(|| format!("Failed to prepare data at {}", cli.data.display()))?;

    print_summary(&summary);
    println!(
        "Data has been successfully processed and saved to {}",
        cli.data.display()
    );
    Ok(())
}

fn print_summary(summary: &SplitSummary) {
    println!(
        "Split {} rows x {} features: {} train / {} test ({:.1}% test)",
        summary.total_rows(),
        summary.n_features,
        summary.train_rows,
        summary.test_rows,
        100.0 * summary.test_fraction()
    );
    for (label, count) in &summary.train_label_counts {
        let test_count = summary.test_label_counts.get(label).copied().unwrap_or(0);
        println!("  label {}: {} train, {} test", label, count, test_count);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;

    #[test]
    fn test_flags_override_config_file() -> Result<()> {
        let temp_dir = tempfile::tempdir()?;
        let config_path = temp_dir.path().join("config.json");
        std::fs::write(
            &config_path,
            r#"{"split": {"test_fraction": 0.4, "random_state": 1}, "output": {"pretty": true}}"#,
        )?;

        let cli = Cli::try_parse_from([
            "data_ingestion",
            "--data",
            "out.json",
            "--config",
            config_path.to_str().unwrap(),
            "--random-state",
            "99",
            "--no-wrap",
        ])?;
        let config = resolve_config(&cli)?;

        assert_eq!(config.split.test_fraction, 0.4);
        assert_eq!(config.split.random_state, Some(99));
        assert!(!config.output.wrap_as_string_literal);
        assert!(config.output.pretty);
        Ok(())
    }

    #[test]
    fn test_defaults_without_flags() -> Result<()> {
        let cli = Cli::try_parse_from(["data_ingestion", "--data", "out.json"])?;
        assert_eq!(resolve_config(&cli)?, Config::default());
        Ok(())
    }

    #[test]
    fn test_ingest_writes_file() -> Result<()> {
        let temp_dir = tempfile::tempdir()?;
        let out = temp_dir.path().join("new/nested/dir/out.json");
        let cli = Cli::try_parse_from([
            "data_ingestion",
            "--data",
            out.to_str().unwrap(),
            "--random-state",
            "42",
        ])?;

        ingest(cli)?;
        assert!(out.is_file());
        Ok(())
    }

    #[test]
    fn test_ingest_rejects_bad_test_size() -> Result<()> {
        let temp_dir = tempfile::tempdir()?;
        let out = temp_dir.path().join("out.json");
        let cli = Cli::try_parse_from([
            "data_ingestion",
            "--data",
            out.to_str().unwrap(),
            "--test-size",
            "1.5",
        ])?;

        let err = ingest(cli).unwrap_err();
        let prepare_err = err
            .downcast_ref::<data_ingestion::PrepareError>()
            .expect("error chain should carry PrepareError");
        assert!(prepare_err.is_invalid_argument());
        assert!(!out.exists());
        Ok(())
    }
}
