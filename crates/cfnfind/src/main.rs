//! cfnfind: find AWS CloudFormation stacks by full or partial name
//!
//! Searches one or more regions (all of them by default) and prints every
//! stack whose name contains the given pattern.

use anyhow::Result;
use cfnfind::{FindError, FinderConfig, OutputFormat, SearchError, Stack, StackFinder, output};
use cfnfind_common::defaults::{DEFAULT_MAX_CONCURRENCY, DEFAULT_PROFILE};
use clap::Parser;
use std::io::Write;
use tracing::info;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "cfnfind")]
#[command(about = "Find AWS CloudFormation stacks by full or partial name")]
#[command(
    long_about = "Find AWS CloudFormation stacks by full or partial name across one or multiple regions"
)]
#[command(version)]
struct Args {
    /// Case-insensitive fragment of the stack name
    pattern: String,

    /// AWS profile to use
    #[arg(long, env = "AWS_PROFILE", default_value = DEFAULT_PROFILE)]
    profile: String,

    /// AWS regions to search (repeatable or comma-separated; defaults to all regions)
    #[arg(long = "region", value_delimiter = ',')]
    regions: Vec<String>,

    /// Maximum number of regions queried at the same time
    #[arg(long, default_value_t = DEFAULT_MAX_CONCURRENCY)]
    max_concurrency: usize,

    /// Output format
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// Log progress to stderr
    #[arg(short, long)]
    verbose: bool,
}

impl From<Args> for FinderConfig {
    fn from(args: Args) -> Self {
        Self {
            profile: args.profile,
            regions: args
                .regions
                .into_iter()
                .map(|r| r.trim().to_string())
                .collect(),
            pattern: args.pattern,
            max_concurrency: args.max_concurrency,
            format: args.format,
        }
    }
}

#[tokio::main]
async fn main() {
    if let Err(e) = run().await {
        print_error(&e);
        std::process::exit(1);
    }
}

/// Print error in a user-friendly way
fn print_error(e: &anyhow::Error) {
    let mut stderr = std::io::stderr();

    let _ = writeln!(stderr, "\n\x1b[1;31mError:\x1b[0m {e}");

    let mut source = e.source();
    while let Some(cause) = source {
        let _ = writeln!(stderr, "  \x1b[33mCaused by:\x1b[0m {cause}");
        source = cause.source();
    }
}

/// Print one hint per failed region that has an actionable classification
fn print_region_hints(search: &SearchError, err: &mut impl Write) -> std::io::Result<()> {
    for failure in &search.failures {
        let aws_error = failure.aws_error();
        let Some(hint) = aws_error.suggestion() else {
            continue;
        };
        if aws_error.is_credential_problem() {
            writeln!(err, "  \x1b[2m{} (credentials):\x1b[0m {}", failure.region, hint)?;
        } else {
            writeln!(err, "  \x1b[2m{}:\x1b[0m {}", failure.region, hint)?;
        }
    }
    Ok(())
}

/// SDK targets are capped at warn unless `RUST_LOG` is set, in which case
/// it is used as-is.
fn default_log_directives(verbose: bool) -> String {
    let level = if verbose { "debug" } else { "warn" };
    format!("{level},aws_config=warn,aws_smithy_runtime=warn,aws_sdk_cloudformation=warn")
}

fn init_tracing(verbose: bool) -> Result<()> {
    let filter = match EnvFilter::try_from_default_env() {
        Ok(filter) => filter,
        Err(_) => EnvFilter::try_new(default_log_directives(verbose))?,
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();

    Ok(())
}

async fn run() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose)?;

    let config: FinderConfig = args.into();
    config.validate()?;

    info!(
        profile = %config.profile,
        regions = ?config.regions,
        max_concurrency = config.max_concurrency,
        "Starting stack search"
    );

    let finder = StackFinder::from_config(&config);
    let result = finder.find_stacks(&config.pattern).await;

    report(
        result,
        config.format,
        &mut std::io::stdout().lock(),
        &mut std::io::stderr().lock(),
    )
}

/// Write the outcome of a search.
///
/// Records go to `out`, including the ones found before a region failed.
/// Region hints go to `err`. Any failure is returned so `main` exits non-zero.
fn report(
    result: Result<Vec<Stack>, FindError>,
    format: OutputFormat,
    out: &mut impl Write,
    err: &mut impl Write,
) -> Result<()> {
    match result {
        Ok(stacks) => {
            writeln!(out, "{}", output::render(&stacks, format)?)?;
            Ok(())
        }
        Err(FindError::Search(search)) => {
            if !search.stacks.is_empty() {
                writeln!(out, "{}", output::render(&search.stacks, format)?)?;
            }
            print_region_hints(&search, err)?;
            Err(anyhow::Error::new(search).context("error finding stacks"))
        }
        Err(e) => Err(anyhow::Error::new(e).context("error finding stacks")),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use anyhow::{Context, anyhow};
    use aws_sdk_cloudformation::error::SdkError;
    use aws_sdk_cloudformation::operation::describe_stacks::DescribeStacksError;
    use aws_smithy_runtime_api::http::Response;
    use aws_smithy_types::body::SdkBody;
    use aws_smithy_types::error::ErrorMetadata;
    use cfnfind::RegionError;
    use clap::CommandFactory;

    fn access_denied(region: &str) -> RegionError {
        let sdk_error: SdkError<DescribeStacksError> = SdkError::service_error(
            DescribeStacksError::generic(ErrorMetadata::builder().code("AccessDenied").build()),
            Response::new(403.try_into().unwrap(), SdkBody::empty()),
        );
        let source = Err::<(), _>(sdk_error)
            .context("Failed to describe stacks")
            .unwrap_err();
        RegionError::new(region, source)
    }

    fn run_report(
        result: Result<Vec<Stack>, FindError>,
        format: OutputFormat,
    ) -> (Result<()>, String, String) {
        let mut out = Vec::new();
        let mut err = Vec::new();
        let outcome = report(result, format, &mut out, &mut err);
        (
            outcome,
            String::from_utf8(out).unwrap(),
            String::from_utf8(err).unwrap(),
        )
    }

    #[test]
    fn test_report_empty_result() {
        let (outcome, out, err) = run_report(Ok(vec![]), OutputFormat::Text);
        assert!(outcome.is_ok());
        assert_eq!(out, "No stacks found\n");
        assert!(err.is_empty());

        let (outcome, out, _) = run_report(Ok(vec![]), OutputFormat::Json);
        assert!(outcome.is_ok());
        assert_eq!(out, "[]\n");
    }

    #[test]
    fn test_report_matches() {
        let stacks = vec![Stack::new("my-stack", "us-east-1", "CREATE_COMPLETE")];
        let (outcome, out, _) = run_report(Ok(stacks), OutputFormat::Text);
        assert!(outcome.is_ok());
        assert_eq!(out, "my-stack\tus-east-1\tCREATE_COMPLETE\n");
    }

    #[test]
    fn test_report_partial_failure_prints_records_then_fails() {
        let result = Err(FindError::Search(SearchError {
            stacks: vec![Stack::new("orders-api", "us-east-2", "CREATE_COMPLETE")],
            failures: vec![
                access_denied("eu-west-1"),
                RegionError::new("ap-south-1", anyhow!("connection reset")),
            ],
        }));

        let (outcome, out, err) = run_report(result, OutputFormat::Text);

        assert_eq!(out, "orders-api\tus-east-2\tCREATE_COMPLETE\n");
        assert!(err.contains("eu-west-1 (credentials):"), "{err}");
        assert!(err.contains("cloudformation:DescribeStacks"), "{err}");
        assert!(!err.contains("ap-south-1"), "{err}");

        let error = outcome.unwrap_err();
        let search = error.downcast_ref::<SearchError>().unwrap();
        assert_eq!(search.failed_regions(), vec!["eu-west-1", "ap-south-1"]);
    }

    #[test]
    fn test_report_total_failure_prints_no_records() {
        let result = Err(FindError::Search(SearchError {
            stacks: vec![],
            failures: vec![RegionError::new("us-east-1", anyhow!("API error"))],
        }));
        let (outcome, out, _) = run_report(result, OutputFormat::Text);
        assert!(outcome.is_err());
        assert!(out.is_empty());
    }

    #[test]
    fn test_report_credential_failure() {
        let result = Err(FindError::Credentials {
            profile: "missing".to_string(),
            source: anyhow!("profile not found"),
        });
        let (outcome, out, err) = run_report(result, OutputFormat::Text);

        assert!(out.is_empty());
        assert!(err.is_empty());
        let error = outcome.unwrap_err();
        assert!(format!("{error:#}").contains("'missing'"));
    }

    #[test]
    fn test_default_log_directives_cap_sdk_targets() {
        let quiet = default_log_directives(false);
        assert!(quiet.starts_with("warn,"));
        assert!(quiet.contains("aws_smithy_runtime=warn"));

        let verbose = default_log_directives(true);
        assert!(verbose.starts_with("debug,"));
        assert!(EnvFilter::try_new(verbose).is_ok());
    }

    #[test]
    fn test_cli_definition() {
        Args::command().debug_assert();
    }

    #[test]
    fn test_defaults() {
        let args = Args::try_parse_from(["cfnfind", "my-stack"]).unwrap();
        let config: FinderConfig = args.into();
        assert_eq!(config.pattern, "my-stack");
        assert!(config.regions.is_empty());
        assert_eq!(config.max_concurrency, DEFAULT_MAX_CONCURRENCY);
        assert_eq!(config.format, OutputFormat::Text);
    }

    #[test]
    fn test_regions_repeat_and_split() {
        let args = Args::try_parse_from([
            "cfnfind",
            "api",
            "--region",
            "us-east-1,us-west-2",
            "--region",
            "eu-west-1",
            "--profile",
            "prod",
            "--format",
            "json",
        ])
        .unwrap();
        let config: FinderConfig = args.into();
        assert_eq!(config.regions, vec!["us-east-1", "us-west-2", "eu-west-1"]);
        assert_eq!(config.profile, "prod");
        assert_eq!(config.format, OutputFormat::Json);
    }

    #[test]
    fn test_pattern_is_required() {
        assert!(Args::try_parse_from(["cfnfind"]).is_err());
    }
}
