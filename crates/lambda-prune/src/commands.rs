use clap::ArgMatches;
use tracing::{error, info, warn};

use lambda_prune_core::config::validate_config;
use lambda_prune_core::events;
use lambda_prune_core::prune_ops;
use lambda_prune_core::{
    AwsLambdaClient, AwsSettings, PruneConfig, PruneError, PruneEvent, PruneRequest, PruneSummary,
};

/// Load configuration with warning on errors.
///
/// Falls back to defaults if config loading fails, but notifies the user via:
/// - stderr message for immediate visibility
/// - structured log event `cli.config.load_failed` for debugging
fn load_config_with_warning() -> PruneConfig {
    match PruneConfig::load_hierarchy() {
        Ok(config) => config,
        Err(e) => {
            eprintln!(
                "Warning: Could not load config: {}. Using defaults.\n\
                 Tip: Check ~/.lambda-prune/config.toml and ./.lambda-prune/config.toml for syntax errors.",
                e
            );
            warn!(
                event = "cli.config.load_failed",
                error = %e,
                "Config load failed, using defaults"
            );
            PruneConfig::default()
        }
    }
}

pub async fn run_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    events::log_app_startup();

    match matches.subcommand() {
        Some(("prune", sub_matches)) => handle_prune_command(sub_matches).await,
        _ => {
            error!(event = "cli.command_unknown");
            Err("Unknown command".into())
        }
    }
}

async fn handle_prune_command(matches: &ArgMatches) -> Result<(), Box<dyn std::error::Error>> {
    let prefix = matches
        .get_one::<String>("prefix")
        .ok_or("Prefix argument is required")?;
    let dry_run = matches.get_flag("dry-run");
    let json_output = matches.get_flag("json");

    if prefix.is_empty() {
        let e = PruneError::EmptyPrefix;
        eprintln!("❌ {}", e);
        error!(event = "cli.prune_failed", error = %e);
        return Err(e.into());
    }

    let mut config = load_config_with_warning();

    // Apply CLI overrides only if provided
    if let Some(keep) = matches.get_one::<usize>("keep") {
        config.retention.keep_recent = Some(*keep);
    }
    if let Some(concurrency) = matches.get_one::<usize>("concurrency") {
        config.retention.delete_concurrency = Some(*concurrency);
    }

    if let Err(e) = validate_config(&config) {
        eprintln!("❌ {}", e);
        error!(event = "cli.config.invalid", error = %e);
        return Err(e.into());
    }

    let settings = match AwsSettings::from_env() {
        Ok(settings) => settings,
        Err(e) => {
            eprintln!("❌ {}", e);
            eprintln!(
                "Usage: export AWS_ACCESS_KEY_ID=... AWS_SECRET_ACCESS_KEY=... [AWS_REGION=us-east-1] \
                 then run 'lambda-prune prune <prefix>'"
            );
            error!(event = "cli.config.credentials_missing", error = %e);
            events::log_app_error(&e);
            return Err(e.into());
        }
    };

    info!(
        event = "cli.prune_started",
        prefix = %prefix,
        region = %settings.region,
        dry_run = dry_run
    );

    let client = AwsLambdaClient::new(&settings).await;
    let request = PruneRequest::from_config(prefix.as_str(), &config.retention, dry_run);

    let reporter = |event: &PruneEvent| {
        if !json_output {
            println!("{}", format_event(event));
        }
    };

    match prune_ops::prune_functions(&client, &request, &reporter).await {
        Ok(summary) => {
            if json_output {
                println!("{}", serde_json::to_string_pretty(&summary)?);
            } else {
                println!("{}", format_summary(&summary));
            }

            info!(
                event = "cli.prune_completed",
                functions = summary.functions.len(),
                deleted = summary.total_deleted,
                kept = summary.total_kept
            );

            Ok(())
        }
        Err(e) => {
            eprintln!("❌ Prune failed: {}", e);

            error!(
                event = "cli.prune_failed",
                error = %e
            );

            events::log_app_error(&e);
            Err(e.into())
        }
    }
}

/// One progress line per event.
fn format_event(event: &PruneEvent) -> String {
    match event {
        PruneEvent::FunctionStarted { function_name } => format!("Processing {}", function_name),
        PruneEvent::Keeping {
            function_name,
            version,
            reason,
        } => format!("Keeping {}:{} ({})", function_name, version, reason),
        PruneEvent::Deleting {
            function_name,
            version,
            dry_run: true,
        } => format!("Would delete {}:{}", function_name, version),
        PruneEvent::Deleting {
            function_name,
            version,
            dry_run: false,
        } => format!("Deleting {}:{}", function_name, version),
    }
}

fn format_summary(summary: &PruneSummary) -> String {
    if summary.functions.is_empty() {
        return format!("No functions match prefix '{}'", summary.prefix);
    }

    let verb = if summary.dry_run {
        "would be deleted"
    } else {
        "deleted"
    };
    format!(
        "✅ Pruned {} function(s): {} version(s) {}, {} kept",
        summary.functions.len(),
        summary.total_deleted,
        verb,
        summary.total_kept
    )
}
