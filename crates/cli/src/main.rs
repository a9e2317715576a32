use anyhow::Result;
use application::{ExecutionOptions, RuleGroupOrchestrator};
use clap::Parser;
use cli::report::{self, EXIT_FATAL};
use cli::{settings, Cli};
use colored::Colorize;
use infrastructure::WafV2PolicyApi;
use std::process::ExitCode;
use std::sync::Arc;
use tracing::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    let cli = Cli::parse();

    match run(cli).await {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            error!(error = %format!("{e:#}"), "Run aborted");
            eprintln!("{} {e:#}", "error:".red().bold());
            ExitCode::from(EXIT_FATAL)
        }
    }
}

async fn run(cli: Cli) -> Result<u8> {
    let config = settings::resolve(&cli).await?;

    // a second init (e.g. in tests) is not fatal
    if let Err(e) = common::init_structured_logging(settings::logging_config(&config)) {
        eprintln!("logging disabled: {e}");
    }

    info!(
        region = config.aws.region.as_deref().unwrap_or("default chain"),
        scope = %config.execution.scope,
        dry_run = config.execution.dry_run,
        "Starting wafsync"
    );

    let api = WafV2PolicyApi::from_config(&config.aws).await;
    let orchestrator =
        RuleGroupOrchestrator::new(Arc::new(api), ExecutionOptions::from(&config.execution));

    let execution = orchestrator.execute(&cli.rule_group_arn).await?;
    println!("{}", report::render(&execution, cli.output)?);

    Ok(report::exit_code(&execution))
}
