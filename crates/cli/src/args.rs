use clap::{ArgAction, Parser, ValueEnum};
use domain::config::LogFormat;
use domain::Scope;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

#[derive(Debug, Parser)]
#[command(name = "wafsync")]
#[command(about = "Apply a WAF rule group to every Web ACL in a scope")]
#[command(version)]
pub struct Cli {
    /// ARN of the rule group to apply
    pub rule_group_arn: String,

    /// AWS region of the Web ACLs
    #[arg(long)]
    pub region: Option<String>,

    /// Web ACL scope: REGIONAL, CLOUDFRONT (GLOBAL is accepted as an alias)
    #[arg(long)]
    pub scope: Option<Scope>,

    /// Configuration file (TOML or JSON)
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Endpoint override, e.g. a local emulator
    #[arg(long)]
    pub endpoint_url: Option<String>,

    /// Report what would change without updating any Web ACL
    #[arg(long)]
    pub dry_run: bool,

    /// Web ACLs processed at the same time
    #[arg(long)]
    pub concurrency: Option<usize>,

    /// Report format on stdout
    #[arg(long, value_enum, default_value_t = OutputFormat::Text)]
    pub output: OutputFormat,

    /// Log format on stderr: text or json
    #[arg(long)]
    pub log_format: Option<LogFormat>,

    /// More logging (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parses_baseline_arguments() {
        let cli = Cli::try_parse_from([
            "wafsync",
            "arn:aws:wafv2:us-east-1:123456789012:regional/rulegroup/bots/42",
            "--region",
            "us-east-1",
            "--scope",
            "global",
        ])
        .unwrap();

        assert_eq!(cli.region.as_deref(), Some("us-east-1"));
        assert_eq!(cli.scope, Some(Scope::Cloudfront));
        assert_eq!(cli.output, OutputFormat::Text);
        assert!(!cli.dry_run);
    }

    #[test]
    fn test_parses_optional_flags() {
        let cli = Cli::try_parse_from([
            "wafsync",
            "arn",
            "--dry-run",
            "--concurrency",
            "4",
            "--output",
            "json",
            "--log-format",
            "json",
            "-vv",
        ])
        .unwrap();

        assert!(cli.dry_run);
        assert_eq!(cli.concurrency, Some(4));
        assert_eq!(cli.output, OutputFormat::Json);
        assert_eq!(cli.log_format, Some(LogFormat::Json));
        assert_eq!(cli.verbose, 2);
    }

    #[test]
    fn test_rejects_unknown_scope() {
        assert!(Cli::try_parse_from(["wafsync", "arn", "--scope", "planetary"]).is_err());
    }
}
