use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "tag-ctl")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Audit pinned container image tags and flatten SARIF reports")]
#[command(long_about = "Compares the image tags pinned in a tool configuration against the latest tags published on the registry and fails when any tool is outdated, so it can gate CI pipelines. Also flattens SARIF static-analysis reports into rule/message/location records.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Path to a settings file (defaults to ./.tag-ctl.toml, then ~/.tag-ctl.toml)
    #[arg(long, global = true, value_name = "FILE", env = "TAG_CTL_SETTINGS")]
    pub settings: Option<PathBuf>,

    /// Enable verbose logging (-v for info, -vv for debug, -vvv for trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress all log output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Check pinned image tags against the latest registry tags
    Check {
        /// Tool configuration file (tool name -> image, imageTag)
        #[arg(short, long, value_name = "FILE", env = "TAG_CTL_CONFIG", default_value = crate::config::DEFAULT_TOOLS_FILE)]
        config: PathBuf,

        /// Registry API base URL
        #[arg(long, value_name = "URL", env = "TAG_CTL_REGISTRY_URL")]
        registry_url: Option<String>,

        /// Repository namespace the images are published under
        #[arg(long, env = "TAG_CTL_NAMESPACE")]
        namespace: Option<String>,

        /// Only check these tools
        #[arg(long, value_delimiter = ',')]
        only: Vec<String>,

        /// Output format (defaults to github inside GitHub Actions, tty elsewhere)
        #[arg(long, value_enum)]
        format: Option<OutputFormat>,

        /// Query the registry for all tools concurrently
        #[arg(long)]
        parallel: bool,
    },

    /// Flatten a SARIF report into rule/message/location records
    Sarif {
        /// SARIF file to read, or `-` for stdin
        #[arg(value_name = "FILE")]
        path: PathBuf,

        /// Output format
        #[arg(long, value_enum, default_value = "json")]
        format: OutputFormat,

        /// Write the report to a file instead of stdout
        #[arg(long, value_name = "FILE")]
        output: Option<PathBuf>,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    /// Human-readable terminal output
    Tty,
    /// GitHub Actions workflow commands
    Github,
    /// Machine-readable JSON
    Json,
}

impl OutputFormat {
    /// Parse a format name (case-insensitive), as used in the settings file.
    pub fn parse_name(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "tty" | "terminal" | "text" => Some(Self::Tty),
            "github" | "github-actions" => Some(Self::Github),
            "json" => Some(Self::Json),
            _ => None,
        }
    }

    /// Get all available format names.
    pub fn all_names() -> &'static [&'static str] {
        &["tty", "github", "json"]
    }

    /// GitHub workflow commands when running inside GitHub Actions, tty otherwise.
    pub fn detect() -> Self {
        Self::detect_from(std::env::var("GITHUB_ACTIONS").ok().as_deref())
    }

    fn detect_from(github_actions: Option<&str>) -> Self {
        match github_actions {
            Some("true") => Self::Github,
            _ => Self::Tty,
        }
    }
}

impl Cli {
    /// Initialize logging based on verbosity level
    pub fn init_logging(&self) {
        if self.quiet {
            return;
        }

        let rust_log = std::env::var("RUST_LOG").ok();
        let mut builder = self.logger_builder(rust_log.as_deref());
        if let Ok(style) = std::env::var("RUST_LOG_STYLE") {
            builder.parse_write_style(&style);
        }
        builder.init();
    }

    /// Build the logger. `RUST_LOG` sets the filters; `-v` flags override its
    /// global level, and the default level applies only when it is unset.
    fn logger_builder(&self, rust_log: Option<&str>) -> env_logger::Builder {
        let level = match self.verbose {
            0 => log::LevelFilter::Warn,
            1 => log::LevelFilter::Info,
            2 => log::LevelFilter::Debug,
            _ => log::LevelFilter::Trace,
        };

        let mut builder = env_logger::Builder::new();
        if let Some(filters) = rust_log {
            builder.parse_filters(filters);
        }
        if self.verbose > 0 || rust_log.is_none() {
            builder.filter_level(level);
        }
        builder
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_check_defaults() {
        let cli = Cli::try_parse_from(["tag-ctl", "check"]).unwrap();
        match cli.command {
            Commands::Check { config, only, format, parallel, .. } => {
                assert_eq!(config, PathBuf::from("config.yaml"));
                assert!(only.is_empty());
                assert!(format.is_none());
                assert!(!parallel);
            }
            _ => panic!("expected check command"),
        }
    }

    #[test]
    fn test_check_only_list() {
        let cli = Cli::try_parse_from(["tag-ctl", "check", "--only", "gosec,bandit", "--format", "github"]).unwrap();
        match cli.command {
            Commands::Check { only, format, .. } => {
                assert_eq!(only, vec!["gosec", "bandit"]);
                assert_eq!(format, Some(OutputFormat::Github));
            }
            _ => panic!("expected check command"),
        }
    }

    #[test]
    fn test_rust_log_sets_level_without_verbose_flags() {
        let cli = Cli::try_parse_from(["tag-ctl", "check"]).unwrap();
        let logger = cli.logger_builder(Some("debug")).build();
        assert_eq!(logger.filter(), log::LevelFilter::Debug);
    }

    #[test]
    fn test_default_level_is_warn() {
        let cli = Cli::try_parse_from(["tag-ctl", "check"]).unwrap();
        let logger = cli.logger_builder(None).build();
        assert_eq!(logger.filter(), log::LevelFilter::Warn);
    }

    #[test]
    fn test_verbose_flag_overrides_rust_log_level() {
        let cli = Cli::try_parse_from(["tag-ctl", "-v", "check"]).unwrap();
        let logger = cli.logger_builder(Some("trace")).build();
        assert_eq!(logger.filter(), log::LevelFilter::Info);
    }

    #[test]
    fn test_parse_name() {
        assert_eq!(OutputFormat::parse_name("GitHub"), Some(OutputFormat::Github));
        assert_eq!(OutputFormat::parse_name("json"), Some(OutputFormat::Json));
        assert_eq!(OutputFormat::parse_name("xml"), None);
    }

    #[test]
    fn test_detect_from_environment_value() {
        assert_eq!(OutputFormat::detect_from(Some("true")), OutputFormat::Github);
        assert_eq!(OutputFormat::detect_from(Some("false")), OutputFormat::Tty);
        assert_eq!(OutputFormat::detect_from(None), OutputFormat::Tty);
    }
}
