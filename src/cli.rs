use std::path::PathBuf;

use clap::ArgAction;
use line_report::{format_report, format_report_json, try_read_lines, Config, Lines, Report};
use tracing::instrument;

#[derive(Debug, clap::Parser)]
#[command(version, about)]
pub struct Cli {
    /// Verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count)]
    verbose: u8,

    /// Load settings from a TOML config file
    #[arg(short, long, value_name = "FILE")]
    config: Option<PathBuf>,

    /// The project name shown in the report
    #[arg(short, long, value_name = "NAME")]
    project: Option<String>,

    /// The text file to read lines from
    #[arg(short, long, value_name = "PATH")]
    input: Option<PathBuf>,

    /// Leave out lines with fewer characters than this
    #[arg(short, long, value_name = "N")]
    min_length: Option<usize>,

    /// Output format (text, json)
    #[arg(long, value_name = "FORMAT", default_value = "text")]
    output: OutputFormat,

    /// Fail if the input file cannot be read instead of using fallback lines
    #[arg(long)]
    strict: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
enum OutputFormat {
    #[default]
    Text,
    Json,
}

impl Cli {
    pub fn run(self) -> anyhow::Result<()> {
        Self::setup_logging(self.verbose);

        let config = self.resolve_config()?;
        let report = Self::build(&config, self.strict)?;

        let rendered = match self.output {
            OutputFormat::Text => format_report(&report),
            OutputFormat::Json => format_report_json(&report)?,
        };
        println!("{rendered}");

        Ok(())
    }

    /// Built-in defaults, then the config file if one was given, then flags.
    fn resolve_config(&self) -> anyhow::Result<Config> {
        let mut config = match &self.config {
            Some(path) => Config::load(path)?,
            None => line_report::load_config(),
        };

        if let Some(project) = &self.project {
            config.project_name.clone_from(project);
        }
        if let Some(input) = &self.input {
            config.input_path.clone_from(input);
        }
        if let Some(min_length) = self.min_length {
            config.min_line_length = min_length;
        }

        tracing::debug!(?config, "resolved configuration");
        Ok(config)
    }

    #[instrument(level = "debug", skip(config), fields(input = %config.input_path.display()))]
    fn build(config: &Config, strict: bool) -> anyhow::Result<Report> {
        let report = if strict {
            let lines = try_read_lines(&config.input_path)?;
            Report::build(config.project_name.clone(), &lines, config.min_line_length)
        } else {
            let lines = Lines::read(&config.input_path);
            if lines.is_fallback() {
                tracing::info!("Report built from fallback lines");
            }
            tracing::debug!(source = ?lines.source(), count = lines.as_slice().len(), "lines read");
            Report::build(
                config.project_name.clone(),
                lines.as_slice(),
                config.min_line_length,
            )
        };

        Ok(report)
    }

    fn setup_logging(verbosity: u8) {
        use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

        let level = match verbosity {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        };

        let filter = tracing_subscriber::EnvFilter::from_default_env().add_directive(level.into());

        // stdout carries the report only
        let fmt_layer = tracing_subscriber::fmt::layer()
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_thread_names(false)
            .with_line_number(false);

        tracing_subscriber::registry()
            .with(filter)
            .with(fmt_layer)
            .init();
    }
}
