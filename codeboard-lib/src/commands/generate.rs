use super::Host;
use super::common::{LogLevel, init_logging};
use super::config::Config;
use crate::Result;
use crate::metrics::Metrics;
use crate::reports::{ReportOptions, generate_html};
use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;

const LOG_TARGET: &str = "  generate";

#[derive(Parser, Debug)]
pub struct GenerateArgs {
    /// Measurement set produced by the analysis engine (JSON)
    #[arg(long, short = 'm', value_name = "PATH")]
    pub metrics: Utf8PathBuf,

    /// Path to configuration file (default is `codeboard.toml`)
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<Utf8PathBuf>,

    /// Directory receiving the HTML report, overriding the configuration
    #[arg(long, value_name = "PATH")]
    pub report_html: Option<Utf8PathBuf>,

    /// Directory holding the page templates and static bundles
    #[arg(long, value_name = "PATH", env = "CODEBOARD_TEMPLATES")]
    pub templates: Option<Utf8PathBuf>,

    /// Set the logging level for diagnostic output
    #[arg(long, value_name = "LEVEL", default_value = "none")]
    pub log_level: LogLevel,
}

/// Load the measurement set and configuration, then run the HTML report
///
/// # Errors
///
/// Returns an error if the inputs cannot be loaded or the report fails
pub fn generate_report<H: Host>(host: &mut H, args: &GenerateArgs) -> Result<()> {
    init_logging(args.log_level);

    let config = Config::load(Utf8Path::new("."), args.config.as_ref())?;
    let options = report_options(config, args);

    if options.destination().is_none() {
        log::warn!(target: LOG_TARGET, "No report directory given, nothing to generate");
        return Ok(());
    }

    let metrics = Metrics::load(&args.metrics)?;
    generate_html(&metrics, &options, &mut host.output())
}

/// Command-line values take precedence over the configuration file.
fn report_options(config: Config, args: &GenerateArgs) -> ReportOptions {
    let mut options = ReportOptions::new(args.report_html.clone().or(config.report_html)).with_groups(config.groups);

    if let Some(template_dir) = args.templates.clone().or(config.template_dir) {
        options = options.with_template_dir(template_dir);
    }

    options
}
