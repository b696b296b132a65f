//! Command dispatch logic for codeboard

use super::{GenerateArgs, InitArgs, ValidateArgs, generate_report, init_config, validate_config};
use crate::{Host, Result};
use clap::builder::Styles;
use clap::builder::styling::{AnsiColor, Effects};
use clap::{Parser, Subcommand};

const CLAP_STYLES: Styles = Styles::styled()
    .header(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .usage(AnsiColor::Green.on_default().effects(Effects::BOLD))
    .literal(AnsiColor::Cyan.on_default().effects(Effects::BOLD))
    .placeholder(AnsiColor::Cyan.on_default());

#[derive(Parser, Debug)]
#[command(name = "codeboard", version, author, long_about = None)]
#[command(about = "Generate an HTML code-metrics dashboard with history and per-group reports")]
#[command(styles = CLAP_STYLES)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate the HTML report from a measurement set
    Generate(Box<GenerateArgs>),
    /// Generate a default configuration file
    Init(InitArgs),
    /// Validate a configuration file and its template directory
    Validate(ValidateArgs),
}

/// Dispatch command-line arguments to the appropriate handler
///
/// This function parses the command-line arguments and executes the corresponding
/// subcommand. It's designed to be called from main.rs with the program arguments.
///
/// # Arguments
///
/// * `args` - An iterator of command-line arguments (typically from `std::env::args()`)
///
/// # Errors
///
/// Returns an error if command parsing fails or if the executed command fails
pub fn run<I, T, H>(host: &mut H, args: I) -> Result<()>
where
    I: IntoIterator<Item = T>,
    T: Into<std::ffi::OsString> + Clone,
    H: Host,
{
    match &Cli::parse_from(args).command {
        Command::Generate(generate_args) => generate_report(host, generate_args),
        Command::Init(init_args) => init_config(host, init_args),
        Command::Validate(validate_args) => validate_config(host, validate_args),
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
    fn test_parse_generate() {
        let cli = Cli::parse_from(["codeboard", "generate", "--metrics", "m.json", "--report-html", "out", "--log-level", "debug"]);
        let args = match cli.command {
            Command::Generate(args) => args,
            other => panic!("expected Generate, got {other:?}"),
        };

        assert_eq!(args.metrics, "m.json");
        assert_eq!(args.report_html.as_deref().map(camino::Utf8Path::as_str), Some("out"));
        assert!(args.config.is_none());
    }

    #[test]
    fn test_parse_init_default_path() {
        let cli = Cli::parse_from(["codeboard", "init"]);
        assert!(matches!(cli.command, Command::Init(InitArgs { output: None })));
    }
}
