use super::Host;
use super::config::Config;
use crate::Result;
use crate::reports::{ASSET_BUNDLES, Page};
use camino::{Utf8Path, Utf8PathBuf};
use clap::Parser;
use ohno::bail;
use std::io::Write;
use strum::IntoEnumIterator;

#[derive(Parser, Debug)]
pub struct ValidateArgs {
    /// Path to configuration file (default is `codeboard.toml`)
    #[arg(long, short = 'c', value_name = "PATH")]
    pub config: Option<Utf8PathBuf>,
}

/// Load the configuration and check that its template directory, if any, is complete.
fn validate_config_inner(base_dir: &Utf8Path, config_path: Option<&Utf8PathBuf>) -> Result<()> {
    let config = Config::load(base_dir, config_path)?;
    let Some(template_dir) = config.template_dir.as_deref() else {
        return Ok(());
    };

    for page in Page::iter() {
        let template = template_dir.join(page.template_name());
        if !template.is_file() {
            bail!("template '{template}' does not exist");
        }
    }

    for bundle in ASSET_BUNDLES {
        let source = template_dir.join(bundle);
        if !source.is_dir() {
            bail!("asset bundle '{source}' does not exist");
        }
    }

    Ok(())
}

pub fn validate_config<H: Host>(host: &mut H, args: &ValidateArgs) -> Result<()> {
    let base_dir = Utf8PathBuf::from(".");
    let config_path = args.config.as_ref();

    match validate_config_inner(&base_dir, config_path) {
        Ok(()) => {
            let mut out = host.output();
            let _ = writeln!(out, "Configuration file is valid");
            if let Some(path) = config_path {
                let _ = writeln!(out, "Config file: {path}");
            } else {
                let _ = writeln!(out, "Using default configuration (no config file given)");
            }
            Ok(())
        }
        Err(e) => {
            let _ = writeln!(host.error(), "❌ Configuration validation failed: {e}");
            host.exit(1);
            Err(e)
        }
    }
}
