use super::asset_publisher::publish;
use super::page_renderer::PageRenderer;
use super::render_context::Scope;
use super::ReportOptions;
use crate::Result;
use crate::consolidate::Consolidated;
use crate::groups::Group;
use crate::history::HistoryStore;
use crate::metrics::Metrics;
use crate::trend::TrendCalculator;
use camino::{Utf8Component, Utf8Path, Utf8PathBuf};
use chrono::Local;
use ohno::{IntoAppError, bail};
use std::fs;
use std::io::Write;

const LOG_TARGET: &str = "    report";

/// Produce the HTML report for one analysis run
///
/// Does nothing when no destination is configured. Otherwise publishes the static
/// assets, renders the global pages with trends against the stored history,
/// appends the run to that history, renders each group into its own
/// subdirectory without trends, and writes a status line to `writer`.
///
/// # Errors
///
/// Returns an error if the destination is not writable, the stored history is
/// damaged, an asset bundle or template is missing, a group name is not a valid
/// directory name, or any output cannot be written
pub fn generate<W: Write>(metrics: &Metrics, options: &ReportOptions, writer: &mut W) -> Result<()> {
    let Some(destination) = options.destination() else {
        log::debug!(target: LOG_TARGET, "No report directory configured, skipping the HTML report");
        return Ok(());
    };

    prepare_destination(destination)?;

    let scoped: Vec<(&Group, Consolidated)> = options
        .groups
        .iter()
        .map(|group| (group, Consolidated::new(&group.reduce(metrics))))
        .collect();
    let consolidated = Consolidated::new(metrics);

    let store = HistoryStore::new(destination);
    let history = store.load()?;

    publish(options.template_dir(), destination)?;

    let generated_at = Local::now().format("%Y-%m-%d %H:%M").to_string();
    let renderer = PageRenderer::new(options, generated_at);

    let trends = TrendCalculator::new(&consolidated, &history);
    renderer.render_all(destination, Scope::global(), &consolidated, &history, trends)?;

    let _ = store.append(consolidated.avg(), consolidated.sum())?;

    for (group, consolidated) in &scoped {
        let dir = group_directory(destination, group.name())?;
        log::debug!(target: LOG_TARGET, "Rendering group '{}' ({} classes)", group.name(), consolidated.classes().len());
        renderer.render_all(&dir, Scope::group(group.name()), consolidated, &history, TrendCalculator::disabled())?;
    }

    writeln!(writer, "HTML report generated in \"{destination}\" directory").into_app_err("writing status line")?;
    Ok(())
}

fn prepare_destination(destination: &Utf8Path) -> Result<()> {
    fs::create_dir_all(destination).into_app_err_with(|| format!("unable to create the directory '{destination}'"))?;

    let metadata = fs::metadata(destination).into_app_err_with(|| format!("unable to inspect the directory '{destination}'"))?;
    if metadata.permissions().readonly() {
        bail!("unable to write in the directory '{destination}'");
    }

    Ok(())
}

/// Directory of a group's sub-report. The name must be a single plain path component.
fn group_directory(destination: &Utf8Path, name: &str) -> Result<Utf8PathBuf> {
    let mut components = Utf8Path::new(name).components();
    match (components.next(), components.next()) {
        (Some(Utf8Component::Normal(_)), None) => Ok(destination.join(name)),
        _ => bail!("group name '{name}' cannot be used as a directory name"),
    }
}
