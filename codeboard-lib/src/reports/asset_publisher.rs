use super::bundled::write_bundled_assets;
use crate::Result;
use camino::Utf8Path;
use ohno::{IntoAppError, app_err, bail};
use std::fs;
use walkdir::WalkDir;

const LOG_TARGET: &str = "    assets";

/// Static bundles copied verbatim from the template directory.
pub const ASSET_BUNDLES: [&str; 4] = ["js", "css", "images", "fonts"];

/// Copy every static bundle into `destination`
///
/// Bundles come from `template_dir` when given, otherwise from the set compiled
/// into the binary. Existing files are overwritten. Files that exist only in the
/// destination, such as history records under `js/`, are left alone.
///
/// # Errors
///
/// Returns an error if a bundle is missing from `template_dir` or a file cannot be copied
pub fn publish(template_dir: Option<&Utf8Path>, destination: &Utf8Path) -> Result<()> {
    let Some(template_dir) = template_dir else {
        let written = write_bundled_assets(destination)?;
        log::info!(target: LOG_TARGET, "Published {written} bundled asset(s) into '{destination}'");
        return Ok(());
    };

    for bundle in ASSET_BUNDLES {
        let source = template_dir.join(bundle);
        if !source.is_dir() {
            bail!("asset bundle '{source}' does not exist");
        }

        let copied = copy_tree(&source, &destination.join(bundle))?;
        log::debug!(target: LOG_TARGET, "Copied {copied} file(s) from '{source}'");
    }

    log::info!(target: LOG_TARGET, "Published assets into '{destination}'");
    Ok(())
}

fn copy_tree(source: &Utf8Path, destination: &Utf8Path) -> Result<usize> {
    let mut copied = 0;

    for entry in WalkDir::new(source).follow_links(true).sort_by_file_name() {
        let entry = entry.into_app_err_with(|| format!("walking '{source}'"))?;
        let relative = entry
            .path()
            .strip_prefix(source)
            .map_err(|e| app_err!("'{}' is outside of '{source}': {e}", entry.path().display()))?;
        let target = destination.as_std_path().join(relative);

        if entry.file_type().is_dir() {
            fs::create_dir_all(&target).into_app_err_with(|| format!("creating directory '{}'", target.display()))?;
        } else {
            let _ = fs::copy(entry.path(), &target)
                .into_app_err_with(|| format!("copying '{}' to '{}'", entry.path().display(), target.display()))?;
            copied += 1;
        }
    }

    Ok(copied)
}
