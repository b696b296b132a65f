use crate::Result;
use camino::Utf8Path;
use ohno::IntoAppError;
use std::fs;

/// Page templates compiled into the binary, used when no template directory is configured.
pub const BUNDLED_TEMPLATES: &[(&str, &str)] = &[
    ("layout.html", include_str!("../../templates/html_report/layout.html")),
    ("macros.html", include_str!("../../templates/html_report/macros.html")),
    ("index.html", include_str!("../../templates/html_report/index.html")),
    ("loc.html", include_str!("../../templates/html_report/loc.html")),
    ("relations.html", include_str!("../../templates/html_report/relations.html")),
    ("coupling.html", include_str!("../../templates/html_report/coupling.html")),
    ("all.html", include_str!("../../templates/html_report/all.html")),
    ("oop.html", include_str!("../../templates/html_report/oop.html")),
    ("complexity.html", include_str!("../../templates/html_report/complexity.html")),
    ("panel.html", include_str!("../../templates/html_report/panel.html")),
    ("violations.html", include_str!("../../templates/html_report/violations.html")),
    ("packages.html", include_str!("../../templates/html_report/packages.html")),
    ("package_relations.html", include_str!("../../templates/html_report/package_relations.html")),
    ("composer.html", include_str!("../../templates/html_report/composer.html")),
];

/// Static bundle files compiled into the binary, keyed by their path below the report root.
pub const BUNDLED_ASSETS: &[(&str, &[u8])] = &[
    ("js/dashboard.js", include_bytes!("../../templates/html_report/js/dashboard.js")),
    ("css/style.css", include_bytes!("../../templates/html_report/css/style.css")),
    ("fonts/fonts.css", include_bytes!("../../templates/html_report/fonts/fonts.css")),
    ("images/logo.svg", include_bytes!("../../templates/html_report/images/logo.svg")),
];

/// Source of the bundled template called `name`.
#[must_use]
pub fn bundled_template(name: &str) -> Option<&'static str> {
    BUNDLED_TEMPLATES
        .iter()
        .find(|(template, _)| *template == name)
        .map(|(_, source)| *source)
}

/// Write the bundled static files below `destination`, returning how many were written.
pub(super) fn write_bundled_assets(destination: &Utf8Path) -> Result<usize> {
    for (relative, contents) in BUNDLED_ASSETS {
        let target = destination.join(relative);
        if let Some(parent) = target.parent() {
            fs::create_dir_all(parent).into_app_err_with(|| format!("creating directory '{parent}'"))?;
        }
        fs::write(&target, contents).into_app_err_with(|| format!("writing '{target}'"))?;
    }

    Ok(BUNDLED_ASSETS.len())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reports::{ASSET_BUNDLES, Page};
    use camino::Utf8PathBuf;
    use strum::IntoEnumIterator;
    use walkdir::WalkDir;

    #[test]
    fn test_every_page_has_a_bundled_template() {
        for page in Page::iter() {
            assert!(bundled_template(&page.template_name()).is_some(), "missing {page}");
        }
        assert!(bundled_template("layout.html").is_some());
        assert!(bundled_template("nope.html").is_none());
    }

    #[test]
    fn test_every_asset_bundle_is_bundled() {
        for bundle in ASSET_BUNDLES {
            assert!(
                BUNDLED_ASSETS.iter().any(|(path, _)| path.starts_with(&format!("{bundle}/"))),
                "nothing bundled for {bundle}"
            );
        }
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri does not support directory walking")]
    fn test_bundle_lists_match_template_tree() {
        let root = Utf8PathBuf::from(concat!(env!("CARGO_MANIFEST_DIR"), "/templates/html_report"));

        for entry in WalkDir::new(&root) {
            let entry = entry.unwrap();
            if !entry.file_type().is_file() {
                continue;
            }

            let relative = entry.path().strip_prefix(&root).unwrap().to_string_lossy().replace('\\', "/");
            let listed = BUNDLED_TEMPLATES.iter().any(|(name, _)| *name == relative)
                || BUNDLED_ASSETS.iter().any(|(name, _)| *name == relative);
            assert!(listed, "'{relative}' is not compiled into the binary");
        }
    }

    #[test]
    #[cfg_attr(miri, ignore = "Miri cannot call GetTempPathW")]
    fn test_write_bundled_assets() {
        let tmp = tempfile::tempdir().unwrap();
        let destination = Utf8PathBuf::try_from(tmp.path().to_path_buf()).unwrap();

        assert_eq!(write_bundled_assets(&destination).unwrap(), BUNDLED_ASSETS.len());
        for (relative, contents) in BUNDLED_ASSETS {
            assert_eq!(fs::read(destination.join(relative)).unwrap(), *contents);
        }
    }
}
