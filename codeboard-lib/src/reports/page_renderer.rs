use super::ReportOptions;
use super::bundled::bundled_template;
use super::page::Page;
use super::render_context::{RenderContext, Scope};
use crate::Result;
use crate::consolidate::Consolidated;
use crate::history::History;
use crate::trend::{TrendCalculator, format_number};
use camino::Utf8Path;
use minijinja::{Environment, UndefinedBehavior, path_loader};
use ohno::IntoAppError;
use std::fs;
use strum::IntoEnumIterator;

const LOG_TARGET: &str = "    render";

/// Script-loadable listing of every class in the rendered scope.
pub const CLASSES_FILE: &str = "classes.js";

/// Renders the page set of one scope into a directory.
#[derive(Debug)]
pub struct PageRenderer<'a> {
    env: Environment<'static>,
    options: &'a ReportOptions,
    generated_at: String,
}

impl<'a> PageRenderer<'a> {
    /// Set up template loading from `options.template_dir`, or from the bundled set.
    ///
    /// Templates are read lazily, so a missing template only surfaces when its page is rendered.
    #[must_use]
    pub fn new(options: &'a ReportOptions, generated_at: impl Into<String>) -> Self {
        let mut env = Environment::new();
        match options.template_dir() {
            Some(dir) => env.set_loader(path_loader(dir.as_std_path())),
            None => env.set_loader(|name| Ok(bundled_template(name).map(str::to_string))),
        }
        env.set_undefined_behavior(UndefinedBehavior::Strict);
        env.add_filter("number", format_number);

        Self {
            env,
            options,
            generated_at: generated_at.into(),
        }
    }

    /// Render every page plus the class listing into `destination`
    ///
    /// The directory is created first if needed. Templates see trends only through
    /// the `trend` entry of each page's context, backed by `trends`, so a disabled
    /// calculator keeps trend indicators out of the pages.
    ///
    /// # Errors
    ///
    /// Returns an error if the directory cannot be created, a template is missing or
    /// fails to execute, or an output file cannot be written
    pub fn render_all(
        &self,
        destination: &Utf8Path,
        scope: Scope<'_>,
        consolidated: &Consolidated,
        history: &History,
        trends: TrendCalculator,
    ) -> Result<()> {
        fs::create_dir_all(destination).into_app_err_with(|| format!("creating report directory '{destination}'"))?;

        let trend = RenderContext::trend_function(trends);
        for page in Page::iter() {
            let template_name = page.template_name();
            let template = self
                .env
                .get_template(&template_name)
                .into_app_err_with(|| format!("loading template '{template_name}' from {}", self.template_source()))?;

            let context = RenderContext::new(page, consolidated, history, self.options, scope, &self.generated_at, trend.clone());
            let html = template
                .render(&context)
                .into_app_err_with(|| format!("rendering template '{template_name}'"))?;

            let path = destination.join(page.file_name());
            fs::write(&path, html).into_app_err_with(|| format!("writing '{path}'"))?;
            log::debug!(target: LOG_TARGET, "Rendered '{path}'");
        }

        let json = serde_json::to_string_pretty(consolidated.classes()).into_app_err("serializing class listing")?;
        let path = destination.join(CLASSES_FILE);
        fs::write(&path, format!("var classes = {json};\n")).into_app_err_with(|| format!("writing '{path}'"))?;

        log::info!(target: LOG_TARGET, "Rendered {} pages into '{destination}'", Page::iter().count());
        Ok(())
    }

    fn template_source(&self) -> String {
        self.options
            .template_dir()
            .map_or_else(|| "the bundled templates".to_string(), |dir| format!("'{dir}'"))
    }
}
