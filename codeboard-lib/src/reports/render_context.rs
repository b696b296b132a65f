use super::ReportOptions;
use super::page::Page;
use crate::consolidate::{Aggregates, Consolidated};
use crate::history::History;
use crate::metrics::{ClassMetrics, FileMetrics, PackageMetrics, ProjectMetrics};
use crate::trend::{AggregateKind, TrendCalculator};
use minijinja::value::{Object, Value, from_args};
use minijinja::{Error, State};
use serde::Serialize;
use std::sync::Arc;

/// Where a set of pages is rendered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Scope<'a> {
    /// Name of the group, or `None` for the global report.
    pub group: Option<&'a str>,

    /// Prefix that leads from the rendered page back to the shared assets.
    pub asset_path: &'static str,
}

impl<'a> Scope<'a> {
    #[must_use]
    pub const fn global() -> Self {
        Self { group: None, asset_path: "" }
    }

    #[must_use]
    pub const fn group(name: &'a str) -> Self {
        Self {
            group: Some(name),
            asset_path: "../",
        }
    }

    #[must_use]
    pub const fn is_global(&self) -> bool {
        self.group.is_none()
    }
}

/// The named values a page template can read.
#[derive(Debug, Serialize)]
pub struct RenderContext<'a> {
    pub page: &'static str,
    pub sum: &'a Aggregates,
    pub avg: &'a Aggregates,
    pub classes: &'a [ClassMetrics],
    pub files: &'a [FileMetrics],
    pub packages: &'a [PackageMetrics],
    pub project: &'a ProjectMetrics,
    pub history: &'a History,
    pub config: &'a ReportOptions,
    pub scope: Scope<'a>,
    pub generated_at: &'a str,

    /// Callable as `trend(kind, key, lower_is_better)`; yields none when there is nothing to compare.
    pub trend: Value,
}

/// Template-callable view of one scope's trend calculator.
#[derive(Debug)]
struct TrendFunction(TrendCalculator);

impl Object for TrendFunction {
    fn call(self: &Arc<Self>, _state: &State<'_, '_>, args: &[Value]) -> Result<Value, Error> {
        let (kind, key, lower_is_better): (String, String, Option<bool>) = from_args(args)?;

        Ok(kind
            .parse::<AggregateKind>()
            .ok()
            .and_then(|kind| self.0.trend(kind, &key, lower_is_better.unwrap_or(false)))
            .map_or_else(|| Value::from(()), Value::from_serialize))
    }
}

impl<'a> RenderContext<'a> {
    /// Wrap `trends` for use as the `trend` entry of a context.
    #[must_use]
    pub fn trend_function(trends: TrendCalculator) -> Value {
        Value::from_object(TrendFunction(trends))
    }

    #[must_use]
    pub fn new(
        page: Page,
        consolidated: &'a Consolidated,
        history: &'a History,
        config: &'a ReportOptions,
        scope: Scope<'a>,
        generated_at: &'a str,
        trend: Value,
    ) -> Self {
        Self {
            page: page.name(),
            sum: consolidated.sum(),
            avg: consolidated.avg(),
            classes: consolidated.classes(),
            files: consolidated.files(),
            packages: consolidated.packages(),
            project: consolidated.project(),
            history,
            config,
            scope,
            generated_at,
            trend,
        }
    }
}
