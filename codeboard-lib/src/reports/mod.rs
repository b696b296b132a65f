//! Template rendering, asset publishing and the report pipeline
//!
//! # Implementation Model
//!
//! [`generate_html`] drives one report run against a destination directory `D`:
//!
//! 1. Consolidate every configured group's subset, then the full measurement set
//! 2. Load the history stored under `D/js/`
//! 3. Copy the static bundles (`js`, `css`, `images`, `fonts`) into `D`
//! 4. Render the global page set into `D` with trends enabled
//! 5. Append the global aggregates to the history
//! 6. Render each group's page set into `D/<group>/` with trends disabled
//!
//! Pages are `minijinja` templates loaded by name from the configured template
//! directory, or from the set compiled into the binary when none is configured.
//! Each page receives a [`RenderContext`] built for that call, and templates read
//! trend indicators through its `trend(kind, key, lower_is_better)` entry backed
//! by the scope's [`TrendCalculator`](crate::trend::TrendCalculator). Undefined
//! template variables are errors.
//!
//! Alongside the pages each directory gets a `classes.js` file declaring the
//! class listing as a script variable.

mod asset_publisher;
mod bundled;
mod html;
mod page;
mod page_renderer;
mod render_context;
mod report_options;

pub use asset_publisher::{ASSET_BUNDLES, publish};
pub use bundled::{BUNDLED_ASSETS, BUNDLED_TEMPLATES, bundled_template};
pub use html::generate as generate_html;
pub use page::Page;
pub use page_renderer::{CLASSES_FILE, PageRenderer};
pub use render_context::{RenderContext, Scope};
pub use report_options::ReportOptions;
