use strum::{Display, EnumIter, IntoStaticStr};

/// The fixed set of pages rendered into every report directory.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, Display, IntoStaticStr)]
#[strum(serialize_all = "snake_case")]
pub enum Page {
    Index,
    Loc,
    Relations,
    Coupling,
    All,
    Oop,
    Complexity,
    Panel,
    Violations,
    Packages,
    PackageRelations,
    Composer,
}

impl Page {
    #[must_use]
    pub fn name(self) -> &'static str {
        self.into()
    }

    /// Template executed for this page, relative to the template directory.
    #[must_use]
    pub fn template_name(self) -> String {
        format!("{}.html", self.name())
    }

    /// File written for this page, relative to the report directory.
    #[must_use]
    pub fn file_name(self) -> String {
        format!("{}.html", self.name())
    }
}
