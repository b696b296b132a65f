use crate::metrics::{ClassMetrics, PackageMetrics};
use strum::{Display, EnumIter, IntoStaticStr};

/// The record family a tracked metric is read from, which is also the unit it is averaged over.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Unit {
    Class,
    Package,
}

/// Every numeric measurement summed and averaged by the consolidator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr, Display)]
#[strum(serialize_all = "camelCase")]
pub enum TrackedMetric {
    // size
    Loc,
    Lloc,
    Cloc,

    // complexity
    Ccn,
    CcnMethod,
    Wmc,
    RelativeSystemComplexity,
    RelativeDataComplexity,
    RelativeStructuralComplexity,

    // object orientation
    NbMethods,
    Lcom,

    // coupling
    AfferentCoupling,
    EfferentCoupling,
    Instability,

    // halstead and maintainability
    Bugs,
    KanDefect,
    Difficulty,
    Volume,
    IntelligentContent,
    CommentWeight,
    Mi,

    // violations
    Violations,
    ViolationsInformation,
    ViolationsWarning,
    ViolationsError,
    ViolationsCritical,

    // packages
    PackageAbstraction,
    PackageInstability,
    PackageDistance,
}

impl TrackedMetric {
    /// The key under which this metric appears in `sum` and `avg`.
    #[must_use]
    pub fn key(self) -> &'static str {
        self.into()
    }

    #[must_use]
    pub const fn unit(self) -> Unit {
        match self {
            Self::PackageAbstraction | Self::PackageInstability | Self::PackageDistance => Unit::Package,
            _ => Unit::Class,
        }
    }

    /// Read this metric from a class record. Package metrics read as zero.
    #[must_use]
    pub fn of_class(self, class: &ClassMetrics) -> f64 {
        match self {
            Self::Loc => class.loc,
            Self::Lloc => class.lloc,
            Self::Cloc => class.cloc,
            Self::Ccn => class.ccn,
            Self::CcnMethod => class.ccn_method,
            Self::Wmc => class.wmc,
            Self::RelativeSystemComplexity => class.relative_system_complexity,
            Self::RelativeDataComplexity => class.relative_data_complexity,
            Self::RelativeStructuralComplexity => class.relative_structural_complexity,
            Self::NbMethods => class.nb_methods,
            Self::Lcom => class.lcom,
            Self::AfferentCoupling => class.afferent_coupling,
            Self::EfferentCoupling => class.efferent_coupling,
            Self::Instability => class.instability,
            Self::Bugs => class.bugs,
            Self::KanDefect => class.kan_defect,
            Self::Difficulty => class.difficulty,
            Self::Volume => class.volume,
            Self::IntelligentContent => class.intelligent_content,
            Self::CommentWeight => class.comment_weight,
            Self::Mi => class.mi,
            Self::Violations => f64::from(class.violations.total()),
            Self::ViolationsInformation => f64::from(class.violations.information),
            Self::ViolationsWarning => f64::from(class.violations.warning),
            Self::ViolationsError => f64::from(class.violations.error),
            Self::ViolationsCritical => f64::from(class.violations.critical),
            Self::PackageAbstraction | Self::PackageInstability | Self::PackageDistance => 0.0,
        }
    }

    /// Read this metric from a package record. Class metrics read as zero.
    #[must_use]
    pub fn of_package(self, package: &PackageMetrics) -> f64 {
        match self {
            Self::PackageAbstraction => package.abstraction,
            Self::PackageInstability => package.instability,
            Self::PackageDistance => package.normalized_distance,
            _ => 0.0,
        }
    }
}

/// Unit tallies that only make sense as totals.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, EnumIter, IntoStaticStr, Display)]
#[strum(serialize_all = "camelCase")]
pub enum UnitCount {
    NbClasses,
    NbInterfaces,
    NbFiles,
    NbPackages,
}

impl UnitCount {
    #[must_use]
    pub fn key(self) -> &'static str {
        self.into()
    }
}
