use super::{Aggregates, TrackedMetric, Unit, UnitCount, round_to_hundredths};
use crate::metrics::{ClassMetrics, FileMetrics, Metrics, PackageMetrics, ProjectMetrics};
use strum::IntoEnumIterator;

/// Read-only aggregate view over one measurement subset.
#[derive(Debug, Clone, PartialEq)]
pub struct Consolidated {
    sum: Aggregates,
    avg: Aggregates,
    classes: Vec<ClassMetrics>,
    files: Vec<FileMetrics>,
    packages: Vec<PackageMetrics>,
    project: ProjectMetrics,
}

impl Consolidated {
    /// Consolidate a measurement subset.
    ///
    /// Never fails: an empty subset produces zero for every tracked key.
    #[must_use]
    pub fn new(metrics: &Metrics) -> Self {
        let mut sum = Aggregates::default();
        let mut avg = Aggregates::default();

        for metric in TrackedMetric::iter() {
            let (total, count) = match metric.unit() {
                Unit::Class => (metrics.classes.iter().map(|c| metric.of_class(c)).sum::<f64>(), metrics.classes.len()),
                Unit::Package => (metrics.packages.iter().map(|p| metric.of_package(p)).sum::<f64>(), metrics.packages.len()),
            };

            sum.set(metric.key(), total);
            avg.set(metric.key(), mean(total, count));
        }

        for count in UnitCount::iter() {
            let value = match count {
                UnitCount::NbClasses => metrics.classes.iter().filter(|c| !c.interface).count(),
                UnitCount::NbInterfaces => metrics.classes.iter().filter(|c| c.interface).count(),
                UnitCount::NbFiles => metrics.files.len(),
                UnitCount::NbPackages => metrics.packages.len(),
            };

            sum.set(count.key(), as_f64(value));
        }

        Self {
            sum,
            avg,
            classes: metrics.classes.clone(),
            files: metrics.files.clone(),
            packages: metrics.packages.clone(),
            project: metrics.project.clone(),
        }
    }

    #[must_use]
    pub const fn sum(&self) -> &Aggregates {
        &self.sum
    }

    #[must_use]
    pub const fn avg(&self) -> &Aggregates {
        &self.avg
    }

    #[must_use]
    pub fn classes(&self) -> &[ClassMetrics] {
        &self.classes
    }

    #[must_use]
    pub fn files(&self) -> &[FileMetrics] {
        &self.files
    }

    #[must_use]
    pub fn packages(&self) -> &[PackageMetrics] {
        &self.packages
    }

    #[must_use]
    pub const fn project(&self) -> &ProjectMetrics {
        &self.project
    }
}

fn mean(total: f64, count: usize) -> f64 {
    if count == 0 {
        return 0.0;
    }

    round_to_hundredths(total / as_f64(count))
}

#[expect(clippy::cast_precision_loss, reason = "unit counts stay far below 2^52")]
const fn as_f64(value: usize) -> f64 {
    value as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::metrics::Violations;

    fn class(name: &str, loc: f64, ccn: f64) -> ClassMetrics {
        ClassMetrics {
            name: name.into(),
            loc,
            ccn,
            ..ClassMetrics::default()
        }
    }

    fn assert_close(actual: Option<f64>, expected: f64) {
        let actual = actual.unwrap();
        assert!((actual - expected).abs() < 1e-9, "expected {expected}, got {actual}");
    }

    #[test]
    fn test_empty_subset_yields_zero_for_every_key() {
        let consolidated = Consolidated::new(&Metrics::default());

        for metric in TrackedMetric::iter() {
            assert_close(consolidated.sum().get(metric.key()), 0.0);
            assert_close(consolidated.avg().get(metric.key()), 0.0);
        }

        for count in UnitCount::iter() {
            assert_close(consolidated.sum().get(count.key()), 0.0);
            assert!(consolidated.avg().get(count.key()).is_none());
        }

        assert!(consolidated.classes().is_empty());
        assert!(consolidated.files().is_empty());
        assert!(consolidated.packages().is_empty());
    }

    #[test]
    fn test_sum_and_average_over_classes() {
        let metrics = Metrics {
            classes: vec![class("A", 100.0, 3.0), class("B", 50.0, 4.0), class("C", 0.0, 4.0)],
            ..Metrics::default()
        };
        let consolidated = Consolidated::new(&metrics);

        assert_close(consolidated.sum().get("loc"), 150.0);
        assert_close(consolidated.avg().get("loc"), 50.0);
        assert_close(consolidated.sum().get("ccn"), 11.0);
        assert_close(consolidated.avg().get("ccn"), 3.67);
    }

    #[test]
    fn test_counts_split_classes_and_interfaces() {
        let metrics = Metrics {
            classes: vec![
                class("A", 1.0, 1.0),
                ClassMetrics { name: "I".into(), interface: true, ..ClassMetrics::default() },
            ],
            files: vec![FileMetrics::default(), FileMetrics::default(), FileMetrics::default()],
            packages: vec![PackageMetrics::default()],
            ..Metrics::default()
        };
        let consolidated = Consolidated::new(&metrics);

        assert_close(consolidated.sum().get("nbClasses"), 1.0);
        assert_close(consolidated.sum().get("nbInterfaces"), 1.0);
        assert_close(consolidated.sum().get("nbFiles"), 3.0);
        assert_close(consolidated.sum().get("nbPackages"), 1.0);
    }

    #[test]
    fn test_package_metrics_average_over_packages() {
        let metrics = Metrics {
            classes: vec![class("A", 1.0, 1.0)],
            packages: vec![
                PackageMetrics { name: "P1".into(), normalized_distance: 0.2, ..PackageMetrics::default() },
                PackageMetrics { name: "P2".into(), normalized_distance: 0.6, ..PackageMetrics::default() },
            ],
            ..Metrics::default()
        };
        let consolidated = Consolidated::new(&metrics);

        assert_close(consolidated.sum().get("packageDistance"), 0.8);
        assert_close(consolidated.avg().get("packageDistance"), 0.4);
    }

    #[test]
    fn test_violations_are_totalled() {
        let metrics = Metrics {
            classes: vec![
                ClassMetrics { violations: Violations { error: 2, ..Violations::default() }, ..ClassMetrics::default() },
                ClassMetrics { violations: Violations { warning: 1, critical: 1, ..Violations::default() }, ..ClassMetrics::default() },
            ],
            ..Metrics::default()
        };
        let consolidated = Consolidated::new(&metrics);

        assert_close(consolidated.sum().get("violations"), 4.0);
        assert_close(consolidated.sum().get("violationsError"), 2.0);
        assert_close(consolidated.avg().get("violations"), 2.0);
    }

    #[test]
    fn test_listings_mirror_the_subset() {
        let metrics = Metrics {
            classes: vec![class("A", 1.0, 1.0)],
            files: vec![FileMetrics { name: "a.php".into(), ..FileMetrics::default() }],
            project: ProjectMetrics { name: "demo".into(), dependencies: vec![] },
            ..Metrics::default()
        };
        let consolidated = Consolidated::new(&metrics);

        assert_eq!(consolidated.classes(), metrics.classes.as_slice());
        assert_eq!(consolidated.files(), metrics.files.as_slice());
        assert_eq!(consolidated.project().name, "demo");
    }

    #[test]
    fn test_consolidation_is_deterministic() {
        let metrics = Metrics {
            classes: vec![class("A", 12.0, 2.0), class("B", 7.0, 9.0)],
            ..Metrics::default()
        };
        assert_eq!(Consolidated::new(&metrics), Consolidated::new(&metrics));
    }
}
