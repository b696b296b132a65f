use crate::consolidate::round_to_hundredths;
use core::cmp::Ordering;
use serde::{Serialize, Serializer};
use strum::{Display, IntoStaticStr};

/// How the current value moved relative to the previous one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum Direction {
    Decreased,
    Equal,
    Increased,
}

impl Direction {
    #[must_use]
    pub const fn from_ordering(ordering: Ordering) -> Self {
        match ordering {
            Ordering::Less => Self::Decreased,
            Ordering::Equal => Self::Equal,
            Ordering::Greater => Self::Increased,
        }
    }

    /// Short code used by the report styles (`lt`, `eq`, `gt`).
    #[must_use]
    pub const fn code(self) -> &'static str {
        match self {
            Self::Decreased => "lt",
            Self::Equal => "eq",
            Self::Increased => "gt",
        }
    }
}

/// Whether a move is an improvement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, IntoStaticStr)]
#[strum(serialize_all = "lowercase")]
pub enum Outcome {
    Good,
    Neutral,
    Bad,
}

impl Outcome {
    #[must_use]
    pub const fn classify(direction: Direction, lower_is_better: bool) -> Self {
        match (direction, lower_is_better) {
            (Direction::Equal, _) => Self::Neutral,
            (Direction::Decreased, true) | (Direction::Increased, false) => Self::Good,
            (Direction::Decreased, false) | (Direction::Increased, true) => Self::Bad,
        }
    }
}

/// The classified change of one metric since the previous report.
///
/// The delta is kept at the two decimals it is displayed with, and the direction is
/// classified from that rounded delta, so a change too small to show is `equal`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TrendResult {
    pub direction: Direction,
    pub outcome: Outcome,
    pub delta: f64,
    pub previous: f64,
}

impl TrendResult {
    #[must_use]
    pub fn compare(current: f64, previous: f64, lower_is_better: bool) -> Self {
        let delta = round_to_hundredths(current - previous);
        let direction = Direction::from_ordering(delta.total_cmp(&0.0));

        Self {
            direction,
            outcome: Outcome::classify(direction, lower_is_better),
            delta,
            previous,
        }
    }

    /// The delta with an explicit `+` when positive, e.g. `+3`, `-0.5`, `0`.
    #[must_use]
    pub fn delta_label(&self) -> String {
        if self.delta > 0.0 {
            format!("+{}", self.delta)
        } else {
            format!("{}", self.delta)
        }
    }

    /// The previous value exactly as recorded.
    #[must_use]
    pub fn previous_label(&self) -> String {
        format!("{}", self.previous)
    }
}

impl Serialize for TrendResult {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        use serde::ser::SerializeStruct;

        let mut state = serializer.serialize_struct("TrendResult", 5)?;
        state.serialize_field("direction", <&'static str>::from(self.direction))?;
        state.serialize_field("code", self.direction.code())?;
        state.serialize_field("outcome", <&'static str>::from(self.outcome))?;
        state.serialize_field("delta", &self.delta_label())?;
        state.serialize_field("previous", &self.previous_label())?;
        state.end()
    }
}

/// Render a number with at most two decimals and no trailing zeros.
#[must_use]
pub fn format_number(value: f64) -> String {
    format!("{}", round_to_hundredths(value))
}
