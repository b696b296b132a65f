use strum::{Display, EnumString};

/// Which aggregate map a trend query reads from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString)]
#[strum(serialize_all = "lowercase")]
pub enum AggregateKind {
    Sum,
    Avg,
}
