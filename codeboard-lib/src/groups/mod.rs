//! Named partitions of the measurement set
//!
//! A [`Group`] pairs a name with a regular expression. [`Group::reduce`] keeps
//! every class, file and package whose name matches, producing an independent
//! subset that gets its own consolidated sub-report under `<destination>/<name>/`.
//!
//! Groups may overlap. The pattern is compiled when the configuration is read,
//! but the name is not checked for filesystem safety until the report directory
//! is created.

mod group;

pub use group::Group;
