//! Business-rule validation
//!
//! Every entity implements [`Validate`]. A single [`ValidationBuilder`] is
//! passed down the object graph and collects all messages; nothing here
//! returns early or fails.

pub mod builder;
pub mod message;
pub mod report;

pub use builder::{indexed_path, join_path, Presence, ValidationBuilder};
pub use message::ValidationMessage;
pub use report::ValidationReport;

/// Validation contract shared by every entity
pub trait Validate {
    /// Appends a message to `vb` for each violated rule under `path`
    fn validate(&self, path: &str, vb: &mut ValidationBuilder);
}

impl<T: Validate + ?Sized> Validate for Box<T> {
    fn validate(&self, path: &str, vb: &mut ValidationBuilder) {
        (**self).validate(path, vb)
    }
}
