//! Domain model for PCEHR clinical documents.
//!
//! # Overview
//!
//! The domain layer provides:
//! - **Code tables** ([`codes`]): coded enumerations with static lookup tables,
//!   fixed section and entry codes, and document identities
//! - **Common value types** ([`common`]): coded text, identifiers, intervals,
//!   addresses, parties and participation roles
//! - **Clinical entities** ([`clinical`]): section content such as adverse
//!   reactions, medications and problems
//! - **Documents** ([`documents`]): the supported document types
//! - **Error types** ([`CdaError`], [`GenerationError`]), the [`Result`] alias
//!   and the [`context::ResultExt`] extension
//!
//! Every entity implements [`Validate`](crate::core::validation::Validate),
//! which appends messages to a shared
//! [`ValidationBuilder`](crate::core::validation::ValidationBuilder) rather
//! than failing fast.
//!
//! ```rust
//! use pcehr_cda::core::validation::{Validate, ValidationBuilder};
//! use pcehr_cda::domain::clinical::AdverseReactions;
//! use pcehr_cda::domain::codes::GlobalStatement;
//! use pcehr_cda::domain::common::ExclusionStatement;
//!
//! let section = AdverseReactions::none_known(ExclusionStatement::new(GlobalStatement::NoneKnown));
//! let mut vb = ValidationBuilder::new();
//! section.validate("AdverseReactions", &mut vb);
//! assert!(vb.is_empty());
//! ```

pub mod clinical;
pub mod codes;
pub mod common;
pub mod context;
pub mod documents;
pub mod errors;
pub mod ids;
pub mod result;

pub use documents::{AnyDocument, ClinicalDocument, DocumentContext, DocumentHeader};
pub use errors::{CdaError, GenerationError};
pub use ids::{HealthcareIdentifier, HealthcareIdentifierKind};
pub use result::Result;
