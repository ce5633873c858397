//! Core business logic for PCEHR CDA generation.
//!
//! # Modules
//!
//! - [`validation`] - Business-rule validation that collects every message
//! - [`narrative`] - Human-readable section text, pluggable per caller
//! - [`generator`] - Mapping of validated documents to the CDA XML tree
//!
//! # Generation Workflow
//!
//! 1. **Validate**: walk the document graph and collect messages
//! 2. **Mark**: wrap a clean document in [`generator::Validated`]
//! 3. **Map**: build header, participations and sections as an
//!    [`XmlElement`](crate::xml::XmlElement) tree
//! 4. **Serialise**: write the tree with the configured writer options
//!
//! # Example
//!
//! ```rust,no_run
//! use pcehr_cda::config::load_config;
//! use pcehr_cda::core::generator::CdaGenerator;
//! use pcehr_cda::domain::AnyDocument;
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = load_config("pcehr-cda.toml")?;
//! let generator = CdaGenerator::from_config(&config.generator)?;
//!
//! let input = std::fs::read_to_string("referral.json")?;
//! let document: AnyDocument = serde_json::from_str(&input)?;
//!
//! let xml = generator.render(&document)?;
//! println!("{xml}");
//! # Ok(())
//! # }
//! ```

pub mod generator;
pub mod narrative;
pub mod validation;
