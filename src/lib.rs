// PCEHR CDA - Clinical document generator for Australian national e-health documents
// Copyright (c) 2025 PCEHR CDA Contributors
// Licensed under the MIT License

//! # PCEHR CDA - Clinical Document Generator
//!
//! PCEHR CDA validates clinical documents for the Australian national e-health
//! record and maps them to HL7 CDA R2 XML following the NEHTA document
//! templates.
//!
//! ## Overview
//!
//! This library provides:
//! - **Modelling** documents such as e-Referrals and Discharge Summaries as
//!   typed Rust values, also readable from JSON
//! - **Validating** them against business rules, collecting every message
//! - **Generating** the CDA XML tree with narrative text per section
//! - **Serialising** the tree with configurable formatting
//!
//! ## Architecture
//!
//! - [`cli`] - Command-line interface and argument parsing
//! - [`core`] - Validation, narrative and generation
//! - [`domain`] - Code tables, entities and documents
//! - [`xml`] - XML tree and writer
//! - [`config`] - Configuration management
//! - [`logging`] - Structured logging
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use pcehr_cda::core::narrative::TableNarrativeGenerator;
//! use pcehr_cda::domain::documents::EReferral;
//! use pcehr_cda::xml::{to_xml_string, WriterOptions};
//! use pcehr_cda::{generate, Validated};
//!
//! # fn example(referral: EReferral) -> Result<(), Box<dyn std::error::Error>> {
//! let validated = Validated::new(referral)?;
//! let tree = generate(&validated, &TableNarrativeGenerator)?;
//! println!("{}", to_xml_string(&tree, &WriterOptions::default())?);
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! Validation never stops at the first problem:
//!
//! ```rust
//! use pcehr_cda::domain::documents::EReferral;
//! use pcehr_cda::Validated;
//!
//! let err = Validated::new(EReferral::default()).unwrap_err();
//! for message in err.validation_messages() {
//!     println!("{message}");
//! }
//! assert!(err.validation_messages().len() > 1);
//! ```

pub mod cli;
pub mod config;
pub mod core;
pub mod domain;
pub mod logging;
pub mod xml;

pub use crate::core::generator::{generate, validate, CdaDocument, CdaGenerator, Validated};
pub use crate::domain::{CdaError, Result};
