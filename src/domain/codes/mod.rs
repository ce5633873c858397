//! Code tables
//!
//! Static (code, display name, code system) tables for coded values, the
//! fixed section and entry codes, and the identity of each document type.

#[macro_use]
pub mod coded_value;
pub mod code_system;
pub mod documents;
pub mod entries;
pub mod sections;
pub mod values;

pub use code_system::CodingSystem;
pub use coded_value::{CodeDescriptor, CodedValue};
pub use documents::DocumentKind;
pub use values::{
    AddressPurpose, AustralianState, ChangeStatus, ChangeType, DocumentStatus, EntitlementType,
    GlobalStatement, GroundsForConcurrentSupply, NameUsage, NullFlavour, Occupation,
    PhysicalMeasurementType, SeparationMode, ServiceBookingStatus, Sex, TelecomMedium,
    TelecomUsage,
};
