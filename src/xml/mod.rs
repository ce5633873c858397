//! XML output
//!
//! The generator produces an [`XmlElement`] tree; [`to_xml_string`] writes it
//! out with quick-xml.

pub mod element;
pub mod writer;

pub use element::{XmlElement, XmlNode};
pub use writer::{to_xml_bytes, to_xml_string, WriterOptions};
