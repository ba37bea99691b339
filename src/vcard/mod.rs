//! vCard 3.0 encoding and decoding.
//!
//! The encoder is a single-pass pure pipeline: each mapper projects one
//! slice of the person record to zero or more property lines, and the
//! driver assembles them in a fixed order between BEGIN:VCARD/END:VCARD.
//! The decoder reverses the trip for imports, first card only.

pub mod address;
pub mod birthday;
pub mod contact;
pub mod date;
pub mod decoder;
pub mod encoder;
pub mod escape;
pub mod job;
pub mod phone;

pub use decoder::{parse_vcard, ParsedContact, ParsedImport};
pub use encoder::{generate_vcard, ExportContext};
