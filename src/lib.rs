//! Rolo — contact-card (vCard 3.0) export and import for a personal
//! relationship manager.
//!
//! The encoder turns a person record (name, typed contact entries,
//! addresses, work history, dates) into a vCard 3.0 document with CRLF
//! line endings and saves it as a `.vcf` file. The decoder parses an
//! uploaded card back into a flat field set, first contact only.
//!
//! Everything is best-effort: missing or malformed optional data drops
//! its property line and never fails the export. The one hard error on
//! the export side is a person record that cannot be loaded at all.

pub mod config;
pub mod error;
pub mod export;
pub mod import;
pub mod types;
pub mod util;
pub mod vcard;

pub use error::CardError;
pub use export::{save_vcard, vcard_filename};
pub use import::import_vcard_file;
pub use types::{Person, PersonDate, TeamMap};
pub use vcard::{generate_vcard, parse_vcard, ExportContext, ParsedImport};
