//! # inspect2run-translate
//!
//! Turns the JSON printed by `docker inspect` back into a `docker run`
//! command line.
//!
//! - **Inspect**: serde wire types for the subset of the inspect document we read.
//! - **Record**: the flat, read-only [`record::InspectRecord`] and document decoding.
//! - **Memory**: unit selection for the `-m` flag.
//! - **Translator**: field-by-field command assembly.

pub mod inspect;
pub mod memory;
pub mod record;
pub mod translator;

pub use record::{InspectRecord, PortBinding, decode_first};
pub use translator::{translate, translate_json};
