//! Content Checks - stateless validation and text utilities
//!
//! A collection of independent, self-contained transformations and
//! predicates over primitive inputs (strings, JSON arrays, byte buffers).
//! No state is held across calls and no function performs I/O; every
//! routine allocates what it needs per call, so concurrent use from
//! multiple threads requires no locking.
//!
//! # Architecture
//!
//! The library is structured into several modules:
//! - `allowlist`: HTML tag allowlist validation (pass/fail, fail closed)
//! - `parser`: tolerant HTML fragment parsing using html5ever
//! - `json`: JSON format predicates
//! - `flatten`: nested JSON array flattening
//! - `sniff`: magic-byte file-type sniffing (gzip, PDF)
//! - `color`: random color generation
//! - `text`: case conversion and accent stripping
//! - `error`: error types for the checked entry points
//!
//! # Security
//!
//! The allowlist checker is a gate over untrusted HTML: it reports
//! pass/fail and never sanitizes. All of its failure paths, including
//! contained parser faults, resolve to rejection. It imposes no size or
//! time limits; callers facing adversarial payloads bound the input
//! before invoking it.

// Module declarations
pub mod allowlist;
pub mod color;
pub mod error;
pub mod flatten;
pub mod json;
pub mod parser;
pub mod sniff;
pub mod text;

// Re-export main types for convenience
pub use allowlist::TagAllowlist;
pub use error::CheckError;
pub use parser::parse_body_fragment;
pub use sniff::ContentKind;
