//! # SEGUID v2 checksums for biological sequences
//!
//! This crate computes SEGUID checksums: SHA-1 digests of sequences brought
//! into a canonical form, so that equivalent representations of the same
//! molecule (rotations of a circular sequence, either strand of a
//! double-stranded one) hash identically.
//!
//! # Module Structure
//!
//! - `alphabet` - Alphabet specifications and complementarity tables
//! - `validator` - Alphabet membership and Watson/Crick pairing checks
//! - `manipulation` - Rotation, reversal and minimal rotation of sequences
//! - `sequence` - Parsing of `WATSON;CRICK` and `WATSON\nREVCRICK` strings
//! - `checksum` - The checksum kinds, their canonical forms and output formats
//!
//! # Example
//!
//! ```rust
//! use seguid_core::{Form, cdseguid, ldseguid};
//!
//! let linear = ldseguid("AACGT", "ACGTT", "{DNA}", Form::Long).unwrap();
//! assert_eq!(linear, "ldseguid=5fHMG19IbYxn7Yr7_sOCkvaaw7U");
//!
//! // the same pair read from another origin
//! let circular = cdseguid("ACGTT", "AACGT", "{DNA}", Form::Short).unwrap();
//! assert_eq!(circular, "5fHMG1");
//! ```
pub mod alphabet;
pub mod checksum;
pub mod consts;
pub mod errors;
pub mod manipulation;
pub mod sequence;
pub mod validator;

pub use checksum::{
    ChecksumKind, Form, ccseguid, cdseguid, csseguid, format_checksum, ldseguid, lsseguid, seguid,
    seguidv1, seguidv1_urlsafe,
};
pub use errors::{Result, SeguidError};
pub use sequence::{SequenceSpec, StrandPair, parse_sequence_string};
