//! SEGUID checksums for single- and double-stranded, linear and circular
//! sequences.
//!
//! Every public function validates its input against an alphabet, brings the
//! sequence into its canonical form, digests it with SHA-1 and formats the
//! base64 encoding according to a [`Form`].
//!
//! ```rust
//! use seguid_core::checksum::{Form, seguid};
//!
//! let checksum = seguid("AT", "{DNA}", Form::Long).unwrap();
//! assert_eq!(checksum, "seguid=Ax/RG6hzSrMEEWoCO1IWMGska+4");
//! ```
pub mod algorithms;
pub mod canonical;

use std::fmt::Display;
use std::str::FromStr;

use log::debug;

use crate::alphabet::AlphabetTable;
use crate::consts::*;
use crate::errors::{Result, SeguidError};
use crate::manipulation::{reverse, rotate_to_min};
use crate::validator::assert_complementary;

use self::algorithms::{generate_seguid, generate_seguid_v1};
use self::canonical::{circular_ds_canonical, dihedral_ds_canonical};

/// How a checksum is rendered.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Form {
    /// `prefix=checksum`
    #[default]
    Long,
    /// The first six characters of the checksum, without prefix.
    Short,
    /// `short,prefix=checksum`
    Both,
}

impl Display for Form {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Form::Long => write!(f, "long"),
            Form::Short => write!(f, "short"),
            Form::Both => write!(f, "both"),
        }
    }
}

impl FromStr for Form {
    type Err = SeguidError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "long" => Ok(Form::Long),
            "short" => Ok(Form::Short),
            "both" => Ok(Form::Both),
            _ => Err(SeguidError::InvalidForm(s.to_string())),
        }
    }
}

/// Renders an encoded checksum in the requested form.
pub fn format_checksum(prefix: &str, encoded: &str, form: Form) -> String {
    let short: String = encoded.chars().take(SHORT_LENGTH).collect();
    match form {
        Form::Long => format!("{}{}", prefix, encoded),
        Form::Short => short,
        Form::Both => format!("{},{}{}", short, prefix, encoded),
    }
}

/// The checksum kinds understood by this crate.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ChecksumKind {
    /// Linear single-stranded, standard base64.
    #[default]
    Seguid,
    /// Linear single-stranded.
    Lsseguid,
    /// Circular single-stranded.
    Csseguid,
    /// Linear double-stranded.
    Ldseguid,
    /// Circular double-stranded.
    Cdseguid,
    /// Circular double-stranded, also invariant under reversal.
    Ccseguid,
    /// Legacy protein checksum, standard base64.
    SeguidV1,
    /// Legacy protein checksum, URL-safe base64.
    SeguidV1UrlSafe,
}

impl ChecksumKind {
    pub const ALL: [ChecksumKind; 8] = [
        ChecksumKind::Seguid,
        ChecksumKind::Lsseguid,
        ChecksumKind::Csseguid,
        ChecksumKind::Ldseguid,
        ChecksumKind::Cdseguid,
        ChecksumKind::Ccseguid,
        ChecksumKind::SeguidV1,
        ChecksumKind::SeguidV1UrlSafe,
    ];

    pub fn prefix(&self) -> &'static str {
        match self {
            ChecksumKind::Seguid => SEGUID_PREFIX,
            ChecksumKind::Lsseguid => LSSEGUID_PREFIX,
            ChecksumKind::Csseguid => CSSEGUID_PREFIX,
            ChecksumKind::Ldseguid => LDSEGUID_PREFIX,
            ChecksumKind::Cdseguid => CDSEGUID_PREFIX,
            ChecksumKind::Ccseguid => CCSEGUID_PREFIX,
            ChecksumKind::SeguidV1 => SEGUIDV1_PREFIX,
            ChecksumKind::SeguidV1UrlSafe => SEGUIDV1_URLSAFE_PREFIX,
        }
    }

    /// The alphabet used when the caller does not name one.
    pub fn default_alphabet(&self) -> &'static str {
        match self {
            ChecksumKind::SeguidV1 | ChecksumKind::SeguidV1UrlSafe => DEFAULT_PROTEIN_V1_ALPHABET,
            _ => DEFAULT_ALPHABET,
        }
    }

    pub fn is_double_stranded(&self) -> bool {
        matches!(
            self,
            ChecksumKind::Ldseguid | ChecksumKind::Cdseguid | ChecksumKind::Ccseguid
        )
    }
}

impl Display for ChecksumKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.prefix().trim_end_matches('='))
    }
}

impl FromStr for ChecksumKind {
    type Err = SeguidError;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "seguid" => Ok(ChecksumKind::Seguid),
            "lsseguid" => Ok(ChecksumKind::Lsseguid),
            "csseguid" => Ok(ChecksumKind::Csseguid),
            "ldseguid" => Ok(ChecksumKind::Ldseguid),
            "cdseguid" => Ok(ChecksumKind::Cdseguid),
            "ccseguid" => Ok(ChecksumKind::Ccseguid),
            "seguidv1" => Ok(ChecksumKind::SeguidV1),
            "seguidv1urlsafe" => Ok(ChecksumKind::SeguidV1UrlSafe),
            _ => Err(SeguidError::UnknownKind(s.to_string())),
        }
    }
}

/// Checksum of a linear single-stranded sequence, in standard base64.
pub fn seguid(seq: &str, alphabet: &str, form: Form) -> Result<String> {
    let encoded = generate_seguid(seq, alphabet, false)?;
    Ok(format_checksum(SEGUID_PREFIX, &encoded, form))
}

/// Checksum of a linear single-stranded sequence.
pub fn lsseguid(seq: &str, alphabet: &str, form: Form) -> Result<String> {
    let encoded = generate_seguid(seq, alphabet, true)?;
    Ok(format_checksum(LSSEGUID_PREFIX, &encoded, form))
}

/// Checksum of a circular single-stranded sequence. Any rotation of `seq`
/// gives the same checksum.
pub fn csseguid(seq: &str, alphabet: &str, form: Form) -> Result<String> {
    if seq.is_empty() {
        return Err(SeguidError::EmptySequence("A sequence"));
    }
    let canonical = rotate_to_min(seq)?;
    let encoded = generate_seguid(&canonical, alphabet, true)?;
    Ok(format_checksum(CSSEGUID_PREFIX, &encoded, form))
}

/// Checksum of a linear double-stranded sequence.
///
/// Both strands are given 5'->3' and may be staggered with `-`. Swapping
/// `watson` and `crick` gives the same checksum.
pub fn ldseguid(watson: &str, crick: &str, alphabet: &str, form: Form) -> Result<String> {
    check_strands(watson, crick, alphabet)?;
    let encoded = digest_strand_pair(watson, crick, alphabet)?;
    Ok(format_checksum(LDSEGUID_PREFIX, &encoded, form))
}

/// Checksum of a circular double-stranded sequence.
///
/// Rotating both strands together, or swapping them, gives the same
/// checksum.
pub fn cdseguid(watson: &str, crick: &str, alphabet: &str, form: Form) -> Result<String> {
    check_strands(watson, crick, alphabet)?;
    let (w, c) = circular_ds_canonical(watson, crick);
    debug!("cdseguid canonical pair {};{}", w, c);
    let encoded = digest_strand_pair(&w, &c, alphabet)?;
    Ok(format_checksum(CDSEGUID_PREFIX, &encoded, form))
}

/// Checksum of a circular double-stranded sequence that is additionally
/// invariant under reading both strands in reverse.
pub fn ccseguid(watson: &str, crick: &str, alphabet: &str, form: Form) -> Result<String> {
    check_strands(watson, crick, alphabet)?;
    assert_complementary(&reverse(watson), &reverse(crick), alphabet)?;
    let (w, c) = dihedral_ds_canonical(watson, crick);
    debug!("ccseguid canonical pair {};{}", w, c);
    let encoded = digest_strand_pair(&w, &c, alphabet)?;
    Ok(format_checksum(CCSEGUID_PREFIX, &encoded, form))
}

/// Legacy protein checksum in standard base64. Residues outside the 20
/// canonical amino acids are dropped instead of rejected.
pub fn seguidv1(seq: &str, alphabet: &str, form: Form) -> Result<String> {
    let encoded = generate_seguid_v1(seq, alphabet, false)?;
    Ok(format_checksum(SEGUIDV1_PREFIX, &encoded, form))
}

/// Like [`seguidv1`], in URL-safe base64.
pub fn seguidv1_urlsafe(seq: &str, alphabet: &str, form: Form) -> Result<String> {
    let encoded = generate_seguid_v1(seq, alphabet, true)?;
    Ok(format_checksum(SEGUIDV1_URLSAFE_PREFIX, &encoded, form))
}

/// Checks shared by every double-stranded kind.
fn check_strands(watson: &str, crick: &str, alphabet: &str) -> Result<()> {
    if watson.is_empty() {
        return Err(SeguidError::EmptySequence("Watson sequence"));
    }
    if crick.is_empty() {
        return Err(SeguidError::EmptySequence("Crick sequence"));
    }

    let watson_len = watson.chars().count();
    let crick_len = crick.chars().count();
    if watson_len != crick_len {
        return Err(SeguidError::LengthMismatch {
            watson: watson_len,
            crick: crick_len,
        });
    }

    assert_complementary(watson, crick, alphabet)?;

    if AlphabetTable::build(alphabet)?.len() <= 1 {
        return Err(SeguidError::SingleStrandedAlphabet("values"));
    }
    Ok(())
}

/// Digests the smaller of `watson;crick` and `crick;watson`.
fn digest_strand_pair(watson: &str, crick: &str, alphabet: &str) -> Result<String> {
    let forward = format!("{}{}{}", watson, STRAND_SEPARATOR, crick);
    let backward = format!("{}{}{}", crick, STRAND_SEPARATOR, watson);
    let spec = if forward <= backward { forward } else { backward };

    let extended = format!("{}{}", alphabet, DOUBLE_STRAND_EXTENSION);
    generate_seguid(&spec, &extended, true)
}
