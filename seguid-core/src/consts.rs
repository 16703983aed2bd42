pub const SEGUID_PREFIX: &str = "seguid=";
pub const LSSEGUID_PREFIX: &str = "lsseguid=";
pub const CSSEGUID_PREFIX: &str = "csseguid=";
pub const LDSEGUID_PREFIX: &str = "ldseguid=";
pub const CDSEGUID_PREFIX: &str = "cdseguid=";
pub const CCSEGUID_PREFIX: &str = "ccseguid=";
pub const SEGUIDV1_PREFIX: &str = "seguidv1=";
pub const SEGUIDV1_URLSAFE_PREFIX: &str = "seguidv1urlsafe=";

/// Number of leading checksum characters in the short form.
pub const SHORT_LENGTH: usize = 6;

/// Length of an unpadded base64 encoding of a 20-byte SHA-1 digest.
pub const CHECKSUM_LENGTH: usize = 27;

/// Joins strands while searching for the canonical rotation of a circular
/// double-stranded sequence. Changing it changes every cdseguid/ccseguid.
pub const CONCAT_CONNECTOR: &str = "TTTT";

pub const GAP: char = '-';
pub const STRAND_SEPARATOR: char = ';';

pub const DEFAULT_ALPHABET: &str = "{DNA}";
pub const DEFAULT_PROTEIN_V1_ALPHABET: &str = "{proteinV1}";

/// Appended to the caller's alphabet when digesting a `watson;crick` string.
pub const DOUBLE_STRAND_EXTENSION: &str = ",--,;;";
