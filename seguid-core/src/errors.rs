use thiserror::Error;

/// Which end of a double-stranded sequence a stagger conflict was found at.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StrandEnd {
    Beginning,
    End,
}

impl std::fmt::Display for StrandEnd {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            StrandEnd::Beginning => write!(f, "beginning"),
            StrandEnd::End => write!(f, "end"),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum SeguidError {
    #[error("{0} must not be empty")]
    EmptySequence(&'static str),

    #[error("Detected symbols {} not in the 'alphabet'", join_symbols(.symbols))]
    UnknownSymbols { symbols: Vec<char> },

    #[error("Argument 'alphabet' must not be empty")]
    EmptyAlphabet,

    #[error("Only A-Z a-z 0-9 -\\n; allowed. Invalid: {}", join_symbols(.symbols))]
    InvalidAlphabetCharacters { symbols: Vec<char> },

    #[error("Invalid alphabet specification: {0}")]
    InvalidAlphabetSpec(String),

    #[error("Detected keys ({}) in 'alphabet' that are not in the values", join_symbols(.symbols))]
    MalformedAlphabet { symbols: Vec<char> },

    #[error("Was a single-stranded alphabet used by mistake? ({0})")]
    SingleStrandedAlphabet(&'static str),

    #[error("Watson and Crick strands must be equal length ({watson} != {crick})")]
    LengthMismatch { watson: usize, crick: usize },

    #[error("Non-complementary basepair ({watson},{crick}) detected at position {position}")]
    NonComplementaryPair {
        watson: char,
        crick: char,
        position: usize,
    },

    #[error(
        "Please trim the staggering. Watson and Crick are both staggered at the {end} of the double-stranded sequence: '{spec}'"
    )]
    StaggerConflict { end: StrandEnd, spec: String },

    #[error("Syntax error in sequence string: '{0}'")]
    SyntaxError(String),

    #[error("Invalid form: {0}")]
    InvalidForm(String),

    #[error("Unknown checksum type: '{0}'")]
    UnknownKind(String),

    #[error(transparent)]
    Internal(#[from] InternalError),
}

impl SeguidError {
    /// `true` for engine defects, `false` for bad input.
    pub fn is_internal(&self) -> bool {
        matches!(self, SeguidError::Internal(_))
    }
}

/// Consistency failures that cannot be caused by user input.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum InternalError {
    #[error("Invalid checksum length: expected 27, got {0}")]
    DigestLength(usize),

    #[error("Invalid base64 character in checksum: {0}")]
    DigestCharacters(String),

    #[error("ASCII ordering assumption violated")]
    AsciiOrdering,
}

pub type Result<T> = std::result::Result<T, SeguidError>;

fn join_symbols(symbols: &[char]) -> String {
    symbols
        .iter()
        .map(|c| c.escape_default().to_string())
        .collect::<Vec<_>>()
        .join(" ")
}
