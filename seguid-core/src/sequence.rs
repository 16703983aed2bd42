//! Parsing of single- and double-stranded sequence strings.
//!
//! A double-stranded sequence can be written two ways:
//!
//! - `WATSON;CRICK` with both strands given 5'->3'
//! - `WATSON\nREVCRICK` with the Crick strand written 3'->5' under Watson
//!
//! Only the syntax is checked here. Alphabet membership and complementarity
//! are checked when a checksum is computed.

use std::fmt::Display;
use std::sync::LazyLock;

use regex::Regex;

use crate::consts::{GAP, STRAND_SEPARATOR};
use crate::errors::{Result, SeguidError, StrandEnd};
use crate::manipulation::reverse;

static SINGLE_STRAND: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[0-9A-Za-z-]+$").expect("valid single-strand pattern"));

static SEMICOLON_PAIR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9A-Za-z-]+);([0-9A-Za-z-]+)$").expect("valid semicolon pair pattern")
});

static NEWLINE_PAIR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^([0-9A-Za-z-]+)\n([0-9A-Za-z-]+)$").expect("valid newline pair pattern")
});

/// Two antiparallel strands of equal length, each read 5'->3'.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StrandPair {
    watson: String,
    crick: String,
}

impl StrandPair {
    /// Creates a strand pair, rejecting strands of different length and
    /// strands that are both staggered at the same end.
    pub fn new(watson: impl Into<String>, crick: impl Into<String>) -> Result<Self> {
        let watson = watson.into();
        let crick = crick.into();
        let spec = format!("{}{}{}", watson, STRAND_SEPARATOR, crick);
        validate_strands(&watson, &crick, &spec)?;
        Ok(StrandPair { watson, crick })
    }

    pub fn watson(&self) -> &str {
        &self.watson
    }

    pub fn crick(&self) -> &str {
        &self.crick
    }

    pub fn into_strands(self) -> (String, String) {
        (self.watson, self.crick)
    }
}

impl Display for StrandPair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{}", self.watson, STRAND_SEPARATOR, self.crick)
    }
}

/// The result of parsing a sequence string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SequenceSpec {
    SingleStranded(String),
    DoubleStranded(StrandPair),
}

impl SequenceSpec {
    pub fn is_double_stranded(&self) -> bool {
        matches!(self, SequenceSpec::DoubleStranded(_))
    }
}

/// Returns true if either strand carries a gap.
pub fn is_staggered(watson: &str, crick: &str) -> bool {
    watson.contains(GAP) || crick.contains(GAP)
}

/// Escapes newlines so a sequence string fits on one line of an error message.
pub fn escape_sequence_spec(spec: &str) -> String {
    spec.replace('\n', "\\n")
}

/// Parses a single-stranded sequence or a double-stranded `WATSON;CRICK` /
/// `WATSON\nREVCRICK` pair.
pub fn parse_sequence_string(spec: &str) -> Result<SequenceSpec> {
    if SINGLE_STRAND.is_match(spec) {
        return Ok(SequenceSpec::SingleStranded(spec.to_string()));
    }

    if let Some(caps) = SEMICOLON_PAIR.captures(spec) {
        let watson = &caps[1];
        let crick = &caps[2];
        validate_strands(watson, crick, spec)?;
        return Ok(SequenceSpec::DoubleStranded(StrandPair {
            watson: watson.to_string(),
            crick: crick.to_string(),
        }));
    }

    if let Some(caps) = NEWLINE_PAIR.captures(spec) {
        let watson = &caps[1];
        let crick = reverse(&caps[2]);
        validate_strands(watson, &crick, spec)?;
        return Ok(SequenceSpec::DoubleStranded(StrandPair {
            watson: watson.to_string(),
            crick,
        }));
    }

    Err(SeguidError::SyntaxError(escape_sequence_spec(spec)))
}

fn validate_strands(watson: &str, crick: &str, spec: &str) -> Result<()> {
    let watson_len = watson.chars().count();
    let crick_len = crick.chars().count();
    if watson_len != crick_len {
        return Err(SeguidError::LengthMismatch {
            watson: watson_len,
            crick: crick_len,
        });
    }

    if is_staggered(watson, crick) {
        let rcrick = reverse(crick);
        if watson.starts_with(GAP) && rcrick.starts_with(GAP) {
            return Err(SeguidError::StaggerConflict {
                end: StrandEnd::Beginning,
                spec: escape_sequence_spec(spec),
            });
        }
        if watson.ends_with(GAP) && rcrick.ends_with(GAP) {
            return Err(SeguidError::StaggerConflict {
                end: StrandEnd::End,
                spec: escape_sequence_spec(spec),
            });
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use rstest::*;

    #[rstest]
    fn test_single_strand() {
        assert_eq!(
            parse_sequence_string("ACGT-acgt09").unwrap(),
            SequenceSpec::SingleStranded("ACGT-acgt09".to_string())
        );
    }

    #[rstest]
    fn test_semicolon_pair() {
        let parsed = parse_sequence_string("ACGT;TGCA").unwrap();
        assert!(parsed.is_double_stranded());
        assert_eq!(
            parsed,
            SequenceSpec::DoubleStranded(StrandPair::new("ACGT", "TGCA").unwrap())
        );
    }

    #[rstest]
    fn test_newline_pair_reverses_second_line() {
        let parsed = parse_sequence_string("ACGT\nTGCA").unwrap();
        match parsed {
            SequenceSpec::DoubleStranded(pair) => {
                assert_eq!(pair.watson(), "ACGT");
                assert_eq!(pair.crick(), "ACGT");
            }
            other => panic!("expected double strand, got {:?}", other),
        }
    }

    #[rstest]
    fn test_staggered_pair_is_accepted() {
        let parsed = parse_sequence_string("-CGT;ACGT").unwrap();
        assert!(parsed.is_double_stranded());
    }

    #[rstest]
    #[case("")]
    #[case("ACGT;")]
    #[case("AC GT")]
    #[case("ACGT;TGCA;ACGT")]
    #[case("ACGT\nTGCA\n")]
    fn test_syntax_errors(#[case] spec: &str) {
        assert!(matches!(
            parse_sequence_string(spec),
            Err(SeguidError::SyntaxError(_))
        ));
    }

    #[rstest]
    fn test_syntax_error_escapes_newlines() {
        let err = parse_sequence_string("AC\nGT\n").unwrap_err();
        assert_eq!(
            err.to_string(),
            "Syntax error in sequence string: 'AC\\nGT\\n'"
        );
    }

    #[rstest]
    fn test_length_mismatch() {
        assert_eq!(
            parse_sequence_string("ACGT;TGC"),
            Err(SeguidError::LengthMismatch {
                watson: 4,
                crick: 3
            })
        );
    }

    #[rstest]
    #[case("-CGT;ACG-", StrandEnd::Beginning)]
    #[case("ACG-;-CGT", StrandEnd::End)]
    #[case("-CGT\n-GCA", StrandEnd::Beginning)]
    fn test_stagger_conflicts(#[case] spec: &str, #[case] end: StrandEnd) {
        match parse_sequence_string(spec) {
            Err(SeguidError::StaggerConflict { end: found, .. }) => assert_eq!(found, end),
            other => panic!("expected stagger conflict, got {:?}", other),
        }
    }

    #[rstest]
    fn test_is_staggered() {
        assert!(is_staggered("-ACG", "CGTA"));
        assert!(is_staggered("ACG", "CG-"));
        assert!(!is_staggered("ACGT", "ACGT"));
    }

    #[rstest]
    fn test_strand_pair_display() {
        let pair = StrandPair::new("AAC", "GTT").unwrap();
        assert_eq!(pair.to_string(), "AAC;GTT");
        assert_eq!(pair.into_strands(), ("AAC".to_string(), "GTT".to_string()));
    }
}
