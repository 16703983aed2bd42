//! Alphabet membership and Watson/Crick complementarity checks.

use log::trace;

use crate::alphabet::{AlphabetTable, assert_well_formed, is_valid_char};
use crate::consts::GAP;
use crate::errors::{Result, SeguidError};

/// Validates that `seq` only uses symbols of `table`.
///
/// Every distinct offending symbol is reported, in order of first appearance.
/// The table itself must only contain characters from the global charset.
pub fn assert_in_alphabet(seq: &str, table: &AlphabetTable) -> Result<()> {
    if table.is_empty() {
        return Err(SeguidError::EmptyAlphabet);
    }

    let invalid: Vec<char> = table.keys().filter(|c| !is_valid_char(*c)).collect();
    if !invalid.is_empty() {
        return Err(SeguidError::InvalidAlphabetCharacters { symbols: invalid });
    }

    let mut unknown: Vec<char> = Vec::new();
    for symbol in seq.chars() {
        if !table.contains(symbol) && !unknown.contains(&symbol) {
            unknown.push(symbol);
        }
    }

    if !unknown.is_empty() {
        return Err(SeguidError::UnknownSymbols { symbols: unknown });
    }
    Ok(())
}

/// Validates that `watson` and `crick` form a double-stranded sequence under
/// the complementarity table described by `alphabet_spec`.
///
/// Both strands are read 5'->3', so Crick is walked backwards against Watson.
/// Positions where either strand carries a gap are not checked.
pub fn assert_complementary(watson: &str, crick: &str, alphabet_spec: &str) -> Result<()> {
    let mut table = AlphabetTable::build(alphabet_spec)?;

    if table.len() <= 1 {
        return Err(SeguidError::SingleStrandedAlphabet("values"));
    }
    if table.complements().any(str::is_empty) {
        return Err(SeguidError::SingleStrandedAlphabet("value length"));
    }

    assert_well_formed(&table)?;

    if table.ensure_self_pair(GAP) {
        trace!("added gap symbol to alphabet '{}'", alphabet_spec);
    }

    let watson_len = watson.chars().count();
    let crick_len = crick.chars().count();
    if watson_len != crick_len {
        return Err(SeguidError::LengthMismatch {
            watson: watson_len,
            crick: crick_len,
        });
    }

    assert_in_alphabet(watson, &table)?;
    assert_in_alphabet(crick, &table)?;

    for (i, (w, c)) in watson.chars().zip(crick.chars().rev()).enumerate() {
        if w == GAP || c == GAP {
            continue;
        }
        let paired = table.get(w).is_some_and(|complement| complement.contains(c));
        if !paired {
            return Err(SeguidError::NonComplementaryPair {
                watson: w,
                crick: c,
                position: i + 1,
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

    #[fixture]
    fn dna() -> AlphabetTable {
        AlphabetTable::build("{DNA}").unwrap()
    }

    #[rstest]
    fn test_sequence_in_alphabet(dna: AlphabetTable) {
        assert!(assert_in_alphabet("ACGTTGCA", &dna).is_ok());
        assert!(assert_in_alphabet("", &dna).is_ok());
    }

    #[rstest]
    fn test_all_unknown_symbols_are_reported(dna: AlphabetTable) {
        let err = assert_in_alphabet("ACGUNUacgt", &dna).unwrap_err();
        assert_eq!(
            err,
            SeguidError::UnknownSymbols {
                symbols: vec!['U', 'N', 'a', 'c', 'g', 't']
            }
        );
    }

    #[rstest]
    fn test_empty_alphabet() {
        let table = AlphabetTable::default();
        assert_eq!(
            assert_in_alphabet("ACGT", &table),
            Err(SeguidError::EmptyAlphabet)
        );
    }

    #[rstest]
    fn test_alphabet_with_invalid_characters() {
        let table = AlphabetTable::build("A,*,!").unwrap();
        assert_eq!(
            assert_in_alphabet("A", &table),
            Err(SeguidError::InvalidAlphabetCharacters {
                symbols: vec!['!', '*']
            })
        );
    }

    #[rstest]
    #[case("ACGT", "ACGT")]
    #[case("AATATGCC", "GGCATATT")]
    #[case("-TATGCC", "-GCATAC")]
    #[case("GTATGCC", "GGCATAC")]
    fn test_complementary_strands(#[case] watson: &str, #[case] crick: &str) {
        assert!(assert_complementary(watson, crick, "{DNA}").is_ok());
    }

    #[rstest]
    fn test_non_complementary_position_is_one_based() {
        let err = assert_complementary("ACGT", "ACCT", "{DNA}").unwrap_err();
        // crick read backwards is TCCA
        assert_eq!(
            err,
            SeguidError::NonComplementaryPair {
                watson: 'C',
                crick: 'C',
                position: 2
            }
        );
    }

    #[rstest]
    fn test_wobble_alphabet_accepts_gu() {
        assert!(assert_complementary("GG", "UC", "{RNA},GU").is_ok());
        assert!(assert_complementary("GG", "UC", "{RNA}").is_err());
    }

    #[rstest]
    fn test_length_mismatch() {
        assert_eq!(
            assert_complementary("ACGT", "CGT", "{DNA}"),
            Err(SeguidError::LengthMismatch {
                watson: 4,
                crick: 3
            })
        );
    }

    #[rstest]
    #[case("{protein}", "value length")]
    #[case("A", "values")]
    #[case("AA", "values")]
    fn test_single_stranded_alphabet_mistake(#[case] spec: &str, #[case] reason: &'static str) {
        assert_eq!(
            assert_complementary("AAA", "AAA", spec),
            Err(SeguidError::SingleStrandedAlphabet(reason))
        );
    }

    #[rstest]
    fn test_unknown_symbol_in_strand() {
        assert_eq!(
            assert_complementary("ACGN", "NCGT", "{DNA}"),
            Err(SeguidError::UnknownSymbols { symbols: vec!['N'] })
        );
    }
}
