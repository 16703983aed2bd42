use std::collections::BTreeMap;
use std::fmt::Display;
use std::str::FromStr;

use crate::errors::{Result, SeguidError};

/// Named alphabets that may appear inside an alphabet specification.
///
/// Tokens are substituted textually, in this order, before the specification
/// is parsed.
pub const PREDEFINED_ALPHABETS: [(&str, &str); 7] = [
    ("{DNA}", "GC,AT"),
    ("{RNA}", "GC,AU"),
    ("{DNA-extended}", "GC,AT,BV,DH,KM,SS,RY,WW,NN"),
    ("{RNA-extended}", "GC,AU,BV,DH,KM,SS,RY,WW,NN"),
    ("{protein}", "A,C,D,E,F,G,H,I,K,L,M,N,P,Q,R,S,T,V,W,Y,O,U"),
    (
        "{protein-extended}",
        "A,C,D,E,F,G,H,I,K,L,M,N,P,Q,R,S,T,V,W,Y,O,U,B,J,X,Z",
    ),
    ("{proteinV1}", "A,C,D,E,F,G,H,I,K,L,M,N,P,Q,R,S,T,V,W,Y"),
];

/// A lookup table of the characters any alphabet may be built from:
/// A-Z, a-z, 0-9, the gap `-`, and the structural separators `\n` and `;`.
const VALID_CHARS: [bool; 256] = {
    let mut arr = [false; 256];
    let mut i = 0;
    while i < 26 {
        arr[b'A' as usize + i] = true;
        arr[b'a' as usize + i] = true;
        i += 1;
    }
    let mut d = 0;
    while d < 10 {
        arr[b'0' as usize + d] = true;
        d += 1;
    }
    arr[b'-' as usize] = true;
    arr[b'\n' as usize] = true;
    arr[b';' as usize] = true;
    arr
};

/// Returns true if `symbol` belongs to the global set of alphabet characters.
pub fn is_valid_char(symbol: char) -> bool {
    symbol.is_ascii() && VALID_CHARS[symbol as usize]
}

/// Replaces every predefined token in `spec` with its expansion.
pub fn expand_tokens(spec: &str) -> String {
    PREDEFINED_ALPHABETS
        .iter()
        .fold(spec.to_string(), |acc, (token, expansion)| {
            acc.replace(token, expansion)
        })
}

/// Maps each symbol of an alphabet to the symbols it may pair with on the
/// opposite strand.
///
/// Single-stranded alphabets (e.g. protein) map every symbol to an empty
/// complement set. Pairs are registered in both directions, so the table is
/// symmetric by construction.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AlphabetTable {
    complements: BTreeMap<char, String>,
}

impl AlphabetTable {
    /// Builds a table from an alphabet specification such as `{DNA}`,
    /// `GC,AT,GT` or `A,C,D,E`.
    ///
    /// Every comma-separated component must have the same width, either one
    /// symbol (no complement) or two symbols (a complementary pair).
    pub fn build(spec: &str) -> Result<Self> {
        let expanded = expand_tokens(spec);
        let mut complements: BTreeMap<char, String> = BTreeMap::new();
        let mut expected_width: Option<usize> = None;

        for component in expanded.split(',') {
            let symbols: Vec<char> = component.chars().collect();

            match expected_width {
                None => expected_width = Some(symbols.len()),
                Some(width) if width != symbols.len() => {
                    return Err(SeguidError::InvalidAlphabetSpec(format!(
                        "inconsistent specification length for '{}'",
                        component
                    )));
                }
                _ => {}
            }

            match symbols.as_slice() {
                [symbol] => {
                    complements.insert(*symbol, String::new());
                }
                [first, second] => {
                    complements.entry(*first).or_default().push(*second);
                    complements.entry(*second).or_default().push(*first);
                }
                _ => {
                    return Err(SeguidError::InvalidAlphabetSpec(format!(
                        "unknown alphabet specification '{}'",
                        component
                    )));
                }
            }
        }

        Ok(AlphabetTable { complements })
    }

    /// The complement set of `symbol`, if it belongs to the alphabet.
    pub fn get(&self, symbol: char) -> Option<&str> {
        self.complements.get(&symbol).map(String::as_str)
    }

    pub fn contains(&self, symbol: char) -> bool {
        self.complements.contains_key(&symbol)
    }

    pub fn keys(&self) -> impl Iterator<Item = char> + '_ {
        self.complements.keys().copied()
    }

    pub fn complements(&self) -> impl Iterator<Item = &str> + '_ {
        self.complements.values().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.complements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.complements.is_empty()
    }

    /// Registers `symbol` as pairing with itself unless it is already known.
    ///
    /// Returns `true` if the symbol was added.
    pub fn ensure_self_pair(&mut self, symbol: char) -> bool {
        if self.complements.contains_key(&symbol) {
            return false;
        }
        self.complements.insert(symbol, symbol.to_string());
        true
    }
}

impl FromStr for AlphabetTable {
    type Err = SeguidError;

    fn from_str(s: &str) -> Result<Self> {
        AlphabetTable::build(s)
    }
}

impl Display for AlphabetTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let entries: Vec<String> = self
            .complements
            .iter()
            .map(|(symbol, complement)| format!("{}:{}", symbol, complement))
            .collect();
        write!(f, "{}", entries.join(","))
    }
}

/// Checks that every symbol of `table` appears in some complement set.
///
/// A table built by [`AlphabetTable::build`] from pairs always passes; a
/// single-stranded table never does.
pub fn assert_well_formed(table: &AlphabetTable) -> Result<()> {
    let unknown: Vec<char> = table
        .keys()
        .filter(|symbol| !table.complements().any(|c| c.contains(*symbol)))
        .collect();

    if !unknown.is_empty() {
        return Err(SeguidError::MalformedAlphabet { symbols: unknown });
    }
    Ok(())
}
