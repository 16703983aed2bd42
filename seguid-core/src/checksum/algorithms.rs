//! The hash-and-encode pipeline shared by every checksum kind.

use log::trace;
use sha1::{Digest, Sha1};

use crate::alphabet::AlphabetTable;
use crate::consts::CHECKSUM_LENGTH;
use crate::errors::{InternalError, Result, SeguidError};
use crate::validator::assert_in_alphabet;

/// The 20 canonical amino acids accepted by the legacy SEGUID v1 checksum.
const PROTEIN_V1_SYMBOLS: &str = "ACDEFGHIKLMNPQRSTVWY";

/// Computes the SHA-1 digest of a string's UTF-8 bytes.
pub fn sha1_digest(string: &str) -> [u8; 20] {
    let mut hasher = Sha1::new();
    for s in string.as_bytes().chunks(800) {
        hasher.update(s);
    }
    let mut digest = [0u8; 20];
    digest.copy_from_slice(&hasher.finalize());
    digest
}

/// Base64-encodes a SHA-1 digest without padding.
///
/// With `url_safe` the URL alphabet is used (`-` and `_` in place of `+` and
/// `/`). The encoding must be exactly 27 characters long; anything else is
/// an internal error.
pub fn encode_digest(digest: &[u8], url_safe: bool) -> Result<String> {
    let mut encoded = base64_url::encode(digest);
    if !url_safe {
        encoded = encoded.replace('-', "+").replace('_', "/");
    }

    if encoded.len() != CHECKSUM_LENGTH {
        return Err(InternalError::DigestLength(encoded.len()).into());
    }
    if !encoded
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '/' | '-' | '_'))
    {
        return Err(InternalError::DigestCharacters(encoded).into());
    }

    Ok(encoded)
}

/// Validates `seq` against `alphabet` and returns its encoded SHA-1 digest.
pub fn generate_seguid(seq: &str, alphabet: &str, url_safe: bool) -> Result<String> {
    if seq.is_empty() {
        return Err(SeguidError::EmptySequence("A sequence"));
    }

    let table = AlphabetTable::build(alphabet)?;
    assert_in_alphabet(seq, &table)?;

    trace!("digesting {} symbols (url_safe={})", seq.len(), url_safe);
    encode_digest(&sha1_digest(seq), url_safe)
}

/// Legacy protein checksum.
///
/// Unlike [`generate_seguid`], unknown residues are silently dropped: the
/// sequence is uppercased and reduced to the 20 canonical amino acids
/// before digesting.
pub fn generate_seguid_v1(seq: &str, alphabet: &str, url_safe: bool) -> Result<String> {
    if seq.is_empty() {
        return Err(SeguidError::EmptySequence("A sequence"));
    }

    let cleaned: String = seq
        .chars()
        .map(|c| c.to_ascii_uppercase())
        .filter(|c| PROTEIN_V1_SYMBOLS.contains(*c))
        .collect();

    if cleaned.is_empty() {
        return Err(SeguidError::EmptySequence("A protein sequence"));
    }

    generate_seguid(&cleaned, alphabet, url_safe)
}
