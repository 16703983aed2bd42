//! String transformations used to bring sequences into canonical form.
//!
//! All functions work on `char`s, so they never split a multi-byte symbol
//! even when handed input that has not been validated yet.

use crate::errors::{InternalError, Result, SeguidError};

/// Rotates `seq` to the left by `amount` symbols.
///
/// `amount` may be negative or larger than the sequence; it is taken modulo
/// the sequence length. An empty sequence is returned unchanged.
pub fn rotate(seq: &str, amount: isize) -> String {
    let symbols: Vec<char> = seq.chars().collect();
    if symbols.is_empty() {
        return String::new();
    }
    let amount = amount.rem_euclid(symbols.len() as isize) as usize;
    symbols[amount..]
        .iter()
        .chain(symbols[..amount].iter())
        .collect()
}

pub fn reverse(seq: &str) -> String {
    seq.chars().rev().collect()
}

/// Returns the smallest offset at which the rotation of `seq` is
/// lexicographically minimal, comparing symbols by code point.
///
/// Periodic sequences have several minimal offsets; the first is returned.
pub fn min_rotation(seq: &str) -> usize {
    min_rotation_with_period(seq).0
}

/// Like [`min_rotation`], but also returns the smallest period of the
/// minimal rotation. Every `offset + k * period` yields the same string.
pub fn min_rotation_with_period(seq: &str) -> (usize, usize) {
    let symbols: Vec<char> = seq.chars().collect();
    lyndon_min_rotation(&symbols)
}

/// Minimal rotation `(offset, period)` of any ordered sequence, counted in
/// elements of `symbols`. Empty input gives `(0, 0)`.
///
/// Runs in linear time by factoring the doubled sequence into Lyndon words
/// and stopping once a run of identical factors covers the whole sequence.
/// Elements are compared with `Ord`, so equal-length slices (blocks of a
/// longer string) can be rotated as units.
pub fn lyndon_min_rotation<T: Ord>(symbols: &[T]) -> (usize, usize) {
    let n = symbols.len();
    if n == 0 {
        return (0, 0);
    }

    let doubled: Vec<&T> = symbols.iter().chain(symbols.iter()).collect();
    let total = doubled.len();

    let mut start = 0;
    let mut k = 0;
    let mut repeats = 0;
    let mut previous: &[&T] = &[];

    while k < total {
        let mut i = k;
        let mut j = k + 1;
        while j < total && doubled[i] <= doubled[j] {
            i = if doubled[i] == doubled[j] { i + 1 } else { k };
            j += 1;
        }

        while k <= i {
            k += j - i;
            let factor = &doubled[start..k];
            start = k;

            repeats = if factor == previous { repeats + 1 } else { 1 };
            previous = factor;

            if factor.len() * repeats == n {
                // the rotation is factor^repeats and a Lyndon factor is primitive
                let period = factor.len();
                let offset = (k as isize - i as isize).rem_euclid(period as isize) as usize;
                return (offset, period);
            }
        }
    }

    (0, n)
}

/// Rotates `seq` to its lexicographically minimal rotation.
pub fn rotate_to_min(seq: &str) -> Result<String> {
    // uppercase letters must sort before lowercase ones
    if min_rotation("Aa") != 0 {
        return Err(InternalError::AsciiOrdering.into());
    }
    Ok(rotate(seq, min_rotation(seq) as isize))
}

/// Reverse complement of a DNA sequence.
///
/// The input is uppercased and every symbol other than A, C, G and T is
/// dropped before complementing.
pub fn reverse_complement_dna(seq: &str) -> Result<String> {
    let cleaned: Vec<char> = seq
        .chars()
        .map(|c| c.to_ascii_uppercase())
        .filter(|c| matches!(c, 'A' | 'C' | 'G' | 'T'))
        .collect();

    if cleaned.is_empty() {
        return Err(SeguidError::EmptySequence("DNA sequence"));
    }

    Ok(cleaned
        .iter()
        .rev()
        .map(|c| match c {
            'A' => 'T',
            'T' => 'A',
            'G' => 'C',
            _ => 'G',
        })
        .collect())
}
