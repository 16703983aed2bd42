//! Canonical representatives of circular double-stranded sequences.
//!
//! Each candidate (first, second) strand pair is rotated so that the first
//! strand sits at its minimal rotation and the second strand follows along
//! antiparallel. The candidate whose `first + CONCAT_CONNECTOR + second`
//! sorts lowest is the canonical pair.

use log::debug;

use crate::consts::CONCAT_CONNECTOR;
use crate::manipulation::{lyndon_min_rotation, min_rotation_with_period, reverse, rotate};

/// Canonical (watson, crick) for a circular double-stranded sequence.
///
/// Invariant under rotating both strands together and under swapping the
/// strand labels.
pub fn circular_ds_canonical(watson: &str, crick: &str) -> (String, String) {
    select_canonical(&[(watson, crick), (crick, watson)])
}

/// Canonical (watson, crick) under the full dihedral symmetry: rotation,
/// strand swap, and reading both strands in reverse.
pub fn dihedral_ds_canonical(watson: &str, crick: &str) -> (String, String) {
    let reversed_watson = reverse(watson);
    let reversed_crick = reverse(crick);
    select_canonical(&[
        (watson, crick),
        (crick, watson),
        (&reversed_watson, &reversed_crick),
        (&reversed_crick, &reversed_watson),
    ])
}

/// Rotates `first` to its minimal rotation and `second` by the matching
/// antiparallel amount.
///
/// A periodic `first` reaches its minimum at every `offset + k * period`.
/// Those offsets rotate the partner by whole blocks of `period` symbols, so
/// the smallest partner is the minimal rotation of its block sequence.
fn rotate_pair_to_min(first: &str, second: &str) -> (String, String) {
    let n = first.chars().count();
    let (offset, period) = min_rotation_with_period(first);

    let first_min = rotate(first, offset as isize);
    let partner = rotate(second, n as isize - offset as isize);

    if period == 0 || period >= n {
        return (first_min, partner);
    }

    let symbols: Vec<char> = partner.chars().collect();
    let blocks: Vec<&[char]> = symbols.chunks(period).collect();
    let (block_offset, _) = lyndon_min_rotation(&blocks);

    (first_min, rotate(&partner, (block_offset * period) as isize))
}

fn select_canonical(candidates: &[(&str, &str)]) -> (String, String) {
    let (index, (first, second)) = candidates
        .iter()
        .map(|(first, second)| rotate_pair_to_min(first, second))
        .enumerate()
        .min_by(|(_, a), (_, b)| {
            let key_a = format!("{}{}{}", a.0, CONCAT_CONNECTOR, a.1);
            let key_b = format!("{}{}{}", b.0, CONCAT_CONNECTOR, b.1);
            key_a.cmp(&key_b)
        })
        .unwrap_or_default();

    debug!(
        "canonical pair taken from candidate {} of {}",
        index,
        candidates.len()
    );
    (first, second)
}
