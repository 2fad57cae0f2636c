//! Exhaustive enumeration of the AP-free colorings of the initial length.
//!
//! These "certificates" seed the depth-first extension phase: every maximal
//! AP-free coloring extends exactly one of them, so searching from each
//! certificate independently covers the whole space.

use crate::apcheck::{max_difference, ApChecker};
use crate::coloring::Coloring;
use log::debug;

/// Enumerates every AP-free coloring of length `digit_count`.
///
/// The walk starts from the coloring with digit 0 set to `color_count - 1`
/// (fixing the color of position 0 is itself a symmetry reduction) and
/// advances by increment. When a candidate contains a progression, every
/// digit after the progression's rightmost position is masked to the maximum
/// color before incrementing, skipping all colorings that share the doomed
/// prefix. The returned list is empty when no AP-free coloring of this
/// length exists.
pub fn generate_certificates(
    color_count: u8,
    sequence_length: usize,
    digit_count: usize,
) -> Vec<Coloring> {
    debug!("    generating all certificates of length {digit_count}");
    let checker = ApChecker::new(sequence_length);
    let maxd = max_difference(digit_count, sequence_length);
    let mut candidate = Coloring::new(color_count, digit_count);
    candidate.set(0, color_count - 1);

    let mut certificates = Vec::new();
    loop {
        match checker.check_any(&candidate, maxd) {
            None => certificates.push(candidate.clone()),
            Some(position) => candidate.mask_tail(position),
        }
        if !candidate.increment() {
            break;
        }
    }
    debug!(
        "    found {} certificates of length {digit_count}",
        certificates.len()
    );
    certificates
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    /// Enumerates certificates with no pruning and a naive AP test.
    fn brute_force_certificates(
        color_count: u8,
        sequence_length: usize,
        digit_count: usize,
    ) -> Vec<String> {
        let mut candidate = Coloring::new(color_count, digit_count);
        candidate.set(0, color_count - 1);
        let mut certificates = Vec::new();
        loop {
            if !contains_ap(&candidate, sequence_length) {
                certificates.push(candidate.to_string());
            }
            if !candidate.increment() {
                break;
            }
        }
        certificates
    }

    fn contains_ap(coloring: &Coloring, sequence_length: usize) -> bool {
        let n = coloring.digit_count();
        for difference in 1..n {
            for start in 0..n {
                if start + difference * (sequence_length - 1) >= n {
                    break;
                }
                let value = coloring.get(start);
                if (1..sequence_length).all(|s| coloring.get(start + s * difference) == value) {
                    return true;
                }
            }
        }
        false
    }

    fn generated(color_count: u8, sequence_length: usize, digit_count: usize) -> Vec<String> {
        generate_certificates(color_count, sequence_length, digit_count)
            .iter()
            .map(ToString::to_string)
            .collect()
    }

    #[test]
    fn known_binary_certificates_of_length_four() {
        // All 3-AP-free binary colorings of length 4 starting with 1.
        assert_eq!(
            generated(2, 3, 4),
            vec!["1001", "1010", "1011", "1100", "1101"]
        );
    }

    #[test]
    fn pruned_enumeration_matches_brute_force() {
        for (color_count, sequence_length, digit_count) in
            [(2, 3, 4), (2, 3, 6), (2, 4, 5), (2, 4, 7), (3, 3, 4), (3, 3, 5)]
        {
            assert_eq!(
                generated(color_count, sequence_length, digit_count),
                brute_force_certificates(color_count, sequence_length, digit_count),
                "mismatch for ({color_count}, {sequence_length}, {digit_count})"
            );
        }
    }

    #[test]
    fn every_certificate_starts_with_the_maximum_color() {
        for certificate in generate_certificates(3, 3, 4) {
            assert_eq!(certificate.get(0), 2);
        }
    }

    #[test]
    fn impossible_length_yields_no_certificates() {
        // Over two colors, any three digits repeat a color within distance
        // two, so no 2-AP-free coloring of length 3 exists.
        assert!(generate_certificates(2, 2, 3).is_empty());
    }
}
