//! Symmetry-based deduplication of certificates.
//!
//! Shifting a coloring one position toward the most significant end (and,
//! for two colors, swapping the color classes) maps the search tree rooted
//! at one certificate onto the tree rooted at another. Keeping only the
//! lexicographically smaller member of each such pair roughly halves the
//! number of independent searches without changing the final bound.

use crate::coloring::Coloring;
use crate::digits;
use log::debug;
use std::cmp::Ordering;

/// Filters a certificate list down to canonical representatives.
///
/// A certificate is kept iff its digit sequence is lexicographically ≤ its
/// reflection: the sequence shifted left by one (dropping the leading digit,
/// appending a trailing zero), complemented when the shifted leading digit is
/// zero in the two-color case. With more than two colors a zero shifted
/// leading digit keeps the certificate unconditionally; no canonical
/// reduction is attempted there, which widens the retained set but never
/// loses coverage.
pub fn retain_canonical(certificates: Vec<Coloring>, digit_count: usize) -> Vec<Coloring> {
    let before = certificates.len();
    let mut reflection = vec![0u8; digit_count];
    let kept: Vec<Coloring> = certificates
        .into_iter()
        .filter(|certificate| {
            let keep = is_canonical(certificate, &mut reflection);
            if !keep {
                debug!(
                    "    dropping symmetric certificate {certificate} (reflection {})",
                    digits::render(&reflection)
                );
            }
            keep
        })
        .collect();
    debug!("    normalized {before} certificates to {}", kept.len());
    kept
}

fn is_canonical(certificate: &Coloring, reflection: &mut [u8]) -> bool {
    digits::shift_left(certificate.digits(), reflection);
    if reflection[0] == 0 {
        if certificate.color_count() == 2 {
            digits::complement_binary(reflection);
        } else {
            return true;
        }
    }
    digits::compare(certificate.digits(), reflection) != Ordering::Greater
}

// ============================================================================
// Tests
// ============================================================================
