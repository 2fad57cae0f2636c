//! Monochromatic arithmetic-progression detection.
//!
//! Both primitives are parameterized by the largest common difference `maxd`
//! for which a progression of the required length still fits inside the
//! coloring, and both stop at the first progression found.

use crate::coloring::Coloring;

/// Largest common difference for which `sequence_length` positions in
/// arithmetic progression fit inside `digit_count` digits.
#[inline]
pub fn max_difference(digit_count: usize, sequence_length: usize) -> usize {
    (digit_count - 1) / (sequence_length - 1)
}

/// Detects monochromatic arithmetic progressions of a fixed length.
#[derive(Clone, Copy, Debug)]
pub struct ApChecker {
    sequence_length: usize,
}

impl ApChecker {
    /// Creates a checker for progressions of `sequence_length` positions.
    pub fn new(sequence_length: usize) -> Self {
        debug_assert!(sequence_length >= 2);
        Self { sequence_length }
    }

    /// Checks whether the frontier digit completes a progression.
    ///
    /// Only progressions ending at the frontier are scanned: during
    /// incremental extension the newly placed digit is the only one that can
    /// complete a new progression, so a backward scan anchored there suffices.
    /// Returns the frontier position when a progression is found.
    #[inline]
    pub fn check_frontier(&self, coloring: &Coloring, maxd: usize) -> Option<usize> {
        let anchor = coloring.digit_count() - 1;
        let value = coloring.last();
        for difference in 1..=maxd {
            if self.scan_backward(coloring, anchor, difference, value) {
                return Some(anchor);
            }
        }
        None
    }

    /// Scans the whole coloring for a progression anywhere.
    ///
    /// Returns the rightmost position of the first progression found. Used
    /// only during full enumeration, where any position can be the culprit.
    pub fn check_any(&self, coloring: &Coloring, maxd: usize) -> Option<usize> {
        let digit_count = coloring.digit_count();
        let mut upper_bound = digit_count;
        for difference in 1..=maxd {
            // Start positions with room for the whole progression:
            // a + difference * (sequence_length - 1) < digit_count.
            upper_bound -= self.sequence_length - 1;
            for start in 0..upper_bound {
                let value = coloring.get(start);
                if let Some(end) = self.scan_forward(coloring, start, difference, value) {
                    return Some(end);
                }
            }
        }
        None
    }

    /// Walks backward from `position` in steps of `difference`, reporting
    /// whether all `sequence_length` digits visited equal `value`.
    #[inline]
    fn scan_backward(
        &self,
        coloring: &Coloring,
        position: usize,
        difference: usize,
        value: u8,
    ) -> bool {
        let mut pos = position;
        for _ in 1..self.sequence_length {
            pos -= difference;
            if coloring.get(pos) != value {
                return false;
            }
        }
        true
    }

    /// Walks forward from `position` in steps of `difference`; if all digits
    /// visited equal `value`, returns the final (rightmost) position.
    #[inline]
    fn scan_forward(
        &self,
        coloring: &Coloring,
        position: usize,
        difference: usize,
        value: u8,
    ) -> Option<usize> {
        let mut pos = position;
        for _ in 1..self.sequence_length {
            pos += difference;
            if coloring.get(pos) != value {
                return None;
            }
        }
        Some(pos)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;
    use rand::SeedableRng;
    use rand_xorshift::XorShiftRng;

    /// Naive reference detector: first progression in (difference, start)
    /// order, as `(start, difference, end)`.
    fn brute_force_ap(coloring: &Coloring, sequence_length: usize) -> Option<(usize, usize, usize)> {
        let n = coloring.digit_count();
        for difference in 1..n {
            for start in 0..n {
                let end = start + difference * (sequence_length - 1);
                if end >= n {
                    break;
                }
                let value = coloring.get(start);
                if (1..sequence_length).all(|s| coloring.get(start + s * difference) == value) {
                    return Some((start, difference, end));
                }
            }
        }
        None
    }

    fn random_coloring(rng: &mut XorShiftRng, color_count: u8, digit_count: usize) -> Coloring {
        let mut coloring = Coloring::new(color_count, digit_count);
        for position in 0..digit_count {
            coloring.set(position, rng.random_range(0..color_count));
        }
        coloring
    }

    #[test]
    fn check_any_finds_a_known_progression() {
        let checker = ApChecker::new(3);
        // 0 at positions 1, 3, 5.
        let coloring = Coloring::parse(2, "1010101").unwrap();
        let maxd = max_difference(7, 3);
        let found = checker.check_any(&coloring, maxd);
        assert!(found.is_some());
    }

    #[test]
    fn check_any_reports_none_on_an_ap_free_coloring() {
        let checker = ApChecker::new(3);
        // 11001100... patterns of length 8 still contain 3-APs; use a known
        // AP-free string instead: 11001 has none of length 3.
        let coloring = Coloring::parse(2, "11001").unwrap();
        let maxd = max_difference(5, 3);
        assert_eq!(checker.check_any(&coloring, maxd), None);
    }

    #[test]
    fn check_any_agrees_with_brute_force_on_random_colorings() {
        let mut rng = XorShiftRng::seed_from_u64(0xDB0551E);
        for sequence_length in [3usize, 4, 5] {
            let checker = ApChecker::new(sequence_length);
            for _ in 0..500 {
                let digit_count = rng.random_range(sequence_length..20);
                let color_count = rng.random_range(2..5);
                let coloring = random_coloring(&mut rng, color_count, digit_count);
                let maxd = max_difference(digit_count, sequence_length);
                let fast = checker.check_any(&coloring, maxd);
                let naive = brute_force_ap(&coloring, sequence_length);
                assert_eq!(
                    fast.is_some(),
                    naive.is_some(),
                    "disagreement on {coloring} (length {sequence_length})"
                );
            }
        }
    }

    #[test]
    fn check_any_reports_a_genuine_progression_end() {
        let mut rng = XorShiftRng::seed_from_u64(0xA11CE);
        let sequence_length = 3;
        let checker = ApChecker::new(sequence_length);
        for _ in 0..500 {
            let digit_count = rng.random_range(sequence_length..16);
            let coloring = random_coloring(&mut rng, 2, digit_count);
            let maxd = max_difference(digit_count, sequence_length);
            if let Some(end) = checker.check_any(&coloring, maxd) {
                // Some difference must place a monochromatic progression
                // ending exactly at the reported position.
                let witnessed = (1..=maxd).any(|d| {
                    let span = d * (sequence_length - 1);
                    span <= end && {
                        let start = end - span;
                        let value = coloring.get(start);
                        (0..sequence_length).all(|s| coloring.get(start + s * d) == value)
                    }
                });
                assert!(witnessed, "reported end {end} of {coloring} is not an AP end");
            }
        }
    }

    #[test]
    fn check_frontier_matches_progressions_anchored_at_the_last_digit() {
        let mut rng = XorShiftRng::seed_from_u64(0xF0011E);
        for sequence_length in [3usize, 4] {
            let checker = ApChecker::new(sequence_length);
            for _ in 0..500 {
                let digit_count = rng.random_range(sequence_length..18);
                let coloring = random_coloring(&mut rng, 2, digit_count);
                let maxd = max_difference(digit_count, sequence_length);
                let anchor = digit_count - 1;
                let value = coloring.last();
                let expected = (1..=maxd).any(|d| {
                    (1..sequence_length).all(|s| coloring.get(anchor - s * d) == value)
                });
                let found = checker.check_frontier(&coloring, maxd);
                assert_eq!(found.is_some(), expected, "disagreement on {coloring}");
                if let Some(position) = found {
                    assert_eq!(position, anchor);
                }
            }
        }
    }

    #[test]
    fn max_difference_bounds_the_fit() {
        assert_eq!(max_difference(9, 3), 4);
        assert_eq!(max_difference(8, 3), 3);
        assert_eq!(max_difference(5, 5), 1);
        assert_eq!(max_difference(4, 5), 0);
        assert_eq!(max_difference(3, 2), 2);
    }
}
