//! Digit-slice helpers backing the certificate normalization step.

use std::cmp::Ordering;

/// Shifts `src` one position toward the most significant end: the leading
/// digit is dropped and a trailing zero appended. `src` and `dest` must have
/// equal length.
#[inline]
pub fn shift_left(src: &[u8], dest: &mut [u8]) {
    let count = dest.len();
    debug_assert_eq!(src.len(), count);
    dest[..count - 1].copy_from_slice(&src[1..count]);
    dest[count - 1] = 0;
}

/// Shifts `src` one position toward the least significant end: the trailing
/// digit is dropped and a leading zero inserted. `src` and `dest` must have
/// equal length.
#[inline]
pub fn shift_right(src: &[u8], dest: &mut [u8]) {
    let count = dest.len();
    debug_assert_eq!(src.len(), count);
    dest[1..count].copy_from_slice(&src[..count - 1]);
    dest[0] = 0;
}

/// Toggles every value of a binary digit slice (0 ↔ 1).
#[inline]
pub fn complement_binary(data: &mut [u8]) {
    for value in data {
        debug_assert!(*value <= 1, "complement_binary expects binary digits");
        *value = 1 - *value;
    }
}

/// Lexicographic comparison, most significant digit first.
#[inline]
pub fn compare(a: &[u8], b: &[u8]) -> Ordering {
    a.cmp(b)
}

/// Renders a digit slice as a bare decimal string for debug logging.
pub fn render(data: &[u8]) -> String {
    data.iter().map(ToString::to_string).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn shift_left_drops_the_leading_digit() {
        let src = [1, 0, 2, 1];
        let mut dest = [9; 4];
        shift_left(&src, &mut dest);
        assert_eq!(dest, [0, 2, 1, 0]);
    }

    #[test]
    fn shift_right_drops_the_trailing_digit() {
        let src = [1, 0, 2, 1];
        let mut dest = [9; 4];
        shift_right(&src, &mut dest);
        assert_eq!(dest, [0, 1, 0, 2]);
    }

    #[test]
    fn complement_toggles_binary_digits() {
        let mut data = [1, 0, 0, 1];
        complement_binary(&mut data);
        assert_eq!(data, [0, 1, 1, 0]);
    }

    #[test]
    fn compare_is_most_significant_first() {
        assert_eq!(compare(&[1, 0, 0], &[1, 0, 0]), Ordering::Equal);
        assert_eq!(compare(&[0, 9, 9], &[1, 0, 0]), Ordering::Less);
        assert_eq!(compare(&[1, 1, 0], &[1, 0, 9]), Ordering::Greater);
    }

    #[test]
    fn render_concatenates_digits() {
        assert_eq!(render(&[1, 0, 2, 1]), "1021");
    }
}
