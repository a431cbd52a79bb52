//! Luhn checksum validation.

/// Returns true if `digits` is a non-empty run of ASCII digits that passes
/// the Luhn checksum.
///
/// Separators are not tolerated: any non-digit character makes the input
/// invalid.
pub fn is_valid(digits: &str) -> bool {
    if digits.is_empty() {
        return false;
    }

    let mut sum = 0u32;
    let mut double = false;

    for c in digits.chars().rev() {
        let Some(mut d) = c.to_digit(10) else {
            return false;
        };

        if double {
            d *= 2;
            if d > 9 {
                d -= 9;
            }
        }
        sum += d;
        double = !double;
    }

    sum % 10 == 0
}
