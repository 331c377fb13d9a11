/// ISO/IEC 7812 check. Positions are counted from the rightmost digit,
/// starting at 0; odd positions are doubled.
pub fn luhn_valid(digits: &str) -> bool {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }

    luhn_sum(digits.bytes().rev().map(|b| b - b'0'), 0) % 10 == 0
}

/// Digit that, appended to `payload`, makes it pass [`luhn_valid`].
pub fn luhn_check_digit(payload: &str) -> Option<u8> {
    if !payload.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    // the check digit will sit at position 0, so the payload starts at 1
    let sum = luhn_sum(payload.bytes().rev().map(|b| b - b'0'), 1);
    Some(((10 - sum % 10) % 10) as u8)
}

fn luhn_sum(reversed: impl Iterator<Item = u8>, offset: usize) -> u32 {
    reversed
        .enumerate()
        .map(|(idx, digit)| {
            let digit = u32::from(digit);
            if (idx + offset) % 2 == 1 {
                let doubled = digit * 2;
                if doubled > 9 { doubled - 9 } else { doubled }
            } else {
                digit
            }
        })
        .sum()
}
