/// Mobile numbers are exactly 10 ASCII digits, no separators.
pub fn is_valid_mobile(s: &str) -> bool {
    s.len() == 10 && s.bytes().all(|b| b.is_ascii_digit())
}

/// Payment transaction IDs are exactly 12 ASCII digits.
pub fn is_valid_transaction_id(s: &str) -> bool {
    s.len() == 12 && s.bytes().all(|b| b.is_ascii_digit())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn mobile_accepts_exactly_ten_digits() {
        assert!(is_valid_mobile("1234567890"));
        assert!(is_valid_mobile("0000000000"));
    }

    #[test]
    fn mobile_rejects_wrong_lengths_and_characters() {
        assert!(!is_valid_mobile(""));
        assert!(!is_valid_mobile("123456789"));
        assert!(!is_valid_mobile("12345678901"));
        assert!(!is_valid_mobile("12345 7890"));
        assert!(!is_valid_mobile("12345678９0")); // fullwidth digit
        assert!(!is_valid_mobile("abcdefghij"));
    }

    #[test]
    fn transaction_id_accepts_exactly_twelve_digits() {
        assert!(is_valid_transaction_id("123456789012"));
    }

    #[test]
    fn transaction_id_rejects_wrong_lengths_and_characters() {
        assert!(!is_valid_transaction_id(""));
        assert!(!is_valid_transaction_id("12345678901"));
        assert!(!is_valid_transaction_id("1234567890123"));
        assert!(!is_valid_transaction_id("12345678901x"));
        assert!(!is_valid_transaction_id(" 23456789012"));
    }
}
