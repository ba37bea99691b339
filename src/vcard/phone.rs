/// Strip everything from a telephone number that is not an ASCII digit
/// or a `+`. No minimum length is enforced and no country code is
/// validated; callers decide what to do with an empty result (the encoder
/// drops the TEL line entirely).
///
/// Example: "06-12 345 678" → "0612345678"
pub fn normalize_phone(value: &str) -> String {
    value
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '+')
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_strips_separators() {
        assert_eq!(normalize_phone("06-12345678"), "0612345678");
        assert_eq!(normalize_phone("(020) 555 01 23"), "0205550123");
    }

    #[test]
    fn test_keeps_plus() {
        assert_eq!(normalize_phone("+31 6 1234 5678"), "+31612345678");
    }

    #[test]
    fn test_no_digits_yields_empty() {
        assert_eq!(normalize_phone("ext."), "");
        assert_eq!(normalize_phone(""), "");
    }
}
