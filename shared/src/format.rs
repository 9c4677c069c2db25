//! Input masks for Brazilian CPF numbers and phone numbers.
//!
//! Both helpers strip everything that is not an ASCII digit, cap the result
//! at 11 digits, and re-insert separators progressively so they can be applied
//! on every keystroke while the user is still typing.

/// Format a CPF as `DDD.DDD.DDD-DD`.
///
/// Partial input produces a partial pattern: `"123"` stays `"123"`,
/// `"1234"` becomes `"123.4"`. Digits past the 11th are dropped.
pub fn format_cpf(input: &str) -> String {
    let digits: String = input
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(11)
        .collect();

    let mut out = String::with_capacity(14);
    for (i, c) in digits.chars().enumerate() {
        match i {
            3 | 6 => out.push('.'),
            9 => out.push('-'),
            _ => {}
        }
        out.push(c);
    }
    out
}

/// Format a phone number as `(DD) DDDDD-DDDD`.
///
/// The area code parentheses only appear once a third digit is typed, and
/// the dash once the subscriber part exceeds five digits, so partial input
/// renders naturally. Digits past the 11th are dropped.
pub fn format_phone(input: &str) -> String {
    let digits: String = input
        .chars()
        .filter(|c| c.is_ascii_digit())
        .take(11)
        .collect();

    if digits.len() <= 2 {
        return digits;
    }

    let (area, rest) = digits.split_at(2);
    if rest.len() <= 5 {
        format!("({}) {}", area, rest)
    } else {
        let (prefix, suffix) = rest.split_at(5);
        format!("({}) {}-{}", area, prefix, suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cpf_full() {
        assert_eq!(format_cpf("12345678901"), "123.456.789-01");
    }

    #[test]
    fn cpf_partial_patterns() {
        assert_eq!(format_cpf(""), "");
        assert_eq!(format_cpf("1"), "1");
        assert_eq!(format_cpf("123"), "123");
        assert_eq!(format_cpf("1234"), "123.4");
        assert_eq!(format_cpf("123456"), "123.456");
        assert_eq!(format_cpf("1234567"), "123.456.7");
        assert_eq!(format_cpf("123456789"), "123.456.789");
        assert_eq!(format_cpf("1234567890"), "123.456.789-0");
    }

    #[test]
    fn cpf_strips_non_digits_and_truncates() {
        assert_eq!(format_cpf("123.456.789-01"), "123.456.789-01");
        assert_eq!(format_cpf("abc123def456"), "123.456");
        assert_eq!(format_cpf("123456789019999"), "123.456.789-01");
    }

    #[test]
    fn phone_full() {
        assert_eq!(format_phone("11987654321"), "(11) 98765-4321");
    }

    #[test]
    fn phone_partial_patterns() {
        assert_eq!(format_phone(""), "");
        assert_eq!(format_phone("1"), "1");
        assert_eq!(format_phone("11"), "11");
        assert_eq!(format_phone("119"), "(11) 9");
        assert_eq!(format_phone("1198765"), "(11) 98765");
        assert_eq!(format_phone("11987654"), "(11) 98765-4");
    }

    #[test]
    fn phone_strips_non_digits_and_truncates() {
        assert_eq!(format_phone("(11) 98765-4321"), "(11) 98765-4321");
        assert_eq!(format_phone("11 98765 4321 999"), "(11) 98765-4321");
    }

    #[test]
    fn phone_landline_length() {
        // 10-digit numbers still get the mobile-style split
        assert_eq!(format_phone("1187654321"), "(11) 87654-321");
    }
}
