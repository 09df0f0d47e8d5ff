//! Display formatting for Brazilian phone numbers: `(DD)DDDDD-DDDD`.

/// Format raw input for display as the user types.
///
/// Keeps ASCII digits only, then groups them as area code, prefix, and
/// suffix. Digits past the 11th are dropped rather than rejected, so a
/// paste of "+55 11 98765-4321 ramal 2" still yields something usable.
/// Total on any input, including empty and non-numeric strings.
pub fn format_phone(raw: &str) -> String {
    let digits: String = raw.chars().filter(char::is_ascii_digit).collect();

    match digits.len() {
        0..=2 => format!("({digits}"),
        3..=7 => format!("({}){}", &digits[..2], &digits[2..]),
        len => format!(
            "({}){}-{}",
            &digits[..2],
            &digits[2..7],
            &digits[7..len.min(11)]
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn formats_a_full_number() {
        assert_eq!(format_phone("11987654321"), "(11)98765-4321");
    }

    #[test]
    fn formats_partial_input_while_typing() {
        assert_eq!(format_phone(""), "(");
        assert_eq!(format_phone("1"), "(1");
        assert_eq!(format_phone("11"), "(11");
        assert_eq!(format_phone("119"), "(11)9");
        assert_eq!(format_phone("1198765"), "(11)98765");
        assert_eq!(format_phone("11987654"), "(11)98765-4");
    }

    #[test]
    fn strips_every_non_digit() {
        assert_eq!(format_phone("+55 (11) 98765-4321"), "(55)11987-6543");
        assert_eq!(format_phone("abc"), "(");
        assert_eq!(format_phone("tel: 119"), "(11)9");
    }

    #[test]
    fn truncates_past_eleven_digits() {
        assert_eq!(format_phone("119876543210000"), "(11)98765-4321");
    }

    #[test]
    fn idempotent_over_its_own_output() {
        for raw in ["", "1", "119", "1198765", "11987654321", "no digits here"] {
            let once = format_phone(raw);
            assert_eq!(format_phone(&once), once, "re-formatting {raw:?}");
        }
    }

    #[test]
    fn output_alphabet_is_digits_and_punctuation() {
        for raw in ["x", "!!!", "11.98765.4321", "５５unicode１１"] {
            let formatted = format_phone(raw);
            assert!(
                formatted
                    .chars()
                    .all(|c| c.is_ascii_digit() || matches!(c, '(' | ')' | '-')),
                "unexpected char in {formatted:?}"
            );
        }
    }
}
