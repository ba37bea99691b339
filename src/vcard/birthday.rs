//! Birthday resolver: find the date entry tagged "birthday".

use crate::types::PersonDate;
use crate::vcard::date::to_vcard_date;

/// Scan for the first entry whose type tag equals "birthday"
/// (case-insensitive) and emit a BDAY line. First match wins: if its value
/// doesn't parse, no line is emitted — later matches are not consulted.
pub fn birthday_line(dates: &[PersonDate]) -> Option<String> {
    dates
        .iter()
        .find(|d| {
            d.date_type
                .primary()
                .is_some_and(|t| t.trim().eq_ignore_ascii_case("birthday"))
        })
        .and_then(|d| d.date_value.as_deref())
        .and_then(to_vcard_date)
        .map(|date| format!("BDAY:{}", date))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DateTypeField;

    fn date(ty: DateTypeField, value: Option<&str>) -> PersonDate {
        PersonDate {
            date_type: ty,
            date_value: value.map(String::from),
        }
    }

    #[test]
    fn test_case_insensitive_match() {
        let dates = vec![date(
            DateTypeField::One("BIRTHDAY".to_string()),
            Some("1987-03-09"),
        )];
        assert_eq!(birthday_line(&dates), Some("BDAY:19870309".to_string()));
    }

    #[test]
    fn test_array_wrapped_type() {
        let dates = vec![date(
            DateTypeField::Many(vec!["Birthday".to_string()]),
            Some("1990-01-02"),
        )];
        assert_eq!(birthday_line(&dates), Some("BDAY:19900102".to_string()));
    }

    #[test]
    fn test_first_match_wins_over_later_entries() {
        let dates = vec![
            date(DateTypeField::One("anniversary".to_string()), Some("2000-01-01")),
            date(DateTypeField::One("birthday".to_string()), Some("1987-03-09")),
            date(DateTypeField::One("birthday".to_string()), Some("1999-12-31")),
        ];
        assert_eq!(birthday_line(&dates), Some("BDAY:19870309".to_string()));
    }

    #[test]
    fn test_unparsable_value_emits_nothing() {
        let dates = vec![date(
            DateTypeField::One("birthday".to_string()),
            Some("sometime in march"),
        )];
        assert_eq!(birthday_line(&dates), None);
    }

    #[test]
    fn test_no_match_emits_nothing() {
        let dates = vec![date(
            DateTypeField::One("anniversary".to_string()),
            Some("2000-01-01"),
        )];
        assert_eq!(birthday_line(&dates), None);
        assert_eq!(birthday_line(&[]), None);
    }

    #[test]
    fn test_missing_value_emits_nothing() {
        let dates = vec![date(DateTypeField::One("birthday".to_string()), None)];
        assert_eq!(birthday_line(&dates), None);
    }
}
