//! Address mapper: structured address records onto ADR lines.
//!
//! Line shape: `ADR;TYPE=<LABEL-or-HOME>:;;street;city;state;postal;country`
//! — the post-office-box and extended-address components stay empty.

use crate::types::Address;
use crate::vcard::escape::{escape_text, param_token};

/// Map one address to an ADR line. Returns `None` when all five location
/// fields are empty (a label alone is not an address).
pub fn address_line(address: &Address) -> Option<String> {
    let street = address.street.trim();
    let city = address.city.trim();
    let state = address.state.trim();
    let postal_code = address.postal_code.trim();
    let country = address.country.trim();

    if [street, city, state, postal_code, country]
        .iter()
        .all(|f| f.is_empty())
    {
        return None;
    }

    let adr_type = address
        .address_label
        .as_deref()
        .map(param_token)
        .filter(|l| !l.is_empty())
        .unwrap_or_else(|| "HOME".to_string());

    Some(format!(
        "ADR;TYPE={}:;;{};{};{};{};{}",
        adr_type,
        escape_text(street),
        escape_text(city),
        escape_text(state),
        escape_text(postal_code),
        escape_text(country),
    ))
}

/// Map every emittable address, preserving input order.
pub fn address_lines(addresses: &[Address]) -> Vec<String> {
    addresses.iter().filter_map(address_line).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_empty_produces_no_line() {
        assert_eq!(address_line(&Address::default()), None);
    }

    #[test]
    fn test_label_only_produces_no_line() {
        let addr = Address {
            address_label: Some("Work".to_string()),
            ..Default::default()
        };
        assert_eq!(address_line(&addr), None);
    }

    #[test]
    fn test_city_only() {
        let addr = Address {
            city: "Amsterdam".to_string(),
            ..Default::default()
        };
        assert_eq!(
            address_line(&addr),
            Some("ADR;TYPE=HOME:;;;Amsterdam;;;".to_string())
        );
    }

    #[test]
    fn test_full_address_with_label() {
        let addr = Address {
            street: "Kerkstraat 1".to_string(),
            city: "Utrecht".to_string(),
            state: "UT".to_string(),
            postal_code: "3511 AB".to_string(),
            country: "Netherlands".to_string(),
            address_label: Some("Work".to_string()),
        };
        assert_eq!(
            address_line(&addr),
            Some("ADR;TYPE=WORK:;;Kerkstraat 1;Utrecht;UT;3511 AB;Netherlands".to_string())
        );
    }

    #[test]
    fn test_components_escaped_independently() {
        let addr = Address {
            street: "Main; Suite 2".to_string(),
            city: "A,B".to_string(),
            ..Default::default()
        };
        assert_eq!(
            address_line(&addr),
            Some("ADR;TYPE=HOME:;;Main\\; Suite 2;A\\,B;;;".to_string())
        );
    }

    #[test]
    fn test_lines_preserve_order_and_skip_empties() {
        let addresses = vec![
            Address {
                city: "Utrecht".to_string(),
                ..Default::default()
            },
            Address::default(),
            Address {
                city: "Leiden".to_string(),
                ..Default::default()
            },
        ];
        let lines = address_lines(&addresses);
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("Utrecht"));
        assert!(lines[1].contains("Leiden"));
    }
}
