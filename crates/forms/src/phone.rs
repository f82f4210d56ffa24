//! A phone number travels as two inputs, the area code and the subscriber number, and is
//! stored joined as `"{area_code}-{number}"`.

use crate::ErrorKind;

pub const SEPARATOR: char = '-';

/// Joins both components. Both blank means no phone was given.
pub fn compose(area_code: &str, number: &str) -> Result<Option<String>, ErrorKind> {
    let (area_code, number) = (area_code.trim(), number.trim());

    if area_code.is_empty() && number.is_empty() {
        return Ok(None);
    }
    if area_code.is_empty() {
        return Err(ErrorKind::MissingAreaCode);
    }
    if number.is_empty() {
        return Err(ErrorKind::MissingNumber);
    }
    if ![area_code, number].iter().all(|component| component.chars().all(|char| char.is_ascii_digit())) {
        return Err(ErrorKind::NotANumber);
    }

    Ok(Some(format!("{area_code}{SEPARATOR}{number}")))
}

/// Splits a stored value back into the two inputs.
pub fn decompose(value: Option<&str>) -> (String, String) {
    match value.filter(|value| !value.is_empty()) {
        Some(value) => match value.split_once(SEPARATOR) {
            Some((area_code, number)) => (area_code.to_string(), number.to_string()),
            None => (value.to_string(), String::new()),
        },
        None => (String::new(), String::new()),
    }
}

#[cfg(test)]
mod tests {
    use super::{compose, decompose};
    use crate::ErrorKind;

    #[test]
    fn compose_canonical_value() {
        assert_eq!(compose("21", "96186180"), Ok(Some("21-96186180".to_string())));
        assert_eq!(compose(" 21 ", "96186180 "), Ok(Some("21-96186180".to_string())));
    }

    #[test]
    fn compose_nothing_from_blank_components() {
        assert_eq!(compose("", ""), Ok(None));
        assert_eq!(compose(" ", ""), Ok(None));
    }

    #[test]
    fn compose_requires_both_components() {
        assert_eq!(compose("", "96186180"), Err(ErrorKind::MissingAreaCode));
        assert_eq!(compose("21", ""), Err(ErrorKind::MissingNumber));
    }

    #[test]
    fn compose_rejects_non_numeric_components() {
        assert_eq!(compose("2a", "96186180"), Err(ErrorKind::NotANumber));
        assert_eq!(compose("21", "9618-6180"), Err(ErrorKind::NotANumber));
    }

    #[test]
    fn decompose_composed_value() {
        let composed = compose("21", "96186180").unwrap();

        assert_eq!(decompose(composed.as_deref()), ("21".to_string(), "96186180".to_string()));
    }

    #[test]
    fn decompose_missing_value() {
        assert_eq!(decompose(None), (String::new(), String::new()));
        assert_eq!(decompose(Some("")), (String::new(), String::new()));
    }

    #[test]
    fn decompose_value_without_separator() {
        assert_eq!(decompose(Some("96186180")), ("96186180".to_string(), String::new()));
    }
}
