use crate::ErrorKind;

pub const LENGTH: usize = 11;

/// The digit check runs first, so a value failing both only reports [`ErrorKind::NonDigit`].
pub fn validate(value: &str) -> Result<(), ErrorKind> {
    if !value.chars().all(|char| char.is_ascii_digit()) {
        return Err(ErrorKind::NonDigit);
    }

    if value.len() != LENGTH {
        return Err(ErrorKind::WrongLength);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::validate;
    use crate::ErrorKind;

    #[test]
    fn accept_eleven_digits() {
        assert_eq!(validate("00000000000"), Ok(()));
        assert_eq!(validate("11241574766"), Ok(()));
    }

    #[test]
    fn reject_non_digits() {
        assert_eq!(validate("ABCDE000000"), Err(ErrorKind::NonDigit));
        assert_eq!(validate("000.000.000-00"), Err(ErrorKind::NonDigit));
        assert_eq!(validate("٠٠٠٠٠٠٠٠٠٠٠"), Err(ErrorKind::NonDigit));
    }

    #[test]
    fn reject_wrong_length() {
        assert_eq!(validate("000000000012"), Err(ErrorKind::WrongLength));
        assert_eq!(validate("0000000000"), Err(ErrorKind::WrongLength));
    }

    #[test]
    fn report_non_digit_before_length() {
        assert_eq!(validate("ABC"), Err(ErrorKind::NonDigit));
    }
}
