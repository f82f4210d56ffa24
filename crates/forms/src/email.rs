use lazy_regex::{Lazy, Regex, lazy_regex};

use crate::ErrorKind;

static ADDRESS: Lazy<Regex> = lazy_regex!(r"^[^@\s]+@[^@\s]+\.[^@\s.]+$");

/// Blank input means no email was given.
pub fn clean(value: &str) -> Result<Option<String>, ErrorKind> {
    let value = value.trim();
    if value.is_empty() {
        return Ok(None);
    }

    if !ADDRESS.is_match(value) {
        return Err(ErrorKind::InvalidEmail);
    }

    Ok(Some(value.to_string()))
}

#[cfg(test)]
mod tests {
    use super::clean;
    use crate::ErrorKind;

    #[test]
    fn blank_is_absent() {
        assert_eq!(clean(""), Ok(None));
        assert_eq!(clean("   "), Ok(None));
    }

    #[test]
    fn keep_trimmed_address() {
        assert_eq!(clean(" henrique@bastos.net "), Ok(Some("henrique@bastos.net".to_string())));
    }

    #[test]
    fn reject_malformed_address() {
        assert_eq!(clean("henrique"), Err(ErrorKind::InvalidEmail));
        assert_eq!(clean("henrique@bastos"), Err(ErrorKind::InvalidEmail));
        assert_eq!(clean("a b@c.com"), Err(ErrorKind::InvalidEmail));
    }
}
