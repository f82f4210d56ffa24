use serde::Deserialize;

use crate::{ErrorKind, Field, FormErrors, ValidationError, email, national_id, phone};

/// Raw values as submitted. `phone_0` is the area code and `phone_1` the subscriber number.
#[derive(Debug, Default, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SubscriptionForm {
    pub name: String,
    pub national_id: String,
    pub email: String,
    pub phone_0: String,
    pub phone_1: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewSubscription {
    pub name: String,
    pub national_id: String,
    pub email: Option<String>,
    pub phone: Option<String>,
}

impl SubscriptionForm {
    pub fn validate(&self) -> Result<NewSubscription, FormErrors> {
        let mut errors = Vec::new();

        let name = check(&mut errors, Field::Name, clean_name(&self.name));
        let national_id = check(&mut errors, Field::NationalId, clean_national_id(&self.national_id));
        let email = check(&mut errors, Field::Email, email::clean(&self.email));
        let phone = check(&mut errors, Field::Phone, phone::compose(&self.phone_0, &self.phone_1));

        // Only decidable once both contact fields came out clean.
        if let (Some(None), Some(None)) = (&email, &phone) {
            errors.push(ValidationError::non_field(ErrorKind::MissingContactMethod));
        }

        match (name, national_id, email, phone) {
            (Some(name), Some(national_id), Some(email), Some(phone)) if errors.is_empty() => Ok(NewSubscription {
                name,
                national_id,
                email,
                phone,
            }),
            _ => Err(errors.into_iter().collect()),
        }
    }
}

fn check<T>(errors: &mut Vec<ValidationError>, field: Field, result: Result<T, ErrorKind>) -> Option<T> {
    result
        .map_err(|kind| errors.push(ValidationError::field(field, kind)))
        .ok()
}

fn clean_name(value: &str) -> Result<String, ErrorKind> {
    match value.trim() {
        "" => Err(ErrorKind::Required),
        name => Ok(name.to_string()),
    }
}

fn clean_national_id(value: &str) -> Result<String, ErrorKind> {
    if value.is_empty() {
        return Err(ErrorKind::Required);
    }

    national_id::validate(value).map(|()| value.to_string())
}

#[cfg(test)]
mod tests;
