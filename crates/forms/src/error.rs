use indexmap::IndexMap;

/// Key of the errors that belong to the form as a whole.
pub const NON_FIELD_ERRORS: &str = "__all__";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    Name,
    NationalId,
    Email,
    Phone,
}

impl Field {
    pub fn name(self) -> &'static str {
        match self {
            Self::Name => "name",
            Self::NationalId => "national_id",
            Self::Email => "email",
            Self::Phone => "phone",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ErrorKind {
    #[error("This field is required.")]
    Required,

    #[error("The national ID must contain only digits.")]
    NonDigit,

    #[error("The national ID must have 11 digits.")]
    WrongLength,

    #[error("Enter a valid email address.")]
    InvalidEmail,

    #[error("Invalid area code.")]
    MissingAreaCode,

    #[error("Invalid number.")]
    MissingNumber,

    #[error("Enter a whole number.")]
    NotANumber,

    #[error("Inform your email or phone.")]
    MissingContactMethod,
}

/// A failure of one field, or of the whole form when `field` is `None`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ValidationError {
    pub field: Option<Field>,
    pub kind: ErrorKind,
}

impl ValidationError {
    pub fn field(field: Field, kind: ErrorKind) -> Self {
        Self { field: Some(field), kind }
    }

    pub fn non_field(kind: ErrorKind) -> Self {
        Self { field: None, kind }
    }
}

#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct FormErrors {
    errors: IndexMap<Option<Field>, Vec<ErrorKind>>,
}

impl FormErrors {
    pub fn push(&mut self, error: ValidationError) {
        self.errors.entry(error.field).or_default().push(error.kind);
    }

    pub fn get(&self, field: Field) -> &[ErrorKind] {
        self.errors.get(&Some(field)).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn non_field(&self) -> &[ErrorKind] {
        self.errors.get(&None).map(Vec::as_slice).unwrap_or_default()
    }

    pub fn is_empty(&self) -> bool {
        self.errors.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Option<Field>, &[ErrorKind])> {
        self.errors.iter().map(|(field, kinds)| (*field, kinds.as_slice()))
    }

    /// Human-readable messages keyed by field name, or [`NON_FIELD_ERRORS`] for the whole form.
    pub fn messages(&self) -> IndexMap<&'static str, Vec<String>> {
        self.iter()
            .map(|(field, kinds)| {
                let key = field.map_or(NON_FIELD_ERRORS, Field::name);
                (key, kinds.iter().map(ToString::to_string).collect())
            })
            .collect()
    }
}

impl FromIterator<ValidationError> for FormErrors {
    fn from_iter<T: IntoIterator<Item = ValidationError>>(iter: T) -> Self {
        let mut errors = Self::default();
        for error in iter {
            errors.push(error);
        }
        errors
    }
}
