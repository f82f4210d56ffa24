//! Validation of the subscription form.
//!
//! Every field is checked on its own first and the failures are accumulated, then the
//! whole-form rule (an email or a phone must be given) runs on top of the clean fields.

pub use crate::{
    error::{ErrorKind, Field, FormErrors, NON_FIELD_ERRORS, ValidationError},
    subscription::{NewSubscription, SubscriptionForm},
};

pub mod email;
mod error;
pub mod national_id;
pub mod phone;
mod subscription;
