use indexmap::IndexMap;

use crate::{ErrorKind, Field, NON_FIELD_ERRORS, NewSubscription, SubscriptionForm};

fn make_form(update: impl FnOnce(&mut SubscriptionForm)) -> SubscriptionForm {
    let mut form = SubscriptionForm {
        name: "Henrique Bastos".to_string(),
        national_id: "00000000000".to_string(),
        email: "henrique@bastos.net".to_string(),
        phone_0: "21".to_string(),
        phone_1: "96186180".to_string(),
    };
    update(&mut form);
    form
}

fn messages(key: &'static str, messages: &[&str]) -> IndexMap<&'static str, Vec<String>> {
    IndexMap::from([(key, messages.iter().map(ToString::to_string).collect())])
}

#[test]
fn valid_form() {
    let subscription = make_form(|_| {}).validate().unwrap();

    assert_eq!(
        subscription,
        NewSubscription {
            name: "Henrique Bastos".to_string(),
            national_id: "00000000000".to_string(),
            email: Some("henrique@bastos.net".to_string()),
            phone: Some("21-96186180".to_string()),
        }
    );
}

#[test]
fn national_id_has_only_digits() {
    let errors = make_form(|form| form.national_id = "ABCDE000000".to_string()).validate().unwrap_err();

    assert_eq!(errors.get(Field::NationalId), [ErrorKind::NonDigit]);
    assert_eq!(errors.messages(), messages("national_id", &["The national ID must contain only digits."]));
}

#[test]
fn national_id_has_11_digits() {
    let errors = make_form(|form| form.national_id = "000000000012".to_string()).validate().unwrap_err();

    assert_eq!(errors.messages(), messages("national_id", &["The national ID must have 11 digits."]));
}

#[test]
fn national_id_is_required() {
    let errors = make_form(|form| form.national_id.clear()).validate().unwrap_err();

    assert_eq!(errors.get(Field::NationalId), [ErrorKind::Required]);
}

#[test]
fn must_inform_email_or_phone() {
    let errors = make_form(|form| {
        form.email.clear();
        form.phone_0.clear();
        form.phone_1.clear();
    })
    .validate()
    .unwrap_err();

    assert_eq!(errors.non_field(), [ErrorKind::MissingContactMethod]);
    assert_eq!(errors.messages(), messages(NON_FIELD_ERRORS, &["Inform your email or phone."]));
}

#[test]
fn email_alone_is_enough() {
    let subscription = make_form(|form| {
        form.email = "a@b.com".to_string();
        form.phone_0.clear();
        form.phone_1.clear();
    })
    .validate()
    .unwrap();

    assert_eq!(subscription.email.as_deref(), Some("a@b.com"));
    assert_eq!(subscription.phone, None);
}

#[test]
fn phone_alone_is_enough() {
    let subscription = make_form(|form| form.email.clear()).validate().unwrap();

    assert_eq!(subscription.email, None);
    assert_eq!(subscription.phone.as_deref(), Some("21-96186180"));
}

#[test]
fn phone_requires_area_code() {
    let errors = make_form(|form| form.phone_0.clear()).validate().unwrap_err();

    assert_eq!(errors.messages(), messages("phone", &["Invalid area code."]));
}

#[test]
fn phone_requires_number() {
    let errors = make_form(|form| form.phone_1.clear()).validate().unwrap_err();

    assert_eq!(errors.get(Field::Phone), [ErrorKind::MissingNumber]);
}

#[test]
fn skip_contact_check_when_a_contact_field_is_invalid() {
    let errors = make_form(|form| {
        form.email.clear();
        form.phone_0.clear();
    })
    .validate()
    .unwrap_err();

    assert_eq!(errors.get(Field::Phone), [ErrorKind::MissingAreaCode]);
    assert!(errors.non_field().is_empty());
}

#[test]
fn accumulate_errors_across_fields() {
    let errors = make_form(|form| {
        form.name = "  ".to_string();
        form.national_id = "12AB".to_string();
        form.email = "not an email".to_string();
        form.phone_1.clear();
    })
    .validate()
    .unwrap_err();

    assert_eq!(
        errors.iter().collect::<Vec<_>>(),
        [
            (Some(Field::Name), &[ErrorKind::Required][..]),
            (Some(Field::NationalId), &[ErrorKind::NonDigit][..]),
            (Some(Field::Email), &[ErrorKind::InvalidEmail][..]),
            (Some(Field::Phone), &[ErrorKind::MissingNumber][..]),
        ]
    );
}

#[test]
fn deserialize_missing_fields_as_blank() {
    let form = serde_json::from_str::<SubscriptionForm>(r#"{"name": "Henrique Bastos"}"#).unwrap();

    assert_eq!(form.name, "Henrique Bastos");
    assert!(form.national_id.is_empty());
    assert!(form.phone_0.is_empty());
}
