use std::sync::Arc;

use axum::{
    Form,
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
};
use database::{CreateError, subscription::Subscription};
use forms::{Field, FormErrors, SubscriptionForm, phone};
use time::format_description::well_known::Rfc2822;

use super::{
    AppState,
    error::{AppError, record_id},
    html,
};
use crate::{notification, store::Store};

const DUPLICATE_NATIONAL_ID: &str = "A subscription with this national ID already exists.";

pub(crate) async fn new() -> Html<String> {
    Html(render_form(&SubscriptionForm::default(), &FormErrors::default(), None))
}

pub(crate) async fn create<S: Store>(State(state): State<Arc<AppState<S>>>, Form(form): Form<SubscriptionForm>) -> Result<Response, AppError> {
    let new_subscription = match form.validate() {
        Ok(new_subscription) => new_subscription,
        Err(errors) => {
            tracing::debug!("rejected subscription: {:?}", errors.messages());
            return Ok(Html(render_form(&form, &errors, None)).into_response());
        },
    };

    let subscription = match state.store.create_subscription(new_subscription).await {
        Ok(subscription) => subscription,
        Err(CreateError::Conflict { field }) => {
            tracing::info!("rejected subscription with duplicate {field}");
            let page = render_form(&form, &FormErrors::default(), Some(DUPLICATE_NATIONAL_ID));
            return Ok((StatusCode::CONFLICT, Html(page)).into_response());
        },
        Err(CreateError::Database(err)) => return Err(AppError::Internal(err.into())),
    };

    tracing::info!("created subscription {}", subscription.id);

    notification::send_confirmation(state.mailer.as_ref(), &state.from_email, &subscription);

    Ok(Redirect::to(&format!("/subscribe/{}", subscription.id)).into_response())
}

pub(crate) async fn detail<S: Store>(State(state): State<Arc<AppState<S>>>, Path(id): Path<String>) -> Result<Html<String>, AppError> {
    let subscription = state.store.subscription(record_id(&id)?).await?.ok_or(AppError::NotFound)?;

    Ok(Html(render_detail(&subscription)))
}

fn render_errors(kinds: &[forms::ErrorKind]) -> String {
    match kinds {
        [] => String::new(),
        kinds => {
            let items = kinds
                .iter()
                .map(|kind| format!("<li>{}</li>", html::escape(&kind.to_string())))
                .collect::<Vec<_>>()
                .join("");
            format!(r#"<ul class="errorlist">{items}</ul>"#)
        },
    }
}

fn render_input(name: &str, value: &str) -> String {
    format!(
        r#"<input type="text" name="{name}" id="id_{name}" value="{value}">"#,
        value = html::escape(value),
    )
}

fn render_form(form: &SubscriptionForm, errors: &FormErrors, alert: Option<&str>) -> String {
    let alert = alert
        .map(|alert| format!(r#"<p class="alert">{}</p>"#, html::escape(alert)))
        .unwrap_or_default();

    let content = format!(
        r#"<h1>Subscribe</h1>
{alert}
<form action="/subscribe" method="post">
{non_field_errors}
<p><label for="id_name">Name</label>
{name_errors}
{name}</p>
<p><label for="id_national_id">National ID</label>
{national_id_errors}
{national_id}</p>
<p><label for="id_email">Email</label>
{email_errors}
{email}</p>
<p><label for="id_phone_0">Phone</label>
{phone_errors}
{phone_0} {phone_1}</p>
<input type="submit" value="Subscribe">
</form>"#,
        non_field_errors = render_errors(errors.non_field()),
        name_errors = render_errors(errors.get(Field::Name)),
        name = render_input("name", &form.name),
        national_id_errors = render_errors(errors.get(Field::NationalId)),
        national_id = render_input("national_id", &form.national_id),
        email_errors = render_errors(errors.get(Field::Email)),
        email = render_input("email", &form.email),
        phone_errors = render_errors(errors.get(Field::Phone)),
        phone_0 = render_input("phone_0", &form.phone_0),
        phone_1 = render_input("phone_1", &form.phone_1),
    );

    html::page("Subscribe", &content)
}

fn render_detail(subscription: &Subscription) -> String {
    let phone = match phone::decompose(subscription.phone.as_deref()) {
        (area_code, number) if !area_code.is_empty() => format!("({area_code}) {number}"),
        _ => String::new(),
    };
    let created_at = subscription.created_at.format(&Rfc2822).unwrap_or_default();
    let notice = match subscription.email {
        Some(_) => "A confirmation was sent to your email.",
        None => "We will contact you by phone.",
    };

    html::page(
        "Subscription confirmed",
        &format!(
            r#"<h1>Thank you, {name}!</h1>
<p>Your subscription was received on {created_at}.</p>
<dl>
<dt>National ID</dt><dd>{national_id}</dd>
<dt>Email</dt><dd>{email}</dd>
<dt>Phone</dt><dd>{phone}</dd>
</dl>
<p>{notice}</p>"#,
            name = html::escape(&subscription.name),
            national_id = html::escape(&subscription.national_id),
            email = html::escape(subscription.email.as_deref().unwrap_or_default()),
            phone = html::escape(&phone),
        ),
    )
}
