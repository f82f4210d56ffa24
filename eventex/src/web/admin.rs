use std::sync::Arc;

use axum::{
    Form,
    extract::State,
    response::{Html, Redirect},
};
use database::subscription::Subscription;

use super::{AppState, error::AppError, html};
use crate::store::Store;

pub(crate) async fn subscriptions<S: Store>(State(state): State<Arc<AppState<S>>>) -> Result<Html<String>, AppError> {
    let subscriptions = state.store.subscriptions().await?;

    Ok(Html(render(&subscriptions)))
}

/// Takes every `id` pair of the posted form. Values that are not ids are ignored.
pub(crate) async fn mark_as_paid<S: Store>(
    State(state): State<Arc<AppState<S>>>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Redirect, AppError> {
    let ids = pairs
        .into_iter()
        .filter(|(key, _)| key == "id")
        .filter_map(|(_, value)| value.parse().ok())
        .collect::<Vec<i32>>();

    state.store.mark_as_paid(ids).await?;

    Ok(Redirect::to("/admin/subscriptions"))
}

fn render(subscriptions: &[Subscription]) -> String {
    let rows = subscriptions
        .iter()
        .map(|subscription| {
            let checkbox = match subscription.paid {
                true => String::new(),
                false => format!(r#"<input type="checkbox" name="id" value="{}">"#, subscription.id),
            };

            format!(
                r#"<tr><td>{checkbox}</td><td><a href="/subscribe/{id}">{name}</a></td><td>{national_id}</td><td>{email}</td><td>{phone}</td><td>{paid}</td></tr>"#,
                id = subscription.id,
                name = html::escape(&subscription.name),
                national_id = html::escape(&subscription.national_id),
                email = html::escape(subscription.email.as_deref().unwrap_or_default()),
                phone = html::escape(subscription.phone.as_deref().unwrap_or_default()),
                paid = if subscription.paid { "yes" } else { "no" },
            )
        })
        .collect::<Vec<_>>()
        .join("\n");

    html::page(
        "Subscriptions",
        &format!(
            r#"<h1>Subscriptions</h1>
<p><a href="/admin/export-subscriptions">Export as CSV</a></p>
<form action="/admin/subscriptions/mark-as-paid" method="post">
<table>
<thead><tr><th></th><th>Name</th><th>National ID</th><th>Email</th><th>Phone</th><th>Paid</th></tr></thead>
<tbody>
{rows}
</tbody>
</table>
<input type="submit" value="Mark as paid">
</form>"#
        ),
    )
}
