use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::Html,
};
use database::{
    contact::{Contact, ContactKind},
    speaker::Speaker,
};

use super::{AppState, error::AppError, html};
use crate::store::Store;

pub(crate) async fn detail<S: Store>(State(state): State<Arc<AppState<S>>>, Path(slug): Path<String>) -> Result<Html<String>, AppError> {
    let (speaker, contacts) = state.store.speaker(slug).await?.ok_or(AppError::NotFound)?;

    Ok(Html(render(&speaker, &contacts)))
}

fn render(speaker: &Speaker, contacts: &[Contact]) -> String {
    let avatar = speaker
        .avatar
        .as_deref()
        .filter(|avatar| !avatar.is_empty())
        .map(|avatar| format!(r#"<img src="{}" alt="{}">"#, html::escape(avatar), html::escape(&speaker.name)))
        .unwrap_or_default();

    let contacts = contacts
        .iter()
        .map(|contact| {
            let value = html::escape(&contact.value);
            match contact.kind {
                ContactKind::Email => format!(r#"<li>{}: <a href="mailto:{value}">{value}</a></li>"#, contact.kind),
                ContactKind::Phone | ContactKind::Fax => format!("<li>{}: {value}</li>", contact.kind),
            }
        })
        .collect::<Vec<_>>()
        .join("\n");

    html::page(
        &speaker.name,
        &format!(
            r#"<h1>{name}</h1>
{avatar}
<p><a href="{url}">{url}</a></p>
<p>{description}</p>
<ul class="contacts">
{contacts}
</ul>"#,
            name = html::escape(&speaker.name),
            url = html::escape(&speaker.url),
            description = html::escape(&speaker.description),
        ),
    )
}
