use std::sync::Arc;

use axum::{extract::State, response::Html};
use database::speaker::Speaker;

use super::{AppState, error::AppError, html};
use crate::store::Store;

pub(crate) async fn index<S: Store>(State(state): State<Arc<AppState<S>>>) -> Result<Html<String>, AppError> {
    let speakers = state.store.speakers().await?;

    Ok(Html(render(&speakers)))
}

fn render(speakers: &[Speaker]) -> String {
    let speakers = match speakers {
        [] => "<p>Speakers will be announced soon.</p>".to_string(),
        speakers => {
            let items = speakers
                .iter()
                .map(|speaker| {
                    format!(
                        r#"<li><a href="/speakers/{slug}">{name}</a></li>"#,
                        slug = html::escape(&speaker.slug),
                        name = html::escape(&speaker.name),
                    )
                })
                .collect::<Vec<_>>()
                .join("\n");
            format!("<ul>\n{items}\n</ul>")
        },
    };

    html::page(
        "Home",
        &format!(
            r#"<h1>Eventex</h1>
<p><a href="/subscribe">Subscribe now</a></p>
<h2>Speakers</h2>
{speakers}"#
        ),
    )
}
