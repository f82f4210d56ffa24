use std::sync::Arc;

use axum::{
    extract::{Path, State},
    response::Html,
};
use database::{
    media::{Media, MediaKind, MediaLabel},
    period::{at_afternoon, at_morning},
    talk::Talk,
};
use time::macros::format_description;

use super::{
    AppState,
    error::{AppError, record_id},
    html,
};
use crate::store::Store;

pub(crate) async fn index<S: Store>(State(state): State<Arc<AppState<S>>>) -> Result<Html<String>, AppError> {
    let talks = state.store.talks().await?;

    let content = format!(
        r#"<h1>Talks</h1>
<section id="morning">
<h2>Morning</h2>
{morning}
</section>
<section id="afternoon">
<h2>Afternoon</h2>
{afternoon}
</section>"#,
        morning = render_list(at_morning(&talks)),
        afternoon = render_list(at_afternoon(&talks)),
    );

    Ok(Html(html::page("Talks", &content)))
}

pub(crate) async fn detail<S: Store>(State(state): State<Arc<AppState<S>>>, Path(id): Path<String>) -> Result<Html<String>, AppError> {
    let (talk, media) = state.store.talk(record_id(&id)?).await?.ok_or(AppError::NotFound)?;

    Ok(Html(render_detail(&talk, &media)))
}

fn start_time(talk: &Talk) -> String {
    talk.start_time
        .format(format_description!("[hour]:[minute]"))
        .unwrap_or_default()
}

fn render_list<'a>(talks: impl Iterator<Item = &'a Talk>) -> String {
    let items = talks
        .map(|talk| {
            format!(
                r#"<li><time>{start_time}</time> <a href="/talks/{id}">{title}</a></li>"#,
                start_time = start_time(talk),
                id = talk.id,
                title = html::escape(&talk.title),
            )
        })
        .collect::<Vec<_>>();

    match items.is_empty() {
        true => "<p>No talks in this period.</p>".to_string(),
        false => format!("<ul>\n{}\n</ul>", items.join("\n")),
    }
}

fn render_detail(talk: &Talk, media: &[Media]) -> String {
    let videos = render_media(talk, media, MediaKind::YouTube);
    let slides = render_media(talk, media, MediaKind::Slides);

    html::page(
        &talk.title,
        &format!(
            r#"<h1>{title}</h1>
<p><time>{start_time}</time></p>
<p>{description}</p>
<section id="videos">
<h2>Videos</h2>
{videos}
</section>
<section id="slides">
<h2>Slides</h2>
{slides}
</section>"#,
            title = html::escape(&talk.title),
            start_time = start_time(talk),
            description = html::escape(&talk.description),
        ),
    )
}

fn render_media(talk: &Talk, media: &[Media], kind: MediaKind) -> String {
    media
        .iter()
        .filter(|media| media.kind == kind)
        .map(|media| {
            let id = html::escape(&media.media_id);
            let src = match kind {
                MediaKind::YouTube => format!("https://www.youtube.com/embed/{id}"),
                MediaKind::Slides => format!("https://www.slideshare.net/slideshow/embed_code/{id}"),
            };
            let label = MediaLabel { talk_title: &talk.title, media };

            format!(
                r#"<iframe src="{src}" title="{label}" allowfullscreen></iframe>"#,
                label = html::escape(&label.to_string()),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}
