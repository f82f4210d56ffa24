use std::sync::Arc;

use anyhow::{Result, anyhow};
use axum::{
    extract::State,
    http::header::{CONTENT_DISPOSITION, CONTENT_TYPE},
    response::IntoResponse,
};
use database::subscription::Subscription;
use time::format_description::well_known::Rfc3339;

use super::{AppState, error::AppError};
use crate::store::Store;

pub(crate) async fn subscriptions<S: Store>(State(state): State<Arc<AppState<S>>>) -> Result<impl IntoResponse, AppError> {
    let subscriptions = state.store.subscriptions().await?;
    let body = to_csv(&subscriptions)?;

    tracing::info!("exported {} subscription(s)", subscriptions.len());

    Ok((
        [
            (CONTENT_TYPE, "text/csv"),
            (CONTENT_DISPOSITION, r#"attachment; filename="subscriptions.csv""#),
        ],
        body,
    ))
}

fn to_csv(subscriptions: &[Subscription]) -> Result<Vec<u8>> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(["name", "national_id", "email", "phone", "created_at", "paid"])?;

    for subscription in subscriptions {
        let created_at = subscription.created_at.format(&Rfc3339)?;
        writer.write_record([
            subscription.name.as_str(),
            subscription.national_id.as_str(),
            subscription.email.as_deref().unwrap_or_default(),
            subscription.phone.as_deref().unwrap_or_default(),
            created_at.as_str(),
            if subscription.paid { "true" } else { "false" },
        ])?;
    }

    writer.into_inner().map_err(|err| anyhow!("failed to flush csv: {}", err.error()))
}

#[cfg(test)]
mod tests {
    use database::subscription::Subscription;
    use time::macros::datetime;

    use super::to_csv;

    #[test]
    fn write_header_and_rows() {
        let subscriptions = [
            Subscription {
                id: 1,
                name: "Henrique Bastos".to_string(),
                national_id: "00000000000".to_string(),
                email: Some("henrique@bastos.net".to_string()),
                phone: Some("21-96186180".to_string()),
                created_at: datetime!(2026-10-16 10:00 UTC),
                paid: true,
            },
            Subscription {
                id: 2,
                name: "Faria, Vinícius".to_string(),
                national_id: "11241574766".to_string(),
                email: None,
                phone: Some("21-80862728".to_string()),
                created_at: datetime!(2026-10-16 11:30 UTC),
                paid: false,
            },
        ];

        let csv = String::from_utf8(to_csv(&subscriptions).unwrap()).unwrap();

        assert_eq!(
            csv,
            "name,national_id,email,phone,created_at,paid\n\
             Henrique Bastos,00000000000,henrique@bastos.net,21-96186180,2026-10-16T10:00:00Z,true\n\
             \"Faria, Vinícius\",11241574766,,21-80862728,2026-10-16T11:30:00Z,false\n"
        );
    }

    #[test]
    fn header_only_without_subscriptions() {
        let csv = String::from_utf8(to_csv(&[]).unwrap()).unwrap();

        assert_eq!(csv, "name,national_id,email,phone,created_at,paid\n");
    }
}
