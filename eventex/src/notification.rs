use database::subscription::Subscription;
use mailer::{Deliver, Message};
use tracing::Instrument;

pub(crate) const CONFIRMATION_SUBJECT: &str = "Subscription confirmed";
pub(crate) const CONFIRMATION_BODY: &str = "Thank you for subscribing!";

pub(crate) fn confirmation(from: &str, subscription: &Subscription) -> Option<Message> {
    let to = subscription.email.as_ref()?;

    Some(Message {
        from: from.to_string(),
        to: to.clone(),
        subject: CONFIRMATION_SUBJECT.to_string(),
        body: CONFIRMATION_BODY.to_string(),
    })
}

/// Queues the confirmation email. Delivery runs in the background and never fails the caller.
pub(crate) fn send_confirmation(mailer: &dyn Deliver, from: &str, subscription: &Subscription) {
    let Some(message) = confirmation(from, subscription) else {
        tracing::info!("subscription {} has no email, so no confirmation was sent", subscription.id);
        return;
    };

    let id = subscription.id;
    let delivery = mailer.deliver(message);

    tokio::spawn(
        async move {
            if let Err(err) = delivery.await {
                tracing::error!("failed to send confirmation of subscription {id}\nError: {err:?}");
            }
        }
        .in_current_span(),
    );
}

#[cfg(test)]
mod tests {
    use database::subscription::Subscription;
    use time::macros::datetime;

    use super::{CONFIRMATION_BODY, CONFIRMATION_SUBJECT, confirmation};

    fn subscription(email: Option<&str>) -> Subscription {
        Subscription {
            id: 1,
            name: "Henrique Bastos".to_string(),
            national_id: "00000000000".to_string(),
            email: email.map(str::to_string),
            phone: Some("21-96186180".to_string()),
            created_at: datetime!(2026-10-16 10:00 UTC),
            paid: false,
        }
    }

    #[test]
    fn address_confirmation_to_subscriber() {
        let message = confirmation("contato@eventex.com.br", &subscription(Some("henrique@bastos.net"))).unwrap();

        assert_eq!(message.from, "contato@eventex.com.br");
        assert_eq!(message.to, "henrique@bastos.net");
        assert_eq!(message.subject, CONFIRMATION_SUBJECT);
        assert_eq!(message.body, CONFIRMATION_BODY);
    }

    #[test]
    fn skip_subscription_without_email() {
        assert_eq!(confirmation("contato@eventex.com.br", &subscription(None)), None);
    }
}
