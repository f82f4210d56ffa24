use futures::{FutureExt, future::BoxFuture};

use crate::{Deliver, MailerError, Message};

/// Writes messages to the log instead of sending them.
#[derive(Debug, Clone, Default)]
pub struct ConsoleMailer;

impl Deliver for ConsoleMailer {
    fn deliver(&self, message: Message) -> BoxFuture<'static, Result<(), MailerError>> {
        async move {
            tracing::info!(
                from = %message.from,
                to = %message.to,
                subject = %message.subject,
                "{}",
                message.body,
            );

            Ok(())
        }
        .boxed()
    }
}
