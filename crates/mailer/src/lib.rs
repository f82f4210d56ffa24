use futures::future::BoxFuture;

pub use crate::{console::ConsoleMailer, error::MailerError, http::HttpMailer, message::Message};

mod console;
pub mod error;
mod http;
mod message;

/// Delivers one message. The returned future owns everything it needs, so it can be spawned.
pub trait Deliver: Send + Sync {
    fn deliver(&self, message: Message) -> BoxFuture<'static, Result<(), MailerError>>;
}

pub enum Mailer {
    Http(HttpMailer),
    Console(ConsoleMailer),
}

impl Deliver for Mailer {
    fn deliver(&self, message: Message) -> BoxFuture<'static, Result<(), MailerError>> {
        match self {
            Self::Http(mailer) => mailer.deliver(message),
            Self::Console(mailer) => mailer.deliver(message),
        }
    }
}
