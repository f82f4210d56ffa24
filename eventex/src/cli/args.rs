pub(crate) mod admin;
pub(crate) mod database;
pub(crate) mod mail;
pub(crate) mod server;
