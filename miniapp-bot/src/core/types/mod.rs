//! Core types: user, chat, message, outgoing reply, handler response, and Handler trait.
//!
//! One file per main type.

mod chat;
mod handler;
mod message;
mod reply;
mod response;
mod user;

pub use chat::Chat;
pub use handler::{Handler, ToCoreMessage, ToCoreUser};
pub use message::Message;
pub use reply::{ParseMode, Reply, WebAppButton};
pub use response::HandlerResponse;
pub use user::User;
