//! Handler chain result type.

use super::reply::Reply;

/// Handler result for the chain. `Reply` carries what was sent so later handlers can see it in `after()`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HandlerResponse {
    /// Pass to next handler.
    Continue,
    /// Stop the chain; nothing was sent.
    Stop,
    /// Not for this handler, try next.
    Ignore,
    /// Stop the chain; the reply was delivered.
    Reply(Reply),
}
