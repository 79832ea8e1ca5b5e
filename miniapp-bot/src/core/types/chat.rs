//! Chat identity type for core messages.

/// Chat (group or private) a reply goes to.
#[derive(Debug, Clone)]
pub struct Chat {
    pub id: i64,
}
