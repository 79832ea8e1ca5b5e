//! Handler implementations: one per command, the catch-all fallback, and message logging.

mod command_handler;
mod fallback_handler;
mod logging_handler;

pub use command_handler::CommandHandler;
pub use fallback_handler::FallbackHandler;
pub use logging_handler::LoggingHandler;
