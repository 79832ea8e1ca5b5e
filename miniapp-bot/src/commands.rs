//! Bot commands and the trigger parser that maps message text to a [`Command`].

use teloxide::utils::command::BotCommands;

/// Commands the bot answers. Anything else goes to the fallback handler.
///
/// The derive provides `Command::bot_commands()` for `setMyCommands`.
#[derive(BotCommands, Clone, Copy, Debug, PartialEq, Eq)]
#[command(rename_rule = "lowercase", description = "Доступные команды:")]
pub enum Command {
    #[command(description = "начать работу с ботом")]
    Start,
    #[command(description = "показать кнопку Mini App")]
    Menu,
    #[command(description = "эта справка")]
    Help,
}

impl Command {
    /// All commands in registration order.
    pub const ALL: [Command; 3] = [Command::Start, Command::Menu, Command::Help];

    /// Command name without the leading slash.
    pub fn name(self) -> &'static str {
        match self {
            Command::Start => "start",
            Command::Menu => "menu",
            Command::Help => "help",
        }
    }

    /// Parses the leading command of a message.
    ///
    /// The first whitespace-separated word must be `/name` or `/name@mention`; anything after it
    /// (e.g. a `/start` deep-link payload) is ignored. A mention must match `bot_username`
    /// case-insensitively; an empty mention (`/start@`) counts as none, and when the username is
    /// unknown any mention is accepted.
    /// Names are case-sensitive: `/START` is not a command.
    pub fn from_text(text: &str, bot_username: Option<&str>) -> Option<Self> {
        let word = text.split_whitespace().next()?;
        let command = word.strip_prefix('/')?;

        let name = match command.split_once('@') {
            Some((name, mention)) => match bot_username {
                Some(own) if !mention.is_empty() && !mention.eq_ignore_ascii_case(own) => {
                    return None
                }
                _ => name,
            },
            None => command,
        };

        Self::ALL.into_iter().find(|c| c.name() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_exact_commands() {
        assert_eq!(Command::from_text("/start", None), Some(Command::Start));
        assert_eq!(Command::from_text("/menu", None), Some(Command::Menu));
        assert_eq!(Command::from_text("/help", None), Some(Command::Help));
    }

    #[test]
    fn test_non_commands() {
        assert_eq!(Command::from_text("hello", None), None);
        assert_eq!(Command::from_text("", None), None);
        assert_eq!(Command::from_text("   ", None), None);
        assert_eq!(Command::from_text("/unknown", None), None);
        assert_eq!(Command::from_text("/", None), None);
        assert_eq!(Command::from_text("start", None), None);
        assert_eq!(Command::from_text("/startx", None), None);
    }

    #[test]
    fn test_names_are_case_sensitive() {
        assert_eq!(Command::from_text("/START", None), None);
        assert_eq!(Command::from_text("/Help", None), None);
    }

    #[test]
    fn test_payload_and_whitespace() {
        assert_eq!(
            Command::from_text("/start ref_42", None),
            Some(Command::Start)
        );
        assert_eq!(Command::from_text("  /menu", None), Some(Command::Menu));
        assert_eq!(Command::from_text("/help\nmore", None), Some(Command::Help));
    }

    #[test]
    fn test_mention_must_match_own_username() {
        assert_eq!(
            Command::from_text("/start@MiniAppBot", Some("miniappbot")),
            Some(Command::Start)
        );
        assert_eq!(
            Command::from_text("/start@other_bot", Some("miniappbot")),
            None
        );
        assert_eq!(
            Command::from_text("/menu@anything", None),
            Some(Command::Menu)
        );
    }

    #[test]
    fn test_empty_mention_is_no_mention() {
        assert_eq!(
            Command::from_text("/start@", Some("miniappbot")),
            Some(Command::Start)
        );
        assert_eq!(Command::from_text("/help@ more", None), Some(Command::Help));
        assert_eq!(Command::from_text("/@", Some("miniappbot")), None);
    }

    #[test]
    fn test_bot_commands_list_matches_names() {
        let registered: Vec<String> = Command::bot_commands()
            .into_iter()
            .map(|c| c.command.trim_start_matches('/').to_string())
            .collect();
        assert_eq!(registered, vec!["start", "menu", "help"]);
    }
}
