//! Parser for inbound chat text.

/// A recognised slash command with its raw argument text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command<'a> {
    /// `/start`: greeting and help.
    Start,
    /// `/help`: command overview.
    Help,
    /// `/add <text>`: create a task in one message.
    Add(&'a str),
    /// `/new`: start the guided form.
    New,
    /// `/list` or `/show`: list the caller's tasks.
    List,
    /// `/done <id>` or `/finish <id>`: mark a task done.
    Done(&'a str),
    /// `/skip`: leave the deadline unset.
    Skip,
    /// `/cancel`: abandon the open draft.
    Cancel,
    /// Any other well-formed command name.
    Unknown(&'a str),
}

/// Classified inbound message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Inbound<'a> {
    /// A slash command.
    Command(Command<'a>),
    /// Anything else, trimmed.
    Text(&'a str),
}

impl<'a> Inbound<'a> {
    /// Classifies raw message text.
    ///
    /// Command names are case-sensitive. A `@botname` suffix, as sent by
    /// group chats, is ignored. Text whose leading token is not a valid
    /// command name (for example `/usr/bin`) is treated as plain text.
    #[must_use]
    pub fn parse(raw_input: &'a str) -> Self {
        let trimmed = raw_input.trim();
        let Some(after_slash) = trimmed.strip_prefix('/') else {
            return Self::Text(trimmed);
        };

        let (head, arguments) = after_slash
            .split_once(char::is_whitespace)
            .map_or((after_slash, ""), |(head, rest)| (head, rest.trim()));
        let name = head.split_once('@').map_or(head, |(name, _bot)| name);

        if name.is_empty() || !is_valid_command_name(name) {
            return Self::Text(trimmed);
        }

        Self::Command(Command::from_parts(name, arguments))
    }
}

impl<'a> Command<'a> {
    fn from_parts(name: &'a str, arguments: &'a str) -> Self {
        match name {
            "start" => Self::Start,
            "help" => Self::Help,
            "add" => Self::Add(arguments),
            "new" => Self::New,
            "list" | "show" => Self::List,
            "done" | "finish" => Self::Done(arguments),
            "skip" => Self::Skip,
            "cancel" => Self::Cancel,
            _ => Self::Unknown(name),
        }
    }
}

fn is_valid_command_name(value: &str) -> bool {
    value
        .chars()
        .all(|character| character.is_ascii_alphanumeric() || character == '_')
}
