//! Command parsing.
//!
//! Turns a line of player input into a `(verb, target)` pair. Parsing never
//! fails: unknown verbs are passed through for the controller to reject.

use crate::game::Direction;

/// A parsed player command.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedCommand {
    /// Lowercase verb, empty for blank input.
    pub verb: String,
    /// Lowercase target word, if any.
    pub target: Option<String>,
}

impl ParsedCommand {
    /// Create a command from a verb and optional target.
    #[must_use]
    pub fn new(verb: impl Into<String>, target: Option<&str>) -> Self {
        Self {
            verb: verb.into(),
            target: target.map(str::to_string),
        }
    }

    /// The target as a string slice.
    #[must_use]
    pub fn target(&self) -> Option<&str> {
        self.target.as_deref()
    }
}

/// Parse a line of player input.
///
/// - Input is trimmed and lowercased; blank input gives an empty verb.
/// - A lone alias such as `n`, `l`, `i` or `q` expands to its full command.
/// - Otherwise the first word is the verb and the second is the target.
///   Any further words are dropped, so `take rusty key` targets `rusty`.
/// - `go n` style shortcuts expand to the full direction name.
#[must_use]
pub fn parse_command(input: &str) -> ParsedCommand {
    let normalized = input.trim().to_lowercase();
    let mut words = normalized.split_whitespace();

    let Some(verb) = words.next() else {
        return ParsedCommand::default();
    };
    let target = words.next();

    if target.is_none()
        && let Some((verb, target)) = alias(verb)
    {
        return ParsedCommand::new(verb, target);
    }

    let target = match (verb, target) {
        ("go", Some(shortcut)) => Direction::from_shortcut(shortcut)
            .map(|dir| dir.name())
            .or(Some(shortcut)),
        _ => target,
    };

    ParsedCommand::new(verb, target)
}

/// Expansion for a single-word alias.
fn alias(word: &str) -> Option<(&'static str, Option<&'static str>)> {
    if let Some(dir) = Direction::from_shortcut(word).or_else(|| Direction::from_name(word)) {
        return Some(("go", Some(dir.name())));
    }

    match word {
        "l" | "look" => Some(("look", None)),
        "i" | "inv" | "inventory" => Some(("inventory", None)),
        "q" | "quit" | "exit" => Some(("quit", None)),
        _ => None,
    }
}
