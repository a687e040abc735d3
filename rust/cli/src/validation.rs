//! Free-text parsing for the interactive action prompt.

use quinte_engine::player::Action;

/// What a line of player input turned out to be.
#[derive(Debug, PartialEq, Eq)]
pub enum ParsedInput {
    /// A complete action, ready for the betting engine.
    Action(Action),
    /// The player wants to raise but gave no amount; the adapter
    /// prompts for one next.
    RaiseIntent,
    /// Unrecognized text. The table treats this as an implicit fold.
    Invalid(String),
}

/// Parses one line of action input (case-insensitive):
/// - `c` / `call` -> Call
/// - `f` / `fold` -> Fold
/// - `r` / `raise` -> raise intent, amount prompted separately
/// - `r N` / `raise N` -> Raise(N)
///
/// Anything else is `Invalid`, which the prompt adapter folds.
pub fn parse_action(input: &str) -> ParsedInput {
    let input = input.trim().to_lowercase();
    let parts: Vec<&str> = input.split_whitespace().collect();

    match parts.as_slice() {
        ["c"] | ["call"] => ParsedInput::Action(Action::Call),
        ["f"] | ["fold"] => ParsedInput::Action(Action::Fold),
        ["r"] | ["raise"] => ParsedInput::RaiseIntent,
        ["r", amount] | ["raise", amount] => match amount.parse::<u32>() {
            Ok(n) => ParsedInput::Action(Action::Raise(n)),
            Err(_) => ParsedInput::Invalid(format!("Unrecognized raise amount: {}", amount)),
        },
        [] => ParsedInput::Invalid("Empty input".to_string()),
        _ => ParsedInput::Invalid(format!("Unrecognized action: {}", input)),
    }
}

/// Parses a raise amount reply. `None` asks the adapter to re-prompt.
pub fn parse_raise_amount(input: &str) -> Option<u32> {
    input.trim().parse::<u32>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_letters_and_words_parse() {
        assert_eq!(parse_action("c"), ParsedInput::Action(Action::Call));
        assert_eq!(parse_action("CALL"), ParsedInput::Action(Action::Call));
        assert_eq!(parse_action("f"), ParsedInput::Action(Action::Fold));
        assert_eq!(parse_action("fold"), ParsedInput::Action(Action::Fold));
    }

    #[test]
    fn bare_raise_needs_an_amount() {
        assert_eq!(parse_action("r"), ParsedInput::RaiseIntent);
        assert_eq!(parse_action("raise"), ParsedInput::RaiseIntent);
    }

    #[test]
    fn inline_raise_amount_parses() {
        assert_eq!(
            parse_action("raise 30"),
            ParsedInput::Action(Action::Raise(30))
        );
        assert_eq!(parse_action("r 10"), ParsedInput::Action(Action::Raise(10)));
    }

    #[test]
    fn garbage_is_invalid() {
        assert!(matches!(parse_action("x"), ParsedInput::Invalid(_)));
        assert!(matches!(parse_action(""), ParsedInput::Invalid(_)));
        assert!(matches!(parse_action("raise ten"), ParsedInput::Invalid(_)));
    }

    #[test]
    fn raise_amount_replies() {
        assert_eq!(parse_raise_amount(" 25 "), Some(25));
        assert_eq!(parse_raise_amount("abc"), None);
        assert_eq!(parse_raise_amount("-5"), None);
    }
}
