//! Shell commands: lines that start with `:`.

use decicalc::Notation;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// `:scale`
    ShowScale,
    /// `:scale <digits>`
    SetScale(i64),
    /// `:infix` or `:postfix`
    Switch(Notation),
    /// `:q` or `:quit`
    Quit,
    /// Anything else after a `:`; holds the text without the colon.
    Unrecognised(String),
}

/// Names offered by tab completion.
pub const COMMAND_NAMES: &[&str] = &[":scale", ":infix", ":postfix", ":quit"];

/// Parses a trimmed input line. Returns `None` if the line is not a command.
pub fn parse_command(line: &str) -> Option<Command> {
    let body = line.strip_prefix(':')?;

    let command = match body {
        "scale" => Command::ShowScale,
        "infix" => Command::Switch(Notation::Infix),
        "postfix" => Command::Switch(Notation::Postfix),
        "q" | "quit" => Command::Quit,
        _ => parse_set_scale(body).unwrap_or_else(|| Command::Unrecognised(body.to_string())),
    };
    Some(command)
}

/// `scale`, at least one whitespace character, then only digits.
fn parse_set_scale(body: &str) -> Option<Command> {
    let rest = body.strip_prefix("scale")?;
    if !rest.starts_with(char::is_whitespace) {
        return None;
    }
    let digits = rest.trim_start();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse().ok().map(Command::SetScale)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_plain_expressions_are_not_commands() {
        assert_eq!(parse_command("1 + 2"), None);
        assert_eq!(parse_command(""), None);
    }

    #[test]
    fn test_scale_commands() {
        assert_eq!(parse_command(":scale"), Some(Command::ShowScale));
        assert_eq!(parse_command(":scale 10"), Some(Command::SetScale(10)));
        assert_eq!(parse_command(":scale \t 0"), Some(Command::SetScale(0)));
        assert_eq!(
            parse_command(":scale5"),
            Some(Command::Unrecognised("scale5".to_string()))
        );
        assert_eq!(
            parse_command(":scale -1"),
            Some(Command::Unrecognised("scale -1".to_string()))
        );
        assert_eq!(
            parse_command(":scale 99999999999999999999999"),
            Some(Command::Unrecognised("scale 99999999999999999999999".to_string()))
        );
    }

    #[test]
    fn test_mode_and_quit_commands() {
        assert_eq!(
            parse_command(":infix"),
            Some(Command::Switch(Notation::Infix))
        );
        assert_eq!(
            parse_command(":postfix"),
            Some(Command::Switch(Notation::Postfix))
        );
        assert_eq!(parse_command(":q"), Some(Command::Quit));
        assert_eq!(parse_command(":quit"), Some(Command::Quit));
    }

    #[test]
    fn test_unrecognised_command() {
        assert_eq!(
            parse_command(":help"),
            Some(Command::Unrecognised("help".to_string()))
        );
        assert_eq!(
            parse_command(":"),
            Some(Command::Unrecognised(String::new()))
        );
    }
}
