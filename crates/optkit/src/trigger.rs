use std::fmt;

/// The textual identity of an option.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Trigger {
    /// `-c`
    Short(char),
    /// `--name`
    Long(String),
    /// `-c` or `--name`
    Mixed(char, String),
}

impl Trigger {
    pub fn short(c: char) -> Self {
        Self::Short(c)
    }

    pub fn long(name: impl Into<String>) -> Self {
        Self::Long(name.into())
    }

    pub fn mixed(c: char, name: impl Into<String>) -> Self {
        Self::Mixed(c, name.into())
    }

    /// Short character, if any.
    pub fn short_char(&self) -> Option<char> {
        match self {
            Self::Short(c) | Self::Mixed(c, _) => Some(*c),
            Self::Long(_) => None,
        }
    }

    /// Long name (without the leading `--`), if any.
    pub fn long_name(&self) -> Option<&str> {
        match self {
            Self::Long(name) | Self::Mixed(_, name) => Some(name.as_str()),
            Self::Short(_) => None,
        }
    }

    /// Whether `token` invokes this trigger exactly.
    pub fn matches(&self, token: &str) -> bool {
        match self {
            Self::Short(c) => matches_short(*c, token),
            Self::Long(name) => matches_long(name, token),
            Self::Mixed(c, name) => matches_short(*c, token) || matches_long(name, token),
        }
    }

    /// Bracketed form used on a usage line: `[-c]`, `[--name]` or `[-c|--name]`.
    pub fn usage_form(&self) -> String {
        match self {
            Self::Mixed(..) => self.to_string(),
            _ => format!("[{self}]"),
        }
    }
}

fn matches_short(c: char, token: &str) -> bool {
    let mut chars = token.chars();
    chars.next() == Some('-') && chars.next() == Some(c) && chars.next().is_none()
}

fn matches_long(name: &str, token: &str) -> bool {
    token.strip_prefix("--").is_some_and(|rest| rest == name)
}

impl fmt::Display for Trigger {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Short(c) => write!(f, "-{c}"),
            Self::Long(name) => write!(f, "--{name}"),
            Self::Mixed(c, name) => write!(f, "[-{c}|--{name}]"),
        }
    }
}

/// Whether `token` is shaped like an option trigger.
///
/// Two characters starting with a single `-` (`-v`), or more than two
/// characters starting with `--` (`--verbose`). A bare `-`, `--`, and `-abc`
/// are not option tokens.
pub fn is_option_token(token: &str) -> bool {
    let mut chars = token.chars();
    let (Some(first), Some(second)) = (chars.next(), chars.next()) else {
        return false;
    };
    if chars.next().is_none() {
        first == '-' && second != '-'
    } else {
        first == '-' && second == '-'
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_forms() {
        assert_eq!(Trigger::short('v').to_string(), "-v");
        assert_eq!(Trigger::long("verbose").to_string(), "--verbose");
        assert_eq!(Trigger::mixed('v', "verbose").to_string(), "[-v|--verbose]");
    }

    #[test]
    fn usage_forms_are_always_bracketed_once() {
        assert_eq!(Trigger::short('v').usage_form(), "[-v]");
        assert_eq!(Trigger::long("verbose").usage_form(), "[--verbose]");
        assert_eq!(Trigger::mixed('v', "verbose").usage_form(), "[-v|--verbose]");
    }

    #[test]
    fn short_matches_only_its_own_token() {
        let t = Trigger::short('h');
        assert!(t.matches("-h"));
        assert!(!t.matches("h"));
        assert!(!t.matches("--h"));
        assert!(!t.matches("-hh"));
        assert!(!t.matches("-i"));
    }

    #[test]
    fn long_requires_double_dash() {
        let t = Trigger::long("hello");
        assert!(t.matches("--hello"));
        assert!(!t.matches("hello"));
        assert!(!t.matches("-hello"));
        assert!(!t.matches("--hell"));
        assert!(!t.matches("--helloo"));
    }

    #[test]
    fn mixed_matches_either_form() {
        let t = Trigger::mixed('h', "hello");
        assert!(t.matches("-h"));
        assert!(t.matches("--hello"));
        assert!(!t.matches("--h"));
        assert!(!t.matches("-hello"));
    }

    #[test]
    fn accessors() {
        let t = Trigger::mixed('o', "output");
        assert_eq!(t.short_char(), Some('o'));
        assert_eq!(t.long_name(), Some("output"));
        assert_eq!(Trigger::short('o').long_name(), None);
        assert_eq!(Trigger::long("output").short_char(), None);
    }

    #[test]
    fn option_token_grammar() {
        assert!(is_option_token("-v"));
        assert!(is_option_token("--v"));
        assert!(is_option_token("--verbose"));
        assert!(is_option_token("-é"));

        assert!(!is_option_token(""));
        assert!(!is_option_token("-"));
        assert!(!is_option_token("v"));
        assert!(!is_option_token("--"));
        assert!(!is_option_token("-abc"));
        assert!(!is_option_token("ab"));
        assert!(!is_option_token("abc"));
    }
}
