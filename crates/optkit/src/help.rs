//! Usage rendering.

use crate::spec::OptionSpec;
use crate::trigger::Trigger;

/// Usage lines are wrapped before exceeding this many characters.
pub const MAX_LINE_WIDTH: usize = 80;

/// Render `usage: <command_name> [-a] [--bee] [-c|--cee] ...`.
///
/// Options are packed greedily; continuation lines are indented so options
/// line up under the first one. An option that alone overflows a line is still
/// placed on it.
pub fn help_text(command_name: &str, definitions: &[OptionSpec]) -> String {
    let prefix = format!("usage: {command_name}");
    let prefix_width = prefix.chars().count();

    let mut lines = Vec::new();
    let mut line = prefix;
    let mut line_width = prefix_width;
    let mut line_has_option = false;

    for spec in definitions {
        let form = spec.trigger().usage_form();
        let form_width = form.chars().count();
        if line_has_option && line_width + 1 + form_width > MAX_LINE_WIDTH {
            lines.push(line);
            line = " ".repeat(prefix_width);
            line_width = prefix_width;
        }
        line.push(' ');
        line.push_str(&form);
        line_width += 1 + form_width;
        line_has_option = true;
    }
    lines.push(line);

    lines.join("\n")
}

fn format_left(spec: &OptionSpec) -> String {
    let mut out = match spec.trigger() {
        Trigger::Short(c) => format!("-{c}"),
        Trigger::Long(name) => format!("    --{name}"),
        Trigger::Mixed(c, name) => format!("-{c}, --{name}"),
    };
    match spec.required_parameters() {
        0 => {}
        1 => out.push_str(" <ARG>"),
        n => {
            for i in 1..=n {
                out.push_str(&format!(" <ARG{i}>"));
            }
        }
    }
    out
}

/// Render an `Options:` section with one aligned row per definition.
///
/// Returns an empty string when there are no definitions.
pub fn options_table(definitions: &[OptionSpec]) -> String {
    if definitions.is_empty() {
        return String::new();
    }

    let rows: Vec<(String, &str)> = definitions
        .iter()
        .map(|d| (format_left(d), d.help().trim()))
        .collect();
    let width = rows.iter().map(|(l, _)| l.chars().count()).max().unwrap_or(0);

    let mut out = String::from("Options:\n");
    for (left, help) in rows {
        if help.is_empty() {
            out.push_str(&format!("  {}\n", left));
        } else {
            out.push_str(&format!("  {:width$}  {}\n", left, help, width = width));
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flag(c: char) -> OptionSpec {
        OptionSpec::new(Trigger::short(c))
    }

    #[test]
    fn single_line_usage() {
        let defs = vec![
            flag('v'),
            OptionSpec::new(Trigger::long("dry-run")),
            OptionSpec::new(Trigger::mixed('o', "output")).with_parameters(1),
        ];
        assert_eq!(
            help_text("tool", &defs),
            "usage: tool [-v] [--dry-run] [-o|--output]"
        );
    }

    #[test]
    fn no_definitions() {
        assert_eq!(help_text("tool", &[]), "usage: tool");
    }

    #[test]
    fn wraps_at_eighty_columns_and_aligns() {
        let defs: Vec<OptionSpec> = ('a'..='z').map(flag).collect();
        let text = help_text("tool", &defs);
        let lines: Vec<&str> = text.lines().collect();

        assert!(lines.len() > 1);
        assert!(lines.iter().all(|l| l.chars().count() <= MAX_LINE_WIDTH));
        assert!(lines[0].starts_with("usage: tool [-a] [-b]"));
        for l in &lines[1..] {
            let indent = " ".repeat(12);
            assert!(l.starts_with(&format!("{indent}[")), "misaligned: {l:?}");
        }

        // "usage: tool" is 11 wide; each form is 4 wide plus a space, so 13 fit.
        assert_eq!(lines[0].chars().count(), 11 + 13 * 5);
        let rejoined: Vec<&str> = lines.iter().flat_map(|l| l.split_whitespace()).collect();
        assert_eq!(rejoined.len(), 2 + 26);
    }

    #[test]
    fn oversized_option_stays_on_first_line() {
        let long_name = "x".repeat(90);
        let defs = vec![OptionSpec::new(Trigger::long(long_name.clone())), flag('v')];
        let text = help_text("tool", &defs);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], format!("usage: tool [--{long_name}]"));
        assert_eq!(lines[1], format!("{}[-v]", " ".repeat(12)));
    }

    #[test]
    fn options_table_aligns_help() {
        let defs = vec![
            flag('v').with_help("Verbose output"),
            OptionSpec::new(Trigger::mixed('o', "output"))
                .with_parameters(1)
                .with_help("Output file"),
            OptionSpec::new(Trigger::long("range")).with_parameters(2),
        ];
        let text = options_table(&defs);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "Options:");
        assert!(lines[1].starts_with("  -v "));
        assert!(lines[2].starts_with("  -o, --output <ARG> "));
        assert_eq!(lines[3], "      --range <ARG1> <ARG2>");

        // Help column starts two spaces after the widest left column.
        let column = "  ".len() + "    --range <ARG1> <ARG2>".len() + "  ".len();
        assert_eq!(lines[1].find("Verbose output"), Some(column));
        assert_eq!(lines[2].find("Output file"), Some(column));
    }

    #[test]
    fn options_table_empty() {
        assert_eq!(options_table(&[]), "");
    }
}
