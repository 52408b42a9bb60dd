/// Rewrite raw arguments before parsing.
///
/// A token with a single leading `-` is reduced to the flag at position 1:
/// `-v` stays `-v`, and `-abc` becomes `-a` (the remaining characters are
/// dropped, not expanded into `-b -c`). Tokens without a leading `-`, tokens
/// starting with `--`, and a bare `-` pass through unchanged.
pub fn normalize<S: AsRef<str>>(tokens: &[S]) -> Vec<String> {
    tokens
        .iter()
        .map(|token| {
            let token = token.as_ref();
            let mut chars = token.chars();
            match (chars.next(), chars.next()) {
                (Some('-'), Some(flag)) if flag != '-' => format!("-{flag}"),
                _ => token.to_string(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::normalize;

    #[test]
    fn plain_and_long_tokens_pass_through() {
        let input = ["file.txt", "--verbose", "--", "", "-"];
        assert_eq!(normalize(&input), input);
    }

    #[test]
    fn single_short_flag_is_unchanged() {
        assert_eq!(normalize(&["-v", "x"]), ["-v", "x"]);
    }

    #[test]
    fn bundle_keeps_only_first_flag() {
        assert_eq!(normalize(&["-abc"]), ["-a"]);
        assert_eq!(normalize(&["-ofile.txt", "in"]), ["-o", "in"]);
    }

    #[test]
    fn counts_characters_not_bytes() {
        assert_eq!(normalize(&["-éx"]), ["-é"]);
    }
}
