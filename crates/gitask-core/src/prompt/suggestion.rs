//! Confirmation prompt for translated URLs.

/// Text asking whether to use `translated` instead of the typed URL.
pub fn format_suggestion_prompt(translated: &str) -> String {
    format!("Use \"{}\" instead? (y/N) ", translated)
}

/// True for `y` / `yes` in any case, ignoring surrounding whitespace.
pub fn is_affirmative(answer: &str) -> bool {
    let answer = answer.trim();
    answer.eq_ignore_ascii_case("y") || answer.eq_ignore_ascii_case("yes")
}
