/// Converts a character to a string, escaping if necessary
pub fn format_char(c: char) -> String {
    match c {
        '\\' => "\\\\".to_string(),
        '\'' => "\\'".to_string(),
        '\n' => "\\n".to_string(),
        '\r' => "\\r".to_string(),
        '\t' => "\\t".to_string(),
        _ => c.to_string(),
    }
}

/// Returns a terminal name surrounded by single quotes, with each character
/// escaped if necessary
pub fn quote_terminal(name: &str) -> String {
    format!("'{}'", name.chars().map(format_char).collect::<String>())
}
