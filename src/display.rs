use crate::error::EnvupError;

pub fn print_success(message: &str) {
    tracing::info!("✓ {}", message);
}

pub fn print_info(message: &str) {
    tracing::info!("{}", message);
}

pub fn shell_quote(value: &str) -> String {
    if value.is_empty() {
        return "''".to_string();
    }

    // Check if quoting is needed
    let needs_quoting = value.chars().any(|c| {
        matches!(
            c,
            ' ' | '\t'
                | '\n'
                | '\r'
                | '"'
                | '\''
                | '\\'
                | '$'
                | '`'
                | '('
                | ')'
                | '['
                | ']'
                | '{'
                | '}'
                | '|'
                | '&'
                | ';'
                | '<'
                | '>'
                | '*'
                | '?'
                | '~'
        )
    });

    if !needs_quoting {
        return value.to_string();
    }

    // Use single quotes and escape any single quotes in the value
    let escaped = value.replace('\'', "'\"'\"'");
    format!("'{}'", escaped)
}

pub fn format_json_output<T: serde::Serialize>(data: &T) -> Result<String, EnvupError> {
    Ok(serde_json::to_string_pretty(data)?)
}
