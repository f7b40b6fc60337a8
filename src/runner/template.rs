//! Placeholder rendering for descriptions and commands
//!
//! A placeholder is the open delimiter, a variable name and the close
//! delimiter, e.g. `{{env}}` or `{{ .env }}` with the default pair.
//!
//! Rules:
//! - text outside placeholders (including a stray close delimiter) is copied as-is
//! - whitespace around the name and a single leading `.` are ignored
//! - a variable that is not defined renders as the empty string
//! - an unclosed, empty or malformed placeholder is an error

use crate::config::Delimiters;
use crate::error::{TemplateError, TemplateResult};
use regex::Regex;
use std::collections::HashMap;
use std::sync::LazyLock;

static VARIABLE_NAME: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z_][A-Za-z0-9_-]*$").expect("variable name pattern is valid")
});

/// Render `template` against `vars`
pub fn render(
    template: &str,
    delimiters: &Delimiters,
    vars: &HashMap<String, String>,
) -> TemplateResult<String> {
    let (open, close) = (delimiters.open.as_str(), delimiters.close.as_str());
    let mut output = String::with_capacity(template.len());
    let mut rest = template;
    let mut offset = 0;

    while let Some(start) = rest.find(open) {
        output.push_str(&rest[..start]);

        let position = offset + start;
        let inner = &rest[start + open.len()..];
        let end = inner
            .find(close)
            .ok_or(TemplateError::Unclosed { position })?;

        let name = placeholder_name(&inner[..end], position)?;
        if let Some(value) = vars.get(name) {
            output.push_str(value);
        }

        let consumed = start + open.len() + end + close.len();
        rest = &rest[consumed..];
        offset += consumed;
    }

    output.push_str(rest);
    Ok(output)
}

fn placeholder_name(token: &str, position: usize) -> TemplateResult<&str> {
    let trimmed = token.trim();
    if trimmed.is_empty() {
        return Err(TemplateError::EmptyPlaceholder { position });
    }

    let name = trimmed.strip_prefix('.').unwrap_or(trimmed);
    if !VARIABLE_NAME.is_match(name) {
        return Err(TemplateError::InvalidName {
            position,
            name: trimmed.to_string(),
        });
    }

    Ok(name)
}
