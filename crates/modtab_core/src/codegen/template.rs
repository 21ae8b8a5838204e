//! Placeholder substitution for generated C sources.
//!
//! Implements the template language used by the shipped resources: `{name}`
//! expands to a bound value, `{{` and `}}` produce literal braces. Unknown
//! placeholders and unmatched braces are rejected so a template edit cannot
//! silently leak placeholder text into generated code.

use std::error::Error;
use std::fmt::{Display, Formatter};

/// Substitutes `bindings` into `template` in one pass.
pub fn substitute(template: &str, bindings: &[(&str, &str)]) -> Result<String, TemplateError> {
    let mut out = String::with_capacity(template.len());
    let mut chars = template.char_indices().peekable();

    while let Some((index, c)) = chars.next() {
        match c {
            '{' => {
                if matches!(chars.peek(), Some((_, '{'))) {
                    chars.next();
                    out.push('{');
                    continue;
                }
                let mut name = String::new();
                let mut closed = false;
                for (_, inner) in chars.by_ref() {
                    if inner == '}' {
                        closed = true;
                        break;
                    }
                    name.push(inner);
                }
                if !closed {
                    return Err(TemplateError::UnmatchedBrace { index });
                }
                match bindings.iter().find(|(key, _)| *key == name.as_str()) {
                    Some((_, value)) => out.push_str(value),
                    None => return Err(TemplateError::UnknownPlaceholder(name)),
                }
            }
            '}' => {
                if matches!(chars.peek(), Some((_, '}'))) {
                    chars.next();
                    out.push('}');
                    continue;
                }
                return Err(TemplateError::UnmatchedBrace { index });
            }
            other => out.push(other),
        }
    }

    Ok(out)
}

/// Template substitution errors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TemplateError {
    /// The template names a placeholder with no binding.
    UnknownPlaceholder(String),
    /// A `{` or `}` is neither doubled nor part of a placeholder.
    UnmatchedBrace { index: usize },
}

impl Display for TemplateError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownPlaceholder(name) => {
                write!(f, "template names unknown placeholder: `{name}`")
            }
            Self::UnmatchedBrace { index } => {
                write!(f, "template has unmatched brace at byte {index}")
            }
        }
    }
}

impl Error for TemplateError {}
