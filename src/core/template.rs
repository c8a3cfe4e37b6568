//! Command-template rendering.
//!
//! The template supports exactly two substitution keys, `{query}` (the
//! current input file) and `{cwd}` (the submission working directory,
//! captured once per batch). `{{` and `}}` escape to literal braces. Any
//! other placeholder aborts the whole run before anything else is
//! submitted.

use crate::error::{Error, Result};

/// Values available to a template for one rendered call.
#[derive(Debug, Clone)]
pub struct TemplateContext<'a> {
    pub query: &'a str,
    pub cwd: &'a str,
}

/// Render `template` with the given context.
pub fn render(template: &str, ctx: &TemplateContext<'_>) -> Result<String> {
    let mut out = String::with_capacity(template.len() + ctx.query.len());
    let mut chars = template.chars().peekable();

    while let Some(c) = chars.next() {
        match c {
            '{' => {
                if chars.peek() == Some(&'{') {
                    chars.next();
                    out.push('{');
                    continue;
                }
                let mut name = String::new();
                loop {
                    match chars.next() {
                        Some('}') => break,
                        Some(c) => name.push(c),
                        None => {
                            return Err(Error::Template(format!(
                                "unterminated placeholder {{{name}"
                            )));
                        }
                    }
                }
                match name.as_str() {
                    "query" => out.push_str(ctx.query),
                    "cwd" => out.push_str(ctx.cwd),
                    _ => return Err(Error::UnknownPlaceholder { name }),
                }
            }
            '}' => {
                if chars.peek() == Some(&'}') {
                    chars.next();
                    out.push('}');
                } else {
                    return Err(Error::Template("unmatched '}' in template".to_string()));
                }
            }
            c => out.push(c),
        }
    }

    Ok(out)
}
