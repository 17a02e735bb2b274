use crate::utils::error::{GenError, Result};
use std::collections::HashMap;

const OPEN: &str = "{{";
const CLOSE: &str = "}}";

#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment<'a> {
    Text(&'a str),
    Placeholder(&'a str),
}

/// A text template with `{{name}}` placeholders.
///
/// Parsing happens once, up front, so a broken template is reported before
/// any value is substituted. Substituted values are written out verbatim and
/// never scanned for placeholders themselves.
#[derive(Debug, Clone)]
pub struct Template<'a> {
    name: &'static str,
    segments: Vec<Segment<'a>>,
}

impl<'a> Template<'a> {
    pub fn parse(name: &'static str, source: &'a str) -> Result<Self> {
        let mut segments = Vec::new();
        let mut rest = source;
        let mut offset = 0;

        while let Some(start) = rest.find(OPEN) {
            if start > 0 {
                segments.push(text_segment(name, &rest[..start])?);
            }

            let after_open = &rest[start + OPEN.len()..];
            let end = after_open.find(CLOSE).ok_or_else(|| GenError::TemplateError {
                message: format!(
                    "template '{}': unclosed placeholder at byte {}",
                    name,
                    offset + start
                ),
            })?;

            let key = after_open[..end].trim();
            if key.is_empty() || !key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
                return Err(GenError::TemplateError {
                    message: format!(
                        "template '{}': invalid placeholder '{}' at byte {}",
                        name,
                        &after_open[..end],
                        offset + start
                    ),
                });
            }
            segments.push(Segment::Placeholder(key));

            let consumed = start + OPEN.len() + end + CLOSE.len();
            offset += consumed;
            rest = &rest[consumed..];
        }

        if !rest.is_empty() {
            segments.push(text_segment(name, rest)?);
        }

        Ok(Self { name, segments })
    }

    pub fn render(&self, values: &HashMap<&str, String>) -> Result<String> {
        let mut out = String::new();
        for segment in &self.segments {
            match segment {
                Segment::Text(text) => out.push_str(text),
                Segment::Placeholder(key) => {
                    let value = values.get(*key).ok_or_else(|| GenError::TemplateError {
                        message: format!("template '{}': no value for '{}'", self.name, key),
                    })?;
                    out.push_str(value);
                }
            }
        }
        Ok(out)
    }
}

fn text_segment<'a>(name: &str, text: &'a str) -> Result<Segment<'a>> {
    if text.contains(CLOSE) {
        return Err(GenError::TemplateError {
            message: format!("template '{}': stray '{}' without opening", name, CLOSE),
        });
    }
    Ok(Segment::Text(text))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn values(pairs: &[(&'static str, &str)]) -> HashMap<&'static str, String> {
        pairs.iter().map(|(k, v)| (*k, v.to_string())).collect()
    }

    #[test]
    fn test_render_substitutes_placeholders() {
        let tmpl = Template::parse("t", "id: {{id}}, name: {{ name }};").unwrap();
        let out = tmpl.render(&values(&[("id", "a"), ("name", "A")])).unwrap();
        assert_eq!(out, "id: a, name: A;");
    }

    #[test]
    fn test_single_braces_are_text() {
        let tmpl = Template::parse("t", "S {\n    v: {{v}},\n}").unwrap();
        let out = tmpl.render(&values(&[("v", "1")])).unwrap();
        assert_eq!(out, "S {\n    v: 1,\n}");
    }

    #[test]
    fn test_values_are_not_rescanned() {
        let tmpl = Template::parse("t", "{{a}}{{b}}").unwrap();
        let out = tmpl.render(&values(&[("a", "{{b}}"), ("b", "x")])).unwrap();
        assert_eq!(out, "{{b}}x");
    }

    #[test]
    fn test_repeated_placeholder() {
        let tmpl = Template::parse("t", "{{x}} and {{y}} and {{x}}").unwrap();
        let out = tmpl.render(&values(&[("x", "1"), ("y", "2")])).unwrap();
        assert_eq!(out, "1 and 2 and 1");
    }

    #[test]
    fn test_unclosed_placeholder() {
        let err = Template::parse("t", "ok {{id").unwrap_err();
        assert!(matches!(err, GenError::TemplateError { .. }));
        assert!(err.to_string().contains("unclosed"));
    }

    #[test]
    fn test_invalid_placeholder_name() {
        assert!(Template::parse("t", "{{}}").is_err());
        assert!(Template::parse("t", "{{a-b}}").is_err());
    }

    #[test]
    fn test_stray_close() {
        assert!(Template::parse("t", "a }} b").is_err());
        assert!(Template::parse("t", "a }} {{b}}").is_err());
    }

    #[test]
    fn test_missing_value() {
        let tmpl = Template::parse("t", "{{present}} {{absent}}").unwrap();
        let err = tmpl.render(&values(&[("present", "p")])).unwrap_err();
        assert!(err.to_string().contains("absent"));
    }
}
