use std::collections::HashMap;
use std::sync::OnceLock;

use regex::Regex;
use smartsdlc_core::Value;

fn placeholder_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\{\{\s*(\w+)\s*\}\}").expect("valid placeholder pattern"))
}

/// A prompt with `{{ var }}` placeholders. Unknown placeholders render
/// empty; string variables render unquoted, anything else in its JSON form.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PromptTemplate {
    template: String,
}

impl PromptTemplate {
    pub fn new(template: impl Into<String>) -> Self {
        Self {
            template: template.into(),
        }
    }

    pub fn render(&self, vars: &HashMap<String, Value>) -> String {
        placeholder_pattern()
            .replace_all(&self.template, |caps: &regex::Captures| {
                match vars.get(&caps[1]) {
                    Some(value) => value
                        .as_str()
                        .map(str::to_string)
                        .unwrap_or_else(|| value.to_string()),
                    None => String::new(),
                }
            })
            .into_owned()
    }

    /// Render a template whose only placeholder is `key`.
    pub fn render_one(&self, key: &str, value: impl Into<String>) -> String {
        let mut vars = HashMap::new();
        vars.insert(key.to_string(), Value::String(value.into()));
        self.render(&vars)
    }

    pub fn as_str(&self) -> &str {
        &self.template
    }
}
