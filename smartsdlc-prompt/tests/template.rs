use std::collections::HashMap;

use smartsdlc_core::Value;
use smartsdlc_prompt::PromptTemplate;

#[test]
fn renders_template_with_vars() {
    let tmpl = PromptTemplate::new("Hello {{name}}");
    let mut vars = HashMap::new();
    vars.insert("name".to_string(), Value::from("SDLC"));
    assert_eq!(tmpl.render(&vars), "Hello SDLC");
}

#[test]
fn does_not_confuse_overlapping_keys() {
    let tmpl = PromptTemplate::new("{{name}} {{fullname}}");
    let mut vars = HashMap::new();
    vars.insert("name".to_string(), Value::from("X"));
    vars.insert("fullname".to_string(), Value::from("Y"));
    assert_eq!(tmpl.render(&vars), "X Y");
}

#[test]
fn unknown_placeholder_renders_empty() {
    let tmpl = PromptTemplate::new("before {{missing}} after");
    assert_eq!(tmpl.render(&HashMap::new()), "before  after");
}

#[test]
fn non_string_values_render_in_json_form() {
    let tmpl = PromptTemplate::new("count: {{n}}");
    let mut vars = HashMap::new();
    vars.insert("n".to_string(), Value::from(3));
    assert_eq!(tmpl.render(&vars), "count: 3");
}

#[test]
fn render_one_interpolates_single_variable() {
    let tmpl = PromptTemplate::new("Explain:\n{{input}}");
    assert_eq!(tmpl.render_one("input", "fn main() {}"), "Explain:\nfn main() {}");
}

#[test]
fn placeholder_allows_inner_whitespace() {
    let tmpl = PromptTemplate::new("{{ name }}");
    let mut vars = HashMap::new();
    vars.insert("name".to_string(), Value::from("Z"));
    assert_eq!(tmpl.render(&vars), "Z");
}

#[test]
fn braces_in_substituted_input_stay_literal() {
    let tmpl = PromptTemplate::new("Fix:\n{{input}}");
    let rendered = tmpl.render_one("input", "if (x) {{ y(); }}");
    assert_eq!(rendered, "Fix:\nif (x) {{ y(); }}");
}
