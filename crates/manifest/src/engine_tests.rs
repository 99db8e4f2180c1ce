// SPDX-License-Identifier: BUSL-1.1
// Copyright (c) 2026 Alfred Jean LLC

use super::*;

fn ctx(pairs: &[(&str, &str)]) -> RenderContext {
    RenderContext::from_pairs(pairs.iter().copied())
}

#[yare::parameterized(
    plain      = { "name: {{ job_name }}", &[("job_name", "calm-lake-1")], "name: calm-lake-1" },
    b64        = { "token: {{ hf_token | b64encode }}", &[("hf_token", "hi")], "token: aGk=" },
    b64_empty  = { "token: {{ hf_token | b64encode }}", &[("hf_token", "")], "token: " },
    b64_none   = { "token: {{ none | b64encode }}", &[], "token: " },
    round_trip = { "{{ v | b64encode | b64decode }}", &[("v", "a:b/c")], "a:b/c" },
    no_vars    = { "kind: Service", &[], "kind: Service" },
)]
fn render_cases(source: &str, pairs: &[(&str, &str)], expected: &str) {
    let engine = TemplateEngine::new();
    assert_eq!(engine.render("t.yaml", source, &ctx(pairs)).unwrap(), expected);
}

#[test]
fn undefined_variable_is_an_error_naming_template() {
    let engine = TemplateEngine::new();
    let err = engine.render("job.yaml", "image: {{ container_imag }}", &ctx(&[])).unwrap_err();
    assert!(matches!(err, RenderError::Template { ref template, .. } if template == "job.yaml"));
    assert_eq!(err.template(), Some("job.yaml"));
    assert_eq!(
        match err {
            RenderError::Template { source, .. } => source.kind(),
            other => panic!("unexpected error: {:?}", other),
        },
        minijinja::ErrorKind::UndefinedError
    );
}

#[test]
fn syntax_error_is_an_error() {
    let engine = TemplateEngine::new();
    let err = engine.render("bad.yaml", "{{ job_name ", &ctx(&[("job_name", "x")])).unwrap_err();
    assert!(matches!(err, RenderError::Template { .. }));
}

#[test]
fn invalid_base64_in_template_fails_render() {
    let engine = TemplateEngine::new();
    let err = engine.render("t.yaml", "{{ 'nope!' | b64decode }}", &ctx(&[])).unwrap_err();
    assert!(matches!(err, RenderError::Template { .. }));
}
