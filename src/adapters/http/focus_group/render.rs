//! HTML page rendering.
//!
//! The whole application is a single page: the input form, optionally
//! followed by the focus group results. The template is embedded in the
//! binary and compiled once into a shared minijinja environment.

use minijinja::{context, Environment, Value};
use once_cell::sync::Lazy;
use thiserror::Error;

use crate::domain::focus_group::FocusGroupResult;

/// Template environment, compiled once. The `.html` name keeps minijinja's
/// default auto-escaping active for interpolated result text.
static TEMPLATES: Lazy<Environment<'static>> = Lazy::new(|| {
    let mut env = Environment::new();
    env.add_template("index.html", include_str!("templates/index.html"))
        .expect("embedded index template is valid");
    env
});

/// Errors raised while rendering the page.
#[derive(Debug, Error)]
pub enum RenderError {
    #[error("template rendering failed: {0}")]
    Template(#[from] minijinja::Error),
}

/// Renders the main page, with the results section when a simulation has run.
pub fn render_index(result: Option<&FocusGroupResult>) -> Result<String, RenderError> {
    let template = TEMPLATES.get_template("index.html")?;

    let result_value = match result {
        Some(result) => Value::from_serialize(result),
        None => Value::from(()),
    };

    let html = template.render(context! { result => result_value })?;
    Ok(html)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::focus_group::PersonaResponse;

    fn sample_result() -> FocusGroupResult {
        FocusGroupResult {
            product: "An AI recipe app".to_string(),
            responses: vec![
                PersonaResponse {
                    name: "Marco Rossi".to_string(),
                    role: "38 • Professional Chef".to_string(),
                    text: "I'd need to taste it first.".to_string(),
                },
                PersonaResponse {
                    name: "Jennifer Walsh".to_string(),
                    role: "34 • Working Mother of Two".to_string(),
                    text: "If it saves me an hour a week, I'm in.".to_string(),
                },
            ],
            insight: "Lead with the free trial.".to_string(),
        }
    }

    #[test]
    fn renders_form_without_results() {
        let html = render_index(None).unwrap();
        assert!(html.contains("FocusGroupAI"));
        assert!(html.contains("Step 1: Describe Your Product"));
        assert!(!html.contains("Focus Group Results"));
    }

    #[test]
    fn renders_results_section_when_present() {
        let result = sample_result();
        let html = render_index(Some(&result)).unwrap();

        assert!(html.contains("Focus Group Results"));
        assert!(html.contains("Product tested: An AI recipe app"));
        assert!(html.contains("Marco Rossi"));
        assert!(html.contains("38 • Professional Chef"));
        assert!(html.contains("Lead with the free trial."));
    }

    #[test]
    fn result_text_is_html_escaped() {
        let mut result = sample_result();
        result.responses[0].text = "<script>alert('x')</script>".to_string();

        let html = render_index(Some(&result)).unwrap();
        assert!(!html.contains("<script>alert"));
        assert!(html.contains("&lt;script&gt;"));
    }
}
