use handlebars::Handlebars;
use thiserror::Error;

use crate::render::LetterDocument;

const LETTER_TEMPLATE: &str = include_str!("../templates/letter.html.hbs");
const LETTER_TEMPLATE_NAME: &str = "letter";

#[derive(Debug, Error)]
pub enum TemplateError {
    #[error("failed to compile letter template: {0}")]
    Compile(#[from] handlebars::TemplateError),
    #[error("failed to render letter template: {0}")]
    Render(#[from] handlebars::RenderError),
}

/// Handlebars registry with the letter page template installed.
///
/// The rendered page is self-contained: inline styles, plus an `@media print`
/// block that hides the on-screen chrome so the host browser's print
/// facility produces just the letter.
pub struct TemplateEngine {
    registry: Handlebars<'static>,
}

impl TemplateEngine {
    pub fn new() -> Result<Self, TemplateError> {
        let mut registry = Handlebars::new();
        registry.set_strict_mode(true);
        registry.register_template_string(LETTER_TEMPLATE_NAME, LETTER_TEMPLATE)?;
        Ok(Self { registry })
    }

    /// Render the standalone HTML page for the letter.
    pub fn render_html(&self, letter: &LetterDocument) -> Result<String, TemplateError> {
        Ok(self.registry.render(LETTER_TEMPLATE_NAME, letter)?)
    }
}
