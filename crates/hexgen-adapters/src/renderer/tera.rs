//! Tera-backed template renderer.
//!
//! Rendering is strict: Tera fails on variables the context does not
//! define, which is exactly the "templates fail loudly on missing keys"
//! contract the context builder relies on.

use std::error::Error as _;

use hexgen_core::{
    application::ApplicationError,
    application::ports::TemplateRenderer,
    domain::GeneratorContext,
    error::HexgenResult,
};
use tracing::instrument;

/// Production renderer using one-off Tera templates.
#[derive(Debug, Clone, Copy, Default)]
pub struct TeraRenderer;

impl TeraRenderer {
    pub fn new() -> Self {
        Self
    }
}

impl TemplateRenderer for TeraRenderer {
    #[instrument(skip_all, fields(template = name))]
    fn render(
        &self,
        name: &str,
        source: &str,
        context: &GeneratorContext,
    ) -> HexgenResult<String> {
        let mut engine = tera::Tera::default();
        engine
            .add_raw_template(name, source)
            .map_err(|e| template_error(name, &e))?;

        let mut ctx = tera::Context::new();
        for (key, value) in context.as_map() {
            ctx.insert(key, value);
        }

        engine.render(name, &ctx).map_err(|e| template_error(name, &e))
    }
}

/// Tera wraps the useful message in a source chain; flatten it.
fn template_error(name: &str, e: &tera::Error) -> hexgen_core::error::HexgenError {
    let mut reason = e.to_string();
    let mut source = e.source();
    while let Some(inner) = source {
        reason.push_str(": ");
        reason.push_str(&inner.to_string());
        source = inner.source();
    }
    ApplicationError::Template {
        template: name.to_string(),
        reason,
    }
    .into()
}
