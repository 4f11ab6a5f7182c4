//! Template rendering with placeholder substitution

use std::collections::BTreeSet;

use tracing::debug;

use crate::document::render_document;
use crate::error::{Result, TemplateError};
use crate::templates::types::{RenderContext, TemplateId};

/// Renders the built-in templates by binding a [`RenderContext`] to a
/// [`TemplateId`].
///
/// Rendering is pure and all-or-nothing: the context is validated against the
/// template's declared slots before any output is produced, so a failed call
/// never yields a partial document. Context keys that match no slot are
/// ignored. Supplied values are HTML-escaped on substitution (see
/// [`crate::document::html`]).
pub struct TemplateRenderer;

impl TemplateRenderer {
    /// Render a template to a complete HTML document string.
    ///
    /// # Errors
    /// [`TemplateError::MissingPlaceholder`] if the context lacks a value for
    /// any slot the template declares.
    pub fn render(id: TemplateId, ctx: &RenderContext) -> Result<String> {
        for slot in id.slots() {
            if !ctx.contains(slot) {
                return Err(TemplateError::MissingPlaceholder(slot.to_string()));
            }
        }

        let html = render_document(id.document(), ctx.values());
        debug!(template = %id, bytes = html.len(), "rendered template");
        Ok(html)
    }

    /// Render by wire identifier, as received from the mailing pipeline.
    ///
    /// # Errors
    /// [`TemplateError::UnknownTemplate`] for an unrecognized identifier, or
    /// any error from [`TemplateRenderer::render`].
    pub fn render_named(id: &str, ctx: &RenderContext) -> Result<String> {
        Self::render(TemplateId::parse(id)?, ctx)
    }

    /// Extract the placeholder slot names a template's content declares
    pub fn extract_placeholders(id: TemplateId) -> BTreeSet<String> {
        id.document().placeholders()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verify_ctx() -> RenderContext {
        RenderContext::new()
            .with("USERNAME", "alice")
            .with("VERIFY_URL", "https://x/y")
            .with("VERIFY_CODE", "482913")
    }

    #[test]
    fn test_render_verify_email() {
        let html = TemplateRenderer::render(TemplateId::VerifyEmail, &verify_ctx()).unwrap();

        assert!(html.contains("@alice"));
        assert!(html.contains("href=\"https://x/y\""));
        assert!(html.contains("482913"));
        assert!(!html.contains("%%_"));
    }

    #[test]
    fn test_render_is_idempotent() {
        let ctx = verify_ctx();
        let first = TemplateRenderer::render(TemplateId::VerifyEmail, &ctx).unwrap();
        let second = TemplateRenderer::render(TemplateId::VerifyEmail, &ctx).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn test_render_missing_placeholder() {
        let ctx = RenderContext::new()
            .with("USERNAME", "alice")
            .with("VERIFY_URL", "https://x/y");

        let err = TemplateRenderer::render(TemplateId::VerifyEmail, &ctx).unwrap_err();
        assert!(matches!(err, TemplateError::MissingPlaceholder(s) if s == "VERIFY_CODE"));
    }

    #[test]
    fn test_render_named_unknown_template() {
        let err = TemplateRenderer::render_named("weekly-digest", &verify_ctx()).unwrap_err();
        assert!(matches!(err, TemplateError::UnknownTemplate(s) if s == "weekly-digest"));
    }

    #[test]
    fn test_extra_context_keys_ignored() {
        let ctx = verify_ctx().with("UNUSED", "whatever");
        let html = TemplateRenderer::render(TemplateId::VerifyEmail, &ctx).unwrap();
        assert!(!html.contains("whatever"));
    }

    #[test]
    fn test_supplied_values_are_escaped() {
        let ctx = verify_ctx().with("USERNAME", "a<b>&c");
        let html = TemplateRenderer::render(TemplateId::VerifyEmail, &ctx).unwrap();

        assert!(html.contains("@a&lt;b&gt;&amp;c"));
        assert!(!html.contains("@a<b>"));
    }

    #[test]
    fn test_extract_placeholders() {
        let slots = TemplateRenderer::extract_placeholders(TemplateId::PurchaseReceipt);
        assert!(slots.contains("RESOURCE_NAME"));
        assert!(slots.contains("RESOURCE_TRANSACTION_TIME"));
        assert_eq!(slots.len(), 6);
    }
}
