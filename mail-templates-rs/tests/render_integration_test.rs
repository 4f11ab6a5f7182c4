//! Integration tests for the template rendering contract

use mail_templates_rs::templates::{RenderContext, TemplateId, TemplateRenderer};
use mail_templates_rs::TemplateError;

fn receipt_ctx() -> RenderContext {
    RenderContext::new()
        .with("RESOURCE_NAME", "SuperPlugin")
        .with("RESOURCE_NAME_LOWER", "superplugin")
        .with("RESOURCE_PURCHASE_PRICE", "$9.99")
        .with("RESOURCE_MARKETPLACE", "Polymart")
        .with("RESOURCE_TRANSACTION_ID", "TX123")
        .with("RESOURCE_TRANSACTION_TIME", "2024-01-01")
}

fn verify_ctx() -> RenderContext {
    RenderContext::new()
        .with("USERNAME", "alice")
        .with("VERIFY_URL", "https://x/y")
        .with("VERIFY_CODE", "482913")
}

fn complete_ctx(id: TemplateId) -> RenderContext {
    match id {
        TemplateId::PurchaseReceipt => receipt_ctx(),
        TemplateId::VerifyEmail => verify_ctx(),
    }
}

#[test]
fn test_purchase_receipt_example() {
    let html = TemplateRenderer::render(TemplateId::PurchaseReceipt, &receipt_ctx()).unwrap();

    assert!(html.contains("<strong>SuperPlugin</strong>"));
    assert!(html.contains("Price: $9.99"));
    assert!(html.contains("https://thread-assets.william278.net/superplugin_icon.png"));
    assert!(html.contains("Marketplace: Polymart"));
    assert!(html.contains("ID: TX123"));
    assert!(html.contains("Time: 2024-01-01"));
}

#[test]
fn test_verify_email_example() {
    let html = TemplateRenderer::render(TemplateId::VerifyEmail, &verify_ctx()).unwrap();

    assert!(html.contains("@alice"));
    assert!(html.contains("href=\"https://x/y\""));
    assert!(html.contains("482913"));
}

#[test]
fn test_no_residual_tokens_for_complete_contexts() {
    for id in TemplateId::ALL {
        let html = TemplateRenderer::render(id, &complete_ctx(id)).unwrap();
        assert!(!html.contains("%%_"), "residual token in {id} output");
        assert!(!html.contains("_%%"), "residual token in {id} output");
    }
}

#[test]
fn test_rendering_is_idempotent() {
    for id in TemplateId::ALL {
        let ctx = complete_ctx(id);
        let first = TemplateRenderer::render(id, &ctx).unwrap();
        let second = TemplateRenderer::render(id, &ctx).unwrap();
        assert_eq!(first, second, "non-deterministic output for {id}");
    }
}

#[test]
fn test_each_missing_slot_is_reported_by_name() {
    for id in TemplateId::ALL {
        let full = complete_ctx(id);
        for omitted in id.slots() {
            let mut ctx = RenderContext::new();
            for slot in id.slots() {
                if slot != omitted {
                    ctx.set(*slot, full.get(slot).unwrap());
                }
            }

            let err = TemplateRenderer::render(id, &ctx).unwrap_err();
            match err {
                TemplateError::MissingPlaceholder(name) => assert_eq!(name, *omitted),
                other => panic!("expected MissingPlaceholder, got {other}"),
            }
        }
    }
}

#[test]
fn test_unknown_template_identifier() {
    let err = TemplateRenderer::render_named("password-reset", &receipt_ctx()).unwrap_err();
    assert!(matches!(err, TemplateError::UnknownTemplate(s) if s == "password-reset"));
}

#[test]
fn test_output_is_a_complete_document() {
    for id in TemplateId::ALL {
        let html = TemplateRenderer::render(id, &complete_ctx(id)).unwrap();

        assert!(html.starts_with("<!DOCTYPE html>"));
        assert!(html.ends_with("</body></html>"));
        assert!(html.contains("<meta name=\"color-scheme\" content=\"dark\"/>"));
        // Inline styles only: no stylesheet links or style blocks
        assert!(!html.contains("<link"));
        assert!(!html.contains("<style"));
    }
}

#[test]
fn test_context_deserializes_from_pipeline_json() {
    let ctx: RenderContext = serde_json::from_str(
        r#"{
            "USERNAME": "alice",
            "VERIFY_URL": "https://x/y",
            "VERIFY_CODE": "482913"
        }"#,
    )
    .unwrap();

    let html = TemplateRenderer::render(TemplateId::VerifyEmail, &ctx).unwrap();
    assert!(html.contains("@alice"));
}

#[test]
fn test_template_id_deserializes_kebab_case() {
    let id: TemplateId = serde_json::from_str("\"purchase-receipt\"").unwrap();
    assert_eq!(id, TemplateId::PurchaseReceipt);
}

#[test]
fn test_html_special_values_are_escaped() {
    let ctx = receipt_ctx().with("RESOURCE_TRANSACTION_ID", "A&B<X>");
    let html = TemplateRenderer::render(TemplateId::PurchaseReceipt, &ctx).unwrap();

    assert!(html.contains("ID: A&amp;B&lt;X&gt;"));
    assert!(!html.contains("A&B<X>"));
}
