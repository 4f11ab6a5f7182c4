//! mail-templates-rs: Transactional email templates for William278.net
//!
//! Renders the static transactional emails (purchase receipt, email
//! verification) from data-driven document trees with inline styles,
//! substituting `%%_NAME_%%` placeholder tokens with per-send values.
//!
//! # Features
//!
//! - **Templates**: fixed layout, copy, and palette defined once at build
//!   time as typed node trees with separate style maps
//! - **Rendering**: pure, synchronous, all-or-nothing; caller-supplied values
//!   are HTML-escaped on substitution
//! - **Messages**: subject lines, sender identity, and full MIME assembly
//!   for the mailing pipeline
//! - **Verification**: expiring one-shot verification codes
//!
//! Transport, delivery retries, and bounce handling belong to the caller.
//!
//! # Example
//!
//! ```
//! use mail_templates_rs::templates::{RenderContext, TemplateId, TemplateRenderer};
//!
//! let ctx = RenderContext::new()
//!     .with("USERNAME", "alice")
//!     .with("VERIFY_URL", "https://william278.net/api/v1/users/alice/email/482913")
//!     .with("VERIFY_CODE", "482913");
//!
//! let html = TemplateRenderer::render(TemplateId::VerifyEmail, &ctx)?;
//! assert!(html.contains("@alice"));
//! # Ok::<(), mail_templates_rs::error::TemplateError>(())
//! ```
//!
//! # Modules
//!
//! - [`document`]: node tree model and HTML serialization
//! - [`templates`]: built-in template definitions and the renderer
//! - [`message`]: outbound message assembly
//! - [`verification`]: verification-code lifecycle
//! - [`error`]: error types and handling

pub mod document;
pub mod error;
pub mod message;
pub mod templates;
pub mod verification;

pub use error::{Result, TemplateError};
pub use message::{ComposedEmail, MessageComposer, Receipt, SenderConfig};
pub use templates::{RenderContext, TemplateId, TemplateRenderer};
pub use verification::VerificationCodes;
