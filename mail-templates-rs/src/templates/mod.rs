//! Built-in transactional email templates
//!
//! Static template definitions (purchase receipt, email verification) and the
//! renderer that binds per-send placeholder values to them.

pub mod renderer;
pub mod types;

mod purchase_receipt;
mod verify_email;

pub use renderer::TemplateRenderer;
pub use types::{RenderContext, TemplateId};
