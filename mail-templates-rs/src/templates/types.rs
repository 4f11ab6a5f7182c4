//! Template identifiers and render contexts

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;
use std::sync::OnceLock;

use serde::{Deserialize, Serialize};

use crate::document::Document;
use crate::error::TemplateError;
use crate::templates::{purchase_receipt, verify_email};

/// Identifier of a built-in transactional email template
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum TemplateId {
    /// Receipt sent after a marketplace purchase
    PurchaseReceipt,
    /// Email-address verification message
    VerifyEmail,
}

impl TemplateId {
    pub const ALL: [TemplateId; 2] = [TemplateId::PurchaseReceipt, TemplateId::VerifyEmail];

    /// Wire identifier used by the mailing pipeline
    pub fn as_str(&self) -> &'static str {
        match self {
            TemplateId::PurchaseReceipt => "purchase-receipt",
            TemplateId::VerifyEmail => "verify-email",
        }
    }

    /// Parse a wire identifier
    pub fn parse(s: &str) -> Result<Self, TemplateError> {
        match s {
            "purchase-receipt" => Ok(TemplateId::PurchaseReceipt),
            "verify-email" => Ok(TemplateId::VerifyEmail),
            _ => Err(TemplateError::UnknownTemplate(s.to_string())),
        }
    }

    /// Placeholder slot names this template declares. Every slot must be
    /// supplied at render time.
    pub fn slots(&self) -> &'static [&'static str] {
        match self {
            TemplateId::PurchaseReceipt => &[
                "RESOURCE_NAME",
                "RESOURCE_NAME_LOWER",
                "RESOURCE_PURCHASE_PRICE",
                "RESOURCE_MARKETPLACE",
                "RESOURCE_TRANSACTION_ID",
                "RESOURCE_TRANSACTION_TIME",
            ],
            TemplateId::VerifyEmail => &["USERNAME", "VERIFY_URL", "VERIFY_CODE"],
        }
    }

    /// The template's document tree, built once per process
    pub fn document(&self) -> &'static Document {
        match self {
            TemplateId::PurchaseReceipt => {
                static DOC: OnceLock<Document> = OnceLock::new();
                DOC.get_or_init(purchase_receipt::document)
            }
            TemplateId::VerifyEmail => {
                static DOC: OnceLock<Document> = OnceLock::new();
                DOC.get_or_init(verify_email::document)
            }
        }
    }
}

impl fmt::Display for TemplateId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TemplateId {
    type Err = TemplateError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        TemplateId::parse(s)
    }
}

/// Per-send mapping of placeholder slot names to their substitution values.
///
/// Constructed fresh for each outgoing email and consumed by a single render
/// call. Keys that match no slot in the chosen template are ignored.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RenderContext {
    values: BTreeMap<String, String>,
}

impl RenderContext {
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style insert
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.values.insert(name.into(), value.into());
    }

    pub fn get(&self, name: &str) -> Option<&str> {
        self.values.get(name).map(String::as_str)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.values.contains_key(name)
    }

    pub fn values(&self) -> &BTreeMap<String, String> {
        &self.values
    }
}

impl From<BTreeMap<String, String>> for RenderContext {
    fn from(values: BTreeMap<String, String>) -> Self {
        Self { values }
    }
}
