use thiserror::Error;

#[derive(Error, Debug)]
pub enum TemplateError {
    #[error("Unknown template: {0}")]
    UnknownTemplate(String),

    #[error("Missing placeholder value: {0}")]
    MissingPlaceholder(String),

    #[error("Message assembly error: {0}")]
    Message(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, TemplateError>;
