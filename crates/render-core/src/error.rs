use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Document was never started with begin_document")]
    NotStarted,
    #[error("PDF processing error: {0}")]
    Pdf(String),
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Render error: {0}")]
    Other(String),
}
