use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, MdError>;

/// Errors produced while rendering a value tree as Markdown.
#[derive(Debug, Error)]
pub enum MdError {
	/// Output sink rejected a write.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
	/// Custom renderer reported a failure.
	#[error("custom render: {reason}")]
	CustomRender {
		/// Failure description from the renderer.
		reason: String,
	},
}
