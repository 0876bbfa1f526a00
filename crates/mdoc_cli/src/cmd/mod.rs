use thiserror::Error;

/// JSON document rendering command.
pub mod render;
/// Shared input conversion helpers.
pub mod util;

/// CLI-local result type.
pub type Result<T> = std::result::Result<T, CliError>;

/// Errors surfaced by CLI commands.
#[derive(Debug, Error)]
pub enum CliError {
	/// Rendering failed.
	#[error(transparent)]
	Md(#[from] mdoc::md::MdError),
	/// Input document is not valid JSON.
	#[error("json: {0}")]
	Json(#[from] serde_json::Error),
	/// Filesystem read or write failure.
	#[error("io: {0}")]
	Io(#[from] std::io::Error),
}
