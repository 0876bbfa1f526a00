use std::fs;
use std::io::Write;
use std::path::PathBuf;

use mdoc::md::Encoder;

use crate::cmd::Result;
use crate::cmd::util::json_to_value;

#[derive(clap::Args)]
pub struct Args {
	/// JSON document to render.
	pub path: PathBuf,
	/// Write output to a file instead of stdout.
	#[arg(long)]
	pub out: Option<PathBuf>,
}

/// Render a JSON document as a Markdown outline.
pub fn run(args: Args) -> Result<()> {
	let Args { path, out } = args;

	let text = fs::read_to_string(&path)?;
	let json: serde_json::Value = serde_json::from_str(&text)?;
	let value = json_to_value(&json);

	let mut rendered = Vec::new();
	Encoder::new(&mut rendered).encode(&value)?;
	rendered.push(b'\n');

	match out {
		Some(out) => fs::write(out, &rendered)?,
		None => std::io::stdout().write_all(&rendered)?,
	}

	Ok(())
}
