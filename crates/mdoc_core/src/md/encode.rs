use std::io::Write;

use crate::md::meta::{MetaResolver, TagResolver};
use crate::md::style::{Style, StyleUnit, indent, style_unit};
use crate::md::value::{StructValue, Value};
use crate::md::Result;

/// Streaming Markdown encoder over an output sink.
pub struct Encoder<'r, W> {
	sink: W,
	resolver: &'r dyn MetaResolver,
}

impl<W: Write> Encoder<'static, W> {
	/// Encoder with the stock tag resolver.
	pub fn new(sink: W) -> Self {
		Encoder { sink, resolver: &TagResolver }
	}
}

impl<'r, W: Write> Encoder<'r, W> {
	/// Encoder with a caller-supplied metadata resolver.
	pub fn with_resolver(sink: W, resolver: &'r dyn MetaResolver) -> Self {
		Encoder { sink, resolver }
	}

	/// Render one value tree to the sink.
	///
	/// Structs and mappings start at heading style and depth zero, scalars
	/// render as bare text, and an absent value renders nothing. Partial
	/// output already written when an error occurs is not rolled back.
	pub fn encode(&mut self, value: &Value) -> Result<()> {
		match value {
			Value::Custom(custom) => {
				let bytes = custom.markdown()?;
				self.sink.write_all(&bytes)?;
			}
			Value::Null => {}
			Value::Struct(item) => {
				struct_to_markdown(&mut self.sink, self.resolver, item, Style::Heading, 0)?;
			}
			Value::Seq(items) => {
				seq_to_markdown(&mut self.sink, self.resolver, items, 0)?;
			}
			Value::Map(entries) => {
				map_to_markdown(&mut self.sink, self.resolver, entries, Style::Heading, 0)?;
			}
			scalar => write_scalar(&mut self.sink, scalar)?,
		}
		Ok(())
	}

	/// Consume the encoder and return the sink.
	pub fn into_inner(self) -> W {
		self.sink
	}
}

/// Render a value tree as Markdown into `w` using the stock tag resolver.
pub fn to_writer<W: Write>(w: W, value: &Value) -> Result<()> {
	Encoder::new(w).encode(value)
}

/// Render a value tree as Markdown bytes.
pub fn to_vec(value: &Value) -> Result<Vec<u8>> {
	let mut out = Vec::new();
	Encoder::new(&mut out).encode(value)?;
	Ok(out)
}

/// Render a value tree as Markdown text.
///
/// Bytes from custom renderers that are not valid UTF-8 are replaced.
pub fn to_string(value: &Value) -> Result<String> {
	Ok(String::from_utf8_lossy(&to_vec(value)?).into_owned())
}

/// Render struct fields in declaration order, returning the emitted count.
///
/// Absent fields are skipped before the omit policy is consulted, omitted
/// fields consume no separator slot, and anonymous struct fields splice
/// their children in at the same style and depth.
fn struct_to_markdown(w: &mut dyn Write, resolver: &dyn MetaResolver, value: &StructValue, style: Style, depth: u32) -> Result<usize> {
	let mut emitted = 0_usize;

	for field in &value.fields {
		if matches!(field.value, Value::Null) {
			continue;
		}

		let meta = resolver.field_meta(field);
		if meta.omit_empty && field.value.is_empty() {
			continue;
		}

		if meta.anonymous {
			if let Value::Struct(embedded) = &field.value {
				let mut spliced = Vec::new();
				let count = struct_to_markdown(&mut spliced, resolver, embedded, style, depth)?;
				if !spliced.is_empty() {
					if emitted > 0 {
						w.write_all(b"\n\n")?;
					}
					w.write_all(&spliced)?;
				}
				emitted += count;
				continue;
			}
		}

		if emitted > 0 {
			w.write_all(b"\n\n")?;
		}

		let unit = style_unit(style, depth, emitted);
		emit_titled(w, resolver, style, &unit, &meta.title, meta.description.as_deref(), &field.value)?;
		emitted += 1;
	}

	Ok(emitted)
}

/// Render sequence elements, returning the count of non-absent elements.
///
/// Struct and mapping elements render at inline-list style on the same
/// depth, nested sequences deepen by one level, and scalars become plain
/// bullets.
fn seq_to_markdown(w: &mut dyn Write, resolver: &dyn MetaResolver, items: &[Value], depth: u32) -> Result<usize> {
	let mut emitted = 0_usize;

	for item in items {
		if matches!(item, Value::Null) {
			continue;
		}

		if emitted > 0 {
			w.write_all(b"\n\n")?;
		}

		match item {
			Value::Custom(custom) => {
				let bytes = custom.markdown()?;
				w.write_all(&bytes)?;
			}
			Value::Struct(element) => {
				struct_to_markdown(w, resolver, element, Style::InlineList, depth)?;
			}
			Value::Map(entries) => {
				map_to_markdown(w, resolver, entries, Style::InlineList, depth)?;
			}
			Value::Seq(nested) => {
				seq_to_markdown(w, resolver, nested, depth + 1)?;
			}
			scalar => {
				let unit = style_unit(Style::List, depth, emitted);
				w.write_all(unit.indent.as_bytes())?;
				w.write_all(unit.prefix.as_bytes())?;
				write_scalar(w, scalar)?;
			}
		}
		emitted += 1;
	}

	Ok(emitted)
}

/// Render mapping entries in stored order, returning the emitted count.
///
/// The key's text is the title. Mapping entries carry no metadata: every
/// present entry renders, with no description and no omit policy, unlike
/// struct fields.
fn map_to_markdown(w: &mut dyn Write, resolver: &dyn MetaResolver, entries: &[(Box<str>, Value)], style: Style, depth: u32) -> Result<usize> {
	let mut emitted = 0_usize;

	for (key, value) in entries {
		if matches!(value, Value::Null) {
			continue;
		}

		if emitted > 0 {
			w.write_all(b"\n\n")?;
		}

		let unit = style_unit(style, depth, emitted);
		emit_titled(w, resolver, style, &unit, key, None, value)?;
		emitted += 1;
	}

	Ok(emitted)
}

/// Emit one titled entry line and its value.
///
/// Composite values get a title line and recurse at the unit's child
/// placement; custom values replace their subtree with returned bytes;
/// scalars go below the title at heading style and inline otherwise.
fn emit_titled(
	w: &mut dyn Write,
	resolver: &dyn MetaResolver,
	style: Style,
	unit: &StyleUnit,
	title: &str,
	description: Option<&str>,
	value: &Value,
) -> Result<()> {
	w.write_all(unit.indent.as_bytes())?;
	w.write_all(unit.prefix.as_bytes())?;
	w.write_all(title.as_bytes())?;
	if let Some(description) = description {
		write!(w, " ({description})")?;
	}

	match value {
		Value::Custom(custom) => {
			w.write_all(b"\n")?;
			let bytes = custom.markdown()?;
			w.write_all(&bytes)?;
		}
		Value::Struct(item) => {
			w.write_all(b"\n")?;
			struct_to_markdown(w, resolver, item, unit.child_style, unit.child_depth)?;
		}
		Value::Seq(items) => {
			w.write_all(b"\n")?;
			seq_to_markdown(w, resolver, items, unit.child_depth)?;
		}
		Value::Map(entries) => {
			w.write_all(b"\n")?;
			map_to_markdown(w, resolver, entries, unit.child_style, unit.child_depth)?;
		}
		scalar => {
			if style == Style::Heading {
				w.write_all(b"\n")?;
				w.write_all(indent(unit.child_depth).as_bytes())?;
			} else {
				w.write_all(b": ")?;
			}
			write_scalar(w, scalar)?;
		}
	}

	Ok(())
}

/// Write a scalar value's textual form.
fn write_scalar(w: &mut dyn Write, value: &Value) -> Result<()> {
	match value {
		Value::Bool(v) => write!(w, "{v}")?,
		Value::I64(v) => write!(w, "{v}")?,
		Value::U64(v) => write!(w, "{v}")?,
		Value::F64(v) => write!(w, "{v}")?,
		Value::String(v) => w.write_all(v.as_bytes())?,
		_ => {}
	}
	Ok(())
}
