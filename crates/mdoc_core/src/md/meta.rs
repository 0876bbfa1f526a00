use crate::md::value::FieldValue;

/// Resolved presentation metadata for one struct field.
#[derive(Debug, Clone, Default)]
pub struct FieldMeta {
	/// Display title after fallback resolution.
	pub title: Box<str>,
	/// Optional description rendered in parentheses after the title.
	pub description: Option<Box<str>>,
	/// Skip the field when its value is empty.
	pub omit_empty: bool,
	/// Splice the field's children into the parent.
	pub anonymous: bool,
}

/// Source of per-field presentation metadata.
///
/// The encoder never reads annotations itself; it asks the resolver for
/// every struct field it visits.
pub trait MetaResolver {
	/// Resolve metadata for one field descriptor.
	fn field_meta(&self, field: &FieldValue) -> FieldMeta;
}

/// Stock resolver for comma-separated annotation strings.
///
/// Titles come from the schema tag's `title=` entry, falling back to the
/// name tag's leading segment, then to the field name. An `omitempty`
/// option anywhere in the name tag's option list sets the omit flag.
#[derive(Debug, Clone, Copy, Default)]
pub struct TagResolver;

impl MetaResolver for TagResolver {
	fn field_meta(&self, field: &FieldValue) -> FieldMeta {
		let (title, description) = match field.schema_tag.as_deref() {
			Some(tag) => parse_schema_tag(tag),
			None => (None, None),
		};
		let (tag_name, omit_empty) = match field.name_tag.as_deref() {
			Some(tag) => parse_name_tag(tag),
			None => (None, false),
		};

		let resolved = title.or(tag_name).unwrap_or(&field.name);

		FieldMeta {
			title: resolved.into(),
			description: description.map(Box::from),
			omit_empty,
			anonymous: field.anonymous,
		}
	}
}

/// Extract non-empty `title=` and `description=` values from a schema tag.
fn parse_schema_tag(tag: &str) -> (Option<&str>, Option<&str>) {
	let mut title = None;
	let mut description = None;
	for part in tag.split(',') {
		if let Some(rest) = part.strip_prefix("title=") {
			title = Some(rest).filter(|text| !text.is_empty());
		} else if let Some(rest) = part.strip_prefix("description=") {
			description = Some(rest).filter(|text| !text.is_empty());
		}
	}
	(title, description)
}

/// Extract the serialized name and `omitempty` option from a name tag.
fn parse_name_tag(tag: &str) -> (Option<&str>, bool) {
	let mut parts = tag.split(',');
	let name = parts.next().filter(|part| !part.is_empty());
	let omit_empty = parts.any(|part| part == "omitempty");
	(name, omit_empty)
}
