use std::fmt;
use std::sync::Arc;

use crate::md::Result;

/// Override capability for values that render their own Markdown.
///
/// When a node carries this capability the encoder writes the returned
/// bytes verbatim and never inspects the node's structure.
pub trait RenderMarkdown {
	/// Produce pre-formatted Markdown replacing structural rendering.
	fn markdown(&self) -> Result<Vec<u8>>;
}

/// Runtime value tree consumed by the Markdown encoder.
#[derive(Clone)]
pub enum Value {
	/// Absent optional value.
	Null,
	/// Boolean scalar.
	Bool(bool),
	/// Signed integer scalar.
	I64(i64),
	/// Unsigned integer scalar.
	U64(u64),
	/// 64-bit float scalar.
	F64(f64),
	/// UTF-8 string scalar.
	String(Box<str>),
	/// Ordered sequence of values.
	Seq(Vec<Value>),
	/// Keyed entries in caller-supplied order.
	Map(Vec<(Box<str>, Value)>),
	/// Struct-shaped value with per-field annotations.
	Struct(StructValue),
	/// Value that renders its own Markdown.
	Custom(Arc<dyn RenderMarkdown + Send + Sync>),
}

impl Value {
	/// Whether this value equals its shape's empty value.
	///
	/// Scalars compare against zero/false/"", collections against length
	/// zero, structs are empty when every field value is. Custom values
	/// are never empty.
	pub fn is_empty(&self) -> bool {
		match self {
			Value::Null => true,
			Value::Bool(v) => !v,
			Value::I64(v) => *v == 0,
			Value::U64(v) => *v == 0,
			Value::F64(v) => *v == 0.0,
			Value::String(v) => v.is_empty(),
			Value::Seq(items) => items.is_empty(),
			Value::Map(entries) => entries.is_empty(),
			Value::Struct(item) => item.fields.iter().all(|field| field.value.is_empty()),
			Value::Custom(_) => false,
		}
	}
}

impl fmt::Debug for Value {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Value::Null => f.write_str("Null"),
			Value::Bool(v) => f.debug_tuple("Bool").field(v).finish(),
			Value::I64(v) => f.debug_tuple("I64").field(v).finish(),
			Value::U64(v) => f.debug_tuple("U64").field(v).finish(),
			Value::F64(v) => f.debug_tuple("F64").field(v).finish(),
			Value::String(v) => f.debug_tuple("String").field(v).finish(),
			Value::Seq(items) => f.debug_tuple("Seq").field(items).finish(),
			Value::Map(entries) => f.debug_tuple("Map").field(entries).finish(),
			Value::Struct(item) => f.debug_tuple("Struct").field(item).finish(),
			Value::Custom(_) => f.write_str("Custom(..)"),
		}
	}
}

/// Struct-shaped value with declaration-ordered fields.
#[derive(Debug, Clone)]
pub struct StructValue {
	/// Fields in declaration order.
	pub fields: Vec<FieldValue>,
}

impl StructValue {
	/// Struct value from declaration-ordered fields.
	pub fn new(fields: Vec<FieldValue>) -> Self {
		Self { fields }
	}
}

/// Named field carrying raw annotations and a payload.
#[derive(Debug, Clone)]
pub struct FieldValue {
	/// Field identifier, the last title fallback.
	pub name: Box<str>,
	/// Serialized-name annotation with comma-separated options.
	pub name_tag: Option<Box<str>>,
	/// Schema annotation carrying `title=`/`description=` pairs.
	pub schema_tag: Option<Box<str>>,
	/// Splice this field's children into the parent.
	pub anonymous: bool,
	/// Field payload.
	pub value: Value,
}

impl FieldValue {
	/// Plain field with no annotations.
	pub fn new(name: &str, value: Value) -> Self {
		Self {
			name: name.into(),
			name_tag: None,
			schema_tag: None,
			anonymous: false,
			value,
		}
	}

	/// Attach a serialized-name annotation.
	pub fn with_name_tag(mut self, tag: &str) -> Self {
		self.name_tag = Some(tag.into());
		self
	}

	/// Attach a schema annotation.
	pub fn with_schema_tag(mut self, tag: &str) -> Self {
		self.schema_tag = Some(tag.into());
		self
	}

	/// Mark the field anonymous so its children splice into the parent.
	pub fn anonymous(mut self) -> Self {
		self.anonymous = true;
		self
	}
}

#[cfg(test)]
mod tests {
	use std::sync::Arc;

	use super::{FieldValue, RenderMarkdown, StructValue, Value};
	use crate::md::Result;

	struct Stamp;

	impl RenderMarkdown for Stamp {
		fn markdown(&self) -> Result<Vec<u8>> {
			Ok(b"stamp".to_vec())
		}
	}

	#[test]
	fn scalar_empty_values_match_shape_defaults() {
		assert!(Value::Null.is_empty());
		assert!(Value::Bool(false).is_empty());
		assert!(Value::I64(0).is_empty());
		assert!(Value::U64(0).is_empty());
		assert!(Value::F64(0.0).is_empty());
		assert!(Value::String("".into()).is_empty());

		assert!(!Value::Bool(true).is_empty());
		assert!(!Value::I64(-1).is_empty());
		assert!(!Value::F64(0.5).is_empty());
		assert!(!Value::String("x".into()).is_empty());
	}

	#[test]
	fn collections_are_empty_at_length_zero() {
		assert!(Value::Seq(Vec::new()).is_empty());
		assert!(Value::Map(Vec::new()).is_empty());
		assert!(!Value::Seq(vec![Value::I64(1)]).is_empty());
		assert!(!Value::Map(vec![("k".into(), Value::Null)]).is_empty());
	}

	#[test]
	fn struct_is_empty_only_when_all_fields_are() {
		let empty = Value::Struct(StructValue::new(vec![
			FieldValue::new("a", Value::I64(0)),
			FieldValue::new("b", Value::String("".into())),
		]));
		assert!(empty.is_empty());

		let occupied = Value::Struct(StructValue::new(vec![
			FieldValue::new("a", Value::I64(0)),
			FieldValue::new("b", Value::String("x".into())),
		]));
		assert!(!occupied.is_empty());
	}

	#[test]
	fn custom_values_are_never_empty() {
		assert!(!Value::Custom(Arc::new(Stamp)).is_empty());
	}
}
