use mdoc::md::Value;

/// Convert a parsed JSON document into an encoder value tree.
///
/// Objects become mappings in the parser's stored key order, arrays become
/// sequences, and `null` maps onto the absent value.
pub(crate) fn json_to_value(json: &serde_json::Value) -> Value {
	match json {
		serde_json::Value::Null => Value::Null,
		serde_json::Value::Bool(v) => Value::Bool(*v),
		serde_json::Value::Number(v) => number_to_value(v),
		serde_json::Value::String(v) => Value::String(v.as_str().into()),
		serde_json::Value::Array(items) => Value::Seq(items.iter().map(json_to_value).collect()),
		serde_json::Value::Object(entries) => Value::Map(
			entries
				.iter()
				.map(|(key, value)| (Box::from(key.as_str()), json_to_value(value)))
				.collect(),
		),
	}
}

/// Map a JSON number onto the narrowest scalar variant.
fn number_to_value(number: &serde_json::Number) -> Value {
	if let Some(v) = number.as_i64() {
		Value::I64(v)
	} else if let Some(v) = number.as_u64() {
		Value::U64(v)
	} else {
		Value::F64(number.as_f64().unwrap_or_default())
	}
}
