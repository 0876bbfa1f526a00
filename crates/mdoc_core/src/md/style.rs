/// Layout mode governing prefix and indent of emitted entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Style {
	/// Top-level document headings.
	Heading,
	/// Indented bullet entries.
	List,
	/// Bullet entry whose later siblings align under the first line.
	InlineList,
}

/// Prefix, indent, and child placement for one emitted entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleUnit {
	/// Marker written before the entry title.
	pub prefix: &'static str,
	/// Indent written before the marker.
	pub indent: String,
	/// Style nested content renders with.
	pub child_style: Style,
	/// Depth nested content renders at.
	pub child_depth: u32,
}

/// Two-space indent for one nesting depth.
pub fn indent(depth: u32) -> String {
	"  ".repeat(depth as usize)
}

/// Compute the layout unit for the entry at `sibling` position.
///
/// Single source of truth for the prefix/indent transition table shared by
/// the struct, sequence, and mapping renderers. Children always render at
/// list style one level deeper; a heading never nests as a heading again.
pub fn style_unit(style: Style, depth: u32, sibling: usize) -> StyleUnit {
	let (prefix, entry_depth) = match style {
		Style::Heading => ("# ", depth),
		Style::List => ("- ", depth),
		Style::InlineList if sibling == 0 => ("- ", depth),
		Style::InlineList => ("", depth + 1),
	};

	StyleUnit {
		prefix,
		indent: indent(entry_depth),
		child_style: Style::List,
		child_depth: depth + 1,
	}
}

#[cfg(test)]
mod tests {
	use super::{Style, style_unit};

	#[test]
	fn heading_entries_use_hash_prefix_at_own_depth() {
		let unit = style_unit(Style::Heading, 0, 3);
		assert_eq!(unit.prefix, "# ");
		assert_eq!(unit.indent, "");
		assert_eq!(unit.child_style, Style::List);
		assert_eq!(unit.child_depth, 1);
	}

	#[test]
	fn list_entries_use_bullet_prefix_and_deepen_children() {
		let unit = style_unit(Style::List, 2, 0);
		assert_eq!(unit.prefix, "- ");
		assert_eq!(unit.indent, "    ");
		assert_eq!(unit.child_style, Style::List);
		assert_eq!(unit.child_depth, 3);
	}

	#[test]
	fn inline_list_first_sibling_sits_on_the_bullet_line() {
		let unit = style_unit(Style::InlineList, 1, 0);
		assert_eq!(unit.prefix, "- ");
		assert_eq!(unit.indent, "  ");
		assert_eq!(unit.child_depth, 2);
	}

	#[test]
	fn inline_list_later_siblings_indent_without_a_bullet() {
		let unit = style_unit(Style::InlineList, 1, 2);
		assert_eq!(unit.prefix, "");
		assert_eq!(unit.indent, "    ");
		assert_eq!(unit.child_style, Style::List);
		assert_eq!(unit.child_depth, 2);
	}
}
