mod encode;
mod error;
mod meta;
mod style;
mod value;

/// Markdown encoder and convenience entry points.
pub use encode::{Encoder, to_string, to_vec, to_writer};
/// Error and result aliases.
pub use error::{MdError, Result};
/// Field metadata resolution types.
pub use meta::{FieldMeta, MetaResolver, TagResolver};
/// Style and indent computation.
pub use style::{Style, StyleUnit, indent, style_unit};
/// Runtime value tree and override capability.
pub use value::{FieldValue, RenderMarkdown, StructValue, Value};
