//! Public library API for rendering structured value trees as Markdown.

/// Value model, field metadata resolution, style computation, and encoding.
pub mod md;
