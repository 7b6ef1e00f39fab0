//! Filesystem utilities and extensions.
//!
//! Provides the [`PathExt`] extension trait for [`Path`](std::path::Path) with the read-only
//! lookups used by the file finder.

pub mod path_ext;

pub use path_ext::PathExt;
