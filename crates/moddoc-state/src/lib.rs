//! Pure editing layer for nested module-configuration documents.
//!
//! A document is a plain JSON value owned by the host application. This
//! crate provides the generic pieces every form editor routes through:
//!
//! - [`Path`] / [`Seg`]: field paths into the nested document
//! - [`get_at`] / [`set_at`] / [`delete_at`] / [`merge_at`]: pure
//!   accessors that return a new document and never mutate their input
//! - [`Op`] / [`Patch`]: serializable operations applied all-or-nothing
//!
//! Semantics are single-actor and synchronous: every function is a pure
//! transition from (old document, operation) to (new document | error),
//! and a failing operation leaves the old document completely untouched.

mod access;
mod error;
mod op;
mod patch;
mod path;

pub use access::{delete_at, get_at, merge_at, set_at};
pub use error::{value_type_name, StateError, StateResult};
pub use op::Op;
pub use patch::{apply_op, apply_patch, Patch};
pub use path::{parse_path, Path, Seg};
