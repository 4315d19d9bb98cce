#![doc = include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/README.md"))]

/*!

# Value Semantics Behind an Indirection

A type that owns its state through a pointer has to answer the same questions as any other
owner of a heap allocation: what a copy means, what a move leaves behind, and who frees the
allocation. For a value type the answers are fixed:

- a copy is deep, and the copy and the original never share mutable state;
- a move transfers the allocation without touching its contents, and never fails;
- the allocation is freed exactly once, by whoever owns it last.

Rust's `Box` already gives the last two for free. The [`pimpl`] module packages the first,
together with the C++-style "moved-from" state that shows up whenever ownership is moved out
of a place that stays in use. The [`widget`] module builds an opaque public type on top of it.

*/

pub mod error;
pub mod hashing;
pub mod pimpl;
pub mod widget;

pub use error::PimplError;
pub use pimpl::Pimpl;
pub use widget::Widget;
