use thiserror::Error;

/// Returned by the checked accessors of [`Pimpl`](crate::pimpl::Pimpl) and the types built on it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum PimplError {
    #[error("{type_name} accessed after being moved from")]
    MovedFrom { type_name: &'static str },
}
