//! Builder errors.

use crate::Kind;

/// Why a comparator could not be built.
///
/// Both variants are raised while the chain is assembled. A predicate that
/// was returned successfully never fails at comparison time.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum LesserError {
    /// The argument is not a sequence.
    #[error("argument of type `{ty}` is not a sequence (kind {kind})")]
    InvalidArgument { ty: &'static str, kind: Kind },
    /// A reachable leaf cannot be ordered.
    #[error("un-sortable type `{ty}` (kind {kind})")]
    UnsupportedType { ty: &'static str, kind: Kind },
}

impl LesserError {
    /// The kind that triggered the error.
    pub fn kind(&self) -> Kind {
        match self {
            Self::InvalidArgument { kind, .. } | Self::UnsupportedType { kind, .. } => *kind,
        }
    }
}
