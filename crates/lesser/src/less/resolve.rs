//! Recursive decomposition of a shape into a comparator chain.

use super::{leaf, Link};
use crate::shape::{Body, Node, Shape};
use crate::stack::ensure_sufficient_stack;
use crate::LesserError;

/// Compile `shape` into a link that defers to `next` once every leaf ties.
///
/// Composites are walked from the back, each child's chain becoming the
/// continuation of the child before it, so at runtime the first field (or
/// element 0) is compared first. A composite with no compared children
/// returns `next` unchanged.
#[tracing::instrument(
    level = "trace",
    skip_all,
    fields(ty = shape.name, kind = %shape.kind, offset = offset)
)]
pub(crate) fn resolve<T: ?Sized + 'static>(
    shape: Shape<T>,
    offset: usize,
    next: Option<Link<T>>,
) -> Result<Option<Link<T>>, LesserError> {
    ensure_sufficient_stack(|| match shape.node {
        Node::Leaf(access) => Ok(Some(leaf::compile(access, next))),
        Node::Array(fields) | Node::Record(fields) => {
            let mut chain = next;
            for field in fields.into_iter().rev() {
                if field.is_discard() {
                    continue;
                }
                if let Body::Described(child) = field.body {
                    chain = resolve(child, offset + field.offset, chain)?;
                }
            }
            Ok(chain)
        }
        Node::Sequence(_) | Node::Opaque(_) => Err(LesserError::UnsupportedType {
            ty: shape.name,
            kind: shape.kind,
        }),
    })
}
