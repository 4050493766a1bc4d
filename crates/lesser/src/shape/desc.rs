//! Plain type descriptors and leaf paths.
//!
//! [`TypeDesc`] is the accessor-free mirror of a [`Shape`](super::Shape):
//! cloneable, comparable, and optionally serializable. Flattening it with
//! [`TypeDesc::leaf_paths`] yields the chain order the builder compiles.

use smallvec::SmallVec;
use std::fmt::Write as _;

use crate::stack::ensure_sufficient_stack;
use crate::{Kind, LesserError};

/// Runtime description of an element type.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct TypeDesc {
    /// Type name as reported by `std::any::type_name`.
    pub name: &'static str,
    pub kind: Kind,
    /// Size in bytes, `None` for dynamically sized types.
    pub size: Option<usize>,
    /// Array elements or record fields, in comparison order.
    pub fields: Vec<FieldDesc>,
    /// Element type of a sequence.
    pub elem: Option<Box<TypeDesc>>,
}

/// One child of a composite [`TypeDesc`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct FieldDesc {
    /// Field name, `None` for array elements.
    pub name: Option<&'static str>,
    /// Byte offset within the parent.
    pub offset: usize,
    /// Excluded from comparison.
    pub discard: bool,
    pub ty_name: &'static str,
    /// `None` for discarded fields whose type has no description.
    pub ty: Option<TypeDesc>,
}

/// One primitively-comparable value inside an element.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct LeafPath {
    kind: Kind,
    offsets: SmallVec<[usize; 4]>,
    path: String,
}

impl LeafPath {
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Offset of each step, outermost first.
    pub fn offsets(&self) -> &[usize] {
        &self.offsets
    }

    /// Byte offset of the leaf within the element.
    pub fn offset(&self) -> usize {
        self.offsets.iter().sum()
    }

    /// Dotted route to the leaf, e.g. `inner.b[2]`. Empty for scalar elements.
    pub fn path(&self) -> &str {
        &self.path
    }
}

/// Walk state for [`TypeDesc::leaf_paths`].
#[derive(Default)]
struct Route {
    offsets: SmallVec<[usize; 4]>,
    path: String,
}

impl TypeDesc {
    /// Flatten into leaves: array elements in index order, record fields in
    /// declaration order, discard fields skipped.
    pub fn leaf_paths(&self) -> Result<Vec<LeafPath>, LesserError> {
        let mut leaves = Vec::new();
        self.collect(&mut Route::default(), &mut leaves)?;
        Ok(leaves)
    }

    fn collect(&self, route: &mut Route, leaves: &mut Vec<LeafPath>) -> Result<(), LesserError> {
        ensure_sufficient_stack(|| {
            if !self.kind.is_sortable() {
                return Err(LesserError::UnsupportedType {
                    ty: self.name,
                    kind: self.kind,
                });
            }
            if !self.kind.is_composite() {
                leaves.push(LeafPath {
                    kind: self.kind,
                    offsets: route.offsets.clone(),
                    path: route.path.clone(),
                });
                return Ok(());
            }
            for (index, field) in self.fields.iter().enumerate() {
                let Some(ty) = field.ty.as_ref().filter(|_| !field.discard) else {
                    continue;
                };
                let mark = route.path.len();
                match field.name {
                    Some(name) => {
                        if mark > 0 {
                            route.path.push('.');
                        }
                        route.path.push_str(name);
                    }
                    None => {
                        let _ = write!(route.path, "[{index}]");
                    }
                }
                route.offsets.push(field.offset);
                ty.collect(route, leaves)?;
                route.offsets.pop();
                route.path.truncate(mark);
            }
            Ok(())
        })
    }
}
