//! Runtime shape descriptions.
//!
//! A [`Shape<T>`] is what the builder knows about `T`: its [`Kind`], its
//! size, and for composites the ordered children with their byte offsets.
//! Unlike a plain descriptor, every leaf of a shape also carries a typed
//! accessor rooted at `T`, so the builder can turn a shape into comparators
//! without ever reading memory by offset. Offsets are kept for
//! [`TypeDesc`] and [`LeafPath`] only.
//!
//! Shapes come from [`Describe::shape`](crate::Describe::shape). User code
//! normally derives `Describe`; the public constructors here are what the
//! derive expands to, plus [`Shape::handle`] for custom handle types and
//! [`Shape::sequence`] for custom collections.

mod access;
mod desc;
mod elements;

use std::any::type_name;
use std::mem;

pub(crate) use access::{projection, str_getter, Access, Get, GetStr, Proj};
pub use desc::{FieldDesc, LeafPath, TypeDesc};
pub(crate) use elements::Elements;

use crate::stack::ensure_sufficient_stack;
use crate::{Describe, Kind};
use elements::Items;

/// Runtime description of `T`, with leaf accessors rooted at `T`.
pub struct Shape<T: ?Sized> {
    pub(crate) name: &'static str,
    pub(crate) kind: Kind,
    pub(crate) size: Option<usize>,
    pub(crate) node: Node<T>,
}

/// What a shape unfolds into.
pub(crate) enum Node<T: ?Sized> {
    /// One comparable value.
    Leaf(Access<T>),
    /// Array elements in index order.
    Array(Vec<Field<T>>),
    /// Record fields in declaration order.
    Record(Vec<Field<T>>),
    /// A collection the builder accepts as input.
    Sequence(Box<dyn Elements<T>>),
    /// Unsortable value; carries the element description if it was a sequence.
    Opaque(Option<Box<TypeDesc>>),
}

impl<T: ?Sized> Shape<T> {
    pub(crate) fn from_parts(
        name: &'static str,
        kind: Kind,
        size: Option<usize>,
        node: Node<T>,
    ) -> Self {
        Shape {
            name,
            kind,
            size,
            node,
        }
    }

    /// Type name of the described type.
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Kind of the described type.
    pub fn kind(&self) -> Kind {
        self.kind
    }

    /// Size in bytes, `None` for dynamically sized types.
    pub fn size(&self) -> Option<usize> {
        self.size
    }

    /// Plain descriptor for this shape.
    pub fn desc(&self) -> TypeDesc {
        ensure_sufficient_stack(|| {
            let mut desc = TypeDesc {
                name: self.name,
                kind: self.kind,
                size: self.size,
                fields: Vec::new(),
                elem: None,
            };
            match &self.node {
                Node::Leaf(_) => {}
                Node::Array(fields) | Node::Record(fields) => {
                    desc.fields = fields.iter().map(Field::desc).collect();
                }
                Node::Sequence(elements) => desc.elem = Some(Box::new(elements.desc())),
                Node::Opaque(elem) => desc.elem.clone_from(elem),
            }
            desc
        })
    }
}

impl<T: ?Sized + 'static> Shape<T> {
    /// Re-root this shape at a container `U` that holds a `T`.
    ///
    /// Kind, name and size stay those of `T`. A sequence lifted into a
    /// container is no longer an input collection and becomes opaque.
    pub(crate) fn lift<U: ?Sized + 'static>(self, proj: &Proj<U, T>) -> Shape<U> {
        ensure_sufficient_stack(|| {
            let node = match self.node {
                Node::Leaf(access) => Node::Leaf(access.lift(proj)),
                Node::Array(fields) => {
                    Node::Array(fields.into_iter().map(|f| f.lift(proj)).collect())
                }
                Node::Record(fields) => {
                    Node::Record(fields.into_iter().map(|f| f.lift(proj)).collect())
                }
                Node::Sequence(elements) => Node::Opaque(Some(Box::new(elements.desc()))),
                Node::Opaque(elem) => Node::Opaque(elem),
            };
            Shape::from_parts(self.name, self.kind, self.size, node)
        })
    }

    /// A collection of `E` values, read through `len` and `at`.
    ///
    /// This is how `Vec`, slices and `VecDeque` describe themselves; use it
    /// for custom indexable collections.
    pub fn sequence<E: Describe>(
        len: fn(&T) -> usize,
        at: for<'a> fn(&'a T, usize) -> &'a E,
    ) -> Self {
        Shape::from_parts(
            type_name::<T>(),
            Kind::Slice,
            None,
            Node::Sequence(Box::new(Items::new(len, at))),
        )
    }

    /// Describe `T` as a view of one of its parts.
    ///
    /// Newtypes use this to be ordered exactly like the value they wrap.
    /// The kind and leaves are those of `U`; the name is that of `T`.
    pub fn project<U, F>(project: F) -> Self
    where
        U: Describe,
        F: for<'a> Fn(&'a T) -> &'a U + Send + Sync + 'static,
    {
        let inner = U::shape().lift(&projection(project));
        Shape {
            name: type_name::<T>(),
            ..inner
        }
    }

    /// An open value that cannot be ordered.
    pub(crate) fn open() -> Self {
        Shape::from_parts(type_name::<T>(), Kind::Interface, None, Node::Opaque(None))
    }
}

impl<T: 'static> Shape<T> {
    pub(crate) fn leaf(kind: Kind, access: Access<T>) -> Self {
        Shape::from_parts(
            type_name::<T>(),
            kind,
            Some(mem::size_of::<T>()),
            Node::Leaf(access),
        )
    }

    /// A record whose fields are compared in the given order.
    pub fn record(fields: Vec<Field<T>>) -> Self {
        Shape::from_parts(
            type_name::<T>(),
            Kind::Struct,
            Some(mem::size_of::<T>()),
            Node::Record(fields),
        )
    }

    /// An opaque handle ordered by the address `identity` returns.
    ///
    /// `kind` must be one of the handle kinds (`Chan`, `Func`, `Map`, `Ptr`,
    /// `UnsafePtr`); any other kind yields an open shape that every chain
    /// rejects. The identity must never dereference anything that could
    /// change during a sort.
    pub fn handle<F>(kind: Kind, identity: F) -> Self
    where
        F: Fn(&T) -> usize + Send + Sync + 'static,
    {
        if !kind.is_handle() {
            tracing::warn!(ty = type_name::<T>(), %kind, "handle declared with a non-handle kind");
            return Shape::from_parts(
                type_name::<T>(),
                Kind::Interface,
                Some(mem::size_of::<T>()),
                Node::Opaque(None),
            );
        }
        Shape::leaf(kind, Access::Addr(std::sync::Arc::new(identity)))
    }
}

impl<E: Describe, const N: usize> Shape<[E; N]> {
    pub(crate) fn array() -> Self {
        let stride = mem::size_of::<E>();
        let fields = (0..N)
            .map(|i| Field {
                name: None,
                offset: i * stride,
                body: Body::Described(E::shape().lift(&projection(move |a: &[E; N]| &a[i]))),
            })
            .collect();
        Shape::from_parts(
            type_name::<[E; N]>(),
            Kind::Array,
            Some(mem::size_of::<[E; N]>()),
            Node::Array(fields),
        )
    }
}

/// One child of a composite shape: a record field or an array element.
pub struct Field<T: ?Sized> {
    pub(crate) name: Option<&'static str>,
    pub(crate) offset: usize,
    pub(crate) body: Body<T>,
}

pub(crate) enum Body<T: ?Sized> {
    Described(Shape<T>),
    Skipped { ty: &'static str },
}

impl<T: ?Sized + 'static> Field<T> {
    /// A compared field of type `U`, reached through `project`.
    pub fn new<U, F>(name: &'static str, offset: usize, project: F) -> Self
    where
        U: Describe,
        F: for<'a> Fn(&'a T) -> &'a U + Send + Sync + 'static,
    {
        Field {
            name: Some(name),
            offset,
            body: Body::Described(U::shape().lift(&projection(project))),
        }
    }

    /// A field excluded from comparison. `U` need not implement `Describe`.
    pub fn discard<U: ?Sized>(name: &'static str, offset: usize) -> Self {
        Field {
            name: Some(name),
            offset,
            body: Body::Skipped { ty: type_name::<U>() },
        }
    }

    fn lift<U: ?Sized + 'static>(self, proj: &Proj<U, T>) -> Field<U> {
        let body = match self.body {
            Body::Described(shape) => Body::Described(shape.lift(proj)),
            Body::Skipped { ty } => Body::Skipped { ty },
        };
        Field {
            name: self.name,
            offset: self.offset,
            body,
        }
    }
}

impl<T: ?Sized> Field<T> {
    /// Field name, `None` for array elements.
    pub fn name(&self) -> Option<&'static str> {
        self.name
    }

    /// Byte offset within the parent.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Whether this field contributes no leaves.
    ///
    /// Fields named with a leading underscore are placeholders.
    pub fn is_discard(&self) -> bool {
        matches!(self.body, Body::Skipped { .. }) || is_placeholder(self.name)
    }

    fn desc(&self) -> FieldDesc {
        let (ty_name, ty) = match &self.body {
            Body::Described(shape) => (shape.name, Some(shape.desc())),
            Body::Skipped { ty } => (*ty, None),
        };
        FieldDesc {
            name: self.name,
            offset: self.offset,
            discard: self.is_discard(),
            ty_name,
            ty,
        }
    }
}

fn is_placeholder(name: Option<&str>) -> bool {
    name.is_some_and(|n| n.starts_with('_'))
}
