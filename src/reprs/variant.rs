//! Tags and kind-checked equality for the crate's sum types.
//!
//! Statically typed comparisons go through the derived [`PartialEq`] impls;
//! [`Node`] covers the cases where the kind of a value is only known at
//! runtime, and refuses to compare values of different kinds.

use std::fmt::{self, Display, Formatter};

use crate::{
    context::Binding,
    reprs::{
        ast, nameless,
        ty::{RawType, Type},
    },
};

pub trait Tagged {
    /// Name of the sum type the value belongs to.
    fn kind(&self) -> &'static str;

    /// Name of the variant the value was constructed with.
    fn tag(&self) -> &'static str;

    fn same_tag(&self, other: &Self) -> bool {
        self.tag() == other.tag()
    }
}

impl Tagged for Type {
    fn kind(&self) -> &'static str {
        "Type"
    }

    fn tag(&self) -> &'static str {
        match self.1 {
            RawType::Bool => "Bool",
            RawType::Fn { .. } => "Fn",
        }
    }
}

impl Tagged for Binding<'_> {
    fn kind(&self) -> &'static str {
        "Binding"
    }

    fn tag(&self) -> &'static str {
        match self {
            Binding::Name(_) => "Name",
            Binding::Type(_, _) => "Type",
        }
    }
}

impl Tagged for ast::Term<'_> {
    fn kind(&self) -> &'static str {
        "Term"
    }

    fn tag(&self) -> &'static str {
        match self.1 {
            ast::RawTerm::Var { .. } => "Var",
            ast::RawTerm::Abs { .. } => "Abs",
            ast::RawTerm::App { .. } => "App",
        }
    }
}

impl Tagged for nameless::Term<'_> {
    fn kind(&self) -> &'static str {
        "DTerm"
    }

    fn tag(&self) -> &'static str {
        match self.1 {
            nameless::RawTerm::Var(_) => "Var",
            nameless::RawTerm::Abs { .. } => "Abs",
            nameless::RawTerm::App { .. } => "App",
        }
    }
}

/// A reference to a value of any of the crate's sum types.
#[derive(Copy, Clone, Debug)]
pub enum Node<'a, 'i> {
    Type(&'a Type),
    Binding(&'a Binding<'i>),
    Term(&'a ast::Term<'i>),
    DTerm(&'a nameless::Term<'i>),
}

#[derive(Clone, Eq, PartialEq, Debug)]
pub struct EqualityError {
    pub left: &'static str,
    pub right: &'static str,
}

impl Display for EqualityError {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "cannot compare a value of type `{}` with a value of type `{}`",
            self.left, self.right
        )
    }
}

impl std::error::Error for EqualityError {}

impl Node<'_, '_> {
    pub fn kind(&self) -> &'static str {
        match self {
            Node::Type(ty) => ty.kind(),
            Node::Binding(binding) => binding.kind(),
            Node::Term(term) => term.kind(),
            Node::DTerm(term) => term.kind(),
        }
    }

    pub fn tag(&self) -> &'static str {
        match self {
            Node::Type(ty) => ty.tag(),
            Node::Binding(binding) => binding.tag(),
            Node::Term(term) => term.tag(),
            Node::DTerm(term) => term.tag(),
        }
    }

    /// Structural equality between values of the same kind.
    ///
    /// # Errors
    /// When the two values belong to different sum types.
    pub fn try_eq(self, other: Self) -> Result<bool, EqualityError> {
        match (self, other) {
            (Node::Type(l), Node::Type(r)) => Ok(l == r),
            (Node::Binding(l), Node::Binding(r)) => Ok(l == r),
            (Node::Term(l), Node::Term(r)) => Ok(l == r),
            (Node::DTerm(l), Node::DTerm(r)) => Ok(l == r),
            (l, r) => Err(EqualityError {
                left: l.kind(),
                right: r.kind(),
            }),
        }
    }
}

impl<'a> From<&'a Type> for Node<'a, '_> {
    fn from(value: &'a Type) -> Self {
        Node::Type(value)
    }
}

impl<'a, 'i> From<&'a Binding<'i>> for Node<'a, 'i> {
    fn from(value: &'a Binding<'i>) -> Self {
        Node::Binding(value)
    }
}

impl<'a, 'i> From<&'a ast::Term<'i>> for Node<'a, 'i> {
    fn from(value: &'a ast::Term<'i>) -> Self {
        Node::Term(value)
    }
}

impl<'a, 'i> From<&'a nameless::Term<'i>> for Node<'a, 'i> {
    fn from(value: &'a nameless::Term<'i>) -> Self {
        Node::DTerm(value)
    }
}
