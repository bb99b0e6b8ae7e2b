use std::{
    borrow::Cow,
    fmt::{self, Display, Formatter},
    ops::Range,
};

use annotate_snippets::{AnnotationKind, Group, Level, Snippet};

use crate::reprs::{common::Idx, ty::Type};

#[derive(Clone, Eq, PartialEq, Debug)]
pub enum TypeCheckError<'i> {
    /// The index points past the outermost binding of the context.
    UnboundIndex {
        index: Idx,
        depth: usize,
        span: Range<usize>,
    },
    /// The index points at a binding without a type.
    UntypedBinding {
        name: &'i str,
        index: Idx,
        span: Range<usize>,
    },
    NotAFunction {
        found: Type,
        span: Range<usize>,
    },
    Mismatch {
        expected: Type,
        found: Type,
        span: Range<usize>,
        abs_span: Range<usize>,
    },
}

impl Display for TypeCheckError<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            TypeCheckError::UnboundIndex { index, depth, .. } => write!(
                f,
                "variable index {index} is out of range for a context of {depth} bindings"
            ),
            TypeCheckError::UntypedBinding { name, index, .. } => {
                write!(f, "variable '{name}' (index {index}) has no known type")
            }
            TypeCheckError::NotAFunction { found, .. } => {
                write!(f, "cannot apply an argument to type: `{found}`")
            }
            TypeCheckError::Mismatch {
                expected, found, ..
            } => write!(
                f,
                "type mismatch:\n\
                expected: `{expected}`\n\
                found:    `{found}`"
            ),
        }
    }
}

impl<'i> TypeCheckError<'i> {
    pub fn into_record(self, source: &'i str, origin: impl Into<Cow<'i, str>>) -> Vec<Group<'i>> {
        let snippet = Snippet::source(source).path(origin.into());

        let group = match self {
            TypeCheckError::UnboundIndex { index, depth, span } => Level::ERROR
                .primary_title(format!("variable index {index} not found"))
                .element(snippet.annotation(AnnotationKind::Primary.span(span)))
                .element(Level::ERROR.message(format!(
                    "the context only has {depth} bindings at this point"
                ))),
            TypeCheckError::UntypedBinding { name, index, span } => Level::ERROR
                .primary_title(format!("variable '{name}' has no known type"))
                .element(
                    snippet.annotation(
                        AnnotationKind::Primary
                            .span(span)
                            .label(format!("refers to binding {index}, declared without a type")),
                    ),
                ),
            TypeCheckError::NotAFunction { found, span } => Level::ERROR
                .primary_title(format!("cannot apply an argument to type `{found}`"))
                .element(
                    snippet.annotation(
                        AnnotationKind::Primary
                            .span(span)
                            .label("expected a function"),
                    ),
                ),
            TypeCheckError::Mismatch {
                expected,
                found,
                span,
                abs_span,
            } => Level::ERROR
                .primary_title(format!("type mismatch: expected `{expected}`"))
                .element(
                    snippet
                        .annotation(
                            AnnotationKind::Context
                                .span(abs_span)
                                .label(format!("function taking `{expected}`")),
                        )
                        .annotation(
                            AnnotationKind::Primary
                                .span(span)
                                .label(format!("argument of type `{found}`")),
                        ),
                )
                .element(Level::ERROR.message(format!(
                    "expected: `{expected}`\n\
                    found:    `{found}`"
                ))),
        };

        vec![group]
    }
}
