use crate::{
    common::WithInfo,
    reprs::{common::Span, ty::Type},
};

/// A term as written, with variables referring to binders by name.
pub type Term<'i> = WithInfo<Span, RawTerm<'i>>;

#[derive(Clone, Eq, PartialEq, Debug)]
pub enum RawTerm<'i> {
    Var {
        name: &'i str,
    },
    Abs {
        var_name: &'i str,
        var_type: Type,

        scope: Box<Term<'i>>,
    },
    App {
        abs: Box<Term<'i>>,
        arg: Box<Term<'i>>,
    },
}

impl<'i> RawTerm<'i> {
    pub fn at(self, span: Span) -> Term<'i> {
        WithInfo(span, self)
    }
}
