use std::fmt::{self, Display, Formatter, Write};

use crate::{
    common::WithInfo,
    context::NamingContext,
    reprs::{
        common::{Idx, Span},
        ty::Type,
    },
};

/// A term in locally-nameless form: variables are [`Idx`]s counted from the
/// innermost enclosing abstraction, continuing into the ambient context.
pub type Term<'i> = WithInfo<Span, RawTerm<'i>>;

#[derive(Clone, Eq, PartialEq, Debug)]
pub enum RawTerm<'i> {
    Var(Idx),
    Abs {
        /// only kept for display
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

impl<'i> Term<'i> {
    /// Renders the term in surface syntax, naming free variables after
    /// their bindings in `ctx`.
    ///
    /// Binders whose name is already in scope get primes appended. A variable
    /// whose name is shadowed by a later binding, or that lies outside `ctx`,
    /// is printed as `#` followed by its index and never parses back.
    pub fn display(&self, ctx: &NamingContext<'_>) -> String {
        let mut names = ctx.names().map(str::to_string).collect();
        let mut w = String::new();
        self.write_display(&mut names, Position::Top, &mut w);
        w
    }

    fn write_display(&self, names: &mut Vec<String>, position: Position, w: &mut String) {
        match &self.1 {
            RawTerm::Var(index) => match index.get(names) {
                Some(name) if Idx::find(names, |n| n == name) == Some(*index) => {
                    w.push_str(name);
                }
                _ => {
                    // `write!` to a `String` cannot fail
                    let _ = write!(w, "#{index}");
                }
            },
            RawTerm::Abs {
                var_name,
                var_type,
                scope,
            } => {
                let parens = position != Position::Top;
                if parens {
                    w.push('(');
                }
                let name = fresh_name(names, var_name);
                let _ = write!(w, "\\{name}:{var_type}. ");
                names.push(name);
                scope.write_display(names, Position::Top, w);
                names.pop();
                if parens {
                    w.push(')');
                }
            }
            RawTerm::App { abs, arg } => {
                let parens = position == Position::Arg;
                if parens {
                    w.push('(');
                }
                abs.write_display(names, Position::Head, w);
                w.push(' ');
                arg.write_display(names, Position::Arg, w);
                if parens {
                    w.push(')');
                }
            }
        }
    }
}

impl Display for Term<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        f.write_str(&self.display(&NamingContext::new()))
    }
}

#[derive(Copy, Clone, Eq, PartialEq)]
enum Position {
    Top,
    Head,
    Arg,
}

fn fresh_name(names: &[String], name: &str) -> String {
    let mut name = name.to_string();
    while names.contains(&name) {
        name.push('\'');
    }
    name
}
