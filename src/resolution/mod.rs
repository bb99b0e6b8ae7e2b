use crate::{
    common::WithInfo,
    context::{Binding, NamingContext},
    reprs::{ast, nameless as nl},
};

pub use self::error::ResolveError;

mod error {
    use std::{
        borrow::Cow,
        fmt::{self, Display, Formatter},
        ops::Range,
    };

    use annotate_snippets::{AnnotationKind, Group, Level, Snippet};

    #[derive(Clone, Eq, PartialEq, Debug)]
    pub enum ResolveError<'i> {
        NameNotFound { name: &'i str, span: Range<usize> },
    }

    impl Display for ResolveError<'_> {
        fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
            match self {
                ResolveError::NameNotFound { name, span } => write!(
                    f,
                    "variable '{name}' not found (at {}..{})",
                    span.start, span.end
                ),
            }
        }
    }

    impl<'i> ResolveError<'i> {
        pub fn into_record(
            self,
            source: &'i str,
            origin: impl Into<Cow<'i, str>>,
        ) -> Vec<Group<'i>> {
            let snippet = Snippet::source(source).path(origin.into());

            let group = match self {
                ResolveError::NameNotFound { name, span } => Level::ERROR
                    .primary_title(format!("variable '{name}' not found"))
                    .element(
                        snippet.annotation(
                            AnnotationKind::Primary
                                .span(span)
                                .label("not bound by any enclosing abstraction or in the context"),
                        ),
                    ),
            };

            vec![group]
        }
    }
}

type Result<'i, T> = std::result::Result<T, ResolveError<'i>>;

trait Resolve<'i> {
    type Resolved;
    fn resolve(&self, ctx: &NamingContext<'i>) -> Result<'i, Self::Resolved>;
}

/// Takes an [`ast::Term`] and replaces every variable name with the de Bruijn
/// index of the binding it refers to, producing a [`nameless::Term`][nl::Term].
///
/// Names not bound by an enclosing abstraction are looked up in `ctx`, whose
/// last binding is the innermost.
///
/// # Errors
/// When a name is bound neither in the term nor in `ctx`.
pub fn to_debruijn<'i>(term: &ast::Term<'i>, ctx: &NamingContext<'i>) -> Result<'i, nl::Term<'i>> {
    term.resolve(ctx)
}

impl<'i, T: Resolve<'i>> Resolve<'i> for Box<T> {
    type Resolved = Box<T::Resolved>;

    fn resolve(&self, ctx: &NamingContext<'i>) -> Result<'i, Self::Resolved> {
        T::resolve(self, ctx).map(Box::new)
    }
}

impl<'i> Resolve<'i> for ast::Term<'i> {
    type Resolved = nl::Term<'i>;

    fn resolve(&self, ctx: &NamingContext<'i>) -> Result<'i, Self::Resolved> {
        let WithInfo(info, term) = self;

        let term = match term {
            ast::RawTerm::Var { name } => {
                let Some(index) = ctx.find(name) else {
                    return Err(ResolveError::NameNotFound {
                        name: *name,
                        span: info.range(),
                    });
                };
                nl::RawTerm::Var(index)
            }
            ast::RawTerm::Abs {
                var_name,
                var_type,
                scope,
            } => nl::RawTerm::Abs {
                var_name: *var_name,
                var_type: var_type.clone(),
                scope: scope.resolve(&ctx.push(Binding::Type(*var_name, var_type.clone())))?,
            },
            ast::RawTerm::App { abs, arg } => nl::RawTerm::App {
                abs: abs.resolve(ctx)?,
                arg: arg.resolve(ctx)?,
            },
        };

        Ok(WithInfo(*info, term))
    }
}
