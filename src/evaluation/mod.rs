use crate::{
    common::WithInfo,
    reprs::{common::Idx, nameless as nl},
};

pub use self::error::EvaluationError;

mod error {
    use std::fmt::{self, Display, Formatter};

    use annotate_snippets::{Group, Level};

    #[derive(Clone, Eq, PartialEq, Debug)]
    pub enum EvaluationError {
        Illegal(String),
    }

    impl Display for EvaluationError {
        fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
            match self {
                EvaluationError::Illegal(str) => write!(f, "illegal error (bug): {str}"),
            }
        }
    }

    impl EvaluationError {
        pub fn into_record(self) -> Vec<Group<'static>> {
            let group = match self {
                EvaluationError::Illegal(str) => Level::ERROR
                    .primary_title("illegal error (bug)")
                    .element(Level::ERROR.message(str)),
            };

            vec![group]
        }
    }
}

type Result<T> = std::result::Result<T, EvaluationError>;

impl<'i> nl::Term<'i> {
    /// Abstractions are the only values; variables are stuck.
    pub fn is_value(&self) -> bool {
        matches!(self.1, nl::RawTerm::Abs { .. })
    }

    /// Adds `d` to every variable index that is at least `cutoff`, ie. every
    /// variable bound outside of the term when `cutoff` is 0.
    ///
    /// # Errors
    /// When an index would become negative.
    pub fn shift(&self, d: isize, cutoff: usize) -> Result<Self> {
        let WithInfo(info, term) = self;

        let term = match term {
            nl::RawTerm::Var(index) if index.0 < cutoff => nl::RawTerm::Var(*index),
            nl::RawTerm::Var(index) => nl::RawTerm::Var(index.shifted(d).ok_or_else(|| {
                EvaluationError::Illegal(format!("shifting index {index} by {d} leaves no binder"))
            })?),
            nl::RawTerm::Abs {
                var_name,
                var_type,
                scope,
            } => nl::RawTerm::Abs {
                var_name: *var_name,
                var_type: var_type.clone(),
                scope: Box::new(scope.shift(d, cutoff + 1)?),
            },
            nl::RawTerm::App { abs, arg } => nl::RawTerm::App {
                abs: Box::new(abs.shift(d, cutoff)?),
                arg: Box::new(arg.shift(d, cutoff)?),
            },
        };

        Ok(WithInfo(*info, term))
    }

    /// Replaces every free occurrence of `target` with `replacement`.
    ///
    /// `replacement` must already be valid at the root of `self`; it is
    /// shifted as it is carried under binders.
    ///
    /// # Errors
    /// See [`shift`][Self::shift].
    pub fn substitute(&self, target: Idx, replacement: &Self) -> Result<Self> {
        let WithInfo(info, term) = self;

        let term = match term {
            nl::RawTerm::Var(index) if *index == target => return Ok(replacement.clone()),
            nl::RawTerm::Var(index) => nl::RawTerm::Var(*index),
            nl::RawTerm::Abs {
                var_name,
                var_type,
                scope,
            } => nl::RawTerm::Abs {
                var_name: *var_name,
                var_type: var_type.clone(),
                scope: Box::new(scope.substitute(Idx(target.0 + 1), &replacement.shift(1, 0)?)?),
            },
            nl::RawTerm::App { abs, arg } => nl::RawTerm::App {
                abs: Box::new(abs.substitute(target, replacement)?),
                arg: Box::new(arg.substitute(target, replacement)?),
            },
        };

        Ok(WithInfo(*info, term))
    }

    /// Performs a single call-by-value reduction, returning whether one
    /// applied along with the resulting term.
    ///
    /// The function position is reduced to a value before the argument,
    /// and no reduction happens under abstractions.
    ///
    /// # Errors
    /// When the term breaks the locally-nameless invariants.
    pub fn evaluate_step(self) -> Result<(bool, Self)> {
        let WithInfo(info, term) = self;

        match term {
            nl::RawTerm::App { abs, arg } => {
                if !abs.is_value() {
                    let (applied, abs) = (*abs).evaluate_step()?;
                    Ok((
                        applied,
                        nl::RawTerm::App {
                            abs: Box::new(abs),
                            arg,
                        }
                        .at(info),
                    ))
                } else if !arg.is_value() {
                    let (applied, arg) = (*arg).evaluate_step()?;
                    Ok((
                        applied,
                        nl::RawTerm::App {
                            abs,
                            arg: Box::new(arg),
                        }
                        .at(info),
                    ))
                } else {
                    let nl::RawTerm::Abs { scope, .. } = abs.1 else {
                        return Err(EvaluationError::Illegal(
                            "applied a value that is not an abstraction".to_string(),
                        ));
                    };
                    let reduced = scope.substitute(Idx(0), &arg.shift(1, 0)?)?.shift(-1, 0)?;
                    Ok((true, reduced))
                }
            }
            term => Ok((false, term.at(info))),
        }
    }
}

/// Reduces `term` until no rule applies, returning the resulting value or
/// stuck term.
///
/// # Errors
/// When evaluation fails.
pub fn evaluate(term: nl::Term<'_>) -> Result<nl::Term<'_>> {
    let (mut applied, mut term) = term.evaluate_step()?;
    while applied {
        (applied, term) = term.evaluate_step()?;
    }
    Ok(term)
}

/// Iterates over the terms produced by each successive reduction of `term`,
/// not including `term` itself.
pub fn steps(term: nl::Term<'_>) -> Steps<'_> {
    Steps { next: Some(term) }
}

#[derive(Clone, Debug)]
pub struct Steps<'i> {
    next: Option<nl::Term<'i>>,
}

impl<'i> Iterator for Steps<'i> {
    type Item = Result<nl::Term<'i>>;

    fn next(&mut self) -> Option<Self::Item> {
        match self.next.take()?.evaluate_step() {
            Ok((true, term)) => {
                self.next = Some(term.clone());
                Some(Ok(term))
            }
            Ok((false, _)) => None,
            Err(err) => Some(Err(err)),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::{
        context::{Binding, NamingContext},
        parsing::tests::parse_success,
        reprs::{
            common::Span,
            nameless::RawTerm,
            ty::Type,
        },
        resolution::to_debruijn,
    };

    fn var(index: usize) -> nl::Term<'static> {
        RawTerm::Var(Idx(index)).at(Span::default())
    }

    fn abs(var_name: &'static str, scope: nl::Term<'static>) -> nl::Term<'static> {
        RawTerm::Abs {
            var_name,
            var_type: Type::bool(Span::default()),
            scope: Box::new(scope),
        }
        .at(Span::default())
    }

    fn app(l: nl::Term<'static>, r: nl::Term<'static>) -> nl::Term<'static> {
        RawTerm::App {
            abs: Box::new(l),
            arg: Box::new(r),
        }
        .at(Span::default())
    }

    fn ctx(names: &[&'static str]) -> NamingContext<'static> {
        names.iter().map(|name| Binding::Name(*name)).collect()
    }

    /// Open and closed terms, with nested binders and free variables both
    /// below and above the cutoffs used in the tests.
    fn terms() -> Vec<nl::Term<'static>> {
        vec![
            var(0),
            var(3),
            abs("a", var(0)),
            abs("a", app(var(0), var(1))),
            abs("a", abs("b", app(app(var(0), var(1)), var(4)))),
            app(abs("a", app(var(0), var(2))), var(1)),
            app(app(var(2), abs("x", var(0))), abs("y", abs("z", var(5)))),
            // redexes
            app(abs("a", abs("b", app(var(1), var(2)))), abs("c", var(0))),
            app(abs("a", var(0)), abs("b", abs("c", app(var(1), var(3))))),
            app(
                app(abs("f", abs("x", app(var(1), var(0)))), abs("y", var(0))),
                abs("z", var(2)),
            ),
        ]
    }

    #[track_caller]
    fn resolve<'i>(src: &'i str, ctx: &NamingContext<'i>) -> nl::Term<'i> {
        match to_debruijn(&parse_success(src), ctx) {
            Ok(o) => o,
            Err(e) => panic!("resolve failure:\n'{}'\n{}", src, e),
        }
    }

    #[track_caller]
    fn evaluate_success<'i>(src: &'i str, ctx: &NamingContext<'i>) -> String {
        match evaluate(resolve(src, ctx)) {
            Ok(o) => o.display(ctx),
            Err(e) => panic!("evaluation failure:\n'{}'\n{}", src, e),
        }
    }

    #[test]
    fn shifting() {
        let term = app(abs("a", app(var(0), var(1))), var(0));

        assert_eq!(
            term.shift(2, 0),
            Ok(app(abs("a", app(var(0), var(3))), var(2)))
        );
        assert_eq!(
            term.shift(2, 1),
            Ok(app(abs("a", app(var(0), var(1))), var(0)))
        );

        assert!(matches!(
            term.shift(-1, 0),
            Err(EvaluationError::Illegal(_))
        ));
    }

    #[test]
    fn shifting_round_trips() {
        for term in terms() {
            for cutoff in [0, 1, 3] {
                for d in [0, 1, 2, 5] {
                    let shifted = term.shift(d, cutoff).unwrap();
                    assert_eq!(
                        shifted.shift(-d, cutoff),
                        Ok(term.clone()),
                        "{term} by {d} from {cutoff}"
                    );
                }
            }
        }
    }

    #[test]
    fn substitution() {
        // both occurrences of index 1 are replaced, the bound one is not
        let term = app(abs("a", app(var(2), var(0))), var(1));
        assert_eq!(
            term.substitute(Idx(1), &var(3)),
            Ok(app(abs("a", app(var(4), var(0))), var(3)))
        );

        // the replacement's free variables are adjusted under binders
        assert_eq!(
            abs("c", var(2)).substitute(Idx(1), &abs("c", var(1))),
            Ok(abs("c", abs("c", var(2))))
        );

        // terms without the target are left alone
        let closed = abs("x", var(0));
        assert_eq!(closed.substitute(Idx(0), &var(7)), Ok(closed.clone()));
    }

    #[test]
    fn values() {
        assert!(abs("x", var(0)).is_value());
        assert!(!var(0).is_value());
        assert!(!app(abs("x", var(0)), abs("x", var(0))).is_value());
    }

    #[test]
    fn beta_reduction() {
        let ctx = ctx(&["b"]);
        let term = resolve(r"(\a:Bool -> Bool. a b) (\c:Bool. c)", &ctx);

        let (applied, reduced) = term.evaluate_step().unwrap();
        assert!(applied);
        // `b` is one binder further out after the reduction
        assert_eq!(reduced, app(abs("c", var(0)), var(0)));
        assert_eq!(reduced.display(&ctx), r"(\c:Bool. c) b");

        // the argument `b` is stuck, so nothing more happens
        assert_eq!(evaluate(reduced.clone()), Ok(reduced));
    }

    #[test]
    fn beta_reduction_of_free_variables() {
        assert_eq!(
            evaluate(app(abs("c", var(2)), abs("c", var(1)))),
            Ok(var(1))
        );
    }

    #[test]
    fn stuck_terms() {
        let ctx = ctx(&["b", "c", "d"]);
        let term = resolve(r"(\a:Bool. b a c) d", &ctx);

        assert_eq!(term.clone().evaluate_step(), Ok((false, term.clone())));
        assert_eq!(evaluate(term.clone()), Ok(term));

        let head = resolve(r"b (\x:Bool. x) ((\y:Bool. y) c)", &ctx);
        assert_eq!(evaluate(head.clone()), Ok(head));
    }

    #[test]
    fn call_by_value() {
        let ctx = NamingContext::new();

        assert_eq!(
            evaluate_success(
                r"(\f:Bool -> Bool. \x:Bool. f x) (\y:Bool. y)",
                &ctx
            ),
            // no reduction under abstractions
            r"\x:Bool. (\y:Bool. y) x"
        );
        assert_eq!(
            evaluate_success(
                r"(\x:Bool -> Bool. x) ((\y:Bool -> Bool. y) (\z:Bool. z))",
                &ctx
            ),
            r"\z:Bool. z"
        );
    }

    #[test]
    fn evaluation_order() {
        let ctx = NamingContext::new();
        let term = resolve(
            r"((\x:Bool -> Bool. x) (\y:Bool. y)) ((\z:Bool -> Bool. z) (\w:Bool. w))",
            &ctx,
        );

        let trace = steps(term)
            .map(|step| step.map(|term| term.display(&ctx)))
            .collect::<Result<Vec<_>>>();

        assert_eq!(
            trace,
            Ok(vec![
                r"(\y:Bool. y) ((\z:Bool -> Bool. z) (\w:Bool. w))".to_string(),
                r"(\y:Bool. y) (\w:Bool. w)".to_string(),
                r"\w:Bool. w".to_string(),
            ])
        );
    }

    #[test]
    fn evaluation_is_idempotent() {
        let ctx = ctx(&["b"]);
        let parsed = [
            r"(\a:Bool -> Bool. a b) (\c:Bool. c)",
            r"(\x:Bool. x) b",
            r"\x:Bool. x",
            r"b b",
        ]
        .map(|src| resolve(src, &ctx));

        for term in terms().into_iter().chain(parsed) {
            let once = evaluate(term.clone()).unwrap();
            assert_eq!(evaluate(once.clone()), Ok(once), "{term}");
        }
    }
}
