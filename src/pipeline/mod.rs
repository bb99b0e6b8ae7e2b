use crate::{
    context::{Binding, NamingContext},
    error::CompilationError,
    evaluation::{evaluate, steps},
    parsing::{ParseError, Parser},
    reprs::{ast, nameless as nl, ty::Type},
    resolution::to_debruijn,
    typing::{TyConfig, get_type_with},
};

type Result<'i, T> = std::result::Result<T, CompilationError<'i>>;

/// Runs source text through parsing, resolution, type checking and
/// evaluation, with free variables bound by a [`NamingContext`].
pub struct Pipeline {
    parser: Parser,
    ty_config: TyConfig,
    check_types: bool,
}

impl Default for Pipeline {
    fn default() -> Self {
        Self::new(TyConfig::default())
    }
}

impl Pipeline {
    pub fn new(ty_config: TyConfig) -> Self {
        Self {
            parser: Parser::default(),
            ty_config,
            check_types: true,
        }
    }

    /// Evaluate terms without type checking them first.
    #[must_use]
    pub fn without_type_check(self) -> Self {
        Self {
            check_types: false,
            ..self
        }
    }

    pub fn parse<'i>(&self, source: &'i str) -> std::result::Result<ast::Term<'i>, ParseError<'i>> {
        self.parser.parse(source)
    }

    pub fn parse_binding<'i>(
        &self,
        source: &'i str,
    ) -> std::result::Result<Binding<'i>, ParseError<'i>> {
        self.parser.parse_binding(source)
    }

    /// Builds a context from `name` or `name: Type` bindings, outermost first.
    ///
    /// # Errors
    /// The first binding that fails to parse, along with its error.
    pub fn parse_context<'i>(
        &self,
        bindings: impl IntoIterator<Item = &'i str>,
    ) -> std::result::Result<NamingContext<'i>, (&'i str, ParseError<'i>)> {
        bindings
            .into_iter()
            .map(|source| self.parse_binding(source).map_err(|err| (source, err)))
            .collect()
    }

    pub fn resolve<'i>(&self, source: &'i str, ctx: &NamingContext<'i>) -> Result<'i, nl::Term<'i>> {
        let ast = self.parse(source)?;
        Ok(to_debruijn(&ast, ctx)?)
    }

    pub fn type_check<'i>(
        &self,
        source: &'i str,
        ctx: &NamingContext<'i>,
    ) -> Result<'i, (nl::Term<'i>, Type)> {
        let term = self.resolve(source, ctx)?;
        let ty = get_type_with(&term, self.ty_config, ctx)?;
        Ok((term, ty))
    }

    fn checked<'i>(
        &self,
        source: &'i str,
        ctx: &NamingContext<'i>,
    ) -> Result<'i, (nl::Term<'i>, Option<Type>)> {
        if self.check_types {
            self.type_check(source, ctx)
                .map(|(term, ty)| (term, Some(ty)))
        } else {
            self.resolve(source, ctx).map(|term| (term, None))
        }
    }

    /// Evaluates the term to a value or a stuck term, along with its type
    /// unless type checking is disabled.
    pub fn evaluate<'i>(
        &self,
        source: &'i str,
        ctx: &NamingContext<'i>,
    ) -> Result<'i, (nl::Term<'i>, Option<Type>)> {
        let (term, ty) = self.checked(source, ctx)?;
        Ok((evaluate(term)?, ty))
    }

    /// Like [`evaluate`][Self::evaluate] but returns every intermediate
    /// term, starting with the resolved input.
    pub fn trace<'i>(
        &self,
        source: &'i str,
        ctx: &NamingContext<'i>,
    ) -> Result<'i, (Vec<nl::Term<'i>>, Option<Type>)> {
        let (term, ty) = self.checked(source, ctx)?;

        let mut trace = vec![term.clone()];
        for step in steps(term) {
            trace.push(step?);
        }

        Ok((trace, ty))
    }
}
