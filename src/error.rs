use std::fmt::{self, Display, Formatter};

use annotate_snippets::{Group, Renderer};

use crate::{
    evaluation::EvaluationError, parsing::ParseError, resolution::ResolveError,
    typing::TypeCheckError,
};

#[derive(Debug)]
pub enum CompilationError<'i> {
    Parse(ParseError<'i>),
    Resolve(ResolveError<'i>),
    TypeCheck(TypeCheckError<'i>),
    Evaluation(EvaluationError),
}

impl<'i> From<ParseError<'i>> for CompilationError<'i> {
    fn from(value: ParseError<'i>) -> Self {
        Self::Parse(value)
    }
}

impl<'i> From<ResolveError<'i>> for CompilationError<'i> {
    fn from(value: ResolveError<'i>) -> Self {
        Self::Resolve(value)
    }
}

impl<'i> From<TypeCheckError<'i>> for CompilationError<'i> {
    fn from(value: TypeCheckError<'i>) -> Self {
        Self::TypeCheck(value)
    }
}

impl From<EvaluationError> for CompilationError<'_> {
    fn from(value: EvaluationError) -> Self {
        Self::Evaluation(value)
    }
}

impl Display for CompilationError<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Parse(err) => write!(f, "parse error: {err}"),
            Self::Resolve(err) => write!(f, "resolve error: {err}"),
            Self::TypeCheck(err) => write!(f, "type error: {err}"),
            Self::Evaluation(err) => write!(f, "evaluation error: {err}"),
        }
    }
}

impl<'i> CompilationError<'i> {
    pub fn into_record(self, source: &'i str, origin: &'i str) -> Vec<Group<'i>> {
        match self {
            Self::Parse(parse_error) => parse_error.into_record(source, origin),
            Self::Resolve(resolve_error) => resolve_error.into_record(source, origin),
            Self::TypeCheck(type_check_error) => type_check_error.into_record(source, origin),
            Self::Evaluation(evaluation_error) => evaluation_error.into_record(),
        }
    }

    pub fn render_styled(self, source: &'i str, origin: &'i str) -> String {
        Renderer::styled().render(&self.into_record(source, origin))
    }

    pub fn render_plain(self, source: &'i str, origin: &'i str) -> String {
        Renderer::plain().render(&self.into_record(source, origin))
    }
}
