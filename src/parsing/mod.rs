use std::{
    borrow::Cow,
    fmt::{self, Display, Formatter},
};

use annotate_snippets::{AnnotationKind, Group, Level, Snippet};
use itertools::Itertools;
use lalrpop_util::lalrpop_mod;

use crate::{
    context::Binding,
    reprs::{ast::Term, ty::Type},
};

lalrpop_mod!(
    #[allow(clippy::pedantic)]
    syntax,
    "/parsing/syntax.rs"
);

type RawParseError<'i> =
    lalrpop_util::ParseError<usize, lalrpop_util::lexer::Token<'i>, UserParserError>;

type UserParserError = String;

pub struct ParseError<'i>(pub RawParseError<'i>);

impl<'i> From<RawParseError<'i>> for ParseError<'i> {
    fn from(value: RawParseError<'i>) -> Self {
        Self(value)
    }
}

impl fmt::Debug for ParseError<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        fmt::Debug::fmt(&self.0, f)
    }
}

impl Display for ParseError<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        Display::fmt(&self.0, f)
    }
}

#[derive(Default)]
pub struct Parser {
    term_parser: syntax::TermParser,
    type_parser: syntax::TypeParser,
    binding_parser: syntax::BindingParser,
}

impl Parser {
    pub fn parse<'i>(&self, input: &'i str) -> Result<Term<'i>, ParseError<'i>> {
        Ok(self.term_parser.parse(input)?)
    }

    pub fn parse_type<'i>(&self, input: &'i str) -> Result<Type, ParseError<'i>> {
        Ok(self.type_parser.parse(input)?)
    }

    /// Parses `name` or `name: Type`.
    pub fn parse_binding<'i>(&self, input: &'i str) -> Result<Binding<'i>, ParseError<'i>> {
        Ok(self.binding_parser.parse(input)?)
    }
}

impl<'i> ParseError<'i> {
    pub fn into_record(self, source: &'i str, origin: impl Into<Cow<'i, str>>) -> Vec<Group<'i>> {
        fn expected_list(expected: &[String]) -> String {
            match expected {
                [] => String::new(),
                [single] => format!("expected {single}"),
                _ => format!("expected one of {}", expected.iter().join(", ")),
            }
        }

        let snippet = Snippet::source(source).path(origin.into());

        let (title, span, label) = match self.0 {
            lalrpop_util::ParseError::InvalidToken { location } => (
                "invalid token".to_string(),
                location..location,
                String::new(),
            ),
            lalrpop_util::ParseError::UnrecognizedEof { location, expected } => (
                "unexpected end of input".to_string(),
                location..location,
                expected_list(&expected),
            ),
            lalrpop_util::ParseError::UnrecognizedToken {
                token: (start, token, end),
                expected,
            } => (
                format!("unexpected token `{token}`"),
                start..end,
                expected_list(&expected),
            ),
            lalrpop_util::ParseError::ExtraToken {
                token: (start, token, end),
            } => (
                format!("extra token `{token}`"),
                start..end,
                "expected end of input".to_string(),
            ),
            lalrpop_util::ParseError::User { error } => (error, 0..0, String::new()),
        };

        let group = Level::ERROR.primary_title(title).element(
            snippet.annotation(
                AnnotationKind::Primary
                    .span(span)
                    .label((!label.is_empty()).then_some(Cow::Owned(label))),
            ),
        );

        vec![group]
    }
}
