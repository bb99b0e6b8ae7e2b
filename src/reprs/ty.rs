use std::fmt::{self, Display, Formatter};

use crate::{common::WithInfo, reprs::common::Span};

pub type Type = WithInfo<Span, RawType>;

#[derive(Clone, Eq, PartialEq, Hash, Debug)]
pub enum RawType {
    Bool,
    Fn { input: Box<Type>, output: Box<Type> },
}

impl RawType {
    pub fn at(self, span: Span) -> Type {
        WithInfo(span, self)
    }
}

impl Type {
    pub fn bool(span: Span) -> Self {
        RawType::Bool.at(span)
    }

    pub fn func(span: Span, input: Type, output: Type) -> Self {
        RawType::Fn {
            input: Box::new(input),
            output: Box::new(output),
        }
        .at(span)
    }

    pub fn is_fn(&self) -> bool {
        matches!(self.1, RawType::Fn { .. })
    }
}

impl Display for Type {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        self.1.fmt(f)
    }
}

impl Display for RawType {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            RawType::Bool => f.write_str("Bool"),
            RawType::Fn { input, output } => {
                if input.is_fn() {
                    write!(f, "({input}) -> {output}")
                } else {
                    write!(f, "{input} -> {output}")
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn b() -> Type {
        Type::bool(Span::default())
    }

    fn func(input: Type, output: Type) -> Type {
        Type::func(Span::default(), input, output)
    }

    #[test]
    fn display() {
        assert_eq!(b().to_string(), "Bool");
        assert_eq!(func(b(), b()).to_string(), "Bool -> Bool");
        assert_eq!(func(b(), func(b(), b())).to_string(), "Bool -> Bool -> Bool");
        assert_eq!(
            func(func(b(), b()), b()).to_string(),
            "(Bool -> Bool) -> Bool"
        );
    }

    #[test]
    fn equality_ignores_spans() {
        let here = Type::func(Span::new(0, 4), b(), Type::bool(Span::new(10, 14)));
        let there = Type::func(Span::new(20, 24), b(), b());
        assert_eq!(here, there);

        assert_ne!(func(b(), b()), b());
        assert_ne!(func(func(b(), b()), b()), func(b(), func(b(), b())));
    }
}
