use crate::reprs::{common::Idx, ty::Type};

#[derive(Clone, Eq, PartialEq, Debug)]
pub enum Binding<'i> {
    /// A name whose type is unknown.
    Name(&'i str),
    Type(&'i str, Type),
}

impl<'i> Binding<'i> {
    pub fn name(&self) -> &'i str {
        match self {
            Binding::Name(name) | Binding::Type(name, _) => name,
        }
    }

    pub fn ty(&self) -> Option<&Type> {
        match self {
            Binding::Name(_) => None,
            Binding::Type(_, ty) => Some(ty),
        }
    }
}

/// The bindings in scope, outermost first.
///
/// Extending the context produces a new one, leaving the original untouched,
/// so a binding lives exactly as long as the traversal of its scope.
#[must_use]
#[derive(Clone, Default, Eq, PartialEq, Debug)]
pub struct NamingContext<'i> {
    bindings: Vec<Binding<'i>>,
}

/// Typing uses the same stack of bindings, read through de Bruijn indices.
pub type TypingContext<'i> = NamingContext<'i>;

impl<'i> NamingContext<'i> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, binding: Binding<'i>) -> Self {
        let mut new = self.clone();
        new.bindings.push(binding);
        new
    }

    /// The innermost binding called `name`.
    pub fn find(&self, name: &str) -> Option<Idx> {
        Idx::find(&self.bindings, |binding| binding.name() == name)
    }

    pub fn get(&self, index: Idx) -> Option<&Binding<'i>> {
        index.get(&self.bindings)
    }

    pub fn len(&self) -> usize {
        self.bindings.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bindings.is_empty()
    }

    pub fn bindings(&self) -> &[Binding<'i>] {
        &self.bindings
    }

    pub fn names(&self) -> impl DoubleEndedIterator<Item = &'i str> + '_ {
        self.bindings.iter().map(Binding::name)
    }
}

impl<'i> FromIterator<Binding<'i>> for NamingContext<'i> {
    fn from_iter<T: IntoIterator<Item = Binding<'i>>>(iter: T) -> Self {
        Self {
            bindings: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::reprs::common::Span;

    fn b() -> Type {
        Type::bool(Span::default())
    }

    #[test]
    fn push_leaves_the_original_untouched() {
        let outer: NamingContext = [Binding::Type("a", b())].into_iter().collect();
        let inner = outer.push(Binding::Name("b"));

        assert_eq!(outer.len(), 1);
        assert_eq!(inner.len(), 2);
        assert_eq!(inner.names().collect::<Vec<_>>(), ["a", "b"]);
        assert_eq!(outer.find("b"), None);
        assert_eq!(inner.find("b"), Some(Idx(0)));
        assert_eq!(inner.find("a"), Some(Idx(1)));
    }

    #[test]
    fn innermost_binding_shadows() {
        let ctx: NamingContext = [
            Binding::Type("x", b()),
            Binding::Name("y"),
            Binding::Type("x", Type::func(Span::default(), b(), b())),
        ]
        .into_iter()
        .collect();

        let index = ctx.find("x");
        assert_eq!(index, Some(Idx(0)));
        assert_eq!(
            ctx.get(Idx(0)).and_then(Binding::ty).map(ToString::to_string),
            Some("Bool -> Bool".to_string())
        );
        assert_eq!(ctx.get(Idx(1)), Some(&Binding::Name("y")));
        assert_eq!(ctx.get(Idx(3)), None);
    }
}
