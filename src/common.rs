use std::fmt::Debug;

use derive_where::derive_where;

/// A value paired with diagnostic information.
///
/// Only the value takes part in equality and hashing, so two terms parsed from
/// different places in the source still compare equal.
#[derive(Clone, Copy)]
#[derive_where(Eq, PartialEq, Hash; T)]
pub struct WithInfo<I, T>(#[derive_where(skip(EqHashOrd))] pub I, pub T);

impl<I, T: Debug> Debug for WithInfo<I, T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        self.1.fmt(f)
    }
}
