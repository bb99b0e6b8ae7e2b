/// Forwards formatting traits through a single field newtype.
///
/// ```ignore
/// pub struct Idx(pub usize);
/// newtype_derive!(Idx(usize): Debug, Display);
/// ```
#[macro_export]
macro_rules! newtype_derive {
    ($newtype:ident($inner:ty): $($trait:ident),+ $(,)?) => {
        $($crate::newtype_derive!(@single $newtype($inner) $trait);)+
    };
    (@single $newtype:ident($inner:ty) Debug) => {
        impl std::fmt::Debug for $newtype {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                <$inner as std::fmt::Debug>::fmt(&self.0, f)
            }
        }
    };
    (@single $newtype:ident($inner:ty) Display) => {
        impl std::fmt::Display for $newtype {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                <$inner as std::fmt::Display>::fmt(&self.0, f)
            }
        }
    };
}
