pub mod ast;
pub mod common;
pub mod nameless;
pub mod ty;
pub mod variant;

/// The locally-nameless term: variables are de Bruijn indices.
pub type DTerm<'i> = nameless::Term<'i>;
