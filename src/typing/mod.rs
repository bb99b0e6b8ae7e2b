use crate::{
    common::WithInfo,
    context::{Binding, TypingContext},
    reprs::{
        nameless as nl,
        ty::{RawType, Type},
        variant::Tagged,
    },
};

pub use self::error::TypeCheckError;

mod error;

/// How an application's argument is checked against the function's input.
#[derive(Copy, Clone, Default, Eq, PartialEq, Debug)]
pub enum ApplicationCheck {
    /// The argument type must equal the declared input type and the
    /// application has the function's output type.
    #[default]
    Structural,
    /// Only the outermost type formers are compared and the application has
    /// the argument's type.
    ///
    /// Accepts ill-typed terms such as `(\f:Bool -> Bool. f) (\x:Bool. \y:Bool. x)`.
    TagOnly,
}

#[derive(Copy, Clone, Default, Eq, PartialEq, Debug)]
pub struct TyConfig {
    pub application: ApplicationCheck,
}

impl TyConfig {
    pub fn tag_only() -> Self {
        Self {
            application: ApplicationCheck::TagOnly,
        }
    }
}

type Result<'i, T> = std::result::Result<T, TypeCheckError<'i>>;

trait TypeCheck<'i> {
    fn get_type(&self, ty_config: TyConfig, ctx: &TypingContext<'i>) -> Result<'i, Type>;
}

/// Synthesizes the type of `term`, with free variables typed by `ctx`.
///
/// Uses [`ApplicationCheck::Structural`]: an argument must have exactly the
/// function's input type and the application has the function's output type.
/// [`get_type_with`] and [`TyConfig::tag_only`] give the tag-only check,
/// where an application has its argument's type.
///
/// # Errors
/// When `term` is ill-typed, or refers to a binding of `ctx` that is
/// missing or has no type.
pub fn get_type<'i>(term: &nl::Term<'i>, ctx: &TypingContext<'i>) -> Result<'i, Type> {
    term.get_type(TyConfig::default(), ctx)
}

/// [`get_type`] with explicit configuration.
///
/// # Errors
/// See [`get_type`].
pub fn get_type_with<'i>(
    term: &nl::Term<'i>,
    ty_config: TyConfig,
    ctx: &TypingContext<'i>,
) -> Result<'i, Type> {
    term.get_type(ty_config, ctx)
}

impl<'i, T: TypeCheck<'i>> TypeCheck<'i> for Box<T> {
    fn get_type(&self, ty_config: TyConfig, ctx: &TypingContext<'i>) -> Result<'i, Type> {
        T::get_type(self, ty_config, ctx)
    }
}

impl<'i> TypeCheck<'i> for nl::Term<'i> {
    fn get_type(&self, ty_config: TyConfig, ctx: &TypingContext<'i>) -> Result<'i, Type> {
        let WithInfo(info, term) = self;

        let ty = match term {
            nl::RawTerm::Var(index) => {
                let Some(binding) = ctx.get(*index) else {
                    return Err(TypeCheckError::UnboundIndex {
                        index: *index,
                        depth: ctx.len(),
                        span: info.range(),
                    });
                };
                let Some(ty) = binding.ty() else {
                    return Err(TypeCheckError::UntypedBinding {
                        name: binding.name(),
                        index: *index,
                        span: info.range(),
                    });
                };
                ty.clone()
            }
            nl::RawTerm::Abs {
                var_name,
                var_type,
                scope,
            } => {
                let ctx_ = ctx.push(Binding::Type(*var_name, var_type.clone()));
                let scope_type = scope.get_type(ty_config, &ctx_)?;

                Type::func(*info, var_type.clone(), scope_type)
            }
            nl::RawTerm::App { abs, arg } => {
                let abs_type = abs.get_type(ty_config, ctx)?;
                let arg_type = arg.get_type(ty_config, ctx)?;

                let RawType::Fn { input, output } = &abs_type.1 else {
                    return Err(TypeCheckError::NotAFunction {
                        found: abs_type.clone(),
                        span: abs.0.range(),
                    });
                };

                match ty_config.application {
                    ApplicationCheck::Structural if **input == arg_type => output.as_ref().clone(),
                    ApplicationCheck::TagOnly if input.same_tag(&arg_type) => arg_type,
                    ApplicationCheck::Structural | ApplicationCheck::TagOnly => {
                        return Err(TypeCheckError::Mismatch {
                            expected: input.as_ref().clone(),
                            found: arg_type,
                            span: arg.0.range(),
                            abs_span: abs.0.range(),
                        });
                    }
                }
            }
        };

        Ok(ty)
    }
}
