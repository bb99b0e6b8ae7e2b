use annotate_snippets::{Group, Level, Renderer};
use simply_typed::error::CompilationError;

pub fn render_error<'i>(
    error: impl Into<CompilationError<'i>>,
    source: &'i str,
    origin: &'i str,
) -> String {
    let error = error.into();
    let err_type = match &error {
        CompilationError::Parse(_) => "parse",
        CompilationError::Resolve(_) => "resolve",
        CompilationError::TypeCheck(_) => "type-check",
        CompilationError::Evaluation(_) => "evaluation",
    };

    let mut groups = error.into_record(source, origin);

    groups.insert(
        0,
        Group::with_title(Level::ERROR.primary_title(format!("aborting due to {err_type} error"))),
    );

    Renderer::plain().render(&groups)
}
