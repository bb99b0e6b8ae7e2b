use std::{io::Read, process::ExitCode};

use clap::{Parser, Subcommand};
use clio::Input;
use itertools::Itertools;

use simply_typed::{
    error::CompilationError,
    pipeline::Pipeline,
    typing::{ApplicationCheck, TyConfig},
};

#[derive(Parser)]
#[command(
    version,
    about, long_about = None,
    disable_help_subcommand = true
)]
struct Cli {
    /// Source file to use.
    #[arg(default_value = "-")]
    source_file: Input,

    /// Declare a free variable as `name` or `name:Type`, outermost first.
    #[arg(long = "bind", value_name = "BINDING")]
    bindings: Vec<String>,

    /// Only compare the outermost type former of an argument against the
    /// function's input type.
    #[arg(long)]
    tag_only: bool,

    /// Evaluate without type checking first.
    #[arg(long)]
    no_type_check: bool,

    #[command(subcommand)]
    subcommands: Subcommands,
}

#[derive(Subcommand)]
enum Subcommands {
    /// Parse source, displaying a representation on stdout
    Parse,
    /// Parse source and resolve its names, displaying a representation on stdout
    Resolve,
    /// Parse, resolve and type-check source, displaying the term and its type on stdout
    TypeCheck,
    /// Parse, resolve, type-check and evaluate source, displaying the result on stdout
    Evaluate,
    /// Like `evaluate` but display every reduction step
    Trace,
}

fn program() -> Result<(), String> {
    let mut cli = Cli::parse();

    let mut input = String::new();
    cli.source_file
        .read_to_string(&mut input)
        .map_err(|e| format!("failed to read input:\n{e}"))?;

    let origin = cli.source_file.to_string();

    let ty_config = TyConfig {
        application: if cli.tag_only {
            ApplicationCheck::TagOnly
        } else {
            ApplicationCheck::Structural
        },
    };
    let mut pipeline = Pipeline::new(ty_config);
    if cli.no_type_check {
        pipeline = pipeline.without_type_check();
    }

    let ctx = pipeline
        .parse_context(cli.bindings.iter().map(String::as_str))
        .map_err(|(binding, err)| CompilationError::from(err).render_styled(binding, "--bind"))?;

    let with_type = |term: String, ty: Option<_>| match ty {
        Some(ty) => format!("{term}\n: {ty}"),
        None => term,
    };

    let result = match cli.subcommands {
        Subcommands::Parse => pipeline
            .parse(&input)
            .map(|ast| format!("{ast:#?}"))
            .map_err(CompilationError::from),
        Subcommands::Resolve => pipeline
            .resolve(&input, &ctx)
            .map(|term| format!("{}\n{term:#?}", term.display(&ctx))),
        Subcommands::TypeCheck => pipeline
            .type_check(&input, &ctx)
            .map(|(term, ty)| with_type(term.display(&ctx), Some(ty))),
        Subcommands::Evaluate => pipeline
            .evaluate(&input, &ctx)
            .map(|(value, ty)| with_type(value.display(&ctx), ty)),
        Subcommands::Trace => pipeline.trace(&input, &ctx).map(|(trace, ty)| {
            let steps = trace
                .iter()
                .enumerate()
                .map(|(i, term)| {
                    let arrow = if i == 0 { "  " } else { "->" };
                    format!("{arrow} {}", term.display(&ctx))
                })
                .join("\n");
            with_type(steps, ty)
        }),
    };

    match result {
        Ok(res) => {
            println!("{res}");
            Ok(())
        }
        Err(err) => Err(err.render_styled(&input, &origin)),
    }
}

fn main() -> ExitCode {
    match program() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("{e}");
            ExitCode::FAILURE
        }
    }
}
