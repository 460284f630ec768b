//! Lint Cypher read from standard input.
//!
//! Parse errors are reported on standard error with a context snippet and
//! caret; `--ast` dumps the structural AST to standard output. Exit codes:
//! `0` when at least one directive parsed, `1` when none did, `2` for
//! usage errors.

use std::io::{self, Read};
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;
use cypher_parser::ColorScheme;

#[derive(Debug, Parser)]
#[command(
    name = "cypher-lint",
    version = version_string(),
    about = "Parse Cypher from standard input and report errors",
    long_about = None
)]
struct Args {
    /// Print the AST to standard output.
    #[arg(short = 'a', long)]
    ast: bool,

    /// Emit ANSI colors regardless of where output goes.
    #[arg(long)]
    colorize: bool,

    /// Soft limit on rendered line width; 0 means unlimited.
    #[arg(long, value_name = "N", default_value_t = 0)]
    output_width: usize,
}

fn version_string() -> &'static str {
    Box::leak(
        format!(
            "{} (cypher-parser {})",
            env!("CARGO_PKG_VERSION"),
            cypher_parser::VERSION
        )
        .into_boxed_str(),
    )
}

fn main() -> ExitCode {
    let args = Args::parse();
    match run(&args) {
        Ok(true) => ExitCode::SUCCESS,
        Ok(false) => ExitCode::from(1),
        Err(err) => {
            eprintln!("cypher-lint: {err:#}");
            ExitCode::from(1)
        }
    }
}

fn run(args: &Args) -> anyhow::Result<bool> {
    let mut source = String::new();
    io::stdin()
        .lock()
        .read_to_string(&mut source)
        .context("reading standard input")?;

    let tree = cypher_parser::Parser::new(&source).parse();

    let colors = if args.colorize {
        ColorScheme::ansi()
    } else {
        ColorScheme::none()
    };

    for error in tree.errors() {
        eprint!("{}", error.render(&colors));
    }

    if args.ast {
        let stdout = io::stdout();
        let mut out = stdout.lock();
        tree.print(&mut out, args.output_width, &colors)
            .context("writing the AST")?;
    }

    Ok(tree.is_success())
}

#[cfg(test)]
mod tests {
    use clap::CommandFactory;

    #[test]
    fn cli_args_are_well_formed() {
        super::Args::command().debug_assert();
    }

    #[test]
    fn version_mentions_the_library() {
        assert!(super::version_string().contains("cypher-parser"));
    }
}
