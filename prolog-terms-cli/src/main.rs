//! Command-line interface (CLI) for the term renderers.
//!
//! This binary reads a program described as JSON (the `serde` form of
//! [`Program`]) from a file or standard input and prints it in Prolog or
//! S-expression syntax.  Logging goes through `env_logger`; set
//! `RUST_LOG=debug` to see what is read and rendered.
//!
//! [`Program`]: prolog_terms::Program

mod error;

use clap::{Parser as ClapParser, Subcommand};
use error::CliError;
use prolog_terms::{Program, Rule, Syntax, Term, Value, Var};
use std::fs::File;
use std::io::{self, BufReader, Read};
use std::mem;

#[derive(ClapParser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Command
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Renders a program
    Render {
        /// Input JSON file with the program, `-` for stdin
        #[arg(short, long)]
        input: String,
        /// Output syntax: `prolog` or `sexpr`
        #[arg(short, long, default_value = "prolog")]
        syntax: Syntax,
        /// Fail on values with no faithful textual form
        #[arg(long)]
        strict: bool,
    },
    /// Prints sizes
    Sizes {},
}

fn main() -> Result<(), CliError> {
    env_logger::init();

    let args = Args::parse();

    match args.command {
        Commands::Render {
            input,
            syntax,
            strict,
        } => {
            let program = if input == "-" {
                read_program(io::stdin().lock())?
            } else {
                read_program(BufReader::new(File::open(&input)?))?
            };
            log::debug!("read {} clauses from {}", program.len(), input);
            let text = render(program, syntax, strict)?;
            if text.ends_with('\n') {
                print!("{}", text);
            } else {
                println!("{}", text);
            }
        }
        Commands::Sizes {} => {
            println!("Size of Value: {}", mem::size_of::<Value>());
            println!("Size of Term: {}", mem::size_of::<Term>());
            println!("Size of Rule: {}", mem::size_of::<Rule>());
            println!("Size of Program: {}", mem::size_of::<Program>());
            println!("Size of Var: {}", mem::size_of::<Var>());
            println!(
                "Size of smartstring String: {}",
                mem::size_of::<smartstring::alias::String>()
            );
            println!(
                "Size of std::string::String: {}",
                mem::size_of::<std::string::String>()
            );
        }
    }

    Ok(())
}

fn read_program(input: impl Read) -> Result<Program, CliError> {
    Ok(serde_json::from_reader(input)?)
}

fn render(program: Program, syntax: Syntax, strict: bool) -> Result<String, CliError> {
    let renderer = syntax.renderer();
    let value = Value::from(program);
    if strict {
        Ok(renderer.try_render(&value)?)
    } else {
        Ok(renderer.render(&value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use prolog_terms::{term, var};

    const ANCESTORS: &str = r#"{"entries": [
        {"rule": {
            "head": {"predicate": "ancestor", "args": [{"var": "X"}, {"var": "Y"}]},
            "body": {"conjunction": [
                {"term": {"predicate": "parent", "args": [{"var": "X"}, {"var": "Z"}]}},
                {"term": {"predicate": "ancestor", "args": [{"var": "Z"}, {"var": "Y"}]}}
            ]},
            "comments": ["recursive"]
        }},
        {"rule": {
            "head": {"predicate": "ancestor", "args": [{"var": "X"}, {"var": "Y"}]},
            "body": {"goal": {"term": {"predicate": "parent", "args": [{"var": "X"}, {"var": "Y"}]}}}
        }},
        {"term": {"predicate": "parent", "args": [{"atom": "a"}, {"atom": "B"}]}},
        {"term": {"predicate": "weight", "args": [{"list": [{"int": 1}, {"real": 2.5}]}, {"tuple": []}]}},
        {"term": {"predicate": "halt"}}
    ]}"#;

    fn init_logger() {
        let _ = env_logger::builder().is_test(true).try_init();
    }

    #[test]
    fn render_json_as_prolog() {
        init_logger();
        let program = read_program(ANCESTORS.as_bytes()).unwrap();
        assert_eq!(program.len(), 5);
        assert_eq!(
            render(program, Syntax::Prolog, false).unwrap(),
            "% recursive\n\
             ancestor(X, Y) :-\n    parent(X, Z), ancestor(Z, Y).\n\
             ancestor(X, Y) :-\n    parent(X, Y).\n\
             parent(a, 'B').\n\
             weight([1, 2.5], ()).\n\
             halt.\n"
        );
    }

    #[test]
    fn render_json_as_sexpr() {
        let program = read_program(ANCESTORS.as_bytes()).unwrap();
        assert_eq!(
            render(program, Syntax::SExpr, true).unwrap(),
            "; recursive\n\
             (<= (ancestor ?X ?Y) (parent ?X ?Z) (ancestor ?Z ?Y)) \
             (<= (ancestor ?X ?Y) (parent ?X ?Y)) \
             (parent a 'B') (weight (list 1 2.5) ()) (halt )"
        );
    }

    #[test]
    fn built_program_survives_json() {
        let original = Program::new([
            Value::from(term!("likes"; var!("X"), "wine").with_comment("taste")),
            term!("likes"; "mary", var!("X"))
                .implied_by(term!("likes"; var!("X"), "wine"))
                .into(),
        ]);
        let json = serde_json::to_string(&original).unwrap();
        let decoded = read_program(json.as_bytes()).unwrap();
        assert_eq!(decoded, original);
        assert_eq!(
            render(decoded, Syntax::Prolog, false).unwrap(),
            "% taste\nlikes(X, wine).\nlikes(mary, X) :-\n    likes(X, wine).\n"
        );
    }

    #[test]
    fn strict_mode_reports_empty_predicate() {
        let program = read_program(r#"{"entries": [{"term": {"predicate": ""}}]}"#.as_bytes())
            .unwrap();
        assert!(matches!(
            render(program.clone(), Syntax::Prolog, true),
            Err(CliError::Term(prolog_terms::TermError::EmptyPredicate))
        ));
        assert_eq!(render(program, Syntax::Prolog, false).unwrap(), ".\n");
    }

    #[test]
    fn malformed_json_is_an_error() {
        assert!(matches!(
            read_program(r#"{"entries": [{"bogus": 1}]}"#.as_bytes()),
            Err(CliError::Json(_))
        ));
    }

    #[test]
    fn other_values_do_not_serialize() {
        let program = Program::new([term!("flag"; Value::other(true))]);
        assert!(serde_json::to_string(&program).is_err());
    }

    #[test]
    fn cli_arguments() {
        let args = Args::try_parse_from(["prolog-terms", "render", "-i", "-", "-s", "sexpr"])
            .unwrap();
        match args.command {
            Commands::Render {
                input,
                syntax,
                strict,
            } => {
                assert_eq!(input, "-");
                assert_eq!(syntax, Syntax::SExpr);
                assert!(!strict);
            }
            other => panic!("unexpected command {:?}", other),
        }
        assert!(Args::try_parse_from(["prolog-terms", "render", "-i", "x", "-s", "json"]).is_err());
    }
}
