use clap::{Parser as ClapParser, Subcommand};
use mace_lang::cli::{self, CliError, EvalOptions, EvalOutcome};
use std::io::{self, Read};

#[derive(ClapParser)]
#[command(name = "mace")]
#[command(about = "Mace - An evaluator for infix arithmetic and logical expressions")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Parse and evaluate an expression
    Eval {
        /// The expression to evaluate (reads from stdin if not provided)
        expression: Option<String>,

        /// Print the result as JSON
        #[arg(short, long)]
        json: bool,

        /// Also print a postfix rendering of the parsed expression
        #[arg(long)]
        postfix: bool,

        /// Only validate syntax, don't evaluate
        #[arg(long)]
        syntax_only: bool,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Eval {
            expression,
            json,
            postfix,
            syntax_only,
        } => run_eval(expression, json, postfix, syntax_only),
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run_eval(
    expression: Option<String>,
    json: bool,
    postfix: bool,
    syntax_only: bool,
) -> Result<(), CliError> {
    let expression = match expression {
        Some(s) => s,
        None if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer).map_err(CliError::Io)?;
            buffer
        }
        None => return Err(CliError::NoInput),
    };

    let options = EvalOptions {
        expression,
        syntax_only,
        postfix,
    };

    match cli::execute_eval(&options)? {
        EvalOutcome::SyntaxValid => println!("Syntax is valid"),
        EvalOutcome::Success { result, postfix } => {
            if json {
                println!("{}", serde_json::json!({ "result": result }));
            } else {
                println!("{}", result);
            }
            if let Some(postfix) = postfix {
                println!("{}", postfix);
            }
        }
    }
    Ok(())
}
