use clap::{Parser as ClapParser, Subcommand};
use picket_lang::cli::{self, CliError, EvalOptions, EvalOutcome};
use std::io::{self, Read};

#[derive(ClapParser)]
#[command(name = "picket")]
#[command(about = "Picket - A boolean filter expression language with prefix-tree field lookup")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Evaluate a filter expression against a JSON document
    Eval {
        /// The filter expression to evaluate
        expression: String,

        /// JSON data (reads from stdin if not provided)
        #[arg(short, long)]
        data: Option<String>,
    },

    /// Validate a filter expression without evaluating it
    Check {
        /// The filter expression to validate
        expression: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let result = match cli.command {
        Commands::Eval { expression, data } => run_eval(expression, data),
        Commands::Check { expression } => run_check(expression),
    };

    if let Err(e) = result {
        eprintln!("{}", e);
        std::process::exit(1);
    }
}

fn run_eval(expression: String, data: Option<String>) -> Result<(), CliError> {
    let data = match data {
        Some(s) => Some(s),
        None if !atty::is(atty::Stream::Stdin) => {
            let mut buffer = String::new();
            io::stdin().read_to_string(&mut buffer).map_err(CliError::Io)?;
            Some(buffer)
        }
        None => None,
    };

    let options = EvalOptions {
        expression,
        data,
        syntax_only: false,
    };

    match cli::execute_eval(&options)? {
        EvalOutcome::Evaluated(result) => println!("{}", result),
        EvalOutcome::SyntaxValid => {}
    }
    Ok(())
}

fn run_check(expression: String) -> Result<(), CliError> {
    let options = EvalOptions {
        expression,
        data: None,
        syntax_only: true,
    };

    match cli::execute_eval(&options)? {
        EvalOutcome::SyntaxValid => println!("Syntax is valid"),
        EvalOutcome::Evaluated(_) => {}
    }
    Ok(())
}
