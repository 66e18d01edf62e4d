use std::{
    fs,
    io::{self, Write},
    path::{Path, PathBuf},
};

use clap::{Parser, Subcommand};
use hellm::{
    format_source,
    interpreter::{
        evaluator::core::RunOptions,
        lexer::{format_tokens, tokenize},
        oracle::{
            Oracle,
            openai::{DEFAULT_BASE_URL, DEFAULT_MODEL, OpenAiOracle, OracleConfig},
            transcript::Transcript,
        },
    },
    run_source,
};

/// hellm is a language for 100x devs: every assignment and every branch is
/// decided by a language model.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Runs a program. Extra arguments are readable with `use`.
    Run {
        /// The program to run.
        file: PathBuf,

        /// Arguments passed to the program, indexed from 0. Everything after
        /// the file is passed through, so `hellm` flags must come before it.
        #[arg(trailing_var_arg = true, allow_hyphen_values = true)]
        args: Vec<String>,

        /// Fails a `while` loop once its body has run this many times.
        #[arg(long)]
        max_loop_iterations: Option<usize>,

        /// Writes every oracle prompt and reply to stderr.
        #[arg(short, long)]
        verbose: bool,

        #[command(flatten)]
        oracle: OracleArgs,
    },
    /// Prints the tokens of a file.
    Tokenize {
        /// The file to tokenize.
        file: PathBuf,

        /// Disables ANSI colors.
        #[arg(long)]
        no_color: bool,
    },
    /// Parses a file and prints it in canonical form.
    Parse {
        /// The file to parse.
        file: PathBuf,
    },
    /// Rewrites a file in canonical form.
    Format {
        /// The file to format.
        file: PathBuf,

        /// Only checks whether the file is already formatted.
        #[arg(long)]
        check: bool,
    },
}

/// Oracle connection settings; every flag falls back to its environment
/// variable.
#[derive(clap::Args, Debug)]
struct OracleArgs {
    /// API key for the chat-completions endpoint.
    #[arg(long, env = "OPENAI_KEY", hide_env_values = true)]
    api_key: Option<String>,

    /// Model name.
    #[arg(long, env = "OPENAI_MODEL", default_value = DEFAULT_MODEL)]
    model: String,

    /// API root; `/chat/completions` is appended.
    #[arg(long, env = "OPENAI_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,
}

impl From<OracleArgs> for OracleConfig {
    fn from(args: OracleArgs) -> Self {
        Self { api_key:  args.api_key.unwrap_or_default(),
               model:    args.model,
               base_url: args.base_url, }
    }
}

fn main() {
    let args = Args::parse();

    if let Err(e) = execute(args.command) {
        eprintln!("fatal error: {e}");
        std::process::exit(1);
    }
}

fn execute(command: Command) -> Result<(), Box<dyn std::error::Error>> {
    match command {
        Command::Run { file,
                       args,
                       max_loop_iterations,
                       verbose,
                       oracle, } => {
            let source = read_source(&file)?;
            let client = OpenAiOracle::new(oracle.into());
            let mut oracle: Box<dyn Oracle> = if verbose {
                Box::new(Transcript::new(client, io::stderr()))
            } else {
                Box::new(client)
            };

            let mut stdout = io::stdout().lock();
            run_source(&source,
                       &args,
                       oracle.as_mut(),
                       &mut stdout,
                       RunOptions { max_loop_iterations })?;
            stdout.flush()?;
        },
        Command::Tokenize { file, no_color } => {
            let tokens = tokenize(&read_source(&file)?)?;
            println!("{}", format_tokens(tokens.iter().map(|(t, _)| t), !no_color));
        },
        Command::Parse { file } => print!("{}", format_source(&read_source(&file)?)?),
        Command::Format { file, check } => {
            let source = read_source(&file)?;
            let formatted = format_source(&source)?;
            if check {
                if formatted != source {
                    return Err(format!("'{}' is not formatted.", file.display()).into());
                }
            } else {
                fs::write(&file, formatted)?;
            }
        },
    }

    Ok(())
}

fn read_source(path: &Path) -> Result<String, Box<dyn std::error::Error>> {
    fs::read_to_string(path).map_err(|e| {
                                 format!("Failed to read the input file '{}'. Perhaps this file does not exist? ({e})",
                                         path.display()).into()
                             })
}
