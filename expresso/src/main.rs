use expresso::repl::Console;
use rustyline::{error::ReadlineError, DefaultEditor};
use std::{fs, io::{self, IsTerminal, Read}, process::ExitCode};
use tracing_subscriber::EnvFilter;

/// Executes one line of input in the console, printing the result or reporting the error.
fn execute(input: &str, console: &mut Console) {
    match console.execute(input) {
        Ok(expr) => println!("{}", expr),
        Err(err) => {
            if let Err(io_err) = err.report_to_stderr("input") {
                eprintln!("{}: {}", err, io_err);
            }
        },
    }
}

/// Executes each non-empty line of the given source.
fn execute_lines(source: &str, console: &mut Console) {
    source
        .lines()
        .filter(|line| !line.trim().is_empty())
        .for_each(|line| execute(line, console));
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(io::stderr)
        .init();

    let mut args = std::env::args();
    args.next();

    let mut console = Console::new();

    if let Some(filename) = args.next() {
        // run each line of the file
        match fs::read_to_string(&filename) {
            Ok(source) => execute_lines(&source, &mut console),
            Err(err) => {
                eprintln!("could not read `{}`: {}", filename, err);
                return ExitCode::FAILURE;
            },
        }
    } else if !io::stdin().is_terminal() {
        // run each line of stdin
        let mut source = String::new();
        if let Err(err) = io::stdin().read_to_string(&mut source) {
            eprintln!("could not read stdin: {}", err);
            return ExitCode::FAILURE;
        }
        execute_lines(&source, &mut console);
    } else {
        // run the repl / interactive mode
        let mut rl = match DefaultEditor::new() {
            Ok(rl) => rl,
            Err(err) => {
                eprintln!("{}", err);
                return ExitCode::FAILURE;
            },
        };

        fn process_line(rl: &mut DefaultEditor, console: &mut Console) -> Result<(), ReadlineError> {
            let input = rl.readline("> ")?;
            if input.trim().is_empty() {
                return Ok(());
            }

            rl.add_history_entry(&input)?;

            execute(&input, console);
            Ok(())
        }

        loop {
            if let Err(err) = process_line(&mut rl, &mut console) {
                match err {
                    ReadlineError::Eof | ReadlineError::Interrupted => (),
                    _ => eprintln!("{}", err),
                }
                break;
            }
        }
    }

    ExitCode::SUCCESS
}
