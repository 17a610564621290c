use std::fs::File;
use std::io;
use std::io::prelude::*;
use std::io::BufReader;

mod common;
mod expression;
mod interpreter;
mod scope_stack;
mod statement;
mod symbol_table;
mod value;
mod variable;

use crate::common::{InterpretError, InterpretResult};
use crate::interpreter::Interpreter;

fn main() -> InterpretResult {
    init_tracing();
    let interpreter = Interpreter::new(io::stdout());
    if let Some(file_name) = std::env::args().nth(1) {
        run_file(&file_name, interpreter)
    } else {
        repl(interpreter)
    }
}

/// Logging stays off unless `RUST_LOG` is set, e.g. `RUST_LOG=borg=trace`.
fn init_tracing() {
    use tracing_subscriber::{fmt, prelude::*, EnvFilter};

    if std::env::var("RUST_LOG").is_ok() {
        tracing_subscriber::registry()
            .with(fmt::layer().with_writer(io::stderr).with_target(true))
            .with(EnvFilter::from_default_env())
            .init();
    }
}

fn repl<W: Write>(mut interpreter: Interpreter<W>) -> InterpretResult {
    loop {
        print!("> ");
        io::stdout().flush()?;
        let mut line = String::new();
        let bytes = io::stdin().read_line(&mut line)?;
        if bytes == 0 {
            println!();
            break;
        } else {
            interpreter.interpret_line(&line)?;
        }
    }
    Ok(())
}

fn run_file<W: Write>(file_name: &str, mut interpreter: Interpreter<W>) -> InterpretResult {
    let file = File::open(file_name).map_err(InterpretError::File)?;
    for line in BufReader::new(file).lines() {
        let line = line.map_err(InterpretError::File)?;
        interpreter.interpret_line(&line)?;
    }
    Ok(())
}
