use std::env;
use std::process::ExitCode;

use ninecc::codegen;
use ninecc::error::CompileError;
use ninecc::lexer;
use ninecc::parser;

fn main() -> ExitCode {
    env_logger::init();

    let args: Vec<String> = env::args().collect();
    if args.len() != 2 {
        log::error!("expected exactly one argument, got {}", args.len() - 1);
        eprintln!("{}", CompileError::Usage);
        return ExitCode::FAILURE;
    }
    let source = &args[1];

    match compile(source) {
        Ok(asm) => {
            print!("{asm}");
            ExitCode::SUCCESS
        }
        Err(err) => {
            log::error!("compilation failed: {err}");
            eprintln!("{}", err.render(source));
            ExitCode::FAILURE
        }
    }
}

fn compile(source: &str) -> Result<String, CompileError> {
    let tokens = lexer::tokenize(source)?;
    let parsed = parser::parse(&tokens, source)?;
    Ok(codegen::generate(&parsed))
}
