// bf2c: Brainfuck to C transpiler

mod codegen;
mod parser;
mod transpiler;

use std::fs;
use std::path::Path;
use std::process;

use codegen::emitter::EmitterConfig;
use transpiler::{Transpiler, Verbosity};

fn usage(program_name: &str) -> ! {
    eprintln!("Usage: {} [-e program | -i file] [-v]", program_name);
    eprintln!();
    eprintln!("  -e program   translate an inline Brainfuck string");
    eprintln!("  -i file      translate the contents of a Brainfuck file");
    eprintln!("  -v           report translation progress on stderr");
    eprintln!();
    eprintln!("The generated C program is written to stdout:");
    eprintln!("  {} -e '++[->+<]>.' > out.c && cc out.c", program_name);
    process::exit(1);
}

fn main() {
    let args: Vec<String> = std::env::args().collect();
    let program_name = args.first().map(|s| s.as_str()).unwrap_or("bf2c");

    let mut mode: Option<&str> = None;
    let mut input_arg: Option<&str> = None;
    let mut verbosity = Verbosity::Quiet;

    let mut rest = args[1..].iter();
    while let Some(arg) = rest.next() {
        match arg.as_str() {
            "-e" | "-i" => {
                if mode.is_some() {
                    eprintln!("Error: -e and -i cannot be combined");
                    usage(program_name);
                }
                mode = Some(arg.as_str());
                match rest.next() {
                    Some(value) => input_arg = Some(value.as_str()),
                    None => {
                        eprintln!("Error: {} requires an argument", arg);
                        usage(program_name);
                    }
                }
            }
            "-v" | "--verbose" => verbosity = Verbosity::Verbose,
            other => {
                eprintln!("Error: unrecognized argument '{}'", other);
                usage(program_name);
            }
        }
    }

    let (mode, input_arg) = match (mode, input_arg) {
        (Some(mode), Some(input_arg)) => (mode, input_arg),
        _ => {
            eprintln!("Error: no Brainfuck input provided");
            usage(program_name);
        }
    };

    let raw: Vec<u8> = match mode {
        "-e" => input_arg.as_bytes().to_vec(),
        _ => {
            if !Path::new(input_arg).exists() {
                eprintln!("Error: file '{}' not found", input_arg);
                process::exit(1);
            }
            // Raw bytes rather than a string: comment bytes in a source
            // file are not required to be valid UTF-8.
            match fs::read(input_arg) {
                Ok(bytes) => bytes,
                Err(e) => {
                    eprintln!("Error: could not read '{}': {}", input_arg, e);
                    process::exit(1);
                }
            }
        }
    };

    if verbosity == Verbosity::Verbose {
        eprintln!("bf2c: read {} byte(s) from {}", raw.len(), match mode {
            "-e" => "inline argument",
            _ => input_arg,
        });
    }

    let config = EmitterConfig {
        source_comment: true,
        ..EmitterConfig::default()
    };
    let transpiler = Transpiler::with_config(config, verbosity);

    match transpiler.translate(&raw) {
        Ok(program) => print!("{}", program),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(1);
        }
    }
}
