//! Command that prints the fields of a UUID given as 'decode <uuid>'

use std::{env, io, io::Write, process::ExitCode};

use rfc4122::Uuid;

fn main() -> io::Result<ExitCode> {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let input = {
        let mut args = env::args();
        let program = args.next();
        match parse_args(args) {
            Ok(input) => input,
            Err(message) => {
                eprintln!("Error: {}", message);
                eprintln!(
                    "Usage: {} decode <uuid>",
                    program.as_deref().unwrap_or("rfc4122")
                );
                return Ok(ExitCode::FAILURE);
            }
        }
    };

    let mut buf = io::BufWriter::new(io::stdout());
    match decode(&input, &mut buf) {
        Ok(()) => {
            buf.flush()?;
            Ok(ExitCode::SUCCESS)
        }
        Err(DecodeError::Invalid) => {
            eprintln!("Invalid UUID ({})", input);
            Ok(ExitCode::FAILURE)
        }
        Err(DecodeError::Io(err)) => Err(err),
    }
}

/// Returns the UUID argument of the 'decode' subcommand.
fn parse_args(mut args: impl Iterator<Item = String>) -> Result<String, String> {
    let Some(command) = args.next() else {
        return Err("subcommand missing".to_owned());
    };
    if command != "decode" {
        return Err(format!("unrecognized subcommand '{}'", command));
    }
    let Some(input) = args.next() else {
        return Err("argument to subcommand 'decode' missing".to_owned());
    };
    if let Some(arg) = args.next() {
        return Err(format!("unrecognized argument '{}'", arg));
    }
    Ok(input)
}

#[derive(Debug)]
enum DecodeError {
    Invalid,
    Io(io::Error),
}

fn decode(input: &str, out: &mut impl Write) -> Result<(), DecodeError> {
    if !Uuid::is_valid(input) {
        tracing::debug!(input, "rejected invalid UUID");
        return Err(DecodeError::Invalid);
    }
    let uuid = Uuid::parse_str(input).map_err(|_| DecodeError::Invalid)?;
    write!(out, "{}", uuid.decode()).map_err(DecodeError::Io)
}
