//! Simple command that prints one or '-n count' UUIDv4 strings, optionally followed by the
//! bytes SQL Server stores for each of them ('-w')

use std::{env, io, io::Write, process::ExitCode};

struct Options {
    count: usize,
    wire: bool,
}

fn main() -> io::Result<ExitCode> {
    let opts = {
        let mut args = env::args();
        let program = args.next();
        match parse_args(args) {
            Ok(opts) => opts,
            Err(message) => {
                eprintln!("Error: {}", message);
                eprintln!(
                    "Usage: {} [-n count] [-w]",
                    program.as_deref().unwrap_or("mssql_uuid")
                );
                return Ok(ExitCode::FAILURE);
            }
        }
    };

    let mut g = mssql_uuid::V4Generator::with_rand08(rand::rngs::OsRng);
    let mut buf = io::BufWriter::new(io::stdout());
    for _ in 0..opts.count {
        let uuid = match g.generate() {
            Ok(uuid) => uuid,
            Err(err) => {
                buf.flush()?;
                eprintln!("Error: {}", err);
                return Ok(ExitCode::FAILURE);
            }
        };
        if opts.wire {
            let wire: Vec<String> = uuid
                .to_mssql_bytes()
                .iter()
                .map(|b| format!("{:02x}", b))
                .collect();
            writeln!(buf, "{} {}", uuid, wire.join(" "))?;
        } else {
            writeln!(buf, "{}", uuid)?;
        }
    }

    Ok(ExitCode::SUCCESS)
}

fn parse_args(mut args: impl Iterator<Item = String>) -> Result<Options, String> {
    let mut count = None;
    let mut wire = false;
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-w" => wire = true,
            "-n" => {
                if count.is_some() {
                    return Err("option 'n' given more than once".to_owned());
                }
                let Some(n_arg) = args.next() else {
                    return Err("argument to option 'n' missing".to_owned());
                };
                let Ok(c) = n_arg.parse() else {
                    return Err(format!("invalid argument to option 'n': '{}'", n_arg));
                };
                count.replace(c);
            }
            _ => return Err(format!("unrecognized argument '{}'", arg)),
        }
    }
    Ok(Options {
        count: count.unwrap_or(1),
        wire,
    })
}
