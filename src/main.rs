use std::error::Error;
use std::io;
use std::process::ExitCode;

use tracing_subscriber::EnvFilter;

use unicode_longest_mapping::{open, output, scan, INPUT_FILE};

fn main() -> ExitCode
{
    // stdout занят результатом, логи - только в stderr
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(io::stderr)
        .with_target(false)
        .compact()
        .init();

    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            let mut message = e.to_string();
            let mut source = e.source();

            while let Some(cause) = source {
                message.push_str(format!(": {}", cause).as_str());
                source = cause.source();
            }

            eprintln!("error: {}", message);

            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<(), Box<dyn Error>>
{
    // если файла нет - в stdout ничего не пишем
    let reader = open(INPUT_FILE)?;
    let mut stdout = io::stdout().lock();

    output::write_prompt(&mut stdout)?;

    let result = scan(reader)?;

    output::print_stats(&result);
    output::write_result(&mut stdout, &result)?;

    Ok(())
}
