//! Módulo para correr `cqlc`.

use {
    cli::invocation::{log, Invocation, USAGE},
    logger::log::{LogLevel, Logger},
    std::{env::args, path::Path, process::exit},
    utils::get_root_path::get_logs_dir,
};

fn main() {
    let argv = args().skip(1).collect::<Vec<String>>();
    if argv.iter().any(|arg| arg == "--help" || arg == "-h") {
        println!("{}", USAGE);
        return;
    }

    let invocation = match Invocation::parse(&argv) {
        Ok(invocation) => invocation,
        Err(err) => {
            println!("{}\n\n{}", err, USAGE);
            exit(2);
        }
    };

    let logger = match Logger::new(
        Path::new(&get_logs_dir()),
        "cqlc",
        invocation.log_level,
        None,
        None,
    ) {
        Ok(logger) => Some(logger.with_echo(false)),
        Err(err) => {
            println!("No se pudo crear el log: {}", err);
            None
        }
    };

    let output = invocation
        .run(logger.as_ref())
        .and_then(|statement| invocation.render(&statement));
    match output {
        Ok(output) => println!("{}", output),
        Err(err) => {
            log(logger.as_ref(), LogLevel::Error, &err.to_string());
            println!("{}", err);
            exit(1);
        }
    }
}
