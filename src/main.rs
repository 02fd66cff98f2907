use std::io;

use rideshare::config::Config;
use rideshare::demo;
use rideshare::error::Error;
use rideshare::printer::Printer;

fn main() -> Result<(), Error> {
    let config = Config::from_env()?;

    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .with_writer(io::stderr)
        .init();

    let mut printer = Printer::new(io::stdout().lock(), config.format);

    demo::run(&mut printer)
}
