//Enable more cargo lint tests
#![warn(rust_2018_idioms)]
#![warn(clippy::disallowed_types)]

use clap::Parser;
use log::{error, info, LevelFilter};
use simplelog::{Config, TermLogger};

use huffman::tools::cli::{huffopts_init, terminal_mode, Args};
use huffman::tools::files::process_files;

#[global_allocator]
static GLOBAL: tikv_jemallocator::Jemalloc = tikv_jemallocator::Jemalloc;

fn main() -> Result<(), std::io::Error> {
    let args = Args::parse();

    // Available log levels are Error, Warn, Info, Debug, Trace. The command line narrows this down.
    // With -c the encoded or decoded data owns stdout, so log lines go to stderr.
    if let Err(e) = TermLogger::init(
        LevelFilter::Trace,
        Config::default(),
        terminal_mode(args.output()),
        simplelog::ColorChoice::Auto,
    ) {
        eprintln!("Could not start the logger: {}", e);
    }

    let options = huffopts_init(args);

    let result = process_files(&options);
    match &result {
        Ok(()) => info!("Done.\n"),
        Err(e) => error!("Finished with errors: {}", e),
    }
    result
}
