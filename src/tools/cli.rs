use clap::Parser;
use log::{info, warn};
use simplelog::TerminalMode;
use std::{fmt::Display, fmt::Formatter};

use super::normalize::Normalize;

/// Verbosity of user information
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verbosity {
    Quiet,
    Errors,
    Warnings,
    Info,
    Debug,
    Trace,
}

/// Encode, Decode, Test
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    Encode,
    Decode,
    Test,
}
impl Display for Mode {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Define the two output channels
pub enum Output {
    File,
    Stdout,
}
impl Display for Output {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HuffOpts {
    /// Vec of names of files to read for input
    pub files: Vec<String>,
    /// Silently overwrite existing files with the same name
    pub force_overwrite: bool,
    /// Delete input files once their output has been written
    pub remove_input_files: bool,
    /// Encode/Decode/Test
    pub op_mode: Mode,
    /// Location where output is sent
    pub output: Output,
    /// Text clean-up applied before encoding
    pub normalize: Normalize,
    /// Verbosity of user information
    pub verbose: Verbosity,
}

impl HuffOpts {
    pub fn new() -> Self {
        Self {
            files: vec![],
            force_overwrite: false,
            remove_input_files: false,
            op_mode: Mode::Encode,
            output: Output::File,
            normalize: Normalize::default(),
            verbose: Verbosity::Errors,
        }
    }
}

impl Default for HuffOpts {
    fn default() -> Self {
        Self::new()
    }
}

/// Command Line Interpretation - uses external CLAP crate.
#[derive(Parser, Debug)]
#[clap(
    name = "huffman",
    version,
    about = "Huffman-code text files",
    long_about = "
    Builds an optimal prefix code for the characters of each input file and writes the encoded
    bits (as '0'/'1' text) to NAME.huff, with the codebook as JSON in NAME.book.
    Decoding NAME.huff reads NAME.book and restores NAME."
)]
pub struct Args {
    /// Files to process
    #[clap()]
    files: Vec<String>,

    /// Encode the input files (default)
    #[clap(short = 'z', long = "encode")]
    encode: bool,

    /// Decode the input files
    #[clap(short = 'd', long = "decode")]
    decode: bool,

    /// Encode and decode in memory, report the result, write nothing
    #[clap(short = 't', long = "test")]
    test: bool,

    /// Send output to the terminal
    #[clap(short = 'c', long = "stdout")]
    stdout: bool,

    /// Force overwriting output files
    #[clap(short = 'f', long = "force")]
    force: bool,

    /// Remove input files after successful processing
    #[clap(short = 'r', long = "remove")]
    remove: bool,

    /// Fold text to lower case before encoding
    #[clap(short = 'l', long = "lowercase")]
    lowercase: bool,

    /// Replace line breaks with spaces before encoding
    #[clap(short = 'j', long = "join-lines")]
    join_lines: bool,

    /// Be verbose (repeat for more: -vvvv is trace level)
    #[clap(short = 'v', long = "verbose", parse(from_occurrences))]
    verbose: u8,

    /// Suppress all log output
    #[clap(short = 'q', long = "quiet")]
    quiet: bool,
}

impl Args {
    /// Where the results of this run will go.
    pub fn output(&self) -> Output {
        if self.stdout {
            Output::Stdout
        } else {
            Output::File
        }
    }
}

/// Terminal stream for log messages. Results on stdout get the stream to themselves.
pub fn terminal_mode(output: Output) -> TerminalMode {
    match output {
        Output::Stdout => TerminalMode::Stderr,
        Output::File => TerminalMode::Stdout,
    }
}

/// Put command line information from CLAP into our internal structure.
pub fn opts_from_args(args: Args) -> HuffOpts {
    let mut opts = HuffOpts::new();
    opts.files = args.files.clone();

    if [args.encode, args.decode, args.test]
        .iter()
        .filter(|&&set| set)
        .count()
        > 1
    {
        warn!("More than one mode requested; test wins over decode, decode wins over encode");
    }
    opts.op_mode = if args.test {
        Mode::Test
    } else if args.decode {
        Mode::Decode
    } else {
        Mode::Encode
    };

    opts.output = args.output();
    opts.force_overwrite = args.force;
    opts.remove_input_files = args.remove;
    opts.normalize = Normalize {
        lowercase: args.lowercase,
        join_lines: args.join_lines,
    };

    opts.verbose = match (args.quiet, args.verbose) {
        (true, _) => Verbosity::Quiet,
        (false, 0) => Verbosity::Errors,
        (false, 1) => Verbosity::Warnings,
        (false, 2) => Verbosity::Info,
        (false, 3) => Verbosity::Debug,
        _ => Verbosity::Trace,
    };
    opts
}

/// Turn parsed arguments into options, set the log level, and report what we are about to do.
/// The logger should already be running so nothing said here is lost.
pub fn huffopts_init(args: Args) -> HuffOpts {
    let opts = opts_from_args(args);

    // Set the log level
    match opts.verbose {
        Verbosity::Quiet => log::set_max_level(log::LevelFilter::Off),
        Verbosity::Errors => log::set_max_level(log::LevelFilter::Error),
        Verbosity::Warnings => log::set_max_level(log::LevelFilter::Warn),
        Verbosity::Info => log::set_max_level(log::LevelFilter::Info),
        Verbosity::Debug => log::set_max_level(log::LevelFilter::Debug),
        Verbosity::Trace => log::set_max_level(log::LevelFilter::Trace),
    };

    info!("---- Huffman Initialization Start ----");
    info!("Verbosity set to {}", log::max_level());
    info!("Operational mode set to {}", opts.op_mode);
    info!("Output set to {}", opts.output);
    if opts.files.is_empty() {
        warn!("No input files given")
    };
    if opts.force_overwrite {
        info!("Forcing file overwriting")
    };
    if opts.remove_input_files {
        info!("Removing input files after processing")
    };
    if !opts.normalize.is_noop() {
        info!("Normalizing input: {:?}", opts.normalize)
    };
    info!("---- Huffman Initialization End ----\n");
    opts
}
