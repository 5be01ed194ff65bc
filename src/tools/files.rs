//! File handling for the huffman command line tool.
//!
//! Encoding NAME writes the bits to NAME.huff (as '0'/'1' text) and the codebook to NAME.book.
//! Decoding NAME.huff reads NAME.book and writes NAME. Nothing is overwritten without --force, and input
//! files are only removed (with --remove) after every output has been written.
//!

use std::fmt::{Display, Formatter};
use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};

use log::{debug, error, info, warn};

use super::cli::{HuffOpts, Mode, Output};
use super::codebook_store::{read_codebook, write_codebook};
use crate::bitstream::BitSeq;
use crate::huffman_coding::codebook::Codebook;
use crate::huffman_coding::decode::decode;
use crate::huffman_coding::encode::huffman_encode;

pub const ENCODED_EXT: &str = ".huff";
pub const CODEBOOK_EXT: &str = ".book";

/// Summary of one encoding, logged at info level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Report {
    pub alphabet: usize,
    pub symbols: usize,
    pub bits: usize,
    pub longest_code: usize,
}

impl Report {
    fn new(codebook: &Codebook<char>, symbols: &[char], bits: &BitSeq) -> Self {
        Self {
            alphabet: codebook.len(),
            symbols: symbols.len(),
            bits: bits.len(),
            longest_code: codebook.max_code_len(),
        }
    }

    /// Encoded size as a fraction of 8 bits per symbol.
    pub fn ratio(&self) -> f64 {
        if self.symbols == 0 {
            return 0.0;
        }
        self.bits as f64 / (self.symbols as f64 * 8.0)
    }
}

impl Display for Report {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        let per_symbol = if self.symbols == 0 {
            0.0
        } else {
            self.bits as f64 / self.symbols as f64
        };
        write!(
            f,
            "{} symbols ({} distinct) -> {} bits, {:.3} bits/symbol, {:.1}% of 8-bit, longest code {}",
            self.symbols,
            self.alphabet,
            self.bits,
            per_symbol,
            self.ratio() * 100.0,
            self.longest_code
        )
    }
}

/// Run the requested operation over every input file. Keeps going after a failure, and returns the
/// last error seen.
pub fn process_files(opts: &HuffOpts) -> io::Result<()> {
    let mut result = Ok(());
    for file in &opts.files {
        let outcome = match opts.op_mode {
            Mode::Encode => encode_file(file, opts).map(|_| ()),
            Mode::Decode => decode_file(file, opts),
            Mode::Test => test_file(file, opts).map(|_| ()),
        };
        if let Err(e) = outcome {
            error!("{}: {}", file, e);
            result = Err(e);
        }
    }
    result
}

/// Encode one file. Returns the report that was logged.
pub fn encode_file(path: &str, opts: &HuffOpts) -> io::Result<Report> {
    let text = read_text(path, opts)?;
    let symbols: Vec<char> = text.chars().collect();
    let (codebook, bits) = huffman_encode(&symbols)?;

    // Both outputs are opened before either is written. If the second cannot be created, the
    // codebook file just made is removed again.
    let book_path = format!("{}{}", path, CODEBOOK_EXT);
    let book_out = create_output(&book_path, opts.force_overwrite)?;
    let bits_out = match opts.output {
        Output::File => {
            let bits_path = format!("{}{}", path, ENCODED_EXT);
            match create_output(&bits_path, opts.force_overwrite) {
                Ok(f) => Some((bits_path, f)),
                Err(e) => {
                    drop(book_out);
                    if let Err(rm) = fs::remove_file(&book_path) {
                        warn!("Could not remove {}: {}", book_path, rm);
                    }
                    return Err(e);
                }
            }
        }
        Output::Stdout => None,
    };

    write_codebook(&codebook, book_out)?;
    debug!("Codebook written to {}", book_path);

    match bits_out {
        Some((bits_path, mut f_out)) => {
            f_out.write_all(bits.to_string().as_bytes())?;
            debug!("Encoded bits written to {}", bits_path);
        }
        None => {
            let mut stdout = io::stdout().lock();
            writeln!(stdout, "{}", bits)?;
        }
    }

    let report = Report::new(&codebook, &symbols, &bits);
    info!("{}: {}", path, report);

    if opts.remove_input_files {
        fs::remove_file(path)?;
        info!("Removed {}", path);
    }
    Ok(report)
}

/// Decode one NAME.huff file using NAME.book.
pub fn decode_file(path: &str, opts: &HuffOpts) -> io::Result<()> {
    let stem = path.strip_suffix(ENCODED_EXT).ok_or_else(|| {
        io::Error::new(
            io::ErrorKind::InvalidInput,
            format!("{} does not end with {}", path, ENCODED_EXT),
        )
    })?;
    let book_path = format!("{}{}", stem, CODEBOOK_EXT);

    let codebook = read_codebook(File::open(&book_path)?)?;
    let bits: BitSeq = fs::read_to_string(path)?.trim_end().parse()?;
    let symbols = decode(&bits, &codebook)?;
    let text: String = symbols.into_iter().collect();

    match opts.output {
        Output::File => {
            create_output(stem, opts.force_overwrite)?.write_all(text.as_bytes())?;
            info!("{}: decoded {} bits into {}", path, bits.len(), stem);
        }
        Output::Stdout => {
            io::stdout().lock().write_all(text.as_bytes())?;
        }
    }

    if opts.remove_input_files {
        fs::remove_file(path)?;
        fs::remove_file(&book_path)?;
        info!("Removed {} and {}", path, book_path);
    }
    Ok(())
}

/// Encode and decode one file in memory and check that the text survives. Writes nothing.
pub fn test_file(path: &str, opts: &HuffOpts) -> io::Result<Report> {
    let text = read_text(path, opts)?;
    let symbols: Vec<char> = text.chars().collect();
    let (codebook, bits) = huffman_encode(&symbols)?;
    if decode(&bits, &codebook)? != symbols {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("{}: decoded text differs from the input", path),
        ));
    }
    let report = Report::new(&codebook, &symbols, &bits);
    info!("{}: ok, {}", path, report);
    Ok(report)
}

fn read_text(path: &str, opts: &HuffOpts) -> io::Result<String> {
    let text = fs::read_to_string(path)?;
    if opts.normalize.is_noop() {
        Ok(text)
    } else {
        Ok(opts.normalize.apply(&text))
    }
}

/// Open an output file, refusing to clobber an existing one unless forced.
fn create_output(path: &str, force: bool) -> io::Result<File> {
    if force {
        File::create(path)
    } else {
        OpenOptions::new()
            .write(true)
            .create_new(true)
            .open(path)
            .map_err(|e| {
                if e.kind() == io::ErrorKind::AlreadyExists {
                    io::Error::new(
                        e.kind(),
                        format!("{} already exists (use --force to overwrite)", path),
                    )
                } else {
                    e
                }
            })
    }
}
