//! Saves and loads codebooks as JSON.
//!
//! The stored form is an ordered list of symbol/code pairs, codes written as strings of '0' and '1':
//!
//! `{"format":"huffman-codebook-v1","entries":[{"symbol":"a","code":"0"}, ...]}`
//!
//! Loading goes through `Codebook::from_entries`, so a hand-edited file that is no longer prefix-free is
//! rejected instead of producing garbage on decode.
//!

use std::io::{self, Read, Write};

use serde::{Deserialize, Serialize};

use crate::bitstream::BitSeq;
use crate::huffman_coding::codebook::Codebook;

const FORMAT: &str = "huffman-codebook-v1";

#[derive(Serialize, Deserialize, Debug)]
struct StoredEntry {
    symbol: char,
    code: String,
}

#[derive(Serialize, Deserialize, Debug)]
struct StoredCodebook {
    format: String,
    entries: Vec<StoredEntry>,
}

/// Write the codebook as pretty-printed JSON.
pub fn write_codebook<W: Write>(codebook: &Codebook<char>, writer: W) -> io::Result<()> {
    let stored = StoredCodebook {
        format: FORMAT.to_string(),
        entries: codebook
            .iter()
            .map(|(&symbol, code)| StoredEntry {
                symbol,
                code: code.to_string(),
            })
            .collect(),
    };
    serde_json::to_writer_pretty(writer, &stored)?;
    Ok(())
}

/// Read and validate a codebook written by `write_codebook`.
pub fn read_codebook<R: Read>(reader: R) -> io::Result<Codebook<char>> {
    let stored: StoredCodebook = serde_json::from_reader(reader)?;
    if stored.format != FORMAT {
        return Err(io::Error::new(
            io::ErrorKind::InvalidData,
            format!("Unsupported codebook format {:?}", stored.format),
        ));
    }
    let entries = stored
        .entries
        .into_iter()
        .map(|entry| -> io::Result<(char, BitSeq)> {
            Ok((entry.symbol, entry.code.parse::<BitSeq>()?))
        })
        .collect::<io::Result<Vec<_>>>()?;
    Ok(Codebook::from_entries(entries)?)
}
