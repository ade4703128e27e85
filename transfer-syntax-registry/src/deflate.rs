//! Stream adapter for deflated transfer syntaxes.
use std::io::{Read, Write};

use flate2::Compression;

/// Immaterial type representing an adapter for deflated data.
///
/// Deflated transfer syntaxes compress everything after the file meta group
/// with raw deflate (no zlib header nor checksum).
#[derive(Debug, Default, Copy, Clone, Eq, Hash, PartialEq)]
pub struct FlateAdapter;

impl FlateAdapter {
    /// Adapt a reader of deflated data into a reader of plain data.
    pub fn adapt_reader<R>(&self, reader: R) -> flate2::read::DeflateDecoder<R>
    where
        R: Read,
    {
        flate2::read::DeflateDecoder::new(reader)
    }

    /// Adapt a writer so that plain data written to it is deflated.
    pub fn adapt_writer<W>(&self, writer: W) -> flate2::write::DeflateEncoder<W>
    where
        W: Write,
    {
        flate2::write::DeflateEncoder::new(writer, Compression::fast())
    }
}
