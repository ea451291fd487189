//! Error types for the codec and markup operations.

use std::io;
use std::str::Utf8Error;

use quick_xml::events::attributes::AttrError;
use thiserror::Error;

/// Failure while compressing or decompressing a zlib envelope.
#[derive(Debug, Error)]
pub enum CodecError {
    /// The envelope header, deflate payload or checksum is invalid
    #[error("compressed data is corrupt: {message}")]
    Corrupt {
        /// Message reported by the deflate backend
        message: String,
    },

    /// Input ended before the deflate end-of-stream marker
    #[error("compressed data is truncated")]
    Truncated,

    /// Compression level outside of 0-9
    #[error("unsupported compression level: {level} (must be 0-9)")]
    InvalidLevel {
        /// The rejected level
        level: u32,
    },

    /// I/O failure reported by the encoder
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),
}

/// Well-formedness violation found while reformatting XML.
#[derive(Debug, Error)]
pub enum MarkupError {
    /// The input is not valid UTF-8
    #[error("invalid UTF-8 at byte {position}")]
    Encoding {
        /// Offset of the first invalid byte
        position: u64,
        /// Underlying decoding error
        #[source]
        source: Utf8Error,
    },

    /// The tokenizer rejected the input
    #[error("malformed XML at byte {position}: {source}")]
    Syntax {
        /// Byte offset where the error was detected
        position: u64,
        /// Underlying parser error
        #[source]
        source: quick_xml::Error,
    },

    /// An attribute is malformed or duplicated
    #[error("malformed attribute at byte {position}: {source}")]
    Attribute {
        /// Byte offset of the tag carrying the attribute
        position: u64,
        /// Underlying attribute error
        #[source]
        source: AttrError,
    },

    /// Element or attribute name is not a valid XML name
    #[error("invalid name \"{name}\" at byte {position}")]
    InvalidName {
        /// The rejected name
        name: String,
        /// Byte offset just past the tag carrying the name
        position: u64,
    },

    /// Attribute value contains a raw `<`
    #[error("'<' in attribute value at byte {position}")]
    LessThanInAttribute {
        /// Byte offset just past the tag carrying the attribute
        position: u64,
    },

    /// Text or an attribute value holds a bare `&` or an unknown entity
    #[error("invalid reference at byte {position}: {source}")]
    Reference {
        /// Byte offset just past the offending token
        position: u64,
        /// Underlying unescape error
        #[source]
        source: quick_xml::Error,
    },

    /// Input ended while an element was still open
    #[error("element <{name}> is not closed")]
    UnclosedElement {
        /// Name of the innermost open element
        name: String,
    },

    /// An element or non-whitespace text appears outside the root element
    #[error("content outside the root element at byte {position}")]
    ContentOutsideRoot {
        /// Byte offset just past the offending token
        position: u64,
    },

    /// The document contains no element at all
    #[error("document has no root element")]
    MissingRoot,
}
