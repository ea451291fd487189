//! # tosc-core
//!
//! Codec and markup helpers for TouchOSC `.tosc` layout files.
//!
//! A `.tosc` file is a zlib envelope around an XML document. This crate
//! exposes buffer-to-buffer [`codec::compress`] and [`codec::decompress`]
//! operations plus [`markup::pretty_print`], which re-indents the XML
//! without touching its content.

pub mod codec;
pub mod error;
pub mod markup;

pub use codec::{compress, compress_with_level, decompress};
pub use error::{CodecError, MarkupError};
pub use markup::pretty_print;
