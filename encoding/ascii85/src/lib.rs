//! # ASCII85 Encoding
//!
//! btoa-ascii85 implements the btoa / Adobe flavour of ASCII85. Every group of
//! four bytes is written as five characters in range `b'!'..=b'u'`. For more
//! details on the encoding scheme refer to [Wikipedia](https://en.wikipedia.org/wiki/Ascii85).
//!
//! The character `z` encodes four zero bytes. The encoder wraps its output
//! in `<~` and `~>` and breaks lines every 80 characters; both can be turned
//! off with [`EncodeOptions`]. While decoding, whitespace is skipped and the
//! start (`<~`) and end (`~>`) sequences are optional.
//!
//! ## Decode Example
//!
//! ```
//! use btoa_ascii85::decode;
//!
//! assert_eq!(decode(b"<~9jqo^=9~>").unwrap(), b"Man X");
//! ```
//!
//! ## Encode Example
//!
//! ```
//! use btoa_ascii85::{encode, encode_with, EncodeOptions};
//!
//! assert_eq!(encode(b"Man X"), b"<~9jqo^=9~>");
//!
//! let bare = EncodeOptions { use_delimiters: false, ..EncodeOptions::default() };
//! assert_eq!(encode_with(&[0; 4], &bare), b"z");
//! ```
//!
//! ## Text Example
//!
//! ```
//! use btoa_ascii85::{decode_text, encode_text, Charset, TextOptions};
//!
//! let encoded = encode_text("Grüße", &TextOptions::default()).unwrap();
//! assert_eq!(decode_text(&encoded, Charset::Utf8).unwrap(), "Grüße");
//! ```

mod decode;
mod encode;
mod text;

#[cfg(feature = "cli")]
pub mod cli;

pub use decode::{decode, DecodeError};
pub use encode::{encode, encode_with, EncodeOptions};
pub use text::{decode_text, encode_text, Charset, TextError, TextOptions};

/// Line width used by [`encode`].
pub const DEFAULT_LINE_WIDTH: usize = 80;

/// The character `!` represents the digit 0; every digit is offset by it.
const DIGIT_OFFSET: u8 = b'!';

/// The character `z` in the ASCII table represents 4 null bytes (0x0000_0000).
const NULL_WORD: u8 = b'z';

/// Written by the encoder between lines.
const LINE_BREAK: u8 = b'\r';

const START_SEQUENCE: &[u8; 2] = b"<~";

const END_SEQUENCE: &[u8; 2] = b"~>";

/// Positional weights of the five digits of a group, most significant first.
const POW_85: [u32; 5] = [85 * 85 * 85 * 85, 85 * 85 * 85, 85 * 85, 85, 1];
