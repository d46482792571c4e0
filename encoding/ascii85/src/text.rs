//! Text front-end: strings are turned into bytes with a [`Charset`] before
//! encoding and back after decoding.

use std::borrow::Cow;
use std::fmt;
use std::str::FromStr;

use thiserror::Error;

use crate::{decode, encode_with, DecodeError, EncodeOptions, DEFAULT_LINE_WIDTH};

/// Character encodings understood by [`encode_text`] and [`decode_text`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Charset {
    #[default]
    Utf8,
    Utf16Le,
    Utf16Be,
    /// ISO-8859-1, every byte maps to the code point of the same value.
    Latin1,
}

impl Charset {
    pub fn name(self) -> &'static str {
        match self {
            Charset::Utf8 => "UTF-8",
            Charset::Utf16Le => "UTF-16LE",
            Charset::Utf16Be => "UTF-16BE",
            Charset::Latin1 => "ISO-8859-1",
        }
    }

    fn to_bytes(self, text: &str) -> Result<Vec<u8>, TextError> {
        match self {
            Charset::Utf8 => Ok(text.as_bytes().to_vec()),
            Charset::Utf16Le => Ok(text.encode_utf16().flat_map(u16::to_le_bytes).collect()),
            Charset::Utf16Be => Ok(text.encode_utf16().flat_map(u16::to_be_bytes).collect()),
            Charset::Latin1 => text
                .chars()
                .map(|ch| {
                    u8::try_from(u32::from(ch)).map_err(|_| TextError::Unmappable {
                        ch,
                        charset: self,
                    })
                })
                .collect(),
        }
    }

    fn to_text(self, bytes: Vec<u8>) -> Result<String, TextError> {
        let malformed = || TextError::Malformed { charset: self };
        match self {
            Charset::Utf8 => String::from_utf8(bytes).map_err(|_| malformed()),
            Charset::Utf16Le | Charset::Utf16Be => {
                if bytes.len() % 2 != 0 {
                    return Err(malformed());
                }
                let units = bytes.chunks_exact(2).map(|pair| match self {
                    Charset::Utf16Le => u16::from_le_bytes([pair[0], pair[1]]),
                    _ => u16::from_be_bytes([pair[0], pair[1]]),
                });
                char::decode_utf16(units)
                    .collect::<Result<String, _>>()
                    .map_err(|_| malformed())
            }
            Charset::Latin1 => Ok(bytes.into_iter().map(char::from).collect()),
        }
    }
}

impl fmt::Display for Charset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Charset {
    type Err = TextError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "utf-8" | "utf8" => Ok(Charset::Utf8),
            "utf-16le" | "utf16le" | "utf-16" | "utf16" => Ok(Charset::Utf16Le),
            "utf-16be" | "utf16be" => Ok(Charset::Utf16Be),
            "iso-8859-1" | "iso8859-1" | "latin1" | "latin-1" => Ok(Charset::Latin1),
            _ => Err(TextError::UnknownCharset(s.to_string())),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum TextError {
    #[error("unknown character encoding {0:?}")]
    UnknownCharset(String),

    #[error("character {ch:?} cannot be represented in {charset}")]
    Unmappable { ch: char, charset: Charset },

    #[error("decoded bytes are not valid {charset}")]
    Malformed { charset: Charset },

    #[error(transparent)]
    Decode(#[from] DecodeError),
}

/// Settings for [`encode_text`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TextOptions {
    pub charset: Charset,
    pub use_delimiters: bool,
    pub line_width: usize,
}

impl Default for TextOptions {
    fn default() -> Self {
        TextOptions {
            charset: Charset::default(),
            use_delimiters: true,
            line_width: DEFAULT_LINE_WIDTH,
        }
    }
}

impl From<&TextOptions> for EncodeOptions {
    fn from(options: &TextOptions) -> Self {
        EncodeOptions {
            use_delimiters: options.use_delimiters,
            line_width: options.line_width,
        }
    }
}

/// Encodes `text` after converting it to bytes with `options.charset`.
pub fn encode_text(text: &str, options: &TextOptions) -> Result<String, TextError> {
    let bytes = options.charset.to_bytes(text)?;
    let encoded = encode_with(&bytes, &EncodeOptions::from(options));
    // The encoder only emits ASCII.
    Ok(encoded.into_iter().map(char::from).collect())
}

/// Whitespace outside ASCII, including the byte order mark.
fn is_wide_whitespace(ch: char) -> bool {
    !ch.is_ascii() && (ch.is_whitespace() || ch == '\u{feff}')
}

/// Replaces every non-ASCII whitespace character with as many spaces as it
/// has UTF-8 bytes, so error positions still point into `text`.
fn blank_wide_whitespace(text: &str) -> Cow<'_, [u8]> {
    if !text.chars().any(is_wide_whitespace) {
        return Cow::Borrowed(text.as_bytes());
    }
    let mut bytes = Vec::with_capacity(text.len());
    for ch in text.chars() {
        if is_wide_whitespace(ch) {
            bytes.resize(bytes.len() + ch.len_utf8(), b' ');
        } else {
            let mut buf = [0; 4];
            bytes.extend_from_slice(ch.encode_utf8(&mut buf).as_bytes());
        }
    }
    Cow::Owned(bytes)
}

/// Decodes `text` and converts the resulting bytes with `charset`.
///
/// Unicode whitespace such as U+00A0 or U+3000 is skipped like ASCII
/// whitespace.
pub fn decode_text(text: &str, charset: Charset) -> Result<String, TextError> {
    let bytes = decode(&blank_wide_whitespace(text))?;
    charset.to_text(bytes)
}
