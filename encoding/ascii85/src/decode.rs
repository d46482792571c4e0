use thiserror::Error;

use crate::{DIGIT_OFFSET, END_SEQUENCE, NULL_WORD, POW_85, START_SEQUENCE};

/// Errors reported by [`decode`](crate::decode).
///
/// Every position is a byte offset into the decoded input, including a
/// leading `<~`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// `z` inside a group of digits.
    #[error("unexpected 'z' inside a group at position {position}")]
    MisplacedZeroShortcut { position: usize },

    /// `~` not followed by `>`. `found` is `None` when the input ended first.
    #[error("broken end sequence at position {position}, expected '>' after '~'")]
    MalformedTerminator { found: Option<u8>, position: usize },

    #[error("unexpected character with code {byte:#04x} at position {position}")]
    InvalidCharacter { byte: u8, position: usize },

    /// The input ends on a group of a single digit, which encodes no byte.
    #[error("final group ends on character {byte:#04x} at position {position}")]
    TruncatedGroup { byte: u8, position: usize },

    /// The digit `byte` at `position` pushes its group past 32 bits.
    #[error("character {byte:#04x} at position {position} overflows its group")]
    GroupOverflow { byte: u8, position: usize },
}

/// Maps an ASCII character to a number
const fn to_number(byte: u8) -> Option<u8> {
    match byte {
        b @ 0x21..=0x75 => Some(b - DIGIT_OFFSET),
        _ => None,
    }
}

/// Characters skipped anywhere in the input.
const fn is_whitespace(byte: u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\n' | b'\r' | 0x0b | 0x0c)
}

/// Appends the `len` most significant bytes of `word`.
fn decode_word(word: u32, len: usize, out: &mut Vec<u8>) {
    out.extend_from_slice(&word.to_be_bytes()[..len]);
}

/// Digits accumulated since the last complete group.
#[derive(Debug, Default)]
struct Group {
    word: u32,
    len: usize,
    /// Character and position of the latest digit.
    last: (u8, usize),
}

impl Group {
    fn overflow(&self) -> DecodeError {
        let (byte, position) = self.last;
        DecodeError::GroupOverflow { byte, position }
    }

    /// Adds a digit, returns `true` once the group holds five of them.
    fn push(&mut self, byte: u8, position: usize) -> Result<bool, DecodeError> {
        let digit = to_number(byte).ok_or(DecodeError::InvalidCharacter { byte, position })?;
        self.last = (byte, position);
        self.word = u32::from(digit)
            .checked_mul(POW_85[self.len])
            .and_then(|weighted| self.word.checked_add(weighted))
            .ok_or_else(|| self.overflow())?;
        self.len += 1;
        Ok(self.len == POW_85.len())
    }

    fn flush(&mut self, out: &mut Vec<u8>) {
        decode_word(self.word, self.len - 1, out);
        *self = Group::default();
    }

    /// Flushes a trailing partial group.
    ///
    /// The missing low digits are rounded up by bumping the last digit, which
    /// restores the bytes the encoder truncated. A lone digit yields nothing
    /// before `~>` and is an error at the end of the input.
    fn finish(mut self, out: &mut Vec<u8>, terminated: bool) -> Result<(), DecodeError> {
        match self.len {
            0 => Ok(()),
            1 if terminated => Ok(()),
            1 => {
                let (byte, position) = self.last;
                Err(DecodeError::TruncatedGroup { byte, position })
            }
            len => {
                self.word = self
                    .word
                    .checked_add(POW_85[len - 1])
                    .ok_or_else(|| self.overflow())?;
                self.flush(out);
                Ok(())
            }
        }
    }
}

/// Decodes ASCII85 encoded data.
///
/// The start (`<~`) and end (`~>`) are optional, whitespace is skipped and
/// anything after `~>` is ignored. Nothing is returned on error.
pub fn decode(data: &[u8]) -> Result<Vec<u8>, DecodeError> {
    decode_stream(data).map_err(|error| {
        log::debug!("ascii85 decode of {} bytes failed: {}", data.len(), error);
        error
    })
}

fn decode_stream(data: &[u8]) -> Result<Vec<u8>, DecodeError> {
    let offset = if data.starts_with(START_SEQUENCE) {
        START_SEQUENCE.len()
    } else {
        0
    };

    let mut stream = data
        .iter()
        .copied()
        .enumerate()
        .skip(offset)
        .filter(|&(_, b)| !is_whitespace(b));

    let mut out = Vec::with_capacity((data.len() + 4) / 5 * 4);
    let mut group = Group::default();

    while let Some((position, byte)) = stream.next() {
        match byte {
            NULL_WORD if group.len == 0 => out.extend_from_slice(&[0; 4]),
            NULL_WORD => return Err(DecodeError::MisplacedZeroShortcut { position }),
            b if b == END_SEQUENCE[0] => {
                return match stream.next() {
                    Some((_, b)) if b == END_SEQUENCE[1] => {
                        group.finish(&mut out, true)?;
                        log::trace!("decoded {} bytes, end sequence at {}", out.len(), position);
                        Ok(out)
                    }
                    Some((position, b)) => Err(DecodeError::MalformedTerminator {
                        found: Some(b),
                        position,
                    }),
                    None => Err(DecodeError::MalformedTerminator {
                        found: None,
                        position: data.len(),
                    }),
                };
            }
            b => {
                if group.push(b, position)? {
                    group.flush(&mut out);
                }
            }
        }
    }

    group.finish(&mut out, false)?;
    log::trace!("decoded {} bytes", out.len());
    Ok(out)
}
