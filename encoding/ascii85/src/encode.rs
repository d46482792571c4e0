use crate::{
    DEFAULT_LINE_WIDTH, DIGIT_OFFSET, END_SEQUENCE, LINE_BREAK, NULL_WORD, START_SEQUENCE,
};

/// Output settings for [`encode_with`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EncodeOptions {
    /// Wrap the output in `<~` and `~>`.
    pub use_delimiters: bool,
    /// Number of characters per line, `0` disables line breaks.
    ///
    /// Only the encoded body is counted, the delimiters never start a new
    /// line.
    pub line_width: usize,
}

impl Default for EncodeOptions {
    fn default() -> Self {
        EncodeOptions {
            use_delimiters: true,
            line_width: DEFAULT_LINE_WIDTH,
        }
    }
}

/// Encodes 4 bytes to 5 ASCII85 characters, most significant digit first.
///
/// A tail group is zero padded by the caller and only the first
/// `len + 1` characters are kept.
fn encode_word(group: [u8; 4]) -> [u8; 5] {
    let mut word = u32::from_be_bytes(group);
    let mut chars = [DIGIT_OFFSET; 5];
    for c in chars.iter_mut().rev() {
        *c += (word % 85) as u8;
        word /= 85;
    }
    chars
}

/// Appends characters to the output, breaking lines after `width` of them.
struct LineWriter<'a> {
    buf: &'a mut Vec<u8>,
    width: usize,
    column: usize,
}

impl<'a> LineWriter<'a> {
    fn new(buf: &'a mut Vec<u8>, width: usize) -> Self {
        LineWriter {
            buf,
            width,
            column: 0,
        }
    }

    fn write(&mut self, chars: &[u8]) {
        if self.width == 0 {
            self.buf.extend_from_slice(chars);
            return;
        }
        for &c in chars {
            if self.column >= self.width {
                self.buf.push(LINE_BREAK);
                self.column = 0;
            }
            self.buf.push(c);
            self.column += 1;
        }
    }
}

fn encoded_capacity(len: usize, options: &EncodeOptions) -> usize {
    let body = (len + 3) / 4 * 5;
    let breaks = match options.line_width {
        0 => 0,
        width => body / width,
    };
    body + breaks + START_SEQUENCE.len() + END_SEQUENCE.len()
}

/// Encodes `data` with the default [`EncodeOptions`]: delimiters on and a
/// line break every 80 characters.
pub fn encode(data: &[u8]) -> Vec<u8> {
    encode_with(data, &EncodeOptions::default())
}

/// Encodes `data` as ASCII85.
///
/// Encoding cannot fail; the empty input encodes to `<~~>`, or to nothing
/// without delimiters.
pub fn encode_with(data: &[u8], options: &EncodeOptions) -> Vec<u8> {
    let mut buf = Vec::with_capacity(encoded_capacity(data.len(), options));
    if options.use_delimiters {
        buf.extend_from_slice(START_SEQUENCE);
    }

    {
        let mut out = LineWriter::new(&mut buf, options.line_width);
        let chunks = data.chunks_exact(4);
        let remainder = chunks.remainder();
        for chunk in chunks {
            let mut c = [0; 4];
            c.copy_from_slice(chunk);
            if c == [0; 4] {
                out.write(&[NULL_WORD]);
            } else {
                out.write(&encode_word(c));
            }
        }

        if !remainder.is_empty() {
            let mut c = [0; 4];
            c[..remainder.len()].copy_from_slice(remainder);
            let word = encode_word(c);
            out.write(&word[..remainder.len() + 1]);
        }
    }

    if options.use_delimiters {
        buf.extend_from_slice(END_SEQUENCE);
    }
    log::trace!("encoded {} bytes into {} characters", data.len(), buf.len());
    buf
}
