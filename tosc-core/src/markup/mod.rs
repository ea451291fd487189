//! Structural XML reformatting.
//!
//! [`pretty_print`] pulls tokens from the input and writes them back with two
//! spaces of indentation per nesting level. Only whitespace between tokens
//! changes: tag bytes, attribute bytes, text (entity references included)
//! and token order are copied verbatim.

use quick_xml::events::attributes::Attribute;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;

use crate::error::MarkupError;


/// Indentation emitted per nesting level.
pub const INDENT: &[u8] = b"  ";

/// UTF-8 byte order mark, kept in front of the output when present.
const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Reformats an XML document with two-space indentation.
///
/// The whole input is validated before the result is returned, so callers
/// never see partial output. The result always ends with exactly one `\n`.
///
/// # Errors
///
/// Returns a [`MarkupError`] in these cases:
///
/// - The input is not valid UTF-8
/// - The tokenizer rejects the input (mismatched or stray end tags, bad syntax,
///   `--` inside a comment)
/// - An element or attribute name is not a valid XML name
/// - An attribute is malformed or duplicated, or its value holds a raw `<`
/// - Text or an attribute value has a bare `&` or an unknown entity reference
/// - An element is still open at end of input
/// - A second element or non-whitespace text appears outside the root
/// - The document has no root element
pub fn pretty_print(input: &[u8]) -> Result<Vec<u8>, MarkupError> {
    std::str::from_utf8(input).map_err(|source| MarkupError::Encoding {
        position: to_position(source.valid_up_to()),
        source,
    })?;

    let mut reader = Reader::from_reader(input);
    reader.config_mut().check_comments = true;

    let mut printer = Printer::with_capacity(input.len() + input.len() / 4);
    if input.starts_with(UTF8_BOM) {
        printer.prefix(UTF8_BOM);
    }
    let mut open: Vec<Vec<u8>> = Vec::new();
    let mut root_seen = false;

    loop {
        let event = reader
            .read_event()
            .map_err(|source| MarkupError::Syntax {
                position: reader.error_position(),
                source,
            })?;

        match event {
            Event::Start(start) => {
                check_element(&reader, &start, open.is_empty(), root_seen)?;
                root_seen = true;
                open.push(start.name().as_ref().to_vec());
                printer.open(&start);
            }
            Event::Empty(start) => {
                check_element(&reader, &start, open.is_empty(), root_seen)?;
                root_seen = true;
                printer.empty(&start);
            }
            Event::End(end) => {
                // The reader already matched the name against the open tag
                open.pop();
                printer.close(&end);
            }
            Event::Text(text) => {
                if text.iter().all(is_xml_whitespace) {
                    printer.space(&text);
                    continue;
                }
                if open.is_empty() {
                    return Err(MarkupError::ContentOutsideRoot {
                        position: reader.buffer_position(),
                    });
                }
                text.unescape().map_err(|source| MarkupError::Reference {
                    position: reader.buffer_position(),
                    source,
                })?;
                printer.inline(b"", &text, b"");
            }
            Event::CData(cdata) => {
                if open.is_empty() {
                    return Err(MarkupError::ContentOutsideRoot {
                        position: reader.buffer_position(),
                    });
                }
                printer.inline(b"<![CDATA[", &cdata, b"]]>");
            }
            Event::Comment(comment) => printer.line(b"<!--", &comment, b"-->"),
            Event::Decl(decl) => printer.line(b"<?", &decl, b"?>"),
            Event::PI(pi) => printer.line(b"<?", &pi, b"?>"),
            Event::DocType(doctype) => {
                printer.line(b"<!DOCTYPE ", doctype.trim_ascii_start(), b">");
            }
            Event::Eof => break,
        }
    }

    if let Some(name) = open.pop() {
        return Err(MarkupError::UnclosedElement {
            name: String::from_utf8_lossy(&name).into_owned(),
        });
    }
    if !root_seen {
        return Err(MarkupError::MissingRoot);
    }

    Ok(printer.finish())
}

/// Validates placement and attributes of a start or empty-element tag.
fn check_element(
    reader: &Reader<&[u8]>,
    start: &BytesStart<'_>,
    at_top_level: bool,
    root_seen: bool,
) -> Result<(), MarkupError> {
    if at_top_level && root_seen {
        return Err(MarkupError::ContentOutsideRoot {
            position: reader.buffer_position(),
        });
    }

    let position = reader.buffer_position();
    check_name(start.name().as_ref(), position)?;

    for attribute in start.attributes() {
        let attribute =
            attribute.map_err(|source| MarkupError::Attribute { position, source })?;
        check_attribute(reader, &attribute, position)?;
    }

    Ok(())
}

/// Validates an attribute name and the references in its value.
fn check_attribute(
    reader: &Reader<&[u8]>,
    attribute: &Attribute<'_>,
    position: u64,
) -> Result<(), MarkupError> {
    check_name(attribute.key.as_ref(), position)?;

    if attribute.value.contains(&b'<') {
        return Err(MarkupError::LessThanInAttribute { position });
    }

    attribute
        .decode_and_unescape_value(reader.decoder())
        .map_err(|source| MarkupError::Reference { position, source })?;

    Ok(())
}

/// Rejects element and attribute names that break the XML `Name` production.
fn check_name(name: &[u8], position: u64) -> Result<(), MarkupError> {
    let valid = std::str::from_utf8(name).is_ok_and(|name| {
        let mut chars = name.chars();
        chars.next().is_some_and(is_name_start) && chars.all(is_name_char)
    });

    if valid {
        Ok(())
    } else {
        Err(MarkupError::InvalidName {
            name: String::from_utf8_lossy(name).into_owned(),
            position,
        })
    }
}

fn is_name_start(c: char) -> bool {
    matches!(c,
        ':' | '_' | 'A'..='Z' | 'a'..='z'
        | '\u{C0}'..='\u{D6}' | '\u{D8}'..='\u{F6}' | '\u{F8}'..='\u{2FF}'
        | '\u{370}'..='\u{37D}' | '\u{37F}'..='\u{1FFF}' | '\u{200C}'..='\u{200D}'
        | '\u{2070}'..='\u{218F}' | '\u{2C00}'..='\u{2FEF}' | '\u{3001}'..='\u{D7FF}'
        | '\u{F900}'..='\u{FDCF}' | '\u{FDF0}'..='\u{FFFD}' | '\u{10000}'..='\u{EFFFF}')
}

fn is_name_char(c: char) -> bool {
    is_name_start(c)
        || matches!(c,
            '-' | '.' | '0'..='9' | '\u{B7}' | '\u{300}'..='\u{36F}' | '\u{203F}'..='\u{2040}')
}

/// XML whitespace is space, tab, CR and LF only.
fn is_xml_whitespace(byte: &u8) -> bool {
    matches!(byte, b' ' | b'\t' | b'\r' | b'\n')
}

fn to_position(offset: usize) -> u64 {
    u64::try_from(offset).unwrap_or(u64::MAX)
}

/// Incremental indenting writer over an output buffer.
struct Printer {
    out: Vec<u8>,
    /// Length of the byte order mark copied ahead of the first token.
    start: usize,
    depth: usize,
    /// The innermost element has only been opened or given inline text, so
    /// its end tag stays on the current line.
    close_inline: bool,
    /// Whitespace held back until the next token shows whether it is
    /// indentation or content.
    pending: Vec<u8>,
}

impl Printer {
    fn with_capacity(capacity: usize) -> Self {
        Self {
            out: Vec::with_capacity(capacity),
            start: 0,
            depth: 0,
            close_inline: false,
            pending: Vec::new(),
        }
    }

    fn prefix(&mut self, raw: &[u8]) {
        self.out.extend_from_slice(raw);
        self.start = self.out.len();
    }

    /// Holds whitespace-only text that may belong inline.
    ///
    /// It is written only if the next token stays on the current line, so
    /// `<b> </b>` keeps its content while whitespace before a child element
    /// is replaced by indentation.
    fn space(&mut self, raw: &[u8]) {
        if self.close_inline {
            self.pending.extend_from_slice(raw);
        }
    }

    fn open(&mut self, raw: &[u8]) {
        self.line(b"<", raw, b">");
        self.depth += 1;
        self.close_inline = true;
    }

    fn empty(&mut self, raw: &[u8]) {
        self.line(b"<", raw, b"/>");
    }

    fn close(&mut self, raw: &[u8]) {
        self.depth = self.depth.saturating_sub(1);
        if self.close_inline {
            self.flush_pending();
            self.push(b"</", raw, b">");
        } else {
            self.line(b"</", raw, b">");
        }
        self.close_inline = false;
    }

    /// Writes a token on a fresh line at the current depth.
    fn line(&mut self, prefix: &[u8], raw: &[u8], suffix: &[u8]) {
        self.pending.clear();
        if self.out.len() > self.start {
            self.out.push(b'\n');
        }
        for _ in 0..self.depth {
            self.out.extend_from_slice(INDENT);
        }
        self.push(prefix, raw, suffix);
        self.close_inline = false;
    }

    /// Writes a token right after the previous one.
    fn inline(&mut self, prefix: &[u8], raw: &[u8], suffix: &[u8]) {
        self.flush_pending();
        self.push(prefix, raw, suffix);
    }

    fn flush_pending(&mut self) {
        self.out.append(&mut self.pending);
    }

    fn push(&mut self, prefix: &[u8], raw: &[u8], suffix: &[u8]) {
        self.out.extend_from_slice(prefix);
        self.out.extend_from_slice(raw);
        self.out.extend_from_slice(suffix);
    }

    fn finish(mut self) -> Vec<u8> {
        if self.out.last() != Some(&b'\n') {
            self.out.push(b'\n');
        }
        self.out
    }
}
