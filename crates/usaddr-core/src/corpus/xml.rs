//! # Labeled XML Records
//!
//! Training documents hold any number of `<AddressString>` elements. Every
//! direct child of one is a labeled field: its tag is the label and its
//! text is split on whitespace into tokens.
//!
//! ```xml
//! <AddressCollection>
//!   <AddressString>
//!     <AddressNumber>123</AddressNumber>
//!     <StreetName>Main</StreetName>
//!     <StreetNamePostType>St.</StreetNamePostType>
//!   </AddressString>
//! </AddressCollection>
//! ```

use quick_xml::Reader;
use quick_xml::events::{BytesStart, Event};

use crate::error::{Result, UsaddrError};
use crate::types::{LabeledSequence, Tokenizer};

/// Tag name of an address container element.
pub const ADDRESS_TAG: &str = "AddressString";

/// One open element while walking the document.
struct Frame {
    /// Slot of the sequence this element feeds, when it is an address container.
    container: Option<usize>,
    /// Slot and label when this element is a direct child of a container.
    field: Option<(usize, String)>,
    text: String,
    /// Leading text ends at the first nested element.
    text_open: bool,
}

/// Parse one XML document into labeled sequences, in document order.
///
/// Containers that produce no tokens are dropped.
///
/// # Errors
///
/// Returns `UsaddrError::MalformedSource` if the document is not well-formed.
///
/// # Examples
/// ```
/// use usaddr_core::corpus::parse_records;
///
/// let xml = "<AddressCollection><AddressString>\
///            <PlaceName>Springfield</PlaceName> <StateName>IL</StateName>\
///            </AddressString></AddressCollection>";
/// let records = parse_records("inline.xml", xml).unwrap();
/// assert_eq!(records.len(), 1);
/// assert_eq!(records[0].tokens(), ["Springfield", "IL"]);
/// assert_eq!(records[0].labels(), ["PlaceName", "StateName"]);
/// ```
pub fn parse_records(source_name: &str, text: &str) -> Result<Vec<LabeledSequence>> {
    parse_document(text).map_err(|reason| UsaddrError::MalformedSource {
        source_name: source_name.to_string(),
        reason,
    })
}

fn parse_document(text: &str) -> std::result::Result<Vec<LabeledSequence>, String> {
    let tokenizer = Tokenizer::new();
    let mut reader = Reader::from_str(text);
    let mut frames: Vec<Frame> = Vec::new();
    let mut slots: Vec<LabeledSequence> = Vec::new();
    let mut seen_root = false;

    loop {
        let position = reader.buffer_position();
        let event = reader
            .read_event()
            .map_err(|e| format!("{e} at byte {position}"))?;

        match event {
            Event::Start(start) => {
                open_element(&start, &mut frames, &mut slots, &mut seen_root)?;
            }
            Event::Empty(start) => {
                open_element(&start, &mut frames, &mut slots, &mut seen_root)?;
                close_element(&mut frames, &mut slots, &tokenizer)?;
            }
            Event::End(_) => close_element(&mut frames, &mut slots, &tokenizer)?,
            Event::Text(t) => {
                let content = t
                    .unescape()
                    .map_err(|e| format!("{e} at byte {position}"))?;
                append_text(&mut frames, &content, position)?;
            }
            Event::CData(t) => {
                let content = String::from_utf8_lossy(&t.into_inner()).into_owned();
                append_text(&mut frames, &content, position)?;
            }
            Event::Eof => break,
            _ => {}
        }
    }

    if !frames.is_empty() {
        return Err("unexpected end of document: unclosed element".to_string());
    }
    if !seen_root {
        return Err("no element found".to_string());
    }

    Ok(slots.into_iter().filter(|seq| !seq.is_empty()).collect())
}

fn open_element(
    start: &BytesStart<'_>,
    frames: &mut Vec<Frame>,
    slots: &mut Vec<LabeledSequence>,
    seen_root: &mut bool,
) -> std::result::Result<(), String> {
    let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();

    let field = match frames.last_mut() {
        Some(parent) => {
            parent.text_open = false;
            parent.container.map(|slot| (slot, name.clone()))
        }
        None if *seen_root => return Err(format!("junk after document element: <{name}>")),
        None => {
            *seen_root = true;
            None
        }
    };

    let container = (name == ADDRESS_TAG).then(|| {
        slots.push(LabeledSequence::new());
        slots.len() - 1
    });

    frames.push(Frame {
        container,
        field,
        text: String::new(),
        text_open: true,
    });
    Ok(())
}

fn close_element(
    frames: &mut Vec<Frame>,
    slots: &mut [LabeledSequence],
    tokenizer: &Tokenizer,
) -> std::result::Result<(), String> {
    let frame = frames
        .pop()
        .ok_or_else(|| "closing tag without matching opening tag".to_string())?;

    if let Some((slot, label)) = frame.field {
        for token in tokenizer.tokenize(&frame.text) {
            slots[slot].push(token, label.as_str());
        }
    }
    Ok(())
}

fn append_text(
    frames: &mut [Frame],
    content: &str,
    position: usize,
) -> std::result::Result<(), String> {
    match frames.last_mut() {
        Some(frame) => {
            if frame.field.is_some() && frame.text_open {
                frame.text.push_str(content);
            }
            Ok(())
        }
        None if content.trim().is_empty() => Ok(()),
        None => Err(format!("text outside of document element at byte {position}")),
    }
}
