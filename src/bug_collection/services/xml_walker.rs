use crate::shared::error::ReportError;
use crate::shared::Result;
use quick_xml::encoding::Decoder;
use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use std::io::BufRead;
use std::path::PathBuf;

/// Attributes of an opened element, decoded and unescaped
#[derive(Debug, Default)]
pub(crate) struct Attributes(Vec<(String, String)>);

impl Attributes {
    pub(crate) fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(key, _)| key == name)
            .map(|(_, value)| value.as_str())
    }

    pub(crate) fn get_owned(&self, name: &str) -> Option<String> {
        self.get(name).map(str::to_string)
    }

    pub(crate) fn get_u32(&self, name: &str) -> Option<u32> {
        self.get(name).and_then(|value| value.trim().parse().ok())
    }
}

/// One step of the depth-first walk. On `Open`, `path` holds the element
/// names from the root down to (and including) the opened element.
pub(crate) enum XmlNode<'a> {
    Open {
        path: &'a [String],
        attributes: Attributes,
    },
    Text {
        text: String,
    },
    Close,
}

/// Tells the walker whether to keep reading
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Flow {
    Continue,
    Stop,
}

/// Returns true if `path` equals `pattern` element by element
pub(crate) fn path_matches(path: &[String], pattern: &[&str]) -> bool {
    path.len() == pattern.len() && path.iter().zip(pattern).all(|(a, b)| a == b)
}

/// Streams `reader` as XML and hands every element boundary and text run to
/// `visit`, stopping early when it returns [`Flow::Stop`].
///
/// Well-formedness is checked only on the part of the document that was
/// read: mismatched end tags, content outside the root, a second root and
/// elements left open at end of input are reported as
/// [`ReportError::MalformedReport`], as is input that ends before a
/// document element was opened. Text and attributes are decoded with the
/// encoding named in the XML declaration (UTF-8 when absent).
pub(crate) fn walk<R, F>(reader: R, source_name: &str, mut visit: F) -> Result<()>
where
    R: BufRead,
    F: FnMut(XmlNode<'_>) -> Result<Flow>,
{
    let mut reader = Reader::from_reader(reader);
    reader.config_mut().trim_text(true);

    let mut buf = Vec::new();
    let mut stack: Vec<String> = Vec::new();
    let mut root_opened = false;
    let mut root_closed = false;

    loop {
        let event = reader
            .read_event_into(&mut buf)
            .map_err(|e| xml_error(e, source_name, reader.buffer_position()))?;

        let flow = match event {
            Event::Start(start) => {
                open_element(&start, &mut stack, root_closed, source_name)?;
                root_opened = true;
                let attributes = read_attributes(&start, reader.decoder(), source_name)?;
                visit(XmlNode::Open {
                    path: &stack,
                    attributes,
                })?
            }
            Event::Empty(start) => {
                open_element(&start, &mut stack, root_closed, source_name)?;
                root_opened = true;
                let attributes = read_attributes(&start, reader.decoder(), source_name)?;
                let flow = visit(XmlNode::Open {
                    path: &stack,
                    attributes,
                })?;
                if flow == Flow::Continue {
                    let flow = visit(XmlNode::Close)?;
                    stack.pop();
                    root_closed = stack.is_empty();
                    flow
                } else {
                    flow
                }
            }
            Event::End(_) => {
                if stack.is_empty() {
                    return Err(malformed(source_name, "closing tag without an open element"));
                }
                let flow = visit(XmlNode::Close)?;
                stack.pop();
                root_closed = stack.is_empty();
                flow
            }
            Event::Text(text) => {
                let text = text
                    .unescape()
                    .map_err(|e| xml_error(e, source_name, reader.buffer_position()))?
                    .into_owned();
                text_node(&stack, text, source_name, &mut visit)?
            }
            Event::CData(data) => {
                let text = reader
                    .decoder()
                    .decode(&data)
                    .map_err(|e| malformed(source_name, &e.to_string()))?
                    .into_owned();
                text_node(&stack, text, source_name, &mut visit)?
            }
            Event::Eof => {
                if let Some(open) = stack.last() {
                    return Err(malformed(
                        source_name,
                        &format!("unexpected end of document inside <{}>", open),
                    ));
                }
                if !root_opened {
                    return Err(malformed(source_name, "premature end of file, no document element"));
                }
                return Ok(());
            }
            // Declarations, comments, processing instructions and doctypes carry no report data
            _ => Flow::Continue,
        };

        if flow == Flow::Stop {
            return Ok(());
        }
        buf.clear();
    }
}

fn open_element(
    start: &BytesStart<'_>,
    stack: &mut Vec<String>,
    root_closed: bool,
    source_name: &str,
) -> Result<()> {
    let name = String::from_utf8_lossy(start.local_name().as_ref()).into_owned();
    if stack.is_empty() && root_closed {
        return Err(malformed(
            source_name,
            &format!("second root element <{}> after the document element", name),
        ));
    }
    stack.push(name);
    Ok(())
}

fn read_attributes(
    start: &BytesStart<'_>,
    decoder: Decoder,
    source_name: &str,
) -> Result<Attributes> {
    let mut attributes = Vec::new();
    for attribute in start.attributes() {
        let attribute = attribute.map_err(|e| malformed(source_name, &e.to_string()))?;
        let key = String::from_utf8_lossy(attribute.key.local_name().as_ref()).into_owned();
        let value = attribute
            .decode_and_unescape_value(decoder)
            .map_err(|e| malformed(source_name, &e.to_string()))?
            .into_owned();
        attributes.push((key, value));
    }
    Ok(Attributes(attributes))
}

fn text_node<F>(stack: &[String], text: String, source_name: &str, visit: &mut F) -> Result<Flow>
where
    F: FnMut(XmlNode<'_>) -> Result<Flow>,
{
    if stack.is_empty() {
        if text.trim().is_empty() {
            return Ok(Flow::Continue);
        }
        return Err(malformed(source_name, "text content outside the document element"));
    }
    visit(XmlNode::Text { text })
}

fn xml_error(error: quick_xml::Error, source_name: &str, position: impl std::fmt::Display) -> anyhow::Error {
    match error {
        quick_xml::Error::Io(io) => ReportError::ReportUnavailable {
            path: PathBuf::from(source_name),
            details: io.to_string(),
        }
        .into(),
        other => malformed(source_name, &format!("{} (at byte {})", other, position)),
    }
}

fn malformed(source_name: &str, details: &str) -> anyhow::Error {
    ReportError::MalformedReport {
        source_name: source_name.to_string(),
        details: details.to_string(),
    }
    .into()
}
