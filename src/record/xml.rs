use quick_xml::events::{BytesStart, Event};
use quick_xml::Reader;
use serde_json::{Map, Value};

use crate::error::FetchError;

/// An element being assembled while its children are read.
struct Frame {
    name: String,
    fields: Map<String, Value>,
    /// Text directly under this element.
    text: String,
    /// Text of this element and all descendants, in document order.
    content: String,
}

impl Frame {
    fn open(e: &BytesStart) -> Result<Self, FetchError> {
        let name = String::from_utf8_lossy(e.name().local_name().as_ref()).into_owned();
        let mut fields = Map::new();
        for attr in e.attributes() {
            let attr = attr.map_err(quick_xml::Error::from)?;
            let key = String::from_utf8_lossy(attr.key.local_name().as_ref()).into_owned();
            let value = attr.unescape_value()?.into_owned();
            fields.insert(format!("@{key}"), Value::String(value));
        }
        Ok(Self {
            name,
            fields,
            text: String::new(),
            content: String::new(),
        })
    }

    fn push_text(&mut self, text: &str) {
        self.text.push_str(text);
        self.content.push_str(text);
    }

    /// Mixed content (`Role of <i>BRCA1</i>`) keeps the inline children's
    /// text in `#text`, so the element reads as one string.
    fn close(self) -> (String, Value, String) {
        let text = self.content.trim();
        let value = if self.fields.is_empty() {
            if text.is_empty() {
                Value::Null
            } else {
                Value::String(text.to_string())
            }
        } else {
            let mut fields = self.fields;
            if !self.text.trim().is_empty() {
                fields.insert("#text".to_string(), Value::String(text.to_string()));
            }
            Value::Object(fields)
        };
        (self.name, value, self.content)
    }
}

/// Hand a closed element to its parent, or make it the document root.
fn attach(stack: &mut [Frame], root: &mut Option<(String, Value)>, closed: (String, Value, String)) {
    let (name, value, content) = closed;
    match stack.last_mut() {
        Some(parent) => {
            parent.content.push_str(&content);
            insert_child(&mut parent.fields, name, value);
        }
        None => *root = Some((name, value)),
    }
}

/// Repeated child elements collapse into an array under one key.
fn insert_child(fields: &mut Map<String, Value>, name: String, value: Value) {
    match fields.get_mut(&name) {
        Some(Value::Array(items)) => items.push(value),
        Some(existing) => {
            let first = existing.take();
            *existing = Value::Array(vec![first, value]);
        }
        None => {
            fields.insert(name, value);
        }
    }
}

/// Convert an XML document into a generic tree.
///
/// The result is an object with the root element's name as its only key.
/// Text-only elements become strings, empty elements become `null`, and
/// elements with attributes or children become objects where attributes are
/// stored under `@name` and text under `#text`. When an element's own text
/// is interleaved with child elements, `#text` holds the text of those
/// children too, in document order. A child element that occurs more than
/// once becomes an array in document order; one that occurs once stays a
/// single value, so readers must accept both shapes.
pub fn to_value(xml: &str) -> Result<Value, FetchError> {
    let mut reader = Reader::from_str(xml);
    let mut buf = Vec::new();
    let mut stack: Vec<Frame> = Vec::new();
    let mut root: Option<(String, Value)> = None;

    loop {
        match reader.read_event_into(&mut buf)? {
            Event::Start(ref e) => stack.push(Frame::open(e)?),
            Event::Empty(ref e) => {
                let closed = Frame::open(e)?.close();
                attach(&mut stack, &mut root, closed);
            }
            Event::Text(ref e) => {
                if let Some(frame) = stack.last_mut() {
                    frame.push_text(&e.unescape()?);
                }
            }
            Event::CData(e) => {
                if let Some(frame) = stack.last_mut() {
                    frame.push_text(&String::from_utf8_lossy(&e.into_inner()));
                }
            }
            Event::End(_) => {
                let frame = stack
                    .pop()
                    .ok_or_else(|| FetchError::xml("closing tag without opening tag"))?;
                attach(&mut stack, &mut root, frame.close());
            }
            Event::Eof => break,
            _ => {}
        }
        buf.clear();
    }

    if let Some(open) = stack.last() {
        return Err(FetchError::xml(format!("unclosed element <{}>", open.name)));
    }

    let (name, value) = root.ok_or_else(|| FetchError::xml("document has no root element"))?;
    let mut doc = Map::new();
    doc.insert(name, value);
    Ok(Value::Object(doc))
}
