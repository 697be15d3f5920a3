//! Sparrow atlas metadata: parsing, scaling, and serialization.
//!
//! The document is kept as a full tree (elements, attributes, text, comments)
//! so that a parse/serialize round-trip preserves everything the file
//! contained; scaling only rewrites the geometry attributes that exist.

use std::path::Path;

use quick_xml::events::{BytesDecl, BytesEnd, BytesStart, BytesText, Event};
use quick_xml::{Reader, Writer};

use crate::error::{Error, Result};

/// Root element of a Sparrow atlas file.
pub const ROOT_ELEMENT: &str = "TextureAtlas";

/// Per-frame element under the root.
pub const FRAME_ELEMENT: &str = "SubTexture";

/// Canvas attributes of the root element, rescaled at export time.
const CANVAS_FIELDS: [&str; 2] = ["width", "height"];

/// Geometry attributes of every `SubTexture`, rescaled at export time.
const FRAME_FIELDS: [&str; 8] = [
    "x",
    "y",
    "width",
    "height",
    "frameX",
    "frameY",
    "frameWidth",
    "frameHeight",
];

/// One frame rectangle within the atlas image.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct FrameRect {
    pub x: f32,
    pub y: f32,
    pub width: f32,
    pub height: f32,
}

/// A node of the parsed metadata tree.
#[derive(Debug, Clone)]
pub enum XmlNode {
    Element(XmlElement),
    Text(String),
    Comment(String),
}

/// An element with its attributes in document order.
#[derive(Debug, Clone, Default)]
pub struct XmlElement {
    pub name: String,
    pub attributes: Vec<(String, String)>,
    pub children: Vec<XmlNode>,
}

impl XmlElement {
    /// Attribute value by name.
    pub fn attr(&self, name: &str) -> Option<&str> {
        self.attributes
            .iter()
            .find(|(key, _)| key.as_str() == name)
            .map(|(_, value)| value.as_str())
    }

    /// Attribute as `f32`; missing or unparsable values read as 0.
    pub fn attr_f32(&self, name: &str) -> f32 {
        self.attr(name)
            .and_then(|value| value.parse().ok())
            .unwrap_or_default()
    }

    /// Child elements in document order.
    pub fn child_elements(&self) -> impl Iterator<Item = &XmlElement> {
        self.children.iter().filter_map(|node| match node {
            XmlNode::Element(element) => Some(element),
            _ => None,
        })
    }

    /// Multiply an existing numeric attribute by `factor` and round it.
    /// Absent attributes are left absent.
    fn scale_attr(&mut self, name: &str, factor: f32) {
        if let Some((_, value)) = self
            .attributes
            .iter_mut()
            .find(|(key, _)| key.as_str() == name)
        {
            let scaled = (value.parse::<f32>().unwrap_or_default() * factor).round();
            *value = format!("{scaled}");
        }
    }
}

/// Parsed atlas metadata document.
///
/// Defaults to an empty document, which serializes to a bare XML declaration.
#[derive(Debug, Clone, Default)]
pub struct AtlasDocument {
    nodes: Vec<XmlNode>,
}

impl AtlasDocument {
    /// Parse a document from a string.
    pub fn parse(xml: &str) -> Result<Self> {
        let mut reader = Reader::from_str(xml);
        let mut stack: Vec<XmlElement> = Vec::new();
        let mut document = AtlasDocument::default();

        loop {
            match reader.read_event()? {
                Event::Start(start) => stack.push(element_from_start(&start)?),
                Event::Empty(start) => {
                    let element = element_from_start(&start)?;
                    push_node(&mut document, &mut stack, XmlNode::Element(element));
                }
                Event::End(_) => {
                    // The reader validates tag nesting, so a pop always matches.
                    if let Some(element) = stack.pop() {
                        push_node(&mut document, &mut stack, XmlNode::Element(element));
                    }
                }
                Event::Text(text) => {
                    let content = unescape_bytes(&text)?;
                    if !content.trim().is_empty() {
                        push_node(&mut document, &mut stack, XmlNode::Text(content));
                    }
                }
                Event::CData(data) => {
                    let content = String::from_utf8_lossy(&data).into_owned();
                    push_node(&mut document, &mut stack, XmlNode::Text(content));
                }
                Event::Comment(comment) => {
                    let content = String::from_utf8_lossy(&comment).into_owned();
                    push_node(&mut document, &mut stack, XmlNode::Comment(content));
                }
                Event::Eof => {
                    // The reader does not reject truncated documents on its own.
                    if let Some(open) = stack.pop() {
                        return Err(Error::UnclosedElement(open.name));
                    }
                    break;
                }
                _ => {}
            }
        }

        Ok(document)
    }

    /// Parse a document from disk.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        Self::parse(&contents)
    }

    /// The `TextureAtlas` root element, if the document has one.
    pub fn root(&self) -> Option<&XmlElement> {
        self.nodes.iter().find_map(|node| match node {
            XmlNode::Element(element) if element.name == ROOT_ELEMENT => Some(element),
            _ => None,
        })
    }

    fn root_mut(&mut self) -> Option<&mut XmlElement> {
        self.nodes.iter_mut().find_map(|node| match node {
            XmlNode::Element(element) if element.name == ROOT_ELEMENT => Some(element),
            _ => None,
        })
    }

    /// Frame rectangles of every `SubTexture` under the root, in order.
    pub fn frame_rects(&self) -> Vec<FrameRect> {
        let Some(root) = self.root() else {
            return Vec::new();
        };
        root.child_elements()
            .filter(|element| element.name == FRAME_ELEMENT)
            .map(|element| FrameRect {
                x: element.attr_f32("x"),
                y: element.attr_f32("y"),
                width: element.attr_f32("width"),
                height: element.attr_f32("height"),
            })
            .collect()
    }

    /// Rescale the document in place: root canvas size plus the eight
    /// geometry fields of every `SubTexture`, each multiplied by `factor`
    /// and rounded independently. Everything else is untouched.
    pub fn rescale(&mut self, factor: f32) {
        let Some(root) = self.root_mut() else {
            return;
        };
        for field in CANVAS_FIELDS {
            root.scale_attr(field, factor);
        }
        for child in &mut root.children {
            if let XmlNode::Element(element) = child {
                if element.name == FRAME_ELEMENT {
                    for field in FRAME_FIELDS {
                        element.scale_attr(field, factor);
                    }
                }
            }
        }
    }

    /// Serialize the document with an XML declaration and tab indentation.
    pub fn to_xml(&self) -> Result<String> {
        let mut writer = Writer::new_with_indent(Vec::new(), b'\t', 1);
        writer.write_event(Event::Decl(BytesDecl::new("1.0", None, None)))?;
        for node in &self.nodes {
            write_node(&mut writer, node)?;
        }
        Ok(String::from_utf8_lossy(&writer.into_inner()).into_owned())
    }

    /// Serialize the document to disk.
    pub fn save(&self, path: &Path) -> Result<()> {
        std::fs::write(path, self.to_xml()?)?;
        Ok(())
    }
}

fn element_from_start(start: &BytesStart) -> Result<XmlElement> {
    let name = String::from_utf8_lossy(start.name().as_ref()).into_owned();
    let mut attributes = Vec::new();
    for attr in start.attributes() {
        let attr = attr?;
        let key = String::from_utf8_lossy(attr.key.as_ref()).into_owned();
        attributes.push((key, unescape_bytes(&attr.value)?));
    }
    Ok(XmlElement {
        name,
        attributes,
        children: Vec::new(),
    })
}

fn unescape_bytes(raw: &[u8]) -> Result<String> {
    let text = String::from_utf8_lossy(raw);
    Ok(quick_xml::escape::unescape(&text)?.into_owned())
}

fn push_node(document: &mut AtlasDocument, stack: &mut Vec<XmlElement>, node: XmlNode) {
    match stack.last_mut() {
        Some(parent) => parent.children.push(node),
        None => document.nodes.push(node),
    }
}

fn write_node<W: std::io::Write>(writer: &mut Writer<W>, node: &XmlNode) -> Result<()> {
    match node {
        XmlNode::Element(element) => {
            let mut start = BytesStart::new(element.name.as_str());
            for (key, value) in &element.attributes {
                start.push_attribute((key.as_str(), value.as_str()));
            }
            if element.children.is_empty() {
                writer.write_event(Event::Empty(start))?;
            } else {
                writer.write_event(Event::Start(start))?;
                for child in &element.children {
                    write_node(writer, child)?;
                }
                writer.write_event(Event::End(BytesEnd::new(element.name.as_str())))?;
            }
        }
        XmlNode::Text(text) => writer.write_event(Event::Text(BytesText::new(text)))?,
        XmlNode::Comment(text) => writer.write_event(Event::Comment(BytesText::new(text)))?,
    }
    Ok(())
}
