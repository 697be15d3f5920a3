use std::path::PathBuf;

use thiserror::Error;

#[derive(Error, Debug)]
pub enum Error {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("XML error: {0}")]
    Xml(#[from] quick_xml::Error),

    #[error("malformed XML attribute: {0}")]
    Attr(#[from] quick_xml::events::attributes::AttrError),

    #[error("XML escape error: {0}")]
    Escape(#[from] quick_xml::escape::EscapeError),

    #[error("unexpected end of file: <{0}> is never closed")]
    UnclosedElement(String),

    #[error("image error: {0}")]
    Image(#[from] image::ImageError),

    #[error("cannot derive a metadata path for {0}: expected a 3-character extension")]
    SidecarPath(PathBuf),
}

pub type Result<T> = std::result::Result<T, Error>;
