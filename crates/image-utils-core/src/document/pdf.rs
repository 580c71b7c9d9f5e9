//! Minimal PDF writer: one full-bleed JPEG image per page.

use lopdf::content::{Content, Operation};
use lopdf::{dictionary, Dictionary, Document, Object, ObjectId, Stream, StringFormat};

use super::DocumentError;
use crate::decode::{ColorMode, DecodedImage};

const PDF_VERSION: &str = "1.4";
const PRODUCER: &str = concat!("image-utils ", env!("CARGO_PKG_VERSION"));
const IMAGE_RESOURCE: &str = "Im0";

/// Builds a page tree of image pages in insertion order.
pub struct PdfWriter {
    doc: Document,
    pages_id: ObjectId,
    kids: Vec<Object>,
}

impl PdfWriter {
    pub fn new() -> Self {
        let mut doc = Document::with_version(PDF_VERSION);
        let pages_id = doc.new_object_id();
        Self {
            doc,
            pages_id,
            kids: Vec::new(),
        }
    }

    /// Append a page of `width_pt` x `height_pt` points showing `jpeg`,
    /// the already-encoded pixels of `image`.
    pub fn add_image_page(
        &mut self,
        image: &DecodedImage,
        jpeg: Vec<u8>,
        width_pt: f32,
        height_pt: f32,
    ) -> Result<(), DocumentError> {
        let color_space = match image.mode {
            ColorMode::Luma => "DeviceGray",
            ColorMode::Rgb => "DeviceRGB",
            mode => {
                return Err(DocumentError::Pdf(format!(
                    "page image must be normalized, got {mode:?}"
                )))
            }
        };

        let image_id = self.doc.add_object(Stream::new(
            dictionary! {
                "Type" => "XObject",
                "Subtype" => "Image",
                "Width" => image.width as i64,
                "Height" => image.height as i64,
                "ColorSpace" => color_space,
                "BitsPerComponent" => 8,
                "Filter" => "DCTDecode",
            },
            jpeg,
        ));

        // Scale the unit image square to the full page
        let content = Content {
            operations: vec![
                Operation::new("q", vec![]),
                Operation::new(
                    "cm",
                    vec![
                        width_pt.into(),
                        0.into(),
                        0.into(),
                        height_pt.into(),
                        0.into(),
                        0.into(),
                    ],
                ),
                Operation::new("Do", vec![Object::Name(IMAGE_RESOURCE.as_bytes().to_vec())]),
                Operation::new("Q", vec![]),
            ],
        };
        let encoded = content
            .encode()
            .map_err(|e| DocumentError::Pdf(e.to_string()))?;
        let content_id = self.doc.add_object(Stream::new(Dictionary::new(), encoded));

        let page_id = self.doc.add_object(dictionary! {
            "Type" => "Page",
            "Parent" => self.pages_id,
            "MediaBox" => vec![0.into(), 0.into(), width_pt.into(), height_pt.into()],
            "Contents" => content_id,
            "Resources" => dictionary! {
                "XObject" => dictionary! {
                    IMAGE_RESOURCE => image_id,
                },
            },
        });
        self.kids.push(Object::Reference(page_id));
        Ok(())
    }

    pub fn page_count(&self) -> usize {
        self.kids.len()
    }

    /// Write the page tree, catalog and info dictionary and serialize.
    pub fn finish(
        mut self,
        title: Option<&str>,
        author: Option<&str>,
    ) -> Result<Vec<u8>, DocumentError> {
        let count = self.kids.len() as i64;
        self.doc.objects.insert(
            self.pages_id,
            Object::Dictionary(dictionary! {
                "Type" => "Pages",
                "Kids" => self.kids,
                "Count" => count,
            }),
        );

        let catalog_id = self.doc.add_object(dictionary! {
            "Type" => "Catalog",
            "Pages" => self.pages_id,
        });
        self.doc.trailer.set("Root", catalog_id);

        let mut info = dictionary! {
            "Producer" => text_string(PRODUCER),
        };
        if let Some(title) = title {
            info.set("Title", text_string(title));
        }
        if let Some(author) = author {
            info.set("Author", text_string(author));
        }
        let info_id = self.doc.add_object(info);
        self.doc.trailer.set("Info", info_id);

        let mut buffer = Vec::new();
        self.doc
            .save_to(&mut buffer)
            .map_err(|e| DocumentError::Pdf(e.to_string()))?;
        Ok(buffer)
    }
}

impl Default for PdfWriter {
    fn default() -> Self {
        Self::new()
    }
}

/// PDF text string: literal for ASCII, UTF-16BE with BOM otherwise.
fn text_string(s: &str) -> Object {
    if s.is_ascii() {
        return Object::string_literal(s);
    }
    let mut bytes = vec![0xFE, 0xFF];
    for unit in s.encode_utf16() {
        bytes.extend_from_slice(&unit.to_be_bytes());
    }
    Object::String(bytes, StringFormat::Hexadecimal)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_text_string_ascii() {
        match text_string("Scans") {
            Object::String(bytes, StringFormat::Literal) => assert_eq!(bytes, b"Scans"),
            other => panic!("Expected literal string, got: {:?}", other),
        }
    }

    #[test]
    fn test_text_string_unicode() {
        match text_string("é") {
            Object::String(bytes, StringFormat::Hexadecimal) => {
                assert_eq!(bytes, vec![0xFE, 0xFF, 0x00, 0xE9])
            }
            other => panic!("Expected UTF-16 string, got: {:?}", other),
        }
    }

    #[test]
    fn test_rejects_alpha_image() {
        let mut writer = PdfWriter::new();
        let img = DecodedImage::new(1, 1, ColorMode::Rgba, vec![0, 0, 0, 0]);

        let result = writer.add_image_page(&img, vec![], 1.0, 1.0);
        assert!(matches!(result, Err(DocumentError::Pdf(_))));
        assert_eq!(writer.page_count(), 0);
    }
}
