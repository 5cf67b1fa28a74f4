//! Document backend backed by PDFium (Chromium's PDF library).
//!
//! Implements the read side by walking a page's text characters with
//! their loose bounding boxes, and the write side by adding fill and
//! text objects to the destination page before saving.

use std::cell::OnceCell;
use std::path::{Path, PathBuf};

use pdfium_render::prelude::*;

use crate::error::{Error, Result};
use crate::fonts::FontSpec;
use crate::fragment::{Fragment, PageScan};
use crate::geometry::{Color, Rect};
use crate::layout::PaintSurface;
use crate::replacer::{DocumentBackend, PageReader, PageWriter};

/// Backend that opens documents through the pdfium dynamic library.
///
/// Searches the current directory first, then the system library
/// paths. The library is bound on the first open and the binding is
/// reused for every document the backend opens afterwards.
#[derive(Default)]
pub struct PdfiumBackend {
    pdfium: OnceCell<&'static Pdfium>,
}

impl PdfiumBackend {
    /// Create a backend. Binding happens lazily on the first open.
    pub fn new() -> Self {
        Self {
            pdfium: OnceCell::new(),
        }
    }

    fn bind(&self) -> Result<&'static Pdfium> {
        if let Some(pdfium) = self.pdfium.get().copied() {
            return Ok(pdfium);
        }
        let bindings = Pdfium::bind_to_library(Pdfium::pdfium_platform_library_name_at_path("./"))
            .or_else(|_| Pdfium::bind_to_system_library())
            .map_err(|e| Error::Backend(format!("pdfium unavailable: {}", e)))?;
        // The instance must outlive every document it loads, so it is
        // leaked once and cached; later binds return the same handle.
        let pdfium: &'static Pdfium = Box::leak(Box::new(Pdfium::new(bindings)));
        Ok(*self.pdfium.get_or_init(|| pdfium))
    }
}

/// Read handle over a loaded document.
pub struct PdfiumReader {
    document: PdfDocument<'static>,
    path: PathBuf,
}

fn page_index(page: usize) -> Result<u16> {
    page.checked_sub(1)
        .and_then(|i| u16::try_from(i).ok())
        .ok_or(Error::PageOutOfRange(page))
}

impl PageReader for PdfiumReader {
    fn page_count(&mut self) -> Result<usize> {
        Ok(self.document.pages().len() as usize)
    }

    fn scan_page(&mut self, page: usize) -> Result<PageScan> {
        let index = page_index(page)?;
        let pdf_page = self
            .document
            .pages()
            .get(index)
            .map_err(|_| Error::PageOutOfRange(page))?;
        let text_page = pdf_page
            .text()
            .map_err(|e| Error::Backend(format!("text extraction failed: {}", e)))?;

        let text = text_page.all().to_string();
        let mut fragments = Vec::new();
        for ch in text_page.chars().iter() {
            let Some(c) = ch.unicode_char() else {
                continue;
            };
            let Ok(bounds) = ch.loose_bounds() else {
                continue;
            };
            fragments.push(Fragment::new(
                Rect::new(
                    bounds.left().value,
                    bounds.bottom().value,
                    bounds.right().value,
                    bounds.top().value,
                ),
                c.to_string(),
            ));
        }

        Ok(PageScan { text, fragments })
    }

    fn page_box(&mut self, page: usize) -> Result<Rect> {
        let index = page_index(page)?;
        let pdf_page = self
            .document
            .pages()
            .get(index)
            .map_err(|_| Error::PageOutOfRange(page))?;
        Ok(Rect::new(
            0.0,
            0.0,
            pdf_page.width().value,
            pdf_page.height().value,
        ))
    }
}

/// Write handle over the destination copy.
pub struct PdfiumWriter {
    document: PdfDocument<'static>,
    dest: PathBuf,
}

impl PdfiumWriter {
    fn font_token(&mut self, family: &str) -> PdfFontToken {
        let fonts = self.document.fonts_mut();
        match family {
            "Times-Roman" => fonts.times_roman(),
            "Courier" => fonts.courier(),
            _ => fonts.helvetica(),
        }
    }
}

fn pdfium_color(color: Color) -> PdfColor {
    PdfColor::new(
        (color.r * 255.0) as u8,
        (color.g * 255.0) as u8,
        (color.b * 255.0) as u8,
        255,
    )
}

impl PaintSurface for PdfiumWriter {
    fn fill_rect(&mut self, page: usize, rect: &Rect, color: Color) -> Result<()> {
        let index = page_index(page)?;
        let fill = pdfium_color(color);
        let pdf_rect = PdfRect::new_from_values(rect.bottom, rect.left, rect.top, rect.right);

        let mut pdf_page = self
            .document
            .pages_mut()
            .get(index)
            .map_err(|_| Error::PageOutOfRange(page))?;
        pdf_page
            .objects_mut()
            .create_path_object_rect(pdf_rect, None, None, Some(fill))
            .map_err(|e| Error::Backend(format!("fill failed: {}", e)))?;
        pdf_page
            .regenerate_content()
            .map_err(|e| Error::Backend(format!("content regeneration failed: {}", e)))?;
        Ok(())
    }

    fn draw_text_line(
        &mut self,
        page: usize,
        x: f32,
        y: f32,
        text: &str,
        font: &FontSpec,
    ) -> Result<()> {
        let index = page_index(page)?;
        let token = self.font_token(&font.family);

        let mut object = PdfPageTextObject::new(
            &self.document,
            text,
            token,
            PdfPoints::new(font.size),
        )
        .map_err(|e| Error::Backend(format!("text object creation failed: {}", e)))?;
        object
            .set_fill_color(PdfColor::new(0, 0, 0, 255))
            .map_err(|e| Error::Backend(format!("text color failed: {}", e)))?;
        object
            .translate(PdfPoints::new(x), PdfPoints::new(y))
            .map_err(|e| Error::Backend(format!("text placement failed: {}", e)))?;

        let mut pdf_page = self
            .document
            .pages_mut()
            .get(index)
            .map_err(|_| Error::PageOutOfRange(page))?;
        pdf_page
            .objects_mut()
            .add_text_object(object)
            .map_err(|e| Error::Backend(format!("text paint failed: {}", e)))?;
        pdf_page
            .regenerate_content()
            .map_err(|e| Error::Backend(format!("content regeneration failed: {}", e)))?;
        Ok(())
    }
}

impl PageWriter for PdfiumWriter {
    fn commit(self) -> Result<()> {
        self.document
            .save_to_file(&self.dest)
            .map_err(|e| Error::Commit {
                path: self.dest.display().to_string(),
                reason: e.to_string(),
            })
    }
}

impl DocumentBackend for PdfiumBackend {
    type Reader = PdfiumReader;
    type Writer = PdfiumWriter;

    fn open(&self, path: &Path) -> Result<Self::Reader> {
        let pdfium = self.bind()?;
        let document = pdfium
            .load_pdf_from_file(path, None)
            .map_err(|e| Error::Open {
                path: path.display().to_string(),
                reason: e.to_string(),
            })?;
        Ok(PdfiumReader {
            document,
            path: path.to_path_buf(),
        })
    }

    fn open_writer(
        &self,
        reader: &Self::Reader,
        dest: &Path,
        flatten_forms: bool,
    ) -> Result<Self::Writer> {
        let pdfium = self.bind()?;
        let mut document =
            pdfium
                .load_pdf_from_file(&reader.path, None)
                .map_err(|e| Error::Commit {
                    path: dest.display().to_string(),
                    reason: e.to_string(),
                })?;

        if flatten_forms {
            let count = document.pages().len();
            for index in 0..count {
                let mut pdf_page = document
                    .pages_mut()
                    .get(index)
                    .map_err(|_| Error::PageOutOfRange(index as usize + 1))?;
                pdf_page.flatten().map_err(|e| Error::Commit {
                    path: dest.display().to_string(),
                    reason: format!("flatten failed: {}", e),
                })?;
            }
        }

        Ok(PdfiumWriter {
            document,
            dest: dest.to_path_buf(),
        })
    }
}
