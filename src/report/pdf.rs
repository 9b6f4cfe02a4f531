use std::io::{BufWriter, Write};

use printpdf::{BuiltinFont, IndirectFontRef, Mm, PdfDocument, PdfLayerReference};

use super::{RenderError, ReportContent, ReportRenderer};

const PAGE_WIDTH: Mm = Mm(210.0);
const PAGE_HEIGHT: Mm = Mm(297.0);
const MARGIN: f32 = 20.0;
const TITLE_SIZE: f32 = 18.0;
const BODY_SIZE: f32 = 11.0;
const LINE_HEIGHT: f32 = 7.0;

/// A4 PDF output in the built-in Helvetica faces.
#[derive(Debug, Clone, Copy, Default)]
pub struct PdfReportRenderer;

fn pdf_err(err: printpdf::Error) -> RenderError {
    RenderError::Pdf(err.to_string())
}

impl ReportRenderer for PdfReportRenderer {
    fn render(&self, content: &ReportContent, out: &mut dyn Write) -> Result<(), RenderError> {
        let (doc, page, layer) = PdfDocument::new(&content.title, PAGE_WIDTH, PAGE_HEIGHT, "Layer 1");
        let title_font = doc.add_builtin_font(BuiltinFont::HelveticaBold).map_err(pdf_err)?;
        let body_font = doc.add_builtin_font(BuiltinFont::Helvetica).map_err(pdf_err)?;

        let mut current: PdfLayerReference = doc.get_page(page).get_layer(layer);
        let mut y = PAGE_HEIGHT.0 - MARGIN;

        current.use_text(content.title.as_str(), TITLE_SIZE, Mm(MARGIN), Mm(y), &title_font);
        y -= LINE_HEIGHT * 2.0;

        let mut pages = 1;
        for line in &content.lines {
            if y < MARGIN {
                pages += 1;
                let (next_page, next_layer) =
                    doc.add_page(PAGE_WIDTH, PAGE_HEIGHT, format!("Layer {pages}"));
                current = doc.get_page(next_page).get_layer(next_layer);
                y = PAGE_HEIGHT.0 - MARGIN;
            }
            write_line(&current, line, y, &body_font);
            y -= LINE_HEIGHT;
        }

        let mut writer = BufWriter::new(out);
        doc.save(&mut writer).map_err(pdf_err)?;
        writer.flush()?;
        Ok(())
    }
}

fn write_line(layer: &PdfLayerReference, line: &str, y: f32, font: &IndirectFontRef) {
    if !line.is_empty() {
        layer.use_text(line, BODY_SIZE, Mm(MARGIN), Mm(y), font);
    }
}
