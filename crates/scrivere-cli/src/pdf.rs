// PDF renderer for paginated layouts.
//
// Draws every layout line at (left_margin, y) with the standard Type 1
// Helvetica fonts, one PDF page per layout page. The standard fonts only
// cover WinAnsi, so text is transcoded and unsupported characters are
// replaced with '?'.

use pdf_writer::{Content, Finish, Name, Pdf, Rect, Ref, Str};

use scrivere_core::layout::{Layout, LineStyle};

const BODY_FONT: Name<'static> = Name(b"F1");
const TITLE_FONT: Name<'static> = Name(b"F2");

/// Page geometry and font sizes for the PDF output.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PdfOptions {
    /// Page width in points.
    pub page_width: f32,
    /// Page height in points.
    pub page_height: f32,
    /// Horizontal offset of every line.
    pub left_margin: f32,
    /// Font size for the title line.
    pub title_font_size: f32,
    /// Font size for body lines.
    pub body_font_size: f32,
}

impl Default for PdfOptions {
    /// US letter, Helvetica-Bold 16 for the title and Helvetica 12 for text.
    fn default() -> Self {
        Self {
            page_width: 612.0,
            page_height: 792.0,
            left_margin: 50.0,
            title_font_size: 16.0,
            body_font_size: 12.0,
        }
    }
}

/// Render a layout to PDF bytes.
pub fn render(layout: &Layout, options: &PdfOptions) -> Vec<u8> {
    let mut next_id = 1;
    let mut alloc = || {
        let id = Ref::new(next_id);
        next_id += 1;
        id
    };

    let catalog_id = alloc();
    let tree_id = alloc();
    let regular_id = alloc();
    let bold_id = alloc();

    let page_count = layout.page_count.max(1);
    let page_ids: Vec<Ref> = (0..page_count).map(|_| alloc()).collect();
    let content_ids: Vec<Ref> = (0..page_count).map(|_| alloc()).collect();

    let mut pdf = Pdf::new();
    pdf.catalog(catalog_id).pages(tree_id);
    pdf.pages(tree_id)
        .kids(page_ids.iter().copied())
        .count(page_count as i32);

    pdf.type1_font(regular_id)
        .base_font(Name(b"Helvetica"))
        .encoding_predefined(Name(b"WinAnsiEncoding"));
    pdf.type1_font(bold_id)
        .base_font(Name(b"Helvetica-Bold"))
        .encoding_predefined(Name(b"WinAnsiEncoding"));

    for (index, (&page_id, &content_id)) in page_ids.iter().zip(&content_ids).enumerate() {
        let mut page = pdf.page(page_id);
        page.media_box(Rect::new(0.0, 0.0, options.page_width, options.page_height));
        page.parent(tree_id);
        page.contents(content_id);
        let mut resources = page.resources();
        resources
            .fonts()
            .pair(BODY_FONT, regular_id)
            .pair(TITLE_FONT, bold_id);
        resources.finish();
        page.finish();

        let content = page_content(layout, index + 1, options);
        pdf.stream(content_id, &content);
    }

    pdf.finish()
}

fn page_content(layout: &Layout, page: usize, options: &PdfOptions) -> Vec<u8> {
    let mut content = Content::new();
    for line in layout.lines_on_page(page) {
        if line.text.is_empty() {
            continue;
        }
        let (font, size) = match line.style {
            LineStyle::Title => (TITLE_FONT, options.title_font_size),
            LineStyle::Body => (BODY_FONT, options.body_font_size),
        };
        content.begin_text();
        content.set_font(font, size);
        content.next_line(options.left_margin, line.y);
        content.show(Str(&encode_win_ansi(&line.text)));
        content.end_text();
    }
    content.finish()
}

/// Transcode text to WinAnsi (Windows-1252) bytes.
///
/// Latin-1 maps one to one; the typographic punctuation that Windows-1252
/// places in 0x80..0x9F is mapped explicitly. Tabs become spaces.
pub fn encode_win_ansi(text: &str) -> Vec<u8> {
    text.chars()
        .map(|c| match c {
            '\t' => b' ',
            ' '..='~' => c as u8,
            '\u{00A0}'..='\u{00FF}' => c as u32 as u8,
            '\u{20AC}' => 0x80,
            '\u{2026}' => 0x85,
            '\u{2018}' => 0x91,
            '\u{2019}' => 0x92,
            '\u{201C}' => 0x93,
            '\u{201D}' => 0x94,
            '\u{2022}' => 0x95,
            '\u{2013}' => 0x96,
            '\u{2014}' => 0x97,
            _ => b'?',
        })
        .collect()
}
