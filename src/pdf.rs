use headless_chrome::types::PrintToPdfOptions;
use thiserror::Error;
use anyhow;

#[derive(Error, Debug)]
pub enum PdfError {
    #[error("Browser Error: {0}")]
    BrowserError(#[from] anyhow::Error),
    #[error("IO error: {0}")]
    IOError(#[from] std::io::Error)
}

pub type Result<T> = std::result::Result<T, PdfError>;

/// CSS pixels per inch; Chrome takes paper sizes and margins in inches.
const PX_PER_INCH: f64 = 96.0;

/// A4 in inches, as Chrome rounds it.
pub const A4_WIDTH_IN: f64 = 8.27;
pub const A4_HEIGHT_IN: f64 = 11.7;

/// Page margins in CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Margins {
    pub top: f64,
    pub bottom: f64,
    pub right: f64,
    pub left: f64,
}

impl Default for Margins {
    fn default() -> Self {
        Self { top: 50.0, bottom: 50.0, right: 0.0, left: 20.0 }
    }
}

/// Print settings for the rendered document.
///
/// Native header/footer templates stay off: they only take static markup,
/// the header and footer come from the page's own DOM instead.
#[derive(Debug, Clone, PartialEq)]
pub struct PdfOptions {
    pub paper_width: f64,
    pub paper_height: f64,
    pub print_background: bool,
    pub margins: Margins,
}

impl Default for PdfOptions {
    fn default() -> Self {
        Self {
            paper_width: A4_WIDTH_IN,
            paper_height: A4_HEIGHT_IN,
            print_background: true,
            margins: Margins::default(),
        }
    }
}

impl PdfOptions {

    pub fn to_print_options(&self) -> PrintToPdfOptions {
        PrintToPdfOptions {
            display_header_footer: Some(false),
            print_background: Some(self.print_background),
            paper_width: Some(self.paper_width),
            paper_height: Some(self.paper_height),
            margin_top: Some(px_to_inches(self.margins.top)),
            margin_bottom: Some(px_to_inches(self.margins.bottom)),
            margin_left: Some(px_to_inches(self.margins.left)),
            margin_right: Some(px_to_inches(self.margins.right)),
            ..Default::default()
        }
    }
}

fn px_to_inches(px: f64) -> f64 {
    px / PX_PER_INCH
}

#[cfg(test)]
mod tests {
    use super::*;

    fn close(a: Option<f64>, b: f64) -> bool {
        a.is_some_and(|a| (a - b).abs() < 1e-9)
    }

    #[test]
    fn default_is_a4_with_background() {
        let options = PdfOptions::default().to_print_options();
        assert!(close(options.paper_width, 8.27));
        assert!(close(options.paper_height, 11.7));
        assert_eq!(options.print_background, Some(true));
        assert_eq!(options.display_header_footer, Some(false));
        assert!(options.header_template.is_none());
        assert!(options.footer_template.is_none());
    }

    #[test]
    fn margins_are_converted_from_pixels() {
        let options = PdfOptions::default().to_print_options();
        assert!(close(options.margin_top, 50.0 / 96.0));
        assert!(close(options.margin_bottom, 50.0 / 96.0));
        assert!(close(options.margin_right, 0.0));
        assert!(close(options.margin_left, 20.0 / 96.0));
    }
}
