use std::path::Path;
use std::sync::Arc;
use headless_chrome;
use anyhow;
use serde_json;
use thiserror::Error;
use tracing::{debug, info};
use crate::fragment::Fragments;
use crate::pdf::{PdfError, PdfOptions};

pub const HEADER_ID: &str = "custom-header";
pub const FOOTER_ID: &str = "custom-footer";

const PRINT_STYLE: &str = r#"
            @media print {
              body {
                height: 100%;
                font-size: 13px;
              }
              #custom-footer {
                margin-top: 20px;
              }
            }
          "#;

#[derive(Error, Debug)]
pub enum WebPageError {
    #[error("Script evaluation error: {0}")]
    ScriptError(#[from] anyhow::Error),
    #[error("JSON conversion error: {0}")]
    JsonConversionError(#[from] serde_json::Error),
    #[error("Image failed to load: {0}")]
    ImageLoadError(String),
    #[error("PdfError: {0}")]
    PdfError(#[from] PdfError),
}

pub type Result<T> = std::result::Result<T, WebPageError>;

/// A loaded tab being prepared for printing.
pub struct WebPage (Arc<headless_chrome::Tab>);

impl WebPage {

    pub fn from_tab(tab: Arc<headless_chrome::Tab>) -> Self {
        Self(tab)
    }

    /// Puts the footer at the end of `<body>` and the header at its start.
    ///
    /// Fragment HTML is trusted and injected as-is, without sanitization.
    pub fn inject_fragments(&self, fragments: &Fragments) -> Result<()> {
        self.0.evaluate(&footer_script(&fragments.footer)?, false)?;
        self.0.evaluate(&header_script(&fragments.header)?, false)?;
        debug!("injected header and footer");
        Ok(())
    }

    pub fn inject_print_style(&self) -> Result<()> {
        self.0.evaluate(&style_script()?, false)?;
        Ok(())
    }

    /// Blocks until every image on the page has loaded.
    ///
    /// A single image error fails the whole wait.
    pub fn wait_for_images(&self) -> Result<()> {
        let result = self.0.evaluate(WAIT_FOR_IMAGES, true)?;

        match result.value {
            Some(serde_json::Value::String(e)) => Err(WebPageError::ImageLoadError(e)),
            _ => {
                debug!("all images loaded");
                Ok(())
            }
        }
    }

    pub fn content(&self) -> Result<String> {
        Ok(self.0.get_content()?)
    }

    pub fn print_to_pdf(&self, options: &PdfOptions, output_path: &Path) -> Result<()> {
        let pdf = self.0.print_to_pdf(Some(options.to_print_options())).map_err(PdfError::from)?;
        std::fs::write(output_path, pdf).map_err(PdfError::from)?;
        info!(path = %output_path.display(), "wrote PDF");
        Ok(())
    }
}

// Rejections are turned into a string result so they survive the trip
// through Runtime.evaluate.
const WAIT_FOR_IMAGES: &str = r#"
    Promise.all(
        Array.from(document.images).map((img) => {
            if (img.complete) return null;
            return new Promise((resolve, reject) => {
                img.onload = resolve;
                img.onerror = () => reject(new Error(img.currentSrc || img.src));
            });
        })
    ).then(() => null, (err) => String(err && err.message ? err.message : err))
"#;

fn footer_script(footer: &str) -> Result<String> {
    Ok(format!(
        r#"(() => {{
            const footerDiv = document.createElement("div");
            footerDiv.id = {id};
            footerDiv.innerHTML = {html};
            document.body.appendChild(footerDiv);
        }})()"#,
        id = serde_json::to_string(FOOTER_ID)?,
        html = serde_json::to_string(footer)?,
    ))
}

fn header_script(header: &str) -> Result<String> {
    Ok(format!(
        r#"(() => {{
            const headerDiv = document.createElement("div");
            headerDiv.id = {id};
            headerDiv.innerHTML = {html};
            document.body.insertBefore(headerDiv, document.body.firstChild);
        }})()"#,
        id = serde_json::to_string(HEADER_ID)?,
        html = serde_json::to_string(header)?,
    ))
}

fn style_script() -> Result<String> {
    Ok(format!(
        r#"(() => {{
            const style = document.createElement("style");
            style.textContent = {css};
            document.head.appendChild(style);
        }})()"#,
        css = serde_json::to_string(PRINT_STYLE)?,
    ))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fragment_html_is_embedded_as_string_literal() {
        let script = footer_script("<p class=\"x\">it's \"quoted\"\n</p>").unwrap();
        assert!(script.contains(r#"footerDiv.innerHTML = "<p class=\"x\">it's \"quoted\"\n</p>";"#));
        assert!(script.contains(r#"footerDiv.id = "custom-footer";"#));
        assert!(script.contains("document.body.appendChild(footerDiv)"));
    }

    #[test]
    fn header_goes_before_first_child() {
        let script = header_script("<h1>H</h1>").unwrap();
        assert!(script.contains(r#"headerDiv.innerHTML = "<h1>H</h1>";"#));
        assert!(script.contains(r#"headerDiv.id = "custom-header";"#));
        assert!(script.contains("document.body.insertBefore(headerDiv, document.body.firstChild)"));
    }

    #[test]
    fn quotes_in_fragment_stay_inside_literal() {
        let script = header_script("\"; alert(1); \"").unwrap();
        assert!(script.contains(r#"headerDiv.innerHTML = "\"; alert(1); \"";"#));
    }

    #[test]
    fn print_style_is_print_only() {
        let script = style_script().unwrap();
        assert!(script.contains("@media print"));
        assert!(script.contains("#custom-footer"));
        assert!(script.contains("margin-top: 20px"));
        assert!(script.contains("document.head.appendChild(style)"));
    }
}
