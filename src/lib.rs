//! Prints a live web page to PDF, with a header and footer fetched from the
//! page's own source injected into its DOM first.
//!
//! The pipeline is [`convert`]: fetch both [`fragment::Fragments`], open the
//! page in a headless [`browser::Browser`], inject the fragments and a print
//! stylesheet, wait for images, then print.

pub mod browser;
pub mod fragment;
pub mod logging;
pub mod pdf;
pub mod webpage;

use std::path::Path;
use thiserror::Error;
use tracing::info;
use browser::{Browser, BrowserError};
use fragment::Fragments;
use pdf::PdfOptions;
use webpage::WebPageError;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("BrowserError: {0}")]
    BrowserError(#[from] BrowserError),
    #[error("WebPageError: {0}")]
    WebPageError(#[from] WebPageError),
    #[error("Task failed: {0}")]
    TaskFailed(#[from] tokio::task::JoinError),
}

pub type Result<T> = std::result::Result<T, ConvertError>;

/// Converts the page at `source_url` into a PDF at `output_path`.
///
/// Fragment fetch failures never fail the conversion. Anything that goes
/// wrong in the browser does, and the browser is shut down either way.
pub async fn convert(source_url: &str, output_path: &Path) -> Result<()> {

    let fragments = Fragments::fetch(source_url).await;

    let source_url = source_url.to_string();
    let output_path = output_path.to_path_buf();

    tokio::task::spawn_blocking(move || {
        render(&source_url, &fragments, &PdfOptions::default(), &output_path)
    }).await?
}

/// The browser half of [`convert`], blocking.
pub fn render(source_url: &str, fragments: &Fragments, options: &PdfOptions, output_path: &Path) -> Result<()> {

    let browser = Browser::new()?;
    let page = browser.open_page(source_url)?;

    page.inject_fragments(fragments)?;
    page.inject_print_style()?;
    page.wait_for_images()?;
    page.print_to_pdf(options, output_path)?;

    info!(url = source_url, "rendered page");
    Ok(())
}
