use std::fmt;
use futures::future;
use reqwest;
use thiserror::Error;
use tracing::{debug, warn};

/// Which of the two injected regions a fragment fills.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FragmentKind {
    Header,
    Footer,
}

impl FragmentKind {

    /// Value of the `part` query parameter for this kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            FragmentKind::Header => "header",
            FragmentKind::Footer => "footer",
        }
    }

    /// Content injected when the fragment can't be fetched.
    pub fn default_content(&self) -> &'static str {
        match self {
            FragmentKind::Header => "Default header content",
            FragmentKind::Footer => "Default footer content",
        }
    }
}

impl fmt::Display for FragmentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Error, Debug)]
pub enum FragmentError {
    #[error("ReqwestError: {0}")]
    ReqwestError(#[from] reqwest::Error),
}

pub type Result<T> = std::result::Result<T, FragmentError>;

/// Header and footer HTML, always present once fetched (fetched or defaulted).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Fragments {
    pub header: String,
    pub footer: String,
}

impl Fragments {

    /// Fetches both fragments from `source_url` concurrently.
    ///
    /// Never fails: each fragment falls back to its default independently.
    pub async fn fetch(source_url: &str) -> Self {
        let client = match Self::init_client() {
            Ok(client) => client,
            Err(e) => {
                warn!(error = %e, "can't build HTTP client, using default fragments");
                return Self::defaults();
            }
        };
        Self::fetch_with(&client, source_url).await
    }

    pub async fn fetch_with(client: &reqwest::Client, source_url: &str) -> Self {

        let header = Self::fetch_or_default(client, source_url, FragmentKind::Header);
        let footer = Self::fetch_or_default(client, source_url, FragmentKind::Footer);

        let (header, footer) = future::join(header, footer).await;

        Self { header, footer }
    }

    pub fn defaults() -> Self {
        Self {
            header: FragmentKind::Header.default_content().to_string(),
            footer: FragmentKind::Footer.default_content().to_string(),
        }
    }

    async fn fetch_or_default(client: &reqwest::Client, source_url: &str, kind: FragmentKind) -> String {
        match Self::fetch_part(client, source_url, kind).await {
            Ok(content) => {
                debug!(part = %kind, bytes = content.len(), "fetched fragment");
                content
            }
            Err(e) => {
                warn!(part = %kind, error = %e, "error fetching {} content, using default", kind);
                kind.default_content().to_string()
            }
        }
    }

    async fn fetch_part(client: &reqwest::Client, source_url: &str, kind: FragmentKind) -> Result<String> {

        let response = client
            .get(Self::part_url(source_url, kind))
            .send()
            .await?
            .error_for_status()?;

        Ok(response.text().await?)
    }

    /// `{source_url}?part={kind}`, appended verbatim.
    pub fn part_url(source_url: &str, kind: FragmentKind) -> String {
        format!("{}?part={}", source_url, kind)
    }

    const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/115.0.0.0 Safari/537.36";

    pub fn init_client() -> std::result::Result<reqwest::Client, reqwest::Error> {
        reqwest::Client::builder()
            .user_agent(Self::USER_AGENT)
            .build()
    }
}
