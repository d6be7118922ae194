use rust_embed::Embed;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use std::sync::LazyLock;
use thiserror::Error;

pub static PORTFOLIO: LazyLock<Portfolio> = LazyLock::new(|| {
    Portfolio::load(PORTFOLIO_FILE).unwrap_or_else(|e| {
        log::error!("couldn't load {PORTFOLIO_FILE}: {e}");
        Portfolio::default()
    })
});

pub const PORTFOLIO_FILE: &str = "portfolio.json";

pub const FALLBACK_FEATURES: [&str; 4] = [
    "Responsive design for all devices",
    "Modern and intuitive user interface",
    "Fast performance and optimization",
    "Clean and maintainable code structure",
];

pub const FALLBACK_CHALLENGES: &str = "This project presented unique challenges in terms of scalability and user experience. Through careful planning and implementation, we created a solution that balances functionality with elegant design.";

#[derive(Embed)]
#[folder = "content"]
pub struct ContentAssets;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ContentError {
    #[error("content file not found")]
    Missing,
    #[error("content file is not valid UTF-8")]
    Encoding,
    #[error("couldn't parse content: {0}")]
    Parse(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Certificate {
    pub title: String,
    pub issuer: String,
    #[serde(default, deserialize_with = "year_as_text")]
    pub year: String,
    #[serde(default)]
    pub image: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub title: String,
    pub description: String,
    #[serde(default)]
    pub technologies: Vec<String>,
    #[serde(default)]
    pub roles: Vec<String>,
    #[serde(default)]
    pub features: Option<Vec<String>>,
    #[serde(default)]
    pub challenges: Option<String>,
    #[serde(default)]
    pub image: Option<String>,
}

impl Certificate {
    /// "Issuer • Year", or just the issuer when no year was given.
    pub fn byline(&self) -> String {
        if self.year.is_empty() {
            self.issuer.clone()
        } else {
            format!("{} • {}", self.issuer, self.year)
        }
    }
}

impl Project {
    /// Supplied features, or the generic list when the entry has none.
    pub fn features_or_default(&self) -> Vec<&str> {
        match &self.features {
            Some(features) => features.iter().map(String::as_str).collect(),
            None => FALLBACK_FEATURES.to_vec(),
        }
    }

    /// Supplied challenges text; absent or empty falls back to the generic
    /// paragraph, whitespace is kept as written.
    pub fn challenges_or_default(&self) -> &str {
        self.challenges
            .as_deref()
            .filter(|s| !s.is_empty())
            .unwrap_or(FALLBACK_CHALLENGES)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Portfolio {
    pub certificates: Vec<Certificate>,
    pub projects: Vec<Project>,
}

#[derive(Deserialize)]
struct RawPortfolio {
    #[serde(default)]
    certificates: Vec<serde_json::Value>,
    #[serde(default)]
    projects: Vec<serde_json::Value>,
}

impl Portfolio {
    pub fn load(name: &str) -> Result<Self, ContentError> {
        let file = ContentAssets::get(name).ok_or(ContentError::Missing)?;
        let text = std::str::from_utf8(&file.data).map_err(|_| ContentError::Encoding)?;
        Self::from_json(text)
    }

    /// Parses the content file. Entries that don't fit the schema are
    /// dropped one by one so a single bad record can't blank the page.
    pub fn from_json(text: &str) -> Result<Self, ContentError> {
        let raw: RawPortfolio =
            serde_json::from_str(text).map_err(|e| ContentError::Parse(e.to_string()))?;
        let portfolio = Self {
            certificates: parse_entries("certificate", raw.certificates),
            projects: parse_entries("project", raw.projects),
        };
        log::debug!(
            "loaded {} certificates and {} projects",
            portfolio.certificates.len(),
            portfolio.projects.len()
        );
        Ok(portfolio)
    }
}

fn parse_entries<T: DeserializeOwned>(kind: &str, values: Vec<serde_json::Value>) -> Vec<T> {
    values
        .into_iter()
        .enumerate()
        .filter_map(|(i, value)| match serde_json::from_value(value) {
            Ok(entry) => Some(entry),
            Err(e) => {
                log::warn!("skipping {kind} #{i}: {e}");
                None
            }
        })
        .collect()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum Year {
    Text(String),
    Number(i64),
}

fn year_as_text<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(match Year::deserialize(deserializer)? {
        Year::Text(s) => s,
        Year::Number(n) => n.to_string(),
    })
}
