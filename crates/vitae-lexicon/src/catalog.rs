use serde::Deserialize;
use std::collections::HashMap;
use std::fmt;
use std::path::Path;
use std::sync::LazyLock;
use vitae_core::VitaeError;

/// Role category selecting which curated keyword lists apply.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RoleCategory {
    Engineering,
    SoftwareEngineering,
    Marketing,
    ProductManagement,
    DataScience,
    General,
}

impl RoleCategory {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Engineering => "engineering",
            Self::SoftwareEngineering => "software-engineering",
            Self::Marketing => "marketing",
            Self::ProductManagement => "product-management",
            Self::DataScience => "data-science",
            Self::General => "general",
        }
    }
}

impl fmt::Display for RoleCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for RoleCategory {
    type Err = VitaeError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "engineering" => Ok(Self::Engineering),
            "software-engineering" | "software" => Ok(Self::SoftwareEngineering),
            "marketing" => Ok(Self::Marketing),
            "product-management" | "product" => Ok(Self::ProductManagement),
            "data-science" | "data" => Ok(Self::DataScience),
            "general" => Ok(Self::General),
            other => Err(VitaeError::InvalidArgument(format!(
                "unknown role category: {other}"
            ))),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
struct KeywordLists {
    tech: Vec<String>,
    engineering: Vec<String>,
    marketing: Vec<String>,
    product: Vec<String>,
    data: Vec<String>,
}

/// Curated keyword lists per role category, loaded from JSON data.
#[derive(Debug, Clone)]
pub struct KeywordCatalog {
    lists: KeywordLists,
}

static BUILTIN_KEYWORDS: LazyLock<KeywordCatalog> = LazyLock::new(|| {
    KeywordCatalog::from_json(include_str!("../data/keywords.json"))
        .expect("embedded keyword catalog")
});

impl KeywordCatalog {
    /// The compiled-in catalog.
    pub fn builtin() -> &'static Self {
        &BUILTIN_KEYWORDS
    }

    /// Load a catalog from an external JSON file.
    pub fn from_path(path: &Path) -> Result<Self, VitaeError> {
        Self::from_json(&std::fs::read_to_string(path)?)
    }

    pub fn from_json(json: &str) -> Result<Self, VitaeError> {
        Ok(Self {
            lists: serde_json::from_str(json)?,
        })
    }

    /// Keywords relevant to a role category. Categories compose: most
    /// non-tech roles still benefit from the tech list.
    pub fn for_category(&self, category: RoleCategory) -> Vec<&str> {
        let l = &self.lists;
        let chain: Vec<&Vec<String>> = match category {
            RoleCategory::Engineering => vec![&l.engineering, &l.tech],
            RoleCategory::SoftwareEngineering => vec![&l.tech],
            RoleCategory::Marketing => vec![&l.marketing, &l.tech],
            RoleCategory::ProductManagement => vec![&l.product, &l.tech],
            RoleCategory::DataScience => vec![&l.data, &l.tech],
            RoleCategory::General => vec![&l.tech, &l.marketing, &l.engineering],
        };
        chain
            .into_iter()
            .flat_map(|list| list.iter().map(String::as_str))
            .collect()
    }
}

/// Keyword → synonym list, loaded from JSON data.
#[derive(Debug, Clone)]
pub struct SynonymCatalog {
    map: HashMap<String, Vec<String>>,
}

static BUILTIN_SYNONYMS: LazyLock<SynonymCatalog> = LazyLock::new(|| {
    SynonymCatalog::from_json(include_str!("../data/synonyms.json"))
        .expect("embedded synonym catalog")
});

impl SynonymCatalog {
    pub fn builtin() -> &'static Self {
        &BUILTIN_SYNONYMS
    }

    pub fn from_path(path: &Path) -> Result<Self, VitaeError> {
        Self::from_json(&std::fs::read_to_string(path)?)
    }

    pub fn from_json(json: &str) -> Result<Self, VitaeError> {
        Ok(Self {
            map: serde_json::from_str(json)?,
        })
    }

    /// Synonyms for a term (empty when none are known). Lookup is by the
    /// lowercased term.
    pub fn synonyms(&self, term: &str) -> &[String] {
        self.map.get(term).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Whether a term is a known keyword or any keyword's synonym.
    pub fn is_known(&self, term: &str) -> bool {
        self.map.contains_key(term) || self.map.values().any(|syns| syns.iter().any(|s| s == term))
    }
}
