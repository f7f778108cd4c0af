//! Declarative derivative catalog.
//!
//! The batch is driven by data, not control flow: a [`Catalog`] is an
//! immutable list of [`DerivativeSpec`] records mapping raw source filenames
//! (straight off the camera card) to canonical output names and target width
//! sets, grouped into five semantic categories. The orchestrator walks the
//! list in order and never consults anything else.
//!
//! The stock catalog describes the current site. A custom catalog can be
//! loaded from TOML:
//!
//! ```toml
//! [[entry]]
//! category = "patterns"
//! source = "IMG_2041.jpg"
//! name = "meadow-shawl"
//! widths = [320, 640]
//! ```
//!
//! Catalogs are validated before any rendering starts; an empty or zero
//! width list is a configuration error, not something to pass through to
//! the raster layer.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Catalog parse error: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("Entry {index} has an empty canonical name")]
    EmptyName { index: usize },
    #[error("Entry '{name}' has an empty source filename")]
    EmptySource { name: String },
    #[error("Entry '{name}' has an empty width list")]
    EmptyWidths { name: String },
    #[error("Entry '{name}' has a zero target width")]
    ZeroWidth { name: String },
    #[error("Favicon entry '{name}' carries a width list; favicon sizes are fixed")]
    FaviconWidths { name: String },
}

/// Semantic output category of a derivative spec.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Patterns,
    Categories,
    Featured,
    Logo,
    Favicon,
}

impl Category {
    /// Output subdirectory under the output root. Favicons go in the root
    /// itself.
    pub fn dir(self) -> Option<&'static str> {
        match self {
            Category::Patterns => Some("patterns"),
            Category::Categories => Some("categories"),
            Category::Featured => Some("featured"),
            Category::Logo => Some("logo"),
            Category::Favicon => None,
        }
    }

    /// Whether entries in this category go through shape normalization.
    ///
    /// Logos keep their source aspect ratio and favicons are cropped to
    /// fixed squares; neither is ever padded.
    pub fn normalizes(self) -> bool {
        matches!(
            self,
            Category::Patterns | Category::Categories | Category::Featured
        )
    }

    pub fn label(self) -> &'static str {
        match self {
            Category::Patterns => "patterns",
            Category::Categories => "categories",
            Category::Featured => "featured",
            Category::Logo => "logo",
            Category::Favicon => "favicon",
        }
    }
}

/// One catalog record: what derivatives to produce for one source asset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DerivativeSpec {
    pub category: Category,
    /// Raw source filename, relative to the source root.
    pub source: String,
    /// Canonical output basename, independent of the source filename.
    pub name: String,
    /// Target widths in emission order. Empty (and required so) for favicon.
    #[serde(default)]
    pub widths: Vec<u32>,
}

/// Immutable batch configuration: the full ordered entry list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(rename = "entry")]
    pub entries: Vec<DerivativeSpec>,
}

impl Catalog {
    /// The stock catalog for the current site.
    pub fn stock() -> Self {
        fn entry(category: Category, source: &str, name: &str, widths: &[u32]) -> DerivativeSpec {
            DerivativeSpec {
                category,
                source: source.to_string(),
                name: name.to_string(),
                widths: widths.to_vec(),
            }
        }
        use Category::*;

        Self {
            entries: vec![
                // Pattern photos — 3:4 tiles on the pattern listing pages
                entry(Patterns, "IMG_2041.jpg", "meadow-shawl", &[320, 640]),
                entry(Patterns, "IMG_2117.jpg", "aran-cable-pullover", &[320, 640]),
                entry(Patterns, "DSC_0481.jpg", "summer-linen-tee", &[320, 640]),
                entry(Patterns, "IMG_2203.jpg", "fisherman-gansey", &[320, 640]),
                entry(Patterns, "DSC_0512.jpg", "lace-weight-wrap", &[320, 640]),
                entry(Patterns, "IMG_2310.jpg", "colorwork-mittens", &[320, 640]),
                // Category tiles — one per top-level section
                entry(Categories, "category-sweaters.jpg", "sweaters", &[400, 800]),
                entry(Categories, "category-summer.jpg", "summer", &[400, 800]),
                entry(
                    Categories,
                    "category-accessories.jpg",
                    "accessories",
                    &[400, 800],
                ),
                entry(
                    Categories,
                    "category-test-knitting.jpg",
                    "test-knitting",
                    &[400, 800],
                ),
                // Featured images for the what's-new page
                entry(Featured, "IMG_2255.jpg", "whats-new-gansey", &[350, 700]),
                entry(Featured, "DSC_0530.jpg", "whats-new-wrap", &[350, 700]),
                // Logotype — aspect preserved, two passes at different scales
                entry(Logo, "logo.png", "logo", &[120, 240, 300]),
                entry(Logo, "logo-small.png", "logo-small", &[60, 120]),
                // Favicon — fixed square sizes, no width list
                entry(Favicon, "favicon-source.png", "favicon", &[]),
            ],
        }
    }

    /// Load and validate a catalog from a TOML file.
    pub fn load(path: &Path) -> Result<Self, CatalogError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    /// Parse and validate a catalog from TOML text.
    pub fn from_toml_str(content: &str) -> Result<Self, CatalogError> {
        let catalog: Catalog = toml::from_str(content)?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn validate(&self) -> Result<(), CatalogError> {
        for (index, entry) in self.entries.iter().enumerate() {
            if entry.name.is_empty() {
                return Err(CatalogError::EmptyName { index });
            }
            if entry.source.is_empty() {
                return Err(CatalogError::EmptySource {
                    name: entry.name.clone(),
                });
            }
            if entry.category == Category::Favicon {
                if !entry.widths.is_empty() {
                    return Err(CatalogError::FaviconWidths {
                        name: entry.name.clone(),
                    });
                }
                continue;
            }
            if entry.widths.is_empty() {
                return Err(CatalogError::EmptyWidths {
                    name: entry.name.clone(),
                });
            }
            if entry.widths.contains(&0) {
                return Err(CatalogError::ZeroWidth {
                    name: entry.name.clone(),
                });
            }
        }
        Ok(())
    }

    /// Entries in a given category, in catalog order.
    pub fn in_category(&self, category: Category) -> impl Iterator<Item = &DerivativeSpec> {
        self.entries.iter().filter(move |e| e.category == category)
    }
}

/// The stock catalog as documented TOML, for `knitpress gen-catalog`.
pub fn stock_catalog_toml() -> String {
    let body = toml::to_string_pretty(&Catalog::stock())
        .expect("stock catalog serializes");
    format!(
        "\
# knitpress derivative catalog
#
# Each [[entry]] maps a raw source file (relative to --source) to a
# canonical output name and the target widths to render.
#
# category: patterns | categories | featured | logo | favicon
#   patterns/categories/featured — 3:4 cover derivatives, WebP + JPEG
#   logo                         — width-only PNG, aspect preserved
#   favicon                      — fixed 16/32/180 squares; omit widths
#
{body}"
    )
}
