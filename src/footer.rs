//! Shared footer generation and injection.
//!
//! Every page of the site carries the same footer: a sitemap of the main
//! sections, social links, and a copyright line. Pages live at two depths
//! (the site root and the `whats-new/` subdirectory), so sitemap targets are
//! rewritten relative to each page's location before injection.
//!
//! Markup is built with [maud](https://maud.lambda.xyz/) — type-safe,
//! auto-escaped, no runtime template files.
//!
//! ## Degradation contract
//!
//! A page is never left without a footer. If the full footer cannot be
//! built from the configuration, injection logs the error and substitutes a
//! minimal fallback containing only the copyright line.
//!
//! ## Configuration
//!
//! The link map is an explicit [`FooterConfig`] passed into the injection
//! routines, not module-level state, so alternate site layouts (and tests)
//! can supply their own.

use maud::{Markup, html};
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum FooterError {
    #[error("Invalid footer config: {0}")]
    InvalidConfig(String),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// One sitemap entry: a stable key, display label, and site-root-relative
/// target.
#[derive(Debug, Clone)]
pub struct NavLink {
    pub key: String,
    pub label: String,
    pub target: String,
}

#[derive(Debug, Clone)]
pub struct SocialLink {
    pub label: String,
    pub url: String,
}

/// Footer configuration for one site layout.
#[derive(Debug, Clone)]
pub struct FooterConfig {
    pub site_name: String,
    pub copyright: String,
    /// Pages inside this subdirectory get `../`-prefixed sitemap targets.
    pub subdir_marker: String,
    pub nav: Vec<NavLink>,
    pub social: Vec<SocialLink>,
}

impl Default for FooterConfig {
    /// The stock layout of the current site.
    fn default() -> Self {
        fn nav(key: &str, label: &str, target: &str) -> NavLink {
            NavLink {
                key: key.to_string(),
                label: label.to_string(),
                target: target.to_string(),
            }
        }

        Self {
            site_name: "Willow & Wool".to_string(),
            copyright: "© 2026 Willow & Wool. Patterns are for personal use.".to_string(),
            subdir_marker: "whats-new".to_string(),
            nav: vec![
                nav("home", "Home", "index.html"),
                nav("sweaters", "Sweaters", "sweaters.html"),
                nav("summer", "Summer", "summer.html"),
                nav("accessories", "Accessories", "accessories.html"),
                nav("about", "About", "about.html"),
                nav("test-knitting", "Test Knitting", "test-knitting.html"),
            ],
            social: vec![
                SocialLink {
                    label: "Ravelry".to_string(),
                    url: "https://www.ravelry.com/designers/willow-and-wool".to_string(),
                },
                SocialLink {
                    label: "Instagram".to_string(),
                    url: "https://www.instagram.com/willowandwoolknits".to_string(),
                },
            ],
        }
    }
}

/// Placeholder element replaced by the generated footer when present.
pub const PLACEHOLDER: &str = r#"<div class="footer-placeholder"></div>"#;

/// Resolve a site-root-relative target for a page at `page_path`.
///
/// Pages under the marker subdirectory are one level deep, so their targets
/// get a `../` prefix; everything else uses the target as-is.
pub fn resolve_link(target: &str, page_path: &str, marker: &str) -> String {
    let in_subdir = Path::new(page_path)
        .components()
        .any(|c| c.as_os_str() == marker);
    if in_subdir {
        format!("../{target}")
    } else {
        target.to_string()
    }
}

fn validate(config: &FooterConfig) -> Result<(), FooterError> {
    if config.nav.is_empty() {
        return Err(FooterError::InvalidConfig("empty sitemap".to_string()));
    }
    for link in &config.nav {
        if link.target.is_empty() || link.label.is_empty() {
            return Err(FooterError::InvalidConfig(format!(
                "sitemap entry '{}' has an empty label or target",
                link.key
            )));
        }
    }
    Ok(())
}

/// Build the full footer for a page at `page_path`.
pub fn full_footer(config: &FooterConfig, page_path: &str) -> Result<Markup, FooterError> {
    validate(config)?;
    Ok(html! {
        footer class="site-footer" {
            nav class="footer-sitemap" aria-label="Sitemap" {
                @for link in &config.nav {
                    a href=(resolve_link(&link.target, page_path, &config.subdir_marker)) {
                        (link.label)
                    }
                }
            }
            @if !config.social.is_empty() {
                div class="footer-social" {
                    @for social in &config.social {
                        a href=(social.url) rel="me" { (social.label) }
                    }
                }
            }
            p class="footer-copyright" { (config.copyright) }
        }
    })
}

/// Minimal degraded footer: copyright line only.
pub fn fallback_footer(config: &FooterConfig) -> Markup {
    html! {
        footer class="site-footer" {
            p class="footer-copyright" { (config.copyright) }
        }
    }
}

/// Inject the footer into an HTML document.
///
/// The placeholder element is replaced when present; otherwise the footer is
/// inserted before `</body>`, or appended if the document has no body close
/// tag. Falls back to the minimal footer (with a diagnostic on stderr) if
/// the full footer cannot be built.
pub fn inject(document: &str, page_path: &str, config: &FooterConfig) -> String {
    let footer = match full_footer(config, page_path) {
        Ok(markup) => markup,
        Err(e) => {
            eprintln!("footer: {e}; using fallback for {page_path}");
            fallback_footer(config)
        }
    }
    .into_string();

    if document.contains(PLACEHOLDER) {
        document.replacen(PLACEHOLDER, &footer, 1)
    } else if let Some(pos) = document.find("</body>") {
        let mut out = String::with_capacity(document.len() + footer.len());
        out.push_str(&document[..pos]);
        out.push_str(&footer);
        out.push_str(&document[pos..]);
        out
    } else {
        let mut out = document.to_string();
        out.push_str(&footer);
        out
    }
}

/// Inject the footer into every `.html` file under `root`.
///
/// Page paths are taken relative to `root`, so subdirectory link rewriting
/// matches the deployed layout. Returns the number of pages rewritten.
pub fn inject_dir(root: &Path, config: &FooterConfig) -> Result<usize, FooterError> {
    let mut count = 0;
    for entry in walkdir::WalkDir::new(root)
        .sort_by_file_name()
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file())
    {
        let is_html = entry
            .path()
            .extension()
            .and_then(|e| e.to_str())
            .is_some_and(|e| e.eq_ignore_ascii_case("html"));
        if !is_html {
            continue;
        }

        let page_path = entry
            .path()
            .strip_prefix(root)
            .unwrap_or(entry.path())
            .to_string_lossy()
            .to_string();
        let document = std::fs::read_to_string(entry.path())?;
        std::fs::write(entry.path(), inject(&document, &page_path, config))?;
        count += 1;
    }
    Ok(count)
}
