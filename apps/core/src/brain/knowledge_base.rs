//! Knowledge Base - static catalogs driving design intent classification.
//!
//! Every catalog is an ordered list. Detection walks entries in declaration
//! order, so the first entry wins whenever several keys match the same prompt.

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::sync::LazyLock;
use tracing::info;

use crate::error::AppError;

/// Page type used when nothing matched, and whose entry backs unknown page types
pub const DEFAULT_PAGE_TYPE: &str = "landing";

/// A page archetype (landing, dashboard, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PageTypeEntry {
    pub name: String,
    pub components: Vec<String>,
    /// Layout options, the first one is the preferred layout
    pub layouts: Vec<String>,
    /// Base complexity contributed by this page type
    pub complexity: f32,
    pub keywords: Vec<String>,
}

/// A visual style (glassmorphism, minimalist, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StyleEntry {
    pub name: String,
    pub characteristics: Vec<String>,
    /// Complexity weight, scaled by 0.1 when added to the complexity score
    pub complexity: f32,
    /// Page types and domains this style fits well
    #[serde(default)]
    pub suitability: Vec<String>,
    pub keywords: Vec<String>,
}

/// A business domain (technology, finance, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainEntry {
    pub name: String,
    pub characteristics: Vec<String>,
    pub keywords: Vec<String>,
    /// Default audience for this domain
    pub audience: String,
}

/// A named key triggered by any of its keywords
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeywordEntry {
    pub name: String,
    pub keywords: Vec<String>,
}

/// Brand personality traits implied by a style
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraitEntry {
    pub name: String,
    pub traits: Vec<String>,
}

/// A family of reusable UI elements (forms, navigation, ...)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UiElementGroup {
    pub name: String,
    pub components: Vec<String>,
    pub keywords: Vec<String>,
}

/// Immutable set of catalogs owned by an analyzer.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KnowledgeBase {
    pub page_types: Vec<PageTypeEntry>,
    pub styles: Vec<StyleEntry>,
    pub domains: Vec<DomainEntry>,
    pub functional: Vec<KeywordEntry>,
    pub technical: Vec<KeywordEntry>,
    /// Fallback audience scan, used only when no domain matched
    pub audiences: Vec<KeywordEntry>,
    pub style_personalities: Vec<TraitEntry>,
    /// Verbs signalling an explicit creation request
    pub intent_verbs: Vec<String>,
    #[serde(default)]
    pub ui_element_groups: Vec<UiElementGroup>,
}

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

fn page_type(
    name: &str,
    components: &[&str],
    layouts: &[&str],
    complexity: f32,
    keywords: &[&str],
) -> PageTypeEntry {
    PageTypeEntry {
        name: name.to_string(),
        components: strings(components),
        layouts: strings(layouts),
        complexity,
        keywords: strings(keywords),
    }
}

fn style(
    name: &str,
    characteristics: &[&str],
    complexity: f32,
    suitability: &[&str],
    keywords: &[&str],
) -> StyleEntry {
    StyleEntry {
        name: name.to_string(),
        characteristics: strings(characteristics),
        complexity,
        suitability: strings(suitability),
        keywords: strings(keywords),
    }
}

fn domain(name: &str, characteristics: &[&str], keywords: &[&str], audience: &str) -> DomainEntry {
    DomainEntry {
        name: name.to_string(),
        characteristics: strings(characteristics),
        keywords: strings(keywords),
        audience: audience.to_string(),
    }
}

fn keyed(name: &str, keywords: &[&str]) -> KeywordEntry {
    KeywordEntry {
        name: name.to_string(),
        keywords: strings(keywords),
    }
}

fn traits(name: &str, traits: &[&str]) -> TraitEntry {
    TraitEntry {
        name: name.to_string(),
        traits: strings(traits),
    }
}

fn ui_group(name: &str, components: &[&str], keywords: &[&str]) -> UiElementGroup {
    UiElementGroup {
        name: name.to_string(),
        components: strings(components),
        keywords: strings(keywords),
    }
}

// Built once, cloned into each analyzer that asks for the defaults
static BUILTIN: LazyLock<KnowledgeBase> = LazyLock::new(|| KnowledgeBase {
    page_types: vec![
        page_type(
            "authentication",
            &["login_form", "social_auth", "password_reset", "two_factor"],
            &["centered", "split_screen", "modal"],
            0.6,
            &["login", "signin", "auth", "authentication", "sign in"],
        ),
        page_type(
            "dashboard",
            &["sidebar", "header", "stats_cards", "charts", "tables", "notifications"],
            &["sidebar_left", "sidebar_right", "top_nav"],
            0.9,
            &["dashboard", "admin", "panel", "analytics", "stats", "control"],
        ),
        page_type(
            "landing",
            &["hero", "features", "testimonials", "pricing", "cta", "footer"],
            &["single_column", "multi_section", "parallax"],
            0.7,
            &["landing", "home", "hero", "marketing", "saas", "product"],
        ),
        page_type(
            "ecommerce",
            &["product_grid", "filters", "cart", "checkout", "reviews"],
            &["grid_sidebar", "masonry", "list_view"],
            0.8,
            &["shop", "store", "ecommerce", "product", "buy", "sell", "cart"],
        ),
        page_type(
            "blog",
            &["article_list", "sidebar", "search", "categories", "pagination"],
            &["two_column", "masonry", "list_view"],
            0.5,
            &["blog", "article", "post", "news", "content", "writing"],
        ),
        page_type(
            "portfolio",
            &["project_grid", "hero", "about", "contact", "gallery"],
            &["masonry", "grid", "showcase"],
            0.6,
            &["portfolio", "showcase", "gallery", "work", "projects", "creative"],
        ),
        page_type(
            "contact",
            &["contact_form", "map", "info_cards", "social_links"],
            &["split", "centered", "form_info"],
            0.4,
            &["contact", "form", "get in touch", "reach out", "inquiry"],
        ),
    ],
    styles: vec![
        style(
            "glassmorphism",
            &["transparency", "blur", "gradient", "modern"],
            0.7,
            &["landing", "portfolio", "creative"],
            &["glass", "glassmorphism", "transparent", "blur", "frosted"],
        ),
        style(
            "minimalist",
            &["clean", "whitespace", "typography", "simple"],
            0.4,
            &["dashboard", "blog", "corporate"],
            &["minimal", "minimalist", "clean", "simple", "white"],
        ),
        style(
            "brutalist",
            &["bold", "geometric", "contrast", "experimental"],
            0.8,
            &["portfolio", "creative", "artistic"],
            &["brutal", "brutalist", "bold", "geometric", "raw"],
        ),
        style(
            "modern",
            &["contemporary", "sleek", "professional", "polished"],
            0.6,
            &["landing", "corporate", "saas"],
            &["modern", "contemporary", "sleek", "professional", "polished"],
        ),
        style(
            "dark",
            &["dark_theme", "contrast", "dramatic", "sophisticated"],
            0.5,
            &["dashboard", "gaming", "tech"],
            &["dark", "night", "black", "shadow", "dramatic"],
        ),
        style(
            "colorful",
            &["vibrant", "energetic", "playful", "bold"],
            0.6,
            &["creative", "children", "entertainment"],
            &["colorful", "vibrant", "bright", "energetic", "playful"],
        ),
    ],
    domains: vec![
        domain(
            "technology",
            &["innovative", "cutting_edge", "efficient", "scalable"],
            &["saas", "software", "tech", "ai", "machine learning", "cloud"],
            "developers",
        ),
        domain(
            "finance",
            &["trustworthy", "professional", "secure", "reliable"],
            &["finance", "bank", "fintech", "investment", "trading", "crypto"],
            "professionals",
        ),
        domain(
            "healthcare",
            &["caring", "professional", "accessible", "trustworthy"],
            &["health", "medical", "healthcare", "doctor", "patient", "wellness"],
            "patients",
        ),
        domain(
            "education",
            &["inspiring", "accessible", "engaging", "supportive"],
            &["education", "learning", "course", "school", "university", "training"],
            "students",
        ),
        domain(
            "retail",
            &["appealing", "trustworthy", "convenient", "trendy"],
            &["retail", "fashion", "commerce", "shopping", "store", "brand"],
            "consumers",
        ),
        domain(
            "entertainment",
            &["exciting", "engaging", "fun", "immersive"],
            &["entertainment", "gaming", "media", "streaming", "content", "fun"],
            "general",
        ),
    ],
    functional: vec![
        keyed("responsive", &["responsive", "mobile", "tablet", "device"]),
        keyed("accessible", &["accessible", "accessibility", "a11y", "wcag"]),
        keyed("performance", &["fast", "performance", "speed", "optimize"]),
        keyed("secure", &["secure", "security", "safe", "ssl"]),
        keyed("seo", &["seo", "search", "google", "optimization"]),
        keyed("animations", &["animation", "motion", "transition", "interactive"]),
    ],
    technical: vec![
        keyed("react_nextjs", &["react", "nextjs", "next.js", "jsx"]),
        keyed("typescript", &["typescript", "ts", "type"]),
        keyed("tailwind", &["tailwind", "css", "styling"]),
        keyed("api_integration", &["api", "backend", "server", "database"]),
        keyed("authentication", &["auth", "login", "user", "session"]),
    ],
    audiences: vec![
        keyed("professionals", &["business", "corporate", "professional", "enterprise"]),
        keyed("developers", &["developer", "tech", "programmer", "code"]),
        keyed("students", &["student", "learn", "education", "course"]),
        keyed("consumers", &["customer", "user", "buyer", "consumer"]),
        keyed("creatives", &["artist", "designer", "creative", "portfolio"]),
    ],
    style_personalities: vec![
        traits("minimalist", &["sophisticated", "clean", "professional"]),
        traits("brutalist", &["bold", "experimental", "edgy"]),
        traits("glassmorphism", &["modern", "innovative", "elegant"]),
        traits("dark", &["sophisticated", "dramatic", "premium"]),
        traits("colorful", &["energetic", "playful", "vibrant"]),
    ],
    intent_verbs: strings(&["create", "build", "design", "make", "generate"]),
    ui_element_groups: vec![
        ui_group(
            "forms",
            &["input", "textarea", "select", "checkbox", "radio", "button"],
            &["form", "input", "field", "submit", "validation"],
        ),
        ui_group(
            "navigation",
            &["navbar", "menu", "breadcrumbs", "pagination", "tabs"],
            &["nav", "navigation", "menu", "header", "breadcrumb"],
        ),
        ui_group(
            "data_display",
            &["table", "list", "card", "grid", "carousel"],
            &["table", "list", "data", "display", "grid", "carousel"],
        ),
        ui_group(
            "feedback",
            &["alert", "toast", "modal", "tooltip", "progress"],
            &["alert", "notification", "modal", "popup", "progress"],
        ),
        ui_group(
            "media",
            &["image", "video", "gallery", "slider", "lightbox"],
            &["image", "photo", "video", "gallery", "media"],
        ),
    ],
});

impl Default for KnowledgeBase {
    fn default() -> Self {
        Self::builtin()
    }
}

impl KnowledgeBase {
    /// The catalogs shipped with the crate
    pub fn builtin() -> Self {
        BUILTIN.clone()
    }

    /// Parse a knowledge base from JSON. Does not validate.
    pub fn from_json_str(json: &str) -> Result<Self, AppError> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a knowledge base from a JSON file. Does not validate.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path)?;
        let kb = Self::from_json_str(&raw)?;
        info!(
            path = %path.display(),
            page_types = kb.page_types.len(),
            styles = kb.styles.len(),
            domains = kb.domains.len(),
            "Loaded knowledge base"
        );
        Ok(kb)
    }

    /// Serialize to pretty JSON, the same shape `from_json_str` reads
    pub fn to_json(&self) -> Result<String, AppError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    pub fn page_type(&self, name: &str) -> Option<&PageTypeEntry> {
        self.page_types.iter().find(|p| p.name == name)
    }

    pub fn style(&self, name: &str) -> Option<&StyleEntry> {
        self.styles.iter().find(|s| s.name == name)
    }

    pub fn domain(&self, name: &str) -> Option<&DomainEntry> {
        self.domains.iter().find(|d| d.name == name)
    }

    pub fn ui_element_group(&self, name: &str) -> Option<&UiElementGroup> {
        self.ui_element_groups.iter().find(|g| g.name == name)
    }

    /// Personality traits implied by a style, empty for styles without any
    pub fn style_traits(&self, name: &str) -> &[String] {
        self.style_personalities
            .iter()
            .find(|t| t.name == name)
            .map(|t| t.traits.as_slice())
            .unwrap_or(&[])
    }

    /// Check the structural invariants analysis relies on.
    ///
    /// Keywords are matched against a lowercased prompt, so an uppercase
    /// keyword could never match and an empty one would match everything.
    pub fn validate(&self) -> Result<(), AppError> {
        if self.page_types.is_empty() {
            return Err(AppError::Config("page type catalog is empty".to_string()));
        }
        if self.styles.is_empty() {
            return Err(AppError::Config("style catalog is empty".to_string()));
        }
        if self.page_type(DEFAULT_PAGE_TYPE).is_none() {
            return Err(AppError::Config(format!(
                "page type catalog has no '{}' entry",
                DEFAULT_PAGE_TYPE
            )));
        }

        for entry in &self.page_types {
            if entry.components.is_empty() {
                return Err(AppError::Config(format!(
                    "page type '{}' has no components",
                    entry.name
                )));
            }
            if entry.layouts.is_empty() {
                return Err(AppError::Config(format!(
                    "page type '{}' has no layouts",
                    entry.name
                )));
            }
            if !entry.complexity.is_finite() {
                return Err(AppError::Config(format!(
                    "page type '{}' has a non-finite complexity",
                    entry.name
                )));
            }
        }

        let keyword_sets = self
            .page_types
            .iter()
            .map(|e| (e.name.as_str(), e.keywords.as_slice()))
            .chain(self.styles.iter().map(|e| (e.name.as_str(), e.keywords.as_slice())))
            .chain(self.domains.iter().map(|e| (e.name.as_str(), e.keywords.as_slice())))
            .chain(
                self.functional
                    .iter()
                    .chain(&self.technical)
                    .chain(&self.audiences)
                    .map(|e| (e.name.as_str(), e.keywords.as_slice())),
            )
            .chain(
                self.ui_element_groups
                    .iter()
                    .map(|e| (e.name.as_str(), e.keywords.as_slice())),
            );

        for (name, keywords) in keyword_sets {
            if keywords.is_empty() {
                return Err(AppError::Config(format!("'{}' has no keywords", name)));
            }
            if let Some(bad) = keywords
                .iter()
                .find(|k| k.is_empty() || k.to_lowercase() != **k)
            {
                return Err(AppError::Config(format!(
                    "'{}' has an empty or non-lowercase keyword: {:?}",
                    name, bad
                )));
            }
        }

        Ok(())
    }
}
