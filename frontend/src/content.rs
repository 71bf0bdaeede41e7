use serde::Deserialize;
use thiserror::Error;

/// Page copy compiled into the binary.
const EMBEDDED_FOLIO: &str = include_str!("../content/folio.json");

#[derive(Debug, Error)]
pub enum ContentError {
    #[error("content document is not valid JSON: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("career entry `{role}` has no details")]
    EmptyDetails { role: String },
    #[error("pillar label `{label}` does not contain highlight letter `{highlight}`")]
    MissingHighlight { label: String, highlight: char },
}

/// Everything the page renders. Read once at startup, never mutated.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Folio {
    pub brand: Brand,
    pub hero: Hero,
    pub headings: Headings,
    pub pillars: Vec<PillarEntry>,
    pub career: Vec<CareerEntry>,
    pub impact: ImpactCallout,
    pub contact: Contact,
    pub footer: Footer,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Brand {
    pub accent: String,
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Hero {
    pub note: String,
    pub lede: String,
    pub body: String,
    pub cta: String,
    pub portrait_url: String,
    pub portrait_alt: String,
    pub badge_label: String,
    pub badge_value: String,
    pub signature: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Headings {
    pub portfolio: SectionHeading,
    pub timeline: SectionHeading,
    pub blueprint: SectionHeading,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct SectionHeading {
    pub title: String,
    #[serde(default)]
    pub subtitle: Option<String>,
    #[serde(default)]
    pub annotation: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PillarColor {
    Amber,
    Emerald,
    Blue,
}

impl PillarColor {
    pub fn text_class(self) -> &'static str {
        match self {
            PillarColor::Amber => "accent-text-amber",
            PillarColor::Emerald => "accent-text-emerald",
            PillarColor::Blue => "accent-text-blue",
        }
    }

    pub fn rule_class(self) -> &'static str {
        match self {
            PillarColor::Amber => "accent-bg-amber",
            PillarColor::Emerald => "accent-bg-emerald",
            PillarColor::Blue => "accent-bg-blue",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct PillarEntry {
    pub label: String,
    pub title: String,
    pub description: String,
    pub color: PillarColor,
    pub highlight: char,
}

impl PillarEntry {
    /// Splits the label around the first occurrence of the highlight letter.
    pub fn split_label(&self) -> Option<(&str, &str, &str)> {
        let start = self.label.find(self.highlight)?;
        let end = start + self.highlight.len_utf8();
        Some((&self.label[..start], &self.label[start..end], &self.label[end..]))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CareerColor {
    Blue,
    Emerald,
    Amber,
    Slate,
}

impl CareerColor {
    pub fn badge_class(self) -> &'static str {
        match self {
            CareerColor::Blue => "accent-bg-blue",
            CareerColor::Emerald => "accent-bg-emerald",
            CareerColor::Amber => "accent-bg-amber",
            CareerColor::Slate => "accent-bg-slate",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CareerIcon {
    Anchor,
    ShoppingCart,
    Rocket,
    Briefcase,
}

impl CareerIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            CareerIcon::Anchor => "⚓",
            CareerIcon::ShoppingCart => "🛒",
            CareerIcon::Rocket => "🚀",
            CareerIcon::Briefcase => "💼",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct CareerEntry {
    pub role: String,
    pub organization: String,
    pub date_range: String,
    pub color: CareerColor,
    pub icon: CareerIcon,
    pub details: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ImpactCallout {
    pub heading: String,
    pub pitch: String,
    pub plans: Vec<ImpactPlan>,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct ImpactPlan {
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Contact {
    pub heading: String,
    pub email: String,
}

impl Contact {
    pub fn mailto(&self) -> String {
        format!("mailto:{}", self.email)
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct Footer {
    pub name: String,
    pub tagline: String,
    #[serde(default)]
    pub notes: Vec<String>,
}

impl Folio {
    pub fn embedded() -> Result<Self, ContentError> {
        Self::from_json(EMBEDDED_FOLIO)
    }

    pub fn from_json(raw: &str) -> Result<Self, ContentError> {
        let folio: Folio = serde_json::from_str(raw)?;
        folio.validate()?;
        Ok(folio)
    }

    fn validate(&self) -> Result<(), ContentError> {
        if let Some(entry) = self.career.iter().find(|entry| entry.details.is_empty()) {
            return Err(ContentError::EmptyDetails {
                role: entry.role.clone(),
            });
        }
        if let Some(pillar) = self.pillars.iter().find(|p| p.split_label().is_none()) {
            return Err(ContentError::MissingHighlight {
                label: pillar.label.clone(),
                highlight: pillar.highlight,
            });
        }
        Ok(())
    }
}
