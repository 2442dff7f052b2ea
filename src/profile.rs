//! The profile data model.
//!
//! A [`Profile`] is the root record describing one person's professional
//! information: who they are, what they've built, where they've worked. It is
//! deserialized once per run from a JSON document and never mutated afterwards
//! — no module exposes `&mut` access past the loader.
//!
//! ## Schema Conventions
//!
//! - Every field is optional in the source document. An absent field decodes
//!   to its zero value (`""`, `[]`, empty struct) rather than failing, so a
//!   half-filled profile still builds a site.
//! - Unknown keys are ignored, matching the tolerant decoding of the JSON
//!   document format.
//! - List order is meaningful and preserved verbatim: the document author
//!   lists experience reverse-chronologically, and the renderer must emit it
//!   in exactly that order. Nothing in the pipeline sorts.
//!
//! JSON keys are camelCase (`relocationNote`, `credentialId`); multi-word
//! Rust fields carry the corresponding serde renames.

use serde::{Deserialize, Serialize};

/// Root profile record. One instance per generation run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Profile {
    pub personal: Personal,
    pub about: About,
    pub polyglot: Polyglot,
    pub skills: Skills,
    pub experience: Vec<Experience>,
    pub projects: Vec<Project>,
    pub certifications: Vec<Certification>,
    pub education: Education,
    pub languages: Vec<Language>,
    pub interests: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Personal {
    pub name: String,
    pub title: String,
    pub subtitle: String,
    pub location: String,
    #[serde(rename = "relocationNote")]
    pub relocation_note: String,
    pub contact: Contact,
}

/// Contact channels. `linkedin` and `github` hold either a bare handle or a
/// full profile URL; the `github_handle` helper normalizes for display.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Contact {
    pub email: String,
    pub linkedin: String,
    pub github: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct About {
    pub summary: String,
    pub highlights: Vec<String>,
    #[serde(rename = "currentFocus")]
    pub current_focus: String,
}

/// The programming-languages section. Distinct from the top-level
/// `languages` list, which holds spoken languages.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Polyglot {
    pub tagline: String,
    pub description: String,
    pub languages: Vec<PolyglotLanguage>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PolyglotLanguage {
    pub name: String,
    /// Free-form category name; the `category_color` helper maps the six
    /// known categories to style tokens and everything else to a default.
    pub category: String,
    pub years: i64,
}

/// Skill buckets. Bucket membership is a display grouping, not a ranking;
/// each bucket keeps the document's order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Skills {
    pub backend: Vec<String>,
    pub frontend: Vec<String>,
    pub database: Vec<String>,
    pub tools: Vec<String>,
    pub exploring: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Experience {
    pub company: String,
    pub title: String,
    pub period: String,
    pub location: String,
    /// Employment type ("Full-time", "Contract", ...). The document key is
    /// `type`, which is reserved in Rust.
    #[serde(rename = "type")]
    pub employment_type: String,
    pub achievements: Vec<String>,
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Project {
    pub name: String,
    pub tagline: String,
    pub description: String,
    /// Enum-like free string, e.g. "active" or "completed".
    pub status: String,
    pub technologies: Vec<String>,
    pub highlights: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Certification {
    pub name: String,
    pub issuer: String,
    pub date: String,
    #[serde(rename = "credentialId")]
    pub credential_id: String,
    pub skills: Vec<String>,
}

/// Single education record (not a list in the document format).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Education {
    #[serde(rename = "type")]
    pub education_type: String,
    pub field: String,
    pub period: String,
    pub description: String,
}

/// A spoken language with a free-text proficiency level.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Language {
    pub language: String,
    pub proficiency: String,
}
