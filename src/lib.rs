//! # Folio
//!
//! A minimal static site generator for personal portfolio sites. Your profile
//! lives in one declarative JSON document; folio merges it with an HTML
//! template and mirrors your static assets alongside the result.
//!
//! # Architecture: Three-Phase Pipeline
//!
//! Every build is a single linear pass through three phases:
//!
//! ```text
//! 1. Load     portfolio.json          →  Profile       (structured data)
//! 2. Render   Profile + template      →  dist/index.html
//! 3. Copy     static/                 →  dist/         (mirrored asset tree)
//! ```
//!
//! The phases are sequenced by [`generate::Generator`], an explicit state
//! machine. Modeling the states (even for a strictly linear run) makes
//! out-of-order invocation — rendering before any data is loaded — a
//! well-defined, testable error instead of a silent render over empty data.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`profile`] | The profile schema: typed, immutable-after-load, order-preserving |
//! | [`load`] | Phase 1 — reads and decodes the JSON profile document |
//! | [`helpers`] | The fixed registry of presentation helpers exposed to the template |
//! | [`render`] | Phase 2 — binds profile + helpers into the Tera template |
//! | [`assets`] | Phase 3 — mirrors the static asset tree into the output directory |
//! | [`generate`] | Orchestrator: the phase state machine and error taxonomy |
//!
//! # Design Decisions
//!
//! ## Runtime Template, Compile-Time Everything Else
//!
//! The page template is a [Tera](https://keats.github.io/tera/) file parsed
//! at runtime rather than compiled-in markup. The template is the part a
//! site owner edits most — layout, wording, section order — and they should
//! be able to do that without a Rust toolchain. The data schema, by
//! contrast, is fixed and typed.
//!
//! ## Unconditional Escaping
//!
//! All interpolated profile data is HTML-entity-escaped by the engine, and
//! no raw/`safe` escape hatch is offered to the data. A profile document is
//! still an untrusted input to the page it produces.
//!
//! ## Closed Helper Set
//!
//! Templates get exactly five helpers ([`helpers`]): `join`,
//! `current_year`, `category_color`, `category_color_light`, and
//! `github_handle`. They are pure functions (the year is captured once per
//! run), so a render is reproducible given the same profile, template, and
//! year — which is also what makes the output byte-comparable in tests.
//!
//! ## Tolerant Decoding, Strict Everything After
//!
//! Every profile field is optional and decodes to a zero value when absent,
//! so a half-filled profile still builds. But any actual failure — unreadable
//! source, malformed JSON, missing template, bad template syntax, I/O error
//! during the asset copy — is fatal to the run. Nothing is retried, nothing
//! is rolled back, and the first error halts the remaining phases.

pub mod assets;
pub mod generate;
pub mod helpers;
pub mod load;
pub mod profile;
pub mod render;

#[cfg(test)]
pub(crate) mod test_helpers;
