//! Shared test utilities for the folio test suite.
//!
//! Provides a sample profile document (`SAMPLE_JSON`), its decoded form
//! ([`sample_profile`]), and a minimal template (`SAMPLE_TEMPLATE`) that
//! exercises field interpolation, list iteration, and the helper filters
//! without the time-dependent `current_year()` helper — so tests comparing
//! rendered bytes stay deterministic.

use crate::profile::Profile;

/// A small but representative profile document: two experience entries in
/// reverse-chronological order, skills, one project, one certification.
pub const SAMPLE_JSON: &str = r#"{
    "personal": {
        "name": "Jordan Reyes",
        "title": "Software Engineer",
        "subtitle": "Backend & infrastructure",
        "location": "Lisbon, Portugal",
        "relocationNote": "Open to relocation within the EU",
        "contact": {
            "email": "jordan@example.com",
            "linkedin": "https://linkedin.com/in/jordanreyes",
            "github": "https://github.com/jreyes"
        }
    },
    "about": {
        "summary": "Engineer with a focus on boring, reliable systems.",
        "highlights": ["8 years shipping production services", "Led a team of five"],
        "currentFocus": "Distributed storage"
    },
    "polyglot": {
        "tagline": "Polyglot by necessity",
        "description": "Languages picked up across jobs and side projects.",
        "languages": [
            {"name": "Go", "category": "backend", "years": 6},
            {"name": "TypeScript", "category": "frontend", "years": 4},
            {"name": "Rust", "category": "systems", "years": 2}
        ]
    },
    "skills": {
        "backend": ["Go", "Rust"],
        "frontend": ["TypeScript"],
        "database": ["PostgreSQL", "Redis"],
        "tools": ["Docker"],
        "exploring": ["Zig"]
    },
    "experience": [
        {
            "company": "Meridian Systems",
            "title": "Senior Engineer",
            "period": "2022 - Present",
            "location": "Remote",
            "type": "Full-time",
            "achievements": ["Cut p99 latency by 40%", "Owned the billing pipeline"],
            "technologies": ["Go", "PostgreSQL"]
        },
        {
            "company": "Harbor Labs",
            "title": "Engineer",
            "period": "2018 - 2022",
            "location": "Lisbon",
            "type": "Full-time",
            "achievements": ["Built the ingest service"],
            "technologies": ["TypeScript", "Redis"]
        }
    ],
    "projects": [
        {
            "name": "tidewatch",
            "tagline": "Tide tables for surfers",
            "description": "Scrapes and renders local tide data.",
            "status": "active",
            "technologies": ["Rust"],
            "highlights": ["Runs on a Raspberry Pi"]
        }
    ],
    "certifications": [
        {
            "name": "Certified Kubernetes Administrator",
            "issuer": "CNCF",
            "date": "2023",
            "credentialId": "CKA-2023-0042",
            "skills": ["Kubernetes"]
        }
    ],
    "education": {
        "type": "BSc",
        "field": "Computer Science",
        "period": "2014 - 2018",
        "description": "University of Lisbon"
    },
    "languages": [
        {"language": "Portuguese", "proficiency": "Native"},
        {"language": "English", "proficiency": "Fluent"}
    ],
    "interests": ["Surfing", "Analog photography"]
}"#;

/// A deterministic template: interpolation, iteration, and filters, but no
/// `current_year()` call.
pub const SAMPLE_TEMPLATE: &str = "<!DOCTYPE html>\n<html>\n<body>\n\
<h1>{{ personal.name }}</h1>\n\
<p>@{{ personal.contact.github | github_handle }}</p>\n\
<ul>\n{% for job in experience %}  <li>{{ job.company }} ({{ job.period }})</li>\n{% endfor %}</ul>\n\
<p>{{ skills.backend | join(sep=', ') }}</p>\n\
</body>\n</html>\n";

/// `SAMPLE_JSON` decoded. Panics on a decode failure, which would mean the
/// fixture and the schema drifted apart.
pub fn sample_profile() -> Profile {
    serde_json::from_str(SAMPLE_JSON).expect("sample profile fixture must decode")
}
