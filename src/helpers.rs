//! Presentation helpers exposed to the template.
//!
//! A closed registry of pure functions the template can call — string
//! joining, category-to-style-token lookup, GitHub handle extraction, and the
//! copyright year. They exist so the template stays declarative: all string
//! munging lives here, under unit tests, instead of in template expressions.
//!
//! Each helper has a plain-Rust core (tested directly) and a thin Tera
//! registration wrapper. [`register`] installs the whole set on a `Tera`
//! instance; there is no dynamic registration surface beyond it.
//!
//! The only time-dependent helper is `current_year`. The year is captured
//! once when [`register`] runs, so a render is a pure function of
//! (profile, template, year) and tests can pin the year.

use std::collections::HashMap;
use tera::{Tera, Value};

/// Style token tables for programming-language categories.
///
/// Two parallel tables keyed by the same six categories, differing only in
/// token values (dark vs light theme). Tokens are opaque utility-class
/// triples consumed by the stylesheet.
const CATEGORY_COLORS: [(&str, &str); 6] = [
    ("backend", "bg-emerald-500/20 text-emerald-400 border-emerald-500/30"),
    ("frontend", "bg-blue-500/20 text-blue-400 border-blue-500/30"),
    ("database", "bg-amber-500/20 text-amber-400 border-amber-500/30"),
    ("mobile", "bg-purple-500/20 text-purple-400 border-purple-500/30"),
    ("systems", "bg-red-500/20 text-red-400 border-red-500/30"),
    ("styling", "bg-pink-500/20 text-pink-400 border-pink-500/30"),
];

const CATEGORY_COLORS_LIGHT: [(&str, &str); 6] = [
    ("backend", "bg-emerald-100 text-emerald-700 border-emerald-300"),
    ("frontend", "bg-blue-100 text-blue-700 border-blue-300"),
    ("database", "bg-amber-100 text-amber-700 border-amber-300"),
    ("mobile", "bg-purple-100 text-purple-700 border-purple-300"),
    ("systems", "bg-red-100 text-red-700 border-red-300"),
    ("styling", "bg-pink-100 text-pink-700 border-pink-300"),
];

const CATEGORY_DEFAULT: &str = "bg-slate-500/20 text-slate-400 border-slate-500/30";
const CATEGORY_DEFAULT_LIGHT: &str = "bg-slate-100 text-slate-700 border-slate-300";

/// Dark-theme style token for a language category. Unknown categories get
/// the neutral slate token.
pub fn category_color(category: &str) -> &'static str {
    CATEGORY_COLORS
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(_, token)| *token)
        .unwrap_or(CATEGORY_DEFAULT)
}

/// Light-theme variant of [`category_color`], same category set.
pub fn category_color_light(category: &str) -> &'static str {
    CATEGORY_COLORS_LIGHT
        .iter()
        .find(|(name, _)| *name == category)
        .map(|(_, token)| *token)
        .unwrap_or(CATEGORY_DEFAULT_LIGHT)
}

/// Extract a GitHub handle from a profile URL.
///
/// Returns the last non-empty `/`-separated segment, so both
/// `https://github.com/alice` and `https://github.com/alice/` yield `alice`.
/// A bare handle with no separator is returned unchanged.
pub fn github_handle(url: &str) -> &str {
    url.rsplit('/').find(|s| !s.is_empty()).unwrap_or(url)
}

/// The calendar year right now, for the rendered footer.
pub fn current_year() -> i32 {
    use chrono::Datelike;
    chrono::Local::now().year()
}

/// Install the helper set on a `Tera` instance.
///
/// `year` is what the template's `current_year()` will return; the caller
/// decides whether that is the wall clock or a pinned test value.
pub fn register(tera: &mut Tera, year: i32) {
    tera.register_filter("join", join_filter);
    tera.register_filter("category_color", |value: &Value, _: &HashMap<String, Value>| {
        Ok(Value::from(category_color(as_str(value)?)))
    });
    tera.register_filter(
        "category_color_light",
        |value: &Value, _: &HashMap<String, Value>| {
            Ok(Value::from(category_color_light(as_str(value)?)))
        },
    );
    tera.register_filter("github_handle", |value: &Value, _: &HashMap<String, Value>| {
        Ok(Value::from(github_handle(as_str(value)?)))
    });
    tera.register_function("current_year", move |_: &HashMap<String, Value>| {
        Ok(Value::from(year))
    });
}

/// `join` filter: concatenate an array of strings with `sep` (default "").
/// An empty array yields the empty string.
fn join_filter(value: &Value, args: &HashMap<String, Value>) -> tera::Result<Value> {
    let items = value
        .as_array()
        .ok_or_else(|| tera::Error::msg("join: value is not an array"))?;
    let sep = match args.get("sep") {
        Some(sep) => sep
            .as_str()
            .ok_or_else(|| tera::Error::msg("join: sep is not a string"))?,
        None => "",
    };

    let mut parts = Vec::with_capacity(items.len());
    for item in items {
        parts.push(
            item.as_str()
                .ok_or_else(|| tera::Error::msg("join: array item is not a string"))?,
        );
    }
    Ok(Value::from(parts.join(sep)))
}

fn as_str(value: &Value) -> tera::Result<&str> {
    value
        .as_str()
        .ok_or_else(|| tera::Error::msg("helper value is not a string"))
}
