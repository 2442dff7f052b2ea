//! Template rendering.
//!
//! Binds a loaded [`Profile`] plus the [`helpers`](crate::helpers) registry
//! into the HTML template and produces the finished document as a string.
//! The template is a user-editable Tera file parsed fresh each run — the
//! process is single-shot, so there is nothing to cache.
//!
//! ## Escaping
//!
//! The template is registered under a `.html` name, which turns on Tera's
//! HTML auto-escaping for every interpolated value. There is deliberately no
//! raw/safe escape hatch exposed to the data: profile fields containing `<`
//! or `&` always reach the output entity-escaped.
//!
//! ## Failure Modes
//!
//! - [`RenderError::TemplateUnavailable`]: the template file can't be read.
//! - [`RenderError::TemplateInvalid`]: syntax error, or the template refers
//!   to a field or helper that doesn't exist.
//!
//! Both are fatal; this module never writes output, so a failed render leaves
//! nothing on disk.

use crate::helpers;
use crate::profile::Profile;
use std::fs;
use std::path::{Path, PathBuf};
use tera::Tera;
use thiserror::Error;

/// Registered template name. Must end in `.html` so auto-escaping applies.
const TEMPLATE_NAME: &str = "index.html";

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("failed to read template {path}: {source}")]
    TemplateUnavailable {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("invalid template {path}: {source}")]
    TemplateInvalid { path: PathBuf, source: tera::Error },
}

/// Render `profile` through the template at `template_path`.
///
/// Uses the wall-clock year for the `current_year()` helper. This is the one
/// time-dependent input; everything else makes the output a pure function of
/// profile and template.
pub fn render(profile: &Profile, template_path: &Path) -> Result<String, RenderError> {
    render_with_year(profile, template_path, helpers::current_year())
}

/// [`render`] with an explicit year, so tests can pin the clock.
pub fn render_with_year(
    profile: &Profile,
    template_path: &Path,
    year: i32,
) -> Result<String, RenderError> {
    let source =
        fs::read_to_string(template_path).map_err(|source| RenderError::TemplateUnavailable {
            path: template_path.to_path_buf(),
            source,
        })?;

    let invalid = |source: tera::Error| RenderError::TemplateInvalid {
        path: template_path.to_path_buf(),
        source,
    };

    let mut tera = Tera::default();
    helpers::register(&mut tera, year);
    tera.add_raw_template(TEMPLATE_NAME, &source)
        .map_err(invalid)?;

    // Profile serialization is infallible in practice (plain structs), but
    // tera surfaces it as a Result, so it folds into TemplateInvalid.
    let context = tera::Context::from_serialize(profile).map_err(invalid)?;
    tera.render(TEMPLATE_NAME, &context).map_err(invalid)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_helpers::sample_profile;
    use std::fs;
    use tempfile::TempDir;

    fn write_template(tmp: &TempDir, body: &str) -> PathBuf {
        let path = tmp.path().join("index.html");
        fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn renders_profile_fields() {
        let tmp = TempDir::new().unwrap();
        let path = write_template(&tmp, "<h1>{{ personal.name }}</h1>");
        let html = render_with_year(&sample_profile(), &path, 2030).unwrap();
        assert_eq!(html, "<h1>Jordan Reyes</h1>");
    }

    #[test]
    fn renders_lists_in_document_order() {
        let tmp = TempDir::new().unwrap();
        let path = write_template(
            &tmp,
            "{% for job in experience %}{{ job.company }};{% endfor %}",
        );
        let html = render_with_year(&sample_profile(), &path, 2030).unwrap();
        assert_eq!(html, "Meridian Systems;Harbor Labs;");
    }

    #[test]
    fn escapes_markup_in_data_unconditionally() {
        let tmp = TempDir::new().unwrap();
        let path = write_template(&tmp, "{{ personal.subtitle }}");
        let mut profile = sample_profile();
        profile.personal.subtitle = "<script>alert('x')</script> & more".to_string();
        let html = render_with_year(&profile, &path, 2030).unwrap();
        assert!(!html.contains("<script>"));
        assert!(html.contains("&lt;script&gt;"));
        assert!(html.contains("&amp; more"));
    }

    #[test]
    fn helpers_are_available_in_the_template() {
        let tmp = TempDir::new().unwrap();
        let path = write_template(
            &tmp,
            "{{ skills.backend | join(sep=', ') }} © {{ current_year() }} \
             @{{ personal.contact.github | github_handle }}",
        );
        let html = render_with_year(&sample_profile(), &path, 2030).unwrap();
        assert_eq!(html, "Go, Rust © 2030 @jreyes");
    }

    #[test]
    fn fixed_year_makes_output_reproducible() {
        let tmp = TempDir::new().unwrap();
        let path = write_template(&tmp, "© {{ current_year() }} {{ personal.name }}");
        let profile = sample_profile();
        let first = render_with_year(&profile, &path, 2030).unwrap();
        let second = render_with_year(&profile, &path, 2030).unwrap();
        assert_eq!(first, second);
    }

    #[test]
    fn missing_template_is_template_unavailable() {
        let tmp = TempDir::new().unwrap();
        let path = tmp.path().join("nope.html");
        let err = render_with_year(&sample_profile(), &path, 2030).unwrap_err();
        assert!(matches!(err, RenderError::TemplateUnavailable { .. }));
    }

    #[test]
    fn syntax_error_is_template_invalid() {
        let tmp = TempDir::new().unwrap();
        let path = write_template(&tmp, "{% for x in %}");
        let err = render_with_year(&sample_profile(), &path, 2030).unwrap_err();
        assert!(matches!(err, RenderError::TemplateInvalid { .. }));
    }

    #[test]
    fn unknown_helper_is_template_invalid() {
        let tmp = TempDir::new().unwrap();
        let path = write_template(&tmp, "{{ shout() }}");
        let err = render_with_year(&sample_profile(), &path, 2030).unwrap_err();
        assert!(matches!(err, RenderError::TemplateInvalid { .. }));
    }
}
