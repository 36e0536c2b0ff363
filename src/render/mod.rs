//! Justfile template rendering.
//!
//! A template document is expanded against [`RenderOptions`] using
//! minijinja with strict undefined handling, so a misspelled field is an
//! error instead of an empty string.
//!
//! # Example
//!
//! ```
//! use justify::render::{render, split_clean, RenderOptions};
//!
//! let options = RenderOptions {
//!     cmake_dirs: split_clean("build, .build"),
//!     ..Default::default()
//! };
//! let out = render("B={{ cmake_dirs[0] }}\r\n", &options).unwrap();
//! assert_eq!(out, "B=build\n");
//! ```

pub mod builtin;

use std::fs;
use std::path::Path;

use minijinja::{Environment, ErrorKind, UndefinedBehavior};
use serde::Serialize;

use crate::error::{JustifyError, Result};

/// Name reported in errors for documents rendered through [`render`].
pub const JUSTFILE_TEMPLATE_NAME: &str = "Justfile";

/// Values substituted into a Justfile template.
///
/// Every list keeps caller order; the first entry is the preferred
/// candidate. Duplicates are kept as given.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RenderOptions {
    /// CMake build directories to probe (first one is passed to `-B`).
    pub cmake_dirs: Vec<String>,
    /// Executable names looked up inside the CMake build directories.
    pub cpp_exe_candidates: Vec<String>,
    /// Root-level executables produced by a plain Makefile build.
    pub make_exe_candidates: Vec<String>,
    /// Go binary names to try.
    pub go_exe_candidates: Vec<String>,
    /// Built Node entry points to try.
    pub node_entries: Vec<String>,
    /// Print `attach:node` when only a dev server is available.
    pub attach_on_dev: bool,
    /// Fallback Cargo binary name.
    pub cargo_bin_guess: String,
}

/// Render a Justfile template document with the given options.
///
/// CRLF line endings in `document` are normalized to LF before parsing.
/// Syntax errors surface as [`JustifyError::TemplateParse`], references to
/// unknown fields as [`JustifyError::TemplateRender`].
pub fn render(document: &str, options: &RenderOptions) -> Result<String> {
    render_named(JUSTFILE_TEMPLATE_NAME, document, options)
}

/// Render any template document against a serializable context.
pub fn render_named<S: Serialize>(name: &str, document: &str, context: &S) -> Result<String> {
    render_with(&environment(), name, document, context)
}

/// Render using a caller-configured environment (extra filters, etc.).
pub fn render_with<S: Serialize>(
    env: &Environment<'_>,
    name: &str,
    document: &str,
    context: &S,
) -> Result<String> {
    let source = normalize_lf(document);

    let rendered = env.render_named_str(name, &source, context).map_err(|e| {
        let message = e.to_string();
        match e.kind() {
            ErrorKind::SyntaxError => JustifyError::TemplateParse {
                name: name.to_string(),
                message,
            },
            _ => JustifyError::TemplateRender {
                name: name.to_string(),
                message,
            },
        }
    })?;

    tracing::debug!("rendered template '{}' ({} bytes)", name, rendered.len());
    Ok(rendered)
}

/// Build the template environment shared by all renderers.
pub fn environment() -> Environment<'static> {
    let mut env = Environment::new();
    env.set_undefined_behavior(UndefinedBehavior::Strict);
    env.set_keep_trailing_newline(true);
    env
}

fn normalize_lf(s: &str) -> String {
    s.replace("\r\n", "\n")
}

/// Split a comma-separated list, trimming pieces and dropping empty ones.
///
/// This is how comma-separated flag values become [`RenderOptions`] lists.
pub fn split_clean(input: &str) -> Vec<String> {
    input
        .split(',')
        .map(str::trim)
        .filter(|piece| !piece.is_empty())
        .map(String::from)
        .collect()
}

/// Write rendered output to `dst`, refusing to replace an existing file
/// unless `force` is set.
pub fn write_rendered(dst: &Path, content: &str, force: bool) -> Result<()> {
    if dst.exists() && !force {
        return Err(JustifyError::AlreadyExists {
            path: dst.to_path_buf(),
        });
    }

    if let Some(parent) = dst.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(dst, content)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn sample_options() -> RenderOptions {
        RenderOptions {
            cmake_dirs: vec!["build".into(), ".build".into()],
            cpp_exe_candidates: vec!["app".into(), "main".into()],
            make_exe_candidates: vec!["a.out".into()],
            go_exe_candidates: vec!["foo".into(), "bar".into()],
            node_entries: vec!["dist/index.js".into(), "build/index.js".into()],
            attach_on_dev: true,
            cargo_bin_guess: "mybin".into(),
        }
    }

    const MINIMAL_TEMPLATE: &str = "
build:
\t@echo {{ cmake_dirs[0] }}
program:
\t@echo {{ cargo_bin_guess }}
# node: {% for e in node_entries %}{{ e }};{% endfor %}
# go-exes: {% for e in go_exe_candidates %}{{ e }}|{% endfor %}
attach: {{ attach_on_dev }}
";

    #[test]
    fn renders_minimal_template() {
        let out = render(MINIMAL_TEMPLATE, &sample_options()).unwrap();

        assert!(out.contains("build:"));
        assert!(out.contains("@echo build"));
        assert!(out.contains("@echo mybin"));
        assert!(out.contains("node: dist/index.js;build/index.js;"));
        assert!(out.contains("go-exes: foo|bar|"));
        assert!(out.contains("attach: true"));
    }

    #[test]
    fn renders_loop_with_whitespace_control() {
        let tmpl = "for c in {%- for c in go_exe_candidates %} \"{{ c }}\"{%- endfor %}; do";
        let options = RenderOptions {
            go_exe_candidates: vec!["bin1".into(), "bin two".into(), "bin3".into()],
            ..Default::default()
        };

        let out = render(tmpl, &options).unwrap();
        assert_eq!(out, "for c in \"bin1\" \"bin two\" \"bin3\"; do");
    }

    #[test]
    fn crlf_input_renders_without_carriage_returns() {
        let tmpl = "a: {{ cargo_bin_guess }}\r\nb: {{ attach_on_dev }}\r\n";
        let out = render(tmpl, &sample_options()).unwrap();

        assert!(!out.contains('\r'));
        assert_eq!(out, "a: mybin\nb: true\n");
    }

    #[test]
    fn trailing_newline_is_kept() {
        let out = render("x\n", &RenderOptions::default()).unwrap();
        assert_eq!(out, "x\n");
    }

    #[test]
    fn rendering_is_deterministic() {
        let options = sample_options();
        let first = render(MINIMAL_TEMPLATE, &options).unwrap();
        let second = render(MINIMAL_TEMPLATE, &options).unwrap();
        assert_eq!(first.as_bytes(), second.as_bytes());
    }

    #[test]
    fn attach_flag_renders_both_values() {
        let tmpl = "ATTACH_ON_DEV={{ attach_on_dev }}";
        let on = RenderOptions {
            attach_on_dev: true,
            ..Default::default()
        };
        let off = RenderOptions::default();

        assert_eq!(render(tmpl, &on).unwrap(), "ATTACH_ON_DEV=true");
        assert_eq!(render(tmpl, &off).unwrap(), "ATTACH_ON_DEV=false");
    }

    #[test]
    fn malformed_syntax_is_parse_error() {
        let err = render("{% for x in cmake_dirs %}", &sample_options()).unwrap_err();
        assert!(matches!(err, JustifyError::TemplateParse { .. }));
    }

    #[test]
    fn unknown_field_is_render_error() {
        let err = render("{{ not_a_field }}", &sample_options()).unwrap_err();
        match err {
            JustifyError::TemplateRender { name, .. } => assert_eq!(name, "Justfile"),
            other => panic!("expected TemplateRender, got {:?}", other),
        }
    }

    #[test]
    fn split_clean_trims_and_drops_empties() {
        assert_eq!(split_clean("  a, b ,, c  , "), vec!["a", "b", "c"]);
    }

    #[test]
    fn split_clean_keeps_order_and_duplicates() {
        assert_eq!(split_clean("main,app,main"), vec!["main", "app", "main"]);
    }

    #[test]
    fn split_clean_of_blank_is_empty() {
        assert!(split_clean("").is_empty());
        assert!(split_clean(" , ,").is_empty());
    }

    #[test]
    fn write_rendered_refuses_existing_file() {
        let temp = TempDir::new().unwrap();
        let dst = temp.path().join("Justfile");
        fs::write(&dst, "original").unwrap();

        let err = write_rendered(&dst, "new", false).unwrap_err();
        assert!(matches!(err, JustifyError::AlreadyExists { .. }));
        assert_eq!(fs::read_to_string(&dst).unwrap(), "original");

        write_rendered(&dst, "new", true).unwrap();
        assert_eq!(fs::read_to_string(&dst).unwrap(), "new");
    }

    #[test]
    fn write_rendered_creates_parent_dirs() {
        let temp = TempDir::new().unwrap();
        let dst = temp.path().join(".vscode").join("Justfile");

        write_rendered(&dst, "x", false).unwrap();
        assert!(dst.exists());
    }
}
