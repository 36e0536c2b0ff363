//! Built-in templates embedded at compile time.

use include_dir::{include_dir, Dir};

use crate::detection::ProjectType;
use crate::error::{JustifyError, Result};

/// Embedded templates directory.
static TEMPLATES_DIR: Dir<'_> = include_dir!("$CARGO_MANIFEST_DIR/templates");

/// Relative path of the Justfile template for a project type.
pub fn justfile_template_path(project_type: ProjectType) -> String {
    format!("justfile/{}.just", project_type.as_str())
}

/// Get the built-in Justfile template for a project type.
pub fn justfile_template(project_type: ProjectType) -> Result<&'static str> {
    embedded_file(&justfile_template_path(project_type))
}

/// Get any embedded file as UTF-8 text.
pub fn embedded_file(path: &str) -> Result<&'static str> {
    let file = TEMPLATES_DIR
        .get_file(path)
        .ok_or_else(|| JustifyError::NotFound {
            path: format!("templates/{}", path).into(),
        })?;

    file.contents_utf8()
        .ok_or_else(|| JustifyError::TemplateParse {
            name: path.to_string(),
            message: "Invalid UTF-8".to_string(),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::{render, split_clean, RenderOptions};

    fn default_options() -> RenderOptions {
        RenderOptions {
            cmake_dirs: split_clean("build,.build,cmake-build-debug"),
            cpp_exe_candidates: split_clean("app,main,Debug/app,Debug/main"),
            make_exe_candidates: split_clean("app,main,a.out"),
            go_exe_candidates: split_clean("app,main"),
            node_entries: split_clean("dist/index.js,dist/server/index.js,build/index.js"),
            attach_on_dev: true,
            cargo_bin_guess: "app".to_string(),
        }
    }

    fn render_builtin(project_type: ProjectType) -> String {
        let tmpl = justfile_template(project_type).unwrap();
        render(tmpl, &default_options()).unwrap()
    }

    #[test]
    fn every_project_type_has_a_template() {
        for t in ProjectType::ALL {
            assert!(justfile_template(t).is_ok(), "missing template for {}", t);
        }
    }

    #[test]
    fn rust_template_uses_cargo() {
        let out = render_builtin(ProjectType::Rust);
        assert!(out.contains("cargo build"));
        assert!(out.contains("cargo run"));
        assert!(out.contains("cargo test"));
        assert!(out.contains("target/debug/app"));
    }

    #[test]
    fn go_template_uses_go_tool() {
        let out = render_builtin(ProjectType::Go);
        assert!(out.contains("go build ./..."));
        assert!(out.contains("go run ."));
        assert!(out.contains("go test ./..."));
        assert!(out.contains(r#"for c in "app" "main"; do"#));
    }

    #[test]
    fn cpp_template_uses_first_cmake_dir() {
        let out = render_builtin(ProjectType::Cpp);
        assert!(out.contains("cmake -S . -B build"));
        assert!(out.contains("cmake --build build"));
        assert!(out.contains("make"));
        assert!(out.starts_with("# Justfile for a CMake"));
    }

    #[test]
    fn cpp_template_falls_back_when_no_cmake_dirs() {
        let tmpl = justfile_template(ProjectType::Cpp).unwrap();
        let options = RenderOptions {
            cmake_dirs: Vec::new(),
            ..default_options()
        };
        let out = render(tmpl, &options).unwrap();
        assert!(out.contains("cmake -S . -B build"));
    }

    #[test]
    fn node_template_uses_npm() {
        let out = render_builtin(ProjectType::Node);
        assert!(out.contains("npm run build"));
        assert!(out.contains("npm start"));
        assert!(out.contains("npm run dev"));
        assert!(out.contains("node ."));
        assert!(out.contains("attach:node"));
    }

    #[test]
    fn node_template_omits_attach_when_disabled() {
        let tmpl = justfile_template(ProjectType::Node).unwrap();
        let options = RenderOptions {
            attach_on_dev: false,
            ..default_options()
        };
        let out = render(tmpl, &options).unwrap();
        assert!(!out.contains("attach:node"));
        assert!(out.contains("    done\n    echo \"index.js\""));
    }

    #[test]
    fn missing_embedded_file_is_not_found() {
        let err = embedded_file("justfile/cobol.just").unwrap_err();
        assert!(err.is_not_found());
    }
}
