//! Neovim (nvim-dap) configuration generation.

use std::env;
use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::error::{JustifyError, Result};
use crate::render::{builtin::embedded_file, environment, render_with, write_rendered};
use crate::targets::{justify_dir, RequestMode, Target, TargetKind};

const DAP_TEMPLATE: &str = "editors/dap.lua.j2";
const CLIENT_MODULE: &str = "editors/justify_client.lua";

/// nvim-dap adapter name for a target kind.
pub fn adapter(kind: TargetKind) -> &'static str {
    match kind {
        TargetKind::Rust | TargetKind::Cpp => "codelldb",
        TargetKind::Go => "delve",
        TargetKind::Node => "pwa-node",
    }
}

/// One entry of the generated `dap.lua` list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DapConfiguration {
    pub name: String,
    pub adapter: &'static str,
    pub request: &'static str,
    pub program: Option<String>,
    /// `program` is joined onto the working directory at load time.
    pub relative_program: bool,
    pub cwd: Option<String>,
    pub args: Option<Vec<String>>,
    /// Sorted key/value pairs.
    pub env: Option<Vec<(String, String)>>,
    pub port: Option<u16>,
}

impl From<&Target> for DapConfiguration {
    fn from(target: &Target) -> Self {
        let attach = target.attaches_to_dev_server();
        let program = (!attach).then(|| target.program.clone());
        let request = if attach {
            RequestMode::Attach
        } else {
            target.request_mode()
        };

        Self {
            name: target.name.clone(),
            adapter: adapter(target.kind),
            request: request.as_str(),
            relative_program: program
                .as_deref()
                .is_some_and(|p| !Path::new(p).is_absolute()),
            program,
            cwd: target.cwd.clone(),
            args: target.args.clone(),
            env: target
                .env
                .as_ref()
                .map(|env| env.iter().map(|(k, v)| (k.clone(), v.clone())).collect()),
            port: target.port,
        }
    }
}

#[derive(Serialize)]
struct DapContext {
    configurations: Vec<DapConfiguration>,
}

/// Quote `value` as a Lua string literal.
pub fn lua_str(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 2);
    out.push('"');
    for c in value.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if (c as u32) < 0x20 || c == '\u{7f}' => {
                out.push_str(&format!("\\{:03}", c as u32));
            }
            c => out.push(c),
        }
    }
    out.push('"');
    out
}

/// Render the `dap.lua` module for `targets`.
pub fn render_dap(targets: &[Target]) -> Result<String> {
    let mut env = environment();
    env.add_filter("lua_str", |value: String| lua_str(&value));

    let context = DapContext {
        configurations: targets.iter().map(DapConfiguration::from).collect(),
    };
    render_with(&env, DAP_TEMPLATE, embedded_file(DAP_TEMPLATE)?, &context)
}

/// Path of the project-local nvim-dap module.
pub fn dap_path(root: &Path) -> PathBuf {
    justify_dir(root).join("dap.lua")
}

/// Write `.justify/dap.lua`, refusing to overwrite unless `force`.
pub fn generate(root: &Path, targets: &[Target], force: bool) -> Result<PathBuf> {
    let path = dap_path(root);
    write_rendered(&path, &render_dap(targets)?, force)?;
    tracing::debug!("wrote {}", path.display());
    Ok(path)
}

/// Source of the global Neovim client module.
pub fn client_source() -> Result<&'static str> {
    embedded_file(CLIENT_MODULE)
}

/// Default install location of the client module:
/// `$XDG_CONFIG_HOME/nvim/lua/justify_client.lua`, falling back to
/// `~/.config`.
pub fn default_client_path() -> Option<PathBuf> {
    let base = env::var_os("XDG_CONFIG_HOME")
        .filter(|v| !v.is_empty())
        .map(PathBuf::from)
        .or_else(|| dirs::home_dir().map(|h| h.join(".config")))?;
    Some(base.join("nvim").join("lua").join("justify_client.lua"))
}

/// Write the client module to `dest`, refusing to overwrite unless `force`.
pub fn write_client(dest: &Path, force: bool) -> Result<()> {
    if dest.as_os_str() == "-" {
        return Err(JustifyError::InvalidArgument {
            message: "'-' is stdout; print client_source() instead".to_string(),
        });
    }
    write_rendered(dest, client_source()?, force)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::targets::ATTACH_NODE_PROGRAM;
    use std::collections::BTreeMap;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn lua_str_escapes() {
        assert_eq!(lua_str("plain"), "\"plain\"");
        assert_eq!(lua_str(r#"a"b\c"#), r#""a\"b\\c""#);
        assert_eq!(lua_str("x\ny"), "\"x\\ny\"");
        assert_eq!(lua_str("\u{1}"), "\"\\001\"");
        assert_eq!(lua_str("<&>'"), "\"<&>'\"");
    }

    #[test]
    fn renders_launch_entry() {
        let out = render_dap(&[Target::new("rust-app", TargetKind::Rust, "target/debug/app")])
            .unwrap();

        insta::assert_snapshot!(out, @r###"
        -- nvim-dap configurations generated by justify.
        -- Refresh with: justify editor --editor neovim --force
        local root = vim.fn.getcwd()

        return {
          {
            name = "rust-app",
            type = "codelldb",
            request = "launch",
            program = root .. "/" .. "target/debug/app",
            cwd = root,
          },
        }
        "###);
    }

    #[test]
    fn renders_optional_fields() {
        let mut env = BTreeMap::new();
        env.insert("B".to_string(), "2".to_string());
        env.insert("A".to_string(), "say \"hi\"".to_string());
        let target = Target::new("api", TargetKind::Go, "/usr/local/bin/api")
            .with_cwd("srv")
            .with_args(vec!["-p".into(), "80".into()])
            .with_env(env)
            .with_port(2345);

        let out = render_dap(&[target]).unwrap();

        assert!(out.contains("    program = \"/usr/local/bin/api\",\n"));
        assert!(out.contains("    cwd = \"srv\",\n"));
        assert!(out.contains("    args = {\"-p\", \"80\"},\n"));
        assert!(out.contains("      [\"A\"] = \"say \\\"hi\\\"\",\n      [\"B\"] = \"2\",\n"));
        assert!(out.contains("    port = 2345,\n"));
    }

    #[test]
    fn attach_sentinel_renders_attach_without_program() {
        let out = render_dap(&[Target::new("dev", TargetKind::Node, ATTACH_NODE_PROGRAM)])
            .unwrap();

        assert!(out.contains("request = \"attach\""));
        assert!(out.contains("type = \"pwa-node\""));
        assert!(!out.contains("program ="));
    }

    #[test]
    fn empty_target_list_is_empty_table() {
        let out = render_dap(&[]).unwrap();
        assert!(out.ends_with("return {\n}\n"));
    }

    #[test]
    fn generate_refuses_overwrite() {
        let temp = TempDir::new().unwrap();
        let targets = [Target::new("a", TargetKind::Cpp, "build/app")];

        let path = generate(temp.path(), &targets, false).unwrap();
        assert!(path.ends_with(".justify/dap.lua"));

        let err = generate(temp.path(), &targets, false).unwrap_err();
        assert!(matches!(err, JustifyError::AlreadyExists { .. }));
        generate(temp.path(), &targets, true).unwrap();
    }

    #[test]
    fn write_client_installs_module() {
        let temp = TempDir::new().unwrap();
        let dest = temp.path().join("nvim/lua/justify_client.lua");

        write_client(&dest, false).unwrap();

        let content = fs::read_to_string(&dest).unwrap();
        assert!(content.contains("function M.setup"));
        assert!(write_client(&dest, false).is_err());
    }
}
