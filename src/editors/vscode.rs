//! VS Code `tasks.json` / `launch.json` generation.

use std::path::{Path, PathBuf};

use serde_json::{json, Map, Value};

use super::ensure_absent;
use crate::error::{JustifyError, Result};
use crate::render::write_rendered;
use crate::targets::{RequestMode, Target, TargetKind};

/// Port the Node inspector listens on unless told otherwise.
pub const NODE_INSPECT_PORT: u16 = 9229;

/// Paths written by [`generate`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VsCodeFiles {
    pub tasks: PathBuf,
    pub launch: PathBuf,
}

impl VsCodeFiles {
    pub fn for_root(root: &Path) -> Self {
        let dir = root.join(".vscode");
        Self {
            tasks: dir.join("tasks.json"),
            launch: dir.join("launch.json"),
        }
    }

    /// Both paths, in write order.
    pub fn paths(&self) -> [&Path; 2] {
        [self.tasks.as_path(), self.launch.as_path()]
    }
}

/// Debug adapter `type` used in launch configurations.
pub fn debugger_type(kind: TargetKind) -> &'static str {
    match kind {
        TargetKind::Rust | TargetKind::Cpp => "lldb",
        TargetKind::Go => "go",
        TargetKind::Node => "node",
    }
}

/// Build the `tasks.json` document.
///
/// Attach-only targets have nothing to run and are skipped.
pub fn tasks_json(targets: &[Target]) -> Value {
    let tasks: Vec<Value> = targets
        .iter()
        .filter(|t| !t.attaches_to_dev_server() && t.request_mode() == RequestMode::Launch)
        .map(|t| {
            let mut task = Map::new();
            task.insert("label".into(), json!(t.name));
            task.insert("type".into(), json!("shell"));
            task.insert("command".into(), json!(t.program));
            if let Some(args) = &t.args {
                task.insert("args".into(), json!(args));
            }
            if let Some(cwd) = &t.cwd {
                task.insert("options".into(), json!({ "cwd": cwd }));
            }
            Value::Object(task)
        })
        .collect();

    json!({
        "version": "2.0.0",
        "tasks": tasks,
    })
}

/// Build one launch configuration.
pub fn launch_configuration(target: &Target) -> Value {
    let mut config = Map::new();
    config.insert("name".into(), json!(target.name));
    config.insert("type".into(), json!(debugger_type(target.kind)));

    if target.attaches_to_dev_server() {
        config.insert("request".into(), json!(RequestMode::Attach.as_str()));
        config.insert(
            "port".into(),
            json!(target.port.unwrap_or(NODE_INSPECT_PORT)),
        );
        if let Some(cwd) = &target.cwd {
            config.insert("cwd".into(), json!(workspace_path(cwd)));
        }
        return Value::Object(config);
    }

    config.insert("request".into(), json!(target.request_mode().as_str()));
    config.insert("program".into(), json!(workspace_path(&target.program)));
    if let Some(cwd) = &target.cwd {
        config.insert("cwd".into(), json!(workspace_path(cwd)));
    }
    if let Some(args) = &target.args {
        config.insert("args".into(), json!(args));
    }
    if let Some(env) = &target.env {
        config.insert("env".into(), json!(env));
    }
    if let Some(port) = target.port {
        config.insert("port".into(), json!(port));
    }
    Value::Object(config)
}

/// Build the `launch.json` document.
pub fn launch_json(targets: &[Target]) -> Value {
    let configurations: Vec<Value> = targets.iter().map(launch_configuration).collect();
    json!({
        "version": "0.2.0",
        "configurations": configurations,
    })
}

/// Write `.vscode/tasks.json` and `.vscode/launch.json`.
///
/// Without `force`, nothing is written if either file already exists.
pub fn generate(root: &Path, targets: &[Target], force: bool) -> Result<VsCodeFiles> {
    let files = VsCodeFiles::for_root(root);

    if !force {
        ensure_absent(&files.paths())?;
    }

    write_rendered(&files.tasks, &to_pretty(&tasks_json(targets))?, true)?;
    write_rendered(&files.launch, &to_pretty(&launch_json(targets))?, true)?;
    tracing::debug!("wrote VS Code configs for {} target(s)", targets.len());

    Ok(files)
}

fn to_pretty(value: &Value) -> Result<String> {
    let mut out = serde_json::to_string_pretty(value).map_err(|e| JustifyError::Other(e.into()))?;
    out.push('\n');
    Ok(out)
}

/// Anchor relative paths at `${workspaceFolder}`.
fn workspace_path(path: &str) -> String {
    if Path::new(path).is_absolute() || path.starts_with("${") {
        return path.to_string();
    }
    match path.trim_start_matches("./") {
        "" | "." => "${workspaceFolder}".to_string(),
        rest => format!("${{workspaceFolder}}/{}", rest),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::targets::ATTACH_NODE_PROGRAM;
    use std::collections::BTreeMap;
    use std::fs;
    use tempfile::TempDir;

    fn sample_targets() -> Vec<Target> {
        vec![
            Target::new("rust-app", TargetKind::Rust, "target/debug/app"),
            Target::new("node-dev", TargetKind::Node, ATTACH_NODE_PROGRAM),
        ]
    }

    #[test]
    fn debugger_types() {
        assert_eq!(debugger_type(TargetKind::Rust), "lldb");
        assert_eq!(debugger_type(TargetKind::Cpp), "lldb");
        assert_eq!(debugger_type(TargetKind::Go), "go");
        assert_eq!(debugger_type(TargetKind::Node), "node");
    }

    #[test]
    fn tasks_skip_attach_targets() {
        let doc = tasks_json(&sample_targets());

        assert_eq!(doc["version"], "2.0.0");
        let tasks = doc["tasks"].as_array().unwrap();
        assert_eq!(tasks.len(), 1);
        assert_eq!(tasks[0]["label"], "rust-app");
        assert_eq!(tasks[0]["type"], "shell");
        assert_eq!(tasks[0]["command"], "target/debug/app");
    }

    #[test]
    fn launch_defaults_to_launch_request() {
        let config = launch_configuration(&sample_targets()[0]);

        assert_eq!(
            config,
            json!({
                "name": "rust-app",
                "type": "lldb",
                "request": "launch",
                "program": "${workspaceFolder}/target/debug/app",
            })
        );
    }

    #[test]
    fn attach_sentinel_has_no_program() {
        let config = launch_configuration(&sample_targets()[1]);

        assert_eq!(config["request"], "attach");
        assert_eq!(config["port"], 9229);
        assert!(config.get("program").is_none());
    }

    #[test]
    fn optional_fields_only_when_set() {
        let mut env = BTreeMap::new();
        env.insert("PORT".to_string(), "8080".to_string());
        let target = Target::new("api", TargetKind::Go, ".")
            .with_cwd("cmd/api")
            .with_args(vec!["-v".into()])
            .with_env(env)
            .with_port(2345);

        let config = launch_configuration(&target);

        assert_eq!(config["program"], "${workspaceFolder}");
        assert_eq!(config["cwd"], "${workspaceFolder}/cmd/api");
        assert_eq!(config["args"], json!(["-v"]));
        assert_eq!(config["env"], json!({ "PORT": "8080" }));
        assert_eq!(config["port"], 2345);
    }

    #[test]
    fn absolute_program_is_kept() {
        let target = Target::new("c", TargetKind::Cpp, "/opt/bin/app");
        assert_eq!(launch_configuration(&target)["program"], "/opt/bin/app");
    }

    #[test]
    fn generate_writes_both_files() {
        let temp = TempDir::new().unwrap();
        let files = generate(temp.path(), &sample_targets(), false).unwrap();

        let launch: Value =
            serde_json::from_str(&fs::read_to_string(&files.launch).unwrap()).unwrap();
        assert_eq!(launch["version"], "0.2.0");
        assert_eq!(launch["configurations"].as_array().unwrap().len(), 2);
        assert!(files.tasks.exists());
    }

    #[test]
    fn generate_refuses_overwrite_without_force() {
        let temp = TempDir::new().unwrap();
        let files = VsCodeFiles::for_root(temp.path());
        fs::create_dir_all(files.launch.parent().unwrap()).unwrap();
        fs::write(&files.launch, "{}").unwrap();

        let err = generate(temp.path(), &sample_targets(), false).unwrap_err();
        assert!(matches!(err, JustifyError::AlreadyExists { .. }));
        assert!(!files.tasks.exists());
        assert_eq!(fs::read_to_string(&files.launch).unwrap(), "{}");

        generate(temp.path(), &sample_targets(), true).unwrap();
        assert_ne!(fs::read_to_string(&files.launch).unwrap(), "{}");
    }
}
