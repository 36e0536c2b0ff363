//! Target and registry file types.

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// Program value meaning "attach to a running Node dev server".
pub const ATTACH_NODE_PROGRAM: &str = "attach:node";

/// Toolchain a target belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TargetKind {
    Rust,
    Go,
    Cpp,
    Node,
}

impl TargetKind {
    /// Wire name of the kind.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Rust => "rust",
            Self::Go => "go",
            Self::Cpp => "cpp",
            Self::Node => "node",
        }
    }
}

impl fmt::Display for TargetKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TargetKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "rust" => Ok(Self::Rust),
            "go" => Ok(Self::Go),
            "cpp" => Ok(Self::Cpp),
            "node" => Ok(Self::Node),
            _ => Err(format!(
                "unknown kind '{}' (expected rust, go, cpp or node)",
                s
            )),
        }
    }
}

/// How a debugger should start a target.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum RequestMode {
    #[default]
    Launch,
    Attach,
}

impl RequestMode {
    /// Wire name of the mode.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Launch => "launch",
            Self::Attach => "attach",
        }
    }
}

impl fmt::Display for RequestMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for RequestMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "launch" => Ok(Self::Launch),
            "attach" => Ok(Self::Attach),
            _ => Err(format!(
                "unknown request '{}' (expected launch or attach)",
                s
            )),
        }
    }
}

/// A named program an editor can run or debug.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Target {
    pub name: String,
    pub kind: TargetKind,
    /// Path to launch, or [`ATTACH_NODE_PROGRAM`].
    pub program: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cwd: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub args: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub env: Option<BTreeMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub request: Option<RequestMode>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub port: Option<u16>,
}

impl Target {
    /// Create a target with only the required fields set.
    pub fn new(name: impl Into<String>, kind: TargetKind, program: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            kind,
            program: program.into(),
            cwd: None,
            args: None,
            env: None,
            request: None,
            port: None,
        }
    }

    pub fn with_cwd(mut self, cwd: impl Into<String>) -> Self {
        self.cwd = Some(cwd.into());
        self
    }

    pub fn with_args(mut self, args: Vec<String>) -> Self {
        self.args = Some(args);
        self
    }

    pub fn with_env(mut self, env: BTreeMap<String, String>) -> Self {
        self.env = Some(env);
        self
    }

    pub fn with_request(mut self, request: RequestMode) -> Self {
        self.request = Some(request);
        self
    }

    pub fn with_port(mut self, port: u16) -> Self {
        self.port = Some(port);
        self
    }

    /// Effective request mode (launch when unset).
    pub fn request_mode(&self) -> RequestMode {
        self.request.unwrap_or_default()
    }

    /// Whether `program` is the attach sentinel rather than a path.
    pub fn attaches_to_dev_server(&self) -> bool {
        self.program == ATTACH_NODE_PROGRAM
    }
}

/// On-disk registry of targets (`.justify/targets.json`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TargetsFile {
    #[serde(default, deserialize_with = "null_as_default")]
    pub version: u32,
    #[serde(default, deserialize_with = "null_as_default")]
    pub targets: Vec<Target>,
}

/// Read `null` the same as a missing key.
///
/// Older registries written for a project with no markers carry
/// `"targets": null`.
fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Default for TargetsFile {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl TargetsFile {
    /// Current schema version.
    pub const CURRENT_VERSION: u32 = 1;

    /// Create a registry at the current version.
    pub fn new(targets: Vec<Target>) -> Self {
        Self {
            version: Self::CURRENT_VERSION,
            targets,
        }
    }

    /// Apply load-time defaults: version 0 becomes 1, port 0 becomes unset.
    pub fn normalize(&mut self) {
        if self.version == 0 {
            self.version = Self::CURRENT_VERSION;
        }
        for target in &mut self.targets {
            if target.port == Some(0) {
                target.port = None;
            }
        }
    }

    /// Find a target by exact name.
    pub fn find(&self, name: &str) -> Option<&Target> {
        find_by_name(&self.targets, name)
    }

    /// Replace the target with the same name in place, or append it.
    ///
    /// Returns `true` when an existing target was replaced.
    pub fn upsert(&mut self, target: Target) -> bool {
        match self.targets.iter_mut().find(|t| t.name == target.name) {
            Some(existing) => {
                *existing = target;
                true
            }
            None => {
                self.targets.push(target);
                false
            }
        }
    }
}

/// Find a target by exact name.
pub fn find_by_name<'a>(targets: &'a [Target], name: &str) -> Option<&'a Target> {
    targets.iter().find(|t| t.name == name)
}

/// Last selected target (`.justify/state.json`).
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct LastUsed {
    #[serde(default)]
    pub last_used: String,
}
