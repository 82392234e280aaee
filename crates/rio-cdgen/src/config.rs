//! Generator configuration.

use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use chrono::Datelike;

/// Configuration for one generator run.
///
/// Built once at startup (the CLI maps its arguments straight onto this) and
/// passed by reference into every pipeline stage. Nothing reads ambient
/// process state after construction.
#[derive(Debug, Clone)]
pub struct GeneratorConfig {
    /// Toolchain year, embedded twice in the vendor installation path.
    pub year: i32,

    /// Build configuration segment of the compile task name.
    pub build_type: BuildType,

    /// Logical binary identifier (appears twice in the compile task name).
    pub binary_name: String,

    /// Binary kind segment of the compile task name.
    pub binary_type: BinaryType,

    /// Target platform tag, only present in the task name for desktop builds.
    pub platform: String,

    /// Whether this is a desktop (simulation) build.
    pub desktop: bool,

    /// Project root; must contain a Gradle build descriptor.
    pub project_root: PathBuf,

    /// Explicit cross-compiler path; skips the toolchain search when it exists.
    pub compiler_path: Option<PathBuf>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            year: chrono::Local::now().year(),
            build_type: BuildType::Debug,
            binary_name: "FrcUserProgram".to_string(),
            binary_type: BinaryType::Executable,
            platform: "Linuxathena".to_string(),
            desktop: false,
            project_root: PathBuf::from("."),
            compiler_path: None,
        }
    }
}

/// Gradle build configuration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BuildType {
    Debug,
    Release,
}

impl fmt::Display for BuildType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // The exact segment Gradle uses in task names.
        match self {
            BuildType::Debug => write!(f, "Debug"),
            BuildType::Release => write!(f, "Release"),
        }
    }
}

impl FromStr for BuildType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "debug" => Ok(BuildType::Debug),
            "release" => Ok(BuildType::Release),
            _ => Err(format!("unknown build type '{s}' (expected debug or release)")),
        }
    }
}

/// Kind of binary the build produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryType {
    Executable,
    SharedLibrary,
    StaticLibrary,
}

impl fmt::Display for BinaryType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BinaryType::Executable => write!(f, "Executable"),
            BinaryType::SharedLibrary => write!(f, "SharedLibrary"),
            BinaryType::StaticLibrary => write!(f, "StaticLibrary"),
        }
    }
}

impl FromStr for BinaryType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "executable" => Ok(BinaryType::Executable),
            "shared-library" | "sharedlibrary" => Ok(BinaryType::SharedLibrary),
            "static-library" | "staticlibrary" => Ok(BinaryType::StaticLibrary),
            _ => Err(format!(
                "unknown binary type '{s}' (expected executable, shared-library or static-library)"
            )),
        }
    }
}
