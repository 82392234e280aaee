//! Generator error types.

use std::path::PathBuf;

use miette::Diagnostic;
use thiserror::Error;

/// Errors that can occur while generating the compilation database.
#[derive(Error, Diagnostic, Debug)]
pub enum GeneratorError {
    // =========================================================================
    // IO Errors
    // =========================================================================
    #[error("Failed to access '{}': {message}", path.display())]
    #[diagnostic(code(riocdgen::io::error))]
    Io {
        path: PathBuf,
        message: String,
    },

    // =========================================================================
    // Configuration Errors
    // =========================================================================
    #[error("Project root does not exist: {}", path.display())]
    #[diagnostic(
        code(riocdgen::config::project_root_missing),
        help("Pass --source <dir> pointing at the robot project root")
    )]
    ProjectRootMissing {
        path: PathBuf,
    },

    #[error("No Gradle build descriptor in {}", path.display())]
    #[diagnostic(
        code(riocdgen::config::build_descriptor_missing),
        help("The project root must contain build.gradle or build.gradle.kts")
    )]
    BuildDescriptorMissing {
        path: PathBuf,
    },

    // =========================================================================
    // Discovery Errors
    // =========================================================================
    #[error("Could not find the arm-frc{year}-linux-gnueabi-g++ cross compiler")]
    #[diagnostic(
        code(riocdgen::discovery::compiler_not_found),
        help("Install the WPILib roboRIO toolchain for this year, or pass --compiler <path>")
    )]
    CompilerNotFound {
        year: i32,
    },

    #[error("Could not find options.txt for task '{task}'")]
    #[diagnostic(
        code(riocdgen::discovery::options_not_found),
        help("The build may not have run yet. Build the project first, then re-run this tool.")
    )]
    OptionsNotFound {
        task: String,
    },
}

impl GeneratorError {
    /// Creates an IO error.
    pub fn io(path: impl Into<PathBuf>, message: impl Into<String>) -> Self {
        Self::Io {
            path: path.into(),
            message: message.into(),
        }
    }
}
