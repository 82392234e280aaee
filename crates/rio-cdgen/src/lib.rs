//! # rio-cdgen
//!
//! Generates a clang compilation database for a GradleRIO roboRIO C++
//! project after a build has produced its artifacts.
//!
//! ## Pipeline
//!
//! ```text
//! GeneratorConfig
//!        │
//!        ▼
//! ┌──────────────┐
//! │  Validate    │  project root + Gradle descriptor
//! └──────┬───────┘
//!        │
//!        ▼
//! ┌──────────────┐   ┌──────────────┐
//! │  Toolchain   │   │   Options    │  task name → options.txt → flat flags
//! └──────┬───────┘   └──────┬───────┘
//!        │                  │
//!        ▼                  ▼
//! ┌─────────────────────────────────┐
//! │  Discover sources → match .o    │
//! └──────────────┬──────────────────┘
//!                │
//!                ▼
//! ┌──────────────┐
//! │    Emit      │  compile_commands.json at the project root
//! └──────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,ignore
//! use rio_cdgen::{Generator, GeneratorConfig};
//!
//! let config = GeneratorConfig {
//!     project_root: "/home/dev/robot".into(),
//!     ..GeneratorConfig::default()
//! };
//!
//! let report = Generator::new(config).generate()?;
//! println!("{} entries written", report.matched);
//! ```

pub mod artifact;
pub mod config;
pub mod database;
pub mod diagnostic;
pub mod discover;
pub mod options;
pub mod task;
pub mod toolchain;

use std::path::{Path, PathBuf};

pub use config::{BinaryType, BuildType, GeneratorConfig};
pub use database::{CompilationDatabase, CompileCommand};
pub use diagnostic::GeneratorError;

/// Name of the database file written at the project root.
pub const DATABASE_FILE_NAME: &str = "compile_commands.json";

/// Runs the discovery-and-generation pipeline for one configuration.
pub struct Generator {
    config: GeneratorConfig,
}

/// What a successful run found and wrote.
#[derive(Debug)]
pub struct GenerateReport {
    /// The cross compiler every command references.
    pub compiler: PathBuf,
    /// The options file the flags were loaded from.
    pub options_file: PathBuf,
    /// Where the database was written.
    pub database_path: PathBuf,
    /// Number of entries in the database.
    pub matched: usize,
    /// Sources that had no object file and were left out.
    pub skipped: Vec<PathBuf>,
}

impl Generator {
    /// Creates a generator with the given configuration.
    pub fn new(config: GeneratorConfig) -> Self {
        Self { config }
    }

    /// Generates `compile_commands.json` at the project root.
    ///
    /// The pipeline is strictly linear and synchronous:
    /// 1. Validate the project root and canonicalize it
    /// 2. Locate the cross compiler
    /// 3. Predict the compile task name and load its options file
    /// 4. Discover sources and match each to its object file
    /// 5. Write the database (atomically, replacing any existing file)
    ///
    /// Sources without a matching object file are reported on stderr,
    /// collected in the report and excluded from the database.
    pub fn generate(&self) -> Result<GenerateReport, GeneratorError> {
        // Phase 1: validate the project root
        let root = self.resolve_project_root()?;

        // Phase 2: locate the cross compiler
        let compiler = toolchain::find_compiler(&self.config)?;

        // Phase 3: recover the compiler options recorded by the build
        let task = task::compile_task_name(&self.config);
        let options_file = options::find_options_file(&root, &task)?;
        let option_string = options::load_option_string(&options_file)?;

        // Phase 4: discover sources and match their objects
        let build_dir = root.join("build");
        let sources = discover::find_source_files(&root);

        let mut commands = Vec::new();
        let mut skipped = Vec::new();
        for source in sources {
            match artifact::find_object_file(&build_dir, &source) {
                Some(object) => commands.push(CompileCommand {
                    directory: build_dir.display().to_string(),
                    command: format!(
                        "{} {} -o {} {}",
                        compiler.display(),
                        option_string,
                        object.display(),
                        source.display()
                    ),
                    file: source.display().to_string(),
                }),
                None => {
                    eprintln!("   no object file for {}, skipping", source.display());
                    skipped.push(source);
                }
            }
        }

        // Phase 5: write the database
        let database = CompilationDatabase::new(commands);
        let database_path = root.join(DATABASE_FILE_NAME);
        database.save(&database_path)?;

        Ok(GenerateReport {
            compiler,
            options_file,
            database_path,
            matched: database.len(),
            skipped,
        })
    }

    /// Checks the project-root invariants and returns the canonical root.
    ///
    /// Every downstream path (sources, build dir, database entries) derives
    /// from the canonical root, so all emitted paths are absolute.
    fn resolve_project_root(&self) -> Result<PathBuf, GeneratorError> {
        let root = &self.config.project_root;

        if !root.is_dir() {
            return Err(GeneratorError::ProjectRootMissing { path: root.clone() });
        }
        if !has_build_descriptor(root) {
            return Err(GeneratorError::BuildDescriptorMissing { path: root.clone() });
        }

        root.canonicalize()
            .map_err(|e| GeneratorError::io(root.clone(), e.to_string()))
    }
}

/// Whether the directory looks like a Gradle project.
fn has_build_descriptor(root: &Path) -> bool {
    ["build.gradle", "build.gradle.kts"]
        .iter()
        .any(|name| root.join(name).is_file())
}
