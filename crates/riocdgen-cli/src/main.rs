//! riocdgen CLI.
//!
//! One-shot generator: run it from (or point it at) a GradleRIO robot
//! project after a build, get a `compile_commands.json` at the project root.

use std::path::PathBuf;
use std::time::Instant;

use clap::Parser;

use rio_cdgen::{BinaryType, BuildType, Generator, GeneratorConfig};

mod ui;

#[derive(Parser)]
#[command(name = "riocdgen")]
#[command(version)]
#[command(about = "Generates compile_commands.json for GradleRIO roboRIO C++ projects")]
struct Cli {
    /// Explicit cross-compiler path; skips the toolchain search when it exists
    #[arg(long)]
    compiler: Option<PathBuf>,

    /// Build configuration [possible values: debug, release]
    #[arg(long, alias = "bt", default_value = "debug")]
    build_type: BuildType,

    /// Logical binary identifier used in the compile task name
    #[arg(long, alias = "bn", default_value = "FrcUserProgram")]
    binary_name: String,

    /// Target platform tag, only used together with --desktop
    #[arg(long, alias = "pt", default_value = "Linuxathena")]
    platform: String,

    /// Include the platform tag in the compile task name (desktop builds)
    #[arg(long)]
    desktop: bool,

    /// Toolchain year [default: current calendar year]
    #[arg(long, short = 'y')]
    year: Option<i32>,

    /// Project root; must contain build.gradle or build.gradle.kts
    #[arg(long, short = 's', short_alias = 'S', default_value = ".")]
    source: PathBuf,

    /// Kind of binary the build produced
    /// [possible values: executable, shared-library, static-library]
    #[arg(long, alias = "bnt", default_value = "executable")]
    binary_type: BinaryType,
}

impl Cli {
    fn into_config(self) -> GeneratorConfig {
        let defaults = GeneratorConfig::default();
        GeneratorConfig {
            year: self.year.unwrap_or(defaults.year),
            build_type: self.build_type,
            binary_name: self.binary_name,
            binary_type: self.binary_type,
            platform: self.platform,
            desktop: self.desktop,
            project_root: self.source,
            compiler_path: self.compiler,
        }
    }
}

fn main() -> miette::Result<()> {
    let cli = Cli::parse();
    let config = cli.into_config();

    ui::print_header(env!("CARGO_PKG_VERSION"));

    let started = Instant::now();
    let spinner = ui::spinner("generating compile_commands.json...");
    let result = Generator::new(config).generate();
    spinner.finish_and_clear();

    match result {
        Ok(report) => {
            ui::success("compile_commands.json generated");
            ui::info(&format!("compiler  {}", report.compiler.display()));
            ui::info(&format!("options   {}", report.options_file.display()));
            if report.skipped.is_empty() {
                ui::dim(&format!("{} entries", report.matched));
            } else {
                ui::dim(&format!(
                    "{} entries, {} sources without an object file skipped",
                    report.matched,
                    report.skipped.len()
                ));
            }
            ui::timing(
                &format!("wrote {}", report.database_path.display()),
                started.elapsed().as_millis(),
            );
            Ok(())
        }
        Err(e) => {
            ui::error_header();
            Err(e.into())
        }
    }
}
