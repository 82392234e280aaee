//! Compile task name prediction.
//!
//! GradleRIO names the native compile task after the binary configuration;
//! the options file this tool needs lives in that task's output directory.

use crate::config::GeneratorConfig;

/// Predicts the name of the Gradle task that compiled the configured binary.
///
/// The shape is `compile{bin}{platform}{buildType}{binaryType}{bin}Cpp`,
/// where the platform segment only appears for desktop builds. Pure
/// function, no I/O.
pub fn compile_task_name(config: &GeneratorConfig) -> String {
    let platform = if config.desktop {
        config.platform.as_str()
    } else {
        ""
    };

    format!(
        "compile{bin}{platform}{build_type}{binary_type}{bin}Cpp",
        bin = config.binary_name,
        platform = platform,
        build_type = config.build_type,
        binary_type = config.binary_type,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{BinaryType, BuildType};

    #[test]
    fn test_rio_build_omits_platform() {
        let config = GeneratorConfig::default();
        assert_eq!(
            compile_task_name(&config),
            "compileFrcUserProgramDebugExecutableFrcUserProgramCpp"
        );
    }

    #[test]
    fn test_desktop_build_includes_platform_verbatim() {
        let config = GeneratorConfig {
            desktop: true,
            platform: "Linuxx86-64".to_string(),
            ..GeneratorConfig::default()
        };
        assert_eq!(
            compile_task_name(&config),
            "compileFrcUserProgramLinuxx86-64DebugExecutableFrcUserProgramCpp"
        );
    }

    #[test]
    fn test_release_shared_library_segments() {
        let config = GeneratorConfig {
            binary_name: "MyLib".to_string(),
            build_type: BuildType::Release,
            binary_type: BinaryType::SharedLibrary,
            ..GeneratorConfig::default()
        };
        assert_eq!(
            compile_task_name(&config),
            "compileMyLibReleaseSharedLibraryMyLibCpp"
        );
    }
}
