// glloadgen/src/config.rs
//
//! Generator configuration.

use crate::parser::{DEFAULT_CALLING_CONVENTION, DEFAULT_EXPORT_MARKER};
use crate::platform::Platform;
use crate::symbol::Naming;

use std::str::FromStr;

/// The header the generated file includes for GL types and typedefs.
pub const DEFAULT_INCLUDE: &str = "GL/glcorearb.h";

/// Which loader strategies the implementation section contains.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Target {
    /// All three strategies, chosen by the preprocessor when the header is compiled.
    Portable,
    /// A single strategy, chosen when the header is generated.
    Only(Platform),
}

impl Default for Target {
    #[inline]
    fn default() -> Target {
        Target::Portable
    }
}

impl FromStr for Target {
    type Err = String;

    fn from_str(value: &str) -> Result<Target, String> {
        match value {
            "portable" => Ok(Target::Portable),
            "windows" => Ok(Target::Only(Platform::Windows)),
            "macos" => Ok(Target::Only(Platform::MacOS)),
            "unix" => Ok(Target::Only(Platform::Unix)),
            _ => Err(format!("unknown platform `{}`", value)),
        }
    }
}

/// Everything that controls what the generator reads and emits.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GeneratorConfig {
    pub naming: Naming,
    /// Path passed to `#include` in the generated header.
    pub include: String,
    pub target: Target,
    pub export_marker: String,
    pub calling_convention: String,
}

impl Default for GeneratorConfig {
    fn default() -> GeneratorConfig {
        GeneratorConfig {
            naming: Naming::default(),
            include: DEFAULT_INCLUDE.to_owned(),
            target: Target::default(),
            export_marker: DEFAULT_EXPORT_MARKER.to_owned(),
            calling_convention: DEFAULT_CALLING_CONVENTION.to_owned(),
        }
    }
}

impl GeneratorConfig {
    pub fn with_library_prefix(mut self, prefix: &str) -> GeneratorConfig {
        self.naming.library_prefix = prefix.to_owned();
        self
    }

    pub fn with_include(mut self, include: &str) -> GeneratorConfig {
        self.include = include.to_owned();
        self
    }

    pub fn with_target(mut self, target: Target) -> GeneratorConfig {
        self.target = target;
        self
    }

    pub fn with_markers(mut self, export_marker: &str, calling_convention: &str) -> GeneratorConfig {
        self.export_marker = export_marker.to_owned();
        self.calling_convention = calling_convention.to_owned();
        self
    }
}
