// glloadgen/src/generator/mod.rs
//
//! Renders a symbol table into a single-header loader library.

use crate::config::GeneratorConfig;
use crate::symbol::SymbolTable;
use crate::Error;

use std::fs;
use std::io;
use std::path::Path;

pub mod sections;
pub mod strategies;

/// Trait for a loader generator.
pub trait Generator {
    /// Writes the generated artifact for `table` to `dest`.
    fn write<W>(&self, table: &SymbolTable, dest: &mut W) -> io::Result<()>
    where
        W: io::Write;
}

/// Generates a C header with the loader implementation behind `<PREFIX>_IMPLEMENTATION`.
///
/// The output depends only on the configuration and the table, so regenerating from the same
/// header yields byte-identical text.
#[derive(Clone, Debug, Default)]
pub struct HeaderGenerator {
    config: GeneratorConfig,
}

impl HeaderGenerator {
    #[inline]
    pub fn new(config: GeneratorConfig) -> HeaderGenerator {
        HeaderGenerator { config }
    }

    #[inline]
    pub fn config(&self) -> &GeneratorConfig {
        &self.config
    }

    /// Renders `table` into memory.
    pub fn generate(&self, table: &SymbolTable) -> Vec<u8> {
        let mut dest = vec![];
        self.write(table, &mut dest).expect("writing to a Vec cannot fail");
        dest
    }
}

impl Generator for HeaderGenerator {
    fn write<W>(&self, table: &SymbolTable, dest: &mut W) -> io::Result<()>
    where
        W: io::Write,
    {
        let config = &self.config;
        sections::write_license(dest)?;
        sections::write_header_open(config, dest)?;
        sections::write_declarations(table, dest)?;
        sections::write_macro_aliases(table, dest)?;
        sections::write_header_close(config, dest)?;
        strategies::write_strategies(config.target, &config.naming.prefixed("proc_t"), dest)?;
        sections::write_negotiator(config, table, dest)?;
        sections::write_proc_definitions(table, dest)?;
        sections::write_load_procs(table, dest)?;
        sections::write_implementation_close(config, dest)
    }
}

/// Writes `contents` to `path` unless the file already holds exactly those bytes.
///
/// Returns true if the file was written.
pub fn write_if_changed<P>(path: P, contents: &[u8]) -> Result<bool, Error>
where
    P: AsRef<Path>,
{
    let path = path.as_ref();
    match fs::read(path) {
        Ok(existing) if existing == contents => {
            debug!("{} is up to date", path.display());
            return Ok(false);
        }
        Ok(_) => {}
        Err(error) if error.kind() == io::ErrorKind::NotFound => {}
        Err(error) => return Err(error.into()),
    }
    if let Some(parent) = path.parent().filter(|parent| !parent.as_os_str().is_empty()) {
        fs::create_dir_all(parent)?;
    }
    fs::write(path, contents)?;
    info!("wrote {}", path.display());
    Ok(true)
}
