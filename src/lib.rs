// glloadgen/src/lib.rs
//
//! Single-header OpenGL loader generation.
//!
//! This crate reads a GL header such as `glcorearb.h`, extracts every exported entry point, and
//! emits a C header that resolves all of them at runtime without linking against a
//! version-specific import library. The same loader model is available natively through
//! `LoaderState` and the strategies in `platform`.
//!
//! ```no_run
//! use glloadgen::{GeneratorConfig, HeaderGenerator};
//! use std::fs::File;
//! use std::io::BufReader;
//!
//! let config = GeneratorConfig::default();
//! let header = BufReader::new(File::open("glcorearb.h").unwrap());
//! let table = glloadgen::read_symbol_table(&config, header).unwrap();
//! let output = HeaderGenerator::new(config).generate(&table);
//! glloadgen::write_if_changed("glload.h", &output).unwrap();
//! ```

#[macro_use]
extern crate log;

pub mod config;
pub use crate::config::{GeneratorConfig, Target};

pub mod error;
pub use crate::error::Error;

pub mod generator;
pub use crate::generator::{write_if_changed, Generator, HeaderGenerator};

mod info;
pub use crate::info::{GLVersion, MIN_MAJOR_VERSION};

pub mod loader;
pub use crate::loader::{negotiate, resolve_proc_address, LoaderState, ResolvedProc};

pub mod parser;
pub use crate::parser::DeclarationPattern;

pub mod platform;
pub use crate::platform::{Loader, Platform, ProcAddress};

pub mod symbol;
pub use crate::symbol::{Naming, SymbolDescriptor, SymbolName, SymbolTable};

#[allow(clippy::all, dead_code, non_upper_case_globals, unused_imports)]
mod gl {
    include!(concat!(env!("OUT_DIR"), "/gl_bindings.rs"));
}

use std::io::BufRead;

/// Parses the header in `reader` with the markers in `config` and builds the symbol table.
pub fn read_symbol_table<R>(config: &GeneratorConfig, reader: R) -> Result<SymbolTable, Error>
where
    R: BufRead,
{
    let pattern = DeclarationPattern::new(&config.export_marker, &config.calling_convention)?;
    let names = parser::parse_reader(&pattern, reader)?;
    let table = SymbolTable::build(names, &config.naming)?;
    info!("{} entry points", table.len());
    Ok(table)
}
