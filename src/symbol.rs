// glloadgen/src/symbol.rs
//
//! Symbol names, their derived identifiers, and the ordered symbol table.

use crate::Error;

use std::collections::BTreeMap;
use std::ffi::CString;
use std::fmt::{self, Display, Formatter};
use std::slice;

/// The prefix every OpenGL entry point carries.
pub const DEFAULT_API_PREFIX: &str = "gl";
/// The prefix of the generated loader identifiers.
pub const DEFAULT_LIBRARY_PREFIX: &str = "glload";

/// How generated identifiers are named.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Naming {
    /// The two-character prefix stripped from every entry point name.
    pub api_prefix: String,
    /// The prefix of every generated identifier, without the trailing underscore.
    pub library_prefix: String,
}

impl Default for Naming {
    fn default() -> Naming {
        Naming {
            api_prefix: DEFAULT_API_PREFIX.to_owned(),
            library_prefix: DEFAULT_LIBRARY_PREFIX.to_owned(),
        }
    }
}

impl Naming {
    /// Returns `<library prefix>_<suffix>`.
    #[inline]
    pub fn prefixed(&self, suffix: &str) -> String {
        format!("{}_{}", self.library_prefix, suffix)
    }

    /// Checks that the API prefix is two identifier characters and the library prefix is a C
    /// identifier.
    pub fn validate(&self) -> Result<(), Error> {
        if self.api_prefix.len() != 2 || !is_identifier(&self.api_prefix) {
            return Err(Error::InvalidPrefix(self.api_prefix.clone()));
        }
        if !is_identifier(&self.library_prefix) {
            return Err(Error::InvalidPrefix(self.library_prefix.clone()));
        }
        Ok(())
    }

    /// The library prefix in upper case, used for preprocessor guards.
    #[inline]
    pub fn guard_prefix(&self) -> String {
        self.library_prefix.to_ascii_uppercase()
    }
}

/// The name of one exported entry point, e.g. `glClear`.
#[derive(Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct SymbolName(String);

impl SymbolName {
    /// Validates `name` against the API prefix in `naming`.
    ///
    /// The name must be an ASCII identifier that starts with the API prefix and has at least one
    /// character after it.
    pub fn new(name: &str, naming: &Naming) -> Result<SymbolName, Error> {
        if !is_identifier(name)
            || name.len() <= naming.api_prefix.len()
            || !name.starts_with(&naming.api_prefix)
        {
            return Err(Error::InvalidSymbolName(name.to_owned()));
        }
        Ok(SymbolName(name.to_owned()))
    }

    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Display for SymbolName {
    fn fmt(&self, formatter: &mut Formatter) -> fmt::Result {
        formatter.write_str(&self.0)
    }
}

fn is_identifier(name: &str) -> bool {
    !name.is_empty()
        && !name.starts_with(|c: char| c.is_ascii_digit())
        && name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

/// The identifiers generated for one entry point.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SymbolDescriptor {
    /// The canonical entry point name, e.g. `glClear`.
    pub name: SymbolName,
    /// The variable holding the resolved pointer, e.g. `glload_Clear`.
    pub loader_name: String,
    /// The function pointer typedef, e.g. `PFNGLCLEARPROC`.
    pub pointer_type: String,
    /// The macro that lets callers keep using the canonical name.
    pub macro_alias: String,
}

impl SymbolDescriptor {
    pub fn new(name: &SymbolName, naming: &Naming) -> SymbolDescriptor {
        let canonical = name.as_str();
        SymbolDescriptor {
            name: name.clone(),
            loader_name: naming.prefixed(&canonical[naming.api_prefix.len()..]),
            pointer_type: format!("PFN{}PROC", canonical.to_ascii_uppercase()),
            macro_alias: canonical.to_owned(),
        }
    }

    /// The canonical name as a C string, for passing to the platform loaders.
    pub fn c_name(&self) -> CString {
        // Validated names are ASCII identifiers and cannot contain interior NULs.
        CString::new(self.name.as_str()).unwrap_or_default()
    }
}

/// Every entry point to load, sorted by canonical name.
///
/// The emitted declarations, aliases, and load sequence all iterate this order.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SymbolTable {
    descriptors: Vec<SymbolDescriptor>,
}

impl SymbolTable {
    /// Validates, deduplicates, and sorts `names`.
    pub fn build<I, S>(names: I, naming: &Naming) -> Result<SymbolTable, Error>
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        naming.validate()?;
        let mut descriptors = BTreeMap::new();
        for name in names {
            let name = SymbolName::new(name.as_ref(), naming)?;
            if descriptors.contains_key(&name) {
                debug!("dropping duplicate declaration of `{}`", name);
                continue;
            }
            let descriptor = SymbolDescriptor::new(&name, naming);
            descriptors.insert(name, descriptor);
        }
        Ok(SymbolTable { descriptors: descriptors.into_values().collect() })
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    #[inline]
    pub fn iter(&self) -> slice::Iter<SymbolDescriptor> {
        self.descriptors.iter()
    }

    /// Looks up a descriptor by canonical name.
    pub fn get(&self, name: &str) -> Option<&SymbolDescriptor> {
        self.descriptors
            .binary_search_by(|descriptor| descriptor.name.as_str().cmp(name))
            .ok()
            .map(|index| &self.descriptors[index])
    }
}

impl<'a> IntoIterator for &'a SymbolTable {
    type Item = &'a SymbolDescriptor;
    type IntoIter = slice::Iter<'a, SymbolDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.descriptors.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_descriptor_derivation() {
        let naming = Naming::default();
        let name = SymbolName::new("glDrawArrays", &naming).unwrap();
        let descriptor = SymbolDescriptor::new(&name, &naming);
        assert_eq!(descriptor.loader_name, "glload_DrawArrays");
        assert_eq!(descriptor.pointer_type, "PFNGLDRAWARRAYSPROC");
        assert_eq!(descriptor.macro_alias, "glDrawArrays");
    }

    #[test]
    fn test_custom_library_prefix() {
        let naming = Naming { library_prefix: "msh_ogl".to_owned(), ..Naming::default() };
        let name = SymbolName::new("glClear", &naming).unwrap();
        assert_eq!(SymbolDescriptor::new(&name, &naming).loader_name, "msh_ogl_Clear");
        assert_eq!(naming.guard_prefix(), "MSH_OGL");
    }

    #[test]
    fn test_malformed_names_are_rejected() {
        let naming = Naming::default();
        for name in ["", "g", "gl", "xyClear", "gl-Clear", "glClear(", "wglCreateContext"] {
            match SymbolName::new(name, &naming) {
                Err(Error::InvalidSymbolName(rejected)) => assert_eq!(rejected, name),
                other => panic!("`{}` should be rejected, got {:?}", name, other),
            }
        }
    }

    #[test]
    fn test_malformed_prefixes_are_rejected() {
        let prefixes = [("gl", "a b"), ("gl", ""), ("gl", "9gl"), ("g", "glload"), ("gl_", "glload")];
        for (api_prefix, library_prefix) in prefixes {
            let naming =
                Naming { api_prefix: api_prefix.to_owned(), library_prefix: library_prefix.to_owned() };
            match SymbolTable::build(["glClear"], &naming) {
                Err(Error::InvalidPrefix(_)) => {}
                other => panic!("{:?} should be rejected, got {:?}", naming, other),
            }
        }
        let naming = Naming { library_prefix: "msh_ogl".to_owned(), ..Naming::default() };
        assert!(naming.validate().is_ok());
    }

    #[test]
    fn test_get_uses_table_order() {
        let table =
            SymbolTable::build(["glViewport", "glClear", "glGetIntegerv"], &Naming::default())
                .unwrap();
        assert_eq!(table.get("glGetIntegerv").unwrap().loader_name, "glload_GetIntegerv");
        assert!(table.get("glFinish").is_none());
    }
}
