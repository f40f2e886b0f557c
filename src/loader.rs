// glloadgen/src/loader.rs
//
//! Runtime loader state: resolves every entry point of a symbol table and negotiates the
//! OpenGL version.
//!
//! Initialization is attempt-once and not thread safe; callers that share a `LoaderState`
//! across threads must serialize its creation themselves, for example with `OnceLock`.

use crate::gl;
use crate::gl::types::{GLenum, GLint};
use crate::info::{GLVersion, MIN_MAJOR_VERSION};
use crate::platform::{Loader, ProcAddress};
use crate::symbol::{SymbolDescriptor, SymbolTable};
use crate::Error;

use std::ffi::CStr;
use std::mem;

/// The introspection entry point used to read the version.
pub const GET_INTEGERV: &str = "glGetIntegerv";

type GetIntegervFn = unsafe extern "system" fn(GLenum, *mut GLint);

/// One entry point and the address it resolved to, if any.
#[derive(Clone, Debug)]
pub struct ResolvedProc {
    pub descriptor: SymbolDescriptor,
    pub address: Option<ProcAddress>,
}

/// Every resolved entry point plus the negotiated version.
///
/// Resolved addresses are plain function pointers and stay valid after the library handle used
/// to find them is closed.
#[derive(Debug)]
pub struct LoaderState {
    procs: Vec<ResolvedProc>,
    version: Option<GLVersion>,
}

impl LoaderState {
    /// Opens the library, resolves every entry point in `table` order, negotiates the version,
    /// and closes the library again.
    ///
    /// Individual lookups may miss. A failed negotiation leaves the version unset.
    pub fn load<L>(loader: &mut L, table: &SymbolTable) -> LoaderState
    where
        L: Loader,
    {
        let (state, negotiated) = LoaderState::resolve_all(loader, table);
        if let Err(error) = negotiated {
            warn!("version negotiation failed: {}", error);
        }
        state
    }

    /// Like `load`, but fails if the library could not be opened or the version could not be
    /// negotiated.
    pub fn init<L>(loader: &mut L, table: &SymbolTable) -> Result<LoaderState, Error>
    where
        L: Loader,
    {
        let (state, negotiated) = LoaderState::resolve_all(loader, table);
        negotiated?;
        Ok(state)
    }

    fn resolve_all<L>(loader: &mut L, table: &SymbolTable) -> (LoaderState, Result<(), Error>)
    where
        L: Loader,
    {
        loader.open();
        let opened = loader.is_open();
        let procs: Vec<ResolvedProc> = table
            .iter()
            .map(|descriptor| ResolvedProc {
                descriptor: descriptor.clone(),
                address: loader.resolve(&descriptor.c_name()),
            })
            .collect();
        let missing = procs.iter().filter(|resolved| resolved.address.is_none()).count();
        if missing > 0 {
            debug!("{} of {} entry points did not resolve", missing, procs.len());
        }

        let mut state = LoaderState { procs, version: None };
        let negotiated = if opened {
            negotiate(state.get_integer_query()).map(|version| {
                info!("negotiated OpenGL {}.{}", version.major, version.minor);
                state.version = Some(version);
            })
        } else {
            Err(Error::NoGLLibraryFound)
        };

        loader.close();
        (state, negotiated)
    }

    /// The negotiated version, if negotiation succeeded.
    #[inline]
    pub fn version(&self) -> Option<GLVersion> {
        self.version
    }

    /// Returns true if the negotiated version is at least `major.minor`.
    ///
    /// Always false when negotiation failed.
    pub fn is_supported(&self, major: u8, minor: u8) -> bool {
        self.version.map_or(false, |version| version.supports(major, minor))
    }

    /// 0 if negotiation succeeded, -1 otherwise.
    #[inline]
    pub fn status_code(&self) -> i32 {
        if self.version.is_some() {
            0
        } else {
            -1
        }
    }

    /// Returns the address `symbol_name` resolved to at load time, or `None` if it was not in the
    /// table or did not resolve.
    ///
    /// Only table entries are found. Use `resolve_proc_address` for arbitrary names.
    pub fn get_proc_address(&self, symbol_name: &str) -> Option<ProcAddress> {
        self.procs
            .binary_search_by(|resolved| resolved.descriptor.name.as_str().cmp(symbol_name))
            .ok()
            .and_then(|index| self.procs[index].address)
    }

    /// Every entry point in table order.
    #[inline]
    pub fn procs(&self) -> &[ResolvedProc] {
        &self.procs
    }

    fn get_integer_query(&self) -> Option<impl FnMut(GLenum) -> GLint> {
        let address = self.get_proc_address(GET_INTEGERV)?;
        let get_integerv: GetIntegervFn = unsafe { mem::transmute(address.as_ptr()) };
        Some(move |pname| {
            let mut value = 0;
            unsafe { get_integerv(pname, &mut value) };
            value
        })
    }
}

/// Opens the library, resolves `symbol_name`, and closes the library again.
///
/// Unlike `LoaderState::get_proc_address`, any name the library exports can be looked up.
pub fn resolve_proc_address<L>(loader: &mut L, symbol_name: &CStr) -> Option<ProcAddress>
where
    L: Loader,
{
    loader.open();
    let address = loader.resolve(symbol_name);
    loader.close();
    address
}

/// Reads the major and minor version through `get_integer`.
///
/// Fails if the query is missing, or if the reported version is negative or below the
/// supported floor.
pub fn negotiate<F>(get_integer: Option<F>) -> Result<GLVersion, Error>
where
    F: FnMut(GLenum) -> GLint,
{
    let mut get_integer = get_integer.ok_or(Error::GLFunctionNotFound(GET_INTEGERV))?;
    let major = get_integer(gl::MAJOR_VERSION);
    let minor = get_integer(gl::MINOR_VERSION);
    if major < GLint::from(MIN_MAJOR_VERSION) || minor < 0 {
        return Err(Error::UnsupportedGLVersion { major, minor });
    }
    let clamp = |value: GLint| u8::try_from(value).unwrap_or(u8::MAX);
    Ok(GLVersion::new(clamp(major), clamp(minor)))
}
