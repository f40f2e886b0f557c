// glloadgen/src/platform/mod.rs
//
//! Platform-specific strategies for opening the OpenGL library and resolving entry points.
//!
//! Every strategy is a two-state machine: `open` acquires the library, `resolve` looks up one
//! symbol, and `close` releases the library again. Failing to open is not an error; the loader
//! stays usable and every subsequent lookup misses.

use std::ffi::CStr;
use std::os::raw::c_void;
use std::ptr::NonNull;

pub mod generic;

#[cfg(macos)]
pub mod macos;
#[cfg(macos)]
pub use self::macos as default;

#[cfg(linux)]
pub mod unix;
#[cfg(linux)]
pub use self::unix as default;

#[cfg(windows)]
pub mod windows;
#[cfg(windows)]
pub use self::windows as default;

/// The address of a resolved entry point.
pub type ProcAddress = NonNull<c_void>;

/// A strategy for resolving OpenGL entry points from the system library.
pub trait Loader {
    /// Acquires the library handle. Does nothing if the loader is already open.
    fn open(&mut self);

    /// Returns true if `open` succeeded and `close` has not been called since.
    fn is_open(&self) -> bool;

    /// Looks up one entry point. Returns `None` when the loader is closed or every lookup misses.
    fn resolve(&self, symbol_name: &CStr) -> Option<ProcAddress>;

    /// Releases the library handle. Safe to call in any state.
    fn close(&mut self);
}

/// The three families of loader strategy.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Platform {
    /// `opengl32.dll`, resolved through `wglGetProcAddress` then `GetProcAddress`.
    Windows,
    /// The `OpenGL.framework` bundle.
    MacOS,
    /// `libGL.so.1`, resolved through `glXGetProcAddressARB` then `dlsym`.
    Unix,
}

impl Platform {
    /// All platforms, in the order the portable implementation tests for them.
    pub const ALL: [Platform; 3] = [Platform::Windows, Platform::MacOS, Platform::Unix];

    /// The platform this crate was built for.
    #[inline]
    pub fn current() -> Platform {
        if cfg!(windows) {
            Platform::Windows
        } else if cfg!(macos) {
            Platform::MacOS
        } else {
            Platform::Unix
        }
    }
}
