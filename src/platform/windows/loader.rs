// glloadgen/src/platform/windows/loader.rs
//
//! OpenGL function pointer loading via `wglGetProcAddress` and `GetProcAddress`.

use crate::platform::generic::resolve_with_fallback;
use crate::platform::{Loader, ProcAddress};

use std::ffi::CStr;
use std::os::raw::c_void;
use std::ptr;
use winapi::shared::minwindef::HMODULE;
use winapi::um::libloaderapi::{FreeLibrary, GetProcAddress, LoadLibraryA};
use winapi::um::wingdi::wglGetProcAddress;

/// Resolves entry points from `opengl32.dll`, preferring the ICD lookup.
pub struct WglLoader {
    module: HMODULE,
}

impl WglLoader {
    #[inline]
    pub fn new() -> WglLoader {
        WglLoader { module: ptr::null_mut() }
    }
}

impl Default for WglLoader {
    #[inline]
    fn default() -> WglLoader {
        WglLoader::new()
    }
}

// Some drivers return small sentinel values instead of null for unknown entry points.
fn wgl_proc_address(symbol_name: &CStr) -> *const c_void {
    let address = unsafe { wglGetProcAddress(symbol_name.as_ptr()) } as isize;
    match address {
        -1 | 0 | 1 | 2 | 3 => ptr::null(),
        _ => address as *const c_void,
    }
}

impl Loader for WglLoader {
    fn open(&mut self) {
        if !self.module.is_null() {
            return;
        }
        self.module = unsafe { LoadLibraryA(c"opengl32.dll".as_ptr()) };
        if self.module.is_null() {
            warn!("opengl32.dll not found; every lookup will miss");
        } else {
            debug!("opengl32.dll loaded");
        }
    }

    #[inline]
    fn is_open(&self) -> bool {
        !self.module.is_null()
    }

    fn resolve(&self, symbol_name: &CStr) -> Option<ProcAddress> {
        if self.module.is_null() {
            return None;
        }
        resolve_with_fallback(symbol_name, wgl_proc_address, |name| unsafe {
            GetProcAddress(self.module, name.as_ptr()) as *const c_void
        })
    }

    fn close(&mut self) {
        if self.module.is_null() {
            return;
        }
        unsafe {
            FreeLibrary(self.module);
        }
        self.module = ptr::null_mut();
    }
}

impl Drop for WglLoader {
    fn drop(&mut self) {
        self.close();
    }
}
