// glloadgen/src/platform/unix/loader.rs
//
//! OpenGL function pointer loading via `dlopen` and `glXGetProcAddressARB`.

use crate::platform::generic::resolve_with_fallback;
use crate::platform::{Loader, ProcAddress};

use libc::{dlclose, dlopen, dlsym, RTLD_GLOBAL, RTLD_LAZY};
use std::ffi::CStr;
use std::mem;
use std::os::raw::{c_uchar, c_void};
use std::ptr;

static LIBGL_SONAMES: [&CStr; 2] = [c"libGL.so.1", c"libGL.so"];

type GLXGetProcAddressFn = unsafe extern "C" fn(*const c_uchar) -> *const c_void;

/// Resolves entry points from `libGL`, preferring the GLX extension lookup.
pub struct DlLoader {
    handle: *mut c_void,
    glx_get_proc_address: Option<GLXGetProcAddressFn>,
}

impl DlLoader {
    #[inline]
    pub fn new() -> DlLoader {
        DlLoader { handle: ptr::null_mut(), glx_get_proc_address: None }
    }
}

impl Default for DlLoader {
    #[inline]
    fn default() -> DlLoader {
        DlLoader::new()
    }
}

impl Loader for DlLoader {
    fn open(&mut self) {
        if !self.handle.is_null() {
            return;
        }
        for soname in LIBGL_SONAMES {
            let handle = unsafe { dlopen(soname.as_ptr(), RTLD_LAZY | RTLD_GLOBAL) };
            if !handle.is_null() {
                debug!("opened {:?}", soname);
                self.handle = handle;
                break;
            }
        }
        if self.handle.is_null() {
            warn!("unable to open libGL; every lookup will miss");
            return;
        }
        unsafe {
            let function = dlsym(self.handle, c"glXGetProcAddressARB".as_ptr());
            self.glx_get_proc_address =
                mem::transmute::<*mut c_void, Option<GLXGetProcAddressFn>>(function);
        }
        if self.glx_get_proc_address.is_none() {
            debug!("glXGetProcAddressARB unavailable; falling back to dlsym only");
        }
    }

    #[inline]
    fn is_open(&self) -> bool {
        !self.handle.is_null()
    }

    fn resolve(&self, symbol_name: &CStr) -> Option<ProcAddress> {
        // A null handle would make `dlsym` search the global scope.
        if self.handle.is_null() {
            return None;
        }
        resolve_with_fallback(
            symbol_name,
            |name| match self.glx_get_proc_address {
                Some(glx_get_proc_address) => unsafe {
                    glx_get_proc_address(name.as_ptr() as *const c_uchar)
                },
                None => ptr::null(),
            },
            |name| unsafe { dlsym(self.handle, name.as_ptr()).cast_const() },
        )
    }

    fn close(&mut self) {
        if self.handle.is_null() {
            return;
        }
        unsafe {
            dlclose(self.handle);
        }
        self.handle = ptr::null_mut();
        self.glx_get_proc_address = None;
    }
}

impl Drop for DlLoader {
    fn drop(&mut self) {
        self.close();
    }
}
