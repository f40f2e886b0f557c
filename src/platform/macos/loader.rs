// glloadgen/src/platform/macos/loader.rs
//
//! OpenGL function pointer loading via `CFBundleGetFunctionPointerForName`.

use crate::platform::{Loader, ProcAddress};

use objc2_core_foundation::{CFBundle, CFRetained, CFString, CFURLPathStyle, CFURL};
use std::ffi::CStr;
use std::ptr::NonNull;

static OPENGL_FRAMEWORK_PATH: &str = "/System/Library/Frameworks/OpenGL.framework";

/// Resolves entry points from `OpenGL.framework`. There is no fallback lookup.
pub struct BundleLoader {
    bundle_url: Option<CFRetained<CFURL>>,
    bundle: Option<CFRetained<CFBundle>>,
}

impl BundleLoader {
    #[inline]
    pub fn new() -> BundleLoader {
        BundleLoader { bundle_url: None, bundle: None }
    }
}

impl Default for BundleLoader {
    #[inline]
    fn default() -> BundleLoader {
        BundleLoader::new()
    }
}

impl Loader for BundleLoader {
    fn open(&mut self) {
        if self.bundle.is_some() {
            return;
        }
        unsafe {
            let path = CFString::from_str(OPENGL_FRAMEWORK_PATH);
            self.bundle_url = CFURL::with_file_system_path(
                None,
                Some(&*path),
                CFURLPathStyle::CFURLPOSIXPathStyle,
                true,
            );
            self.bundle = self
                .bundle_url
                .as_deref()
                .and_then(|bundle_url| CFBundle::new(None, Some(bundle_url)));
        }
        match self.bundle {
            Some(_) => debug!("opened {}", OPENGL_FRAMEWORK_PATH),
            None => warn!("unable to open {}; every lookup will miss", OPENGL_FRAMEWORK_PATH),
        }
    }

    #[inline]
    fn is_open(&self) -> bool {
        self.bundle.is_some()
    }

    fn resolve(&self, symbol_name: &CStr) -> Option<ProcAddress> {
        let bundle = self.bundle.as_deref()?;
        let symbol_name = symbol_name.to_str().ok()?;
        unsafe {
            let symbol_name = CFString::from_str(symbol_name);
            NonNull::new(bundle.function_pointer_for_name(Some(&*symbol_name)))
        }
    }

    fn close(&mut self) {
        // Dropping the retained references releases them.
        self.bundle = None;
        self.bundle_url = None;
    }
}
