// glloadgen/src/platform/generic/fallback.rs
//
//! Two-step symbol resolution.
//!
//! Window-system extension lookups (`wglGetProcAddress`, `glXGetProcAddressARB`) expose entry
//! points the base dynamic loader may not, and vice versa, so the extension path is tried first
//! and the plain export lookup second.

use crate::platform::ProcAddress;

use std::ffi::CStr;
use std::os::raw::c_void;
use std::ptr::NonNull;

/// Returns the primary lookup's result if non-null, else the secondary lookup's result.
///
/// The secondary lookup is not invoked when the primary one succeeds.
pub fn resolve_with_fallback<P, S>(
    symbol_name: &CStr,
    primary: P,
    secondary: S,
) -> Option<ProcAddress>
where
    P: FnOnce(&CStr) -> *const c_void,
    S: FnOnce(&CStr) -> *const c_void,
{
    if let Some(address) = NonNull::new(primary(symbol_name) as *mut c_void) {
        return Some(address);
    }
    let address = NonNull::new(secondary(symbol_name) as *mut c_void);
    if address.is_none() {
        trace!("no address for {:?}", symbol_name);
    }
    address
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::ptr;

    #[test]
    fn test_primary_hit_skips_secondary() {
        let secondary_called = Cell::new(false);
        let address = resolve_with_fallback(
            c"glClear",
            |_| 0x10 as *const c_void,
            |_| {
                secondary_called.set(true);
                0x20 as *const c_void
            },
        );
        assert_eq!(address.map(|address| address.as_ptr() as usize), Some(0x10));
        assert!(!secondary_called.get());
    }

    #[test]
    fn test_both_miss() {
        assert!(resolve_with_fallback(c"glClear", |_| ptr::null(), |_| ptr::null()).is_none());
    }
}
