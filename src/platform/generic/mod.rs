// glloadgen/src/platform/generic/mod.rs
//
//! Resolution logic shared by more than one platform.

pub mod fallback;

pub use self::fallback::resolve_with_fallback;
