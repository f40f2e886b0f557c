// glloadgen/src/platform/macos/mod.rs
//
//! Loading OpenGL from the system framework bundle on macOS.

pub mod loader;

pub use self::loader::BundleLoader as Loader;
