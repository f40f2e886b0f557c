// glloadgen/src/platform/unix/mod.rs
//
//! Loading OpenGL through the dynamic loader on Unix-like systems.

pub mod loader;

pub use self::loader::DlLoader as Loader;
