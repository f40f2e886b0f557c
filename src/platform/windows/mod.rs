// glloadgen/src/platform/windows/mod.rs
//
//! Loading OpenGL from `opengl32.dll` on Windows.

pub mod loader;

pub use self::loader::WglLoader as Loader;
