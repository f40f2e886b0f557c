// glloadgen/build.rs
//
//! The `glloadgen` build script.

use cfg_aliases::cfg_aliases;
use gl_generator::{Api, Fallbacks, Profile, Registry, StructGenerator};
use std::env;
use std::fs::File;
use std::path::PathBuf;

fn main() {
    // Setup aliases for #[cfg] checks
    cfg_aliases! {
        // Platforms
        windows: { target_os = "windows" },
        macos: { target_os = "macos" },
        linux: { all(unix, not(macos)) },
    }

    let dest = PathBuf::from(&env::var("OUT_DIR").unwrap());

    // GL bindings supply the enumerants and types the version negotiator queries with.
    let mut file = File::create(dest.join("gl_bindings.rs")).unwrap();
    let registry = Registry::new(Api::Gl, (3, 3), Profile::Core, Fallbacks::All, []);
    registry.write_bindings(StructGenerator, &mut file).unwrap();
}
