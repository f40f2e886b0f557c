// glloadgen/src/info.rs
//
//! OpenGL version information.

/// The lowest major version the loader recognizes.
pub const MIN_MAJOR_VERSION: u8 = 3;

/// Describes the OpenGL version reported by the loaded library.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct GLVersion {
    /// The major OpenGL version (e.g. 4 in 4.2).
    pub major: u8,
    /// The minor OpenGL version (e.g. 2 in 4.2).
    pub minor: u8,
}

impl GLVersion {
    /// Creates a GL version structure with the given major and minor version numbers.
    #[inline]
    pub fn new(major: u8, minor: u8) -> GLVersion {
        GLVersion { major, minor }
    }

    /// Returns true if this version is at least `major.minor`.
    ///
    /// Versions below `MIN_MAJOR_VERSION` never support anything.
    pub fn supports(&self, major: u8, minor: u8) -> bool {
        if self.major < MIN_MAJOR_VERSION {
            return false;
        }
        if self.major == major {
            return self.minor >= minor;
        }
        self.major > major
    }
}
