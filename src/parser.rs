// glloadgen/src/parser.rs
//
//! Extraction of exported function names from header source.

use crate::Error;

use regex::Regex;
use std::io::BufRead;

/// The export marker used by the Khronos core profile headers.
pub const DEFAULT_EXPORT_MARKER: &str = "GLAPI";
/// The calling convention marker used by the Khronos core profile headers.
pub const DEFAULT_CALLING_CONVENTION: &str = "APIENTRY";

/// Matches exported function declarations of the form
/// `<export marker> ... <calling convention> <identifier>`.
///
/// The pattern is anchored at the start of the line, so declarations that are commented out or
/// indented are not matched.
#[derive(Clone, Debug)]
pub struct DeclarationPattern {
    regex: Regex,
}

impl DeclarationPattern {
    /// Builds a pattern from the two literal markers.
    pub fn new(export_marker: &str, calling_convention: &str) -> Result<DeclarationPattern, Error> {
        let source = format!(
            r"^{}.*{}\s+(\w+)",
            regex::escape(export_marker),
            regex::escape(calling_convention)
        );
        Ok(DeclarationPattern { regex: Regex::new(&source)? })
    }

    /// Returns the declared function name if `line` is an exported function declaration.
    pub fn match_line<'a>(&self, line: &'a str) -> Option<&'a str> {
        self.regex
            .captures(line)
            .and_then(|captures| captures.get(1))
            .map(|name| name.as_str())
    }
}

impl Default for DeclarationPattern {
    fn default() -> DeclarationPattern {
        DeclarationPattern::new(DEFAULT_EXPORT_MARKER, DEFAULT_CALLING_CONVENTION)
            .expect("default declaration markers form a valid pattern")
    }
}

/// Collects declared function names in the order they appear.
///
/// Repeated declarations are kept; `SymbolTable::build` removes them.
pub fn parse_lines<I, S>(pattern: &DeclarationPattern, lines: I) -> Vec<String>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut names = vec![];
    for line in lines {
        let line = line.as_ref();
        match pattern.match_line(line) {
            Some(name) => names.push(name.to_owned()),
            None => trace!("skipping line: {}", line),
        }
    }
    names
}

/// Reads the header from `reader` and collects declared function names.
pub fn parse_reader<R>(pattern: &DeclarationPattern, reader: R) -> Result<Vec<String>, Error>
where
    R: BufRead,
{
    let lines = reader.lines().collect::<Result<Vec<_>, _>>()?;
    let names = parse_lines(pattern, &lines);
    debug!("parsed {} declarations from {} lines", names.len(), lines.len());
    Ok(names)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_markers_are_matched_literally() {
        let pattern = DeclarationPattern::new("API.", "CALL+").unwrap();
        assert_eq!(pattern.match_line("API. void CALL+ fooBar (void);"), Some("fooBar"));
        assert_eq!(pattern.match_line("APIx void CALLL fooBar (void);"), None);
    }

    #[test]
    fn test_marker_without_identifier_is_skipped() {
        let pattern = DeclarationPattern::default();
        assert_eq!(pattern.match_line("GLAPI void APIENTRY"), None);
        assert_eq!(pattern.match_line("GLAPI void APIENTRY (void);"), None);
    }

    #[test]
    fn test_typedefs_are_not_declarations() {
        let pattern = DeclarationPattern::default();
        let header = "typedef void (APIENTRYP PFNGLCULLFACEPROC) (GLenum mode);\n\
                      #define GLAPI extern\n\
                      GLAPI void APIENTRY glCullFace (GLenum mode);\n";
        let names = parse_reader(&pattern, header.as_bytes()).unwrap();
        assert_eq!(names, vec!["glCullFace".to_owned()]);
    }
}
