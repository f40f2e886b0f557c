// glloadgen/src/generator/sections.rs
//
//! One function per section of the generated header.
//!
//! Every section that lists entry points iterates the same `SymbolTable`, so the declarations,
//! aliases, definitions and load sequence always agree on order.

use crate::config::GeneratorConfig;
use crate::loader::GET_INTEGERV;
use crate::symbol::SymbolTable;

use std::io;

/// Column width of the pointer type in declarations and definitions.
const POINTER_TYPE_WIDTH: usize = 52;
/// Column width of the canonical name in macro aliases.
const MACRO_ALIAS_WIDTH: usize = 45;

const UNLICENSE: &str = r#"/*

    This file was generated with glloadgen.

    This is free and unencumbered software released into the public domain.

    Anyone is free to copy, modify, publish, use, compile, sell, or
    distribute this software, either in source code form or as a compiled
    binary, for any purpose, commercial or non-commercial, and by any
    means.

    In jurisdictions that recognize copyright laws, the author or authors
    of this software dedicate any and all copyright interest in the
    software to the public domain. We make this dedication for the benefit
    of the public at large and to the detriment of our heirs and
    successors. We intend this dedication to be an overt act of
    relinquishment in perpetuity of all present and future rights to this
    software under copyright law.

    THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
    EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
    MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND NONINFRINGEMENT.
    IN NO EVENT SHALL THE AUTHORS BE LIABLE FOR ANY CLAIM, DAMAGES OR
    OTHER LIABILITY, WHETHER IN AN ACTION OF CONTRACT, TORT OR OTHERWISE,
    ARISING FROM, OUT OF OR IN CONNECTION WITH THE SOFTWARE OR THE USE OR
    OTHER DEALINGS IN THE SOFTWARE.

*/
"#;

pub fn write_license<W>(dest: &mut W) -> io::Result<()>
where
    W: io::Write,
{
    writeln!(dest, "{}", UNLICENSE)
}

/// Opens the include guard and declares the public entry points.
pub fn write_header_open<W>(config: &GeneratorConfig, dest: &mut W) -> io::Result<()>
where
    W: io::Write,
{
    let naming = &config.naming;
    writeln!(
        dest,
        r#"#ifndef {guard}_H
#define {guard}_H

#include "{include}"

#ifndef __gl_h_
#define __gl_h_
#endif

#ifdef __cplusplus
extern "C" {{
#endif

typedef void (*{proc_t})(void);

int {init}(void);
int {is_supported}(int major, int minor);
{proc_t} {get_proc_address}(const char *proc);
"#,
        guard = naming.guard_prefix(),
        include = config.include,
        proc_t = naming.prefixed("proc_t"),
        init = naming.prefixed("init"),
        is_supported = naming.prefixed("is_supported"),
        get_proc_address = naming.prefixed("get_proc_address"),
    )
}

/// One `extern` pointer declaration per entry point.
pub fn write_declarations<W>(table: &SymbolTable, dest: &mut W) -> io::Result<()>
where
    W: io::Write,
{
    for descriptor in table {
        writeln!(
            dest,
            "extern {:<width$} {};",
            descriptor.pointer_type,
            descriptor.loader_name,
            width = POINTER_TYPE_WIDTH,
        )?;
    }
    writeln!(dest)
}

/// One `#define` per entry point so callers can use the canonical names.
pub fn write_macro_aliases<W>(table: &SymbolTable, dest: &mut W) -> io::Result<()>
where
    W: io::Write,
{
    for descriptor in table {
        writeln!(
            dest,
            "#define {:<width$} {}",
            descriptor.macro_alias,
            descriptor.loader_name,
            width = MACRO_ALIAS_WIDTH,
        )?;
    }
    Ok(())
}

pub fn write_header_close<W>(config: &GeneratorConfig, dest: &mut W) -> io::Result<()>
where
    W: io::Write,
{
    writeln!(
        dest,
        r#"
#ifdef __cplusplus
}}
#endif

#endif // {guard}_H

#ifdef {guard}_IMPLEMENTATION
"#,
        guard = config.naming.guard_prefix(),
    )
}

/// The version negotiator and the public entry points.
///
/// When the table has no `glGetIntegerv`, negotiation always fails.
pub fn write_negotiator<W>(
    config: &GeneratorConfig,
    table: &SymbolTable,
    dest: &mut W,
) -> io::Result<()>
where
    W: io::Write,
{
    let naming = &config.naming;
    writeln!(
        dest,
        r#"
static struct {{
	int major, minor;
}} version;
"#
    )?;

    if table.get(GET_INTEGERV).is_some() {
        writeln!(
            dest,
            r#"static int parse_version(void)
{{
	if (!glGetIntegerv)
		return -1;

	glGetIntegerv(GL_MAJOR_VERSION, &version.major);
	glGetIntegerv(GL_MINOR_VERSION, &version.minor);

	if (version.major < 3)
		return -1;
	return 0;
}}"#
        )?;
    } else {
        writeln!(
            dest,
            r#"static int parse_version(void)
{{
	return -1;
}}"#
        )?;
    }

    writeln!(
        dest,
        r#"
static void load_procs(void);

int {init}(void)
{{
	int res;

	open_libgl();
	load_procs();
	res = parse_version();
	close_libgl();
	return res;
}}

int {is_supported}(int major, int minor)
{{
	if (version.major < 3)
		return 0;
	if (version.major == major)
		return version.minor >= minor;
	return version.major >= major;
}}

{proc_t} {get_proc_address}(const char *proc)
{{
	{proc_t} res;

	open_libgl();
	res = get_proc(proc);
	close_libgl();
	return res;
}}
"#,
        init = naming.prefixed("init"),
        is_supported = naming.prefixed("is_supported"),
        proc_t = naming.prefixed("proc_t"),
        get_proc_address = naming.prefixed("get_proc_address"),
    )
}

/// One pointer definition per entry point.
pub fn write_proc_definitions<W>(table: &SymbolTable, dest: &mut W) -> io::Result<()>
where
    W: io::Write,
{
    for descriptor in table {
        writeln!(
            dest,
            "{:<width$} {};",
            descriptor.pointer_type,
            descriptor.loader_name,
            width = POINTER_TYPE_WIDTH,
        )?;
    }
    Ok(())
}

/// The routine resolving every entry point in table order.
pub fn write_load_procs<W>(table: &SymbolTable, dest: &mut W) -> io::Result<()>
where
    W: io::Write,
{
    writeln!(dest, "\nstatic void load_procs(void)\n{{")?;
    for descriptor in table {
        writeln!(
            dest,
            "\t{} = ({})get_proc(\"{}\");",
            descriptor.loader_name, descriptor.pointer_type, descriptor.name,
        )?;
    }
    writeln!(dest, "}}")
}

pub fn write_implementation_close<W>(config: &GeneratorConfig, dest: &mut W) -> io::Result<()>
where
    W: io::Write,
{
    writeln!(dest, "\n#endif // {}_IMPLEMENTATION", config.naming.guard_prefix())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::symbol::Naming;

    fn render<F>(section: F) -> String
    where
        F: FnOnce(&mut Vec<u8>) -> io::Result<()>,
    {
        let mut dest = vec![];
        section(&mut dest).unwrap();
        String::from_utf8(dest).unwrap()
    }

    #[test]
    fn test_declarations_are_column_aligned() {
        let table = SymbolTable::build(["glClear", "glDrawArrays"], &Naming::default()).unwrap();
        let text = render(|dest| write_declarations(&table, dest));
        let lines: Vec<&str> = text.lines().filter(|line| !line.is_empty()).collect();
        assert_eq!(lines.len(), 2);
        for line in &lines {
            assert_eq!(line.find("glload_"), Some("extern ".len() + POINTER_TYPE_WIDTH + 1));
        }
    }

    #[test]
    fn test_negotiator_without_introspection_always_fails() {
        let config = GeneratorConfig::default();
        let table = SymbolTable::build(["glClear"], &config.naming).unwrap();
        let text = render(|dest| write_negotiator(&config, &table, dest));
        assert!(!text.contains("glGetIntegerv"));
        assert!(text.contains("static int parse_version(void)\n{\n\treturn -1;\n}"));
    }

    #[test]
    fn test_is_supported_floors_the_negotiated_version() {
        let config = GeneratorConfig::default();
        let table = SymbolTable::build(["glGetIntegerv"], &config.naming).unwrap();
        let text = render(|dest| write_negotiator(&config, &table, dest));
        let body = &text[text.find("int glload_is_supported(int major, int minor)").unwrap()..];
        let body = &body[..body.find("\n}").unwrap()];
        assert!(body.contains("if (version.major < 3)\n\t\treturn 0;"));
        assert!(!body.contains("if (major < 3)"));
    }

    #[test]
    fn test_empty_table_still_defines_load_procs() {
        let text = render(|dest| write_load_procs(&SymbolTable::default(), dest));
        assert_eq!(text, "\nstatic void load_procs(void)\n{\n}\n");
    }
}
