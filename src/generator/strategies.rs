// glloadgen/src/generator/strategies.rs
//
//! The C text of each loader strategy.
//!
//! Each strategy defines `open_libgl`, `close_libgl` and `get_proc` with the same semantics as
//! the runtime loaders in `crate::platform`.

use crate::config::Target;
use crate::platform::Platform;

use std::io;

/// The preprocessor condition selecting `platform` in the portable implementation. Unix is the
/// unconditional last branch.
fn platform_condition(platform: Platform) -> Option<&'static str> {
    match platform {
        Platform::Windows => Some("defined(_WIN32)"),
        Platform::MacOS => Some("defined(__APPLE__) || defined(__APPLE_CC__)"),
        Platform::Unix => None,
    }
}

/// Writes the strategies selected by `target`.
pub fn write_strategies<W>(target: Target, proc_t: &str, dest: &mut W) -> io::Result<()>
where
    W: io::Write,
{
    match target {
        Target::Only(platform) => write_strategy(platform, proc_t, dest),
        Target::Portable => {
            for (index, &platform) in Platform::ALL.iter().enumerate() {
                match (index, platform_condition(platform)) {
                    (_, None) => writeln!(dest, "#else")?,
                    (0, Some(condition)) => writeln!(dest, "#if {}", condition)?,
                    (_, Some(condition)) => writeln!(dest, "#elif {}", condition)?,
                }
                write_strategy(platform, proc_t, dest)?;
            }
            writeln!(dest, "#endif")
        }
    }
}

fn write_strategy<W>(platform: Platform, proc_t: &str, dest: &mut W) -> io::Result<()>
where
    W: io::Write,
{
    match platform {
        Platform::Windows => write_windows(proc_t, dest),
        Platform::MacOS => write_macos(proc_t, dest),
        Platform::Unix => write_unix(proc_t, dest),
    }
}

fn write_windows<W>(proc_t: &str, dest: &mut W) -> io::Result<()>
where
    W: io::Write,
{
    writeln!(
        dest,
        r#"#define WIN32_LEAN_AND_MEAN 1
#include <windows.h>

static HMODULE libgl;

static void open_libgl(void)
{{
	libgl = LoadLibraryA("opengl32.dll");
}}

static void close_libgl(void)
{{
	if (libgl)
		FreeLibrary(libgl);
	libgl = NULL;
}}

static {proc_t} get_proc(const char *proc)
{{
	{proc_t} res;

	res = ({proc_t})wglGetProcAddress(proc);
	if (res == ({proc_t})1 || res == ({proc_t})2 || res == ({proc_t})3 ||
	    res == ({proc_t})-1)
		res = NULL;
	if (!res && libgl)
		res = ({proc_t})GetProcAddress(libgl, proc);
	return res;
}}"#,
        proc_t = proc_t,
    )
}

fn write_macos<W>(proc_t: &str, dest: &mut W) -> io::Result<()>
where
    W: io::Write,
{
    writeln!(
        dest,
        r#"#include <CoreFoundation/CoreFoundation.h>

static CFBundleRef bundle;
static CFURLRef bundle_url;

static void open_libgl(void)
{{
	bundle_url = CFURLCreateWithFileSystemPath(kCFAllocatorDefault,
		CFSTR("/System/Library/Frameworks/OpenGL.framework"),
		kCFURLPOSIXPathStyle, true);
	if (bundle_url)
		bundle = CFBundleCreate(kCFAllocatorDefault, bundle_url);
}}

static void close_libgl(void)
{{
	if (bundle)
		CFRelease(bundle);
	if (bundle_url)
		CFRelease(bundle_url);
	bundle = NULL;
	bundle_url = NULL;
}}

static {proc_t} get_proc(const char *proc)
{{
	{proc_t} res = NULL;
	CFStringRef procname;

	if (!bundle)
		return NULL;
	procname = CFStringCreateWithCString(kCFAllocatorDefault, proc,
		kCFStringEncodingASCII);
	*(void **)(&res) = CFBundleGetFunctionPointerForName(bundle, procname);
	CFRelease(procname);
	return res;
}}"#,
        proc_t = proc_t,
    )
}

fn write_unix<W>(proc_t: &str, dest: &mut W) -> io::Result<()>
where
    W: io::Write,
{
    writeln!(
        dest,
        r#"#include <dlfcn.h>
#include <GL/glx.h>

static void *libgl;
static PFNGLXGETPROCADDRESSPROC glx_get_proc_address;

static void open_libgl(void)
{{
	libgl = dlopen("libGL.so.1", RTLD_LAZY | RTLD_GLOBAL);
	if (!libgl)
		libgl = dlopen("libGL.so", RTLD_LAZY | RTLD_GLOBAL);
	if (libgl)
		*(void **)(&glx_get_proc_address) = dlsym(libgl, "glXGetProcAddressARB");
}}

static void close_libgl(void)
{{
	if (libgl)
		dlclose(libgl);
	libgl = NULL;
	glx_get_proc_address = NULL;
}}

static {proc_t} get_proc(const char *proc)
{{
	{proc_t} res = NULL;

	if (!libgl)
		return NULL;
	if (glx_get_proc_address)
		res = ({proc_t})glx_get_proc_address((const GLubyte *)proc);
	if (!res)
		*(void **)(&res) = dlsym(libgl, proc);
	return res;
}}"#,
        proc_t = proc_t,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(target: Target) -> String {
        let mut dest = vec![];
        write_strategies(target, "glload_proc_t", &mut dest).unwrap();
        String::from_utf8(dest).unwrap()
    }

    #[test]
    fn test_portable_branch_order() {
        let text = render(Target::Portable);
        let windows = text.find("#if defined(_WIN32)").unwrap();
        let macos = text.find("#elif defined(__APPLE__) || defined(__APPLE_CC__)").unwrap();
        let unix = text.find("#else").unwrap();
        let end = text.rfind("#endif").unwrap();
        assert!(windows < macos && macos < unix && unix < end);
        assert_eq!(text.matches("static void open_libgl(void)").count(), 3);
    }

    #[test]
    fn test_single_strategy_has_no_conditionals() {
        let text = render(Target::Only(Platform::Unix));
        assert!(!text.contains("#if"));
        assert!(text.contains("glXGetProcAddressARB"));
        assert!(!text.contains("wglGetProcAddress"));
    }

    #[test]
    fn test_fallback_order() {
        let windows = render(Target::Only(Platform::Windows));
        assert!(windows.find("wglGetProcAddress(proc)") < windows.find("GetProcAddress(libgl"));

        let unix = render(Target::Only(Platform::Unix));
        assert!(unix.find("glx_get_proc_address((const") < unix.find("dlsym(libgl, proc)"));

        let macos = render(Target::Only(Platform::MacOS));
        assert_eq!(macos.matches("CFBundleGetFunctionPointerForName").count(), 1);
    }

    #[test]
    fn test_windows_discards_sentinel_addresses() {
        let windows = render(Target::Only(Platform::Windows));
        let filter = windows
            .find("if (res == (glload_proc_t)1 || res == (glload_proc_t)2 || res == (glload_proc_t)3 ||")
            .unwrap();
        assert!(windows.contains("res == (glload_proc_t)-1)\n\t\tres = NULL;"));
        assert!(windows.find("wglGetProcAddress(proc)").unwrap() < filter);
        assert!(filter < windows.find("GetProcAddress(libgl, proc)").unwrap());
    }
}
