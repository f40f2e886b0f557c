// glloadgen/src/bin/glloadgen.rs
//
//! Generates a single-header OpenGL loader from a GL header such as `glcorearb.h`.

use clap::{App, Arg, ArgMatches};
use glloadgen::{Error, GeneratorConfig, HeaderGenerator, Target};
use log::{debug, error, warn, LevelFilter};
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};
use std::process;

static APP_NAME: &str = "glloadgen";

fn main() {
    let matches = App::new(APP_NAME)
        .about("Generates a single-header OpenGL loader")
        .arg(
            Arg::with_name("INPUT")
                .index(1)
                .help("GL header to parse; reads stdin if omitted or `-`"),
        )
        .arg(
            Arg::with_name("output")
                .short("o")
                .long("output")
                .takes_value(true)
                .help("Output header; writes stdout if omitted"),
        )
        .arg(
            Arg::with_name("prefix")
                .long("prefix")
                .takes_value(true)
                .default_value(glloadgen::symbol::DEFAULT_LIBRARY_PREFIX)
                .help("Prefix of the generated identifiers"),
        )
        .arg(
            Arg::with_name("include")
                .long("include")
                .takes_value(true)
                .default_value(glloadgen::config::DEFAULT_INCLUDE)
                .help("Header the generated file includes for GL types"),
        )
        .arg(
            Arg::with_name("platform")
                .long("platform")
                .takes_value(true)
                .possible_values(&["portable", "windows", "macos", "unix"])
                .default_value("portable")
                .help("Loader strategies to emit"),
        )
        .arg(
            Arg::with_name("export-marker")
                .long("export-marker")
                .takes_value(true)
                .default_value(glloadgen::parser::DEFAULT_EXPORT_MARKER)
                .help("Token that starts an exported declaration"),
        )
        .arg(
            Arg::with_name("calling-convention")
                .long("calling-convention")
                .takes_value(true)
                .default_value(glloadgen::parser::DEFAULT_CALLING_CONVENTION)
                .help("Token that precedes the function name"),
        )
        .arg(
            Arg::with_name("verbose")
                .short("v")
                .long("verbose")
                .multiple(true)
                .help("Increases logging verbosity"),
        )
        .get_matches();

    init_logging(matches.occurrences_of("verbose"));

    if let Err(error) = run(&matches) {
        error!("{}", error);
        process::exit(1);
    }
}

fn init_logging(verbosity: u64) {
    let mut builder = env_logger::Builder::new();
    builder.filter_level(match verbosity {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Info,
        2 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    });
    builder.parse_default_env();
    builder.init();
}

fn config_from(matches: &ArgMatches) -> GeneratorConfig {
    let target = matches
        .value_of("platform")
        .and_then(|platform| platform.parse::<Target>().ok())
        .unwrap_or_default();
    let default = GeneratorConfig::default();
    GeneratorConfig::default()
        .with_library_prefix(matches.value_of("prefix").unwrap_or(&default.naming.library_prefix))
        .with_include(matches.value_of("include").unwrap_or(&default.include))
        .with_target(target)
        .with_markers(
            matches.value_of("export-marker").unwrap_or(&default.export_marker),
            matches.value_of("calling-convention").unwrap_or(&default.calling_convention),
        )
}

fn run(matches: &ArgMatches) -> Result<(), Error> {
    let config = config_from(matches);
    debug!("{:?}", config);

    let reader: Box<dyn BufRead> = match matches.value_of("INPUT") {
        None | Some("-") => Box::new(BufReader::new(io::stdin())),
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
    };
    let table = glloadgen::read_symbol_table(&config, reader)?;
    if table.is_empty() {
        warn!("no declarations matched; the generated loader will be empty");
    }

    let output = HeaderGenerator::new(config).generate(&table);
    match matches.value_of("output") {
        Some(path) => {
            glloadgen::write_if_changed(path, &output)?;
        }
        None => {
            let stdout = io::stdout();
            let mut stdout = stdout.lock();
            stdout.write_all(&output)?;
            stdout.flush()?;
        }
    }
    Ok(())
}
