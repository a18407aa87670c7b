#[macro_use]
extern crate clap;

use std::error;
use std::io;
use std::path::Path;
use std::process;

use clap::{App, AppSettings, Arg, ArgMatches, ErrorKind};
use tracing::info;

use bandclamp::config::{Config, Overrides};
use bandclamp::logging::init_tracing;
use bandclamp::track::{open_track, parse_track, read_track, read_wav, write_track, write_wav};

fn app() -> App<'static, 'static> {
    App::new("bandclamp")
        .version(crate_version!())
        .about("Clamps a track of frequency bands into a lower/upper range")
        .setting(AppSettings::AllowNegativeNumbers)
        .arg(Arg::with_name("lower")
            .short("l")
            .long("lower")
            .takes_value(true)
            .help("Lower band (default 40)"))
        .arg(Arg::with_name("upper")
            .short("u")
            .long("upper")
            .takes_value(true)
            .help("Upper band (default 1000)"))
        .arg(Arg::with_name("config")
            .short("c")
            .long("config")
            .takes_value(true)
            .help("TOML config file"))
        .arg(Arg::with_name("input")
            .short("i")
            .long("input")
            .takes_value(true)
            .conflicts_with_all(&["values", "wav-in"])
            .help("Read the track from a text file, '-' for stdin"))
        .arg(Arg::with_name("wav-in")
            .long("wav-in")
            .takes_value(true)
            .conflicts_with("values")
            .help("Read the track from an integer PCM WAV file"))
        .arg(Arg::with_name("wav-out")
            .long("wav-out")
            .takes_value(true)
            .requires("wav-in")
            .help("Write the adjusted track as WAV"))
        .arg(Arg::with_name("lenient")
            .long("lenient")
            .help("Accept a lower band above the upper band"))
        .arg(Arg::with_name("values")
            .multiple(true)
            .help("Band values"))
}

/// Help and version go to stdout with status 0; usage errors exit with 2.
fn exit_usage(e: clap::Error) -> ! {
    match e.kind {
        ErrorKind::HelpDisplayed | ErrorKind::VersionDisplayed => e.exit(),
        _ => {
            eprintln!("{}", e.message);
            process::exit(2);
        }
    }
}

fn int_arg(matches: &ArgMatches, name: &str) -> Option<i32> {
    if matches.is_present(name) {
        Some(value_t!(matches, name, i32).unwrap_or_else(|e| exit_usage(e)))
    } else {
        None
    }
}

fn run(matches: &ArgMatches) -> Result<(), Box<dyn error::Error>> {
    let overrides = Overrides {
        lower: int_arg(matches, "lower"),
        upper: int_arg(matches, "upper"),
        lenient: matches.is_present("lenient"),
    };
    let config = Config::load(matches.value_of("config").map(Path::new), &overrides)?;
    let bands = config.bands()?;

    if let Some(wav_in) = matches.value_of("wav-in") {
        let (track, spec) = read_wav(wav_in)?;
        let adjusted = bands.apply(&track);
        info!(
            samples = adjusted.len(),
            lower = bands.lower,
            upper = bands.upper,
            "clamped wav track"
        );

        match matches.value_of("wav-out") {
            Some(wav_out) => write_wav(wav_out, spec, &adjusted)?,
            None => write_track(io::stdout().lock(), &adjusted)?,
        }
        return Ok(());
    }

    let track = if let Some(values) = matches.values_of("values") {
        parse_track(&values.collect::<Vec<_>>().join(" "))?
    } else {
        match matches.value_of("input") {
            Some("-") | None => read_track(io::stdin().lock())?,
            Some(path) => open_track(path)?,
        }
    };

    let adjusted = bands.apply(&track);
    info!(
        bands = adjusted.len(),
        lower = bands.lower,
        upper = bands.upper,
        "clamped track"
    );

    write_track(io::stdout().lock(), &adjusted)?;
    Ok(())
}

fn main() {
    init_tracing();

    let matches = app().get_matches_safe().unwrap_or_else(|e| exit_usage(e));
    if let Err(e) = run(&matches) {
        eprintln!("bandclamp: {}", e);
        process::exit(1);
    }
}
