//! Reading and writing tracks.
//!
//! Text tracks are integers separated by whitespace and/or commas. WAV
//! tracks are integer PCM, one band per sample.

use std::fs::File;
use std::io::{BufReader, Read, Write};
use std::path::Path;

use tracing::debug;

use crate::error::TrackError;

pub fn parse_track(input: &str) -> Result<Vec<i32>, TrackError> {
    input
        .split(|c: char| c == ',' || c.is_ascii_whitespace())
        .filter(|token| !token.is_empty())
        .enumerate()
        .map(|(position, token)| {
            token.parse::<i32>().map_err(|_| TrackError::Parse {
                position,
                token: token.to_string(),
            })
        })
        .collect()
}

pub fn read_track<R: Read>(mut reader: R) -> Result<Vec<i32>, TrackError> {
    let mut input = String::new();
    reader.read_to_string(&mut input)?;
    parse_track(&input)
}

pub fn open_track<P: AsRef<Path>>(path: P) -> Result<Vec<i32>, TrackError> {
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| TrackError::Open {
        path: path.display().to_string(),
        source,
    })?;
    read_track(BufReader::new(file))
}

pub fn format_track(track: &[i32]) -> String {
    track
        .iter()
        .map(|band| band.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn write_track<W: Write>(mut writer: W, track: &[i32]) -> Result<(), TrackError> {
    writeln!(writer, "{}", format_track(track))?;
    Ok(())
}

/// Read every sample of an integer PCM WAV file, channels interleaved.
pub fn read_wav<P: AsRef<Path>>(path: P) -> Result<(Vec<i32>, hound::WavSpec), TrackError> {
    let reader = hound::WavReader::open(path)?;
    let spec = reader.spec();
    if spec.sample_format != hound::SampleFormat::Int {
        return Err(TrackError::UnsupportedFormat(spec.sample_format));
    }

    let track = reader
        .into_samples::<i32>()
        .collect::<Result<Vec<_>, _>>()?;
    debug!(
        samples = track.len(),
        channels = spec.channels,
        bits = spec.bits_per_sample,
        "read wav track"
    );
    Ok((track, spec))
}

pub fn write_wav<P: AsRef<Path>>(
    path: P,
    spec: hound::WavSpec,
    track: &[i32],
) -> Result<(), TrackError> {
    if spec.sample_format != hound::SampleFormat::Int {
        return Err(TrackError::UnsupportedFormat(spec.sample_format));
    }

    // Checked up front so a failing write never creates or truncates `path`.
    check_sample_width(track, spec.bits_per_sample)?;

    let mut writer = hound::WavWriter::create(path, spec)?;
    for &band in track {
        writer.write_sample(band)?;
    }
    writer.finalize()?;
    Ok(())
}

fn check_sample_width(track: &[i32], bits: u16) -> Result<(), TrackError> {
    // hound rejects zero-width specs itself.
    if bits == 0 || bits >= 32 {
        return Ok(());
    }
    let max = (1i64 << (bits - 1)) - 1;
    let min = -(1i64 << (bits - 1));
    match track
        .iter()
        .position(|&band| i64::from(band) < min || i64::from(band) > max)
    {
        Some(position) => Err(TrackError::SampleTooWide {
            position,
            band: track[position],
            bits,
        }),
        None => Ok(()),
    }
}
