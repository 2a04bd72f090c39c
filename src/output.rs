//! Report formatting for the analysis pipeline

use crate::encode::lz4::Lz4Estimate;
use crate::encode::pjlz::PjlzEstimate;
use crate::matcher::{MatchSummary, MatchTable};
use crate::suffix::TextPos;
use serde::Serialize;
use std::io::{self, Write};
use std::time::Duration;
use termcolor::{Color, ColorChoice, ColorSpec, StandardStream, WriteColor};

/// How many bytes of each suffix/match the dump listings preview.
const DUMP_PREVIEW_LEN: usize = 16;

/// Wall-clock measurement of one pipeline stage.
#[derive(Debug, Clone, Serialize)]
pub struct StageTiming {
    pub stage: &'static str,
    pub millis: f64,
    pub mb_per_s: f64,
}

impl StageTiming {
    pub fn new(stage: &'static str, bytes: usize, elapsed: Duration) -> Self {
        let secs = elapsed.as_secs_f64();
        let mb_per_s = if secs > 0.0 {
            bytes as f64 / secs / 1024.0 / 1024.0
        } else {
            0.0
        };
        Self {
            stage,
            millis: secs * 1000.0,
            mb_per_s,
        }
    }
}

/// Everything the CLI reports, also emitted verbatim as JSON.
#[derive(Debug, Serialize)]
pub struct AnalysisReport {
    pub input: String,
    pub input_bytes: usize,
    pub min_match_len: usize,
    pub stages: Vec<StageTiming>,
    pub matches: MatchSummary,
    pub pjlz: PjlzEstimate,
    pub lz4: Lz4Estimate,
}

/// Print the report for humans.
pub fn print_report(report: &AnalysisReport) -> io::Result<()> {
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);

    heading(&mut stdout, "Match analysis")?;
    writeln!(stdout, "Input:            {}", report.input)?;
    writeln!(
        stdout,
        "Size:             {}",
        format_size(report.input_bytes as u64)
    )?;
    writeln!(stdout, "Min match length: {}", report.min_match_len)?;

    heading(&mut stdout, "Stage timings")?;
    for timing in &report.stages {
        writeln!(
            stdout,
            "  {:<16} {:>9.3} ms  {:>9.2} MB/s",
            timing.stage, timing.millis, timing.mb_per_s
        )?;
    }

    let matches = &report.matches;
    heading(&mut stdout, "Matches")?;
    writeln!(
        stdout,
        "  matched positions:  {} of {} ({:.1}%)",
        matches.matched,
        matches.positions,
        percent(matches.matched, matches.positions)
    )?;
    if matches.longest > 0 {
        writeln!(
            stdout,
            "  longest match:      {} bytes at position {}",
            matches.longest, matches.longest_at
        )?;
    }

    let pjlz = &report.pjlz;
    heading(&mut stdout, "pjlz encoding (varint offsets)")?;
    writeln!(
        stdout,
        "  {} matches / match bytes {} / literal bytes {}",
        pjlz.matches, pjlz.match_bytes, pjlz.literal_bytes
    )?;
    writeln!(
        stdout,
        "  offsets:     1-byte: {:>7} / 2-byte: {:>7} / 3-byte: {:>7} / 4-byte: {:>7}",
        pjlz.offset_byte_counts[0],
        pjlz.offset_byte_counts[1],
        pjlz.offset_byte_counts[2],
        pjlz.offset_byte_counts[3]
    )?;
    writeln!(
        stdout,
        "  lit lengths: 0-byte: {:>7} / 1-byte: {:>7} / 2-byte: {:>7} / 3-byte: {:>7} / 4-byte: {:>7}",
        pjlz.literal_len_byte_counts[0],
        pjlz.literal_len_byte_counts[1],
        pjlz.literal_len_byte_counts[2],
        pjlz.literal_len_byte_counts[3],
        pjlz.literal_len_byte_counts[4]
    )?;
    writeln!(
        stdout,
        "  match lens:  0-byte: {:>7} / 1-byte: {:>7} / 2-byte: {:>7} / 3-byte: {:>7} / 4-byte: {:>7}",
        pjlz.match_len_byte_counts[0],
        pjlz.match_len_byte_counts[1],
        pjlz.match_len_byte_counts[2],
        pjlz.match_len_byte_counts[3],
        pjlz.match_len_byte_counts[4]
    )?;
    writeln!(
        stdout,
        "  raw {} bytes -> encoded {} bytes ({:.3}%)",
        report.input_bytes,
        pjlz.encoded_len,
        pjlz.ratio(report.input_bytes)
    )?;

    let lz4 = &report.lz4;
    heading(&mut stdout, "lz4 encoding (two-byte offsets)")?;
    writeln!(
        stdout,
        "  {} matches / match bytes {} / literal bytes {}",
        lz4.matches, lz4.match_bytes, lz4.literal_bytes
    )?;
    writeln!(
        stdout,
        "  raw {} bytes -> encoded {} bytes ({:.3}%)",
        report.input_bytes,
        lz4.encoded_len,
        lz4.ratio(report.input_bytes)
    )?;

    Ok(())
}

/// List every suffix in rank order with a short preview.
pub fn dump_suffixes(text: &[u8], sa: &[TextPos]) -> io::Result<()> {
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);

    heading(&mut stdout, "Suffixes in sorted order")?;
    for (rank, &pos) in sa.iter().enumerate() {
        writeln!(
            stdout,
            "  rank {rank:>6} at position {pos:>6}: {}",
            preview(text, pos)
        )?;
    }

    Ok(())
}

/// List every position's recorded match with previews of both sides.
pub fn dump_matches(text: &[u8], table: &MatchTable) -> io::Result<()> {
    let mut stdout = StandardStream::stdout(ColorChoice::Auto);

    heading(&mut stdout, "Matches by position")?;
    for pos in 0..table.len() {
        write!(stdout, "  position {pos:>6}: {:<16} - ", preview(text, pos))?;
        match table.get(pos) {
            None => writeln!(stdout, "<no match>")?,
            Some(m) => writeln!(
                stdout,
                "best match at {:>6} len {:>6}: {}",
                pos - m.offset,
                m.len,
                preview(text, pos - m.offset)
            )?,
        }
    }

    Ok(())
}

fn heading(stdout: &mut StandardStream, title: &str) -> io::Result<()> {
    writeln!(stdout)?;
    stdout.set_color(ColorSpec::new().set_fg(Some(Color::Cyan)).set_bold(true))?;
    writeln!(stdout, "{title}")?;
    stdout.reset()
}

/// Printable preview of the bytes starting at `pos`.
fn preview(text: &[u8], pos: TextPos) -> String {
    let end = (pos + DUMP_PREVIEW_LEN).min(text.len());
    text[pos..end]
        .iter()
        .map(|&b| if (0x20..0x7f).contains(&b) { b as char } else { '.' })
        .collect()
}

fn percent(part: usize, whole: usize) -> f64 {
    if whole == 0 {
        0.0
    } else {
        part as f64 / whole as f64 * 100.0
    }
}

/// Human-readable byte count.
fn format_size(bytes: u64) -> String {
    const KB: u64 = 1024;
    const MB: u64 = KB * 1024;
    const GB: u64 = MB * 1024;

    if bytes >= GB {
        format!("{:.2} GB", bytes as f64 / GB as f64)
    } else if bytes >= MB {
        format!("{:.2} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.2} KB", bytes as f64 / KB as f64)
    } else {
        format!("{bytes} B")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_size() {
        assert_eq!(format_size(512), "512 B");
        assert_eq!(format_size(2048), "2.00 KB");
        assert_eq!(format_size(5 * 1024 * 1024), "5.00 MB");
    }

    #[test]
    fn test_preview_masks_unprintable() {
        assert_eq!(preview(b"ab\x00cd", 0), "ab.cd");
        assert_eq!(preview(b"ab\x00cd", 3), "cd");
        assert_eq!(preview(&[b'x'; 40], 0).len(), DUMP_PREVIEW_LEN);
    }

    #[test]
    fn test_stage_timing_throughput() {
        let timing = StageTiming::new("sort", 2 * 1024 * 1024, Duration::from_secs(1));
        assert_eq!(timing.stage, "sort");
        assert!((timing.mb_per_s - 2.0).abs() < 1e-9);
        assert!((timing.millis - 1000.0).abs() < 1e-9);
    }
}
