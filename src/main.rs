use anyhow::Result;
use clap::Parser;
use samf::encode::{lz4, pjlz};
use samf::matcher::{find_matches, find_matches_traced, MatchConfig, WatchTrace};
use samf::output::{self, AnalysisReport, StageTiming};
use samf::suffix::{build_lcp_array, build_suffix_array, invert_suffix_array};
use samf::{input, progress, verify};
use std::path::PathBuf;
use std::time::{Duration, Instant};

#[derive(Parser)]
#[command(name = "samf")]
#[command(about = "Suffix-array based repeated-substring match finder")]
struct Cli {
    /// Input file to analyze
    input: PathBuf,

    /// Minimum match length worth recording
    #[arg(short, long, default_value_t = 4)]
    min_match_len: usize,

    /// Re-check every stage against the brute-force reference
    #[arg(long)]
    verify: bool,

    /// Print match-finder decisions for one buffer position
    #[arg(long, value_name = "POS")]
    watch: Option<usize>,

    /// Dump the sorted suffixes and the per-position matches
    #[arg(long)]
    dump: bool,

    /// Emit the report as JSON
    #[arg(long)]
    json: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Reject bad configuration before any stage runs.
    let config = MatchConfig {
        min_match_len: cli.min_match_len,
    };
    config.validate()?;

    let mut stages = Vec::new();

    let (buffer, elapsed) = timed(|| input::slurp(&cli.input));
    let buffer = buffer?;
    let text = &buffer[..];
    stages.push(StageTiming::new("load", text.len(), elapsed));

    let spinner = progress::spinner("Sorting suffixes...");
    let (sa, elapsed) = timed(|| build_suffix_array(text));
    spinner.finish_and_clear();
    stages.push(StageTiming::new("suffix sort", text.len(), elapsed));
    if cli.verify {
        verify::check_suffix_array(text, &sa)?;
    }

    let (isa, elapsed) = timed(|| invert_suffix_array(&sa));
    stages.push(StageTiming::new("inverse", text.len(), elapsed));
    if cli.verify {
        verify::check_inverse_suffix_array(&sa, &isa)?;
    }

    let (lcp, elapsed) = timed(|| build_lcp_array(text, &sa, &isa));
    stages.push(StageTiming::new("lcp (kasai)", text.len(), elapsed));
    if cli.verify {
        verify::check_lcp_array(text, &sa, &lcp)?;
    }

    let (table, elapsed) = timed(|| match cli.watch {
        Some(pos) => find_matches_traced(&sa, &lcp, &config, &mut WatchTrace::new(pos)),
        None => find_matches(&sa, &lcp, &config),
    });
    stages.push(StageTiming::new("match finder", text.len(), elapsed));
    if cli.verify {
        verify::check_match_table(text, &table, &config)?;
    }

    if cli.dump {
        output::dump_suffixes(text, &sa)?;
        output::dump_matches(text, &table)?;
    }

    let report = AnalysisReport {
        input: cli.input.display().to_string(),
        input_bytes: text.len(),
        min_match_len: config.min_match_len,
        stages,
        matches: table.summary(),
        pjlz: pjlz::estimate(text, &table, config.min_match_len),
        lz4: lz4::estimate(text, &table, config.min_match_len),
    };

    if cli.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        output::print_report(&report)?;
    }

    Ok(())
}

fn timed<T>(f: impl FnOnce() -> T) -> (T, Duration) {
    let start = Instant::now();
    let value = f();
    (value, start.elapsed())
}
