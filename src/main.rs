//! # chatstats CLI
//!
//! Command-line interface for the chatstats library.

use std::path::Path;
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing::info;

use chatstats::ChatstatsError;
use chatstats::cli::Args;
use chatstats::config::ReportConfig;
use chatstats::core::{ChatReport, apply_filters};
use chatstats::format::write_to_format;
use chatstats::logging;
use chatstats::parser::LogParser;

fn main() {
    if let Err(e) = run() {
        eprintln!("❌ Error: {e}");
        process::exit(1);
    }
}

fn run() -> Result<(), ChatstatsError> {
    let total_start = Instant::now();
    let args = <Args as ClapParser>::parse();
    logging::init(args.log_level());

    let (output_path, format) = args.resolve_output()?;
    let filter_config = args.filter_config()?;
    let parser = LogParser::with_config(args.parser_config());

    println!("📊 chatstats v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Input:   {}", args.input);
    println!("💾 Output:  {output_path}");
    println!("📄 Format:  {format}");
    if let Some(after) = &args.after {
        println!("📅 After:   {after}");
    }
    if let Some(before) = &args.before {
        println!("📅 Before:  {before}");
    }
    if let Some(from) = &args.from {
        println!("👤 From:    {from}");
    }
    println!();

    println!("⏳ Parsing...");
    let parse_start = Instant::now();
    let (records, summary) = parser.parse_with_summary(Path::new(&args.input))?;
    println!(
        "   Found {} messages in {} lines ({:.2}s)",
        summary.records,
        summary.lines,
        parse_start.elapsed().as_secs_f64()
    );
    info!(
        orphans = summary.orphans,
        edited_markers = summary.edited_markers,
        continuations = summary.continuations,
        "line classification"
    );

    let records = if filter_config.is_active() {
        println!("🔍 Filtering messages...");
        let filtered = apply_filters(records, &filter_config);
        println!("   {} messages after filtering", filtered.len());
        filtered
    } else {
        records
    };

    println!("🧮 Computing statistics...");
    let stats_start = Instant::now();
    let report = ChatReport::build(&records, &ReportConfig::default());
    println!(
        "   {} users, {} active days ({:.2}s)",
        report.totals.authors,
        report.totals.active_days,
        stats_start.elapsed().as_secs_f64()
    );

    println!("💾 Writing {format}...");
    write_to_format(&report, &output_path, format)?;

    println!();
    println!("✅ Done! Report saved to {output_path}");
    println!(
        "   Total time: {:.2}s",
        total_start.elapsed().as_secs_f64()
    );

    Ok(())
}
