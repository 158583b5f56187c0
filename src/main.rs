//! # chatstats CLI
//!
//! Command-line interface for the chatstats library.

use std::fmt::Write as _;
use std::fs;
use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;
use tracing_subscriber::EnvFilter;

use chatstats::ChatStatsError;
use chatstats::analysis::{Analyzer, Report, StopWords};
use chatstats::cli::{Args, OutputFormat};
use chatstats::config::AnalysisConfig;
use chatstats::core::filter::UserFilter;
use chatstats::core::output::{to_json, write_csv};
use chatstats::parser::{ParseSummary, TranscriptParser};

fn main() {
    let args = <Args as ClapParser>::parse();

    let filter = if args.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();

    if let Err(e) = run(&args) {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), ChatStatsError> {
    let total_start = Instant::now();
    // JSON on stdout must stay machine-readable
    let chatty = args.format == OutputFormat::Text || args.output.is_some();

    let filter_config = args.filter_config()?;
    let config = match args.config {
        Some(ref path) => AnalysisConfig::from_json_file(path)?,
        None => AnalysisConfig::default(),
    };
    let stopwords = match args.stopwords {
        Some(ref path) => StopWords::load(path)?,
        None => StopWords::empty(),
    };

    if chatty {
        println!("📊 chatstats v{}", env!("CARGO_PKG_VERSION"));
        println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
        println!("📂 Input:   {}", args.input.display());
        println!("👤 User:    {}", filter_config.user);
        println!("📄 Format:  {}", args.format);
        if let Some(ref after) = args.after {
            println!("📅 After:   {}", after);
        }
        if let Some(ref before) = args.before {
            println!("📅 Before:  {}", before);
        }
        println!();
    }

    let parse_start = Instant::now();
    let parsed = TranscriptParser::new().parse(&args.input)?;
    let parse_time = parse_start.elapsed();

    if chatty {
        print_parse_summary(parsed.summary(), parsed.len(), parse_time.as_secs_f64());
    }

    if args.list_users {
        for choice in UserFilter::choices(parsed.records()) {
            println!("{}", choice);
        }
        return Ok(());
    }

    if let Some(ref path) = args.records {
        write_csv(parsed.records(), path)?;
        if chatty {
            println!("💾 Records written to {}", path.display());
        }
    }

    let analyzer = Analyzer::with_config(&stopwords, config);
    let report = analyzer.report(parsed.records(), &filter_config);

    let rendered = match args.format {
        OutputFormat::Text => render_text(&report),
        OutputFormat::Json => to_json(&report)?,
    };

    match args.output {
        Some(ref path) => {
            fs::write(path, rendered + "\n")?;
            println!("✅ Done! Report saved to {}", path.display());
        }
        None => println!("{}", rendered),
    }

    if chatty {
        println!();
        println!("⚡ Total time: {:.2}s", total_start.elapsed().as_secs_f64());
    }

    Ok(())
}

fn print_parse_summary(summary: &ParseSummary, records: usize, secs: f64) {
    let format = summary
        .date_format
        .map_or_else(|| "-".to_string(), |f| f.to_string());
    println!("⏳ Parsed {} segments ({:.2}s)", summary.segments, secs);
    println!("   Date format:    {}", format);
    println!("   Records:        {}", records);
    println!("   Notifications:  {}", summary.notifications);
    if summary.malformed > 0 {
        println!("   ⚠️  Malformed:   {}", summary.malformed);
    }
    println!();
}

fn render_text(report: &Report) -> String {
    let mut out = String::new();
    let stats = &report.stats;

    let _ = writeln!(out, "📈 Top Statistics ({})", report.user);
    let _ = writeln!(out, "   Messages:  {}", stats.messages);
    let _ = writeln!(out, "   Words:     {}", stats.words);
    let _ = writeln!(out, "   Media:     {}", stats.media);
    let _ = writeln!(out, "   Links:     {}", stats.links);

    if report.user.is_overall() && !report.busiest_users.is_empty() {
        let _ = writeln!(out, "\n👥 Most Busy Users");
        for (activity, share) in report.busiest_users.iter().zip(&report.user_share) {
            let _ = writeln!(
                out,
                "   {:<20} {:>6}  {:>6.2}%",
                activity.user, activity.count, share.percent
            );
        }
    }

    if !report.frequent_words.is_empty() {
        let _ = writeln!(out, "\n🔤 Most Common Words");
        for word in &report.frequent_words {
            let _ = writeln!(out, "   {:<20} {:>6}", word.word, word.count);
        }
    }

    if !report.emoji_counts.is_empty() {
        let _ = writeln!(out, "\n😀 Emoji");
        for emoji in report.emoji_counts.iter().take(10) {
            let _ = writeln!(out, "   {}  {}", emoji.emoji, emoji.count);
        }
    }

    if !report.monthly_timeline.is_empty() {
        let _ = writeln!(out, "\n🗓️  Monthly Timeline");
        for month in &report.monthly_timeline {
            let _ = writeln!(out, "   {:<20} {:>6}", month.label, month.count);
        }
    }

    let _ = writeln!(out, "\n📅 Activity by Weekday");
    for day in &report.weekday_activity {
        let _ = writeln!(out, "   {:<20} {:>6}", day.label, day.count);
    }

    let _ = writeln!(out, "\n📆 Activity by Month");
    for month in report.month_activity.iter().filter(|m| m.count > 0) {
        let _ = writeln!(out, "   {:<20} {:>6}", month.label, month.count);
    }

    out.trim_end().to_string()
}
