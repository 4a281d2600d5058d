//! # fila CLI
//!
//! Command-line interface for the fila library.

use std::process;
use std::time::Instant;

use clap::Parser as ClapParser;

use fila::FilaError;
use fila::cli::Args;
use fila::core::{ProcessingStats, process, write_chart};
use fila::logging::init_logging;
use fila::parser::ChatParser;

fn main() {
    let args = <Args as ClapParser>::parse();

    if let Err(e) = init_logging(args.verbose) {
        eprintln!("⚠️  {}", e);
    }

    if let Err(e) = run(&args) {
        eprintln!("❌ Error: {}", e);
        process::exit(1);
    }
}

fn run(args: &Args) -> Result<(), FilaError> {
    let total_start = Instant::now();

    let parse_config = args.parse_config();
    let filter_config = args.filter_config()?;
    let chart_config = args.chart_config()?;

    println!("📊 fila v{}", env!("CARGO_PKG_VERSION"));
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");
    println!("📂 Input:   {}", args.input.display());
    println!("💾 Output:  {}", chart_config.output.display());
    println!("🔢 Limit:   < {}", filter_config.max_value);
    if let Some(after) = filter_config.after {
        println!("📅 After:   {}", after);
    }
    if let Some(before) = filter_config.before {
        println!("📅 Before:  {}", before);
    }
    println!();

    // Step 1: Split the export into messages
    println!("⏳ Parsing chat...");
    let parse_start = Instant::now();
    let parsed = ChatParser::with_config(parse_config).parse(&args.input)?;
    let segments = parsed.segments;
    println!(
        "   Found {} messages in {} segments ({:.2}s)",
        parsed.messages.len(),
        segments,
        parse_start.elapsed().as_secs_f64()
    );

    // Step 2: Extract, filter, sort
    println!("🔍 Extracting queue lengths...");
    let table = process(parsed, &filter_config)?;
    let stats = ProcessingStats::new(segments, &table);
    println!("   {} reports kept", table.len());

    // Step 3: Write outputs
    println!("💾 Writing chart...");
    write_chart(&table, &chart_config)?;

    #[cfg(feature = "csv-output")]
    {
        if let Some(ref csv_path) = args.csv {
            println!("💾 Writing CSV...");
            fila::core::write_csv(&table, csv_path)?;
            println!("   Saved to {}", csv_path.display());
        }
    }

    println!();
    println!("✅ Done! Chart saved to {}", chart_config.output.display());

    println!();
    println!("📊 Summary:");
    println!("   Segments:        {}", stats.segments);
    println!("   No sender:       {}", stats.missing_sender);
    println!("   Header skipped:  {}", stats.header_lines);
    println!("   No number:       {}", stats.no_number);
    println!("   Above limit:     {}", stats.above_limit);
    if filter_config.has_date_filter() {
        println!("   Out of range:    {}", stats.out_of_range);
    }
    println!(
        "   Plotted:         {} ({:.1}%)",
        stats.kept,
        stats.keep_ratio()
    );
    println!("   Total time:      {:.2}s", total_start.elapsed().as_secs_f64());

    Ok(())
}
