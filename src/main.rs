//! RV32 Pipeline Hazard Analyzer CLI.
//!
//! Reads a hexadecimal instruction listing, prints the decoded fields of every
//! word, then runs the nine hazard-handling techniques and reports conflict
//! counts and overhead for each.

use clap::Parser;
use std::path::Path;
use std::process;

extern crate riscv_hazard_analyzer;

use riscv_hazard_analyzer::config::{Config, OutputFormat};
use riscv_hazard_analyzer::isa::Program;
use riscv_hazard_analyzer::pipeline::{PipelineAnalyzer, Technique};
use riscv_hazard_analyzer::report::AnalysisReport;
use riscv_hazard_analyzer::sim::loader;
use riscv_hazard_analyzer::Result;

/// Command-line arguments for the hazard analyzer.
///
/// Flags override the corresponding configuration file settings.
#[derive(Parser, Debug)]
#[command(author, version, about = "RV32 Pipeline Hazard Analyzer")]
struct Args {
    /// Hex listing, one 32-bit word per line.
    #[arg(short, long)]
    file: String,

    /// TOML configuration file.
    #[arg(short, long)]
    config: Option<String>,

    /// Print the report as JSON.
    #[arg(long)]
    json: bool,

    /// Trace detected hazards and per-technique results to stderr.
    #[arg(long)]
    trace: bool,

    /// Skip the per-instruction decode listing.
    #[arg(long)]
    no_decode: bool,

    /// Write every technique result to this directory.
    #[arg(long)]
    save_dir: Option<String>,

    /// Technique to save with `--out`.
    #[arg(long, requires = "out")]
    technique: Option<Technique>,

    /// Destination for the `--technique` result.
    #[arg(long, requires = "technique")]
    out: Option<String>,

    /// Save results with a technique header instead of a plain hex listing.
    #[arg(long)]
    annotated: bool,
}

fn main() {
    let args = Args::parse();
    if let Err(e) = run(args) {
        eprintln!("[!] FATAL: {}", e);
        process::exit(1);
    }
}

fn run(args: Args) -> Result<()> {
    let mut config = match &args.config {
        Some(path) => Config::from_file(path)?,
        None => Config::default(),
    };
    config.general.trace_analysis |= args.trace;
    if args.json {
        config.output.format = OutputFormat::Json;
    }
    if args.no_decode {
        config.output.show_decode = false;
    }
    if args.save_dir.is_some() {
        config.output.save_dir = args.save_dir.clone();
    }
    config.output.annotated |= args.annotated;

    let trace = config.general.trace_analysis;
    let annotated = config.output.annotated;
    let words = loader::read_hex_file(&args.file)?;
    if trace {
        eprintln!("[Loader] {} word(s) from {}", words.len(), args.file);
    }

    let program = Program::decode(&words);
    let report = PipelineAnalyzer::new(&program)
        .with_trace(trace)
        .analyze_all();

    match config.output.format {
        OutputFormat::Json => println!("{}", report.to_json()?),
        OutputFormat::Table => {
            if config.output.show_decode {
                print_decode(&program);
            }
            report.print();
        }
    }

    if let Some(dir) = &config.output.save_dir {
        save_all(&report, dir, annotated, trace)?;
    }

    if let (Some(technique), Some(out)) = (args.technique, &args.out) {
        if let Some(result) = report.get(technique) {
            loader::save_result(out, result, annotated)?;
            if trace {
                eprintln!("[Loader] {} -> {}", technique, out);
            }
        }
    }

    Ok(())
}

fn print_decode(program: &Program) {
    println!("Decoded Instructions");
    println!("--------------------");
    for (i, inst) in program.iter().enumerate() {
        println!("{:>4}: 0x{:08X} -> {}", i + 1, inst.encoding(), inst);
    }
    println!("--------------------");
}

fn save_all(report: &AnalysisReport, dir: &str, annotated: bool, trace: bool) -> Result<()> {
    std::fs::create_dir_all(dir).map_err(|e| riscv_hazard_analyzer::Error::Io {
        path: dir.to_string(),
        source: e,
    })?;
    for result in report.iter() {
        let path = Path::new(dir).join(format!("{}.txt", result.technique.name()));
        let path = path.to_string_lossy();
        loader::save_result(&path, result, annotated)?;
        if trace {
            eprintln!("[Loader] {} -> {}", result.technique, path);
        }
    }
    Ok(())
}
