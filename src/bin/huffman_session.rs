use std::io::{self, BufRead, Write};

use clap::Parser;
use log::{LevelFilter, Metadata, Record};

use huffcode::cs::compression::{CompressionReport, HuffmanCodec};

#[derive(Parser, Debug)]
#[command(about = "Huffman-encode lines of text and show the tables, bitstring and sizes")]
struct Args {
    /// Encode this text once instead of prompting
    #[arg(long)]
    text: Option<String>,
    /// Print the tree structure after the code table
    #[arg(long)]
    show_tree: bool,
    /// Raise log verbosity (-v debug, -vv trace)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,
}

struct StderrLogger;

impl log::Log for StderrLogger {
    fn enabled(&self, metadata: &Metadata) -> bool {
        metadata.level() <= log::max_level()
    }

    fn log(&self, record: &Record) {
        if self.enabled(record.metadata()) {
            eprintln!("[{}] {}", record.level(), record.args());
        }
    }

    fn flush(&self) {}
}

static LOGGER: StderrLogger = StderrLogger;

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => LevelFilter::Warn,
        1 => LevelFilter::Debug,
        _ => LevelFilter::Trace,
    };
    if log::set_logger(&LOGGER).is_ok() {
        log::set_max_level(level);
    }
}

fn print_report(report: &CompressionReport, show_tree: bool) {
    println!("\nFrequency Table:");
    println!("Character | Frequency");
    println!("-----------------------");
    for (symbol, count) in report.frequencies.iter() {
        println!("    {}       | {}", symbol, count);
    }

    println!("\nHuffman Codes:");
    println!("Character | Frequency | Code");
    println!("---------------------------------");
    for (symbol, code) in report.codes.iter() {
        let count = report.frequencies.get(symbol).unwrap_or(0);
        println!("    {}       | {}        | {}", symbol, count, code);
    }

    if show_tree {
        if let Some(tree) = &report.tree {
            println!("\nHuffman Tree:");
            print!("{}", tree.render());
        }
    }

    println!("\nOriginal String: {}", report.input);
    println!("Encoded String: {}", report.encoded);
    println!("Decoded String: {}", report.decoded);

    if report.round_trip_ok {
        println!("\nVerification Successful: Decoded string matches the original string.");
    } else {
        println!("\nVerification Failed: Decoded string does not match the original string.");
    }

    println!("\nOriginal Size: {} bits", report.original_bits());
    println!("Compressed Size: {} bits", report.compressed_bits());
    match report.compression_ratio() {
        Some(ratio) => println!("Compression Ratio: {}", ratio),
        None => println!("Compression Ratio: n/a"),
    }
}

fn run_once(text: &str, show_tree: bool) {
    match HuffmanCodec::compress(text) {
        Ok(report) => print_report(&report, show_tree),
        Err(e) => eprintln!("error: {}", e),
    }
}

/// Print `message` and read one line without its terminator.
/// Returns `None` at end of input.
fn prompt(input: &mut impl BufRead, message: &str) -> io::Result<Option<String>> {
    print!("{}", message);
    io::stdout().flush()?;
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    let trimmed = line.trim_end_matches(['\r', '\n']).len();
    line.truncate(trimmed);
    Ok(Some(line))
}

fn main() -> io::Result<()> {
    let args = Args::parse();
    init_logging(args.verbose);

    if let Some(text) = &args.text {
        run_once(text, args.show_tree);
        return Ok(());
    }

    let stdin = io::stdin();
    let mut input = stdin.lock();
    while let Some(line) = prompt(&mut input, "Enter a string: ")? {
        run_once(&line, args.show_tree);

        let answer = prompt(&mut input, "\nWould you like to test another string? (y/n): ")?;
        if !matches!(answer.as_deref().map(str::trim), Some("y" | "Y")) {
            break;
        }
    }

    println!("\nThank you for using the Huffman Encoding Program!");
    Ok(())
}
