extern crate clap;
extern crate freq_modes;

use std::fs::File;
use std::io::{self, BufRead, Write};
use std::process;

use clap::{App, Arg, ArgGroup, ArgMatches};
use log::{debug, warn};

use freq_modes::{FloatKey, FrequencyTable, ModeResult, StatsError};

const DEFAULT_TOP: usize = 5;

fn main() {
    env_logger::init();

    let matches = app().get_matches();
    if let Err(err) = run(&matches) {
        eprintln!("error: {}", err);
        process::exit(1);
    }
}

fn app() -> App<'static, 'static> {
    App::new("modes")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Compute the mode and most frequent values of streams of numbers")
        // Output
        .arg(Arg::with_name("mode")
             .long("mode")
             .help("Print mode"))
        .arg(Arg::with_name("mode-count")
             .long("mode-count")
             .help("Print the number of times the mode occured"))
        .arg(Arg::with_name("all")
             .short("a")
             .long("all")
             .help("Print every value with its count, most frequent first"))
        .arg(Arg::with_name("top")
             .short("n")
             .long("top")
             .takes_value(true)
             .value_name("n")
             .conflicts_with("all")
             .help("Print the n most frequent values with their counts"))
        // Validation
        .arg(Arg::with_name("expect-mode")
             .long("expect-mode")
             .takes_value(true)
             .value_name("value")
             .help("Exit with an error unless the mode is this value"))
        .arg(Arg::with_name("expect-top-count")
             .long("expect-top-count")
             .takes_value(true)
             .value_name("count")
             .help("Exit with an error unless the mode occured this many times"))
        // Formatting
        .group(ArgGroup::with_name("format").args(&["tsv", "json"]))
        .arg(Arg::with_name("tsv")
             .short("t")
             .long("tsv")
             .help("Output as tsv. This will force tsv output even if only one statistic is requested."))
        .arg(Arg::with_name("json")
             .short("j")
             .long("json")
             .help("Output as compressed json"))
        // IO
        .arg(Arg::with_name("input")
             .short("i")
             .long("input")
             .value_name("file")
             .default_value("-")
             .help("Take input from file"))
        .arg(Arg::with_name("output")
             .short("o")
             .long("output")
             .value_name("file")
             .default_value("-")
             .help("Write output to file"))
}

type Table = FrequencyTable<FloatKey<f64>>;

fn run(matches: &ArgMatches) -> Result<(), StatsError> {
    // Setup input
    let stdin = io::stdin();
    let input: Box<dyn BufRead> = match matches.value_of("input") {
        Some("-") | None => Box::new(stdin.lock()),
        Some(file_name) => Box::new(io::BufReader::new(
            File::open(file_name).map_err(|err| StatsError::file(file_name, err))?)),
    };

    // Setup output
    let stdout = io::stdout();
    let mut output: Box<dyn Write> = match matches.value_of("output") {
        Some("-") | None => Box::new(stdout.lock()),
        Some(file_name) => Box::new(io::BufWriter::new(
            File::create(file_name).map_err(|err| StatsError::file(file_name, err))?)),
    };

    let table = read_table(input)?;
    debug!("read {} observations of {} values", table.total(), table.len());

    check_expectations(matches, &table)?;

    let results = collect_results(matches, &table)?;
    if matches.is_present("json") {
        write_json(&results, &mut *output)?;
    } else if !matches.is_present("tsv") && results.len() == 1 {
        writeln!(output, "{}", results[0].1)?;
    } else {
        write_tsv(&results, &mut *output)?;
    }
    output.flush()?;
    Ok(())
}

/// Tabulate every whitespace separated number in the input
fn read_table<R: BufRead>(input: R) -> Result<Table, StatsError> {
    let mut table = Table::new();
    for line in input.lines() {
        for token in line?.split_whitespace() {
            let num: f64 = token.parse().map_err(|_| StatsError::Parse {
                token: String::from(token),
            })?;
            match FloatKey::new(num) {
                Some(key) if num.is_finite() => table.incr(key),
                _ => warn!("skipping non-finite \"{}\"", token),
            }
        }
    }
    Ok(table)
}

fn parse_arg<T: std::str::FromStr>(matches: &ArgMatches, name: &str) -> Result<Option<T>, StatsError> {
    match matches.value_of(name) {
        None => Ok(None),
        Some(token) => token.parse().map(Some).map_err(|_| StatsError::Parse {
            token: String::from(token),
        }),
    }
}

fn check_expectations(matches: &ArgMatches, table: &Table) -> Result<(), StatsError> {
    let expected_mode: Option<f64> = parse_arg(matches, "expect-mode")?;
    let expected_count: Option<u64> = parse_arg(matches, "expect-top-count")?;
    if expected_mode.is_none() && expected_count.is_none() {
        return Ok(());
    }

    let mode = table.mode_entry()?;
    if let Some(expected) = expected_mode {
        if FloatKey::new(expected) != Some(mode.value) {
            return Err(StatsError::Expectation {
                what: "mode",
                expected: expected.to_string(),
                actual: mode.value.to_string(),
            });
        }
    }
    if let Some(expected) = expected_count {
        if expected != mode.count {
            return Err(StatsError::Expectation {
                what: "top count",
                expected: expected.to_string(),
                actual: mode.count.to_string(),
            });
        }
    }
    Ok(())
}

fn collect_results(matches: &ArgMatches, table: &Table) -> Result<Vec<(String, String)>, StatsError> {
    let mut results = Vec::new();
    if matches.is_present("mode") {
        results.push((String::from("mode"), table.mode()?.to_string()));
    }
    if matches.is_present("mode-count") {
        results.push((String::from("mode #"), table.mode_entry()?.count.to_string()));
    }
    if matches.is_present("all") {
        push_ranked(&mut results, table.all_modes());
    } else if let Some(n) = parse_arg(matches, "top")? {
        push_ranked(&mut results, freq_modes::top_modes(table, n));
    }

    // Defaults
    if results.is_empty() {
        let mode = table.mode_entry()?;
        results.push((String::from("mode"), mode.value.to_string()));
        results.push((String::from("mode #"), mode.count.to_string()));
        push_ranked(&mut results, freq_modes::top_modes(table, DEFAULT_TOP));
    }
    Ok(results)
}

fn push_ranked(results: &mut Vec<(String, String)>, ranked: Vec<ModeResult<FloatKey<f64>>>) {
    for ModeResult { value, count } in ranked {
        results.push((value.to_string(), count.to_string()));
    }
}

fn write_tsv(results: &[(String, String)], output: &mut dyn Write) -> io::Result<()> {
    for (name, val) in results {
        writeln!(output, "{}\t{}", name, val)?;
    }
    Ok(())
}

fn write_json(results: &[(String, String)], output: &mut dyn Write) -> io::Result<()> {
    write!(output, "{{")?;
    for (i, (name, val)) in results.iter().enumerate() {
        if i > 0 {
            write!(output, ",")?;
        }
        write!(output, "\"{}\":{}", name, val)?;
    }
    writeln!(output, "}}")
}
