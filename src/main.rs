use std::fs;
use std::io::{self, prelude::*};
use std::process;

use clap::ArgEnum;
use env_logger;
use log;

use catalog_sort::input::extend_collection;
use catalog_sort::{sample_collection, search_by_name, sort_by_key, Collection, Metrics, SearchOutcome, SortKey};

fn main() {
    let arg_parser = build_arg_parser();

    let log_level: LogLevel = arg_parser.value_of_t_or_exit("log_level");
    init_logger(log_level);

    let keys: Vec<Key> = if arg_parser.is_present("sort") {
        arg_parser.values_of_t_or_exit("sort")
    } else {
        Vec::new()
    };
    let target = arg_parser.value_of("find");

    let mut collection = if arg_parser.is_present("sample") {
        match sample_collection() {
            Ok(collection) => collection,
            Err(err) => {
                log::error!("sample data loading error: {}", err);
                process::exit(1);
            }
        }
    } else {
        Collection::new()
    };

    if let Some(input) = arg_parser.value_of("input") {
        let input_stream = match fs::File::open(input) {
            Ok(file) => io::BufReader::new(file),
            Err(err) => {
                log::error!("input file opening error: {}", err);
                process::exit(1);
            }
        };
        if let Err(err) = extend_collection(&mut collection, input_stream) {
            log::error!("input file reading error: {}", err);
            process::exit(1);
        }
    }

    if collection.is_empty() {
        log::warn!("no records loaded, use --sample or --input");
    }

    let stdout = io::stdout();
    let mut output_stream = stdout.lock();

    // field the collection is currently known to be ordered by
    let mut ordered_by: Option<SortKey> = None;

    if keys.is_empty() {
        write_listing(&mut output_stream, &collection);
    }

    for key in keys {
        let key = SortKey::from(key);
        let metrics = sort_by_key(&mut collection, key);
        ordered_by = Some(key);

        write_or_exit(&mut output_stream, format!("\nsorted by {}\n{}\n", key, format_metrics(&metrics)));
        write_listing(&mut output_stream, &collection);
    }

    if let Some(target) = target {
        if ordered_by != Some(SortKey::Name) {
            log::warn!("collection is not sorted by name, search result is unreliable (use --sort name)");
        }

        let (outcome, metrics) = search_by_name(&collection, target);
        let report = match outcome {
            SearchOutcome::FoundAt(index) => match collection.get(index) {
                Some(record) => format!("\nfound '{}' at position {}: {}\n", target, index + 1, record),
                None => format!("\nfound '{}' at position {}\n", target, index + 1),
            },
            SearchOutcome::NotFound => format!("\n'{}' not found, make sure the records are sorted by name\n", target),
        };
        write_or_exit(&mut output_stream, format!("{}{}\n", report, format_metrics(&metrics)));
    }

    if let Err(err) = output_stream.flush() {
        log::error!("output flushing error: {}", err);
        process::exit(1);
    }
}

fn format_metrics(metrics: &Metrics) -> String {
    format!("|- comparisons: {}\n`- time: {:.4} ms", metrics.comparisons, metrics.elapsed_ms())
}

fn write_listing(output_stream: &mut impl Write, collection: &Collection) {
    let mut listing = format!("records: {}/{}\n", collection.len(), collection.capacity());
    for (idx, record) in collection.iter().enumerate() {
        listing.push_str(&format!(
            "[{:02}] {:<29} | {:<19} | {}\n",
            idx + 1,
            record.name(),
            record.category(),
            record.priority()
        ));
    }
    write_or_exit(output_stream, listing);
}

fn write_or_exit(output_stream: &mut impl Write, text: String) {
    if let Err(err) = output_stream.write_all(text.as_bytes()) {
        log::error!("data writing error: {}", err);
        process::exit(1);
    }
}

#[derive(Copy, Clone, clap::ArgEnum)]
enum LogLevel {
    Off,
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn possible_values() -> impl Iterator<Item = clap::PossibleValue<'static>> {
        Self::value_variants().iter().filter_map(|v| v.to_possible_value())
    }
}

impl std::str::FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <LogLevel as clap::ArgEnum>::from_str(s, false)
    }
}

#[derive(Copy, Clone, clap::ArgEnum)]
enum Key {
    Name,
    Category,
    Priority,
}

impl Key {
    pub fn possible_values() -> impl Iterator<Item = clap::PossibleValue<'static>> {
        Key::value_variants().iter().filter_map(|v| v.to_possible_value())
    }
}

impl std::str::FromStr for Key {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        <Key as clap::ArgEnum>::from_str(s, false)
    }
}

impl From<Key> for SortKey {
    fn from(key: Key) -> Self {
        match key {
            Key::Name => SortKey::Name,
            Key::Category => SortKey::Category,
            Key::Priority => SortKey::Priority,
        }
    }
}

fn build_arg_parser() -> clap::ArgMatches {
    clap::App::new("catalog-sort")
        .about("instrumented component catalog sorter")
        .arg(
            clap::Arg::new("input")
                .short('i')
                .long("input")
                .help("file with name,category,priority records, one per line")
                .takes_value(true),
        )
        .arg(
            clap::Arg::new("sample")
                .long("sample")
                .help("load the sample components before the input file records"),
        )
        .arg(
            clap::Arg::new("sort")
                .short('s')
                .long("sort")
                .help("field to sort by, may be repeated to sort several times in order")
                .takes_value(true)
                .multiple_occurrences(true)
                .possible_values(Key::possible_values()),
        )
        .arg(
            clap::Arg::new("find")
                .short('f')
                .long("find")
                .help("name to look up with binary search after sorting")
                .takes_value(true),
        )
        .arg(
            clap::Arg::new("log_level")
                .short('l')
                .long("loglevel")
                .help("logging level")
                .takes_value(true)
                .default_value("info")
                .possible_values(LogLevel::possible_values()),
        )
        .get_matches()
}

fn init_logger(log_level: LogLevel) {
    env_logger::Builder::new()
        .filter_level(match log_level {
            LogLevel::Off => log::LevelFilter::Off,
            LogLevel::Error => log::LevelFilter::Error,
            LogLevel::Warn => log::LevelFilter::Warn,
            LogLevel::Info => log::LevelFilter::Info,
            LogLevel::Debug => log::LevelFilter::Debug,
            LogLevel::Trace => log::LevelFilter::Trace,
        })
        .format_timestamp_millis()
        .init();
}
