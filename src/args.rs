use clap::Parser;

/// Looks up the candidate of an election contest.
#[derive(Parser, Debug, Clone, Default)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// (file path, optional) A JSON file listing the candidate tables to load.
    /// Relative locations in the file are resolved against the directory of the file.
    #[clap(short, long, value_parser)]
    pub config: Option<String>,

    /// (file path or URL, repeatable) A candidate table with the columns contest, year, county,
    /// party, candidate and no header row. Loaded after the tables of the --config file.
    #[clap(short, long, value_parser)]
    pub input: Vec<String>,

    /// (csv, tsv or xlsx) The format of the --input tables. Inferred from the extension when
    /// not specified.
    #[clap(long, value_parser)]
    pub input_type: Option<String>,

    /// (single character) The delimiter of the --input tables. Overrides --input-type.
    #[clap(long, value_parser)]
    pub delimiter: Option<String>,

    /// The contest or office. A code such as PRE or GOV for tables, or the display name
    /// (for example "Attorney General") with --static.
    #[clap(long, value_parser)]
    pub contest: Option<String>,

    /// The election year (for example 2020). Compared as written, without padding.
    #[clap(long, value_parser)]
    pub year: Option<String>,

    /// The county code (for example MIA). Not used with --static.
    #[clap(long, value_parser)]
    pub county: Option<String>,

    /// The party. A code such as DEM for tables, or the display name (for example
    /// "Republican") with --static.
    #[clap(long, value_parser)]
    pub party: Option<String>,

    /// Query the table embedded in the program instead of loading tables. Keys of the
    /// embedded table are matched exactly, including case.
    #[clap(long = "static", takes_value = false)]
    pub static_table: bool,

    /// (seconds) Give up loading a table after this time.
    #[clap(long, value_parser)]
    pub timeout: Option<u64>,

    /// (file path, 'stdout' or empty) Where to write the JSON report. Defaults to the standard output.
    #[clap(short, long, value_parser)]
    pub out: Option<String>,

    // Other arguments
    /// If passed as an argument, will turn on verbose logging to the standard output.
    #[clap(long, takes_value = false)]
    pub verbose: bool,
}
