use clap::Parser;

/// Randomized prize draws and group partitioning over a roster of names.
#[derive(Parser, Debug, Clone)]
#[clap(author, version, about, long_about = None)]
pub struct Args {
    /// (file path, optional) A JSON plan bundling the input roster, the draw settings and the
    /// grouping settings for a whole session. Command-line flags override the plan.
    #[clap(short, long, value_parser)]
    pub config: Option<String>,

    /// (file path) A UTF-8 .csv or .txt file holding the roster. The file is read as flat
    /// comma/newline-delimited text: no header row, no column awareness.
    #[clap(short, long, value_parser)]
    pub input: Option<String>,

    /// (list of comma-separated values) Names to add to the roster, in addition to the input file.
    #[clap(short, long, value_parser)]
    pub names: Option<String>,

    /// Loads a small demonstration roster, duplicates included.
    #[clap(long, takes_value = false)]
    pub demo: bool,

    /// Number of winners to draw per raffle round. The effective number is clamped to the
    /// size of the eligible pool.
    #[clap(short, long, value_parser)]
    pub draw: Option<usize>,

    /// Number of raffle rounds to run (default 1 when --draw is given).
    #[clap(long, value_parser)]
    pub rounds: Option<usize>,

    /// If passed, names that already won in a prior round stay eligible.
    #[clap(long, takes_value = false)]
    pub allow_repeat: bool,

    /// Partitions the roster into this many groups.
    #[clap(long, value_parser)]
    pub group_count: Option<usize>,

    /// Partitions the roster into groups of at most this size. Mutually exclusive with
    /// --group-count.
    #[clap(long, value_parser, conflicts_with = "group_count")]
    pub group_size: Option<usize>,

    /// Seed for the random number generator. With a seed, draw and grouping outcomes are
    /// reproducible across runs.
    #[clap(short, long, value_parser)]
    pub seed: Option<u64>,

    /// (file path, 'stdout' or empty) If specified, the summary of the session will be written
    /// in JSON format to the given location.
    #[clap(short, long, value_parser)]
    pub out: Option<String>,

    /// (file path) If specified, the grouping result will be written as a two-column CSV table
    /// to the given location.
    #[clap(long, value_parser)]
    pub csv: Option<String>,

    /// (file path) A reference file containing a session summary in JSON format. If provided,
    /// plannerhub will check that the produced summary matches the reference. Only meaningful
    /// together with --seed.
    #[clap(short, long, value_parser)]
    pub reference: Option<String>,

    /// Starts a line-oriented interactive session instead of running a batch plan.
    #[clap(long, takes_value = false)]
    pub interactive: bool,

    // Other arguments
    /// If passed as an argument, will turn on verbose logging to the standard output.
    #[clap(long, takes_value = false)]
    pub verbose: bool,
}
