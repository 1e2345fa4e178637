// src/config/consts.rs

// Season layout
pub const DEFAULT_SEASON: u16 = 2023;
pub const DEFAULT_ROUNDS: usize = 24;

/// Rows per match in the per-round rating exports. Each round file is a
/// header plus one 46-row block per match, best-rated player first.
pub const MATCH_ROWS: usize = 46;

/// Round files live in `<data_dir>/<season>round_data/`.
pub const DEFAULT_DATA_DIR: &str = ".";

// Official count
pub const OFFICIAL_URL: &str = "https://www.footywire.com/afl/footy/brownlow_medal";
pub const OFFICIAL_TOP: usize = 10;

// Net config
pub const USER_AGENT: &str = "alt_brownlow/1.1";
pub const HTTP_TIMEOUT_SECS: u64 = 15;

// Local cache
pub const STORE_DIR: &str = ".store";
pub const OFFICIAL_CACHE: &str = "brownlow_votes.csv";
pub const STORE_SEP: char = ',';

// Export
pub const DEFAULT_OUT_DIR: &str = "out";
pub const DEFAULT_FILE: &str = "tally";

/// How many standings rows the Top 10 watchlist button grabs.
pub const WATCH_DEFAULT: usize = 10;

/// Bar width in the comparison chart; the rating series draws one
/// width to the right of the official series.
pub const COMPARISON_BAR_WIDTH: f64 = 0.3;

/// Default comparison list: the published 2023 official top ten.
pub const DEFAULT_COMPARISON: &[&str] = &[
    "Lachie Neale",
    "Marcus Bontempelli",
    "Nick Daicos",
    "Zak Butters",
    "Errol Gulden",
    "Christian Petracca",
    "Caleb Serong",
    "Jack Viney",
    "Patrick Cripps",
    "Noah Anderson",
];
