use clap::{Parser, Subcommand};
use roster::model::Gender;
use roster::validation::filter_phone_input;
use std::path::PathBuf;

/// Returns the version string, including git hash and commit date for non-release builds.
/// Format: "0.3.2" for releases, "0.3.2@abc1234 2024-01-15 14:30" for dev builds
fn get_version() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const GIT_COMMIT_DATE: &str = env!("GIT_COMMIT_DATE");
    const IS_RELEASE: &str = env!("IS_RELEASE");

    use std::sync::OnceLock;
    static VERSION_STRING: OnceLock<String> = OnceLock::new();

    VERSION_STRING.get_or_init(|| {
        if IS_RELEASE == "true" || GIT_HASH.is_empty() {
            VERSION.to_string()
        } else {
            format!("{}@{} {}", VERSION, GIT_HASH, GIT_COMMIT_DATE)
        }
    })
}

#[derive(Parser, Debug)]
#[command(name = "roster", bin_name = "roster", version = get_version())]
#[command(about = "Keep a small directory of students", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Directory holding students, counter, config and logs
    #[arg(long, global = true, env = "ROSTER_DATA_DIR", value_name = "DIR")]
    pub data_dir: Option<PathBuf>,
}

/// Runs `--phone` through the keystroke filter: extra digits are cut, anything
/// with a non-digit is refused.
pub fn parse_phone(raw: &str) -> Result<String, String> {
    let raw = raw.trim();
    let filtered = filter_phone_input("", raw);
    if filtered.is_empty() && !raw.is_empty() {
        return Err(format!("`{}` may only contain digits", raw));
    }
    Ok(filtered)
}

fn parse_gender(raw: &str) -> Result<Gender, String> {
    raw.parse()
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show saved students and the counter
    #[command(display_order = 1)]
    Status,

    /// Add a student
    #[command(alias = "n", display_order = 2)]
    Add {
        /// Full name
        #[arg(long)]
        name: String,

        /// Email address
        #[arg(long)]
        email: String,

        /// Ten digit phone number
        #[arg(long, value_parser = parse_phone)]
        phone: String,

        /// male or female
        #[arg(long, value_parser = parse_gender, default_value = "male")]
        gender: Gender,
    },

    /// Change fields of a saved student
    #[command(alias = "e", display_order = 3)]
    Edit {
        /// List position (e.g. 2) or id:<n>
        index: String,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        email: Option<String>,

        #[arg(long, value_parser = parse_phone)]
        phone: Option<String>,

        #[arg(long, value_parser = parse_gender)]
        gender: Option<Gender>,
    },

    /// Delete one or more students
    #[command(alias = "rm", display_order = 4)]
    Delete {
        /// List positions (e.g. 1 3) or id:<n>
        #[arg(required = true, num_args = 1..)]
        indexes: Vec<String>,
    },

    /// List saved students
    #[command(alias = "ls", display_order = 5)]
    List {
        /// Only names containing this text
        #[arg(short, long)]
        search: Option<String>,
    },

    /// Search students by name
    #[command(display_order = 6)]
    Search { term: String },

    /// Show full details of one or more students
    #[command(alias = "v", display_order = 7)]
    View {
        #[arg(required = true, num_args = 1..)]
        indexes: Vec<String>,
    },

    /// Show the remote directory
    #[command(alias = "dir", display_order = 8)]
    Directory {
        /// Number of entries to show
        #[arg(short, long)]
        limit: Option<usize>,
    },

    /// Show or change the counter
    #[command(display_order = 9)]
    Counter {
        #[command(subcommand)]
        action: Option<CounterCommand>,
    },

    /// Get or set configuration
    #[command(display_order = 10)]
    Config {
        /// Configuration key (e.g., directory-limit)
        key: Option<String>,

        /// Value to set (if omitted, prints current value)
        value: Option<String>,
    },

    /// Print where data is stored
    #[command(display_order = 11)]
    Paths,
}

#[derive(Subcommand, Debug, Clone, Copy)]
pub enum CounterCommand {
    Show,
    #[command(alias = "inc")]
    Increment,
    #[command(alias = "dec")]
    Decrement,
    Reset,
}
