use clap::Parser;

use crate::output::Format;

/// Command-line arguments. Anything not given here is asked for on stdin.
#[derive(Parser, Debug, Default, Clone)]
#[command(name = "gif-search")]
#[command(about = "Search GIPHY for GIFs and print their titles and links", long_about = None)]
pub struct Args {
    /// Search keyword; prompted for when omitted.
    #[arg(short, long)]
    pub query: Option<String>,

    /// Maximum number of results; prompted for when omitted.
    #[arg(short, long)]
    pub limit: Option<String>,

    /// Output format.
    #[arg(short, long, value_enum, default_value_t = Format::Text)]
    pub format: Format,
}
