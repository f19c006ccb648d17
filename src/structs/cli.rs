use clap::Parser;

use crate::config::constants::{DEFAULT_BROWSER_ENDPOINT, DEFAULT_OUTPUT_DIR};

#[derive(Parser)]
#[clap(name = "sitelens")]
#[clap(about = "AI-powered website UX audit tool", long_about = None)]
pub struct Cli {
    /// Target URL to audit
    pub url: String,

    /// Directory under which run artifacts are written
    #[clap(long, default_value = DEFAULT_OUTPUT_DIR)]
    pub output_dir: String,

    /// Chrome remote-debugging endpoint
    #[clap(long, default_value = DEFAULT_BROWSER_ENDPOINT)]
    pub browser_endpoint: String,
}
