use clap::{Parser, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "seo-launch-check")]
#[command(about = "Scores a site's critical pages for SEO and decides launch readiness")]
#[command(version)]
pub struct Args {
    /// Site root that page paths are resolved against (required unless --config sets it)
    pub base_url: Option<String>,

    /// JSON audit configuration file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Where page markup comes from
    #[arg(short, long, value_enum, default_value_t = SourceArg::Webdriver)]
    pub source: SourceArg,

    /// Directory of pre-rendered pages (for --source files)
    #[arg(long)]
    pub export_dir: Option<PathBuf>,

    /// WebDriver endpoint (for --source webdriver)
    #[arg(long, env = "WEBDRIVER_URL")]
    pub webdriver_url: Option<String>,

    /// Number of pages fetched at once
    #[arg(short, long)]
    pub concurrency: Option<usize>,

    /// Per-page timeout in seconds
    #[arg(long)]
    pub page_timeout: Option<u64>,

    /// Page path to validate; repeat to build the list
    #[arg(long = "page")]
    pub pages: Vec<String>,

    /// Target keyword; repeat to build the list
    #[arg(long = "keyword")]
    pub keywords: Vec<String>,

    /// Report format
    #[arg(short, long, value_enum, default_value_t = FormatArg::Text)]
    pub format: FormatArg,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum SourceArg {
    /// Render pages in a browser through WebDriver
    Webdriver,
    /// Read a static export from --export-dir
    Files,
}

#[derive(Copy, Clone, Debug, PartialEq, Eq, ValueEnum)]
pub enum FormatArg {
    Text,
    Json,
}

impl From<FormatArg> for seo_launch_check::report::OutputFormat {
    fn from(arg: FormatArg) -> Self {
        match arg {
            FormatArg::Text => Self::Text,
            FormatArg::Json => Self::Json,
        }
    }
}
