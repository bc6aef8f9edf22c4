use clap::Parser;
use seo_launch_check::config::AuditConfig;
use seo_launch_check::error::AuditError;
use seo_launch_check::report::render;
use seo_launch_check::results::LaunchReadinessReport;
use seo_launch_check::{Audit, ExportDirSource, WebDriverSource};
use std::process::ExitCode;
use std::sync::Arc;

mod args;
use args::{Args, SourceArg};

#[tokio::main]
async fn main() -> ExitCode {
    // Initialize logging
    env_logger::init();

    let args = Args::parse();

    match run(args).await {
        Ok(report) if report.launch_ready => ExitCode::SUCCESS,
        Ok(_) => ExitCode::from(1),
        Err(e) => {
            ::log::error!("Audit failed: {}", e);
            eprintln!("error: {}", e);
            ExitCode::from(2)
        }
    }
}

async fn run(args: Args) -> Result<LaunchReadinessReport, AuditError> {
    let config = build_config(&args)?;
    config.check()?;
    let audit = Audit::with_config(config);

    let report = match args.source {
        SourceArg::Webdriver => {
            let webdriver_url = audit.config().webdriver_url.clone();
            eprintln!(
                "Note: rendering pages requires a WebDriver server (e.g., ChromeDriver) at {}",
                webdriver_url
            );
            eprintln!("Set WEBDRIVER_URL or --webdriver-url to use a different endpoint");

            let source = Arc::new(WebDriverSource::new(&webdriver_url));
            let report = audit.run(Arc::clone(&source)).await;
            source.close().await;
            report?
        }
        SourceArg::Files => {
            let dir = args.export_dir.clone().ok_or_else(|| {
                AuditError::Config("--source files requires --export-dir".to_string())
            })?;
            ::log::info!("Reading pages from {}", dir.display());
            audit.run(Arc::new(ExportDirSource::new(dir))).await?
        }
    };

    let rendered = render(&report, args.format.into())?;
    match &args.output {
        Some(path) => {
            std::fs::write(path, rendered)?;
            ::log::info!("Report written to {}", path.display());
        }
        None => println!("{}", rendered),
    }

    Ok(report)
}

/// Merge the config file (if any) with command-line overrides
fn build_config(args: &Args) -> Result<AuditConfig, AuditError> {
    let mut config = match (&args.config, &args.base_url) {
        (Some(path), _) => AuditConfig::from_file(path)?,
        (None, Some(base_url)) => AuditConfig::new(base_url),
        (None, None) => {
            return Err(AuditError::Config(
                "a base URL or --config file is required".to_string(),
            ));
        }
    };

    if let (Some(_), Some(base_url)) = (&args.config, &args.base_url) {
        config.base_url = base_url.clone();
    }
    if let Some(webdriver_url) = args.webdriver_url.as_ref().filter(|u| !u.is_empty()) {
        config.webdriver_url = webdriver_url.clone();
    }
    if let Some(concurrency) = args.concurrency {
        config.max_concurrency = concurrency;
    }
    if let Some(timeout) = args.page_timeout {
        config.page_timeout_secs = timeout;
    }
    if !args.pages.is_empty() {
        config.pages = args.pages.clone();
    }
    if !args.keywords.is_empty() {
        config.keywords = args.keywords.clone();
    }

    Ok(config)
}
