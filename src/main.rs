use clap::Parser;
use fragnav::Variant;
use fragnav::core::Navigator;
use fragnav::core::config::{self, FragnavConfig};
use fragnav::core::navigator::NavigatorSettings;
use fragnav::fetch::{FragmentSource, HttpFragmentSource};
use fragnav::runtime::{self, ClickTarget, PageEvent};
use fragnav::surface::MemoryPage;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::io;
use std::sync::Arc;
use tokio::sync::mpsc;

#[derive(Parser)]
#[command(
    name = "fragnav",
    about = "Replay reading-link navigation against a page and print the result"
)]
struct Args {
    /// Where the detail view is rendered
    #[arg(short, long, value_enum)]
    variant: Option<Variant>,

    /// URL of the page to load
    #[arg(short, long)]
    page_url: Option<String>,

    /// Clicks to replay in order: read:<href>, read#<n>, home or close
    steps: Vec<ClickTarget>,
}

#[tokio::main]
async fn main() -> io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let file_config = config::load_config().unwrap_or_else(|e| {
        eprintln!("Warning: {e}, using defaults");
        FragnavConfig::default()
    });
    let resolved = config::resolve(&file_config, args.variant, args.page_url.as_deref());

    // Initialize file logger so stdout stays clean for the snapshot
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&resolved.log_file) {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    log::info!(
        "fragnav starting: page {} ({:?} variant)",
        resolved.page_url,
        resolved.variant
    );

    let source = HttpFragmentSource::new(&resolved.page_url)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e.to_string()))?;

    // Page load: the server renders the list view into the main container.
    let initial = source.fetch(&resolved.page_url).await.map_err(|e| {
        log::error!("Initial page load failed: {e}");
        io::Error::other(format!("could not load {}: {e}", resolved.page_url))
    })?;

    let mut page = MemoryPage::new(resolved.selectors.clone()).with_container(
        &resolved.main_container,
        initial.into_string(),
        true,
    );
    if resolved.variant == Variant::Overlay {
        page = page.with_container(&resolved.overlay_container, "", false);
    }

    let source: Arc<dyn FragmentSource> = Arc::new(source);
    let navigator = Navigator::new(page, source, NavigatorSettings::from_config(&resolved));

    let (tx, rx) = mpsc::channel(args.steps.len() + 1);
    tx.send(PageEvent::DomContentLoaded)
        .await
        .map_err(|e| io::Error::other(e.to_string()))?;
    for step in args.steps {
        tx.send(PageEvent::Click(step))
            .await
            .map_err(|e| io::Error::other(e.to_string()))?;
    }
    drop(tx);

    let navigator = runtime::run(navigator, rx).await;

    let snapshot = serde_json::to_string_pretty(&navigator.snapshot())
        .map_err(|e| io::Error::other(e.to_string()))?;
    println!("{snapshot}");

    Ok(())
}
