use clap::Parser;
use harvest_jobs::Harvest;

mod args;
use args::Args;

#[tokio::main]
async fn main() {
    // Initialize logging
    env_logger::init();

    // Parse command-line arguments
    let args = Args::parse();

    ::log::info!("Starting job harvest for: {}", args.url);

    println!("Note: Harvesting requires a WebDriver server (e.g., ChromeDriver).");
    println!(
        "Set WEBDRIVER_URL environment variable if not using the default http://localhost:4444"
    );

    match args.page_limit() {
        Some(limit) => println!("Configuration: scraping the first {} pages", limit),
        None => println!("Configuration: scraping all available pages"),
    }

    let harvest = Harvest::new(&args.url)
        .with_max_pages(args.page_limit())
        .with_output(args.output);

    match harvest.run().await {
        Ok(records) => {
            println!("Successfully scraped {} job listings!", records.len());
        }
        Err(e) => {
            ::log::error!("Harvest failed: {}", e);
            std::process::exit(1);
        }
    }
}
