use sentiment_report::{Numbering, ReportClientBuilder, Reporter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let symbol = std::env::args().nth(1).unwrap_or_else(|| "MSFT".to_string());
    let sequential = std::env::args().any(|a| a == "--sequential");

    let client = ReportClientBuilder::from_env()?.build()?;
    let mut reporter = Reporter::new(&client);
    if sequential {
        reporter = reporter.numbering(Numbering::Sequential);
    }

    // Fetch and structure only; no completion request is made.
    let feed = reporter.fetch_feed(&symbol).await?;
    println!("Fetched {} feed items for {symbol}.", feed.items.len());

    let document = reporter.structure(&feed, &symbol)?;
    let request = Reporter::build_request(document);
    for message in request.messages() {
        println!("=== {:?} ===", message.role);
        println!("{}", message.content);
    }
    Ok(())
}
