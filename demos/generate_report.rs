use sentiment_report::{ReportClientBuilder, Reporter};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "tracing-subscriber")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let symbol = std::env::args().nth(1).unwrap_or_else(|| "AAPL".to_string());

    // Requires ALPHA_VANTAGE_API_KEY and GROQ_API_KEY.
    let client = ReportClientBuilder::from_env()?.build()?;
    let report = Reporter::new(&client)
        .reject_empty(true)
        .generate(&symbol)
        .await?;

    println!("--- Report for {} ---", report.symbol);
    println!("{}", report.text);
    Ok(())
}
