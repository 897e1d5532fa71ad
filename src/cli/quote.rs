use super::ui;
use crate::providers::currencylayer::QuoteClient;
use anyhow::{Result, anyhow};

/// Renders a single rate as `PAIR: rate`, with the pair upper-cased.
pub fn display_quote(pair: &str, rate: f64) -> String {
    format!(
        "{}: {}",
        ui::style_text(&pair.to_uppercase(), ui::StyleType::Title),
        ui::style_text(&rate.to_string(), ui::StyleType::Value)
    )
}

pub async fn run(client: &QuoteClient, base_url: &str, pair: &str) -> Result<()> {
    let pb = ui::new_spinner("Fetching live quotes...");
    let result = client.fetch_quotes(base_url).await;
    pb.finish_and_clear();

    let rate = result?
        .get_quote(pair)
        .ok_or_else(|| anyhow!("No quote found for pair: {}", pair.to_uppercase()))?;

    println!("{}", display_quote(pair, rate));
    Ok(())
}
