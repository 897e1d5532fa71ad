use super::ui;
use crate::providers::currencylayer::{QuoteClient, QuoteCollection};
use anyhow::Result;
use comfy_table::Cell;
use tracing::info;

/// Renders every quote sorted by pair code, headed by source and quote time.
pub fn display_as_table(quotes: &QuoteCollection) -> String {
    let mut table = ui::new_styled_table();
    table.set_header(vec![ui::header_cell("Pair"), ui::header_cell("Rate")]);

    let mut pairs: Vec<(&String, &f64)> = quotes.all_quotes().iter().collect();
    pairs.sort_by(|a, b| a.0.cmp(b.0));
    for (pair, rate) in pairs {
        table.add_row(vec![Cell::new(pair), ui::rate_cell(*rate)]);
    }

    let source = if quotes.source().is_empty() {
        "N/A"
    } else {
        quotes.source()
    };
    let as_of = quotes.timestamp().map_or("N/A".to_string(), |ts| {
        ts.format("%Y-%m-%d %H:%M:%S UTC").to_string()
    });

    let mut output = format!(
        "Live quotes: {} {}\n\n",
        ui::style_text(source, ui::StyleType::Title),
        ui::style_text(&format!("(as of {as_of})"), ui::StyleType::Subtle)
    );
    output.push_str(&table.to_string());
    output
}

pub async fn run(client: &QuoteClient, base_url: &str) -> Result<()> {
    let pb = ui::new_spinner("Fetching live quotes...");
    let result = client.fetch_quotes(base_url).await;
    pb.finish_and_clear();

    let quotes = result?;
    info!(count = quotes.all_quotes().len(), "Fetched live quotes");
    println!("{}", display_as_table(&quotes));
    Ok(())
}
