use std::time::Duration;

use litlink_rs::{ExtractOptions, LitClient, LitLink, RowType};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    #[cfg(feature = "tracing-subscriber")]
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let input = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "https://lit.link/4kiiru".to_string());

    // 1. A client with a 10-second timeout.
    let client = LitClient::builder()
        .timeout(Duration::from_secs(10))
        .build()?;

    // 2. Load and normalize, keeping spacer blocks.
    let page = LitLink::new(&client, &input)
        .with_options(ExtractOptions::default().include_margin_block(true));
    let data = page.extract().await?;

    println!("--- {} ({}) ---", data.user_name, page.id());
    println!("Tagline: {}", data.user_field);
    println!("Bio: {}", data.user_description);
    println!();

    println!("--- Links ---");
    for link in &data.user_links {
        println!("{:<12} {}", link.service_name, link.service_url);
    }
    println!();

    println!("--- Rows ---");
    for row in &data.user_row_datas {
        match row.row_type {
            RowType::MarginBlock => println!("[{}]", row.row_type),
            _ => println!("[{}] {} {}", row.row_type, row.title, row.url),
        }
    }
    println!();

    // 3. The record serializes to the same flat JSON shape.
    println!("{}", serde_json::to_string_pretty(data)?);

    Ok(())
}
