use anyhow::Result;
use datagovsg::{Client, QueryOption};
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Example program that calls the library API.
    // `RUST_LOG=datagovsg=debug` shows the requests being made.
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("datagovsg=info")),
        )
        .init();

    let client = Client::new()?;

    let options = match std::env::args().nth(1) {
        Some(date) => vec![QueryOption::date(date)],
        None => Vec::new(),
    };
    let psi = client.psi(&options)?;

    println!("API status: {}", psi.api_info.status);
    for item in &psi.items {
        println!("{}", item.timestamp);
        for (region, value) in &item.readings.psi_twenty_four_hourly {
            let co = item.readings.co_eight_hour_max.get(region).copied().unwrap_or_default();
            println!("  {:<10} PSI {:>3}  CO 8h max {:.2} mg/m3", region, value, co);
        }
    }
    Ok(())
}
