//! One-shot lookup commands

use colored::Colorize;
use serde::Serialize;

use crate::interfaces::cli::CliError;
use crate::services::LookupGateway;

fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::CommandError(format!("Failed to render JSON: {}", e)))?;
    println!("{}", text);
    Ok(())
}

pub async fn print_self_ip(gateway: &LookupGateway) -> Result<(), CliError> {
    let ip = gateway.resolve_self_ip().await?;
    println!("{}", ip.green());
    Ok(())
}

pub async fn print_geolocation(gateway: &LookupGateway) -> Result<(), CliError> {
    let ip = gateway.resolve_self_ip().await?;
    let record = gateway.resolve_geolocation(&ip).await?;
    print_json(&record)
}

pub async fn print_all(gateway: &LookupGateway, ip: &str) -> Result<(), CliError> {
    let data = gateway.resolve_all(ip).await?;
    print_json(&data)
}
