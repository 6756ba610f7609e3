use std::env;

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub sheet_csv_url: String,
    pub cache_ttl_seconds: u64,
    pub bind_addr: String,
}

/// Reads configuration from the environment. Only the sheet URL is required.
pub fn load_config() -> Result<AppConfig, Box<dyn std::error::Error>> {
    let sheet_csv_url = env::var("SHEET_CSV_URL").map_err(|_| "SHEET_CSV_URL is not set")?;

    let cache_ttl_seconds = match env::var("CACHE_TTL") {
        Ok(raw) => raw
            .trim()
            .parse::<u64>()
            .map_err(|_| format!("CACHE_TTL is not a number: {raw:?}"))?,
        Err(_) => 60,
    };

    let bind_addr = env::var("BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8000".to_string());

    Ok(AppConfig {
        sheet_csv_url,
        cache_ttl_seconds,
        bind_addr,
    })
}
