use anyhow::{Context, Result};
use chrono::Utc;

pub fn split_csv(s: &str) -> Vec<String> {
    s.split(',')
        .map(|x| x.trim().to_string())
        .filter(|x| !x.is_empty())
        .collect()
}

/// Parse a comma-separated seed list. Empty input yields the default seed.
pub fn parse_seeds(s: &str) -> Result<Vec<u64>> {
    let tokens = split_csv(s);
    if tokens.is_empty() {
        return Ok(vec![1337]);
    }
    tokens
        .iter()
        .map(|token| {
            token
                .parse::<u64>()
                .with_context(|| format!("invalid seed {token:?}"))
        })
        .collect()
}

pub fn report_timestamp() -> String {
    Utc::now().format("%Y-%m-%d %H:%M:%S UTC").to_string()
}
