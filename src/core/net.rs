// src/core/net.rs

// Blocking HTTPS GET. Certificate validation stays on unless the caller
// opted in to accept_invalid_certs.

use std::error::Error;
use std::time::Duration;

use crate::config::consts::USER_AGENT;
use crate::config::options::FetchOptions;

pub fn http_get(url: &str, opts: &FetchOptions) -> Result<String, Box<dyn Error>> {
    if opts.accept_invalid_certs {
        logf!("Net: TLS certificate validation disabled for this fetch");
    }

    let client = reqwest::blocking::Client::builder()
        .user_agent(USER_AGENT)
        .timeout(Duration::from_secs(opts.timeout_secs))
        .danger_accept_invalid_certs(opts.accept_invalid_certs)
        .build()?;

    let resp = client.get(url).send()?;
    let status = resp.status();
    if !status.is_success() {
        return Err(format!("HTTP error: {} {}", status, url).into());
    }
    Ok(resp.text()?)
}
