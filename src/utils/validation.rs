use crate::utils::error::{Result, ShipError};
use std::net::SocketAddr;
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

fn invalid(field_name: &str, value: &str, reason: impl Into<String>) -> ShipError {
    ShipError::InvalidConfigValueError {
        field: field_name.to_string(),
        value: value.to_string(),
        reason: reason.into(),
    }
}

/// ShipIt base URL. `/ship` gets appended to it, so it has to be a plain
/// http(s) origin with an optional path prefix.
pub fn validate_provider_url(field_name: &str, base_url: &str) -> Result<Url> {
    let url = Url::parse(base_url)
        .map_err(|e| invalid(field_name, base_url, format!("not a URL: {}", e)))?;

    if !matches!(url.scheme(), "http" | "https") {
        return Err(invalid(
            field_name,
            base_url,
            format!("ShipIt is reached over http or https, not {}", url.scheme()),
        ));
    }
    if url.host_str().map_or(true, str::is_empty) {
        return Err(invalid(field_name, base_url, "missing host"));
    }
    // query 或 fragment 會讓 `<base>/ship` 變成錯的路徑
    if url.query().is_some() || url.fragment().is_some() {
        return Err(invalid(
            field_name,
            base_url,
            "query string and fragment are not allowed in the base URL",
        ));
    }
    Ok(url)
}

pub fn validate_socket_addr(field_name: &str, addr: &str) -> Result<SocketAddr> {
    addr.parse::<SocketAddr>()
        .map_err(|e| invalid(field_name, addr, format!("Invalid socket address: {}", e)))
}

pub fn validate_positive_number(field_name: &str, value: u64, min_value: u64) -> Result<()> {
    if value < min_value {
        return Err(invalid(
            field_name,
            &value.to_string(),
            format!("Value must be at least {}", min_value),
        ));
    }
    Ok(())
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(invalid(
            field_name,
            value,
            format!("Valid values: {}", allowed.join(", ")),
        ));
    }
    Ok(())
}
