//! Deep-link query strings: `network=polygon&sell=dai&buy=weth`.
//!
//! The swap view keeps one of these in sync with its selection, and the CLI
//! accepts one to seed the initial pair.

use std::collections::HashMap;

/// Parse `a=1&b=2` (a leading `?` is allowed) into a map.
///
/// Values are percent-decoded; undecodable values are kept raw. A key with no
/// `=` maps to the empty string. Later duplicates win.
pub fn parse_query(query: &str) -> HashMap<String, String> {
    let mut params = HashMap::new();
    let query = query.trim();
    let query = query.strip_prefix('?').unwrap_or(query);

    for pair in query.split('&').filter(|p| !p.is_empty()) {
        let mut parts = pair.splitn(2, '=');
        let key = parts.next().unwrap_or_default();
        let value = parts.next().unwrap_or_default();
        if key.is_empty() {
            continue;
        }
        let decoded = urlencoding::decode(value)
            .map(|v| v.into_owned())
            .unwrap_or_else(|_| value.to_string());
        params.insert(key.to_string(), decoded);
    }

    params
}

/// Build `k=v&k=v` in the given order, percent-encoding values.
pub fn build_query(pairs: &[(&str, &str)]) -> String {
    pairs
        .iter()
        .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_query() {
        let params = parse_query("?network=polygon&sell=dai&buy=weth");
        assert_eq!(params.get("network").map(String::as_str), Some("polygon"));
        assert_eq!(params.get("sell").map(String::as_str), Some("dai"));
        assert_eq!(params.get("buy").map(String::as_str), Some("weth"));
    }

    #[test]
    fn test_parse_query_decodes_and_tolerates_noise() {
        let params = parse_query("sell=us%64c&&flag&=orphan");
        assert_eq!(params.get("sell").map(String::as_str), Some("usdc"));
        assert_eq!(params.get("flag").map(String::as_str), Some(""));
        assert_eq!(params.len(), 2);
    }

    #[test]
    fn test_parse_empty_query() {
        assert!(parse_query("").is_empty());
        assert!(parse_query("?").is_empty());
    }

    #[test]
    fn test_build_query() {
        let query = build_query(&[("network", "ethereum"), ("sell", "usdc"), ("buy", "weth")]);
        assert_eq!(query, "network=ethereum&sell=usdc&buy=weth");
        assert_eq!(build_query(&[("sell", "a b")]), "sell=a%20b");
    }
}
