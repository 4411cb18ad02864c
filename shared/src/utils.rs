//! # Shared Utility Functions
//!
//! ## Address Formatting
//!
//! Functions for shortening `0x` hex addresses (token contracts, the quote's
//! `to` / allowance target) for display:
//! - [`format_address`] - First N and last M characters around an ellipsis
//! - [`truncate_address`] - `format_address` with the `0x` prefix kept plus 4/4
//!
//! ```rust
//! use shared::utils::format_address;
//!
//! let address = "0xA0b86991c6218b36c1d19D4a2e9Eb0cE3606eB48";
//! assert_eq!(format_address(address, 6, 4), "0xA0b8...eB48");
//! ```

/// Format an address by showing the first `prefix_len` and last `suffix_len` characters.
///
/// If the address is too short to shorten meaningfully it is returned as-is.
///
/// # Examples
///
/// ```rust
/// use shared::utils::format_address;
///
/// let addr = "0xdef1c0ded9bec7f1a1670819833240f027b25eff";
/// assert_eq!(format_address(addr, 6, 4), "0xdef1...5eff");
/// assert_eq!(format_address("0x1234", 6, 4), "0x1234");
/// ```
pub fn format_address(address: &str, prefix_len: usize, suffix_len: usize) -> String {
    let address_len = address.len();

    if !address.is_ascii() || address_len <= prefix_len + suffix_len {
        return address.to_string();
    }

    let prefix = &address[..prefix_len];
    let suffix = &address[address_len - suffix_len..];

    format!("{}...{}", prefix, suffix)
}

/// Format an address keeping the `0x` prefix plus four characters on each side.
///
/// # Examples
///
/// ```rust
/// use shared::utils::truncate_address;
///
/// let addr = "0xC02aaA39b223FE8D0A0e5C4F27eAD9083C756Cc2";
/// assert_eq!(truncate_address(addr), "0xC02a...6Cc2");
/// ```
pub fn truncate_address(address: &str) -> String {
    let prefix_len = if address.starts_with("0x") { 6 } else { 4 };
    format_address(address, prefix_len, 4)
}
