//! Combined address-and-port string splitting.
//!
//! Capture devices are reached over the network and configured with a
//! single "address:port" string. Splitting that string is ambiguous for
//! IPv6 literals, whose colons collide with the port separator; the
//! bracket notation `[addr]:port` resolves the ambiguity. This module
//! performs the purely structural split and leaves semantic validation
//! of both components to the address resolver that consumes them.

use thiserror::Error;
use tracing::debug;

/// Address and port components split out of a combined endpoint string.
///
/// Both fields borrow from the input; either may be empty. An empty
/// address with a non-empty port (`":9090"`) means "any local address,
/// port 9090" to the downstream resolver.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct AddressPort<'a> {
    /// Host address text, without brackets.
    pub address: &'a str,
    /// Port text following the separator, possibly empty.
    pub port: &'a str,
}

/// Structural errors from [`split_address_port`].
///
/// Only bracket syntax can fail; every bracket-free input splits
/// successfully.
#[derive(Clone, Copy, Debug, Eq, Error, PartialEq)]
pub enum SplitError {
    /// An opening `[` had no matching `]`.
    #[error("unterminated '[' in endpoint")]
    UnterminatedBracket,
    /// The text after `]` began with something other than `:`.
    #[error("expected ':' after ']', found {found:?}")]
    InvalidPortSeparator {
        /// First character of the offending remainder.
        found: char,
    },
}

/// Split `input` into its address and port components.
///
/// Bracketed forms (`[addr]` or `[addr]:port`) are unwrapped first. For
/// everything else the colon count decides: no colon means the whole
/// input is the address, a single colon splits address from port, and
/// two or more colons mean a bare IPv6 literal whose port separator
/// would be ambiguous, so no split happens.
///
/// Neither component is validated semantically; a nonsense address or
/// an out-of-range port still splits successfully and is left for the
/// downstream resolver to reject.
///
/// # Examples
///
/// ```
/// use capwire::endpoint::{AddressPort, split_address_port};
///
/// let endpoint = split_address_port("127.0.0.1:8080")?;
/// assert_eq!(endpoint, AddressPort { address: "127.0.0.1", port: "8080" });
///
/// let loopback = split_address_port("::1")?;
/// assert_eq!(loopback, AddressPort { address: "::1", port: "" });
///
/// let bracketed = split_address_port("[::1]:22")?;
/// assert_eq!(bracketed, AddressPort { address: "::1", port: "22" });
/// # Ok::<(), capwire::endpoint::SplitError>(())
/// ```
///
/// # Errors
///
/// Returns [`SplitError::UnterminatedBracket`] when a leading `[` has
/// no matching `]`, and [`SplitError::InvalidPortSeparator`] when text
/// other than `:port` follows the closing bracket.
pub fn split_address_port(input: &str) -> Result<AddressPort<'_>, SplitError> {
    if let Some(inner) = input.strip_prefix('[') {
        return split_bracketed(input, inner);
    }
    Ok(match input.find(':') {
        None => AddressPort {
            address: input,
            port: "",
        },
        // A second colon means a bare IPv6 literal: without brackets no
        // colon can unambiguously be the port separator.
        Some(first) if input[first + 1..].contains(':') => AddressPort {
            address: input,
            port: "",
        },
        Some(first) => AddressPort {
            address: &input[..first],
            port: &input[first + 1..],
        },
    })
}

fn split_bracketed<'a>(input: &'a str, inner: &'a str) -> Result<AddressPort<'a>, SplitError> {
    let Some(close) = inner.find(']') else {
        debug!("rejecting endpoint with unterminated bracket: input={input:?}");
        return Err(SplitError::UnterminatedBracket);
    };
    let address = &inner[..close];
    let remainder = &inner[close + 1..];
    let port = match remainder.chars().next() {
        None => "",
        Some(':') => &remainder[1..],
        Some(found) => {
            debug!("rejecting endpoint with text after closing bracket: input={input:?}");
            return Err(SplitError::InvalidPortSeparator { found });
        }
    };
    Ok(AddressPort { address, port })
}
