//! Integration coverage for endpoint splitting as connection setup uses it.

use std::net::SocketAddr;

use capwire::{AddressPort, SplitError, split_address_port};

#[test]
fn splits_every_documented_endpoint_form() {
    // The forms the capture driver documents for its listen/connect
    // configuration knobs.
    let cases = [
        ("::1", "::1", ""),
        (":1", "", "1"),
        ("[::1]:1", "::1", "1"),
        ("127.0.0.1:1", "127.0.0.1", "1"),
        ("[127.0.0.1]:1", "127.0.0.1", "1"),
    ];
    for (input, address, port) in cases {
        assert_eq!(
            split_address_port(input),
            Ok(AddressPort { address, port }),
            "input {input:?}"
        );
    }
}

#[test]
fn split_components_feed_the_standard_resolver() {
    let endpoint = split_address_port("[::1]:22").expect("structurally valid");
    let resolved: SocketAddr = format!("[{}]:{}", endpoint.address, endpoint.port)
        .parse()
        .expect("resolver accepts the components");
    assert!(resolved.ip().is_loopback());
    assert_eq!(resolved.port(), 22);

    let endpoint = split_address_port("127.0.0.1:8080").expect("structurally valid");
    let resolved: SocketAddr = format!("{}:{}", endpoint.address, endpoint.port)
        .parse()
        .expect("resolver accepts the components");
    assert!(resolved.ip().is_loopback());
    assert_eq!(resolved.port(), 8080);
}

#[test]
fn bracket_errors_surface_before_resolution() {
    assert_eq!(
        split_address_port("[fe80::1"),
        Err(SplitError::UnterminatedBracket)
    );
    assert_eq!(
        split_address_port("[fe80::1]8080"),
        Err(SplitError::InvalidPortSeparator { found: '8' })
    );
}

#[test]
fn errors_render_actionable_messages() {
    assert_eq!(
        SplitError::UnterminatedBracket.to_string(),
        "unterminated '[' in endpoint"
    );
    assert_eq!(
        SplitError::InvalidPortSeparator { found: 'x' }.to_string(),
        "expected ':' after ']', found 'x'"
    );
}
