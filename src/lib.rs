//! Utility primitives for capture-device protocol plumbing.
//!
//! `capwire` collects the pure helpers shared by a capture driver's
//! control and streaming paths: width-generic big-endian field codecs,
//! bounded-denominator rational approximation for rate and divider
//! registers, and structural splitting of combined address-and-port
//! endpoint strings.
//!
//! Every routine is a pure function over caller-supplied data: no
//! shared state, no allocation beyond the visible outputs, no I/O, and
//! no blocking. All of them are safe to call concurrently.

pub mod byte_order;
pub mod endpoint;
pub mod fraction;

pub use byte_order::{
    WireUnsigned,
    read_network,
    read_network_bounded,
    write_network,
    write_network_bounded,
};
pub use endpoint::{AddressPort, SplitError, split_address_port};
pub use fraction::Fraction;
