//! Formatting utilities for SNMP values.
//!
//! ## Hex Encoding
//!
//! The [`hex`] module renders opaque payloads in logs and `Display` output,
//! and parses hex input for SET requests on binary objects.
//!
//! ```
//! use snmp_inspect::format::hex;
//!
//! assert_eq!(hex::encode(&[0xde, 0xad, 0xbe, 0xef]), "deadbeef");
//!
//! // Lazy formatting for logging
//! let data = [0x00, 0xff];
//! println!("{}", hex::Bytes(&data)); // prints: 00ff
//! ```

pub mod hex;
