//! Common imports.
//!
//! ```
//! use snmp_inspect::prelude::*;
//!
//! let target = Target::builder("192.0.2.1").build().unwrap();
//! assert_eq!(target.credentials, Credentials::v2c("public"));
//! ```

pub use crate::credentials::{AuthProtocol, Credentials, PrivProtocol, SecurityLevel};
pub use crate::error::{Error, Result};
pub use crate::mib::Resolver;
pub use crate::normalize::{NormalizedValue, normalize, normalize_value};
pub use crate::notification::{NotificationListener, NotificationStream};
pub use crate::oid::Oid;
pub use crate::ops::{Inspector, Operation, Records, SetRequest};
pub use crate::session::{Connector, NotificationSource, Receiver, Session};
pub use crate::target::{ReceiverConfig, Target};
pub use crate::value::Value;
pub use crate::varbind::VarBind;
pub use crate::walk::{WalkOptions, walk_subtree};

#[doc(no_inline)]
pub use crate::oid;
