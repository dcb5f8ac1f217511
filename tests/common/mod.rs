//! Shared test infrastructure for snmp-inspect.
//!
//! Provides MIB data fixtures, in-memory agents built from them and
//! notification builders.

// Allow dead code and unused imports since not all test files use all utilities
#![allow(dead_code)]
#![allow(unused_imports)]

pub mod fixtures;

pub use fixtures::{combined, interface_table, system_mib};

pub use fixtures::{
    if_table, interfaces_subtree, nonexistent_oid, sys_contact, sys_descr, sys_name, sys_uptime,
    system_subtree,
};

pub use fixtures::{agent, link_down_trap, target};
