//! Table reconstruction tests.

mod common;

use std::sync::Arc;

use common::{agent, if_table, interface_table};
use snmp_inspect::error::ExceptionKind;
use snmp_inspect::mib::{ModuleStore, Resolver};
use snmp_inspect::table::{RawRow, RawTable, fetch_table, reconstruct};
use snmp_inspect::{NormalizedValue, Value, oid};

/// A resolver where `1.3.6.1.2.1.2.2.1.1.{1,2}` name ifDescr and ifSpeed.
fn example_resolver() -> Resolver {
    let store = ModuleStore::builder()
        .module(
            "EXAMPLE-MIB",
            &[
                ("exampleEntry", "1.3.6.1.2.1.2.2.1", 1),
                ("ifDescr", "exampleEntry", 1),
                ("ifSpeed", "exampleEntry", 2),
            ],
        )
        .build()
        .unwrap();
    Resolver::new(Arc::new(store))
}

fn example_table() -> RawTable {
    [
        RawRow::new("1").with(1, "eth0").with(2, Value::Integer(10)),
        RawRow::new("2").with(1, "eth1").with(2, Value::Integer(20)),
    ]
    .into_iter()
    .collect()
}

#[test]
fn reconstruct_names_columns_and_keeps_row_order() {
    let rows = reconstruct(
        &example_table(),
        &oid!(1, 3, 6, 1, 2, 1, 2, 2, 1),
        &example_resolver(),
    );

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].index, "1");
    assert_eq!(rows[0].get("ifDescr"), Some(&Ok(NormalizedValue::from("eth0"))));
    assert_eq!(rows[0].get("ifSpeed"), Some(&Ok(NormalizedValue::Integer(10))));
    assert_eq!(rows[1].index, "2");
    assert_eq!(rows[1].get("ifDescr"), Some(&Ok(NormalizedValue::from("eth1"))));
    assert_eq!(rows[1].get("ifSpeed"), Some(&Ok(NormalizedValue::Integer(20))));
}

#[test]
fn reconstructed_rows_serialize_as_records() {
    let rows = reconstruct(
        &example_table(),
        &oid!(1, 3, 6, 1, 2, 1, 2, 2, 1),
        &example_resolver(),
    );
    let json = serde_json::to_value(&rows).unwrap();
    assert_eq!(
        json,
        serde_json::json!([
            {"index": "1", "columns": {"ifDescr": "eth0", "ifSpeed": 10}},
            {"index": "2", "columns": {"ifDescr": "eth1", "ifSpeed": 20}},
        ])
    );
}

#[test]
fn exception_cells_serialize_as_error_indicators() {
    let raw: RawTable = [RawRow::new("3").with(1, "eth2").with(2, Value::NoSuchInstance)]
        .into_iter()
        .collect();
    let rows = reconstruct(&raw, &oid!(1, 3, 6, 1, 2, 1, 2, 2, 1), &example_resolver());

    let cell = rows[0].get("ifSpeed").unwrap();
    assert_eq!(cell.as_ref().unwrap_err().kind, ExceptionKind::NoSuchInstance);
    assert_eq!(
        serde_json::to_value(&rows[0]).unwrap(),
        serde_json::json!({"index": "3", "columns": {"ifDescr": "eth2", "ifSpeed": {"error": "noSuchInstance"}}})
    );
}

#[test]
fn empty_table_yields_no_rows() {
    let rows = reconstruct(&RawTable::new(), &if_table(), &Resolver::standard());
    assert!(rows.is_empty());
}

#[tokio::test]
async fn fetch_if_table_from_agent() {
    let session = agent(interface_table(3));
    let rows = fetch_table(&session, &if_table(), &Resolver::standard())
        .await
        .unwrap();

    assert_eq!(rows.len(), 3);
    assert_eq!(
        rows[0].column_names().collect::<Vec<_>>(),
        vec!["ifIndex", "ifDescr", "ifType", "ifSpeed", "ifOperStatus", "ifInOctets"]
    );
    assert_eq!(rows[2].index, "3");
    assert_eq!(rows[2].get("ifDescr"), Some(&Ok(NormalizedValue::from("eth2"))));
    assert_eq!(rows[2].get("ifInOctets"), Some(&Ok(NormalizedValue::Integer(3000))));
    assert_eq!(session.tables(), vec![if_table()]);
}

#[tokio::test]
async fn fetch_table_propagates_transport_failure() {
    let session = agent(interface_table(1));
    session.fail_next_request(snmp_inspect::session::Fault::Timeout);
    let err = fetch_table(&session, &if_table(), &Resolver::standard())
        .await
        .unwrap_err();
    assert!(err.is_transport());
}
