//! Operation dispatcher tests against the in-memory agent.

mod common;

use std::time::Duration;

use common::{
    agent, combined, if_table, interface_table, nonexistent_oid, sys_contact, sys_descr, sys_name,
    system_mib, system_subtree, target,
};
use snmp_inspect::error::{ErrorStatus, ExceptionKind};
use snmp_inspect::ops::{Inspector, Operation, Records, SetRequest};
use snmp_inspect::session::{Fault, MemoryConnector};
use snmp_inspect::{Credentials, Error, NormalizedValue, Target, Value, oid};
use tokio_util::sync::CancellationToken;

fn inspector() -> Inspector<MemoryConnector> {
    Inspector::new(MemoryConnector::new(agent(combined([
        system_mib(),
        interface_table(2),
    ]))))
}

fn assert_all_closed(inspector: &Inspector<MemoryConnector>) {
    let opened = inspector.connector().opened();
    assert!(!opened.is_empty());
    assert!(opened.iter().all(|s| s.is_closed()));
}

#[tokio::test]
async fn get_reports_per_item_errors() {
    let inspector = inspector();
    let records = inspector
        .execute(&target(), Operation::get([sys_descr(), nonexistent_oid(), sys_name()]))
        .await
        .unwrap()
        .into_varbinds()
        .unwrap();

    assert_eq!(records.len(), 3);
    assert_eq!(records[0].oid, sys_descr());
    assert_eq!(records[0].value, Ok(NormalizedValue::from("Test SNMP Agent")));
    assert_eq!(
        records[1].value.as_ref().unwrap_err().kind,
        ExceptionKind::NoSuchObject
    );
    assert_eq!(records[2].value, Ok(NormalizedValue::from("test-agent")));
    assert_all_closed(&inspector);
}

#[tokio::test]
async fn get_records_serialize() {
    let records = inspector()
        .execute(&target(), Operation::get([sys_name(), nonexistent_oid()]))
        .await
        .unwrap();
    assert_eq!(
        serde_json::to_value(&records).unwrap(),
        serde_json::json!([
            {"oid": "1.3.6.1.2.1.1.5.0", "value": "test-agent"},
            {"oid": "1.3.6.1.99.99.99.0", "value": {"error": "noSuchObject"}},
        ])
    );
}

#[tokio::test]
async fn set_coerces_to_current_types() {
    let inspector = inspector();
    let speed = oid!(1, 3, 6, 1, 2, 1, 2, 2, 1, 5, 1);
    let records = inspector
        .execute(
            &target(),
            Operation::set([
                SetRequest::new(sys_contact(), "noc@example.net"),
                SetRequest::new(speed.clone(), "100000000"),
            ]),
        )
        .await
        .unwrap()
        .into_varbinds()
        .unwrap();

    assert_eq!(records[0].value, Ok(NormalizedValue::from("noc@example.net")));
    assert_eq!(records[1].value, Ok(NormalizedValue::Integer(100_000_000)));

    let agent = inspector.connector().session();
    assert_eq!(agent.value(&speed), Some(Value::Gauge32(100_000_000)));
    // one GET to learn the types, then the SET
    assert_eq!(agent.gets().len(), 1);
    assert_eq!(agent.sets().len(), 1);
    assert_all_closed(&inspector);
}

#[tokio::test]
async fn set_rejects_unparseable_value_before_writing() {
    let inspector = inspector();
    let err = inspector
        .execute(
            &target(),
            Operation::set([
                SetRequest::new(sys_contact(), "ok"),
                SetRequest::new(oid!(1, 3, 6, 1, 2, 1, 1, 7, 0), "lots"),
            ]),
        )
        .await
        .unwrap_err();

    assert!(matches!(err, Error::InvalidValue { ref oid, .. } if *oid == oid!(1, 3, 6, 1, 2, 1, 1, 7, 0)));
    assert!(inspector.connector().session().sets().is_empty());
    assert_all_closed(&inspector);
}

#[tokio::test]
async fn set_rejects_missing_object() {
    let err = inspector()
        .execute(&target(), Operation::set([SetRequest::new(nonexistent_oid(), "1")]))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::InvalidValue { .. }));
}

#[tokio::test]
async fn set_surfaces_agent_error_status() {
    let session = agent(system_mib()).with_read_only(sys_descr());
    let inspector = Inspector::new(MemoryConnector::new(session));
    let err = inspector
        .execute(&target(), Operation::set([SetRequest::new(sys_descr(), "new")]))
        .await
        .unwrap_err();
    assert!(matches!(
        err,
        Error::Snmp {
            status: ErrorStatus::NotWritable,
            ..
        }
    ));
    assert_all_closed(&inspector);
}

#[tokio::test]
async fn walk_defaults_to_mib2() {
    let session = agent(combined([system_mib(), interface_table(1)]))
        .with_entry(oid!(1, 3, 6, 1, 4, 1, 99999, 1, 0), Value::Integer(1));
    let inspector = Inspector::new(MemoryConnector::new(session));

    let entries = inspector
        .execute(&target(), Operation::Walk { root: None })
        .await
        .unwrap()
        .into_tree()
        .unwrap();

    assert_eq!(entries.len(), 7 + 1 + 6);
    assert!(entries.iter().all(|e| e.oid.starts_with(&oid!(1, 3, 6, 1, 2, 1))));
    assert_eq!(
        inspector.connector().session().rounds()[0].root,
        oid!(1, 3, 6, 1, 2, 1)
    );
}

#[tokio::test]
async fn walk_uses_target_max_repetitions() {
    let inspector = inspector();
    let target = Target::builder("192.0.2.1").max_repetitions(25).build().unwrap();
    inspector
        .execute(&target, Operation::walk(system_subtree()))
        .await
        .unwrap();
    let rounds = inspector.connector().session().rounds();
    assert!(rounds.iter().all(|r| r.max_repetitions == 25));
}

#[tokio::test]
async fn walk_failure_closes_session() {
    let session = agent(system_mib()).with_round_cap(2).with_fault(2, Fault::Io("reset".into()));
    let inspector = Inspector::new(MemoryConnector::new(session));
    let err = inspector
        .execute(&target(), Operation::walk(system_subtree()))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Walk { discarded: 2, .. }));
    assert_all_closed(&inspector);
}

#[tokio::test]
async fn table_operation() {
    let rows = inspector()
        .execute(&target(), Operation::table(if_table()))
        .await
        .unwrap()
        .into_table()
        .unwrap();
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[1].get("ifDescr"), Some(&Ok(NormalizedValue::from("eth1"))));
}

#[tokio::test]
async fn rejected_credentials_fail_before_any_request() {
    let connector = MemoryConnector::new(agent(system_mib())).with_credentials(Credentials::v2c("secret"));
    let inspector = Inspector::new(connector);

    let err = inspector
        .execute(&target(), Operation::get([sys_descr()]))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::AuthenticationFailed { .. }));
    assert!(inspector.connector().opened().is_empty());
    assert!(inspector.connector().session().gets().is_empty());
}

#[tokio::test]
async fn invalid_target_is_config_error() {
    let mut target = target();
    target.port = 0;
    let err = inspector()
        .execute(&target, Operation::get([sys_descr()]))
        .await
        .unwrap_err();
    assert!(matches!(err, Error::Config(_)));
}

#[tokio::test(start_paused = true)]
async fn cancellation_abandons_operation_and_closes_session() {
    let session = agent(system_mib()).with_latency(Duration::from_secs(60));
    let cancel = CancellationToken::new();
    let inspector = Inspector::new(MemoryConnector::new(session)).with_cancel(cancel.clone());

    let canceller = tokio::spawn(async move {
        tokio::time::sleep(Duration::from_secs(1)).await;
        cancel.cancel();
    });

    let err = inspector
        .execute(&target(), Operation::get([sys_descr()]))
        .await
        .unwrap_err();
    canceller.await.unwrap();

    assert!(matches!(err, Error::Cancelled));
    assert_all_closed(&inspector);
}

#[tokio::test]
async fn search_filters_walk_entries() {
    let inspector = inspector();
    let choices = inspector.search(&target(), "sysname").await.unwrap();
    assert_eq!(choices.len(), 1);
    assert_eq!(
        choices[0].label,
        "iso.org.dod.internet.mgmt.mib-2.system.sysName.0 (1.3.6.1.2.1.1.5.0)"
    );
    assert_eq!(choices[0].oid, sys_name());

    let all = inspector.search(&target(), "").await.unwrap();
    assert_eq!(all.len(), 7 + 1 + 6 * 2);
}

#[test]
fn records_len() {
    assert!(Records::Tree(Vec::new()).is_empty());
}
