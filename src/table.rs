//! Table reconstruction.
//!
//! The SNMP engine returns a conceptual table as rows keyed by index, each
//! row mapping column numbers to values. [`reconstruct`] names the columns
//! through the MIB and normalizes every cell.

use std::collections::{BTreeMap, HashMap};

use tracing::instrument;

use crate::error::Result;
use crate::mib::Resolver;
use crate::normalize::{Normalized, normalize_value};
use crate::oid::Oid;
use crate::session::Session;
use crate::value::Value;

/// One row as delivered by the engine.
#[derive(Debug, Clone, PartialEq)]
pub struct RawRow {
    /// Row index exactly as the engine keyed it (`"1"`, `"10.0.0.1"`).
    pub index: String,
    /// Column number to cell value.
    pub columns: BTreeMap<u32, Value>,
}

impl RawRow {
    pub fn new(index: impl Into<String>) -> Self {
        Self {
            index: index.into(),
            columns: BTreeMap::new(),
        }
    }

    pub fn with(mut self, column: u32, value: impl Into<Value>) -> Self {
        self.columns.insert(column, value.into());
        self
    }
}

/// A table as delivered by the engine, rows in delivery order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct RawTable {
    rows: Vec<RawRow>,
}

impl RawTable {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, row: RawRow) {
        self.rows.push(row);
    }

    pub fn rows(&self) -> &[RawRow] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

impl FromIterator<RawRow> for RawTable {
    fn from_iter<I: IntoIterator<Item = RawRow>>(iter: I) -> Self {
        Self {
            rows: iter.into_iter().collect(),
        }
    }
}

/// One reconstructed row: the index and each named, normalized cell.
///
/// A cell holding an exception marker is kept as `Err` so the rest of the
/// row stays usable.
#[derive(Debug, Clone, PartialEq)]
pub struct TableRow {
    pub index: String,
    pub columns: Vec<(String, Normalized)>,
}

impl TableRow {
    /// Cell by column name.
    pub fn get(&self, column: &str) -> Option<&Normalized> {
        self.columns
            .iter()
            .find(|(name, _)| name == column)
            .map(|(_, value)| value)
    }

    /// Column names in row order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(name, _)| name.as_str())
    }
}

#[cfg(feature = "serde")]
impl serde::Serialize for TableRow {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        use serde::ser::SerializeStruct;

        struct Columns<'a>(&'a [(String, Normalized)]);

        impl serde::Serialize for Columns<'_> {
            fn serialize<S: serde::Serializer>(
                &self,
                serializer: S,
            ) -> std::result::Result<S::Ok, S::Error> {
                use serde::ser::SerializeMap;

                struct Cell<'a>(&'a Normalized);

                impl serde::Serialize for Cell<'_> {
                    fn serialize<S: serde::Serializer>(
                        &self,
                        serializer: S,
                    ) -> std::result::Result<S::Ok, S::Error> {
                        crate::normalize::serialize_normalized(self.0, serializer)
                    }
                }

                let mut map = serializer.serialize_map(Some(self.0.len()))?;
                for (name, value) in self.0 {
                    map.serialize_entry(name, &Cell(value))?;
                }
                map.end()
            }
        }

        let mut row = serializer.serialize_struct("TableRow", 2)?;
        row.serialize_field("index", &self.index)?;
        row.serialize_field("columns", &Columns(&self.columns))?;
        row.end()
    }
}

/// Display name for column `column` of the table at `base`.
///
/// The entry OID `base.1.column` is resolved and only its last path
/// segment is kept. Unresolvable columns fall back to the column number.
pub fn column_name(resolver: &Resolver, base: &Oid, column: u32) -> String {
    let path = resolver.display_name(&base.join(&[1, column]));
    match path.rsplit_once('.') {
        Some((_, last)) => last.to_owned(),
        None => path,
    }
}

/// Turn a raw table into named rows, preserving row order.
///
/// Column names are resolved once per distinct column, starting with the
/// columns of the first row. An empty table yields no rows.
pub fn reconstruct(raw: &RawTable, base: &Oid, resolver: &Resolver) -> Vec<TableRow> {
    let mut names: HashMap<u32, String> = HashMap::new();
    if let Some(first) = raw.rows.first() {
        for &column in first.columns.keys() {
            names.insert(column, column_name(resolver, base, column));
        }
    }

    let rows: Vec<TableRow> = raw
        .rows
        .iter()
        .map(|row| TableRow {
            index: row.index.clone(),
            columns: row
                .columns
                .iter()
                .map(|(&column, value)| {
                    let name = names
                        .entry(column)
                        .or_insert_with(|| {
                            tracing::debug!(target: "snmp_inspect::table", { snmp.column = column, snmp.index = %row.index }, "column missing from first row");
                            column_name(resolver, base, column)
                        })
                        .clone();
                    (name, normalize_value(value))
                })
                .collect(),
        })
        .collect();

    tracing::debug!(target: "snmp_inspect::table", { snmp.oid = %base, snmp.rows = rows.len(), snmp.columns = names.len() }, "reconstructed table");
    rows
}

/// Fetch the table at `base` and reconstruct it.
#[instrument(level = "debug", skip(session, resolver), err, fields(snmp.target = %session.peer(), snmp.oid = %base))]
pub async fn fetch_table<S: Session>(
    session: &S,
    base: &Oid,
    resolver: &Resolver,
) -> Result<Vec<TableRow>> {
    let raw = session.table(base).await?;
    Ok(reconstruct(&raw, base, resolver))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExceptionKind;
    use crate::normalize::NormalizedValue;
    use crate::oid;

    fn if_entry_base() -> Oid {
        oid!(1, 3, 6, 1, 2, 1, 2, 2)
    }

    #[test]
    fn test_column_name_last_segment() {
        let resolver = Resolver::standard();
        assert_eq!(column_name(&resolver, &if_entry_base(), 2), "ifDescr");
        assert_eq!(column_name(&resolver, &if_entry_base(), 5), "ifSpeed");
        // no such column registered: numeric fallback through the unknown suffix
        assert_eq!(column_name(&resolver, &if_entry_base(), 99), "99");
    }

    #[test]
    fn test_reconstruct_rows_in_order() {
        let raw: RawTable = [
            RawRow::new("1")
                .with(2, "eth0")
                .with(5, Value::Gauge32(10)),
            RawRow::new("2")
                .with(2, "eth1")
                .with(5, Value::Gauge32(20)),
        ]
        .into_iter()
        .collect();

        let rows = reconstruct(&raw, &if_entry_base(), &Resolver::standard());
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].index, "1");
        assert_eq!(rows[0].get("ifDescr"), Some(&Ok(NormalizedValue::from("eth0"))));
        assert_eq!(rows[0].get("ifSpeed"), Some(&Ok(NormalizedValue::Integer(10))));
        assert_eq!(rows[1].index, "2");
        assert_eq!(rows[1].get("ifDescr"), Some(&Ok(NormalizedValue::from("eth1"))));
        assert_eq!(
            rows[1].column_names().collect::<Vec<_>>(),
            vec!["ifDescr", "ifSpeed"]
        );
    }

    #[test]
    fn test_empty_table() {
        let rows = reconstruct(&RawTable::new(), &if_entry_base(), &Resolver::standard());
        assert!(rows.is_empty());
    }

    #[test]
    fn test_exception_cell_is_per_item() {
        let raw: RawTable = [RawRow::new("7")
            .with(2, "lo")
            .with(5, Value::NoSuchInstance)]
        .into_iter()
        .collect();

        let rows = reconstruct(&raw, &if_entry_base(), &Resolver::standard());
        assert_eq!(rows[0].get("ifDescr"), Some(&Ok(NormalizedValue::from("lo"))));
        let err = rows[0].get("ifSpeed").unwrap().as_ref().unwrap_err();
        assert_eq!(err.kind, ExceptionKind::NoSuchInstance);
    }

    #[test]
    fn test_column_absent_from_first_row() {
        let raw: RawTable = [
            RawRow::new("1").with(2, "eth0"),
            RawRow::new("2").with(2, "eth1").with(8, Value::Integer(1)),
        ]
        .into_iter()
        .collect();

        let rows = reconstruct(&raw, &if_entry_base(), &Resolver::standard());
        assert_eq!(rows[1].get("ifOperStatus"), Some(&Ok(NormalizedValue::Integer(1))));
    }
}
