//! # Display indexes
//!
//! Record ids are creation timestamps: stable, but long and unfriendly to
//! type. The CLI addresses records by their 1-based position in the list
//! instead (`roster delete 2`), and falls back to `id:<n>` for an exact id.
//!
//! Positions shift after a delete, so callers resolve every selector to an id
//! before mutating anything.

use crate::error::{Result, RosterError};
use crate::model::StudentRecord;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RecordSelector {
    /// 1-based position in the full list.
    Index(usize),
    Id(i64),
}

impl fmt::Display for RecordSelector {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecordSelector::Index(i) => write!(f, "{}", i),
            RecordSelector::Id(id) => write!(f, "id:{}", id),
        }
    }
}

impl FromStr for RecordSelector {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        let s = s.trim();
        if let Some(rest) = s.strip_prefix("id:")
            && let Ok(id) = rest.parse()
        {
            return Ok(RecordSelector::Id(id));
        }
        match s.parse::<usize>() {
            Ok(n) if n > 0 => Ok(RecordSelector::Index(n)),
            _ => Err(format!("Invalid index format: {}", s)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRecord {
    pub index: usize,
    pub record: StudentRecord,
}

/// Pairs each record with its 1-based position.
pub fn index_records(records: &[StudentRecord]) -> Vec<DisplayRecord> {
    records
        .iter()
        .enumerate()
        .map(|(i, record)| DisplayRecord {
            index: i + 1,
            record: record.clone(),
        })
        .collect()
}

/// Resolves selectors against the current list, all or nothing.
pub fn resolve(records: &[StudentRecord], selectors: &[RecordSelector]) -> Result<Vec<DisplayRecord>> {
    selectors
        .iter()
        .map(|selector| {
            let found = match selector {
                RecordSelector::Index(n) => n
                    .checked_sub(1)
                    .and_then(|i| records.get(i))
                    .map(|r| (*n, r)),
                RecordSelector::Id(id) => records
                    .iter()
                    .enumerate()
                    .find(|(_, r)| r.id == *id)
                    .map(|(i, r)| (i + 1, r)),
            };
            found
                .map(|(index, record)| DisplayRecord {
                    index,
                    record: record.clone(),
                })
                .ok_or_else(|| RosterError::Api(format!("Student {} not found", selector)))
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::fixtures::student;

    #[test]
    fn parses_positions_and_ids() {
        assert_eq!("3".parse::<RecordSelector>().unwrap(), RecordSelector::Index(3));
        assert_eq!(
            "id:1712345678901".parse::<RecordSelector>().unwrap(),
            RecordSelector::Id(1_712_345_678_901)
        );
        assert!("0".parse::<RecordSelector>().is_err());
        assert!("abc".parse::<RecordSelector>().is_err());
        assert!("id:x".parse::<RecordSelector>().is_err());
    }

    #[test]
    fn indexes_are_one_based() {
        let records = vec![student(10, "A"), student(20, "B")];
        let indexed = index_records(&records);
        assert_eq!(indexed[0].index, 1);
        assert_eq!(indexed[1].record.id, 20);
    }

    #[test]
    fn resolves_by_position_and_id() {
        let records = vec![student(10, "A"), student(20, "B")];
        let resolved =
            resolve(&records, &[RecordSelector::Index(2), RecordSelector::Id(10)]).unwrap();
        assert_eq!(resolved[0].record.name, "B");
        assert_eq!(resolved[1].index, 1);
    }

    #[test]
    fn unknown_selector_fails_whole_batch() {
        let records = vec![student(10, "A")];
        assert!(resolve(&records, &[RecordSelector::Index(1), RecordSelector::Index(5)]).is_err());
    }
}
