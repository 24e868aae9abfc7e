//! Types command implementation.

use cloplib_operation::OperationTypeRegistry;
use serde::Serialize;

use crate::error::CliError;

#[derive(Debug, PartialEq, Serialize)]
pub struct TypeRow {
    pub key: String,
    pub silent: bool,
}

/// Built-in types sorted by key.
pub fn rows() -> Vec<TypeRow> {
    let registry = OperationTypeRegistry::with_builtins();
    let mut rows: Vec<TypeRow> = registry
        .registered()
        .map(|operation_type| TypeRow {
            key: operation_type.as_minimal_string(),
            silent: operation_type.is_silent(),
        })
        .collect();
    rows.sort_by(|a, b| a.key.cmp(&b.key));
    rows
}

pub fn run(json: bool) -> Result<(), CliError> {
    let rows = rows();
    if json {
        println!("{}", serde_json::to_string_pretty(&rows)?);
        return Ok(());
    }

    println!("{:<34} {}", "TYPE", "VISIBILITY");
    println!("{}", "-".repeat(46));
    for row in &rows {
        let visibility = if row.silent { "silent" } else { "verbose" };
        println!("{:<34} {}", row.key, visibility);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use cloplib_operation::OperationType;

    use super::*;

    #[test]
    fn test_rows_cover_builtins_sorted() {
        let rows = rows();
        assert_eq!(rows.len(), OperationType::builtins().len());
        assert!(rows.windows(2).all(|pair| pair[0].key < pair[1].key));
    }

    #[test]
    fn test_rows_carry_visibility() {
        let rows = rows();
        let fire = rows.iter().find(|row| row.key == "fire_spread").unwrap();
        assert!(fire.silent);
        let place = rows.iter().find(|row| row.key == "block_place").unwrap();
        assert!(!place.silent);
    }
}
