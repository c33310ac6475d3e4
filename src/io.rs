use std::fs::File;
use std::io::{BufRead, BufReader, BufWriter, Write};
use std::path::Path;

use thiserror::Error;

use crate::apriori::{FrequentLevel, TransactionStore};

#[derive(Debug, Error)]
pub enum IoError {
    #[error("could not read transaction log `{path}`: {source}")]
    ReadLog {
        path: String,
        source: std::io::Error,
    },
    #[error("invalid SKU token `{token}` on line {line} of `{path}`")]
    InvalidToken {
        path: String,
        line: usize,
        token: String,
    },
    #[error("could not write output file `{path}`: {source}")]
    WriteOutput {
        path: String,
        source: std::io::Error,
    },
}

/// Reads a transaction log: one transaction per line, whitespace-separated
/// integer SKUs. Duplicate SKUs within a line collapse to one; blank lines
/// are skipped; any non-integer token is an error.
pub fn read_transactions(path: &Path) -> Result<TransactionStore, IoError> {
    let display = path.display().to_string();
    let file = File::open(path).map_err(|source| IoError::ReadLog {
        path: display.clone(),
        source,
    })?;

    let mut store = TransactionStore::new();
    for (line_no, line) in BufReader::new(file).lines().enumerate() {
        let line = line.map_err(|source| IoError::ReadLog {
            path: display.clone(),
            source,
        })?;
        if line.trim().is_empty() {
            continue;
        }
        let mut items = Vec::new();
        for token in line.split_whitespace() {
            let sku = token.parse::<usize>().map_err(|_| IoError::InvalidToken {
                path: display.clone(),
                line: line_no + 1,
                token: token.to_string(),
            })?;
            items.push(sku);
        }
        store.push(items);
    }
    Ok(store)
}

/// Writes frequent item sets, one per line: `<size> <support> <item...>`,
/// space-separated, in the driver's output order.
pub fn write_frequent_sets(path: &Path, levels: &[FrequentLevel]) -> Result<(), IoError> {
    let display = path.display().to_string();
    let wrap = |source| IoError::WriteOutput {
        path: display.clone(),
        source,
    };

    let file = File::create(path).map_err(wrap)?;
    let mut writer = BufWriter::new(file);
    for level in levels {
        for (itemset, support) in level.iter_with_support() {
            write!(writer, "{} {}", level.itemset_size, support).map_err(wrap)?;
            for item in itemset {
                write!(writer, " {item}").map_err(wrap)?;
            }
            writeln!(writer).map_err(wrap)?;
        }
    }
    writer.flush().map_err(wrap)?;
    Ok(())
}
