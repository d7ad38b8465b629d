use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::Path;

use anyhow::{Context, Result};

use crate::error::TransientError;

#[derive(Debug, Clone)]
pub struct Table {
    pub header: Vec<String>,
    pub rows: Vec<Vec<String>>,
}

/// Reads a tab-separated table with a header row. Blank lines are skipped;
/// cell text is kept verbatim so output rows can reproduce input rows.
pub fn read_table(path: &Path) -> Result<Table> {
    let file =
        File::open(path).with_context(|| format!("failed to open {}", path.display()))?;
    let mut lines = BufReader::new(file).lines();

    let header = match lines.next() {
        Some(line) => split_tsv(&line?),
        None => {
            return Err(TransientError::InputFormat("empty table: missing header row".into()).into())
        }
    };

    let mut rows = Vec::new();
    for line in lines {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        rows.push(split_tsv(&line));
    }

    Ok(Table { header, rows })
}

fn split_tsv(line: &str) -> Vec<String> {
    line.trim_end_matches(['\r', '\n'])
        .split('\t')
        .map(|s| s.to_string())
        .collect()
}
