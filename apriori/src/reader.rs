//! Line-oriented transaction source: one transaction per line, items
//! separated by whitespace.

use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

use crate::error::{AprioriError, Result};
use crate::mining::ItemId;

pub type Transaction = Vec<ItemId>;

/// Lazily parses transactions from any buffered reader.
pub struct TransactionReader<R> {
    lines: Lines<R>,
    line_no: usize,
}

impl<R: BufRead> TransactionReader<R> {
    pub fn new(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            line_no: 0,
        }
    }
}

impl<R: BufRead> Iterator for TransactionReader<R> {
    type Item = Result<Transaction>;

    fn next(&mut self) -> Option<Self::Item> {
        let line = match self.lines.next()? {
            Ok(line) => line,
            Err(e) => return Some(Err(AprioriError::Io(e))),
        };
        self.line_no += 1;
        Some(parse_transaction(&line, self.line_no))
    }
}

/// Parses one line; `line_no` is 1-based and only used for error reports.
pub fn parse_transaction(line: &str, line_no: usize) -> Result<Transaction> {
    line.split_whitespace()
        .map(|token| {
            token
                .parse::<ItemId>()
                .map_err(|_| AprioriError::invalid_item(line_no, token))
        })
        .collect()
}

pub fn open_transactions(path: impl AsRef<Path>) -> Result<TransactionReader<BufReader<File>>> {
    let file = File::open(path)?;
    Ok(TransactionReader::new(BufReader::new(file)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Cursor, Write};

    #[test]
    fn test_parse_transaction() {
        assert_eq!(parse_transaction("1 2 3", 1).unwrap(), vec![1, 2, 3]);
        assert_eq!(parse_transaction("  7\t9  ", 1).unwrap(), vec![7, 9]);
        assert!(parse_transaction("", 1).unwrap().is_empty());
    }

    #[test]
    fn test_parse_accepts_wide_item_ids() {
        assert_eq!(
            parse_transaction("4294967296 18446744073709551615", 1).unwrap(),
            vec![4_294_967_296, u64::MAX]
        );
    }

    #[test]
    fn test_parse_rejects_bad_tokens() {
        for bad in ["1 x 3", "1 -2", "1 2.5", "18446744073709551616"] {
            match parse_transaction(bad, 4) {
                Err(AprioriError::InvalidItem { line, .. }) => assert_eq!(line, 4),
                other => panic!("expected InvalidItem for {bad:?}, got {other:?}"),
            }
        }
    }

    #[test]
    fn test_reader_numbers_lines() {
        let source = Cursor::new("1 2\n\n3 oops\n4\n");
        let parsed: Vec<_> = TransactionReader::new(source).collect();

        assert_eq!(parsed.len(), 4);
        assert_eq!(parsed[0].as_ref().unwrap(), &vec![1, 2]);
        assert!(parsed[1].as_ref().unwrap().is_empty());
        match &parsed[2] {
            Err(AprioriError::InvalidItem { line, token }) => {
                assert_eq!(*line, 3);
                assert_eq!(token, "oops");
            }
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(parsed[3].as_ref().unwrap(), &vec![4]);
    }

    #[test]
    fn test_open_transactions() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "1 2 3").unwrap();
        writeln!(file, "2 3").unwrap();

        let rows: Vec<_> = open_transactions(file.path())
            .unwrap()
            .collect::<Result<_>>()
            .unwrap();
        assert_eq!(rows, vec![vec![1, 2, 3], vec![2, 3]]);
    }

    #[test]
    fn test_open_missing_file() {
        let err = open_transactions("/definitely/not/here.dat").err().unwrap();
        assert!(matches!(err, AprioriError::Io(_)));
    }
}
