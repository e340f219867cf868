//! CSV file reading into string tables.

use std::fs::File;
use std::io::Read;
use std::path::Path;

use csv::{ByteRecord, ReaderBuilder, Trim};

use crate::error::{IngestError, Result};

use super::header::CsvHeaders;

/// Maximum file size for CSV loading (500 MB default).
pub const MAX_CSV_FILE_SIZE: u64 = 500 * 1024 * 1024;

/// A CSV file read as text: header plus data rows.
///
/// Rows may be shorter or longer than the header; [`CsvRecord::get`] reads a
/// missing cell as the empty string.
#[derive(Debug, Clone, Default)]
pub struct CsvTable {
    pub headers: CsvHeaders,
    pub rows: Vec<Vec<String>>,
}

impl CsvTable {
    pub fn height(&self) -> usize {
        self.rows.len()
    }

    pub fn records(&self) -> impl Iterator<Item = CsvRecord<'_>> {
        self.rows.iter().map(|cells| CsvRecord {
            headers: &self.headers,
            cells,
        })
    }
}

/// One data row with by-name cell access.
#[derive(Debug, Clone, Copy)]
pub struct CsvRecord<'a> {
    headers: &'a CsvHeaders,
    cells: &'a [String],
}

impl<'a> CsvRecord<'a> {
    pub fn get(&self, column: &str) -> &'a str {
        self.headers
            .position(column)
            .and_then(|idx| self.cells.get(idx))
            .map(String::as_str)
            .unwrap_or("")
    }

    pub fn get_owned(&self, column: &str) -> String {
        self.get(column).to_string()
    }
}

/// Check file size before loading.
pub fn check_file_size(path: &Path) -> Result<()> {
    check_file_size_with_limit(path, MAX_CSV_FILE_SIZE)
}

/// Check file size against a custom limit.
pub fn check_file_size_with_limit(path: &Path, max_size: u64) -> Result<()> {
    let metadata = std::fs::metadata(path).map_err(|e| IngestError::from_io(path, e))?;

    if metadata.len() > max_size {
        return Err(IngestError::FileTooLarge {
            path: path.to_path_buf(),
            size: metadata.len(),
            max_size,
        });
    }

    Ok(())
}

/// Rejects UTF-16 files; UTF-8 with or without BOM is accepted.
pub fn validate_encoding(path: &Path) -> Result<()> {
    let mut file = File::open(path).map_err(|e| IngestError::from_io(path, e))?;

    let mut buffer = [0u8; 4];
    let bytes_read = file
        .read(&mut buffer)
        .map_err(|e| IngestError::from_io(path, e))?;

    if bytes_read >= 2 {
        if buffer[0..2] == [0xFF, 0xFE] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 LE",
            });
        }
        if buffer[0..2] == [0xFE, 0xFF] {
            return Err(IngestError::UnsupportedEncoding {
                path: path.to_path_buf(),
                encoding: "UTF-16 BE",
            });
        }
    }

    Ok(())
}

/// Reads a CSV file with a single header row into a [`CsvTable`].
///
/// Blank lines and rows whose cells are all empty are skipped. A file with no
/// header row is an error; a header-only file yields an empty table. Bytes
/// that are not valid UTF-8 become U+FFFD instead of failing the file.
pub fn read_csv_table(path: &Path) -> Result<CsvTable> {
    check_file_size(path)?;
    validate_encoding(path)?;

    let mut reader = ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(Trim::All)
        .from_path(path)
        .map_err(|e| IngestError::from_csv(path, &e))?;

    let mut records = reader.byte_records();
    let header = match records.next() {
        Some(record) => record.map_err(|e| IngestError::from_csv(path, &e))?,
        None => {
            return Err(IngestError::EmptyCsv {
                path: path.to_path_buf(),
            });
        }
    };
    let headers = CsvHeaders::new(decode_cells(&header));
    if headers.columns.iter().all(String::is_empty) {
        return Err(IngestError::EmptyCsv {
            path: path.to_path_buf(),
        });
    }

    let mut rows = Vec::new();
    let mut lossy_rows = 0usize;
    for record in records {
        let record = record.map_err(|e| IngestError::from_csv(path, &e))?;
        if record.iter().all(<[u8]>::is_empty) {
            continue;
        }
        if std::str::from_utf8(record.as_slice()).is_err() {
            lossy_rows += 1;
        }
        rows.push(decode_cells(&record));
    }

    if lossy_rows > 0 {
        tracing::warn!(
            path = %path.display(),
            rows = lossy_rows,
            "replaced invalid utf-8 bytes"
        );
    }
    tracing::debug!(
        path = %path.display(),
        columns = headers.len(),
        rows = rows.len(),
        "read csv table"
    );

    Ok(CsvTable { headers, rows })
}

fn decode_cells(record: &ByteRecord) -> Vec<String> {
    record
        .iter()
        .map(|cell| String::from_utf8_lossy(cell).into_owned())
        .collect()
}
