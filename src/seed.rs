use std::io::Read;
use std::path::Path;

use csv::{ReaderBuilder, Trim};
use log::{debug, info, warn};

use crate::error::Result;
use crate::list::LinkedList;
use crate::record::Record;

/// Reads records from CSV with a header row. Rows that do not parse or break a
/// field rule are skipped with a warning; I/O failures abort.
pub fn read_csv<T: Record, R: Read>(input: R, origin: &str) -> Result<Vec<T>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .trim(Trim::All)
        .from_reader(input);

    let mut records = Vec::new();
    for result in reader.deserialize::<T>() {
        match result {
            Ok(record) => records.push(record),
            Err(e) if matches!(e.kind(), csv::ErrorKind::Io(_)) => return Err(e.into()),
            Err(e) => warn!("Skipping invalid row in {}: {}", origin, e),
        }
    }

    debug!("Read {} {} from {}", records.len(), T::PLURAL, origin);
    Ok(records)
}

pub fn read_csv_file<T: Record>(path: &Path) -> Result<Vec<T>> {
    let file = std::fs::File::open(path)?;
    read_csv(file, &path.display().to_string())
}

/// The list the menu starts with: built-in samples first, then the CSV rows,
/// each inserted at the front in order.
pub fn initial_list<T: Record>(with_samples: bool, csv: Option<&Path>) -> Result<LinkedList<T>> {
    let mut list = LinkedList::new();

    if with_samples {
        list.extend(T::samples());
    }
    if let Some(path) = csv {
        list.extend(read_csv_file::<T>(path)?);
    }

    info!("Starting with {} {}", list.len(), T::PLURAL);
    Ok(list)
}
