//! Export helpers for classified track tables.

pub mod table {
    use std::fs::{self, File};
    use std::io::{self, BufWriter, Write};
    use std::path::Path;

    use serde::Serialize;

    /// One exported row per original track point. Field order matches the
    /// column contract consumed by reporting collaborators.
    #[derive(Debug, Clone, Serialize)]
    pub struct Row {
        pub track_id: usize,
        pub latitude: f64,
        pub longitude: f64,
        pub utc: Option<String>,
        pub utc_date: Option<String>,
        pub utc_time: Option<String>,
        pub local: Option<String>,
        pub date: Option<String>,
        pub time: Option<String>,
        pub phase: String,
        pub start_phase: String,
        pub end_phase: String,
        pub name: String,
        pub description: String,
    }

    /// Create a writer for the target path, handling stdout (`-`) by convention.
    pub fn writer_for_path(path: &Path) -> io::Result<Box<dyn Write>> {
        if path == Path::new("-") {
            return Ok(Box::new(BufWriter::new(io::stdout())));
        }
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() {
                fs::create_dir_all(parent)?;
            }
        }
        let file = File::create(path)?;
        Ok(Box::new(BufWriter::new(file)))
    }

    /// Serialize the rows as CSV with a header derived from the row fields.
    pub fn write_table<W: Write>(writer: W, rows: &[Row]) -> csv::Result<()> {
        let mut csv_writer = csv::Writer::from_writer(writer);
        for row in rows {
            csv_writer.serialize(row)?;
        }
        csv_writer.flush()?;
        Ok(())
    }

}
