//! In-memory table type for perfilar.
//!
//! Provides the [`Table`] wrapper over Arrow `RecordBatch`es that all
//! profiling operations consume. Missing values are Arrow nulls; column
//! names are unique and all columns have equal length by construction.

use std::{path::Path, sync::Arc};

use arrow::{
    array::RecordBatch,
    datatypes::{Schema, SchemaRef},
};
use parquet::arrow::arrow_reader::ParquetRecordBatchReaderBuilder;

use crate::error::{Error, Result};

/// An in-memory table backed by Arrow RecordBatches.
///
/// Unlike a training-oriented dataset, a `Table` may hold zero rows or
/// zero columns: profiling an empty dataset is a supported operation,
/// not an error.
///
/// # Example
///
/// ```no_run
/// use perfilar::Table;
///
/// let table = Table::from_csv("data.csv").unwrap();
/// println!("{} rows, {} columns", table.num_rows(), table.num_columns());
/// ```
#[derive(Debug, Clone)]
pub struct Table {
    batches: Vec<RecordBatch>,
    schema: SchemaRef,
    n_rows: usize,
}

impl Table {
    /// Creates a new table from a vector of RecordBatches.
    ///
    /// An empty vector yields an empty table (zero rows, zero columns).
    ///
    /// # Errors
    ///
    /// Returns an error if the batches have inconsistent schemas.
    pub fn new(batches: Vec<RecordBatch>) -> Result<Self> {
        let Some(first) = batches.first() else {
            return Ok(Self::empty());
        };

        let schema = first.schema();
        for (i, batch) in batches.iter().enumerate().skip(1) {
            if batch.schema() != schema {
                return Err(Error::schema_mismatch(format!(
                    "Batch {} has different schema than batch 0",
                    i
                )));
            }
        }

        let n_rows = batches.iter().map(|b| b.num_rows()).sum();

        Ok(Self {
            batches,
            schema,
            n_rows,
        })
    }

    /// Creates a table with no rows and no columns.
    pub fn empty() -> Self {
        Self {
            batches: Vec::new(),
            schema: Arc::new(Schema::empty()),
            n_rows: 0,
        }
    }

    /// Creates a table from a single RecordBatch.
    ///
    /// # Errors
    ///
    /// Currently infallible for a single batch; kept fallible for parity
    /// with [`Table::new`].
    pub fn from_batch(batch: RecordBatch) -> Result<Self> {
        Self::new(vec![batch])
    }

    /// Loads a table from a Parquet file.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened, is not valid
    /// Parquet, or contains no batches.
    pub fn from_parquet(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|e| Error::io(e, path))?;

        let builder = ParquetRecordBatchReaderBuilder::try_new(file).map_err(Error::Parquet)?;
        let reader = builder.build().map_err(Error::Parquet)?;

        let batches: Vec<RecordBatch> = reader
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(Error::Arrow)?;

        if batches.is_empty() {
            return Err(Error::EmptyTable);
        }

        Self::new(batches)
    }

    /// Loads a table from a CSV file with default options.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened, is not valid CSV,
    /// or contains no data rows.
    pub fn from_csv(path: impl AsRef<Path>) -> Result<Self> {
        Self::from_csv_with_options(path, CsvOptions::default())
    }

    /// Loads a table from a CSV file with options.
    ///
    /// # Errors
    ///
    /// Returns an error if parsing fails or the file yields no batches.
    pub fn from_csv_with_options(path: impl AsRef<Path>, options: CsvOptions) -> Result<Self> {
        use std::io::{BufReader, Seek, SeekFrom};

        use arrow_csv::{reader::Format, ReaderBuilder};

        let path = path.as_ref();
        let file = std::fs::File::open(path).map_err(|e| Error::io(e, path))?;
        let mut buf_reader = BufReader::new(file);

        let schema = if let Some(schema) = options.schema {
            Arc::new(schema)
        } else {
            let mut format = Format::default().with_header(options.has_header);
            if let Some(delim) = options.delimiter {
                format = format.with_delimiter(delim);
            }
            let (inferred, _) = format
                .infer_schema(&mut buf_reader, Some(1000))
                .map_err(Error::Arrow)?;

            buf_reader
                .seek(SeekFrom::Start(0))
                .map_err(|e| Error::io(e, path))?;

            Arc::new(inferred)
        };

        let mut builder = ReaderBuilder::new(schema)
            .with_batch_size(options.batch_size)
            .with_header(options.has_header);

        if let Some(delim) = options.delimiter {
            builder = builder.with_delimiter(delim);
        }

        let reader = builder.build(buf_reader).map_err(Error::Arrow)?;

        let batches: Vec<RecordBatch> = reader
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(Error::Arrow)?;

        if batches.is_empty() {
            return Err(Error::EmptyTable);
        }

        Self::new(batches)
    }

    /// Loads a table from a CSV string.
    ///
    /// # Errors
    ///
    /// Returns an error if the string is not valid CSV or holds no rows.
    pub fn from_csv_str(data: &str) -> Result<Self> {
        use std::io::Cursor;

        use arrow_csv::{reader::Format, ReaderBuilder};

        let mut cursor_for_infer = Cursor::new(data.as_bytes());
        let format = Format::default().with_header(true);
        let (inferred, _) = format
            .infer_schema(&mut cursor_for_infer, Some(1000))
            .map_err(Error::Arrow)?;

        let schema = Arc::new(inferred);
        let cursor = Cursor::new(data.as_bytes());

        let builder = ReaderBuilder::new(schema)
            .with_batch_size(8192)
            .with_header(true);

        let reader = builder.build(cursor).map_err(Error::Arrow)?;

        let batches: Vec<RecordBatch> = reader
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(Error::Arrow)?;

        if batches.is_empty() {
            return Err(Error::EmptyTable);
        }

        Self::new(batches)
    }

    /// Loads a table from a JSON Lines (JSONL) file.
    ///
    /// Each line should be a valid JSON object representing a row.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be opened or parsed, or
    /// yields no batches.
    pub fn from_json(path: impl AsRef<Path>) -> Result<Self> {
        use std::io::BufReader;

        use arrow_json::ReaderBuilder;

        let path = path.as_ref();

        let infer_file = std::fs::File::open(path).map_err(|e| Error::io(e, path))?;
        let infer_reader = BufReader::new(infer_file);
        let (inferred, _) = arrow_json::reader::infer_json_schema(infer_reader, Some(1000))
            .map_err(Error::Arrow)?;
        let schema = Arc::new(inferred);

        let file = std::fs::File::open(path).map_err(|e| Error::io(e, path))?;
        let buf_reader = BufReader::new(file);

        let builder = ReaderBuilder::new(schema).with_batch_size(8192);
        let reader = builder.build(buf_reader).map_err(Error::Arrow)?;

        let batches: Vec<RecordBatch> = reader
            .collect::<std::result::Result<Vec<_>, _>>()
            .map_err(Error::Arrow)?;

        if batches.is_empty() {
            return Err(Error::EmptyTable);
        }

        Self::new(batches)
    }

    /// Returns the schema of the table.
    pub fn schema(&self) -> SchemaRef {
        Arc::clone(&self.schema)
    }

    /// Returns the total number of rows.
    pub fn num_rows(&self) -> usize {
        self.n_rows
    }

    /// Returns the number of columns.
    pub fn num_columns(&self) -> usize {
        self.schema.fields().len()
    }

    /// Returns true if the table has no rows.
    pub fn is_empty(&self) -> bool {
        self.n_rows == 0
    }

    /// Returns the underlying batches.
    pub fn batches(&self) -> &[RecordBatch] {
        &self.batches
    }

    /// Returns the schema index of a column by name.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.schema.index_of(name).ok()
    }
}

/// Options for CSV parsing.
#[derive(Debug, Clone)]
pub struct CsvOptions {
    /// Whether the CSV file has a header row.
    pub has_header: bool,
    /// Delimiter character (default is comma).
    pub delimiter: Option<u8>,
    /// Batch size for reading.
    pub batch_size: usize,
    /// Optional schema (inferred if not provided).
    pub schema: Option<Schema>,
}

impl Default for CsvOptions {
    fn default() -> Self {
        Self {
            has_header: true,
            delimiter: None,
            batch_size: 8192,
            schema: None,
        }
    }
}

impl CsvOptions {
    /// Creates new CSV options with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets whether the file has a header row.
    #[must_use]
    pub fn with_header(mut self, has_header: bool) -> Self {
        self.has_header = has_header;
        self
    }

    /// Sets the delimiter character.
    #[must_use]
    pub fn with_delimiter(mut self, delimiter: u8) -> Self {
        self.delimiter = Some(delimiter);
        self
    }

    /// Sets the batch size for reading.
    #[must_use]
    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size;
        self
    }

    /// Sets the schema for parsing.
    #[must_use]
    pub fn with_schema(mut self, schema: Schema) -> Self {
        self.schema = Some(schema);
        self
    }
}
