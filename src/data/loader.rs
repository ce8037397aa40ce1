//! Delimited Data Loader Module
//! Reads simulation output files into named `f64` columns using Polars.

use log::debug;
use polars::prelude::*;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum LoaderError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("Failed to parse {path}: {reason}")]
    Parse { path: PathBuf, reason: String },
    #[error("Column '{0}' not found")]
    MissingColumn(String),
    #[error("Polars error: {0}")]
    Polars(#[from] PolarsError),
}

/// Immutable table of equally long, named `f64` columns.
#[derive(Debug, Clone)]
pub struct Table {
    df: DataFrame,
}

impl Table {
    /// Build a table from in-memory columns. All columns must have the same length.
    pub fn from_columns(columns: &[(&str, Vec<f64>)]) -> Result<Self, LoaderError> {
        let columns = columns
            .iter()
            .map(|(name, values)| Column::new((*name).into(), values.as_slice()))
            .collect();
        Ok(Self {
            df: DataFrame::new(columns)?,
        })
    }

    /// Values of a column, in row order.
    pub fn column(&self, name: &str) -> Result<Vec<f64>, LoaderError> {
        let column = self
            .df
            .column(name)
            .map_err(|_| LoaderError::MissingColumn(name.to_string()))?;
        Ok(column.f64()?.into_no_null_iter().collect())
    }

    /// Column names in file order.
    pub fn column_names(&self) -> Vec<String> {
        self.df
            .get_column_names()
            .iter()
            .map(|s| s.to_string())
            .collect()
    }

    /// Number of data rows.
    pub fn height(&self) -> usize {
        self.df.height()
    }

    /// Number of columns.
    pub fn width(&self) -> usize {
        self.df.width()
    }
}

/// Load a delimited file whose every field is numeric.
///
/// `columns` names the fields of each row in order; a row with a different
/// field count, or a field that is not a number, fails the whole load. When
/// `has_header` is set the first line is skipped regardless of its contents.
/// Blank lines are skipped and a file without data rows gives an empty table.
pub fn load(
    path: impl AsRef<Path>,
    delimiter: u8,
    columns: &[&str],
    has_header: bool,
) -> Result<Table, LoaderError> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(LoaderError::NotFound(path.to_path_buf()));
    }

    let schema: SchemaRef = Arc::new(
        columns
            .iter()
            .map(|name| Field::new((*name).into(), DataType::Float64))
            .collect(),
    );

    let parse_err = |reason: String| LoaderError::Parse {
        path: path.to_path_buf(),
        reason,
    };

    // The header row of the simulation files does not match our column names,
    // so it is skipped as a plain row instead of being parsed as a header.
    let read = LazyCsvReader::new(path)
        .with_separator(delimiter)
        .with_has_header(false)
        .with_skip_rows(usize::from(has_header))
        .with_schema(Some(schema.clone()))
        .finish()
        .and_then(|lf| lf.collect());

    let df = match read {
        Ok(df) => df,
        Err(PolarsError::NoData(_)) => DataFrame::empty_with_schema(&schema),
        Err(e) => return Err(parse_err(e.to_string())),
    };

    // Blank lines come back as all-null rows.
    let df = match df
        .get_columns()
        .iter()
        .map(|c| c.is_not_null())
        .reduce(|a, b| &a | &b)
    {
        Some(mask) => df.filter(&mask).map_err(|e| parse_err(e.to_string()))?,
        None => df,
    };

    // Short rows come back padded with nulls rather than as an error.
    if let Some(column) = df.get_columns().iter().find(|c| c.null_count() > 0) {
        return Err(parse_err(format!(
            "{} row(s) missing a value for '{}'",
            column.null_count(),
            column.name()
        )));
    }

    debug!(
        "Loaded {} ({} rows x {} columns)",
        path.display(),
        df.height(),
        df.width()
    );

    Ok(Table { df })
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use std::fs;
    use std::sync::atomic::{AtomicUsize, Ordering};

    static FIXTURE_ID: AtomicUsize = AtomicUsize::new(0);

    /// Fresh, empty directory under the system temp dir.
    pub(crate) fn fixture_dir(tag: &str) -> PathBuf {
        let id = FIXTURE_ID.fetch_add(1, Ordering::SeqCst);
        let dir = std::env::temp_dir().join(format!(
            "dctcp_plots_{}_{}_{}",
            tag,
            std::process::id(),
            id
        ));
        let _ = fs::remove_dir_all(&dir);
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    fn write(dir: &Path, name: &str, contents: &str) -> PathBuf {
        let path = dir.join(name);
        fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn loads_headered_space_delimited_file() {
        let dir = fixture_dir("loader_header");
        let path = write(
            &dir,
            "fig.dat",
            "#Time(s) qlen(pkts) qlen(us)\n0.00 5 1.5\n0.01 7 2\n0.02 9 3.25\n",
        );

        let table = load(&path, b' ', &["seconds", "queue_length", "backlog"], true).unwrap();
        assert_eq!(table.width(), 3);
        assert_eq!(table.height(), 3);
        assert_eq!(
            table.column_names(),
            vec!["seconds", "queue_length", "backlog"]
        );
        assert_eq!(table.column("queue_length").unwrap(), vec![5.0, 7.0, 9.0]);
        assert_eq!(table.column("backlog").unwrap(), vec![1.5, 2.0, 3.25]);
    }

    #[test]
    fn loads_comma_delimited_file_without_header() {
        let dir = fixture_dir("loader_comma");
        let path = write(&dir, "tput.dat", "0.1,100\n0.2,250.5\n");

        let table = load(&path, b',', &["seconds", "throughput"], false).unwrap();
        assert_eq!(table.height(), 2);
        assert_eq!(table.column("seconds").unwrap(), vec![0.1, 0.2]);
        assert_eq!(table.column("throughput").unwrap(), vec![100.0, 250.5]);
    }

    #[test]
    fn missing_file_is_not_found() {
        let dir = fixture_dir("loader_missing");
        let err = load(dir.join("absent.dat"), b' ', &["a"], false).unwrap_err();
        assert!(matches!(err, LoaderError::NotFound(_)));
    }

    #[test]
    fn non_numeric_field_fails_whole_load() {
        let dir = fixture_dir("loader_text");
        let path = write(&dir, "bad.dat", "1 2\n3 four\n5 6\n");
        let err = load(&path, b' ', &["a", "b"], false).unwrap_err();
        assert!(matches!(err, LoaderError::Parse { .. }), "unexpected error: {err}");
    }

    #[test]
    fn extra_field_fails_whole_load() {
        let dir = fixture_dir("loader_wide");
        let path = write(&dir, "wide.dat", "1 2\n3 4 5\n");
        let err = load(&path, b' ', &["a", "b"], false).unwrap_err();
        assert!(matches!(err, LoaderError::Parse { .. }), "unexpected error: {err}");
    }

    #[test]
    fn short_row_fails_whole_load() {
        let dir = fixture_dir("loader_short");
        let path = write(&dir, "short.dat", "1 2 3\n4 5\n");
        let err = load(&path, b' ', &["a", "b", "c"], false).unwrap_err();
        assert!(matches!(err, LoaderError::Parse { .. }), "unexpected error: {err}");
    }

    #[test]
    fn header_only_file_gives_empty_table() {
        let dir = fixture_dir("loader_header_only");
        let path = write(&dir, "cdf.dat", "#Queue_length_(packets) CDF_for_tcp\n");

        let table = load(&path, b' ', &["queue_length", "cdf"], true).unwrap();
        assert_eq!(table.height(), 0);
        assert_eq!(table.width(), 2);
        assert!(table.column("cdf").unwrap().is_empty());
    }

    #[test]
    fn blank_lines_are_skipped() {
        let dir = fixture_dir("loader_blank");
        let path = write(&dir, "blank.dat", "#h a b\n1 2\n3 4\n\n");

        let table = load(&path, b' ', &["a", "b"], true).unwrap();
        assert_eq!(table.height(), 2);
        assert_eq!(table.column("b").unwrap(), vec![2.0, 4.0]);
    }

    #[test]
    fn unknown_column_is_reported() {
        let table = Table::from_columns(&[("x", vec![1.0, 2.0])]).unwrap();
        assert!(matches!(
            table.column("y"),
            Err(LoaderError::MissingColumn(name)) if name == "y"
        ));
    }
}
