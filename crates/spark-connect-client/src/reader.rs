use std::collections::BTreeMap;

use log::{debug, trace};
use spark_connect_common::spec::Relation;

use crate::dataframe::DataFrame;
use crate::error::SparkResult;
use crate::session::SparkSession;

/// A builder for DataFrames that read from tables or files.
///
/// The configuration methods take `&mut self` and return the same reader,
/// so calls can be chained. The terminal methods [`DataFrameReader::load`] and
/// [`DataFrameReader::table`] copy the configuration into the relation and leave
/// the reader unchanged, so one reader can build several DataFrames.
///
/// ```ignore
/// let df = spark
///     .read()
///     .format("csv")
///     .option("header", "true")
///     .load("/data/events.csv")?;
/// ```
#[derive(Debug, Clone)]
pub struct DataFrameReader {
    session: SparkSession,
    format: Option<String>,
    options: Option<BTreeMap<String, String>>,
}

impl DataFrameReader {
    pub fn new(session: SparkSession) -> Self {
        Self {
            session,
            format: None,
            options: None,
        }
    }

    /// Sets the data source format, e.g. `parquet`.
    /// The format is not checked here. The server rejects unknown formats.
    pub fn format(&mut self, source: impl Into<String>) -> &mut Self {
        self.format = Some(source.into());
        self
    }

    /// Adds an option for the data source, replacing any value for the same key.
    pub fn option(&mut self, key: impl Into<String>, value: impl Into<String>) -> &mut Self {
        let key = key.into();
        let value = value.into();
        trace!("data source option: {key}={value}");
        self.options
            .get_or_insert_with(BTreeMap::new)
            .insert(key, value);
        self
    }

    pub fn options<I, K, V>(&mut self, options: I) -> &mut Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        for (key, value) in options {
            self.option(key, value);
        }
        self
    }

    /// Returns a DataFrame that reads the path with the current format and options.
    pub fn load(&self, path: impl Into<String>) -> SparkResult<DataFrame> {
        let path = path.into();
        let format = self.format.clone();
        let relation = match &self.options {
            None => Relation::read_with_format_and_path(path, format),
            Some(options) => {
                Relation::read_with_format_and_path_and_options(path, format, options.clone())
            }
        };
        debug!("loading data source: {relation:?}");
        Ok(self.session.new_data_frame(relation))
    }

    /// Returns a DataFrame that reads the named table.
    /// The format and options of this reader do not apply to table reads.
    pub fn table(&self, name: impl Into<String>) -> SparkResult<DataFrame> {
        let relation = Relation::read_table(name);
        debug!("reading table: {relation:?}");
        Ok(self.session.new_data_frame(relation))
    }

    pub fn csv(&mut self, path: impl Into<String>) -> SparkResult<DataFrame> {
        self.format("csv").load(path)
    }

    pub fn json(&mut self, path: impl Into<String>) -> SparkResult<DataFrame> {
        self.format("json").load(path)
    }

    pub fn parquet(&mut self, path: impl Into<String>) -> SparkResult<DataFrame> {
        self.format("parquet").load(path)
    }

    pub fn orc(&mut self, path: impl Into<String>) -> SparkResult<DataFrame> {
        self.format("orc").load(path)
    }

    pub fn text(&mut self, path: impl Into<String>) -> SparkResult<DataFrame> {
        self.format("text").load(path)
    }

    pub fn session(&self) -> &SparkSession {
        &self.session
    }
}
