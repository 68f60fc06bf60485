mod dataframe;
mod error;
mod reader;
mod session;
pub mod telemetry;

pub use dataframe::DataFrame;
pub use error::{SparkError, SparkResult};
pub use reader::DataFrameReader;
pub use session::{SparkSession, SparkSessionBuilder};
pub use spark_connect_common::config::ClientConfig;
pub use spark_connect_common::spec::{QueryPlan, Relation};
