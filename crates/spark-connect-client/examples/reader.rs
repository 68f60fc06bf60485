use log::info;
use spark_connect_client::telemetry::init_logger;
use spark_connect_client::{ClientConfig, SparkSession};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logger();

    let config = ClientConfig::load()?;
    let spark = SparkSession::builder().config(&config).build()?;
    info!("using Spark session {spark}");

    let mut reader = spark.read();
    reader.format("csv").option("header", "true");
    let events = reader.load("/data/events.csv")?;
    let users = spark.table("analytics.users")?;

    for df in [events, users] {
        info!("{df}");
        println!("{}", df.plan_json()?);
    }
    Ok(())
}
