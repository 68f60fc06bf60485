use std::io::Write;

/// Initializes the logger for applications using the client.
///
/// The log level is controlled by the `RUST_LOG` environment variable and
/// defaults to `info`. Calling this function more than once has no effect.
pub fn init_logger() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format(move |buf, record| {
            let level = record.level();
            let target = record.target();
            let style = buf.default_level_style(level);
            let timestamp = buf.timestamp();
            let args = record.args();
            writeln!(buf, "[{timestamp} {style}{level}{style:#} {target}] {args}")
        })
        .try_init();
}
