use std::io::Write;

use env_logger::{Builder, Env};

/// Installs the stderr logger. `RUST_LOG` wins over `default_level` when it is set. Later calls
/// are no-ops.
pub fn init(default_level: &str) {
    let _ = builder(default_level).try_init();
}

pub fn builder(default_level: &str) -> Builder {
    let mut builder = Builder::from_env(Env::default().default_filter_or(default_level));
    builder.format(|buf, record| {
        writeln!(
            buf,
            "{} - {} - {} - {}",
            buf.timestamp_millis(),
            record.target(),
            record.level(),
            record.args()
        )
    });
    builder
}
