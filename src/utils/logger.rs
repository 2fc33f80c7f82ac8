use chrono::Local;
use fern::Dispatch;
use log::LevelFilter;

/// Installs the global logger on stderr. Call once from `main`.
pub fn init(level: LevelFilter) {
    Dispatch::new()
        .level(level)
        .level_for("serde_yaml", LevelFilter::Warn)
        .format(|out, message, record| {
            out.finish(format_args!(
                "[{} {} {}] {}",
                Local::now().format("%Y-%m-%d %H:%M:%S"),
                record.level(),
                record.target(),
                message
            ))
        })
        .chain(std::io::stderr())
        .apply()
        .unwrap_or_else(|e| {
            eprintln!("Failed to apply logger configuration: {}", e);
        });
}
