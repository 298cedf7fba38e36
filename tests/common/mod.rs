use std::sync::Once;

static LOGGER: Once = Once::new();

pub fn init_logger() {
  LOGGER.call_once(|| {
          fern::Dispatch::new().format(|out, message, record| {
                                 out.finish(format_args!("[{}][{}] {}",
                                                         record.level(),
                                                         record.target(),
                                                         message))
                               })
                               .level(log::LevelFilter::Trace)
                               .chain(std::io::stderr())
                               .apply()
                               .unwrap_or_else(|e| eprintln!("logger already set: {}", e));
        });
}
