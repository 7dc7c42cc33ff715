use log::{Level, Log, Metadata, Record, SetLoggerError};

/// Known-noisy messages that never reach the console.
pub const DEFAULT_SUPPRESSED: &[&str] =
	&["THREE.BufferGeometry.computeBoundingSphere(): Computed radius is NaN"];

/// Browser console logger that drops messages containing a suppressed
/// fragment.
pub struct ConsoleLogger {
	level: Level,
	suppressed: Vec<String>,
}

impl ConsoleLogger {
	/// Logger passing `level` and above, with nothing suppressed.
	pub fn new(level: Level) -> Self {
		Self {
			level,
			suppressed: Vec::new(),
		}
	}

	/// Drops every message containing `fragment`.
	pub fn suppress(mut self, fragment: impl Into<String>) -> Self {
		self.suppressed.push(fragment.into());
		self
	}

	/// Whether `message` contains a suppressed fragment.
	pub fn is_suppressed(&self, message: &str) -> bool {
		self.suppressed.iter().any(|f| message.contains(f.as_str()))
	}

	/// Installs this logger as the `log` backend.
	pub fn init(self) -> Result<(), SetLoggerError> {
		let level = self.level;
		log::set_logger(Box::leak(Box::new(self)))?;
		log::set_max_level(level.to_level_filter());
		Ok(())
	}
}

impl Default for ConsoleLogger {
	fn default() -> Self {
		DEFAULT_SUPPRESSED
			.iter()
			.fold(Self::new(Level::Debug), |logger, f| logger.suppress(*f))
	}
}

impl Log for ConsoleLogger {
	fn enabled(&self, metadata: &Metadata) -> bool {
		metadata.level() <= self.level
	}

	fn log(&self, record: &Record) {
		if !self.enabled(record.metadata()) {
			return;
		}
		if self.is_suppressed(&record.args().to_string()) {
			return;
		}
		console_log::log(record);
	}

	fn flush(&self) {}
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn default_drops_three_js_noise() {
		let logger = ConsoleLogger::default();
		assert!(logger.is_suppressed(
			"THREE.BufferGeometry.computeBoundingSphere(): Computed radius is NaN. The position attribute is likely to have NaN values."
		));
		assert!(!logger.is_suppressed("skill network rebuilt"));
	}

	#[test]
	fn level_gate() {
		let logger = ConsoleLogger::new(Level::Info).suppress("noisy");
		let debug = Metadata::builder().level(Level::Debug).build();
		let warn = Metadata::builder().level(Level::Warn).build();
		assert!(!logger.enabled(&debug));
		assert!(logger.enabled(&warn));
		assert!(logger.is_suppressed("very noisy line"));
	}
}
