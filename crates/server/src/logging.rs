//! Diagnostic logging on stderr.
//!
//! stdout carries JSON-RPC, so every subscriber writes to stderr. The default
//! line format is `[mdn-mcp] <message>`; JSON is available for log shippers.

use std::fmt;

use mdn_core::LogFormat;
use tracing::{Event, Subscriber};
use tracing_subscriber::{
    EnvFilter,
    fmt::{FmtContext, FormatEvent, FormatFields, format},
    registry::LookupSpan,
};

/// Prefix written before every prefixed diagnostic line.
pub const LOG_PREFIX: &str = "[mdn-mcp]";

/// Formats events as `[mdn-mcp] <message> <fields>`.
#[derive(Debug, Clone, Copy, Default)]
pub struct PrefixedFormat;

impl<S, N> FormatEvent<S, N> for PrefixedFormat
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self, ctx: &FmtContext<'_, S, N>, mut writer: format::Writer<'_>, event: &Event<'_>,
    ) -> fmt::Result {
        write!(writer, "{LOG_PREFIX} ")?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}

/// Install the global subscriber.
///
/// `RUST_LOG` controls filtering and defaults to `info`.
pub fn init(format: LogFormat) {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    let builder = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr);

    match format {
        LogFormat::Prefixed => builder.with_ansi(false).event_format(PrefixedFormat).init(),
        LogFormat::Json => builder.json().init(),
    }
}

#[cfg(test)]
pub(crate) mod test_support {
    use std::io;
    use std::sync::{Arc, Mutex};

    use tracing::subscriber::DefaultGuard;

    use super::PrefixedFormat;

    /// In-memory log sink shared with a thread-local subscriber.
    #[derive(Clone, Default)]
    pub struct CapturedLogs(Arc<Mutex<Vec<u8>>>);

    impl CapturedLogs {
        pub fn contents(&self) -> String {
            String::from_utf8_lossy(&self.0.lock().unwrap()).into_owned()
        }
    }

    impl io::Write for CapturedLogs {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    /// Route this thread's events into a buffer using the prefixed format.
    pub fn capture_logs() -> (DefaultGuard, CapturedLogs) {
        let logs = CapturedLogs::default();
        let writer = logs.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .event_format(PrefixedFormat)
            .finish();

        (tracing::subscriber::set_default(subscriber), logs)
    }
}
