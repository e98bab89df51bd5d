//! Plain-text event format for log files: each line carries the ids and name of the span it was
//! recorded in, so all lines of one HTTP request or one client action can be grepped together.

use std::fmt;

use tracing_core::{Event, Subscriber};
use tracing_subscriber::fmt::format::{FormatEvent, FormatFields, Writer};
use tracing_subscriber::fmt::time::{FormatTime, SystemTime};
use tracing_subscriber::fmt::FmtContext;
use tracing_subscriber::registry::LookupSpan;

/// `TIMESTAMP LEVEL target: [trace_id=R span_id=S span=name] fields`
///
/// `trace_id` is the id of the outermost span in scope; the bracket is omitted outside any span.
#[derive(Default)]
pub struct TextWithSpanIds {
    timer: SystemTime,
}

impl TextWithSpanIds {
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S, N> FormatEvent<S, N> for TextWithSpanIds
where
    S: Subscriber + for<'a> LookupSpan<'a>,
    N: for<'a> FormatFields<'a> + 'static,
{
    fn format_event(
        &self,
        ctx: &FmtContext<'_, S, N>,
        mut writer: Writer<'_>,
        event: &Event<'_>,
    ) -> fmt::Result {
        self.timer.format_time(&mut writer)?;
        let meta = event.metadata();
        write!(writer, " {} {}:", meta.level(), meta.target())?;

        if let Some(span) = ctx.parent_span() {
            let span_id = span.id().into_u64();
            let trace_id = span
                .scope()
                .from_root()
                .next()
                .map(|root| root.id().into_u64())
                .unwrap_or(span_id);
            write!(
                writer,
                " [trace_id={} span_id={} span={}]",
                trace_id,
                span_id,
                span.name()
            )?;
        }

        write!(writer, " ")?;
        ctx.field_format().format_fields(writer.by_ref(), event)?;
        writeln!(writer)
    }
}
