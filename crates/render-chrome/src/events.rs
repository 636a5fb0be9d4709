//! Page diagnostics forwarded to the `log` facade.

use crate::idle::NetworkIdleTracker;
use headless_chrome::protocol::cdp::types::Event;
use std::sync::Arc;

const TARGET: &str = "fleetdoc::page";

/// Builds the tab listener: console calls, browser log entries and uncaught
/// exceptions are logged; lifecycle events drive `tracker`.
pub(crate) fn page_listener(tracker: Arc<NetworkIdleTracker>) -> impl Fn(&Event) + Send + Sync {
    move |event: &Event| match event {
        Event::PageLifecycleEvent(lifecycle) => {
            log::trace!(target: TARGET, "lifecycle: {}", lifecycle.params.name);
            tracker.observe(&lifecycle.params.name);
        }
        Event::RuntimeConsoleAPICalled(call) => {
            let message = join_console_args(call.params.args.iter().map(|arg| {
                arg.value
                    .as_ref()
                    .map(|v| v.as_str().map(str::to_owned).unwrap_or_else(|| v.to_string()))
                    .or_else(|| arg.description.clone())
            }));
            log::info!(target: TARGET, "console: {}", message);
        }
        Event::RuntimeExceptionThrown(thrown) => {
            log::warn!(
                target: TARGET,
                "uncaught exception: {}",
                thrown.params.exception_details.text
            );
        }
        Event::LogEntryAdded(added) => {
            let entry = &added.params.entry;
            let line = describe_entry(
                &format!("{:?}", entry.level),
                &entry.text,
                entry.url.as_deref(),
            );
            if is_error_level(&format!("{:?}", entry.level)) {
                log::warn!(target: TARGET, "{}", line);
            } else {
                log::debug!(target: TARGET, "{}", line);
            }
        }
        _ => {}
    }
}

fn join_console_args(args: impl Iterator<Item = Option<String>>) -> String {
    args.map(|arg| arg.unwrap_or_else(|| "<unserializable>".to_string()))
        .collect::<Vec<_>>()
        .join(" ")
}

fn describe_entry(level: &str, text: &str, url: Option<&str>) -> String {
    match url {
        Some(url) if !url.is_empty() => format!("[{}] {} ({})", level.to_lowercase(), text, url),
        _ => format!("[{}] {}", level.to_lowercase(), text),
    }
}

fn is_error_level(level: &str) -> bool {
    level.eq_ignore_ascii_case("error") || level.eq_ignore_ascii_case("warning")
}
