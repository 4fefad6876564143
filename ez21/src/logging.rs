//! Structured logging for experiment runs.
pub use slog::{
    Discard,
    Drain,
    Fuse,
    Logger,
    Never,
    SendSyncRefUnwindSafeDrain,
    SendSyncUnwindSafeDrain,
};
use slog_async::Async;
use slog_term::{FullFormat, TermDecorator};

/// Create a root logger over the given drain.
pub fn root<D>(drain: D) -> Logger
where
    D: SendSyncUnwindSafeDrain<Ok = (), Err = Never>
        + SendSyncRefUnwindSafeDrain<Ok = (), Err = Never>
        + 'static,
{
    Logger::root(drain, o!())
}

/// An asynchronous drain writing full-format records to the terminal.
pub fn stdout() -> Fuse<Async> {
    let decorator = TermDecorator::new().build();
    let drain = FullFormat::new(decorator).build().fuse();

    Async::new(drain).build().fuse()
}

/// A logger that drops every record.
pub fn discard() -> Logger { root(Discard) }
