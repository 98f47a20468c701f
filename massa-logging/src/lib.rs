// Copyright (c) 2021 MASSA LABS <info@massa.net>

//! Structured trace events.
//!
//! `massa_trace!("event.name", { "key": value })` emits a `trace` level event
//! whose message is the event name followed by its JSON encoded parameters.
//! Crates using the macro must depend on `tracing` and `serde_json`.

#[macro_export]
macro_rules! massa_trace {
    ($evt:expr, $params:tt) => {
        tracing::trace!("massa_trace:{}:{}", $evt, serde_json::json!($params));
    };
}
