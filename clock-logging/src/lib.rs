// Copyright (c) 2021 MASSA LABS <info@massa.net>

#[macro_export]
macro_rules! clock_trace {
    ($evt:expr, $params:tt) => {
        tracing::trace!("clock_trace:{}:{}", $evt, serde_json::json!($params));
    };
}
