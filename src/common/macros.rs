#[macro_export]
macro_rules! log_err {
    // Usage: log_err!("fetch /api/speeches", err);
    ($context:expr, $err:expr) => {{
        let location = format!("{}:{}", file!(), line!());
        ::log::error!("[{}] {}: {}", location, $context, $err);
    }};
}
