//! Buffers client log lines so the UI layer can drain and display them.
//! Every line also goes through the `log` facade.

use log::Level;
use once_cell::sync::Lazy;
use std::sync::Mutex;

static LOG_BUFFER: Lazy<Mutex<Vec<String>>> = Lazy::new(|| Mutex::new(Vec::new()));

const MAX_BUFFER_LEN: usize = 500;

fn should_buffer(level: Level) -> bool {
    // Debug/trace stay in the log facade only.
    level <= Level::Info
}

/// Called by the `client_log!` macro.
pub fn push(level: Level, line: String) {
    log::log!(target: "bankdash", level, "{}", line);
    if !should_buffer(level) {
        return;
    }
    if let Ok(mut v) = LOG_BUFFER.lock() {
        push_bounded(&mut v, format!("[{}] {}", level, line));
    }
}

fn push_bounded(v: &mut Vec<String>, line: String) {
    v.push(line);
    let n = v.len();
    if n > MAX_BUFFER_LEN {
        v.drain(0..n - MAX_BUFFER_LEN);
    }
}

/// Drain and clear buffered log lines.
pub fn drain_logs() -> Vec<String> {
    LOG_BUFFER
        .lock()
        .map(|mut v| std::mem::take(&mut *v))
        .unwrap_or_default()
}

#[macro_export]
macro_rules! client_log {
    ($level:ident, $($t:tt)*) => {
        $crate::log_bridge::push(::log::Level::$level, format!($($t)*))
    };
}
