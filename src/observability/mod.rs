//! 可观测性：tracing 初始化
//!
//! 默认 info 级别，RUST_LOG 可覆盖；由各二进制入口调用一次。

use tracing_subscriber::{fmt, prelude::*, EnvFilter};

pub fn init() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer())
        .init();
}
