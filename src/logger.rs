use tracing_subscriber::{EnvFilter, fmt};

/// 初始化日志系统
///
/// 通过 RUST_LOG 环境变量控制日志级别，默认 info，
/// `verbose` 为 true 时默认 debug
///
/// 日志写到 stderr，stdout 只输出 API 响应
pub fn init_logger(verbose: bool) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter(verbose)));

    fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .with_target(true)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .init();

    tracing::debug!("Logger initialized");
}

/// 未设置 RUST_LOG 时使用的过滤级别
fn default_filter(verbose: bool) -> &'static str {
    if verbose { "debug" } else { "info" }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_filter() {
        assert_eq!(default_filter(false), "info");
        assert_eq!(default_filter(true), "debug");
        // 两个默认值都必须是 EnvFilter 能解析的指令
        assert!(EnvFilter::try_new(default_filter(false)).is_ok());
        assert!(EnvFilter::try_new(default_filter(true)).is_ok());
    }
}
