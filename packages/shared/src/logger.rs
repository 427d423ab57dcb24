//! Logging setup utilities.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Initialize the tracing subscriber with the specified default log level.
///
/// Every target in `targets` is enabled at `default_log_level`. The filter can be
/// overridden entirely with the `RUST_LOG` environment variable.
///
/// # Arguments
///
/// * `targets` - Crate names to enable (e.g. `["hubbub_server", "tower_http"]`)
/// * `default_log_level` - The default log level (e.g., "debug", "info", "warn", "error")
///
/// # Examples
///
/// ```no_run
/// use hubbub_shared::logger::setup_logger;
///
/// setup_logger(&["hubbub_server", "tower_http"], "debug");
/// ```
pub fn setup_logger(targets: &[&str], default_log_level: &str) {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_directives(targets, default_log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();
}

/// Build the `EnvFilter` directive string used when `RUST_LOG` is unset.
///
/// Hyphens are replaced with underscores since tracing targets use module paths.
pub fn default_directives(targets: &[&str], default_log_level: &str) -> String {
    targets
        .iter()
        .map(|target| format!("{}={}", target.replace('-', "_"), default_log_level))
        .collect::<Vec<_>>()
        .join(",")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_directives_with_multiple_targets() {
        // テスト項目: 複数のターゲットがカンマ区切りのディレクティブに変換される
        // given (前提条件):
        let targets = ["hubbub-server", "tower_http"];

        // when (操作):
        let result = default_directives(&targets, "debug");

        // then (期待する結果):
        assert_eq!(result, "hubbub_server=debug,tower_http=debug");
    }

    #[test]
    fn test_default_directives_with_no_targets() {
        // テスト項目: ターゲットが空の場合、空文字列が返される
        // given (前提条件):
        let targets: [&str; 0] = [];

        // when (操作):
        let result = default_directives(&targets, "info");

        // then (期待する結果):
        assert_eq!(result, "");
    }
}
