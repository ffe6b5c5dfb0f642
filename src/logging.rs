use tracing_subscriber::{fmt, EnvFilter};

/// tracing の初期化
///
/// `RUST_LOG` があればそれを優先する。なければ `warn`、`--verbose` 指定時は `debug`。
/// ログは標準エラーに出し、標準出力の進捗表示とは混ぜない。
pub fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env("RUST_LOG")
        .unwrap_or_else(|_| EnvFilter::new(default_level(verbose)));

    // 二重初期化（テスト等）は無視
    let _ = fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .try_init();
}

fn default_level(verbose: bool) -> &'static str {
    if verbose {
        "debug"
    } else {
        "warn"
    }
}
