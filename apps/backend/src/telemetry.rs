use tracing_subscriber::{fmt, prelude::*, EnvFilter};

const DEFAULT_FILTER: &str = "info,actix_web=info,sqlx=warn,sea_orm=warn";

/// JSON logs to stdout. `RUST_LOG` wins; otherwise the default filter, with
/// statement logging opened up when `DB_SQL_LOG` is on.
pub fn init_tracing(sql_log: bool) {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if sql_log {
            EnvFilter::new(format!("{DEFAULT_FILTER},sqlx::query=info"))
        } else {
            EnvFilter::new(DEFAULT_FILTER)
        }
    });

    let fmt_layer = fmt::layer()
        .with_target(false)
        .with_file(false)
        .with_line_number(false)
        .with_thread_ids(false)
        .with_thread_names(false)
        .with_ansi(false)
        .json();

    tracing_subscriber::registry()
        .with(env_filter)
        .with(fmt_layer)
        .init();
}
