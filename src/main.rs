use anyhow::{Context, Result};
use hosps_norm::{process, Config};
use tracing::info;
use tracing_subscriber::{fmt, EnvFilter};

fn main() -> Result<()> {
    // ─── 1) init logging ─────────────────────────────────────────────
    let env = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    fmt::Subscriber::builder()
        .with_env_filter(env)
        .with_span_events(fmt::format::FmtSpan::CLOSE)
        .with_writer(std::io::stderr)
        .init();

    // ─── 2) fixed paths ──────────────────────────────────────────────
    let cfg = Config::default();
    info!(input = %cfg.input.display(), output = %cfg.output.display(), "startup");

    // ─── 3) load → validate → normalize → reorder → persist ─────────
    let summary = process::run(&cfg)
        .with_context(|| format!("normalizing {}", cfg.input.display()))?;

    // ─── 4) report ───────────────────────────────────────────────────
    println!("{}", summary);
    Ok(())
}
