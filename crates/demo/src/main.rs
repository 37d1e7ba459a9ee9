//! Detect-and-shoot demo.
//!
//! Composition root that wires the behavior-tree engine to a small scripted
//! world and ticks it from a host loop.
//!
//! # Examples
//!
//! ```bash
//! # One tick, no tracing
//! cargo run -p behavior-tree-demo
//!
//! # Five ticks with trace lines on stdout
//! BT_TICKS=5 BT_TRACE=stdout cargo run -p behavior-tree-demo
//!
//! # Trace lines through the logging pipeline
//! BT_TRACE=log cargo run -p behavior-tree-demo
//! ```

mod config;
mod logging;
mod scenario;

use std::sync::Arc;

use anyhow::Result;
use behavior_tree::{Behavior, Context, Status, StdoutSink, TraceSink, TracingSink};
use tokio_util::sync::CancellationToken;

use crate::config::{DemoConfig, TraceMode};
use crate::scenario::World;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    let config = DemoConfig::from_env()?;

    let default_filter = match config.trace {
        TraceMode::Log => "info,behavior_tree::trace=debug",
        TraceMode::Off | TraceMode::Stdout => "info",
    };
    let _guard = logging::setup_logging(config.log_dir.as_deref(), default_filter)?;

    tracing::info!(
        trace = %config.trace,
        ticks = config.ticks,
        player_visible = config.player_visible,
        "Starting detect-and-shoot demo"
    );

    let sink: Option<Box<dyn TraceSink>> = match config.trace {
        TraceMode::Off => None,
        TraceMode::Stdout => Some(Box::new(StdoutSink)),
        TraceMode::Log => Some(Box::new(TracingSink)),
    };

    let token = CancellationToken::new();
    let ctrl_c = {
        let token = token.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                tracing::info!("Ctrl-C received, cancelling");
                token.cancel();
            }
        })
    };

    let ctx = context(&token, sink.as_deref());

    tracing::debug!("Running introductory trees");
    let status = scenario::hello_world().execute(&ctx);
    tracing::info!(%status, "hello_world");
    let status = scenario::gated_hello_world().execute(&ctx);
    tracing::info!(%status, "gated_hello_world");

    let world = Arc::new(World::new(config.player_visible));
    let root = scenario::detect_and_shoot(Arc::clone(&world));
    run(&*root, &config, &token, sink.as_deref()).await;

    tracing::info!(shots_fired = world.shots_fired(), "Demo finished");
    ctrl_c.abort();

    Ok(())
}

/// Ticks `root` until the tick budget is spent or the token is cancelled.
async fn run(
    root: &dyn Behavior,
    config: &DemoConfig,
    token: &CancellationToken,
    sink: Option<&dyn TraceSink>,
) {
    let mut interval = tokio::time::interval(config.tick_interval);

    for tick in 1..=config.ticks {
        tokio::select! {
            biased;
            _ = token.cancelled() => {
                tracing::info!(tick, "Host loop cancelled");
                break;
            }
            _ = interval.tick() => {}
        }

        let status = root.execute(&context(token, sink));
        tracing::debug!(tick, %status, "Tick complete");

        if status == Status::Invalid {
            tracing::warn!(tick, "Tree returned Invalid; check its construction");
        }
    }
}

fn context<'a>(token: &'a CancellationToken, sink: Option<&'a dyn TraceSink>) -> Context<'a> {
    let ctx = Context::new(token);
    match sink {
        Some(sink) => ctx.with_tracing(sink),
        None => ctx,
    }
}
