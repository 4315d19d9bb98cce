//! Constructs, copies, moves, prints, and drops a few widgets.
//!
//! Set `RUST_LOG=trace` to watch the lifecycle of every implementation.

use std::io;

use rust_pimpl::widget::Widget;
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> io::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let plain = Widget::new();
    plain.print_info()?;

    let mut w = Widget::with_info(42);
    w.print_info()?;

    let mut w2 = w.clone();
    w.set_info(7);
    w2.print_info()?;

    let w3 = w2.take();
    w3.print_info()?;
    info!(moved_from = w2.is_moved_from(), "moved w2 into w3");

    w2.move_from(&mut w);
    w2.print_info()?;

    Ok(())
}
