//! Common logging initializer
//!

use std::path::PathBuf;

use eyre::Result;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::fmt;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;
use tracing_tree::HierarchicalLayer;

/// Initialise logging early.
///
/// - filters come from `RUST_LOG`
/// - `use_tree` selects the hierarchical output instead of the compact one
/// - `use_file` adds an hourly rolling file in that directory
///
/// Keep the returned guard alive until exit, otherwise buffered file output is lost.
///
pub fn init_logging(
    name: &'static str,
    use_tree: bool,
    use_file: Option<PathBuf>,
) -> Result<Option<WorkerGuard>> {
    // Load filters from environment
    //
    let filter = EnvFilter::from_default_env();

    // Do we want hierarchical output?
    //
    let (tree, compact) = if use_tree {
        let tree = HierarchicalLayer::new(2)
            .with_ansi(true)
            .with_span_retrace(true)
            .with_span_modes(true)
            .with_targets(true)
            .with_verbose_entry(true)
            .with_verbose_exit(true)
            .with_bracketed_fields(true)
            .with_writer(std::io::stderr);
        (Some(tree), None)
    } else {
        let compact = fmt::layer()
            .with_target(false)
            .with_writer(std::io::stderr)
            .compact();
        (None, Some(compact))
    };

    // Log to file?
    //
    let (file, guard) = match use_file {
        Some(dir) => {
            // Basic append-only rolling file for all traces.
            //
            let appender = tracing_appender::rolling::hourly(dir, name);
            let (writer, guard) = tracing_appender::non_blocking(appender);
            let layer = fmt::layer().with_ansi(false).with_writer(writer);
            (Some(layer), Some(guard))
        }
        None => (None, None),
    };

    // Combine filters & exporters
    //
    tracing_subscriber::registry()
        .with(filter)
        .with(tree)
        .with(compact)
        .with(file)
        .try_init()?;

    Ok(guard)
}
