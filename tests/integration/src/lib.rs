//! End-to-end scenario tests for the dynafilter compiler.
//!
//! Each test compiles a complete query document and asserts the exact
//! condition string together with the name and value bindings, so any change
//! to rendering, aliasing, or slot allocation shows up here.

use std::sync::Once;

use dynafilter_core::CompiledFilter;

static INIT: Once = Once::new();

/// Initialize tracing (once).
fn init_tracing() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(
                tracing_subscriber::EnvFilter::try_from_default_env()
                    .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
            )
            .with_test_writer()
            .init();
    });
}

/// Compile a query document, panicking with the error message on failure.
#[must_use]
pub fn compile(document: &serde_json::Value) -> CompiledFilter {
    init_tracing();
    dynafilter_core::compile(document)
        .unwrap_or_else(|e| panic!("failed to compile {document}: {e}"))
}

mod test_operators;
