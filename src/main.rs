use clap::Parser;
use serde_json::Value;
use context_registry::{current_checked, on_process_start, ProcessContext};

/// Simple runner: plays the host-runtime role. Wraps a JSON document as the
/// process state, initializes the registry once, then reads it back.
#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Args {
    /// Process state as a JSON document (opaque to the registry)
    state: String,
    /// Number of reads to perform after initialization
    #[arg(long, default_value_t = 3)]
    reads: usize,
}

fn main() {
    tracing_subscriber::fmt::init();

    // Parse CLI arguments.
    let args = Args::parse();

    // Parse the host state.
    let state: Value = match serde_json::from_str(&args.state) {
        Ok(v) => v,
        Err(e) => {
            eprintln!("Invalid JSON: {e}");
            std::process::exit(1);
        }
    };

    // Host-runtime startup: hand the handle to the registry, exactly once.
    let ctx = ProcessContext::new(state);
    if let Err(e) = on_process_start(ctx) {
        eprintln!("Startup failed: {e}");
        std::process::exit(1);
    }

    // Arbitrary call sites: every read returns the same handle.
    let first = match current_checked() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("Read failed: {e}");
            std::process::exit(1);
        }
    };
    for _ in 1..args.reads {
        let again = context_registry::current();
        assert!(first.ptr_eq(again), "registry returned a different handle");
    }

    // Output the state recovered from the shared handle.
    let recovered = first
        .downcast_ref::<Value>()
        .expect("host state is the JSON document we stored");
    println!("{}", serde_json::to_string_pretty(recovered).unwrap());
}
