use context_registry as reg;
use reg::{ProcessContext, RegistryError};
use std::sync::OnceLock;

// One startup per process: whichever test runs first plays the host runtime,
// the rest read the same handle. Returns the handle that was stored.
fn start_once() -> &'static ProcessContext {
    static STARTED: OnceLock<()> = OnceLock::new();
    STARTED.get_or_init(|| {
        reg::on_process_start(ProcessContext::new("lifecycle-state".to_string()))
            .expect("first start must succeed");
    });
    reg::current()
}

#[test]
fn write_once_read_many() {
    let stored = start_once();
    assert!(reg::current().ptr_eq(stored));
    assert!(reg::try_current().unwrap().ptr_eq(stored));
    assert!(reg::current_checked().unwrap().ptr_eq(stored));
}

#[test]
fn reads_agree_across_threads() {
    let stored = start_once();
    let handles: Vec<_> = (0..8)
        .map(|_| std::thread::spawn(|| reg::current()))
        .collect();
    for h in handles {
        assert!(h.join().unwrap().ptr_eq(stored));
    }
}

#[test]
fn second_start_is_rejected_and_handle_survives() {
    let stored = start_once();
    let intruder = ProcessContext::new("late-state".to_string());
    let err = reg::on_process_start(intruder).unwrap_err();
    assert!(matches!(err, RegistryError::AlreadyInitialized));
    // The stored handle is untouched by the rejected call.
    assert!(reg::current().ptr_eq(stored));
    assert_eq!(
        reg::current().downcast_ref::<String>().map(String::as_str),
        Some("lifecycle-state")
    );
}

mod props {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        // Idempotent read: N reads return the same reference for any N.
        #[test]
        fn n_reads_return_same_handle(n in 1usize..64) {
            let stored = start_once();
            for _ in 0..n {
                prop_assert!(reg::current().ptr_eq(stored));
            }
        }
    }
}
