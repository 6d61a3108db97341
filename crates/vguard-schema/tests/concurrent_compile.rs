//! Concurrency tests for the schema registry: racing first-time
//! compilations must all succeed, converge on one cached instance, and
//! never corrupt the cache.

use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Barrier};
use std::thread;

use serde_json::json;
use vguard_schema::{CompiledSchema, JsonSchemaCompiler, SchemaCompiler, SchemaRegistry};

const THREADS: usize = 8;

#[test]
fn concurrent_first_use_converges_on_one_instance() {
    let registry = Arc::new(SchemaRegistry::new());
    let barrier = Arc::new(Barrier::new(THREADS));
    let schema = r#"{"type":"string","minLength":3}"#;

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let registry = Arc::clone(&registry);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                let compiled = registry.get_or_compile(schema).expect("compile failed");
                // Every thread's validator must evaluate consistently.
                assert!(compiled.violations(&json!("abc")).is_empty());
                assert!(!compiled.violations(&json!("ab")).is_empty());
                compiled
            })
        })
        .collect();

    let results: Vec<_> = handles.into_iter().map(|h| h.join().unwrap()).collect();

    // Exactly one entry installed for the key.
    assert_eq!(registry.cached_count(), 1);

    // Racing threads may hold a losing compilation, but each one must
    // still evaluate consistently.
    for compiled in &results {
        assert!(compiled.violations(&json!("abc")).is_empty());
    }

    // All callers from now on observe the same installed instance.
    let canonical = registry.get_or_compile(schema).unwrap();
    for _ in 0..4 {
        let again = registry.get_or_compile(schema).unwrap();
        assert!(
            Arc::ptr_eq(&again, &canonical),
            "repeated lookups must return the installed instance"
        );
    }
}

#[test]
fn concurrent_validation_against_cached_schema() {
    let registry = Arc::new(SchemaRegistry::new());
    let schema = vguard_core::NON_EMPTY_STRING;

    // Warm the cache, then hammer it from many threads.
    registry.get_or_compile(schema).unwrap();

    let handles: Vec<_> = (0..THREADS)
        .map(|i| {
            let registry = Arc::clone(&registry);
            thread::spawn(move || {
                for n in 0..200 {
                    let value = json!(format!("value-{i}-{n}"));
                    registry.validate(schema, &value).expect("valid value rejected");
                    assert!(registry.validate(schema, &json!("")).is_err());
                }
            })
        })
        .collect();

    for h in handles {
        h.join().unwrap();
    }
    assert_eq!(registry.cached_count(), 1);
}

#[test]
fn racing_compilations_are_counted_but_one_is_installed() {
    struct CountingCompiler {
        inner: JsonSchemaCompiler,
        calls: AtomicUsize,
    }
    impl SchemaCompiler for CountingCompiler {
        fn compile(
            &self,
            schema_text: &str,
        ) -> Result<Arc<dyn CompiledSchema>, vguard_schema::SchemaError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            // Widen the race window so threads actually overlap.
            thread::sleep(std::time::Duration::from_millis(10));
            self.inner.compile(schema_text)
        }
    }

    let compiler = Arc::new(CountingCompiler {
        inner: JsonSchemaCompiler,
        calls: AtomicUsize::new(0),
    });
    let registry = Arc::new(SchemaRegistry::with_compiler(
        Arc::clone(&compiler) as Arc<dyn SchemaCompiler>
    ));
    let barrier = Arc::new(Barrier::new(THREADS));

    let handles: Vec<_> = (0..THREADS)
        .map(|_| {
            let registry = Arc::clone(&registry);
            let barrier = Arc::clone(&barrier);
            thread::spawn(move || {
                barrier.wait();
                registry.get_or_compile("{}").unwrap();
            })
        })
        .collect();
    for h in handles {
        h.join().unwrap();
    }

    let compilations = compiler.calls.load(Ordering::SeqCst);
    assert!(
        (1..=THREADS).contains(&compilations),
        "expected between 1 and {THREADS} compilations, saw {compilations}"
    );
    assert_eq!(registry.cached_count(), 1);

    // After the race settles, lookups are pure cache hits.
    registry.get_or_compile("{}").unwrap();
    assert_eq!(compiler.calls.load(Ordering::SeqCst), compilations);
}
