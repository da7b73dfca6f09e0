//! Tests for tracing instrumentation.
//!
//! These verify that spans and events are emitted when the tracing feature
//! is enabled.

#![cfg(feature = "tracing")]
#![allow(clippy::unwrap_used, clippy::expect_used)]

use kmertop::{input::Input, kmer::KmerLength, reader::read, run::count_kmers};
use std::path::PathBuf;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use tracing::Level;
use tracing_subscriber::layer::SubscriberExt;
use tracing_test::traced_test;

fn fixture_path(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

/// A simple layer that counts events at INFO level or above.
struct EventCounter {
    count: Arc<AtomicUsize>,
}

impl<S: tracing::Subscriber> tracing_subscriber::Layer<S> for EventCounter {
    fn on_event(
        &self,
        event: &tracing::Event<'_>,
        _ctx: tracing_subscriber::layer::Context<'_, S>,
    ) {
        if event.metadata().level() <= &Level::INFO {
            self.count.fetch_add(1, Ordering::SeqCst);
        }
    }
}

#[test]
fn count_kmers_emits_tracing_events() {
    let event_count = Arc::new(AtomicUsize::new(0));
    let layer = EventCounter {
        count: Arc::clone(&event_count),
    };

    let subscriber = tracing_subscriber::registry().with(layer);

    tracing::subscriber::with_default(subscriber, || {
        let path = fixture_path("simple.fa");
        let _tally = count_kmers(&path, 4).expect("should count k-mers");
    });

    assert!(
        event_count.load(Ordering::SeqCst) > 0,
        "should emit tracing events"
    );
}

#[test]
#[traced_test]
fn reader_logs_sequence_count() {
    let sequences = read(&Input::File(fixture_path("multiline.fa")), false).unwrap();
    assert_eq!(sequences.len(), 3);
    assert!(logs_contain("Read sequences"));
    assert!(logs_contain("sequences=3"));
}

#[test]
#[traced_test]
fn counting_logs_distinct_kmers() {
    let k = KmerLength::new(3).unwrap();
    let _tally = count_kmers(fixture_path("simple.fa"), k.get()).unwrap();
    assert!(logs_contain("Counting complete"));
    assert!(logs_contain("distinct_kmers=8"));
}
