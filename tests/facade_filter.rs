#![cfg(feature = "diagnostics")]
use std::cell::Cell;
use std::sync::Arc;

use cutedebug::prelude::*;
use cutedebug::{scoped, Facade, IdentityStore, MemoryPrefs, MemorySink, Named, Record};

// Runs `f` against a fresh in-memory facade whose identity is `identity`.
fn capture(identity: &str, f: impl FnOnce()) -> Vec<Record> {
    let sink = Arc::new(MemorySink::new());
    let ids = IdentityStore::with_fixed_default(Arc::new(MemoryPrefs::new()), identity);
    scoped(Facade::new(ids, sink.clone()), f);
    sink.take()
}

fn messages(recs: &[Record]) -> Vec<&str> {
    recs.iter().map(|r| r.message.as_str()).collect()
}

fn carol_spawns(n: u32) {
    author!("carol");
    cute_log!("spawning {n}");
}

fn carol_overridden() {
    author!("carol");
    cute_warn!(author: "alice", "override");
}

fn untagged_helper() {
    cute_log!("helper");
}

fn carol_calls_helper() {
    author!("carol");
    untagged_helper();
}

mod dave_systems {
    use cutedebug::prelude::*;

    cutedebug::author!("dave");

    pub fn tick() {
        cute_log!("tick");
    }
}

#[test]
fn untagged_call_is_always_shown() {
    for identity in ["", "bob"] {
        let recs = capture(identity, || cute_log!("hello {}", 42));
        assert_eq!(messages(&recs), vec!["hello 42"]);
        assert_eq!(recs[0].severity, Severity::Info);
    }
}

#[test]
fn other_authors_messages_are_dropped() {
    let recs = capture("bob", || {
        cute_log!(author: "alice", "not for bob");
        cute_warn!(author: "alice", "nor this");
        cute_error!(author: "alice", "nor this");
    });
    assert!(recs.is_empty());
}

#[test]
fn own_messages_are_prefixed_with_author() {
    let recs = capture("alice", || cute_error!(author: "alice", "disk at {}%", 99));
    assert_eq!(recs.len(), 1);
    assert_eq!(recs[0].severity, Severity::Error);
    assert_eq!(recs[0].message, "[alice] disk at 99%");
}

#[test]
fn author_can_be_a_runtime_string() {
    let who = String::from("alice");
    let recs = capture("alice", || cute_log!(author: who.clone(), "owned"));
    assert_eq!(messages(&recs), vec!["[alice] owned"]);
}

#[test]
fn suppressed_call_does_not_evaluate_arguments() {
    let calls = Cell::new(0);
    let expensive = || {
        calls.set(calls.get() + 1);
        "payload"
    };
    let recs = capture("bob", || cute_log!(author: "alice", "{}", expensive()));
    assert!(recs.is_empty());
    assert_eq!(calls.get(), 0);

    let recs = capture("alice", || cute_log!(author: "alice", "{}", expensive()));
    assert_eq!(messages(&recs), vec!["[alice] payload"]);
    assert_eq!(calls.get(), 1);
}

#[test]
fn annotation_behaves_like_explicit_author() {
    assert_eq!(messages(&capture("carol", || carol_spawns(3))), vec!["[carol] spawning 3"]);
    assert!(capture("bob", || carol_spawns(3)).is_empty());
    let explicit = capture("carol", || cute_log!(author: "carol", "spawning {}", 3));
    assert_eq!(explicit, capture("carol", || carol_spawns(3)));
}

#[test]
fn explicit_author_beats_annotation() {
    assert_eq!(messages(&capture("alice", carol_overridden)), vec!["[alice] override"]);
    assert!(capture("carol", carol_overridden).is_empty());
}

#[test]
fn annotation_only_covers_its_own_function() {
    assert_eq!(messages(&capture("bob", carol_calls_helper)), vec!["helper"]);
}

#[test]
fn module_level_annotation() {
    assert_eq!(messages(&capture("dave", dave_systems::tick)), vec!["[dave] tick"]);
    assert!(capture("erin", dave_systems::tick).is_empty());
}

#[test]
fn context_is_passed_through_untouched() {
    let door = Named::new("Door");
    let recs = capture("alice", || {
        cute_warn!(context: &door, "stuck");
        cute_error!(context: &door, author: "alice", "jammed");
        cute_error!(context: &door, author: "bob", "hidden");
    });
    assert_eq!(messages(&recs), vec!["stuck", "[alice] jammed"]);
    assert!(recs.iter().all(|r| r.context.as_deref() == Some("Door")));
}

#[test]
fn assert_reports_only_failed_conditions() {
    let recs = capture("alice", || {
        cute_assert!(1 + 1 == 2, "math");
        cute_assert!(author: "alice", false);
        cute_assert!(false, "hp was {}", -1);
    });
    assert_eq!(messages(&recs), vec!["[alice] assertion failed", "hp was -1"]);
    assert!(recs.iter().all(|r| r.severity == Severity::Assert));
}

#[test]
fn filtered_assert_skips_its_condition() {
    let checked = Cell::new(false);
    let recs = capture("bob", || {
        cute_assert!(author: "alice", {
            checked.set(true);
            false
        });
    });
    assert!(recs.is_empty());
    assert!(!checked.get());
}

#[test]
fn batch_logs_each_item_in_order() {
    let recs = capture("alice", || cute_log_each!(author: "alice", vec![3, 1, 2]));
    assert_eq!(messages(&recs), vec!["[alice] 3", "[alice] 1", "[alice] 2"]);

    let recs = capture("bob", || cute_log_each!(author: "alice", vec![3, 1, 2]));
    assert!(recs.is_empty());

    let recs = capture("bob", || cute_log_each!(["a", "b"]));
    assert_eq!(messages(&recs), vec!["a", "b"]);
}

#[test]
fn object_logs_name_and_attaches_itself() {
    let enemy = Named::new("Enemy");
    let recs = capture("alice", || {
        cute_log_object!(&enemy);
        cute_log_object!(author: "alice", &enemy);
        cute_log_object!(author: "bob", &enemy);
    });
    assert_eq!(messages(&recs), vec!["Enemy", "[alice] Enemy"]);
    assert_eq!(recs[1].context.as_deref(), Some("Enemy"));
}

struct Unprintable;

impl std::fmt::Display for Unprintable {
    fn fmt(&self, _: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        Err(std::fmt::Error)
    }
}

#[test]
fn failing_display_never_aborts_the_caller() {
    let recs = capture("alice", || {
        cute_log!("value: {}", Unprintable);
        cute_log_each!(author: "alice", [Unprintable]);
        cute_warn!("still running");
    });
    assert_eq!(messages(&recs), vec!["value: ", "[alice] ", "still running"]);
}

#[test]
fn identity_change_is_seen_by_the_next_call() {
    let sink = Arc::new(MemorySink::new());
    let ids = IdentityStore::with_fixed_default(Arc::new(MemoryPrefs::new()), "bob");
    let facade = Facade::new(ids, sink.clone());
    scoped(facade, || {
        cute_log!(author: "alice", "before");
        cutedebug::facade().identity().set_identity("alice");
        cute_log!(author: "alice", "after");
    });
    assert_eq!(sink.messages(), vec!["[alice] after"]);
}
