use std::{cell::RefCell, rc::Rc};

use super::*;
use crate::notifier::scope::TaskScope;

#[test]
fn emitting_without_subscribers_is_dropped() {
    let emitter = Emitter::<u32>::new();
    assert!(!emitter.try_emit(1));
    assert_eq!(emitter.subscriber_count(), 0);
}

#[test]
fn no_replay_for_late_subscribers() {
    let mut scope = TaskScope::new();
    let emitter = Emitter::<u32>::new();
    emitter.try_emit(7);

    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    emitter
        .collector()
        .forever(&mut scope, move |v| sink.borrow_mut().push(v));
    scope.run_until_stalled();
    assert!(seen.borrow().is_empty());

    assert!(emitter.try_emit(8));
    scope.run_until_stalled();
    assert_eq!(*seen.borrow(), vec![8]);
}

#[test]
fn unconsumed_event_is_overwritten_by_newer_one() {
    let mut scope = TaskScope::new();
    let emitter = Emitter::<&'static str>::new();
    let seen = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&seen);
    emitter
        .collector()
        .forever(&mut scope, move |v| sink.borrow_mut().push(v));

    emitter.try_emit("old");
    emitter.try_emit("new");
    scope.run_until_stalled();
    assert_eq!(*seen.borrow(), vec!["new"]);
}
