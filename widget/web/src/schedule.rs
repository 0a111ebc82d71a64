//! Timer adapter over `setTimeout`.

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;
use std::time::Duration;

use coralchat_controller::{Scheduler, TaskKey};
use gloo_timers::callback::Timeout;

type Dispatch = Rc<RefCell<Option<Box<dyn Fn(TaskKey)>>>>;

/// Scheduler backed by browser timeouts. One timeout per [`TaskKey`];
/// re-scheduling a key drops the old timeout, which cancels it.
///
/// Firings route through a dispatch closure that is installed after the
/// controller exists, because the controller owns the scheduler while
/// timer callbacks need to reach back into the controller.
pub struct WebScheduler {
    pending: Rc<RefCell<HashMap<TaskKey, Timeout>>>,
    dispatch: Dispatch,
}

/// Setter half of the scheduler's dispatch slot, handed to boot code.
pub struct DispatchHandle {
    dispatch: Dispatch,
}

impl DispatchHandle {
    pub fn set(&self, f: impl Fn(TaskKey) + 'static) {
        *self.dispatch.borrow_mut() = Some(Box::new(f));
    }
}

impl WebScheduler {
    pub fn new() -> (Self, DispatchHandle) {
        let dispatch: Dispatch = Rc::new(RefCell::new(None));
        let scheduler = Self {
            pending: Rc::new(RefCell::new(HashMap::new())),
            dispatch: dispatch.clone(),
        };
        (scheduler, DispatchHandle { dispatch })
    }
}

impl Scheduler for WebScheduler {
    fn schedule(&mut self, key: TaskKey, delay: Duration) {
        let pending = self.pending.clone();
        let dispatch = self.dispatch.clone();
        let timeout = Timeout::new(delay.as_millis() as u32, move || {
            // Drop our own handle before dispatching so the callback can
            // re-schedule this key.
            pending.borrow_mut().remove(&key);
            let dispatch = dispatch.borrow();
            if let Some(f) = dispatch.as_ref() {
                f(key);
            }
        });
        self.pending.borrow_mut().insert(key, timeout);
    }

    fn cancel(&mut self, key: TaskKey) {
        if let Some(timeout) = self.pending.borrow_mut().remove(&key) {
            timeout.cancel();
        }
    }
}
