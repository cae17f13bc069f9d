//! Access to messages about internal steps of resizing.
//! Used by tests to check which code path has processed an image.
use std::cell::RefCell;

thread_local!(static TEST_LOGS: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) });

pub fn log_message(msg: &str) {
    TEST_LOGS.with(|f| f.borrow_mut().push(msg.to_string()));
}

pub fn logs_contain(msg: &str) -> bool {
    TEST_LOGS.with(|f| f.borrow().iter().any(|line| line.contains(msg)))
}

pub fn clear_log() {
    TEST_LOGS.with(|f| f.borrow_mut().clear())
}
