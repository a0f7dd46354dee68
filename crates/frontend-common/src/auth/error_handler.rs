//! Global auth error handler
//!
//! API wrappers call [`trigger_auth_error`] when the server rejects the access
//! token; the auth provider registers what that means (a logout).

use std::cell::RefCell;
use std::rc::Rc;

thread_local! {
    static AUTH_ERROR_CALLBACK: RefCell<Option<Rc<dyn Fn()>>> = RefCell::new(None);
}

pub fn set_auth_error_callback(callback: Rc<dyn Fn()>) {
    AUTH_ERROR_CALLBACK.with(|cb| {
        *cb.borrow_mut() = Some(callback);
    });
}

pub fn clear_auth_error_callback() {
    AUTH_ERROR_CALLBACK.with(|cb| {
        *cb.borrow_mut() = None;
    });
}

/// Run the registered callback, if any
pub fn trigger_auth_error() {
    // Clone out first so the callback may re-register without a double borrow
    let callback = AUTH_ERROR_CALLBACK.with(|cb| cb.borrow().clone());
    if let Some(callback) = callback {
        callback();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_trigger_runs_registered_callback() {
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        set_auth_error_callback(Rc::new(move || counter.set(counter.get() + 1)));

        trigger_auth_error();
        trigger_auth_error();
        assert_eq!(calls.get(), 2);

        clear_auth_error_callback();
        trigger_auth_error();
        assert_eq!(calls.get(), 2);
    }
}
