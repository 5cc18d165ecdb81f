//! Provider scopes.
//!
//! A scope is a frame on a thread-local stack binding a value's type to a
//! shared handle. [`provide`] pushes a frame for the duration of a closure;
//! [`current`] walks the stack innermost-first, so nested providers shadow
//! outer ones and the outer binding is visible again once the inner scope
//! pops. There is no default fallback — an absent binding is the caller's
//! problem to surface.

use std::any::{Any, TypeId};
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

thread_local! {
    static SCOPE_STACK: RefCell<Vec<HashMap<TypeId, Rc<dyn Any>>>> = RefCell::new(Vec::new());
}

/// Establishes `value` for the duration of `f`.
pub fn provide<T: 'static, R>(value: Rc<T>, f: impl FnOnce() -> R) -> R {
    with_frame(|| {
        bind(TypeId::of::<T>(), value);
        f()
    })
}

/// Innermost established handle of type `T`, if any scope binds one.
pub fn current<T: 'static>() -> Option<Rc<T>> {
    SCOPE_STACK.with(|st| {
        for frame in st.borrow().iter().rev() {
            if let Some(v) = frame.get(&TypeId::of::<T>())
                && let Ok(t) = v.clone().downcast::<T>()
            {
                return Some(t);
            }
        }
        None
    })
}

fn with_frame<R>(f: impl FnOnce() -> R) -> R {
    // Non-panicking frame guard (ensures pop on unwind)
    struct Guard;
    impl Drop for Guard {
        fn drop(&mut self) {
            SCOPE_STACK.with(|st| {
                st.borrow_mut().pop();
            });
        }
    }
    SCOPE_STACK.with(|st| st.borrow_mut().push(HashMap::new()));
    let _guard = Guard;
    f()
}

fn bind(t: TypeId, v: Rc<dyn Any>) {
    SCOPE_STACK.with(|st| {
        if let Some(top) = st.borrow_mut().last_mut() {
            top.insert(t, v);
        }
    });
}
