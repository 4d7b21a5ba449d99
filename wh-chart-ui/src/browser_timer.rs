//! One-shot timers on the browser event loop (`setTimeout`).

use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use wh_dashboard::timer::{Timer, TimerHandle};
use std::time::Duration;

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserTimer;

/// Id returned by `setTimeout`, or `None` if the timeout could not be armed.
#[derive(Debug)]
pub struct BrowserTimeout(Option<i32>);

impl TimerHandle for BrowserTimeout {
    fn cancel(self) {
        if let (Some(id), Some(window)) = (self.0, web_sys::window()) {
            window.clear_timeout_with_handle(id);
        }
    }
}

impl Timer for BrowserTimer {
    type Handle = BrowserTimeout;

    fn arm(&self, delay: Duration, callback: Box<dyn FnOnce()>) -> BrowserTimeout {
        let Some(window) = web_sys::window() else {
            log::warn!("No window; dropping timer");
            return BrowserTimeout(None);
        };
        // once_into_js frees the closure after its single call
        let js_callback = Closure::once_into_js(callback);
        let millis = i32::try_from(delay.as_millis()).unwrap_or(i32::MAX);
        match window.set_timeout_with_callback_and_timeout_and_arguments_0(
            js_callback.unchecked_ref(),
            millis,
        ) {
            Ok(id) => BrowserTimeout(Some(id)),
            Err(e) => {
                log::warn!("setTimeout failed: {:?}", e);
                BrowserTimeout(None)
            }
        }
    }
}
