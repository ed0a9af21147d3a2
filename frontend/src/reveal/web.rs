use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::{Array, Reflect};
use web_sys::{
    window, Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    MediaQueryList, MediaQueryListEvent,
};
use yew::Callback;

use super::platform::{MotionPreference, PlatformError, ViewportObserver};

const REDUCED_MOTION_QUERY: &str = "(prefers-reduced-motion: reduce)";

/// `IntersectionObserver`-backed viewport observation.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserViewport;

/// Disconnects the observer when dropped.
pub struct IntersectionHandle {
    observer: IntersectionObserver,
    _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
}

impl Drop for IntersectionHandle {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}

impl ViewportObserver for BrowserViewport {
    type Target = Element;
    type Handle = IntersectionHandle;

    fn observe(
        &self,
        target: &Element,
        threshold: f64,
        on_ratio: Callback<f64>,
    ) -> Result<IntersectionHandle, PlatformError> {
        let window = window().ok_or(PlatformError::Unsupported("window"))?;
        if !Reflect::has(&window, &JsValue::from_str("IntersectionObserver")).unwrap_or(false) {
            return Err(PlatformError::Unsupported("IntersectionObserver"));
        }

        let callback = Closure::wrap(Box::new(move |entries: Array, _observer: IntersectionObserver| {
            for entry in entries.iter() {
                let entry: IntersectionObserverEntry = entry.unchecked_into();
                on_ratio.emit(entry.intersection_ratio());
            }
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(threshold));
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        observer.observe(target);

        Ok(IntersectionHandle {
            observer,
            _callback: callback,
        })
    }
}

/// `matchMedia("(prefers-reduced-motion: reduce)")`.
#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserMotion;

/// Removes the `change` listener when dropped.
pub struct MotionHandle {
    query: MediaQueryList,
    callback: Closure<dyn FnMut(MediaQueryListEvent)>,
}

impl Drop for MotionHandle {
    fn drop(&mut self) {
        let _ = self
            .query
            .remove_event_listener_with_callback("change", self.callback.as_ref().unchecked_ref());
    }
}

impl BrowserMotion {
    fn query(&self) -> Result<MediaQueryList, PlatformError> {
        let window = window().ok_or(PlatformError::Unsupported("window"))?;
        window
            .match_media(REDUCED_MOTION_QUERY)?
            .ok_or(PlatformError::Unsupported("matchMedia"))
    }
}

impl MotionPreference for BrowserMotion {
    type Handle = MotionHandle;

    fn prefers_reduced_motion(&self) -> Result<bool, PlatformError> {
        Ok(self.query()?.matches())
    }

    fn subscribe(&self, on_change: Callback<bool>) -> Result<MotionHandle, PlatformError> {
        let query = self.query()?;
        let callback = Closure::wrap(Box::new(move |event: MediaQueryListEvent| {
            on_change.emit(event.matches());
        }) as Box<dyn FnMut(MediaQueryListEvent)>);

        query.add_event_listener_with_callback("change", callback.as_ref().unchecked_ref())?;

        Ok(MotionHandle { query, callback })
    }
}
