use thiserror::Error;
use yew::Callback;

/// Why a host primitive could not be used. The reveal controller never
/// surfaces these; it logs them and shows the content instead.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PlatformError {
    #[error("{0} is not available in this environment")]
    Unsupported(&'static str),
    #[error("javascript error: {0}")]
    Js(String),
}

impl From<wasm_bindgen::JsValue> for PlatformError {
    fn from(value: wasm_bindgen::JsValue) -> Self {
        PlatformError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

/// Viewport-intersection primitive.
///
/// `observe` reports the intersection ratio of `target` through `on_ratio`
/// until the returned handle is dropped.
pub trait ViewportObserver {
    type Target: Clone + 'static;
    type Handle: 'static;

    fn observe(
        &self,
        target: &Self::Target,
        threshold: f64,
        on_ratio: Callback<f64>,
    ) -> Result<Self::Handle, PlatformError>;
}

/// The "prefers reduced motion" media feature.
///
/// `subscribe` delivers the new value on every change until the handle is
/// dropped.
pub trait MotionPreference {
    type Handle: 'static;

    fn prefers_reduced_motion(&self) -> Result<bool, PlatformError>;

    fn subscribe(&self, on_change: Callback<bool>) -> Result<Self::Handle, PlatformError>;
}
