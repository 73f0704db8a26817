use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Intersection-observer subscription; disconnects on drop.
pub struct VisibilityWatch {
    observer: web::IntersectionObserver,
    _callback: Closure<dyn FnMut(js_sys::Array)>,
}

/// Report whether `target` is on screen whenever that changes. Returns
/// `None` when `IntersectionObserver` is unavailable; callers then treat the
/// target as always visible.
pub fn watch(
    target: &web::Element,
    threshold: f64,
    mut on_change: impl FnMut(bool) + 'static,
) -> Option<VisibilityWatch> {
    let callback = Closure::wrap(Box::new(move |entries: js_sys::Array| {
        let visible = entries
            .iter()
            .last()
            .and_then(|e| e.dyn_into::<web::IntersectionObserverEntry>().ok())
            .map(|e| e.is_intersecting())
            .unwrap_or(true);
        on_change(visible);
    }) as Box<dyn FnMut(js_sys::Array)>);

    let options = web::IntersectionObserverInit::new();
    options.set_threshold(&wasm_bindgen::JsValue::from_f64(threshold));
    let observer = match web::IntersectionObserver::new_with_options(
        callback.as_ref().unchecked_ref(),
        &options,
    ) {
        Ok(o) => o,
        Err(e) => {
            log::warn!("[visibility] IntersectionObserver unavailable: {:?}", e);
            return None;
        }
    };
    observer.observe(target);
    Some(VisibilityWatch {
        observer,
        _callback: callback,
    })
}

impl Drop for VisibilityWatch {
    fn drop(&mut self) {
        self.observer.disconnect();
    }
}
