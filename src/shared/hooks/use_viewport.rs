//! Viewport size tracking through a scoped `resize` subscription.
//!
//! The listener is held by a [`ResizeSubscription`] guard; dropping the guard
//! removes the listener it registered, so every mount pairs with one removal.

use dioxus::prelude::*;

use crate::shared::constants::{DEFAULT_VIEWPORT_HEIGHT, DEFAULT_VIEWPORT_WIDTH};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportState {
    pub width: u32,
    pub height: u32,
}

impl Default for ViewportState {
    fn default() -> Self {
        Self {
            width: DEFAULT_VIEWPORT_WIDTH,
            height: DEFAULT_VIEWPORT_HEIGHT,
        }
    }
}

/// Something that emits resize notifications
pub trait ResizeSource {
    /// Token needed to remove a registered listener
    type Handle;

    fn current(&self) -> ViewportState;
    fn subscribe(&self, on_resize: Box<dyn FnMut(ViewportState)>) -> Self::Handle;
    fn unsubscribe(&self, handle: Self::Handle);
}

/// Registered resize listener, removed on drop
pub struct ResizeSubscription<S: ResizeSource> {
    source: S,
    handle: Option<S::Handle>,
}

impl<S: ResizeSource> ResizeSubscription<S> {
    pub fn new<F>(source: S, on_resize: F) -> Self
    where
        F: FnMut(ViewportState) + 'static,
    {
        let handle = source.subscribe(Box::new(on_resize));
        crate::shared::logging::log_resize_listener(true);
        Self {
            source,
            handle: Some(handle),
        }
    }

    pub fn current(&self) -> ViewportState {
        self.source.current()
    }
}

impl<S: ResizeSource> Drop for ResizeSubscription<S> {
    fn drop(&mut self) {
        if let Some(handle) = self.handle.take() {
            self.source.unsubscribe(handle);
            crate::shared::logging::log_resize_listener(false);
        }
    }
}

/// Browser `window` resize events
#[cfg(target_arch = "wasm32")]
pub struct WindowResizeSource {
    window: web_sys::Window,
}

#[cfg(target_arch = "wasm32")]
impl WindowResizeSource {
    pub fn new(window: web_sys::Window) -> Self {
        Self { window }
    }
}

#[cfg(target_arch = "wasm32")]
fn read_viewport(window: &web_sys::Window) -> ViewportState {
    let dimension = |value: Result<wasm_bindgen::JsValue, wasm_bindgen::JsValue>, fallback: u32| {
        value
            .ok()
            .and_then(|v| v.as_f64())
            .map(|v| v.max(0.0) as u32)
            .unwrap_or(fallback)
    };

    ViewportState {
        width: dimension(window.inner_width(), DEFAULT_VIEWPORT_WIDTH),
        height: dimension(window.inner_height(), DEFAULT_VIEWPORT_HEIGHT),
    }
}

#[cfg(target_arch = "wasm32")]
impl ResizeSource for WindowResizeSource {
    type Handle = wasm_bindgen::closure::Closure<dyn FnMut(web_sys::Event)>;

    fn current(&self) -> ViewportState {
        read_viewport(&self.window)
    }

    fn subscribe(&self, mut on_resize: Box<dyn FnMut(ViewportState)>) -> Self::Handle {
        use wasm_bindgen::prelude::*;
        use wasm_bindgen::JsCast;

        let window = self.window.clone();
        let listener = Closure::wrap(Box::new(move |_: web_sys::Event| {
            on_resize(read_viewport(&window));
        }) as Box<dyn FnMut(_)>);

        if let Err(e) = self
            .window
            .add_event_listener_with_callback("resize", listener.as_ref().unchecked_ref())
        {
            tracing::error!("Failed to register resize listener: {:?}", e);
        }

        listener
    }

    fn unsubscribe(&self, handle: Self::Handle) {
        use wasm_bindgen::JsCast;

        if let Err(e) = self
            .window
            .remove_event_listener_with_callback("resize", handle.as_ref().unchecked_ref())
        {
            tracing::error!("Failed to remove resize listener: {:?}", e);
        }
        // closure is freed here, after removal
    }
}

/// Current viewport size, updated on every window resize.
///
/// Starts from [`ViewportState::default`] so the first client render matches
/// the server render, then syncs to the real window after mount.
pub fn use_viewport() -> Signal<ViewportState> {
    let viewport = use_signal(ViewportState::default);

    #[cfg(target_arch = "wasm32")]
    {
        use std::cell::RefCell;
        use std::rc::Rc;

        let subscription = use_hook(move || {
            let subscription = web_sys::window().map(|window| {
                ResizeSubscription::new(WindowResizeSource::new(window), move |state| {
                    let mut viewport = viewport;
                    viewport.set(state);
                })
            });
            Rc::new(RefCell::new(subscription))
        });

        let sync = subscription.clone();
        use_effect(move || {
            let mut viewport = viewport;
            if let Some(current) = sync.borrow().as_ref().map(|s| s.current()) {
                viewport.set(current);
            }
        });

        use_drop(move || {
            subscription.borrow_mut().take();
        });
    }

    viewport
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::rc::Rc;

    #[derive(Debug, Clone, PartialEq)]
    enum Call {
        Subscribe(usize),
        Unsubscribe(usize),
    }

    /// Records registrations and lets the test fire resize events
    #[derive(Clone, Default)]
    struct RecordingSource {
        calls: Rc<RefCell<Vec<Call>>>,
        listeners: Rc<RefCell<Vec<Option<Box<dyn FnMut(ViewportState)>>>>>,
    }

    impl RecordingSource {
        fn fire(&self, state: ViewportState) {
            for listener in self.listeners.borrow_mut().iter_mut().flatten() {
                listener(state);
            }
        }

        fn active(&self) -> usize {
            self.listeners.borrow().iter().filter(|l| l.is_some()).count()
        }
    }

    impl ResizeSource for RecordingSource {
        type Handle = usize;

        fn current(&self) -> ViewportState {
            ViewportState { width: 800, height: 600 }
        }

        fn subscribe(&self, on_resize: Box<dyn FnMut(ViewportState)>) -> usize {
            let mut listeners = self.listeners.borrow_mut();
            listeners.push(Some(on_resize));
            let id = listeners.len() - 1;
            self.calls.borrow_mut().push(Call::Subscribe(id));
            id
        }

        fn unsubscribe(&self, handle: usize) {
            self.listeners.borrow_mut()[handle] = None;
            self.calls.borrow_mut().push(Call::Unsubscribe(handle));
        }
    }

    #[test]
    fn test_subscription_registers_and_removes_exactly_once() {
        let source = RecordingSource::default();

        let subscription = ResizeSubscription::new(source.clone(), |_| {});
        assert_eq!(*source.calls.borrow(), vec![Call::Subscribe(0)]);
        assert_eq!(source.active(), 1);

        drop(subscription);
        assert_eq!(*source.calls.borrow(), vec![Call::Subscribe(0), Call::Unsubscribe(0)]);
        assert_eq!(source.active(), 0);
    }

    #[test]
    fn test_listener_receives_resize_until_dropped() {
        let source = RecordingSource::default();
        let seen = Rc::new(RefCell::new(Vec::new()));

        let sink = seen.clone();
        let subscription = ResizeSubscription::new(source.clone(), move |state| sink.borrow_mut().push(state.width));
        assert_eq!(subscription.current(), ViewportState { width: 800, height: 600 });

        source.fire(ViewportState { width: 1024, height: 768 });
        source.fire(ViewportState { width: 640, height: 480 });
        drop(subscription);
        source.fire(ViewportState { width: 1920, height: 1080 });

        assert_eq!(*seen.borrow(), vec![1024, 640]);
    }

    #[test]
    fn test_taking_from_slot_removes_once() {
        let source = RecordingSource::default();
        let slot = RefCell::new(Some(ResizeSubscription::new(source.clone(), |_| {})));

        slot.borrow_mut().take();
        slot.borrow_mut().take();
        drop(slot);

        let unsubscribes = source
            .calls
            .borrow()
            .iter()
            .filter(|call| matches!(call, Call::Unsubscribe(_)))
            .count();
        assert_eq!(unsubscribes, 1);
    }

    #[test]
    fn test_default_viewport() {
        let state = ViewportState::default();
        assert_eq!(state.width, 1280);
        assert_eq!(state.height, 800);
    }

    fn viewport_readout() -> Element {
        let viewport = use_viewport();
        let ViewportState { width, height } = viewport();
        rsx! { span { "{width}x{height}" } }
    }

    #[test]
    fn test_without_resize_source_keeps_default_viewport() {
        let mut dom = VirtualDom::new(viewport_readout);
        dom.rebuild_in_place();
        assert_eq!(dioxus_ssr::render(&dom), "<span>1280x800</span>");
    }
}
