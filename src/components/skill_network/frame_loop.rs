use std::cell::{Cell, RefCell};
use std::rc::Rc;

use log::{error, warn};
use wasm_bindgen::prelude::*;
use web_sys::Window;

/// Seconds reported for the first frame, when there is no previous timestamp.
const FIRST_FRAME: f64 = 1.0 / 60.0;

/// Called with the frame timestamp in milliseconds.
pub type FrameCallback = Rc<dyn Fn(f64)>;

/// Something that can run a callback once on the next display frame.
pub trait FrameScheduler {
	/// Schedules `callback` and returns the request id, if scheduling worked.
	fn request(&self, callback: &FrameCallback) -> Option<i32>;
	/// Drops a request returned by [`FrameScheduler::request`].
	fn cancel(&self, request: i32);
}

/// Wraps a [`FrameCallback`] once and reuses the wrapper until a different
/// callback is passed.
struct Wrapped<W> {
	slot: RefCell<Option<(FrameCallback, W)>>,
}

impl<W> Wrapped<W> {
	fn new() -> Self {
		Self {
			slot: RefCell::new(None),
		}
	}

	fn with<R>(
		&self,
		callback: &FrameCallback,
		wrap: impl FnOnce(FrameCallback) -> W,
		use_wrapped: impl FnOnce(&W) -> R,
	) -> R {
		let current = match self.slot.borrow_mut().take() {
			Some((cached, wrapped)) if Rc::ptr_eq(&cached, callback) => (cached, wrapped),
			_ => (callback.clone(), wrap(callback.clone())),
		};
		let result = use_wrapped(&current.1);
		*self.slot.borrow_mut() = Some(current);
		result
	}
}

/// `requestAnimationFrame` on the current window.
///
/// Passing a different callback replaces the JS closure, which invalidates
/// any request still pending for the previous one.
pub struct BrowserScheduler {
	window: Window,
	closure: Wrapped<Closure<dyn FnMut(f64)>>,
}

impl BrowserScheduler {
	/// `None` outside a browser window.
	pub fn new() -> Option<Self> {
		web_sys::window().map(|window| Self {
			window,
			closure: Wrapped::new(),
		})
	}
}

impl FrameScheduler for BrowserScheduler {
	fn request(&self, callback: &FrameCallback) -> Option<i32> {
		self.closure.with(
			callback,
			|callback| Closure::new(move |timestamp: f64| callback(timestamp)),
			|closure| {
				self.window
					.request_animation_frame(closure.as_ref().unchecked_ref())
					.map_err(|err| error!("requestAnimationFrame failed: {err:?}"))
					.ok()
			},
		)
	}

	fn cancel(&self, request: i32) {
		if let Err(err) = self.window.cancel_animation_frame(request) {
			warn!("cancelAnimationFrame({request}) failed: {err:?}");
		}
	}
}

struct LoopState<S> {
	scheduler: S,
	running: Cell<bool>,
	pending: Cell<Option<i32>>,
	last_timestamp: Cell<Option<f64>>,
	on_frame: RefCell<Box<dyn FnMut(f64)>>,
	tick: RefCell<Option<FrameCallback>>,
}

impl<S: FrameScheduler> LoopState<S> {
	fn schedule(&self) {
		let tick = self.tick.borrow().clone();
		if let Some(tick) = tick {
			self.pending.set(self.scheduler.request(&tick));
		}
	}

	fn fire(&self, timestamp: f64) {
		self.pending.set(None);
		if !self.running.get() {
			return;
		}
		let elapsed = match self.last_timestamp.replace(Some(timestamp)) {
			Some(previous) if timestamp > previous => (timestamp - previous) / 1000.0,
			_ => FIRST_FRAME,
		};
		{
			let mut on_frame = self.on_frame.borrow_mut();
			(*on_frame)(elapsed);
		}
		if self.running.get() {
			self.schedule();
		}
	}

	fn stop(&self) {
		self.running.set(false);
		if let Some(request) = self.pending.take() {
			self.scheduler.cancel(request);
		}
	}
}

/// Runs a callback on every display frame until cancelled or dropped.
///
/// The callback gets the seconds elapsed since the previous frame. The
/// scheduled request only holds a weak reference to the loop, so dropping the
/// handle frees everything the callback captured, and a request that still
/// fires afterwards is a no-op.
pub struct FrameLoop<S: FrameScheduler + 'static> {
	state: Rc<LoopState<S>>,
}

impl<S: FrameScheduler + 'static> FrameLoop<S> {
	/// Schedules the first frame right away.
	pub fn start(scheduler: S, on_frame: impl FnMut(f64) + 'static) -> Self {
		let state = Rc::new(LoopState {
			scheduler,
			running: Cell::new(true),
			pending: Cell::new(None),
			last_timestamp: Cell::new(None),
			on_frame: RefCell::new(Box::new(on_frame)),
			tick: RefCell::new(None),
		});

		let weak = Rc::downgrade(&state);
		let tick: FrameCallback = Rc::new(move |timestamp| {
			if let Some(state) = weak.upgrade() {
				state.fire(timestamp);
			}
		});
		*state.tick.borrow_mut() = Some(tick);
		state.schedule();

		Self { state }
	}

	/// `false` once cancelled.
	pub fn is_running(&self) -> bool {
		self.state.running.get()
	}

	/// Stops the loop and unregisters the pending frame request.
	pub fn cancel(&self) {
		self.state.stop();
	}
}

impl<S: FrameScheduler + 'static> Drop for FrameLoop<S> {
	fn drop(&mut self) {
		self.state.stop();
	}
}
