use std::cell::Cell;
use std::rc::Rc;

use leptos::prelude::*;
use log::{error, info};
use web_sys::{MouseEvent, Storage};

/// Browser storage key holding the résumé download count.
pub const DOWNLOAD_COUNT_KEY: &str = "resume_download_count";

/// Counts résumé downloads. Failures never surface; they count as zero.
pub trait DownloadCounter {
	/// Adds one download and returns the new total.
	fn record(&self) -> u64;
	/// Current total.
	fn count(&self) -> u64;
}

/// Counter that lives as long as the value, for tests and storage-less pages.
#[derive(Debug, Default)]
pub struct MemoryCounter {
	count: Cell<u64>,
}

impl DownloadCounter for MemoryCounter {
	fn record(&self) -> u64 {
		let next = self.count.get().saturating_add(1);
		self.count.set(next);
		next
	}

	fn count(&self) -> u64 {
		self.count.get()
	}
}

/// Counter persisted in `window.localStorage`.
pub struct LocalStorageCounter {
	storage: Option<Storage>,
}

impl LocalStorageCounter {
	/// Falls back to a zero count when storage is unavailable.
	pub fn new() -> Self {
		let storage = web_sys::window().and_then(|window| {
			window
				.local_storage()
				.map_err(|err| error!("local storage unavailable: {err:?}"))
				.ok()
				.flatten()
		});
		Self { storage }
	}
}

impl Default for LocalStorageCounter {
	fn default() -> Self {
		Self::new()
	}
}

impl DownloadCounter for LocalStorageCounter {
	fn record(&self) -> u64 {
		let Some(storage) = &self.storage else {
			return 0;
		};
		let next = self.count().saturating_add(1);
		match storage.set_item(DOWNLOAD_COUNT_KEY, &next.to_string()) {
			Ok(()) => next,
			Err(err) => {
				error!("failed to store download count: {err:?}");
				0
			}
		}
	}

	fn count(&self) -> u64 {
		let Some(storage) = &self.storage else {
			return 0;
		};
		match storage.get_item(DOWNLOAD_COUNT_KEY) {
			Ok(raw) => parse_count(raw.as_deref()),
			Err(err) => {
				error!("failed to read download count: {err:?}");
				0
			}
		}
	}
}

fn parse_count(raw: Option<&str>) -> u64 {
	raw.and_then(|s| s.trim().parse().ok()).unwrap_or(0)
}

/// Résumé download link that bumps `counter` on every click.
#[component]
pub fn ResumeDownload(
	#[prop(into)] href: String,
	counter: Rc<dyn DownloadCounter>,
) -> impl IntoView {
	let count = RwSignal::new(counter.count());
	let on_click = move |_: MouseEvent| {
		let total = counter.record();
		info!("résumé downloaded, total {total}");
		count.set(total);
	};

	view! {
		<div class="flex items-center gap-3">
			<a
				href=href
				download=""
				class="px-5 py-2 rounded-full bg-primary text-primary-foreground font-medium shadow-md"
				on:click=on_click
			>
				"Download Résumé"
			</a>
			<span class="text-xs text-muted-foreground">
				{move || match count.get() {
					1 => "1 download".to_string(),
					n => format!("{n} downloads"),
				}}
			</span>
		</div>
	}
}
