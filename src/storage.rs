//! Browser-backed persistence and file transfer for the editor.

use log::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::prelude::JsValue;
use web_sys::{Blob, BlobPropertyBag, FileReader, HtmlAnchorElement, Storage, Url};

use crate::workflow::{StoragePort, WorkflowError};

/// [`StoragePort`] over the window's localStorage.
pub struct BrowserStorage {
	storage: Storage,
}

impl BrowserStorage {
	/// Fails when the browser exposes no localStorage (private mode,
	/// storage disabled by policy).
	pub fn open() -> Result<Self, WorkflowError> {
		let storage = web_sys::window()
			.and_then(|w| w.local_storage().ok().flatten())
			.ok_or(WorkflowError::StorageUnavailable)?;
		Ok(Self { storage })
	}
}

impl StoragePort for BrowserStorage {
	fn read(&self, key: &str) -> Option<String> {
		self.storage.get_item(key).ok().flatten()
	}

	fn write(&self, key: &str, value: &str) {
		if self.storage.set_item(key, value).is_err() {
			warn!("Failed to write {key} to localStorage");
		}
	}
}

/// Offers `json` to the user as a file download named `filename`.
pub fn download_json(json: &str, filename: &str) -> Result<(), JsValue> {
	let parts = js_sys::Array::new();
	parts.push(&JsValue::from_str(json));
	let options = BlobPropertyBag::new();
	options.set_type("application/json");
	let blob = Blob::new_with_str_sequence_and_options(&parts, &options)?;
	let url = Url::create_object_url_with_blob(&blob)?;

	let document = web_sys::window()
		.and_then(|w| w.document())
		.ok_or_else(|| JsValue::from_str("no document"))?;
	let anchor: HtmlAnchorElement = document.create_element("a")?.unchecked_into();
	anchor.set_href(&url);
	anchor.set_download(filename);
	anchor.click();
	Url::revoke_object_url(&url)?;
	Ok(())
}

/// Reads `file` as text and hands the contents to `on_text` once the
/// browser finishes loading it.
pub fn read_file_text(file: &web_sys::File, on_text: impl FnOnce(String) + 'static) {
	let reader = match FileReader::new() {
		Ok(reader) => reader,
		Err(_) => {
			warn!("FileReader unavailable");
			return;
		}
	};
	let reader_for_load = reader.clone();
	let onload = Closure::once_into_js(move |_event: web_sys::Event| {
		let text = reader_for_load
			.result()
			.ok()
			.and_then(|value| value.as_string());
		match text {
			Some(text) => on_text(text),
			None => warn!("Imported file did not contain text"),
		}
	});
	reader.set_onload(Some(onload.unchecked_ref()));
	if reader.read_as_text(file).is_err() {
		warn!("Failed to start reading imported file");
	}
}
