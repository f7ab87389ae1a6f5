//! Client-side file download.
//!
//! Builds a `Blob` from text, points a temporary `<a download>` at an object
//! URL for it, clicks it, and revokes the URL. No server round trip.

use anyhow::anyhow;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

fn js_err(e: JsValue) -> anyhow::Error {
    anyhow!("{:?}", e)
}

/// Offer `contents` to the user as a file named `filename`.
pub fn download_text(filename: &str, mime: &str, contents: &str) -> anyhow::Result<()> {
    let document = web_sys::window()
        .and_then(|window| window.document())
        .ok_or_else(|| anyhow!("window document object not found"))?;

    let parts = js_sys::Array::of1(&JsValue::from_str(contents));
    let options = BlobPropertyBag::new();
    options.set_type(mime);
    let blob = Blob::new_with_str_sequence_and_options(&parts, &options).map_err(js_err)?;
    let url = Url::create_object_url_with_blob(&blob).map_err(js_err)?;

    let anchor = document
        .create_element("a")
        .map_err(js_err)?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|_| anyhow!("created element is not an anchor"))?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.click();

    Url::revoke_object_url(&url).map_err(js_err)?;
    log::info!("downloaded {} ({} bytes)", filename, contents.len());
    Ok(())
}
