//! Small browser affordances: confirmation dialogs and file downloads.
//!
//! Both are no-ops outside the browser.

/// Ask the user to confirm a destructive action. Outside the browser, or if
/// the dialog cannot be shown, the answer is "no".
pub fn confirm(message: &str) -> bool {
    #[cfg(feature = "csr")]
    {
        web_sys::window().and_then(|w| w.confirm_with_message(message).ok()).unwrap_or(false)
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = message;
        false
    }
}

/// Offer `contents` to the user as a CSV file named `file_name`, using a
/// temporary `<a download>` element.
pub fn download_csv(file_name: &str, contents: &str) {
    #[cfg(feature = "csr")]
    {
        use wasm_bindgen::JsCast;

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::warn!("csv export skipped: no document");
            return;
        };
        let anchor = match document.create_element("a").map(|el| el.dyn_into::<web_sys::HtmlAnchorElement>()) {
            Ok(Ok(anchor)) => anchor,
            _ => {
                log::warn!("csv export skipped: could not create link element");
                return;
            }
        };
        let encoded = String::from(js_sys::encode_uri_component(contents));
        anchor.set_href(&format!("data:text/csv;charset=utf-8,{encoded}"));
        anchor.set_download(file_name);
        anchor.click();
    }
    #[cfg(not(feature = "csr"))]
    {
        let _ = (file_name, contents);
    }
}
