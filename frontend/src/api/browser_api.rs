//! Clipboard, location and download helpers backed by the browser.

use anyhow::{Context, anyhow};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use wasm_bindgen::JsCast;
use web_sys::HtmlAnchorElement;

fn window() -> anyhow::Result<web_sys::Window> {
    web_sys::window().ok_or_else(|| anyhow!("no browser window available"))
}

pub async fn copy_to_clipboard(text: &str) -> anyhow::Result<()> {
    let promise = window()?.navigator().clipboard().write_text(text);
    wasm_bindgen_futures::JsFuture::from(promise)
        .await
        .map_err(|e| anyhow!("clipboard write rejected: {e:?}"))?;
    Ok(())
}

pub fn current_href() -> anyhow::Result<String> {
    window()?
        .location()
        .href()
        .map_err(|e| anyhow!("cannot read location: {e:?}"))
}

/// `data:` URL carrying `text` as UTF-8 plain text.
pub fn text_data_url(text: &str) -> String {
    format!("data:text/plain;charset=utf-8;base64,{}", STANDARD.encode(text))
}

/// Saves `text` as a plain text file through a temporary download link.
pub fn download_text_file(filename: &str, text: &str) -> anyhow::Result<()> {
    let document = window()?.document().context("window has no document")?;
    let body = document.body().context("document has no body")?;
    let anchor = document
        .create_element("a")
        .map_err(|e| anyhow!("cannot create download link: {e:?}"))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| anyhow!("download link is not an anchor: {e:?}"))?;
    anchor.set_href(&text_data_url(text));
    anchor.set_download(filename);
    body.append_child(&anchor)
        .map_err(|e| anyhow!("cannot attach download link: {e:?}"))?;
    anchor.click();
    anchor.remove();
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn data_url_is_base64_plain_text() {
        let url = text_data_url("TOTAL 6.45\nTHANK YOU!");
        let (header, payload) = url.split_once(',').unwrap();
        assert_eq!(header, "data:text/plain;charset=utf-8;base64");
        assert_eq!(STANDARD.decode(payload).unwrap(), b"TOTAL 6.45\nTHANK YOU!");
    }

    #[test]
    fn data_url_keeps_quotes_and_non_ascii_intact() {
        let text = "Caf\u{e9} \"receipt\" </script>";
        let url = text_data_url(text);
        assert!(!url.contains('"'));
        let payload = url.rsplit(',').next().unwrap();
        assert_eq!(String::from_utf8(STANDARD.decode(payload).unwrap()).unwrap(), text);
    }
}
