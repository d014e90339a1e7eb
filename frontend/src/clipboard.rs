use futures::future::LocalBoxFuture;
use futures::FutureExt;
use log::{info, warn};
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys::js_sys::{Function, Promise, Reflect};
use web_sys::{HtmlDocument, HtmlTextAreaElement};

#[derive(Clone, Debug, Error, PartialEq)]
pub enum ClipboardError {
    #[error("clipboard API is not available")]
    Unavailable,
    #[error("clipboard write was rejected: {0}")]
    Rejected(String),
    #[error("legacy copy command failed")]
    CommandFailed,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CopyOutcome {
    Primary,
    Fallback,
    Failed,
}

pub trait ClipboardPort {
    /// Starts the asynchronous clipboard write right away; the future only
    /// reports how it went.
    fn write_text(&self, text: String) -> LocalBoxFuture<'static, Result<(), ClipboardError>>;

    /// Offscreen textarea + `execCommand("copy")`.
    fn legacy_copy(&self, text: &str) -> Result<(), ClipboardError>;
}

/// Tries the clipboard API, then the legacy path. Never fails: callers play
/// their confirmation whatever the outcome.
///
/// The primary write is started before this returns, so calling it from an
/// event handler keeps the write inside the user gesture even when the
/// returned future is polled later.
pub fn copy_best_effort<P: ClipboardPort>(
    port: &P,
    text: String,
) -> LocalBoxFuture<'_, CopyOutcome> {
    let write = port.write_text(text.clone());
    async move {
        match write.await {
            Ok(()) => CopyOutcome::Primary,
            Err(err) => {
                info!("clipboard write failed ({}), falling back to execCommand", err);
                match port.legacy_copy(&text) {
                    Ok(()) => CopyOutcome::Fallback,
                    Err(err) => {
                        warn!("could not copy to clipboard: {}", err);
                        CopyOutcome::Failed
                    }
                }
            }
        }
    }
    .boxed_local()
}

#[derive(Clone, Copy, Debug, Default)]
pub struct BrowserClipboard;

impl ClipboardPort for BrowserClipboard {
    fn write_text(&self, text: String) -> LocalBoxFuture<'static, Result<(), ClipboardError>> {
        let started = start_write(&text);
        async move {
            JsFuture::from(started?)
                .await
                .map(|_| ())
                .map_err(|err| ClipboardError::Rejected(format!("{:?}", err)))
        }
        .boxed_local()
    }

    fn legacy_copy(&self, text: &str) -> Result<(), ClipboardError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or(ClipboardError::Unavailable)?;
        let body = document.body().ok_or(ClipboardError::Unavailable)?;

        let area: HtmlTextAreaElement = document
            .create_element("textarea")
            .ok()
            .and_then(|el| el.dyn_into().ok())
            .ok_or(ClipboardError::CommandFailed)?;
        area.set_value(text);
        let style = area.style();
        let _ = style.set_property("position", "fixed");
        let _ = style.set_property("left", "-9999px");
        let _ = style.set_property("top", "-9999px");

        body.append_child(&area)
            .map_err(|_| ClipboardError::CommandFailed)?;
        let _ = area.focus();
        area.select();

        let copied = document
            .dyn_ref::<HtmlDocument>()
            .and_then(|doc| doc.exec_command("copy").ok())
            .unwrap_or(false);
        let _ = body.remove_child(&area);

        if copied {
            Ok(())
        } else {
            Err(ClipboardError::CommandFailed)
        }
    }
}

// Looked up dynamically: some embedded browsers and insecure origins have no
// `navigator.clipboard` at all.
fn start_write(text: &str) -> Result<Promise, ClipboardError> {
    let navigator = web_sys::window()
        .ok_or(ClipboardError::Unavailable)?
        .navigator();

    let clipboard = Reflect::get(&navigator, &JsValue::from_str("clipboard"))
        .map_err(|_| ClipboardError::Unavailable)?;
    if clipboard.is_undefined() || clipboard.is_null() {
        return Err(ClipboardError::Unavailable);
    }

    let write: Function = Reflect::get(&clipboard, &JsValue::from_str("writeText"))
        .ok()
        .and_then(|f| f.dyn_into().ok())
        .ok_or(ClipboardError::Unavailable)?;

    write
        .call1(&clipboard, &JsValue::from_str(text))
        .map_err(|err| ClipboardError::Rejected(format!("{:?}", err)))?
        .dyn_into::<Promise>()
        .map_err(|_| ClipboardError::Unavailable)
}

#[cfg(test)]
mod tests {
    use super::*;
    use futures::executor::block_on;
    use std::cell::RefCell;

    struct FakeClipboard {
        primary: Result<(), ClipboardError>,
        legacy: Result<(), ClipboardError>,
        writes: RefCell<Vec<String>>,
        legacy_calls: RefCell<Vec<String>>,
    }

    impl FakeClipboard {
        fn new(primary: Result<(), ClipboardError>, legacy: Result<(), ClipboardError>) -> Self {
            Self {
                primary,
                legacy,
                writes: RefCell::new(Vec::new()),
                legacy_calls: RefCell::new(Vec::new()),
            }
        }
    }

    impl ClipboardPort for FakeClipboard {
        fn write_text(&self, text: String) -> LocalBoxFuture<'static, Result<(), ClipboardError>> {
            self.writes.borrow_mut().push(text);
            let result = self.primary.clone();
            async move { result }.boxed_local()
        }

        fn legacy_copy(&self, text: &str) -> Result<(), ClipboardError> {
            self.legacy_calls.borrow_mut().push(text.to_string());
            self.legacy.clone()
        }
    }

    #[test]
    fn primary_success_skips_fallback() {
        let port = FakeClipboard::new(Ok(()), Ok(()));
        let outcome = block_on(copy_best_effort(&port, "hi@example.com".into()));
        assert_eq!(outcome, CopyOutcome::Primary);
        assert!(port.legacy_calls.borrow().is_empty());
    }

    #[test]
    fn rejected_write_falls_back() {
        let port = FakeClipboard::new(Err(ClipboardError::Rejected("denied".into())), Ok(()));
        let outcome = block_on(copy_best_effort(&port, "hi@example.com".into()));
        assert_eq!(outcome, CopyOutcome::Fallback);
        assert_eq!(*port.legacy_calls.borrow(), vec!["hi@example.com".to_string()]);
    }

    #[test]
    fn missing_api_falls_back() {
        let port = FakeClipboard::new(Err(ClipboardError::Unavailable), Ok(()));
        let outcome = block_on(copy_best_effort(&port, "x".into()));
        assert_eq!(outcome, CopyOutcome::Fallback);
    }

    #[test]
    fn total_failure_is_swallowed() {
        let port = FakeClipboard::new(
            Err(ClipboardError::Unavailable),
            Err(ClipboardError::CommandFailed),
        );
        let outcome = block_on(copy_best_effort(&port, "x".into()));
        assert_eq!(outcome, CopyOutcome::Failed);
        assert_eq!(port.legacy_calls.borrow().len(), 1);
    }

    #[test]
    fn write_starts_before_the_outcome_is_awaited() {
        let port = FakeClipboard::new(Err(ClipboardError::Unavailable), Ok(()));
        let copying = copy_best_effort(&port, "hi@example.com".into());

        assert_eq!(*port.writes.borrow(), vec!["hi@example.com".to_string()]);
        assert!(port.legacy_calls.borrow().is_empty());

        assert_eq!(block_on(copying), CopyOutcome::Fallback);
        assert_eq!(port.writes.borrow().len(), 1);
    }
}
