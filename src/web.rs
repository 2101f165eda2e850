//! Browser backend and JavaScript exports.
//!
//! `WebDom` implements [`Dom`] over the page's `document`. The exports are the
//! page's entry points: `init_read_more` runs once after the markup loads, and
//! `toggle_answer` is called from inline `onclick` attributes.

use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::{Document, Element, Event, HtmlElement};

use crate::config::ReadMoreConfig;
use crate::dom::Dom;
use crate::error::ToggleError;
use crate::toggle::{ReadMore, toggle_answer_visibility};

impl From<ToggleError> for JsValue {
    fn from(err: ToggleError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

fn host_error(err: JsValue) -> ToggleError {
    ToggleError::Host(err.as_string().unwrap_or_else(|| format!("{err:?}")))
}

/// [`Dom`] over a live `web_sys::Document`.
#[derive(Debug, Clone)]
pub struct WebDom {
    document: Document,
}

impl WebDom {
    #[must_use]
    pub fn new(document: Document) -> Self {
        Self { document }
    }

    /// Wrap the current window's document.
    ///
    /// # Errors
    ///
    /// Returns [`ToggleError::Host`] outside a browser window.
    pub fn from_window() -> Result<Self, ToggleError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| ToggleError::Host("no document available".to_owned()))?;
        Ok(Self::new(document))
    }

    #[must_use]
    pub fn document(&self) -> &Document {
        &self.document
    }

    fn element(&self, id: &str) -> Result<Element, ToggleError> {
        self.document.get_element_by_id(id).ok_or_else(|| ToggleError::not_found(id))
    }

    fn html_element(&self, id: &str) -> Result<HtmlElement, ToggleError> {
        self.element(id)?
            .dyn_into::<HtmlElement>()
            .map_err(|_| ToggleError::NotStylable { id: id.to_owned() })
    }
}

impl Dom for WebDom {
    fn contains(&self, id: &str) -> bool {
        self.document.get_element_by_id(id).is_some()
    }

    fn has_class(&self, id: &str, class: &str) -> Result<bool, ToggleError> {
        Ok(self.element(id)?.class_list().contains(class))
    }

    fn set_class(&mut self, id: &str, class: &str, present: bool) -> Result<(), ToggleError> {
        let classes = self.element(id)?.class_list();
        let result = if present { classes.add_1(class) } else { classes.remove_1(class) };
        result.map_err(host_error)
    }

    fn set_text(&mut self, id: &str, text: &str) -> Result<(), ToggleError> {
        self.element(id)?.set_text_content(Some(text));
        Ok(())
    }

    fn display(&self, id: &str) -> Result<String, ToggleError> {
        self.html_element(id)?.style().get_property_value("display").map_err(host_error)
    }

    fn set_display(&mut self, id: &str, value: &str) -> Result<(), ToggleError> {
        self.html_element(id)?.style().set_property("display", value).map_err(host_error)
    }
}

/// A click listener attached to a DOM element; removed when dropped.
pub struct ClickListener {
    target: Element,
    callback: Closure<dyn FnMut(Event)>,
}

impl ClickListener {
    /// Keep the listener attached for the lifetime of the page.
    pub fn forget(self) {
        std::mem::forget(self);
    }
}

impl Drop for ClickListener {
    fn drop(&mut self) {
        if let Err(err) = self
            .target
            .remove_event_listener_with_callback("click", self.callback.as_ref().unchecked_ref())
        {
            log::warn!("failed to detach click listener: {err:?}");
        }
    }
}

/// Attach `handler` to clicks on the element with `target_id`.
///
/// Handler errors are logged; they do not propagate into the event loop.
///
/// # Errors
///
/// Returns [`ToggleError::ElementNotFound`] if the target is absent, or
/// [`ToggleError::Host`] if the listener cannot be attached.
pub fn on_click(
    document: &Document,
    target_id: &str,
    mut handler: impl FnMut() -> Result<(), ToggleError> + 'static,
) -> Result<ClickListener, ToggleError> {
    let target = document.get_element_by_id(target_id).ok_or_else(|| ToggleError::not_found(target_id))?;
    let id = target_id.to_owned();
    let callback = Closure::<dyn FnMut(Event)>::new(move |_event: Event| {
        if let Err(err) = handler() {
            log::warn!("click on #{id} failed: {err}");
        }
    });
    target
        .add_event_listener_with_callback("click", callback.as_ref().unchecked_ref())
        .map_err(host_error)?;
    Ok(ClickListener { target, callback })
}

fn install_logging() {
    console_error_panic_hook::set_once();
    if console_log::init_with_level(log::Level::Debug).is_err() {
        log::debug!("console logger already installed");
    }
}

/// Bind the read-more control and attach its click handler.
///
/// `config_json` overrides ids and labels; `None` uses the page defaults.
///
/// # Errors
///
/// Throws if the config is malformed or either element is missing.
#[wasm_bindgen]
pub fn init_read_more(config_json: Option<String>) -> Result<(), JsValue> {
    install_logging();
    let config = match config_json {
        Some(json) => ReadMoreConfig::from_json(&json)?,
        None => ReadMoreConfig::default(),
    };
    let mut dom = WebDom::from_window()?;
    let read_more = ReadMore::bind(&dom, config)?;
    let state = read_more.sync_label(&mut dom)?;
    log::info!("read-more bound to #{} ({state:?})", read_more.container_id());

    let document = dom.document().clone();
    let button_id = read_more.button_id().to_owned();
    let listener = on_click(&document, &button_id, move || read_more.toggle_expanded(&mut dom).map(|_| ()))?;
    listener.forget();
    Ok(())
}

/// Show or hide the answer with `id`.
///
/// # Errors
///
/// Throws if no element has `id`.
#[wasm_bindgen]
pub fn toggle_answer(id: &str) -> Result<(), JsValue> {
    let mut dom = WebDom::from_window()?;
    match toggle_answer_visibility(&mut dom, id) {
        Ok(_) => Ok(()),
        Err(err) => {
            log::warn!("toggle_answer: {err}");
            Err(err.into())
        }
    }
}
