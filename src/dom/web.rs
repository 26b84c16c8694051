use gloo_timers::callback::Timeout;
use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{
    CssStyleDeclaration, Document, Element, HtmlButtonElement, HtmlElement, HtmlFormElement,
    IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    ScrollIntoViewOptions, SvgElement, Window,
};

use super::{
    Event, EventHandler, EventKind, Host, Intersection, IntersectionHandler, IntersectionOptions,
    Node, ScrollBehavior, Watcher,
};
use crate::error::DomError;

impl From<JsValue> for DomError {
    fn from(value: JsValue) -> Self {
        DomError::Js(value.as_string().unwrap_or_else(|| format!("{:?}", value)))
    }
}

impl Event for web_sys::Event {
    fn prevent_default(&self) {
        web_sys::Event::prevent_default(self);
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct WebNode(Element);

impl WebNode {
    /// Inline style of an HTML or SVG element.
    fn inline_style(&self) -> Result<CssStyleDeclaration, DomError> {
        if let Some(element) = self.0.dyn_ref::<HtmlElement>() {
            return Ok(element.style());
        }
        if let Some(element) = self.0.dyn_ref::<SvgElement>() {
            return Ok(element.style());
        }
        Err(DomError::Js(format!(
            "<{}> has no inline style",
            self.0.tag_name().to_lowercase()
        )))
    }
}

impl Node for WebNode {
    fn attribute(&self, name: &str) -> Option<String> {
        self.0.get_attribute(name)
    }

    fn query_selector(&self, selector: &str) -> Result<Option<Self>, DomError> {
        let found = self
            .0
            .query_selector(selector)
            .map_err(|_| DomError::InvalidSelector(selector.to_string()))?;
        Ok(found.map(WebNode))
    }

    fn set_style(&self, property: &str, value: &str) -> Result<(), DomError> {
        self.inline_style()?.set_property(property, value)?;
        Ok(())
    }

    fn add_class(&self, class: &str) -> Result<(), DomError> {
        self.0.class_list().add_1(class)?;
        Ok(())
    }

    fn text(&self) -> String {
        match self.0.dyn_ref::<HtmlElement>() {
            Some(element) => element.inner_text(),
            None => self.0.text_content().unwrap_or_default(),
        }
    }

    fn set_text(&self, text: &str) {
        match self.0.dyn_ref::<HtmlElement>() {
            Some(element) => element.set_inner_text(text),
            None => self.0.set_text_content(Some(text)),
        }
    }

    fn is_disabled(&self) -> bool {
        match self.0.dyn_ref::<HtmlButtonElement>() {
            Some(button) => button.disabled(),
            None => self.0.has_attribute("disabled"),
        }
    }

    fn set_disabled(&self, disabled: bool) {
        if let Some(button) = self.0.dyn_ref::<HtmlButtonElement>() {
            button.set_disabled(disabled);
            return;
        }
        let toggled = if disabled {
            self.0.set_attribute("disabled", "")
        } else {
            self.0.remove_attribute("disabled")
        };
        if let Err(err) = toggled {
            warn!("Could not toggle disabled: {}", DomError::from(err));
        }
    }

    fn reset_form(&self) {
        if let Some(form) = self.0.dyn_ref::<HtmlFormElement>() {
            form.reset();
        }
    }

    fn scroll_into_view(&self, behavior: ScrollBehavior) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(match behavior {
            ScrollBehavior::Auto => web_sys::ScrollBehavior::Auto,
            ScrollBehavior::Smooth => web_sys::ScrollBehavior::Smooth,
        });
        self.0.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

struct ObserverHandle(IntersectionObserver);

impl Watcher<WebNode> for ObserverHandle {
    fn unobserve(&self, target: &WebNode) {
        self.0.unobserve(&target.0);
    }
}

/// The live browser page. Listeners registered through it stay attached for
/// the lifetime of the page.
#[derive(Debug, Clone)]
pub struct WebPage {
    window: Window,
    document: Document,
}

impl WebPage {
    pub fn new() -> Result<Self, DomError> {
        let window = web_sys::window().ok_or(DomError::NoWindow)?;
        let document = window.document().ok_or(DomError::NoDocument)?;
        Ok(Self { window, document })
    }
}

impl Host for WebPage {
    type Node = WebNode;

    fn pathname(&self) -> Result<String, DomError> {
        Ok(self.window.location().pathname()?)
    }

    fn scroll_y(&self) -> Result<f64, DomError> {
        Ok(self.window.scroll_y()?)
    }

    fn query_selector(&self, selector: &str) -> Result<Option<WebNode>, DomError> {
        let found = self
            .document
            .query_selector(selector)
            .map_err(|_| DomError::InvalidSelector(selector.to_string()))?;
        Ok(found.map(WebNode))
    }

    fn query_selector_all(&self, selector: &str) -> Result<Vec<WebNode>, DomError> {
        let list = self
            .document
            .query_selector_all(selector)
            .map_err(|_| DomError::InvalidSelector(selector.to_string()))?;
        Ok((0..list.length())
            .filter_map(|index| list.get(index))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .map(WebNode)
            .collect())
    }

    fn on_ready(&self, task: Box<dyn FnOnce()>) -> Result<(), DomError> {
        if self.document.ready_state() != "loading" {
            task();
            return Ok(());
        }
        let callback = Closure::once_into_js(move || task());
        self.document
            .add_event_listener_with_callback("DOMContentLoaded", callback.unchecked_ref())?;
        Ok(())
    }

    fn on_scroll(&self, handler: Box<dyn FnMut()>) -> Result<(), DomError> {
        let scroll_callback = Closure::wrap(handler);
        self.window
            .add_event_listener_with_callback("scroll", scroll_callback.as_ref().unchecked_ref())?;
        scroll_callback.forget();
        Ok(())
    }

    fn listen(
        &self,
        target: &WebNode,
        kind: EventKind,
        handler: EventHandler,
    ) -> Result<(), DomError> {
        let mut handler = handler;
        let callback = Closure::wrap(Box::new(move |event: web_sys::Event| {
            handler(&event);
        }) as Box<dyn FnMut(web_sys::Event)>);
        target
            .0
            .add_event_listener_with_callback(kind.as_str(), callback.as_ref().unchecked_ref())?;
        callback.forget();
        Ok(())
    }

    fn observe_intersections(
        &self,
        options: &IntersectionOptions,
        targets: &[WebNode],
        handler: IntersectionHandler<WebNode>,
    ) -> Result<(), DomError> {
        let mut handler = handler;
        let callback = Closure::wrap(Box::new(move |entries: Array, observer: IntersectionObserver| {
            let batch = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .map(|entry| Intersection {
                    target: WebNode(entry.target()),
                    is_intersecting: entry.is_intersecting(),
                })
                .collect();
            handler(batch, &ObserverHandle(observer));
        }) as Box<dyn FnMut(Array, IntersectionObserver)>);

        let init = IntersectionObserverInit::new();
        init.set_threshold(&JsValue::from_f64(options.threshold));
        init.set_root_margin(&options.root_margin);
        let observer =
            IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        for target in targets {
            observer.observe(&target.0);
        }
        callback.forget();
        Ok(())
    }

    fn set_timeout(&self, delay_ms: u32, task: Box<dyn FnOnce()>) {
        let timeout = Timeout::new(delay_ms, move || task());
        timeout.forget();
    }

    fn alert(&self, message: &str) -> Result<(), DomError> {
        self.window.alert_with_message(message)?;
        Ok(())
    }
}
