//! The page environment every controller is handed at init.
//!
//! Controllers never reach for `window()` themselves; they get a [`Host`] and
//! talk to elements through its [`Node`] handle. The browser build uses
//! [`web::WebPage`], tests use the in-memory page.

use crate::error::DomError;

pub mod web;

/// Handle to a single element on the page.
pub trait Node: Clone + PartialEq + 'static {
    fn attribute(&self, name: &str) -> Option<String>;

    /// First descendant matching `selector`.
    fn query_selector(&self, selector: &str) -> Result<Option<Self>, DomError>;

    fn set_style(&self, property: &str, value: &str) -> Result<(), DomError>;

    fn add_class(&self, class: &str) -> Result<(), DomError>;

    /// Rendered text, as a button label reads.
    fn text(&self) -> String;

    fn set_text(&self, text: &str);

    fn is_disabled(&self) -> bool;

    fn set_disabled(&self, disabled: bool);

    /// Clears the fields of a form element. No-op on anything else.
    fn reset_form(&self);

    fn scroll_into_view(&self, behavior: ScrollBehavior);
}

pub type EventHandler = Box<dyn FnMut(&dyn Event)>;

pub type IntersectionHandler<N> = Box<dyn FnMut(Vec<Intersection<N>>, &dyn Watcher<N>)>;

/// The document and window of one page.
pub trait Host: Clone + 'static {
    type Node: Node;

    fn pathname(&self) -> Result<String, DomError>;

    fn scroll_y(&self) -> Result<f64, DomError>;

    fn query_selector(&self, selector: &str) -> Result<Option<Self::Node>, DomError>;

    /// All matches in document order.
    fn query_selector_all(&self, selector: &str) -> Result<Vec<Self::Node>, DomError>;

    /// Runs `task` once the document is parsed, immediately if it already is.
    fn on_ready(&self, task: Box<dyn FnOnce()>) -> Result<(), DomError>;

    fn on_scroll(&self, handler: Box<dyn FnMut()>) -> Result<(), DomError>;

    fn listen(
        &self,
        target: &Self::Node,
        kind: EventKind,
        handler: EventHandler,
    ) -> Result<(), DomError>;

    fn observe_intersections(
        &self,
        options: &IntersectionOptions,
        targets: &[Self::Node],
        handler: IntersectionHandler<Self::Node>,
    ) -> Result<(), DomError>;

    fn set_timeout(&self, delay_ms: u32, task: Box<dyn FnOnce()>);

    /// Blocking message dialog.
    fn alert(&self, message: &str) -> Result<(), DomError>;
}

pub trait Event {
    fn prevent_default(&self);
}

/// Lets an intersection callback stop watching an element.
pub trait Watcher<N> {
    fn unobserve(&self, target: &N);
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventKind {
    Click,
    Submit,
}

impl EventKind {
    pub fn as_str(self) -> &'static str {
        match self {
            EventKind::Click => "click",
            EventKind::Submit => "submit",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScrollBehavior {
    Auto,
    Smooth,
}

#[derive(Debug, Clone, PartialEq)]
pub struct IntersectionOptions {
    /// Fraction of the target that must be visible, 0.0 to 1.0.
    pub threshold: f64,
    /// CSS margin applied to the viewport, e.g. `0px 0px -50px 0px`.
    pub root_margin: String,
}

#[derive(Debug, Clone)]
pub struct Intersection<N> {
    pub target: N,
    pub is_intersecting: bool,
}
