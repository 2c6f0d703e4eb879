//! DOM event surface forwarded to pages

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Every DOM event type the shell listens for and forwards to the
/// current page's `on_event`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum EventKind {
    Click,
    Keydown,
    Keyup,
    Mousemove,
    Mouseover,
    Mouseout,
    Dblclick,
    Contextmenu,
    Resize,
    Scroll,
    Focus,
    Blur,
}

impl EventKind {
    /// All listened event kinds, in the order the shell attaches them.
    pub const ALL: [EventKind; 12] = [
        EventKind::Click,
        EventKind::Keydown,
        EventKind::Keyup,
        EventKind::Mousemove,
        EventKind::Mouseover,
        EventKind::Mouseout,
        EventKind::Dblclick,
        EventKind::Contextmenu,
        EventKind::Resize,
        EventKind::Scroll,
        EventKind::Focus,
        EventKind::Blur,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            EventKind::Click => "click",
            EventKind::Keydown => "keydown",
            EventKind::Keyup => "keyup",
            EventKind::Mousemove => "mousemove",
            EventKind::Mouseover => "mouseover",
            EventKind::Mouseout => "mouseout",
            EventKind::Dblclick => "dblclick",
            EventKind::Contextmenu => "contextmenu",
            EventKind::Resize => "resize",
            EventKind::Scroll => "scroll",
            EventKind::Focus => "focus",
            EventKind::Blur => "blur",
        }
    }
}

impl std::fmt::Display for EventKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for EventKind {
    type Err = crate::error::Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        EventKind::ALL
            .iter()
            .copied()
            .find(|kind| kind.as_str() == s)
            .ok_or_else(|| crate::error::Error::config(format!("unknown event kind: {s}")))
    }
}

/// A single dispatched DOM event.
///
/// `target` names the id of the element the event occurred on, when there
/// is one (resize/scroll style events have no element target). `data` is
/// an arbitrary JSON payload forwarded verbatim to the page's `on_event`.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct DomEvent {
    pub kind: EventKind,
    #[serde(default)]
    pub target: Option<String>,
    #[serde(default)]
    pub data: Value,
}

impl DomEvent {
    pub fn new(kind: EventKind) -> Self {
        Self {
            kind,
            target: None,
            data: Value::Null,
        }
    }

    pub fn with_target(kind: EventKind, target: impl Into<String>) -> Self {
        Self {
            kind,
            target: Some(target.into()),
            data: Value::Null,
        }
    }

    pub fn with_data(mut self, data: Value) -> Self {
        self.data = data;
        self
    }
}
