//! Postman collection schema views
//!
//! Collections are inspected as borrowed views over `serde_json::Value` so that
//! present-but-falsy fields (`""`, `null`, `0`, `false`) keep the meaning they
//! have in the exported format instead of failing typed deserialization.

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Key of the optional envelope the Postman API wraps collections in
pub const ENVELOPE_KEY: &str = "collection";

/// Key of the ordered children of a collection or folder
pub const ITEMS_KEY: &str = "item";

/// Rendering of an absent value when interpolated into a message
pub const UNDEFINED: &str = "undefined";

/// Truthiness as defined by the collection format's reference tooling:
/// `null`, `false`, `0` and `""` are falsy, everything else is truthy.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().is_some_and(|f| f != 0.0 && !f.is_nan()),
        Value::String(s) => !s.is_empty(),
        Value::Array(_) | Value::Object(_) => true,
    }
}

/// Render a value the way string interpolation in the reference tooling does.
pub fn display_value(value: Option<&Value>) -> String {
    match value {
        None => UNDEFINED.to_string(),
        Some(value) => render(value),
    }
}

fn render(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.as_f64().map_or_else(|| n.to_string(), number_to_string),
        Value::String(s) => s.clone(),
        Value::Array(values) => values
            .iter()
            .map(|v| match v {
                Value::Null => String::new(),
                other => render(other),
            })
            .collect::<Vec<_>>()
            .join(","),
        Value::Object(_) => "[object Object]".to_string(),
    }
}

/// Number-to-string conversion of the reference tooling: shortest round-trip
/// digits, exponent form outside `[1e-6, 1e21)`, and no negative zero.
fn number_to_string(f: f64) -> String {
    if f == 0.0 {
        return "0".to_string();
    }
    let magnitude = f.abs();
    if (1e-6..1e21).contains(&magnitude) {
        return f.to_string();
    }
    let exp = format!("{:e}", f);
    match exp.split_once('e') {
        Some((mantissa, power)) if !power.starts_with('-') => format!("{}e+{}", mantissa, power),
        _ => exp,
    }
}

/// A collection document or an already-unwrapped collection body.
#[derive(Debug, Clone, Copy)]
pub struct CollectionNode<'a> {
    value: &'a Value,
    enveloped: bool,
}

impl<'a> CollectionNode<'a> {
    pub fn new(value: &'a Value) -> Self {
        Self {
            value,
            enveloped: false,
        }
    }

    /// Strip the `collection` envelope if it is present and truthy.
    ///
    /// Only one level is removed; a doubly wrapped document stays wrapped.
    pub fn unwrap_envelope(self) -> Self {
        if self.enveloped {
            return self;
        }
        match self.value.get(ENVELOPE_KEY) {
            Some(inner) if is_truthy(inner) => Self {
                value: inner,
                enveloped: true,
            },
            _ => self,
        }
    }

    /// JSON path segments leading to this node
    pub fn location(&self) -> Vec<String> {
        if self.enveloped {
            vec![ENVELOPE_KEY.to_string()]
        } else {
            Vec::new()
        }
    }

    /// Display form of [`Self::location`], rooted at `$`
    pub fn json_path(&self) -> String {
        if self.enveloped {
            format!("$.{}", ENVELOPE_KEY)
        } else {
            "$".to_string()
        }
    }

    /// Immediate children, or `None` when `item` is missing or not an array
    pub fn items(&self) -> Option<impl Iterator<Item = ItemView<'a>> + 'a> {
        let items = self.value.get(ITEMS_KEY)?.as_array()?;
        Some(items.iter().map(ItemView::new))
    }

    pub fn info(&self) -> Option<CollectionInfo> {
        self.value
            .get("info")
            .and_then(|info| serde_json::from_value(info.clone()).ok())
    }
}

/// One entry of an `item` array: either a folder or a request.
#[derive(Debug, Clone, Copy)]
pub struct ItemView<'a> {
    value: &'a Value,
}

impl<'a> ItemView<'a> {
    pub fn new(value: &'a Value) -> Self {
        Self { value }
    }

    fn field(&self, key: &str) -> Option<&'a Value> {
        self.value.as_object().and_then(|obj| obj.get(key))
    }

    /// Raw `name` field, if present
    pub fn name(&self) -> Option<&'a Value> {
        self.field("name")
    }

    /// Display form of a truthy `name`, for locating the item in reports
    pub fn label(&self) -> Option<String> {
        self.name()
            .filter(|name| is_truthy(name))
            .map(render)
    }

    /// `name` as it appears in interpolated messages
    pub fn display_name(&self) -> String {
        display_value(self.name())
    }

    pub fn has_request(&self) -> bool {
        self.field("request").is_some_and(is_truthy)
    }

    pub fn has_description(&self) -> bool {
        self.field("description").is_some_and(is_truthy)
    }

    /// A folder is any item that is not a concrete request
    pub fn is_folder(&self) -> bool {
        !self.has_request()
    }
}

/// `info` block of a collection export
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CollectionInfo {
    #[serde(default)]
    pub name: Option<String>,

    #[serde(default, rename = "_postman_id")]
    pub postman_id: Option<String>,

    /// Schema URL, e.g. `https://schema.getpostman.com/json/collection/v2.1.0/collection.json`
    #[serde(default)]
    pub schema: Option<String>,
}
