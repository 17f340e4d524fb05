//! Minimal XML element serializer
//!
//! Every piece of markup the renderer emits goes through [`XmlElement`]. Attributes
//! are written in insertion order so identical inputs always serialize to identical
//! strings, and attributes whose value is `None` are left out entirely.

use std::fmt::Write;

/// A value that can be written into an attribute
#[derive(Debug, Clone, PartialEq)]
pub enum AttrValue {
    Text(String),
    Number(f64),
}

impl From<&str> for AttrValue {
    fn from(value: &str) -> Self {
        AttrValue::Text(value.to_string())
    }
}

impl From<String> for AttrValue {
    fn from(value: String) -> Self {
        AttrValue::Text(value)
    }
}

impl From<&String> for AttrValue {
    fn from(value: &String) -> Self {
        AttrValue::Text(value.clone())
    }
}

impl From<f64> for AttrValue {
    fn from(value: f64) -> Self {
        AttrValue::Number(value)
    }
}

impl From<i32> for AttrValue {
    fn from(value: i32) -> Self {
        AttrValue::Number(value as f64)
    }
}

impl AttrValue {
    fn write_escaped(&self, out: &mut String) {
        match self {
            AttrValue::Text(s) => out.push_str(&escape_xml(s)),
            AttrValue::Number(n) => {
                let _ = write!(out, "{}", n);
            }
        }
    }
}

/// Builder for a single element and its (already serialized) children
#[derive(Debug, Clone)]
pub struct XmlElement {
    name: String,
    attrs: Vec<(String, AttrValue)>,
    children: Option<String>,
}

impl XmlElement {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            attrs: vec![],
            children: None,
        }
    }

    /// Add an attribute
    pub fn attr(mut self, name: &str, value: impl Into<AttrValue>) -> Self {
        self.attrs.push((name.to_string(), value.into()));
        self
    }

    /// Add an attribute only when a value is present
    pub fn opt_attr<V: Into<AttrValue>>(mut self, name: &str, value: Option<V>) -> Self {
        if let Some(value) = value {
            self.attrs.push((name.to_string(), value.into()));
        }
        self
    }

    /// Set the raw markup placed between the open and close tags
    pub fn children(mut self, markup: impl Into<String>) -> Self {
        self.children = Some(markup.into());
        self
    }

    /// Serialize the element. Elements without children are self-closing.
    pub fn build(self) -> String {
        let mut out = String::new();
        out.push('<');
        out.push_str(&self.name);
        for (name, value) in &self.attrs {
            out.push(' ');
            out.push_str(name);
            out.push_str("=\"");
            value.write_escaped(&mut out);
            out.push('"');
        }
        match self.children {
            Some(children) => {
                out.push('>');
                out.push_str(&children);
                out.push_str("</");
                out.push_str(&self.name);
                out.push('>');
            }
            None => out.push_str("/>"),
        }
        out
    }
}

/// Escape special XML characters for a double-quoted attribute or text node
pub fn escape_xml(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}

/// Format a computed coordinate, rounding away floating point noise.
///
/// Values coming straight from the input are written as-is; this is only for
/// numbers produced by trigonometry or scaling.
pub fn fmt_num(value: f64) -> String {
    let rounded = (value * 10_000.0).round() / 10_000.0;
    if rounded == 0.0 {
        // avoid "-0"
        return "0".to_string();
    }
    format!("{}", rounded)
}
