//! # Lazy Attribute Views
//!
//! A [`FrozenView`] wraps one mapping of a loaded document and answers
//! attribute-style reads on it. Nested mappings are not wrapped when the view
//! is built; a child becomes a view only when its attribute is read, and every
//! read wraps it again (nothing is cached).
//!
//! ## Ownership
//!
//! The view owns its key table but borrows the values from the document
//! (`&'doc Value`). This is the shallow copy: renaming a key never touches the
//! document, and nested values stay shared with the document until they are
//! wrapped themselves. The borrow also keeps the document frozen for as long
//! as any view of it is alive.
//!
//! ## Resolution Order
//!
//! [`FrozenView::get`] resolves a name in two steps:
//!
//! 1. Operations of the backing mapping ([`MappingMethod`]): `keys`, `values`,
//!    `items`, `len`, `get`, `contains`, `copy`. The table is fixed, so
//!    checking it never goes back through `get`.
//! 2. Keys of the backing mapping, wrapped with [`wrap`].
//!
//! Anything else is [`DotviewError::AttributeNotFound`].
//!
//! ## Reserved Keys
//!
//! Keys that are Rust keywords or that match a mapping operation are stored
//! with a trailing `_` (`type` becomes `type_`, `keys` becomes `keys_`). If
//! the document already has a literal key with that name, more underscores are
//! added until the name is free.
//!
//! ```
//! use dotview::view::{wrap, Attr};
//!
//! let doc = serde_json::json!({"type": "A", "keys": [1, 2], "name": "x"});
//! let root = wrap(&doc);
//! let view = root.as_view().unwrap();
//!
//! assert_eq!(view.field("type_").unwrap().to_value(), "A");
//! assert_eq!(view.field("keys_").unwrap().to_value(), serde_json::json!([1, 2]));
//! assert!(matches!(view.get("keys").unwrap(), Attr::Method(_)));
//! ```

use crate::error::{DotviewError, Result};
use serde_json::{Map, Value};
use std::collections::HashMap;

pub const RESERVED_SUFFIX: char = '_';

/// Strict, reserved and weak keywords.
const KEYWORDS: &[&str] = &[
    "as", "async", "await", "break", "const", "continue", "crate", "dyn", "else", "enum",
    "extern", "false", "fn", "for", "if", "impl", "in", "let", "loop", "match", "mod", "move",
    "mut", "pub", "ref", "return", "self", "Self", "static", "struct", "super", "trait", "true",
    "type", "unsafe", "use", "where", "while", "abstract", "become", "box", "do", "final", "gen",
    "macro", "override", "priv", "try", "typeof", "unsized", "virtual", "yield", "macro_rules",
    "raw", "safe", "union",
];

/// Whether a document key has to be renamed before it can be read as an attribute.
pub fn is_reserved(name: &str) -> bool {
    KEYWORDS.contains(&name) || MappingMethod::from_name(name).is_some()
}

/// Operations the backing mapping answers to on its own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MappingMethod {
    Keys,
    Values,
    Items,
    Len,
    Get,
    Contains,
    Copy,
}

impl MappingMethod {
    pub const ALL: [MappingMethod; 7] = [
        MappingMethod::Keys,
        MappingMethod::Values,
        MappingMethod::Items,
        MappingMethod::Len,
        MappingMethod::Get,
        MappingMethod::Contains,
        MappingMethod::Copy,
    ];

    pub fn name(self) -> &'static str {
        match self {
            MappingMethod::Keys => "keys",
            MappingMethod::Values => "values",
            MappingMethod::Items => "items",
            MappingMethod::Len => "len",
            MappingMethod::Get => "get",
            MappingMethod::Contains => "contains",
            MappingMethod::Copy => "copy",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|m| m.name() == name)
    }

    /// Accepted argument counts, inclusive.
    fn arity(self) -> (usize, usize) {
        match self {
            MappingMethod::Get => (1, 2),
            MappingMethod::Contains => (1, 1),
            _ => (0, 0),
        }
    }

    fn arity_label(self) -> &'static str {
        match self.arity() {
            (1, 2) => "1 or 2",
            (1, 1) => "1",
            _ => "0",
        }
    }
}

/// A mapping operation bound to the view it was read from.
#[derive(Debug, Clone, Copy)]
pub struct BoundMethod<'v, 'doc> {
    view: &'v FrozenView<'doc>,
    method: MappingMethod,
}

impl<'v, 'doc> BoundMethod<'v, 'doc> {
    pub fn method(&self) -> MappingMethod {
        self.method
    }

    /// Invoke the operation on the backing mapping.
    ///
    /// Results are raw document values, not views. `get` and `contains` take
    /// the key as their first argument; a non-string key is simply not found.
    pub fn call(&self, args: &[Value]) -> Result<Value> {
        let (min, max) = self.method.arity();
        if args.len() < min || args.len() > max {
            return Err(DotviewError::InvalidArguments {
                method: self.method.name(),
                expected: self.method.arity_label(),
                got: args.len(),
            });
        }

        let view = self.view;
        let value = match self.method {
            MappingMethod::Keys => view.keys().into_iter().map(Value::from).collect(),
            MappingMethod::Values => view.entries.iter().map(|(_, v)| (*v).clone()).collect(),
            MappingMethod::Items => view
                .entries
                .iter()
                .map(|(k, v)| Value::Array(vec![Value::String(k.clone()), (*v).clone()]))
                .collect(),
            MappingMethod::Len => Value::from(view.len()),
            MappingMethod::Get => match args[0].as_str().and_then(|k| view.raw(k)) {
                Some(found) => found.clone(),
                None => args.get(1).cloned().unwrap_or(Value::Null),
            },
            MappingMethod::Contains => {
                Value::Bool(args[0].as_str().is_some_and(|k| view.contains_key(k)))
            }
            MappingMethod::Copy => view.to_value(),
        };
        Ok(value)
    }
}

/// Result of an attribute read on a [`FrozenView`].
#[derive(Debug, Clone)]
pub enum Attr<'v, 'doc> {
    Method(BoundMethod<'v, 'doc>),
    Value(Wrapped<'doc>),
}

impl<'v, 'doc> Attr<'v, 'doc> {
    pub fn into_value(self) -> Option<Wrapped<'doc>> {
        match self {
            Attr::Value(w) => Some(w),
            Attr::Method(_) => None,
        }
    }

    pub fn as_method(&self) -> Option<&BoundMethod<'v, 'doc>> {
        match self {
            Attr::Method(m) => Some(m),
            Attr::Value(_) => None,
        }
    }
}

/// Read-only view over one mapping of a document.
#[derive(Debug, Clone)]
pub struct FrozenView<'doc> {
    entries: Vec<(String, &'doc Value)>,
    index: HashMap<String, usize>,
}

impl<'doc> FrozenView<'doc> {
    pub fn new(mapping: &'doc Map<String, Value>) -> Self {
        let mut entries = Vec::with_capacity(mapping.len());
        let mut index = HashMap::with_capacity(mapping.len());

        for (key, value) in mapping {
            let name = if is_reserved(key) {
                disambiguate(key, mapping)
            } else {
                key.clone()
            };
            index.insert(name.clone(), entries.len());
            entries.push((name, value));
        }

        tracing::trace!(keys = entries.len(), "built view");
        Self { entries, index }
    }

    /// Read an attribute: a mapping operation first, then a key.
    pub fn get<'v>(&'v self, name: &str) -> Result<Attr<'v, 'doc>> {
        if let Some(method) = MappingMethod::from_name(name) {
            return Ok(Attr::Method(BoundMethod { view: self, method }));
        }
        self.field(name).map(Attr::Value)
    }

    /// Read a key, skipping the mapping operations. The value is wrapped anew
    /// on every call.
    pub fn field(&self, name: &str) -> Result<Wrapped<'doc>> {
        self.raw(name)
            .map(wrap)
            .ok_or_else(|| DotviewError::attribute_not_found(name))
    }

    /// The unwrapped document value stored under `name`.
    pub fn raw(&self, name: &str) -> Option<&'doc Value> {
        self.index.get(name).map(|&i| self.entries[i].1)
    }

    pub fn contains_key(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Keys in document order, after renaming.
    pub fn keys(&self) -> Vec<&str> {
        self.entries.iter().map(|(k, _)| k.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn to_value(&self) -> Value {
        Value::Object(
            self.entries
                .iter()
                .map(|(k, v)| (k.clone(), (*v).clone()))
                .collect(),
        )
    }
}

fn disambiguate(key: &str, mapping: &Map<String, Value>) -> String {
    let mut name = format!("{}{}", key, RESERVED_SUFFIX);
    while mapping.contains_key(&name) {
        name.push(RESERVED_SUFFIX);
    }
    name
}

/// What [`wrap`] turns a document value into.
#[derive(Debug, Clone)]
pub enum Wrapped<'doc> {
    View(FrozenView<'doc>),
    Seq(Vec<Wrapped<'doc>>),
    Raw(&'doc Value),
}

/// Wrap a document value.
///
/// Mappings become views (their children stay unwrapped). Sequences are
/// wrapped element by element right away, so a mapping inside a sequence is
/// already a view. Scalars pass through.
pub fn wrap(value: &Value) -> Wrapped<'_> {
    match value {
        Value::Object(map) => Wrapped::View(FrozenView::new(map)),
        Value::Array(items) => Wrapped::Seq(items.iter().map(wrap).collect()),
        scalar => Wrapped::Raw(scalar),
    }
}

impl<'doc> Wrapped<'doc> {
    pub fn as_view(&self) -> Option<&FrozenView<'doc>> {
        match self {
            Wrapped::View(v) => Some(v),
            _ => None,
        }
    }

    pub fn as_seq(&self) -> Option<&[Wrapped<'doc>]> {
        match self {
            Wrapped::Seq(items) => Some(items.as_slice()),
            _ => None,
        }
    }

    pub fn as_raw(&self) -> Option<&'doc Value> {
        match self {
            Wrapped::Raw(v) => Some(*v),
            _ => None,
        }
    }

    /// Follow a dot-separated path such as `Schedule.speakers.0.name`.
    ///
    /// Segments read keys on views and decimal indexes on sequences. Empty
    /// segments are skipped, so `""` yields the value itself.
    ///
    /// Keys that contain a `.`, and the empty key, cannot be reached this way;
    /// read them with [`FrozenView::field`].
    pub fn path(&self, path: &str) -> Result<Wrapped<'doc>> {
        let mut current = self.clone();
        for segment in path.split('.').filter(|s| !s.is_empty()) {
            current = current.step(segment)?;
        }
        Ok(current)
    }

    fn step(&self, segment: &str) -> Result<Wrapped<'doc>> {
        match self {
            Wrapped::View(view) => view.field(segment),
            Wrapped::Seq(items) => segment
                .parse::<usize>()
                .ok()
                .and_then(|i| items.get(i))
                .cloned()
                .ok_or_else(|| DotviewError::attribute_not_found(segment)),
            Wrapped::Raw(_) => Err(DotviewError::attribute_not_found(segment)),
        }
    }

    pub fn to_value(&self) -> Value {
        match self {
            Wrapped::View(view) => view.to_value(),
            Wrapped::Seq(items) => Value::Array(items.iter().map(Wrapped::to_value).collect()),
            Wrapped::Raw(v) => (*v).clone(),
        }
    }
}
