//! Field-accumulating walk over an unwrapped payload

use super::shape::{attribute_message, is_error_like, is_truthy, join_messages, Shape};
use crate::messages::GENERAL_KEY;
use crate::types::ErrorMap;
use serde_json::{Map, Value};
use std::collections::HashSet;

/// Keys whose content replaces the enclosing object, in priority order
pub const CONTAINER_KEYS: &[&str] = &[
    "errors",
    "error",
    "validationErrors",
    "fieldErrors",
    "data",
    "details",
    "issues",
    "problems",
];

/// Walks a value once, writing messages into the borrowed map
///
/// Recursion stops at `max_depth`, and no node is entered twice (tracked by
/// address).
pub struct Walker<'m> {
    map: &'m mut ErrorMap,
    max_depth: usize,
    visited: HashSet<*const Value>,
    inserted: usize,
}

impl<'m> Walker<'m> {
    pub fn new(map: &'m mut ErrorMap, max_depth: usize) -> Self {
        Self {
            map,
            max_depth,
            visited: HashSet::new(),
            inserted: 0,
        }
    }

    pub fn walk(&mut self, data: &Value, prefix: Option<&str>, depth: usize) {
        if depth > self.max_depth {
            tracing::trace!(depth, prefix, "extraction depth limit reached");
            return;
        }
        if !self.visited.insert(data as *const Value) {
            return;
        }

        match Shape::of(data) {
            Shape::Text(text) => self.record(prefix.unwrap_or(GENERAL_KEY), text),
            Shape::Sequence(items) => {
                if let Some(joined) = join_messages(items) {
                    self.record(prefix.unwrap_or(GENERAL_KEY), &joined);
                }
            }
            Shape::Mapping(object) => self.walk_object(object, prefix, depth),
            Shape::Null | Shape::Scalar(_) => {}
        }
    }

    fn walk_object(&mut self, object: &Map<String, Value>, prefix: Option<&str>, depth: usize) {
        for key in CONTAINER_KEYS {
            let Some(container) = object.get(*key).filter(|value| is_truthy(value)) else {
                continue;
            };
            let before = self.inserted;
            self.walk(container, prefix, depth + 1);
            if self.inserted > before {
                return;
            }
        }

        for (key, value) in object {
            if !is_error_like(value) {
                continue;
            }

            let field = match prefix {
                Some(prefix) => format!("{}.{}", prefix, key),
                None => key.clone(),
            };

            match Shape::of(value) {
                Shape::Text(text) => self.record(&field, text),
                Shape::Sequence(items) => {
                    if let Some(joined) = join_messages(items) {
                        self.record(&field, &joined);
                    }
                }
                Shape::Mapping(child) => match attribute_message(child) {
                    Some(message) => self.record(&field, &message),
                    None => self.walk(value, Some(&field), depth + 1),
                },
                Shape::Null | Shape::Scalar(_) => {}
            }
        }
    }

    fn record(&mut self, field: &str, message: &str) {
        if self.map.insert(field, message) {
            self.inserted += 1;
        }
    }
}
