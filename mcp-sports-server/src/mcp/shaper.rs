//! Response shaping policies
//!
//! Most tools relay the upstream result untouched. A few declare a policy:
//! cursor pagination emulated over an unpaginated upstream list, or
//! truncation of very large listings when the caller did not narrow them.
//! Either way element order and content are never changed, only sliced.

use serde::Serialize;
use serde_json::{json, Map, Value};

use crate::backend::BackendResult;

/// Page size used when the caller omits `per_page`
pub const DEFAULT_PAGE_SIZE: usize = 25;

/// Largest listing returned when no scoping filter was supplied
pub const DEFAULT_TRUNCATION_CAP: usize = 100;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Shaping {
    #[default]
    None,
    /// Slice `data` at `[cursor, cursor + per_page)`; `cursor` and
    /// `per_page` are consumed here and never forwarded upstream
    CursorPaginate { default_per_page: usize },
    /// Cap `data` at `cap` entries unless `filter` was supplied
    TruncateUnlessFiltered { filter: &'static str, cap: usize },
}

impl Shaping {
    pub fn cursor_paginate() -> Self {
        Shaping::CursorPaginate {
            default_per_page: DEFAULT_PAGE_SIZE,
        }
    }

    pub fn truncate_unless(filter: &'static str) -> Self {
        Shaping::TruncateUnlessFiltered {
            filter,
            cap: DEFAULT_TRUNCATION_CAP,
        }
    }

    /// Pull the shaping inputs out of the arguments before they go upstream
    pub fn prepare(&self, arguments: &mut Map<String, Value>) -> ShapeContext {
        match *self {
            Shaping::None => ShapeContext::default(),
            Shaping::CursorPaginate { default_per_page } => {
                let cursor = arguments.remove("cursor").and_then(|v| as_index(&v));
                let per_page = arguments.remove("per_page").and_then(|v| as_index(&v));
                ShapeContext {
                    cursor: cursor.unwrap_or(0),
                    per_page: per_page.filter(|n| *n > 0).unwrap_or(default_per_page),
                    filtered: false,
                }
            }
            Shaping::TruncateUnlessFiltered { filter, .. } => ShapeContext {
                filtered: arguments.get(filter).map_or(false, |v| !v.is_null()),
                ..ShapeContext::default()
            },
        }
    }

    /// Apply the policy to an upstream result
    pub fn apply(&self, result: BackendResult, context: &ShapeContext) -> ToolOutput {
        match *self {
            Shaping::None => result.into(),
            Shaping::CursorPaginate { .. } => paginate(result, context.cursor, context.per_page),
            Shaping::TruncateUnlessFiltered { filter, cap } => {
                if context.filtered {
                    result.into()
                } else {
                    truncate(result, filter, cap)
                }
            }
        }
    }
}

/// Inputs captured by [`Shaping::prepare`]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ShapeContext {
    pub cursor: usize,
    pub per_page: usize,
    pub filtered: bool,
}

/// Shaped tool result, serialized into the `tools/call` text content
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ToolOutput {
    pub data: Value,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Value>,
    #[serde(rename = "_truncated", skip_serializing_if = "Option::is_none")]
    pub truncated: Option<Truncation>,
}

/// Marker attached when a listing was cut short
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Truncation {
    pub showing: usize,
    pub total: usize,
    pub hint: String,
}

impl From<BackendResult> for ToolOutput {
    fn from(result: BackendResult) -> Self {
        Self {
            data: result.data,
            meta: result.meta,
            truncated: None,
        }
    }
}

fn as_index(value: &Value) -> Option<usize> {
    value
        .as_u64()
        .or_else(|| value.as_f64().filter(|f| *f >= 0.0).map(|f| f as u64))
        .map(|n| n as usize)
}

fn paginate(result: BackendResult, cursor: usize, per_page: usize) -> ToolOutput {
    let items = match result.data {
        Value::Array(items) => items,
        other => {
            return ToolOutput {
                data: other,
                meta: result.meta,
                truncated: None,
            }
        }
    };

    let total = items.len();
    let start = cursor.min(total);
    let end = start.saturating_add(per_page).min(total);
    let has_next_page = end < total;
    let page: Vec<Value> = items.into_iter().skip(start).take(end - start).collect();

    ToolOutput {
        data: Value::Array(page),
        meta: Some(json!({
            "total_count": total,
            "per_page": per_page,
            "cursor": cursor,
            "next_cursor": if has_next_page { json!(end) } else { Value::Null },
            "has_next_page": has_next_page,
        })),
        truncated: None,
    }
}

fn truncate(result: BackendResult, filter: &str, cap: usize) -> ToolOutput {
    match result.data {
        Value::Array(mut items) if items.len() > cap => {
            let total = items.len();
            items.truncate(cap);
            ToolOutput {
                data: Value::Array(items),
                meta: result.meta,
                truncated: Some(Truncation {
                    showing: cap,
                    total,
                    hint: format!(
                        "Showing {} of {} entries. Pass {} to narrow the results.",
                        cap, total, filter
                    ),
                }),
            }
        }
        data => ToolOutput {
            data,
            meta: result.meta,
            truncated: None,
        },
    }
}
