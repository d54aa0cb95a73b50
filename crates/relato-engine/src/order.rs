use serde::Serialize;

use relato_types::{SectionKey, SectionOrder, SectionSet};

use crate::section::reconcile_order;
use crate::{Error, Result};

pub const HIDDEN_SUFFIX: &str = " (hidden)";
pub const EMPTY_ORDER_MESSAGE: &str = "No sections to reorder.";

/// One draggable row of the order manager
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OrderRow {
    pub key: SectionKey,
    pub label: String,
    pub visible: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum OrderView {
    Empty { message: &'static str },
    Rows { rows: Vec<OrderRow> },
}

/// Rows for the order manager, over the reconciled order.
pub fn order_view(sections: &SectionSet, order: &SectionOrder) -> OrderView {
    let order = reconcile_order(sections, order);
    if order.is_empty() {
        return OrderView::Empty {
            message: EMPTY_ORDER_MESSAGE,
        };
    }

    let rows = order
        .iter()
        .map(|key| {
            let section = sections.get(key.as_str());
            let title = section
                .map(|s| s.title.as_str())
                .filter(|t| !t.trim().is_empty())
                .unwrap_or(key.as_str());
            let visible = section.map(|s| s.visible).unwrap_or(false);
            let label = if visible {
                title.to_string()
            } else {
                format!("{}{}", title, HIDDEN_SUFFIX)
            };
            OrderRow {
                key: key.clone(),
                label,
                visible,
            }
        })
        .collect();

    OrderView::Rows { rows }
}

/// Move the key at `from` to position `to`.
///
/// Returns the complete new sequence, or `None` when `from == to`.
pub fn drag(order: &SectionOrder, from: usize, to: usize) -> Result<Option<SectionOrder>> {
    let len = order.len();
    for index in [from, to] {
        if index >= len {
            return Err(Error::IndexOutOfRange {
                list: "section order",
                index,
                len,
            });
        }
    }
    if from == to {
        return Ok(None);
    }

    let mut keys = order.as_slice().to_vec();
    let moved = keys.remove(from);
    keys.insert(to, moved);
    Ok(Some(SectionOrder::new(keys)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use relato_types::Section;

    fn order(keys: &[&str]) -> SectionOrder {
        SectionOrder::new(keys.iter().map(|k| SectionKey::from(*k)).collect())
    }

    #[test]
    fn test_drag_down_and_up() {
        let base = order(&["a", "b", "c", "d", "e"]);

        let down = drag(&base, 0, 3).unwrap().unwrap();
        assert_eq!(down, order(&["b", "c", "d", "a", "e"]));

        let up = drag(&base, 4, 1).unwrap().unwrap();
        assert_eq!(up, order(&["a", "e", "b", "c", "d"]));
    }

    #[test]
    fn test_drag_to_same_index_emits_nothing() {
        assert_eq!(drag(&order(&["a", "b"]), 1, 1).unwrap(), None);
    }

    #[test]
    fn test_drag_out_of_range_is_rejected() {
        let err = drag(&order(&["a", "b"]), 0, 2).unwrap_err();
        assert_eq!(
            err,
            Error::IndexOutOfRange {
                list: "section order",
                index: 2,
                len: 2
            }
        );
    }

    #[test]
    fn test_hidden_rows_get_suffix() {
        let sections: SectionSet = [
            (SectionKey::from("a"), Section::new("Alpha", true, false)),
            (SectionKey::from("b"), Section::new("Beta", false, true)),
        ]
        .into_iter()
        .collect();

        let OrderView::Rows { rows } = order_view(&sections, &order(&["b", "a"])) else {
            panic!("expected rows");
        };
        let labels: Vec<&str> = rows.iter().map(|r| r.label.as_str()).collect();
        assert_eq!(labels, vec!["Beta (hidden)", "Alpha"]);
    }

    #[test]
    fn test_blank_title_falls_back_to_key() {
        let sections: SectionSet = [(SectionKey::from("extra"), Section::new("  ", true, false))]
            .into_iter()
            .collect();

        let OrderView::Rows { rows } = order_view(&sections, &SectionOrder::default()) else {
            panic!("expected rows");
        };
        assert_eq!(rows[0].label, "extra");
    }

    #[test]
    fn test_empty_order_renders_empty_state() {
        assert_eq!(
            order_view(&SectionSet::new(), &SectionOrder::default()),
            OrderView::Empty {
                message: EMPTY_ORDER_MESSAGE
            }
        );
    }
}
