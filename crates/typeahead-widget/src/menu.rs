#![forbid(unsafe_code)]

//! The suggestion menu view model.
//!
//! The menu is headless: it describes what the host should render (rows,
//! highlight, above/below placement) without drawing anything. All candidates
//! are rendered as rows; the host scrolls overflow past `max_visible`, so
//! keyboard navigation cycles over every row.

use typeahead_core::Entry;
use unicode_width::UnicodeWidthStr;

use crate::aria;

/// Where the menu opens relative to the input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Placement {
    /// Below the input (the default).
    #[default]
    Below,
    /// Above the input, when the space below cannot fit the menu.
    Above,
}

/// Host-supplied layout facts used to place the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ViewportMetrics {
    /// Rows available between the input's bottom edge and the viewport
    /// bottom.
    pub space_below: usize,
    /// Cap on the menu's rendered height in rows; overflow scrolls.
    pub max_visible: usize,
}

impl Default for ViewportMetrics {
    fn default() -> Self {
        Self {
            space_below: 8,
            max_visible: 8,
        }
    }
}

/// One rendered suggestion row.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MenuRow {
    /// The entry's stable source index.
    pub entry_index: usize,
    /// The entry's selectable value.
    pub value: String,
    /// Display label, markup-capable and carried verbatim.
    pub label: String,
    /// Accessible element id (`list-{instance}-item-{index}`).
    pub id: String,
    /// Whether this row is the highlighted one.
    pub highlighted: bool,
}

/// The rendered menu: rows plus placement.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Menu {
    rows: Vec<MenuRow>,
    placement: Placement,
}

impl Menu {
    /// Build the menu for a candidate set.
    ///
    /// Placement is recomputed on every rebuild: the menu opens above the
    /// input exactly when its rendered height exceeds the space below.
    pub(crate) fn rebuild(
        candidates: &[Entry],
        selected: Option<usize>,
        instance: u64,
        metrics: ViewportMetrics,
    ) -> Self {
        let rows: Vec<MenuRow> = candidates
            .iter()
            .map(|entry| MenuRow {
                entry_index: entry.index,
                value: entry.value.clone(),
                label: entry.label.clone(),
                id: aria::item_id(instance, entry.index),
                highlighted: selected == Some(entry.index),
            })
            .collect();
        let height = rows.len().min(metrics.max_visible);
        let placement = if metrics.space_below < height {
            Placement::Above
        } else {
            Placement::Below
        };
        Self { rows, placement }
    }

    /// Move the highlight without rebuilding rows or placement.
    pub(crate) fn set_highlight(&mut self, selected: Option<usize>) {
        for row in &mut self.rows {
            row.highlighted = selected == Some(row.entry_index);
        }
    }

    /// Remove all rows.
    pub(crate) fn clear(&mut self) {
        self.rows.clear();
        self.placement = Placement::Below;
    }

    /// The rendered rows, in candidate order.
    #[must_use]
    pub fn rows(&self) -> &[MenuRow] {
        &self.rows
    }

    /// Number of rendered rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// Whether the menu has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Current placement.
    #[must_use]
    pub fn placement(&self) -> Placement {
        self.placement
    }

    /// Rendered position of the highlighted row, if any.
    #[must_use]
    pub fn highlighted_position(&self) -> Option<usize> {
        self.rows.iter().position(|row| row.highlighted)
    }

    /// Display width (in terminal cells) of the widest label, for hosts
    /// sizing the dropdown.
    #[must_use]
    pub fn required_width(&self) -> usize {
        self.rows
            .iter()
            .map(|row| UnicodeWidthStr::width(row.label.as_str()))
            .max()
            .unwrap_or(0)
    }
}
