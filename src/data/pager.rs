//! Fixed-size pages of raw trips

use crate::data::model::{Trip, View};

/// Rows per page
pub const PAGE_SIZE: usize = 5;

/// One page of trips
#[derive(Debug, Clone, PartialEq)]
pub struct Page<'a> {
    /// View position of the first row
    pub start: usize,
    /// Rows in the whole view
    pub total: usize,
    pub rows: Vec<&'a Trip>,
}

impl Page<'_> {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }
}

/// Pages over a view. The only state is the cursor the caller holds.
#[derive(Debug, Clone, Copy)]
pub struct Pager<'v, 'a> {
    view: &'v View<'a>,
}

impl<'v, 'a> Pager<'v, 'a> {
    pub fn new(view: &'v View<'a>) -> Self {
        Pager { view }
    }

    /// Up to [`PAGE_SIZE`] trips starting at `cursor`, and the cursor for
    /// the following page. Past the end the page is empty.
    pub fn next_page(&self, cursor: usize) -> (Page<'a>, usize) {
        let end = cursor.saturating_add(PAGE_SIZE);
        let rows = self.view.range(cursor, end).collect();
        (
            Page {
                start: cursor,
                total: self.view.len(),
                rows,
            },
            end,
        )
    }

    /// Whether a page starting at `cursor` would have any rows
    pub fn has_more(&self, cursor: usize) -> bool {
        cursor < self.view.len()
    }
}
