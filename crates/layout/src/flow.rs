//! Vertical flow of blocks through a column, with automatic page breaks.

use crate::block::{Block, Row};
use crate::page::PageSequence;

/// A vertical strip of the page that blocks flow into.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Column {
    pub x: f32,
    pub width: f32,
    /// Top edge on the first page.
    pub top: f32,
    pub bottom: f32,
    /// Top edge on every following page; defaults to `top`.
    pub continuation_top: Option<f32>,
}

impl Column {
    pub fn new(x: f32, width: f32, top: f32, bottom: f32) -> Self {
        Self { x, width, top, bottom, continuation_top: None }
    }

    pub fn with_continuation_top(mut self, top: f32) -> Self {
        self.continuation_top = Some(top);
        self
    }

    fn top_on(&self, page: usize) -> f32 {
        match (page, self.continuation_top) {
            (0, _) | (_, None) => self.top,
            (_, Some(top)) => top,
        }
    }
}

/// Places rows top to bottom in a [`Column`], moving to the next page of a
/// [`PageSequence`] when a row (or a group of rows that must stay together)
/// no longer fits.
#[derive(Debug, Clone)]
pub struct ColumnFlow {
    column: Column,
    page: usize,
    cursor: f32,
}

impl ColumnFlow {
    pub fn new(column: Column) -> Self {
        Self { column, page: 0, cursor: column.top }
    }

    pub fn column(&self) -> &Column {
        &self.column
    }

    /// Current vertical position on the current page.
    pub fn cursor(&self) -> f32 {
        self.cursor
    }

    pub fn page_index(&self) -> usize {
        self.page
    }

    pub fn remaining(&self) -> f32 {
        self.column.bottom - self.cursor
    }

    pub fn at_page_top(&self) -> bool {
        self.cursor <= self.column.top_on(self.page) + 0.01
    }

    pub fn advance(&mut self, height: f32) {
        self.cursor += height;
    }

    pub fn break_page(&mut self) {
        self.page += 1;
        self.cursor = self.column.top_on(self.page);
        log::trace!("column at x={} continues on page {}", self.column.x, self.page + 1);
    }

    /// Breaks the page unless `height` still fits or the cursor already sits at a page top.
    pub fn ensure(&mut self, height: f32) {
        if height > self.remaining() && !self.at_page_top() {
            self.break_page();
        }
    }

    pub fn push(&mut self, pages: &mut PageSequence, block: &Block) {
        let rows = block.rows(self.column.width);
        self.place(pages, rows);
    }

    /// Pushes blocks as one stream, so keep-with-next holds across block boundaries.
    pub fn push_all(&mut self, pages: &mut PageSequence, blocks: &[Block]) {
        let rows: Vec<Row> = blocks.iter().flat_map(|b| b.rows(self.column.width)).collect();
        self.place(pages, rows);
    }

    fn place(&mut self, pages: &mut PageSequence, rows: Vec<Row>) {
        let heights: Vec<(f32, bool)> = rows.iter().map(|r| (r.height, r.keep_with_next)).collect();

        for (i, row) in rows.into_iter().enumerate() {
            if row.discardable && self.at_page_top() {
                continue;
            }

            let mut needed = row.height;
            let mut j = i;
            while heights[j].1 && j + 1 < heights.len() {
                j += 1;
                needed += heights[j].0;
            }
            let capacity = self.column.bottom - self.column.top_on(self.page + 1);
            if needed > capacity {
                needed = row.height;
            }

            if needed > self.remaining() && !self.at_page_top() {
                self.break_page();
                if row.discardable {
                    continue;
                }
            }

            let page = pages.page_mut(self.page);
            for mut element in row.elements {
                element.x += self.column.x;
                element.y += self.cursor;
                page.push(element);
            }
            self.cursor += row.height;
        }
    }
}
