// Copyright 2026 the Mekko Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The drawing surface returned by chart builders.

extern crate alloc;

use alloc::vec::Vec;

use hashbrown::HashMap;
use kurbo::{Rect, Size};

use crate::mark::{Mark, MarkId};

/// A finished chart: a scene size plus marks in insertion order.
///
/// Mark ids are unique within a figure. Pushing a mark whose id is already present replaces
/// the earlier mark in place, so insertion order stays stable.
#[derive(Clone, Debug, Default)]
pub struct Figure {
    size: Size,
    marks: Vec<Mark>,
    index: HashMap<MarkId, usize>,
}

impl Figure {
    /// Creates an empty figure of the given scene size.
    pub fn new(size: Size) -> Self {
        Self {
            size,
            marks: Vec::new(),
            index: HashMap::new(),
        }
    }

    /// Returns the scene size.
    pub fn size(&self) -> Size {
        self.size
    }

    /// Returns the scene rectangle `(0, 0)..size`.
    pub fn view(&self) -> Rect {
        self.size.to_rect()
    }

    /// Adds a mark, replacing any existing mark with the same id.
    pub fn push(&mut self, mark: Mark) {
        if let Some(&slot) = self.index.get(&mark.id) {
            self.marks[slot] = mark;
        } else {
            self.index.insert(mark.id, self.marks.len());
            self.marks.push(mark);
        }
    }

    /// Returns the mark with the given id.
    pub fn get(&self, id: MarkId) -> Option<&Mark> {
        self.index.get(&id).map(|&slot| &self.marks[slot])
    }

    /// Returns all marks in insertion order.
    pub fn marks(&self) -> &[Mark] {
        &self.marks
    }

    /// Returns the number of marks.
    pub fn len(&self) -> usize {
        self.marks.len()
    }

    /// Returns `true` if the figure has no marks.
    pub fn is_empty(&self) -> bool {
        self.marks.is_empty()
    }

    /// Returns marks sorted by `(z_index, id)`, the order renderers should paint in.
    pub fn marks_in_paint_order(&self) -> Vec<&Mark> {
        let mut out: Vec<&Mark> = self.marks.iter().collect();
        out.sort_by_key(|m| (m.z_index, m.id));
        out
    }

    /// Returns the union of all mark bounds, ignoring text.
    pub fn bounds(&self) -> Option<Rect> {
        self.marks
            .iter()
            .filter_map(Mark::bounds)
            .reduce(|a, b| a.union(b))
    }
}

impl Extend<Mark> for Figure {
    fn extend<T: IntoIterator<Item = Mark>>(&mut self, iter: T) {
        for mark in iter {
            self.push(mark);
        }
    }
}

#[cfg(test)]
mod tests {
    extern crate std;

    use alloc::vec;

    use peniko::color::palette::css;

    use super::*;

    fn square(id: u64, x: f64) -> Mark {
        Mark::rect(
            MarkId::from_raw(id),
            Rect::new(x, 0.0, x + 1.0, 1.0),
            0.0,
            css::BLACK,
        )
    }

    #[test]
    fn duplicate_ids_replace_in_place() {
        let mut fig = Figure::new(Size::new(10.0, 10.0));
        fig.extend(vec![square(1, 0.0), square(2, 2.0), square(1, 5.0)]);

        assert_eq!(fig.len(), 2);
        assert_eq!(fig.marks()[0].id, MarkId::from_raw(1));
        assert_eq!(
            fig.get(MarkId::from_raw(1)).and_then(Mark::bounds),
            Some(Rect::new(5.0, 0.0, 6.0, 1.0))
        );
    }

    #[test]
    fn paint_order_sorts_by_z_then_id() {
        let mut fig = Figure::new(Size::new(10.0, 10.0));
        fig.push(square(3, 0.0).with_z_index(10));
        fig.push(square(2, 0.0).with_z_index(0));
        fig.push(square(1, 0.0).with_z_index(10));

        let ids: alloc::vec::Vec<u64> = fig
            .marks_in_paint_order()
            .iter()
            .map(|m| m.id.0)
            .collect();
        assert_eq!(ids, vec![2, 1, 3]);
    }

    #[test]
    fn bounds_union_marks() {
        let mut fig = Figure::new(Size::new(10.0, 10.0));
        assert!(fig.bounds().is_none());
        assert!(fig.is_empty());
        fig.push(square(1, 0.0));
        fig.push(square(2, 4.0));
        assert_eq!(fig.bounds(), Some(Rect::new(0.0, 0.0, 5.0, 1.0)));
        assert_eq!(fig.view(), Rect::new(0.0, 0.0, 10.0, 10.0));
    }
}
