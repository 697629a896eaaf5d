//! Content panel: the child container embedded in the drawing surface

use ratatui::layout::Rect;

use crate::elements::Element;
use crate::geometry::bounding_box;

/// Ordered children packed top to bottom
///
/// Coordinates returned by [`slots`](Self::slots) and
/// [`bounding_box`](Self::bounding_box) are content coordinates: the panel's
/// north-west corner is `(0, 0)` regardless of scrolling.
#[derive(Debug, Default)]
pub struct ContentPanel {
    children: Vec<Box<dyn Element>>,
    pady: u16,
    width: u16,
}

impl ContentPanel {
    pub fn new(pady: u16) -> Self {
        Self {
            children: Vec::new(),
            pady,
            width: 0,
        }
    }

    /// Append a child, returning its index
    pub fn push<E: Element + 'static>(&mut self, child: E) -> usize {
        self.children.push(Box::new(child));
        self.children.len() - 1
    }

    /// Insert a child at `index`, shifting later children down.
    ///
    /// An index past the end appends.
    pub fn insert<E: Element + 'static>(&mut self, index: usize, child: E) {
        let index = index.min(self.children.len());
        self.children.insert(index, Box::new(child));
    }

    pub fn remove(&mut self, index: usize) -> Option<Box<dyn Element>> {
        (index < self.children.len()).then(|| self.children.remove(index))
    }

    pub fn clear(&mut self) {
        self.children.clear();
    }

    pub fn len(&self) -> usize {
        self.children.len()
    }

    pub fn is_empty(&self) -> bool {
        self.children.is_empty()
    }

    pub fn child(&self, index: usize) -> Option<&dyn Element> {
        self.children.get(index).map(|child| child.as_ref())
    }

    /// Mutable access to a child; its new height is picked up on the next layout sync
    pub fn child_mut(&mut self, index: usize) -> Option<&mut (dyn Element + 'static)> {
        self.children.get_mut(index).map(|child| child.as_mut())
    }

    pub fn children(&self) -> impl Iterator<Item = &(dyn Element + 'static)> {
        self.children.iter().map(|child| child.as_ref())
    }

    pub fn pady(&self) -> u16 {
        self.pady
    }

    pub fn set_pady(&mut self, pady: u16) {
        self.pady = pady;
    }

    /// Displayed width, forced by the drawing surface
    pub fn width(&self) -> u16 {
        self.width
    }

    pub(crate) fn set_width(&mut self, width: u16) {
        self.width = width;
    }

    /// Area each child occupies, excluding its padding
    pub fn slots(&self) -> Vec<Rect> {
        let mut y: u32 = 0;
        self.children
            .iter()
            .map(|child| {
                y += self.pady as u32;
                let height = child.height(self.width);
                let slot = Rect::new(0, clamp_row(y), self.width, height);
                y += height as u32 + self.pady as u32;
                slot
            })
            .collect()
    }

    /// Natural height: every child plus padding above and below each
    pub fn natural_height(&self) -> u16 {
        self.bounding_box().height
    }

    /// Box enclosing all laid-out content, anchored at the panel origin
    pub fn bounding_box(&self) -> Rect {
        let anchor = Rect::new(0, 0, self.width, 0);
        let padded = self.slots().into_iter().map(|slot| Rect {
            y: slot.y.saturating_sub(self.pady),
            height: slot.height.saturating_add(self.pady.saturating_mul(2)),
            ..slot
        });
        bounding_box(std::iter::once(anchor).chain(padded)).unwrap_or(anchor)
    }

    /// Index of the child whose slot covers content row `row`
    pub fn child_at(&self, row: u16) -> Option<usize> {
        self.slots()
            .iter()
            .position(|slot| row >= slot.y && row < slot.bottom())
    }
}

fn clamp_row(y: u32) -> u16 {
    y.min(u16::MAX as u32) as u16
}
