use crate::{prelude::*, window::WindowId};

/// Source of fresh window ids.
pub trait IdSequence {
    fn next_id(&mut self) -> Result<WindowId>;
}

/// Continues after the largest id in use, starting from 1.
#[must_use]
pub struct NextAfterMax {
    /// `None` once the id space is used up.
    next: Option<u32>,
}

impl NextAfterMax {
    pub fn new(used: impl IntoIterator<Item = WindowId>) -> Self {
        let next =
            used.into_iter().map(|id| id.0).max().map_or(Some(1), |max| max.checked_add(1));
        Self { next }
    }
}

impl IdSequence for NextAfterMax {
    fn next_id(&mut self) -> Result<WindowId> {
        let id = self.next.context("window ids are exhausted")?;
        self.next = id.checked_add(1);
        Ok(WindowId(id))
    }
}
