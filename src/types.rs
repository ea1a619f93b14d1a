use serde::Serialize;

use crate::flip::{Flip, FlipSet};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FlipResult {
    pub flip: Flip,
    pub mask: u16,
    pub value: u16,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FlipReport {
    pub value: u16,
    pub flips: Vec<FlipResult>,
}

impl FlipReport {
    /// Every entry is computed from `value` itself; flips never chain.
    pub fn compute(value: u16, set: FlipSet) -> Self {
        let flips = set
            .requested()
            .map(|flip| FlipResult {
                flip,
                mask: flip.mask(),
                value: flip.apply(value),
            })
            .collect();
        FlipReport { value, flips }
    }
}
