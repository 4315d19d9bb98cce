//! The representation of [`Widget`](super::Widget). Nothing outside the `widget` module can
//! name this type.

use std::hash::{Hash, Hasher};

#[derive(Debug, Clone, Default)]
pub(super) struct WidgetImpl {
    name: String,
    data: Vec<f64>,
    info: i32,
}

impl WidgetImpl {
    pub(super) fn with_info(info: i32) -> Self {
        Self {
            info,
            ..Self::default()
        }
    }

    pub(super) fn info(&self) -> i32 {
        self.info
    }

    pub(super) fn set_info(&mut self, info: i32) {
        self.info = info;
    }

    pub(super) fn name(&self) -> &str {
        &self.name
    }

    pub(super) fn set_name(&mut self, name: String) {
        self.name = name;
    }

    pub(super) fn push_data(&mut self, value: f64) {
        self.data.push(value);
    }

    pub(super) fn data_len(&self) -> usize {
        self.data.len()
    }
}

// Samples compare by bit pattern, the same way they hash: NaN equals itself, and 0.0 and -0.0
// are different samples.
impl PartialEq for WidgetImpl {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.info == other.info
            && self.data.len() == other.data.len()
            && self
                .data
                .iter()
                .zip(&other.data)
                .all(|(a, b)| a.to_bits() == b.to_bits())
    }
}

impl Eq for WidgetImpl {}

// `f64` is not `Hash`; its bit pattern is.
impl Hash for WidgetImpl {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.data.len().hash(state);
        for value in &self.data {
            value.to_bits().hash(state);
        }
        self.info.hash(state);
    }
}
