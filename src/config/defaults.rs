//! Default value functions for serde deserialization.

pub fn radius() -> f64 {
    0.5
}

pub fn sector_count() -> usize {
    16
}

pub fn peak_weight() -> f64 {
    5.0
}

pub fn spread_weight() -> f64 {
    1.0
}

pub fn min_neighbors() -> usize {
    7
}
