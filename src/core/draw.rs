/// Source of uniform random draws in `[0, 1)`.
pub trait Draw {
    fn draw(&mut self) -> f64;
}

impl Draw for fastrand::Rng {
    fn draw(&mut self) -> f64 {
        self.f64()
    }
}

/// Replays the given values in a loop.
#[cfg(test)]
pub struct Replay {
    values: Vec<f64>,
    index: usize,
}

#[cfg(test)]
impl Replay {
    pub fn new(values: impl Into<Vec<f64>>) -> Self {
        let values = values.into();
        assert!(!values.is_empty());
        Self { values, index: 0 }
    }
}

#[cfg(test)]
impl Draw for Replay {
    fn draw(&mut self) -> f64 {
        let value = self.values[self.index];
        self.index = (self.index + 1) % self.values.len();
        value
    }
}
