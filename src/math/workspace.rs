/// Buffers for one power-iteration run, allocated once and reused.
///
/// `u` and `v` start at all-ones, `tmp` at all-zeros.
#[derive(Debug, Clone, PartialEq)]
pub struct PowerWorkspace {
    pub u: Vec<f64>,
    pub v: Vec<f64>,
    pub tmp: Vec<f64>,
}

impl PowerWorkspace {
    pub fn new(n: usize) -> Self {
        Self {
            u: vec![1.0; n],
            v: vec![1.0; n],
            tmp: vec![0.0; n],
        }
    }

    pub fn len(&self) -> usize {
        self.u.len()
    }

    pub fn is_empty(&self) -> bool {
        self.u.is_empty()
    }

    /// Restore the initial state without reallocating.
    pub fn reset(&mut self) {
        self.u.fill(1.0);
        self.v.fill(1.0);
        self.tmp.fill(0.0);
    }

    /// Match length `n` (reallocating only if it changed), then reset.
    pub fn resize(&mut self, n: usize) {
        if self.u.len() != n {
            self.u.resize(n, 1.0);
            self.v.resize(n, 1.0);
            self.tmp.resize(n, 0.0);
        }
        self.reset();
    }
}
