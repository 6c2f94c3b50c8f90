//! Deterministic spawn lanes.
//!
//! The field width is split into `count` lanes. Lanes are visited with a stride coprime to
//! `count`, so every lane is used once per cycle without an RNG.

#[derive(Debug, Clone)]
pub struct Lanes {
    count: u32,
    stride: u32,
    cursor: u32,
}

impl Lanes {
    pub fn new(count: u32, stride: u32) -> Self {
        let count = count.max(1);
        let stride = if gcd(stride, count) == 1 { stride } else { 1 };
        Self { count, stride, cursor: 0 }
    }

    /// Next lane centre in [-half_width + margin, half_width - margin].
    pub fn next_x(&mut self, half_width: f32, margin: f32) -> f32 {
        let lane = (self.cursor * self.stride) % self.count;
        self.cursor = (self.cursor + 1) % self.count;

        let usable = (half_width - margin).max(0.0) * 2.0;
        if self.count == 1 {
            return 0.0;
        }
        -usable * 0.5 + usable * lane as f32 / (self.count - 1) as f32
    }
}

fn gcd(a: u32, b: u32) -> u32 {
    if b == 0 { a } else { gcd(b, a % b) }
}
