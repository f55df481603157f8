/// Integer counter that never goes under one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Stepper {
    value: u32,
}

impl Stepper {
    pub const FLOOR: u32 = 1;

    pub fn new(initial: u32) -> Self {
        Self {
            value: initial.max(Self::FLOOR),
        }
    }

    pub fn value(&self) -> u32 {
        self.value
    }

    pub fn increment(&mut self) -> u32 {
        self.value = self.value.saturating_add(1);
        self.value
    }

    // No-op at the floor
    pub fn decrement(&mut self) -> u32 {
        if self.can_decrement() {
            self.value -= 1;
        }
        self.value
    }

    pub fn can_decrement(&self) -> bool {
        self.value > Self::FLOOR
    }
}

impl Default for Stepper {
    fn default() -> Self {
        Self::new(Self::FLOOR)
    }
}
