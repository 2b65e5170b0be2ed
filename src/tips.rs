//! Rotating health tips shown beside the play field
//!
//! The rotator is owned by the host, not the simulation, so it keeps going
//! across resets and while a run is over. A host can either count ticks with
//! `advance` or call `rotate` from its own timer every `period_ms`.

/// Default tip list
pub const HEALTH_TIPS: [&str; 6] = [
    "Fiber helps keep your digestive system healthy.",
    "Stay hydrated by drinking plenty of water.",
    "Regular exercise benefits your colon health.",
    "Limit red meat consumption for better health.",
    "Maintain a balanced diet rich in fruits and vegetables.",
    "Regular screenings can help prevent colon issues.",
];

/// Cycles through a fixed list of tips every `interval_ticks`
#[derive(Debug, Clone)]
pub struct TipRotator {
    tips: Vec<String>,
    index: usize,
    interval_ticks: u64,
    ticks: u64,
}

impl Default for TipRotator {
    fn default() -> Self {
        Self::new(
            HEALTH_TIPS.iter().map(|s| s.to_string()).collect(),
            crate::consts::TIP_INTERVAL_TICKS,
        )
    }
}

impl TipRotator {
    pub fn new(tips: Vec<String>, interval_ticks: u64) -> Self {
        Self {
            tips,
            index: 0,
            interval_ticks: interval_ticks.max(1),
            ticks: 0,
        }
    }

    /// Tip currently on display
    pub fn current(&self) -> Option<&str> {
        self.tips.get(self.index).map(String::as_str)
    }

    /// Count one tick. Returns the new tip when it changes.
    pub fn advance(&mut self) -> Option<&str> {
        if self.tips.is_empty() {
            return None;
        }
        self.ticks += 1;
        if self.ticks < self.interval_ticks {
            return None;
        }
        self.rotate()
    }

    /// Move to the next tip immediately and restart the interval
    pub fn rotate(&mut self) -> Option<&str> {
        if self.tips.is_empty() {
            return None;
        }
        self.ticks = 0;
        self.index = (self.index + 1) % self.tips.len();
        self.current()
    }

    /// Wall-clock length of one interval at the fixed tick rate
    pub fn period_ms(&self) -> f64 {
        self.interval_ticks as f64 * crate::consts::SIM_DT as f64 * 1000.0
    }
}
