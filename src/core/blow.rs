// Microphone-driven blow-out effect.
//
// A sudden change in microphone volume snuffs the candles: every flame
// light goes dark instantly and each flame mesh sinks toward the wick,
// waits, then rises back to its rest height. Each flame advances through an
// explicit phase machine, one step per display tick, all driven by the
// single frame loop.

use super::constants::*;
use super::scene::{CandleRig, Scene};

/// Arithmetic mean of the analyser's byte frequency bins (each 0..=255).
pub fn mean_volume(bins: &[u8]) -> f32 {
    if bins.is_empty() {
        return 0.0;
    }
    let sum: u32 = bins.iter().map(|&b| u32::from(b)).sum();
    sum as f32 / bins.len() as f32
}

/// Compares each volume sample against the previous one; fires when the
/// absolute delta exceeds the threshold. The stored sample is updated
/// unconditionally.
#[derive(Clone, Copy, Debug)]
pub struct VolumeTrigger {
    last_volume: f32,
    threshold: f32,
}

impl Default for VolumeTrigger {
    fn default() -> Self {
        Self::new(VOLUME_DELTA_THRESHOLD)
    }
}

impl VolumeTrigger {
    pub fn new(threshold: f32) -> Self {
        Self {
            last_volume: 0.0,
            threshold,
        }
    }

    pub fn sample(&mut self, volume: f32) -> bool {
        let fired = (volume - self.last_volume).abs() > self.threshold;
        self.last_volume = volume;
        fired
    }

    pub fn last_volume(&self) -> f32 {
        self.last_volume
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum FlamePhase {
    Idle,
    Descending,
    Holding { elapsed_ms: f64 },
    Ascending,
}

/// Per-flame blow-out state, shared across all candles collectively: a
/// trigger is a no-op while any flame is still mid-cycle, so a burst of
/// volume spikes cannot stack overlapping descents.
#[derive(Clone, Debug)]
pub struct BlowOut {
    phases: Vec<FlamePhase>,
    target_y: f32,
    step: f32,
    hold_ms: f64,
}

impl BlowOut {
    pub fn new(candle_count: usize) -> Self {
        Self::with_params(candle_count, BLOW_TARGET_Y, BLOW_STEP, BLOW_HOLD_MS)
    }

    pub fn with_params(candle_count: usize, target_y: f32, step: f32, hold_ms: f64) -> Self {
        Self {
            phases: vec![FlamePhase::Idle; candle_count],
            target_y,
            step,
            hold_ms,
        }
    }

    pub fn phase(&self, index: usize) -> FlamePhase {
        self.phases[index]
    }

    pub fn is_idle(&self, index: usize) -> bool {
        self.phases[index] == FlamePhase::Idle
    }

    /// True while any flame is still descending, holding or ascending.
    pub fn is_active(&self) -> bool {
        self.phases.iter().any(|p| *p != FlamePhase::Idle)
    }

    /// Start the blow-out: drop every flame light to zero intensity and set
    /// every flame descending. Returns false (and touches nothing) if a
    /// cycle is already in flight.
    pub fn trigger(&mut self, scene: &mut Scene, rigs: &[CandleRig]) -> bool {
        if self.is_active() {
            return false;
        }
        for rig in rigs {
            scene.lights[rig.flame_light].intensity = 0.0;
        }
        for phase in &mut self.phases {
            *phase = FlamePhase::Descending;
        }
        true
    }

    /// Advance every flame by one display tick. Descent and ascent move a
    /// fixed step per tick; the hold between them is measured in elapsed
    /// milliseconds.
    pub fn tick(&mut self, scene: &mut Scene, rigs: &[CandleRig], dt_ms: f64) {
        for (phase, rig) in self.phases.iter_mut().zip(rigs) {
            match *phase {
                FlamePhase::Idle => {}
                FlamePhase::Descending => {
                    let y = &mut scene.meshes[rig.flame_mesh].position.y;
                    *y -= self.step;
                    if *y <= self.target_y {
                        *phase = FlamePhase::Holding { elapsed_ms: 0.0 };
                    }
                }
                FlamePhase::Holding { elapsed_ms } => {
                    let elapsed_ms = elapsed_ms + dt_ms;
                    *phase = if elapsed_ms >= self.hold_ms {
                        FlamePhase::Ascending
                    } else {
                        FlamePhase::Holding { elapsed_ms }
                    };
                }
                FlamePhase::Ascending => {
                    let y = &mut scene.meshes[rig.flame_mesh].position.y;
                    *y += self.step;
                    if *y >= rig.rest_y {
                        *y = rig.rest_y;
                        *phase = FlamePhase::Idle;
                    }
                }
            }
        }
    }
}
