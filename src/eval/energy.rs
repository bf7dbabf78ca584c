use std::fmt;

use crate::sim::record::SimulationRecord;

// Fixed-panel candidates evaluated when searching for the best fixed angle.
const FIXED_ANGLE_CANDIDATES: usize = 19;

// ---------------------------------------------------------------------------
// Cosine-law capture energy
// ---------------------------------------------------------------------------

/// Trapezoidal integral of cos(sun − panel) over the sample times.
///
/// Unitless capture proxy. Negative cosines (misalignment beyond 90 deg)
/// are integrated as-is, not clamped to zero.
fn cosine_integral<I>(samples: I) -> f64
where
    I: IntoIterator<Item = (f64, f64)>, // (time, sun - panel in deg)
{
    let mut energy = 0.0;
    let mut prev: Option<(f64, f64)> = None;
    for (t, diff) in samples {
        let c = diff.to_radians().cos();
        if let Some((t0, c0)) = prev {
            energy += 0.5 * (t - t0) * (c + c0);
        }
        prev = Some((t, c));
    }
    energy
}

/// Energy captured by the tracker over a recorded run.
pub fn capture_energy(record: &SimulationRecord) -> f64 {
    cosine_integral(record.iter().map(|s| (s.time, s.sun_angle - s.angle)))
}

/// Energy a panel held at `angle` (deg) would capture over the same times.
pub fn fixed_panel_energy(record: &SimulationRecord, angle: f64) -> f64 {
    cosine_integral(record.iter().map(|s| (s.time, s.sun_angle - angle)))
}

// ---------------------------------------------------------------------------
// Tracker vs fixed panels
// ---------------------------------------------------------------------------

/// Panel configuration an energy figure belongs to.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PanelConfig {
    Tracker,
    Fixed(f64),               // deg
}

impl fmt::Display for PanelConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PanelConfig::Tracker => write!(f, "tracker"),
            PanelConfig::Fixed(angle) => write!(f, "fixed@{angle:.1}deg"),
        }
    }
}

#[derive(Debug, Clone)]
pub struct EnergyComparison {
    pub tracker: f64,
    pub fixed_zero: f64,
    pub best_fixed_angle: f64,
    pub best_fixed: f64,
    /// Every evaluated configuration, tracker first.
    pub entries: Vec<(PanelConfig, f64)>,
}

impl EnergyComparison {
    /// Compare the tracker against a panel fixed at 0 deg and against the
    /// best of evenly spaced fixed angles over [−sweep, +sweep].
    pub fn from_record(record: &SimulationRecord, sweep_amplitude: f64) -> Self {
        let tracker = capture_energy(record);
        let fixed_zero = fixed_panel_energy(record, 0.0);

        let mut entries = vec![(PanelConfig::Tracker, tracker)];
        let span = 2.0 * sweep_amplitude;
        let last = (FIXED_ANGLE_CANDIDATES - 1) as f64;
        let mut best = (0.0, f64::NEG_INFINITY);
        for k in 0..FIXED_ANGLE_CANDIDATES {
            let angle = -sweep_amplitude + span * k as f64 / last;
            let e = fixed_panel_energy(record, angle);
            if e > best.1 {
                best = (angle, e);
            }
            entries.push((PanelConfig::Fixed(angle), e));
        }

        EnergyComparison {
            tracker,
            fixed_zero,
            best_fixed_angle: best.0,
            best_fixed: best.1,
            entries,
        }
    }

    pub fn ratio_vs_zero(&self) -> f64 {
        self.tracker / self.fixed_zero
    }

    pub fn ratio_vs_best(&self) -> f64 {
        self.tracker / self.best_fixed
    }

    /// Energy recorded for a configuration, if it was evaluated.
    pub fn energy_of(&self, config: PanelConfig) -> Option<f64> {
        self.entries
            .iter()
            .find(|(c, _)| *c == config)
            .map(|&(_, e)| e)
    }
}
