// ---------------------------------------------------------------------------
// Per-step simulation history
// ---------------------------------------------------------------------------

/// One recorded step: the state *before* integration plus what the
/// controller produced for it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub time: f64,             // s
    pub angle: f64,            // deg
    pub omega: f64,            // deg/s
    pub sun_angle: f64,        // deg
    pub error: f64,            // deg
    pub torque_commanded: f64, // N·m, pre-saturation
    pub torque_applied: f64,   // N·m, post-saturation
}

/// Append-only, time-ordered sequence of samples from one run.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SimulationRecord {
    samples: Vec<Sample>,
}

impl SimulationRecord {
    pub fn with_capacity(capacity: usize) -> Self {
        Self { samples: Vec::with_capacity(capacity) }
    }

    pub fn push(&mut self, sample: Sample) {
        self.samples.push(sample);
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Sample> {
        self.samples.iter()
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn last(&self) -> Option<&Sample> {
        self.samples.last()
    }

    /// Samples with `time >= t0`.
    pub fn after(&self, t0: f64) -> impl Iterator<Item = &Sample> + '_ {
        self.samples.iter().filter(move |s| s.time >= t0)
    }
}

impl<'a> IntoIterator for &'a SimulationRecord {
    type Item = &'a Sample;
    type IntoIter = std::slice::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}
