//! Append-only recording of per-step body samples
//!
//! A [`TimeSeries`] is the sole output of a run: one [`Sample`] per body per
//! step, ordered by time and then by body order. Samples are flat records so
//! they serialize directly as table rows (JSON objects, CSV lines) and can
//! be split into animation frames by `time` or plot series by `body`.

use serde::{Deserialize, Serialize};

use crate::body::Body;

/// One body's state at one simulation time
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub time: f64,
    pub body: String,
    pub x: f64,
    pub y: f64,
    pub vx: f64,
    pub vy: f64,
    pub ax: f64,
    pub ay: f64,
}

impl Sample {
    /// Snapshots `body` as it is now, tagged with `time`.
    pub fn from_body(time: f64, body: &Body) -> Self {
        Self {
            time,
            body: body.name().to_owned(),
            x: body.position.x(),
            y: body.position.y(),
            vx: body.velocity.x(),
            vy: body.velocity.y(),
            ax: body.acceleration.x(),
            ay: body.acceleration.y(),
        }
    }
}

/// Ordered, append-only sequence of samples
///
/// # Examples
///
/// ```
/// use nbody::body::Body;
/// use nbody::series::{Sample, TimeSeries};
///
/// let body = Body::point("beacon", 1.0, [1.0, 2.0], [0.0, 0.0]).unwrap();
///
/// let mut series = TimeSeries::new();
/// series.append(Sample::from_body(0.0, &body));
/// series.append(Sample::from_body(1.0, &body));
///
/// assert_eq!(series.len(), 2);
/// assert_eq!(series.export()[1].time, 1.0);
/// ```
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TimeSeries {
    samples: Vec<Sample>,
}

impl TimeSeries {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            samples: Vec::with_capacity(capacity),
        }
    }

    /// Adds one sample at the end. Recorded samples are never modified.
    pub fn append(&mut self, sample: Sample) {
        self.samples.push(sample);
    }

    /// All samples in recording order, read-only.
    pub fn export(&self) -> &[Sample] {
        &self.samples
    }

    /// Consumes the series, returning the records.
    pub fn into_records(self) -> Vec<Sample> {
        self.samples
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

    /// Distinct body names, in first-appearance order.
    pub fn body_names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = Vec::new();
        for sample in &self.samples {
            if !names.contains(&sample.body.as_str()) {
                names.push(&sample.body);
            }
        }
        names
    }

    /// Samples of one body, in time order.
    pub fn trajectory<'a>(&'a self, body: &'a str) -> impl Iterator<Item = &'a Sample> + 'a {
        self.samples.iter().filter(move |s| s.body == body)
    }

    /// Consecutive groups of samples sharing a `time`, one per animation frame.
    ///
    /// # Examples
    ///
    /// ```
    /// use nbody::body::Body;
    /// use nbody::series::{Sample, TimeSeries};
    ///
    /// let a = Body::point("a", 1.0, [0.0, 0.0], [0.0, 0.0]).unwrap();
    /// let b = Body::point("b", 1.0, [1.0, 0.0], [0.0, 0.0]).unwrap();
    ///
    /// let mut series = TimeSeries::new();
    /// for t in [0.0, 1.0, 2.0] {
    ///     series.append(Sample::from_body(t, &a));
    ///     series.append(Sample::from_body(t, &b));
    /// }
    ///
    /// let frames: Vec<_> = series.frames().collect();
    /// assert_eq!(frames.len(), 3);
    /// assert!(frames.iter().all(|f| f.len() == 2));
    /// ```
    pub fn frames(&self) -> impl Iterator<Item = &[Sample]> + '_ {
        self.samples.chunk_by(|a, b| a.time == b.time)
    }
}

impl<'a> IntoIterator for &'a TimeSeries {
    type Item = &'a Sample;
    type IntoIter = std::slice::Iter<'a, Sample>;

    fn into_iter(self) -> Self::IntoIter {
        self.samples.iter()
    }
}
