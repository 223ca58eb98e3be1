//! Computed node load.
//!
//! A node's computed load is a weighted sum of its live counters. The
//! weights are configured per cluster, so two nodes with identical
//! counters can report different loads when they sit in different
//! clusters. The value is never stored; it is derived on every read.

/// Per-cluster weights for the computed load model.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct LoadFactors {
    /// Weight per connected attendee.
    pub attendee: f64,
    /// Weight per running meeting.
    pub meeting: f64,
    /// Weight per unit of raw CPU load reported by the node.
    pub cpu: f64,
}

impl LoadFactors {
    pub fn new(attendee: f64, meeting: f64, cpu: f64) -> Self {
        Self {
            attendee,
            meeting,
            cpu,
        }
    }

    /// Apply the weights to a node's raw counters.
    pub fn weigh(&self, attendees: i32, meetings: i32, cpu_load: i32) -> f64 {
        f64::from(attendees) * self.attendee
            + f64::from(meetings) * self.meeting
            + f64::from(cpu_load) * self.cpu
    }
}
