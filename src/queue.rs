/// Two-lane walk-in queue.
///
/// This module provides the DualLaneQueue struct which keeps emergency
/// and routine patients in separate first-in-first-out lanes. The
/// emergency lane always precedes the normal lane for dequeue, peek,
/// search positions and snapshot order.

use crate::models::{Lane, PatientRecord, Specialty};
use chrono::{DateTime, Local};
use std::collections::VecDeque;
use tracing::{debug, info};
use uuid::Uuid;

/// One row of a queue snapshot, in priority order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueueEntry {
    pub position: usize,
    pub record_id: Uuid,
    pub name: String,
    pub phone: String,
    pub visit_time: String,
    pub specialty: Specialty,
    pub lane: Lane,
    pub wait_minutes: i64,
}

impl QueueEntry {
    pub fn lane_label(&self) -> &'static str {
        self.lane.label()
    }
}

/// Aggregate counts over the waiting patients.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct QueueStatistics {
    pub total: usize,
    pub emergencies: usize,
    pub normals: usize,
    pub average_wait_minutes: i64,
}

/// A patient found by name together with its 1-based queue position.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SearchHit<'a> {
    pub record: &'a PatientRecord,
    pub position: usize,
}

/// Estimated minutes until a patient at `position` is called.
pub fn estimated_wait_minutes(position: usize, consultation_minutes: i64) -> i64 {
    position.saturating_sub(1) as i64 * consultation_minutes
}

/// Priority queue with one FIFO lane per priority class.
#[derive(Debug, Clone, Default)]
pub struct DualLaneQueue {
    emergency_lane: VecDeque<PatientRecord>,
    normal_lane: VecDeque<PatientRecord>,
}

impl DualLaneQueue {
    pub fn new() -> Self {
        DualLaneQueue {
            emergency_lane: VecDeque::new(),
            normal_lane: VecDeque::new(),
        }
    }

    fn lane_mut(&mut self, lane: Lane) -> &mut VecDeque<PatientRecord> {
        match lane {
            Lane::Emergency => &mut self.emergency_lane,
            Lane::Normal => &mut self.normal_lane,
        }
    }

    /// Append a patient to the back of its lane.
    pub fn enqueue(&mut self, record: PatientRecord) {
        let lane = record.lane();
        debug!(
            record_id = %record.record_id(),
            lane = lane.label(),
            "enqueue patient"
        );
        self.lane_mut(lane).push_back(record);
    }

    /// Remove and return the next patient to be served.
    ///
    /// Returns `None` when nobody is waiting.
    pub fn dequeue(&mut self) -> Option<PatientRecord> {
        let next = self
            .emergency_lane
            .pop_front()
            .or_else(|| self.normal_lane.pop_front());

        if let Some(record) = &next {
            info!(
                record_id = %record.record_id(),
                lane = record.lane().label(),
                remaining = self.size(),
                "called next patient"
            );
        }
        next
    }

    /// The next patient to be served, without removing it.
    pub fn peek(&self) -> Option<&PatientRecord> {
        self.emergency_lane.front().or_else(|| self.normal_lane.front())
    }

    /// All waiting patients in priority order.
    pub fn iter(&self) -> impl Iterator<Item = &PatientRecord> {
        self.emergency_lane.iter().chain(self.normal_lane.iter())
    }

    /// First patient whose name matches `name` case-insensitively.
    ///
    /// Duplicate names resolve to the earliest position.
    pub fn find_by_name(&self, name: &str) -> Option<SearchHit<'_>> {
        self.iter()
            .enumerate()
            .find(|(_, record)| record.matches_name(name))
            .map(|(index, record)| SearchHit {
                record,
                position: index + 1,
            })
    }

    /// 1-based position of the record with the given id.
    pub fn position_of(&self, record_id: Uuid) -> Option<usize> {
        self.iter()
            .position(|record| record.record_id() == record_id)
            .map(|index| index + 1)
    }

    /// Remove the first patient matching `name`, returning it.
    pub fn remove_by_name(&mut self, name: &str) -> Option<PatientRecord> {
        self.remove_first(|record| record.matches_name(name))
    }

    /// Cancel the first patient matching `name`. Returns whether one was removed.
    pub fn cancel_by_name(&mut self, name: &str) -> bool {
        self.remove_by_name(name).is_some()
    }

    /// Cancel a specific patient by record id.
    pub fn cancel_by_id(&mut self, record_id: Uuid) -> Option<PatientRecord> {
        self.remove_first(|record| record.record_id() == record_id)
    }

    fn remove_first<F>(&mut self, predicate: F) -> Option<PatientRecord>
    where
        F: Fn(&PatientRecord) -> bool,
    {
        for lane in [Lane::Emergency, Lane::Normal] {
            let queue = self.lane_mut(lane);
            if let Some(index) = queue.iter().position(&predicate) {
                let removed = queue.remove(index);
                if let Some(record) = &removed {
                    info!(
                        record_id = %record.record_id(),
                        lane = lane.label(),
                        "cancelled patient"
                    );
                }
                return removed;
            }
        }
        None
    }

    /// Point-in-time listing of the queue as of `now`.
    pub fn snapshot_at(&self, now: DateTime<Local>) -> Vec<QueueEntry> {
        self.iter()
            .enumerate()
            .map(|(index, record)| QueueEntry {
                position: index + 1,
                record_id: record.record_id(),
                name: record.name().to_string(),
                phone: record.phone().to_string(),
                visit_time: record.visit_time().to_string(),
                specialty: record.specialty(),
                lane: record.lane(),
                wait_minutes: record.wait_minutes_at(now),
            })
            .collect()
    }

    pub fn snapshot(&self) -> Vec<QueueEntry> {
        self.snapshot_at(Local::now())
    }

    /// Counts and average wait as of `now`.
    ///
    /// The average is taken over fractional minutes and then truncated;
    /// an empty queue reports zero.
    pub fn statistics_at(&self, now: DateTime<Local>) -> QueueStatistics {
        let total = self.size();
        if total == 0 {
            return QueueStatistics::default();
        }

        let total_minutes: f64 = self
            .iter()
            .map(|record| (now - record.registered_at()).num_milliseconds().max(0) as f64 / 60_000.0)
            .sum();

        QueueStatistics {
            total,
            emergencies: self.emergency_lane.len(),
            normals: self.normal_lane.len(),
            average_wait_minutes: (total_minutes / total as f64) as i64,
        }
    }

    pub fn statistics(&self) -> QueueStatistics {
        self.statistics_at(Local::now())
    }

    pub fn emergency_len(&self) -> usize {
        self.emergency_lane.len()
    }

    pub fn normal_len(&self) -> usize {
        self.normal_lane.len()
    }

    pub fn size(&self) -> usize {
        self.emergency_lane.len() + self.normal_lane.len()
    }

    pub fn is_empty(&self) -> bool {
        self.emergency_lane.is_empty() && self.normal_lane.is_empty()
    }
}
