//! Run objects: everything one traversal or sort run owns.
//!
//! A run is created whole by the scheduler when it starts and dropped whole
//! when it is superseded, so no state ever leaks from one run into the next.

use std::sync::Arc;

use chrono::{DateTime, Utc};

use super::{Lane, Ticket};
use crate::error::Result;
use crate::graph::{
    Graph, InspectionIndex, TraversalKind, TraversalResult, VertexReport, VisitEvent,
    VisitTimestamps, Walk,
};
use crate::sort::{SortKind, SortMachine, SortStats, SortStep};

/// Ticket bookkeeping shared by both run kinds.
#[derive(Debug, Clone, Copy)]
struct TicketBook {
    lane: Lane,
    generation: u64,
    next_seq: u64,
}

impl TicketBook {
    fn new(lane: Lane, generation: u64) -> Self {
        Self {
            lane,
            generation,
            next_seq: 0,
        }
    }

    fn accepts(&self, ticket: &Ticket) -> bool {
        ticket.lane == self.lane
            && ticket.generation == self.generation
            && ticket.seq == self.next_seq
    }

    fn issue(&mut self) -> Ticket {
        self.next_seq += 1;
        Ticket {
            lane: self.lane,
            generation: self.generation,
            seq: self.next_seq,
        }
    }

    fn first(&self) -> Ticket {
        Ticket {
            lane: self.lane,
            generation: self.generation,
            seq: self.next_seq,
        }
    }
}

/// An animated traversal.
pub struct TraversalRun {
    tickets: TicketBook,
    kind: TraversalKind,
    start: String,
    graph: Arc<Graph>,
    walk: Box<dyn Walk>,
    timestamps: VisitTimestamps,
    started_at: DateTime<Utc>,
    ended_at: Option<DateTime<Utc>>,
}

impl std::fmt::Debug for TraversalRun {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TraversalRun")
            .field("generation", &self.tickets.generation)
            .field("kind", &self.kind)
            .field("start", &self.start)
            .field("visited", &self.walk.progress().len())
            .field("started_at", &self.started_at)
            .field("ended_at", &self.ended_at)
            .finish_non_exhaustive()
    }
}

impl TraversalRun {
    pub(super) fn new(
        generation: u64,
        kind: TraversalKind,
        graph: Arc<Graph>,
        start: &str,
        started_at: DateTime<Utc>,
    ) -> Result<Self> {
        let walk = kind.walk(Arc::clone(&graph), start)?;
        Ok(Self {
            tickets: TicketBook::new(Lane::Traversal, generation),
            kind,
            start: start.to_string(),
            graph,
            walk,
            timestamps: VisitTimestamps::new(),
            started_at,
            ended_at: None,
        })
    }

    pub(super) fn accepts(&self, ticket: &Ticket) -> bool {
        self.ended_at.is_none() && self.tickets.accepts(ticket)
    }

    pub(super) fn first_ticket(&self) -> Ticket {
        self.tickets.first()
    }

    pub(super) fn issue_ticket(&mut self) -> Ticket {
        self.tickets.issue()
    }

    /// Performs one visit, stamping it with `now`.
    pub(super) fn advance(&mut self, now: DateTime<Utc>) -> Option<VisitEvent> {
        let event = self.walk.next()?;
        self.timestamps.insert(event.vertex.clone(), now);
        Some(event)
    }

    pub(super) fn finish(&mut self, now: DateTime<Utc>) -> DateTime<Utc> {
        *self.ended_at.get_or_insert(now)
    }

    /// Generation number of this run.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.tickets.generation
    }

    /// Traversal strategy.
    #[must_use]
    pub fn kind(&self) -> TraversalKind {
        self.kind
    }

    /// Start vertex.
    #[must_use]
    pub fn start_vertex(&self) -> &str {
        &self.start
    }

    /// The graph being traversed.
    #[must_use]
    pub fn graph(&self) -> &Arc<Graph> {
        &self.graph
    }

    /// Traversal result covering the steps performed so far.
    #[must_use]
    pub fn progress(&self) -> &TraversalResult {
        self.walk.progress()
    }

    /// Render time of each visited vertex.
    #[must_use]
    pub fn timestamps(&self) -> &VisitTimestamps {
        &self.timestamps
    }

    /// When the run started.
    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// When the run finished, once it has.
    #[must_use]
    pub fn ended_at(&self) -> Option<DateTime<Utc>> {
        self.ended_at
    }

    /// Returns true once the end time has been recorded.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.ended_at.is_some()
    }

    /// Inspection view over the steps performed so far.
    #[must_use]
    pub fn inspection(&self) -> InspectionIndex<'_> {
        InspectionIndex::new(self.walk.progress(), &self.timestamps)
    }

    /// Inspects one vertex.
    #[must_use]
    pub fn inspect(&self, vertex: &str) -> VertexReport {
        self.inspection().lookup(vertex)
    }
}

/// An animated sort.
pub struct SortRun {
    tickets: TicketBook,
    kind: SortKind,
    original: Vec<i64>,
    machine: Box<dyn SortMachine<i64>>,
    last_step: SortStep,
    started_at: DateTime<Utc>,
    ended_at: Option<DateTime<Utc>>,
}

impl std::fmt::Debug for SortRun {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SortRun")
            .field("generation", &self.tickets.generation)
            .field("kind", &self.kind)
            .field("machine", &self.machine)
            .field("started_at", &self.started_at)
            .field("ended_at", &self.ended_at)
            .finish_non_exhaustive()
    }
}

impl SortRun {
    pub(super) fn new(
        generation: u64,
        kind: SortKind,
        original: Vec<i64>,
        machine: Box<dyn SortMachine<i64>>,
        started_at: DateTime<Utc>,
    ) -> Self {
        Self {
            tickets: TicketBook::new(Lane::Sort, generation),
            kind,
            original,
            machine,
            last_step: SortStep::default(),
            started_at,
            ended_at: None,
        }
    }

    pub(super) fn accepts(&self, ticket: &Ticket) -> bool {
        self.ended_at.is_none() && self.tickets.accepts(ticket)
    }

    pub(super) fn first_ticket(&self) -> Ticket {
        self.tickets.first()
    }

    pub(super) fn issue_ticket(&mut self) -> Ticket {
        self.tickets.issue()
    }

    pub(super) fn advance(&mut self) -> &SortStep {
        self.last_step = self.machine.step();
        &self.last_step
    }

    pub(super) fn finish(&mut self, now: DateTime<Utc>) -> DateTime<Utc> {
        *self.ended_at.get_or_insert(now)
    }

    pub(super) fn into_original(self) -> Vec<i64> {
        self.original
    }

    /// Generation number of this run.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.tickets.generation
    }

    /// Sort algorithm.
    #[must_use]
    pub fn kind(&self) -> SortKind {
        self.kind
    }

    /// The unsorted input this run started from.
    #[must_use]
    pub fn original(&self) -> &[i64] {
        &self.original
    }

    /// Current array contents.
    #[must_use]
    pub fn values(&self) -> &[i64] {
        self.machine.values()
    }

    /// The most recent step outcome.
    #[must_use]
    pub fn last_step(&self) -> &SortStep {
        &self.last_step
    }

    /// Work counters.
    #[must_use]
    pub fn stats(&self) -> SortStats {
        self.machine.stats()
    }

    /// When the run started.
    #[must_use]
    pub fn started_at(&self) -> DateTime<Utc> {
        self.started_at
    }

    /// When the run finished, once it has.
    #[must_use]
    pub fn ended_at(&self) -> Option<DateTime<Utc>> {
        self.ended_at
    }

    /// Returns true once the end time has been recorded.
    #[must_use]
    pub fn is_finished(&self) -> bool {
        self.ended_at.is_some()
    }
}
