//! Step scheduler: drives one traversal run and one sort run, a step per tick.
//!
//! The scheduler never sleeps or spawns; an external driver (a UI timer, or
//! [`drive`] in a terminal) calls [`Scheduler::tick`] with the [`Ticket`]
//! returned by the previous tick, after waiting the returned delay.
//!
//! Tickets are single-use and carry the generation of the run that issued
//! them. Starting a run replaces the previous run of the same lane wholesale
//! and bumps the generation, so a ticket from a superseded run is answered
//! with [`Tick::Stale`] and changes nothing.
//!
//! # Example
//!
//! ```rust
//! use algostep_core::config::EngineConfig;
//! use algostep_core::graph::{Graph, TraversalKind};
//! use algostep_core::scheduler::{Scheduler, Tick};
//!
//! let mut scheduler = Scheduler::new(&EngineConfig::default());
//! let graph = Graph::from_text("A,B,C", "A B,B C");
//! let mut ticket = scheduler.start_traversal(graph, "A", TraversalKind::Bfs).unwrap();
//!
//! let mut visits = 0;
//! loop {
//!     match scheduler.tick(ticket) {
//!         Tick::Continue { next, .. } => {
//!             visits += 1;
//!             ticket = next;
//!         }
//!         Tick::Finished { .. } | Tick::Stale => break,
//!     }
//! }
//! assert_eq!(visits, 3);
//! assert!(scheduler.traversal().unwrap().ended_at().is_some());
//! ```

mod clock;
mod driver;
mod run;


use std::collections::BTreeSet;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::Serialize;
use tracing::{debug, info, warn};

use crate::config::{EngineConfig, SchedulerConfig, SortConfig};
use crate::error::Result;
use crate::graph::{Graph, TraversalKind, VertexReport, VisitEvent};
use crate::sort::SortKind;

pub use clock::{Clock, ManualClock, SystemClock};
pub use driver::drive;
pub use run::{SortRun, TraversalRun};

/// Independent run slots of the scheduler.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Lane {
    /// Graph traversal runs.
    Traversal,
    /// Sort runs.
    Sort,
}

/// Permission to perform the next step of a specific run.
///
/// Not `Clone`: each ticket can be presented once, so at most one tick per
/// run is ever in flight.
#[derive(Debug, PartialEq, Eq)]
pub struct Ticket {
    lane: Lane,
    generation: u64,
    seq: u64,
}

impl Ticket {
    /// Lane of the run that issued this ticket.
    #[must_use]
    pub fn lane(&self) -> Lane {
        self.lane
    }

    /// Generation of the run that issued this ticket.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }
}

/// State to hand to the renderer after a step.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Frame {
    /// A traversal visited a vertex, optionally through a discovery edge.
    Visit(VisitEvent),
    /// A sort step: full array snapshot plus highlighted indices.
    Sort {
        /// Array contents after the step.
        values: Vec<i64>,
        /// Indices touched by the step.
        highlighted: BTreeSet<usize>,
    },
}

/// Outcome of [`Scheduler::tick`].
#[derive(Debug)]
pub enum Tick {
    /// The run advanced: render `frame`, wait `delay`, then tick with `next`.
    Continue {
        /// New state to render.
        frame: Frame,
        /// Ticket for the following step.
        next: Ticket,
        /// Cadence delay before the following step.
        delay: Duration,
    },
    /// The run completed on this tick. Reported once per run.
    Finished {
        /// Final state to render, if the run has one (sorts do).
        frame: Option<Frame>,
        /// End time of the run.
        ended_at: DateTime<Utc>,
    },
    /// The ticket belongs to a superseded or finished run; nothing happened.
    Stale,
}

/// Owner of the active runs.
#[derive(Debug)]
pub struct Scheduler<C: Clock = SystemClock> {
    config: SchedulerConfig,
    sort_config: SortConfig,
    clock: C,
    generation: u64,
    traversal: Option<TraversalRun>,
    sort: Option<SortRun>,
}

impl Scheduler<SystemClock> {
    /// Creates a scheduler reading the system clock.
    #[must_use]
    pub fn new(config: &EngineConfig) -> Self {
        Self::with_clock(config, SystemClock)
    }
}

impl<C: Clock> Scheduler<C> {
    /// Creates a scheduler reading timestamps from `clock`.
    #[must_use]
    pub fn with_clock(config: &EngineConfig, clock: C) -> Self {
        Self {
            config: config.scheduler,
            sort_config: config.sort,
            clock,
            generation: 0,
            traversal: None,
            sort: None,
        }
    }

    /// Step cadence in use.
    #[must_use]
    pub fn config(&self) -> &SchedulerConfig {
        &self.config
    }

    /// Replaces the step cadence; applies from the next tick on.
    pub fn set_config(&mut self, config: SchedulerConfig) {
        self.config = config;
    }

    /// The clock timestamps are read from.
    #[must_use]
    pub fn clock(&self) -> &C {
        &self.clock
    }

    fn next_generation(&mut self) -> u64 {
        self.generation += 1;
        self.generation
    }

    /// Starts a traversal run, superseding any previous traversal run.
    ///
    /// The first step should be ticked immediately with the returned ticket.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidStart` if `start` is not in `graph`; the
    /// current traversal run, if any, is left untouched.
    pub fn start_traversal(
        &mut self,
        graph: impl Into<Arc<Graph>>,
        start: &str,
        kind: TraversalKind,
    ) -> Result<Ticket> {
        let graph = graph.into();
        let generation = self.generation + 1;
        let run = TraversalRun::new(generation, kind, graph, start, self.clock.now())?;
        self.next_generation();
        info!(
            run = "traversal",
            algorithm = %kind,
            generation,
            start,
            vertices = run.graph().vertex_count(),
            "run started"
        );
        let ticket = run.first_ticket();
        self.traversal = Some(run);
        Ok(ticket)
    }

    /// Starts a sort run over `values`, superseding any previous sort run.
    ///
    /// Counting sort is prepared here, before the first step.
    ///
    /// # Errors
    ///
    /// Returns `Error::InvalidInput` if counting sort preparation rejects the
    /// values; the current sort run, if any, is left untouched.
    pub fn start_sort(&mut self, values: Vec<i64>, kind: SortKind) -> Result<Ticket> {
        let machine = kind.machine(values.clone(), &self.sort_config)?;
        let generation = self.next_generation();
        let run = SortRun::new(generation, kind, values, machine, self.clock.now());
        info!(
            run = "sort",
            algorithm = %kind,
            generation,
            len = run.original().len(),
            "run started"
        );
        let ticket = run.first_ticket();
        self.sort = Some(run);
        Ok(ticket)
    }

    /// Abandons the sort run and returns its original unsorted values.
    ///
    /// Any outstanding sort ticket becomes stale.
    pub fn reset_sort(&mut self) -> Option<Vec<i64>> {
        let run = self.sort.take()?;
        self.next_generation();
        info!(run = "sort", generation = run.generation(), "run reset");
        Some(run.into_original())
    }

    /// Performs the step `ticket` grants.
    pub fn tick(&mut self, ticket: Ticket) -> Tick {
        match ticket.lane {
            Lane::Traversal => self.tick_traversal(&ticket),
            Lane::Sort => self.tick_sort(&ticket),
        }
    }

    fn tick_traversal(&mut self, ticket: &Ticket) -> Tick {
        let delay = self.config.traversal_delay();
        let Some(run) = self.traversal.as_mut().filter(|run| run.accepts(ticket)) else {
            warn!(generation = ticket.generation, "stale traversal ticket ignored");
            return Tick::Stale;
        };
        let now = self.clock.now();
        match run.advance(now) {
            Some(event) => {
                debug!(generation = ticket.generation, vertex = %event.vertex, "visit");
                Tick::Continue {
                    frame: Frame::Visit(event),
                    next: run.issue_ticket(),
                    delay,
                }
            }
            None => {
                let ended_at = run.finish(now);
                info!(
                    run = "traversal",
                    generation = ticket.generation,
                    visited = run.progress().len(),
                    "run finished"
                );
                Tick::Finished {
                    frame: None,
                    ended_at,
                }
            }
        }
    }

    fn tick_sort(&mut self, ticket: &Ticket) -> Tick {
        let delay = self.config.sort_delay();
        let Some(run) = self.sort.as_mut().filter(|run| run.accepts(ticket)) else {
            warn!(generation = ticket.generation, "stale sort ticket ignored");
            return Tick::Stale;
        };
        let step = run.advance().clone();
        let frame = Frame::Sort {
            values: run.values().to_vec(),
            highlighted: step.highlighted,
        };
        if step.completed {
            let ended_at = run.finish(self.clock.now());
            info!(
                run = "sort",
                generation = ticket.generation,
                steps = run.stats().steps,
                moves = run.stats().moves,
                "run finished"
            );
            return Tick::Finished {
                frame: Some(frame),
                ended_at,
            };
        }
        debug!(generation = ticket.generation, "sort step");
        Tick::Continue {
            frame,
            next: run.issue_ticket(),
            delay,
        }
    }

    /// The current traversal run.
    #[must_use]
    pub fn traversal(&self) -> Option<&TraversalRun> {
        self.traversal.as_ref()
    }

    /// The current sort run.
    #[must_use]
    pub fn sort(&self) -> Option<&SortRun> {
        self.sort.as_ref()
    }

    /// Inspects `vertex` in the current traversal run.
    #[must_use]
    pub fn inspect(&self, vertex: &str) -> Option<VertexReport> {
        self.traversal.as_ref().map(|run| run.inspect(vertex))
    }
}
