//! Blocking tick loop for drivers without an event loop of their own.

use std::time::Duration;

use chrono::{DateTime, Utc};

use super::{Clock, Frame, Scheduler, Tick, Ticket};

/// Ticks `ticket`'s run until it finishes, handing every frame to `on_frame`
/// and every inter-step delay to `pace`.
///
/// `pace` decides how to wait: `std::thread::sleep` for an animation, a
/// no-op for immediate output. Returns the run's end time, or `None` if the
/// ticket turned out to be stale.
pub fn drive<C, F, P>(
    scheduler: &mut Scheduler<C>,
    ticket: Ticket,
    mut on_frame: F,
    mut pace: P,
) -> Option<DateTime<Utc>>
where
    C: Clock,
    F: FnMut(&Frame),
    P: FnMut(Duration),
{
    let mut ticket = ticket;
    loop {
        match scheduler.tick(ticket) {
            Tick::Continue { frame, next, delay } => {
                on_frame(&frame);
                pace(delay);
                ticket = next;
            }
            Tick::Finished { frame, ended_at } => {
                if let Some(frame) = frame {
                    on_frame(&frame);
                }
                return Some(ended_at);
            }
            Tick::Stale => return None,
        }
    }
}
