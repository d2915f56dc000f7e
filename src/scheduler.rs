// Deferred repaint requests for the overlay.
// Each paint asks for the next one a tick later. The host loop polls
// take_due(), so there is at most one outstanding request and detach can
// drop it.

use crate::types::Rect;
use log::debug;
use std::time::{Duration, Instant};

/// What a due repaint should cover.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedrawRegion {
    /// Whole surface (status text changed, preview resized, first paint).
    Full,
    /// Only the given rect changed; the rest of the layer can stay as is.
    Region(Rect),
}

#[derive(Debug, Clone, Copy)]
struct PendingRedraw {
    due: Instant,
    region: RedrawRegion,
}

#[derive(Debug)]
pub struct RedrawScheduler {
    interval: Duration,
    pending: Option<PendingRedraw>,
    cancelled: bool,
}

impl RedrawScheduler {
    pub fn new(interval: Duration) -> Self {
        Self { interval, pending: None, cancelled: false }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }

    /// Queue a region repaint one interval from `now`. Ignored if a request is
    /// already outstanding or the scheduler was cancelled.
    pub fn schedule(&mut self, now: Instant, region: Rect) -> bool {
        if self.cancelled || self.pending.is_some() {
            return false;
        }
        self.pending = Some(PendingRedraw {
            due: now + self.interval,
            region: RedrawRegion::Region(region),
        });
        true
    }

    /// Ask for a full repaint as soon as the host polls. Replaces any
    /// outstanding region request.
    pub fn invalidate_now(&mut self, now: Instant) {
        if self.cancelled {
            return;
        }
        self.pending = Some(PendingRedraw { due: now, region: RedrawRegion::Full });
    }

    /// Hand out the outstanding request once its deadline passed.
    pub fn take_due(&mut self, now: Instant) -> Option<RedrawRegion> {
        match self.pending {
            Some(p) if p.due <= now => {
                self.pending = None;
                Some(p.region)
            }
            _ => None,
        }
    }

    pub fn next_due(&self) -> Option<Instant> {
        self.pending.map(|p| p.due)
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }

    /// Drop the outstanding request and refuse new ones.
    pub fn cancel(&mut self) {
        if self.pending.take().is_some() {
            debug!("dropped pending overlay redraw");
        }
        self.cancelled = true;
    }
}
