//! Tests for deferred redraw requests.

use scan_viewfinder::{RedrawRegion, RedrawScheduler, Rect};
use std::time::{Duration, Instant};

const TICK: Duration = Duration::from_millis(5);
const REGION: Rect = Rect::new(100, 200, 301, 401);

#[test]
fn scheduled_region_is_due_after_one_interval() {
    let mut s = RedrawScheduler::new(TICK);
    let t0 = Instant::now();
    assert!(s.schedule(t0, REGION));
    assert_eq!(s.next_due(), Some(t0 + TICK));
    assert_eq!(s.take_due(t0), None);
    assert_eq!(s.take_due(t0 + Duration::from_millis(4)), None);
    assert_eq!(s.take_due(t0 + TICK), Some(RedrawRegion::Region(REGION)));
    assert!(!s.is_pending());
}

#[test]
fn at_most_one_request_is_outstanding() {
    let mut s = RedrawScheduler::new(TICK);
    let t0 = Instant::now();
    assert!(s.schedule(t0, REGION));
    assert!(!s.schedule(t0 + Duration::from_millis(1), Rect::new(0, 0, 1, 1)));
    assert_eq!(s.take_due(t0 + TICK), Some(RedrawRegion::Region(REGION)));
    assert_eq!(s.take_due(t0 + TICK * 10), None);
}

#[test]
fn immediate_invalidation_supersedes_region_request() {
    let mut s = RedrawScheduler::new(TICK);
    let t0 = Instant::now();
    s.schedule(t0, REGION);
    s.invalidate_now(t0);
    assert_eq!(s.take_due(t0), Some(RedrawRegion::Full));
    assert!(!s.is_pending());
}

#[test]
fn cancel_drops_pending_and_blocks_new_requests() {
    let mut s = RedrawScheduler::new(TICK);
    let t0 = Instant::now();
    s.schedule(t0, REGION);
    s.cancel();
    assert!(s.is_cancelled());
    assert!(!s.is_pending());
    assert_eq!(s.take_due(t0 + TICK), None);

    assert!(!s.schedule(t0, REGION));
    s.invalidate_now(t0);
    assert!(!s.is_pending());
}

#[test]
fn fresh_scheduler_has_nothing_due() {
    let mut s = RedrawScheduler::new(TICK);
    assert_eq!(s.interval(), TICK);
    assert_eq!(s.next_due(), None);
    assert_eq!(s.take_due(Instant::now()), None);
}
