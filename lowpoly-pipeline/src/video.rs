//! Frame-paced loop for video sources
//!
//! Every tick of a [`FrameClock`] captures the current frame of a
//! [`FrameSource`] and runs one full, independent pipeline pass on it. Ticks
//! missed while a pass was running are dropped rather than queued.

use crate::driver::{LowPolyPipeline, PassReport};
use lowpoly_core::{Frame, RenderTarget};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tracing::{debug, info};

/// Supplier of decoded video frames
pub trait FrameSource {
    /// The current frame, or `None` once the source has ended
    fn next_frame(&mut self) -> Option<Frame>;
}

impl<F> FrameSource for F
where
    F: FnMut() -> Option<Frame>,
{
    fn next_frame(&mut self) -> Option<Frame> {
        self()
    }
}

/// One display refresh
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameTick {
    /// Sequence number of this tick
    pub index: u64,
    /// Ticks dropped since the previous one because a pass overran
    pub skipped: u64,
}

/// Paces the video loop
pub trait FrameClock {
    /// Block until the next tick; `None` ends the loop
    fn tick(&mut self) -> Option<FrameTick>;
}

/// Fixed-interval clock
///
/// The first tick fires immediately. When a pass overruns one or more
/// deadlines, the next tick fires at once and reports how many were missed.
#[derive(Debug, Clone)]
pub struct IntervalClock {
    interval: Duration,
    next_deadline: Option<Instant>,
    index: u64,
}

impl IntervalClock {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_deadline: None,
            index: 0,
        }
    }

    /// Clock ticking `fps` times per second; non-positive rates tick back to back
    pub fn from_fps(fps: f64) -> Self {
        let interval = if fps.is_finite() && fps > 0.0 {
            Duration::from_secs_f64(1.0 / fps)
        } else {
            Duration::ZERO
        };
        Self::new(interval)
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}

impl FrameClock for IntervalClock {
    fn tick(&mut self) -> Option<FrameTick> {
        let now = Instant::now();
        let mut skipped = 0;

        let deadline = match self.next_deadline {
            None => now,
            Some(deadline) if deadline > now => {
                std::thread::sleep(deadline - now);
                deadline
            }
            Some(deadline) => {
                if !self.interval.is_zero() {
                    let late = now - deadline;
                    skipped = (late.as_nanos() / self.interval.as_nanos()) as u64;
                }
                now
            }
        };

        self.next_deadline = deadline.checked_add(self.interval);
        let tick = FrameTick {
            index: self.index,
            skipped,
        };
        self.index += 1;
        Some(tick)
    }
}

/// Cross-thread request to end a video loop
#[derive(Debug, Clone, Default)]
pub struct StopHandle {
    flag: Arc<AtomicBool>,
}

impl StopHandle {
    pub fn new() -> Self {
        Self::default()
    }

    /// Ask the loop to stop before its next pass
    pub fn stop(&self) {
        self.flag.store(true, Ordering::SeqCst);
    }

    pub fn is_stopped(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }
}

/// Why a video loop ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StopReason {
    /// A [`StopHandle`] was triggered
    Stopped,
    /// The frame source ran out of frames
    SourceEnded,
    /// The clock stopped ticking
    ClockEnded,
}

/// Totals for a finished video loop
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct VideoSummary {
    pub frames_rendered: u64,
    pub ticks_skipped: u64,
    pub reason: StopReason,
}

/// Drives a [`LowPolyPipeline`] once per clock tick
#[derive(Debug)]
pub struct VideoDriver {
    pipeline: LowPolyPipeline,
    stop: StopHandle,
}

impl VideoDriver {
    pub fn new(pipeline: LowPolyPipeline) -> Self {
        Self {
            pipeline,
            stop: StopHandle::new(),
        }
    }

    /// Handle that ends [`run`](Self::run) from a callback or another thread
    pub fn stop_handle(&self) -> StopHandle {
        self.stop.clone()
    }

    pub fn pipeline(&self) -> &LowPolyPipeline {
        &self.pipeline
    }

    pub fn pipeline_mut(&mut self) -> &mut LowPolyPipeline {
        &mut self.pipeline
    }

    /// Run passes until stopped, the source ends, or the clock ends
    ///
    /// Each pass starts from fresh state; the only thing carried between
    /// passes is the pipeline's random stream. `on_frame` is called after
    /// each rendered frame with that frame's report and the drawn target.
    ///
    /// # Arguments
    /// * `source` - Frame supplier, polled once per tick
    /// * `clock` - Tick pacing
    /// * `target` - Surface every frame is drawn onto
    /// * `on_frame` - Per-frame callback, e.g. to present or save the target
    ///
    /// # Returns
    /// * `VideoSummary` - Frame and skip counts plus the reason the loop ended
    pub fn run<S, C, T, F>(&mut self, source: &mut S, clock: &mut C, target: &mut T, mut on_frame: F) -> VideoSummary
    where
        S: FrameSource + ?Sized,
        C: FrameClock + ?Sized,
        T: RenderTarget + ?Sized,
        F: FnMut(&PassReport, &T),
    {
        let mut frames_rendered = 0;
        let mut ticks_skipped = 0;

        let reason = loop {
            if self.stop.is_stopped() {
                break StopReason::Stopped;
            }

            let tick = match clock.tick() {
                Some(tick) => tick,
                None => break StopReason::ClockEnded,
            };
            ticks_skipped += tick.skipped;
            if tick.skipped > 0 {
                debug!(index = tick.index, skipped = tick.skipped, "dropped late ticks");
            }

            if self.stop.is_stopped() {
                break StopReason::Stopped;
            }

            let frame = match source.next_frame() {
                Some(frame) => frame,
                None => break StopReason::SourceEnded,
            };

            let view = frame.view();
            let report = self.pipeline.run_pass(Some(&view), target);
            frames_rendered += 1;
            on_frame(&report, &*target);
        };

        info!(frames_rendered, ticks_skipped, reason = ?reason, "video loop finished");

        VideoSummary {
            frames_rendered,
            ticks_skipped,
            reason,
        }
    }
}
