use crate::effect::Effect;
use crate::system::ParticleSystem;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Shared cancellation flag for [`run`].
#[derive(Clone, Debug, Default)]
pub struct StopToken {
    stopped: Arc<AtomicBool>,
}

impl StopToken {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.stopped.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.stopped.load(Ordering::Relaxed)
    }
}

#[derive(Clone, Copy, Debug)]
pub struct LoopOptions {
    pub tick: Duration,
    /// Stop after this many frames.
    pub max_frames: Option<u64>,
}

impl Default for LoopOptions {
    fn default() -> Self {
        Self {
            tick: Duration::from_millis(100),
            max_frames: None,
        }
    }
}

/// Update, render and hand each frame to `present` once per tick until
/// `stop` is cancelled or the frame bound is hit. Returns the number of
/// frames presented.
pub fn run<E, F>(
    system: &mut ParticleSystem<E>,
    opts: LoopOptions,
    stop: &StopToken,
    mut present: F,
) -> anyhow::Result<u64>
where
    E: Effect,
    F: FnMut(&str) -> anyhow::Result<()>,
{
    let mut frames = 0u64;
    let mut next = Instant::now();

    while !stop.is_cancelled() {
        if opts.max_frames.is_some_and(|max| frames >= max) {
            log::debug!("frame limit {frames} reached");
            break;
        }

        system.update();
        present(&system.display())?;
        frames += 1;

        if stop.is_cancelled() {
            break;
        }

        next += opts.tick;
        let now = Instant::now();
        if next > now {
            pace(next - now, stop);
        } else {
            // fell behind, don't try to catch up
            next = now;
        }
    }

    log::info!("stopped after {frames} frames");
    Ok(frames)
}

/// Sleep in short slices so a cancel lands within a few milliseconds.
fn pace(wait: Duration, stop: &StopToken) {
    let end = Instant::now() + wait;
    loop {
        if stop.is_cancelled() {
            return;
        }
        let now = Instant::now();
        if now >= end {
            return;
        }
        std::thread::sleep((end - now).min(Duration::from_millis(5)));
    }
}
