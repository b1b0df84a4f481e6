//! Sound cues and the sinks that play them.
//!
//! The session never plays audio itself. It queues [`SoundCue`]s in a
//! [`CueQueue`] and the frame driver drains them into an [`AudioSink`] once per
//! frame. A missing audio backend is never an error: [`SilentAudio`] is always
//! available.

use std::io::Write;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SoundCue {
    Flap,
    Score,
    Hit,
    Die,
    Button,
}

impl SoundCue {
    pub fn name(self) -> &'static str {
        match self {
            SoundCue::Flap => "flap",
            SoundCue::Score => "score",
            SoundCue::Hit => "hit",
            SoundCue::Die => "die",
            SoundCue::Button => "button",
        }
    }
}

pub trait AudioSink {
    fn play(&mut self, cue: SoundCue);
    fn start_background_loop(&mut self) {}
}

/// Logs cues at trace level and plays nothing.
#[derive(Debug, Default)]
pub struct SilentAudio;

impl AudioSink for SilentAudio {
    fn play(&mut self, cue: SoundCue) {
        tracing::trace!("sound: {}", cue.name());
    }

    fn start_background_loop(&mut self) {
        tracing::trace!("sound: background loop");
    }
}

/// Rings the terminal bell on impacts.
#[derive(Debug, Default)]
pub struct BellAudio;

impl AudioSink for BellAudio {
    fn play(&mut self, cue: SoundCue) {
        tracing::trace!("sound: {}", cue.name());
        if matches!(cue, SoundCue::Hit | SoundCue::Die) {
            let mut out = std::io::stdout();
            // a failed bell is not worth reporting
            let _ = out.write_all(b"\x07").and_then(|_| out.flush());
        }
    }
}

/// A cue that fires after a number of ticks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct ScheduledCue {
    cue: SoundCue,
    ticks_remaining: u32,
}

/// Outbox of cues waiting to be played, plus delayed ones.
#[derive(Debug, Clone, Default)]
pub struct CueQueue {
    ready: Vec<SoundCue>,
    scheduled: Vec<ScheduledCue>,
}

impl CueQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn play(&mut self, cue: SoundCue) {
        self.ready.push(cue);
    }

    /// Queue `cue` to play `ticks` ticks from now. Zero plays immediately.
    pub fn schedule(&mut self, cue: SoundCue, ticks: u32) {
        if ticks == 0 {
            self.ready.push(cue);
        } else {
            self.scheduled.push(ScheduledCue {
                cue,
                ticks_remaining: ticks,
            });
        }
    }

    /// Count down scheduled cues and move the due ones to the outbox.
    pub fn tick(&mut self) {
        let ready = &mut self.ready;
        self.scheduled.retain_mut(|pending| {
            pending.ticks_remaining -= 1;
            if pending.ticks_remaining == 0 {
                ready.push(pending.cue);
                false
            } else {
                true
            }
        });
    }

    pub fn drain(&mut self) -> Vec<SoundCue> {
        std::mem::take(&mut self.ready)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scheduled_cue_fires_after_delay() {
        let mut queue = CueQueue::new();
        queue.play(SoundCue::Hit);
        queue.schedule(SoundCue::Die, 3);
        assert_eq!(queue.drain(), vec![SoundCue::Hit]);

        queue.tick();
        queue.tick();
        assert!(queue.drain().is_empty());
        queue.tick();
        assert_eq!(queue.drain(), vec![SoundCue::Die]);
        queue.tick();
        assert!(queue.drain().is_empty());
    }

    #[test]
    fn test_zero_delay_plays_now() {
        let mut queue = CueQueue::new();
        queue.schedule(SoundCue::Button, 0);
        assert_eq!(queue.drain(), vec![SoundCue::Button]);
    }

    #[test]
    fn test_silent_sink_accepts_everything() {
        let mut sink = SilentAudio;
        sink.start_background_loop();
        for cue in [
            SoundCue::Flap,
            SoundCue::Score,
            SoundCue::Hit,
            SoundCue::Die,
            SoundCue::Button,
        ] {
            sink.play(cue);
        }
    }
}
