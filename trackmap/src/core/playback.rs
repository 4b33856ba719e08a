use helpers::general::clamped_lower_bound;
use std::fmt;
use std::time::Instant;

/// PlaybackSpeed contains the selectable playback speed multipliers.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlaybackSpeed {
    Quarter,
    Half,
    Normal,
    Double,
    Quadruple,
}

impl PlaybackSpeed {
    pub const ALL: [PlaybackSpeed; 5] = [
        PlaybackSpeed::Quarter,
        PlaybackSpeed::Half,
        PlaybackSpeed::Normal,
        PlaybackSpeed::Double,
        PlaybackSpeed::Quadruple,
    ];

    pub fn factor(&self) -> f64 {
        match self {
            PlaybackSpeed::Quarter => 0.25,
            PlaybackSpeed::Half => 0.5,
            PlaybackSpeed::Normal => 1.0,
            PlaybackSpeed::Double => 2.0,
            PlaybackSpeed::Quadruple => 4.0,
        }
    }

    /// from_factor returns the playback speed belonging to the inserted multiplier, None if it is
    /// not one of the selectable values.
    pub fn from_factor(factor: f64) -> Option<PlaybackSpeed> {
        PlaybackSpeed::ALL
            .iter()
            .copied()
            .find(|speed| speed.factor() == factor)
    }
}

impl Default for PlaybackSpeed {
    fn default() -> Self {
        PlaybackSpeed::Normal
    }
}

impl fmt::Display for PlaybackSpeed {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}x", self.factor())
    }
}

/// While playing, the sample time `anchor_time` belongs to the wall-clock instant `anchor_wall`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum PlaybackState {
    Stopped,
    Playing { anchor_wall: Instant, anchor_time: f64 },
}

/// Playback drives the current sample index of a recorded lap from the wall clock.
#[derive(Debug, Clone)]
pub struct Playback {
    time: Vec<f64>,
    cur_idx: usize,
    state: PlaybackState,
    speed: PlaybackSpeed,
}

impl Playback {
    /// new creates a stopped playback at the first sample. time must be non-decreasing.
    pub fn new(time: &[f64], speed: PlaybackSpeed) -> Playback {
        Playback {
            time: time.to_owned(),
            cur_idx: 0,
            state: PlaybackState::Stopped,
            speed,
        }
    }

    pub fn get_cur_idx(&self) -> usize {
        self.cur_idx
    }

    pub fn get_speed(&self) -> PlaybackSpeed {
        self.speed
    }

    pub fn is_playing(&self) -> bool {
        matches!(self.state, PlaybackState::Playing { .. })
    }

    /// get_last_idx returns the highest valid sample index, None if there are no samples.
    pub fn get_last_idx(&self) -> Option<usize> {
        self.time.len().checked_sub(1)
    }

    /// The method starts the playback at the current sample. It is a no-op if there are no samples
    /// or the playback is already running. If the current sample is the last one, the playback
    /// rewinds to the first sample.
    pub fn play(&mut self, now: Instant) {
        let last_idx = match self.get_last_idx() {
            Some(x) => x,
            None => return,
        };

        if self.is_playing() {
            return;
        }

        if self.cur_idx >= last_idx {
            self.cur_idx = 0;
        }

        self.state = PlaybackState::Playing {
            anchor_wall: now,
            anchor_time: self.time[self.cur_idx],
        };
    }

    pub fn pause(&mut self) {
        self.state = PlaybackState::Stopped;
    }

    pub fn toggle(&mut self, now: Instant) {
        if self.is_playing() {
            self.pause()
        } else {
            self.play(now)
        }
    }

    /// The method updates the current sample index for the inserted wall-clock instant and returns
    /// whether the playback is still running afterwards. As soon as the target time reaches the last
    /// sample, the index stays at the last sample and the playback stops.
    pub fn tick(&mut self, now: Instant) -> bool {
        let target_time = match self.get_target_time(now) {
            Some(x) => x,
            None => return false,
        };

        self.cur_idx = clamped_lower_bound(&self.time, target_time);

        if target_time >= self.time[self.time.len() - 1] {
            self.cur_idx = self.time.len() - 1;
            self.state = PlaybackState::Stopped;
        }

        self.is_playing()
    }

    /// The method changes the playback speed. If the playback is running, it is re-anchored at the
    /// current target time such that the new speed applies from now on without an index jump.
    pub fn set_speed(&mut self, speed: PlaybackSpeed, now: Instant) {
        if let Some(target_time) = self.get_target_time(now) {
            self.state = PlaybackState::Playing {
                anchor_wall: now,
                anchor_time: target_time,
            };
        }

        self.speed = speed;
    }

    /// The method jumps to the inserted sample index (limited to the valid range) and stops the
    /// playback.
    pub fn scrub(&mut self, idx: usize) {
        self.state = PlaybackState::Stopped;

        if let Some(last_idx) = self.get_last_idx() {
            self.cur_idx = idx.min(last_idx);
        }
    }

    /// get_target_time returns the sample time that belongs to the inserted wall-clock instant, None
    /// if the playback is stopped.
    fn get_target_time(&self, now: Instant) -> Option<f64> {
        match self.state {
            PlaybackState::Playing {
                anchor_wall,
                anchor_time,
            } => {
                let elapsed = now.saturating_duration_since(anchor_wall).as_secs_f64();
                Some(anchor_time + elapsed * self.speed.factor())
            }
            PlaybackState::Stopped => None,
        }
    }
}
