//! Day-walk state machine: persona, hour, autoplay cadence, and the glue
//! that turns schedule entries into engine playback.
//!
//! All timing is data. [`Session`] never spawns threads or timers; the host
//! drives it with a monotonic clock (`now`, in seconds) and applies the
//! ticks the session mints. A UI loop, a test, and a headless renderer all
//! share one code path.

use tracing::debug;

use crate::clock::{self, ClockLayout, ClockScene, HourDetail, TimelineCell, FALLBACK_ACCENT};
use crate::engine::SynthEngine;
use crate::patch::SoundCategory;
use crate::schedule::{self, Persona};
use crate::scope::{DbMeter, ScopeFrame};

/// Seconds between autoplay hour advances.
pub const AUTOPLAY_PERIOD_SECS: f64 = 3.0;

struct Autoplay {
    next_due: f64,
    generation: u64,
}

/// Proof that an autoplay tick came due for the current run.
///
/// [`Session::due_tick`] is the only way to mint one. A token minted before
/// autoplay was cancelled or restarted no longer matches the session's
/// generation and is ignored by [`Session::apply_tick`].
#[derive(Debug, Clone, Copy)]
pub struct TickToken {
    generation: u64,
}

/// What the journey panel shows for the selected hour.
#[derive(Debug, Clone, PartialEq)]
pub struct HourView {
    pub hour_title: String,
    pub location: &'static str,
    pub description: &'static str,
    pub panel: SoundsPanel,
    pub decibels: f32,
}

/// The sounds section of an [`HourView`].
#[derive(Debug, Clone, PartialEq)]
pub enum SoundsPanel {
    /// No recording exists; the flatline tone stands in.
    NoData,
    /// Data exists but nothing was detected this hour.
    Quiet,
    /// Detected categories, dominant first.
    Sounds(Vec<SoundCategory>),
}

impl SoundsPanel {
    /// Placeholder copy for panels with nothing to list.
    pub fn message(&self) -> Option<&'static str> {
        match self {
            SoundsPanel::NoData => {
                Some("Data unavailable for this location and hour.\nDisplaying flatline tone.")
            }
            SoundsPanel::Quiet => Some("No sounds detected this hour."),
            SoundsPanel::Sounds(_) => None,
        }
    }
}

/// One listener walking through a 24-hour day.
pub struct Session {
    engine: SynthEngine,
    layout: ClockLayout,
    persona: Option<&'static Persona>,
    hour: u8,
    autoplay: Option<Autoplay>,
    generation: u64,
    meter: DbMeter,
}

impl Session {
    /// Session without audio output. Playback calls become no-ops but every
    /// view still works.
    pub fn new() -> Self {
        Self::with_engine(SynthEngine::new(44_100))
    }

    /// Session rendering into a capture buffer instead of a device.
    pub fn offline() -> Self {
        Self::with_engine(SynthEngine::offline(44_100))
    }

    pub fn with_engine(engine: SynthEngine) -> Self {
        Session {
            engine,
            layout: ClockLayout::default(),
            persona: None,
            hour: 0,
            autoplay: None,
            generation: 0,
            meter: DbMeter::new(),
        }
    }

    /// Switch to the persona with the given id.
    ///
    /// Unknown ids leave the session untouched and return `false`. A switch
    /// cancels any running autoplay and restarts the day at hour 0.
    pub fn select_persona(&mut self, id: &str) -> bool {
        let persona = match schedule::persona(id) {
            Some(p) => p,
            None => {
                debug!(id, "unknown persona id, ignoring");
                return false;
            }
        };
        self.cancel_autoplay();
        self.persona = Some(persona);
        self.hour = 0;
        debug!(persona = persona.id, "persona selected");
        self.update_for_hour();
        true
    }

    /// Jump to an hour of the current persona's day.
    ///
    /// Re-selecting the current hour replays it. Without a persona this is
    /// a no-op. Autoplay, if running, keeps going from the new hour.
    pub fn select_hour(&mut self, hour: u8) {
        if self.persona.is_none() {
            return;
        }
        self.hour = hour % 24;
        self.update_for_hour();
    }

    fn update_for_hour(&mut self) {
        let persona = match self.persona {
            Some(p) => p,
            None => return,
        };
        let entry = persona.hour(self.hour);
        self.meter.set_target(entry.decibels);
        if !entry.data_available {
            self.engine.play(SoundCategory::Flatline, entry.decibels);
        } else if let Some(category) = entry.dominant() {
            self.engine.play(category, entry.decibels);
        }
        // Quiet hours start nothing; the previous patch runs out on its own.
    }

    /// Start or stop the 24-hour walk; returns whether autoplay is now on.
    ///
    /// Starting requires a persona and jumps back to hour 0, matching the
    /// beginning of the day. `now` is the host clock in seconds.
    pub fn toggle_autoplay(&mut self, now: f64) -> bool {
        if self.autoplay.is_some() {
            self.cancel_autoplay();
            return false;
        }
        if self.persona.is_none() {
            return false;
        }
        self.generation += 1;
        self.hour = 0;
        self.update_for_hour();
        self.autoplay = Some(Autoplay {
            next_due: now + AUTOPLAY_PERIOD_SECS,
            generation: self.generation,
        });
        debug!(now, "autoplay started");
        true
    }

    fn cancel_autoplay(&mut self) {
        if self.autoplay.take().is_some() {
            self.generation += 1;
            debug!("autoplay cancelled");
        }
    }

    pub fn autoplay_active(&self) -> bool {
        self.autoplay.is_some()
    }

    /// Mint a tick if autoplay is running and its deadline has passed.
    pub fn due_tick(&self, now: f64) -> Option<TickToken> {
        let autoplay = self.autoplay.as_ref()?;
        if now >= autoplay.next_due {
            Some(TickToken {
                generation: autoplay.generation,
            })
        } else {
            None
        }
    }

    /// Advance one hour for a minted tick.
    ///
    /// Tokens from a run that has since been cancelled or restarted are
    /// dropped, so a host may hold a tick across an await point safely.
    pub fn apply_tick(&mut self, token: TickToken, now: f64) {
        let current = match &self.autoplay {
            Some(a) => a.generation,
            None => {
                debug!("tick after autoplay stopped, ignoring");
                return;
            }
        };
        if token.generation != current {
            debug!(
                token = token.generation,
                current, "stale autoplay tick, ignoring"
            );
            return;
        }
        self.hour = (self.hour + 1) % 24;
        if let Some(autoplay) = &mut self.autoplay {
            autoplay.next_due = now + AUTOPLAY_PERIOD_SECS;
        }
        self.update_for_hour();
    }

    /// [`due_tick`](Self::due_tick) and [`apply_tick`](Self::apply_tick) in
    /// one call, for hosts that poll from a single loop.
    pub fn poll(&mut self, now: f64) {
        if let Some(token) = self.due_tick(now) {
            self.apply_tick(token, now);
        }
    }

    /// Play one category at the current hour's level, e.g. from a sound
    /// row's play button. Without a persona a nominal 70 dB is used.
    pub fn play_category(&mut self, category: SoundCategory) {
        let decibels = self
            .persona
            .map(|p| p.hour(self.hour).decibels)
            .unwrap_or(70.0);
        self.engine.play(category, decibels);
    }

    pub fn persona(&self) -> Option<&'static Persona> {
        self.persona
    }

    pub fn hour(&self) -> u8 {
        self.hour
    }

    /// Draw commands for the dial in its current state.
    pub fn scene(&self) -> ClockScene {
        ClockScene::build(self.persona, self.hour, &self.layout)
    }

    /// Popup content for an arbitrary hour, `None` without a persona.
    pub fn hour_detail(&self, hour: u8) -> Option<HourDetail> {
        self.persona.map(|p| clock::hour_detail(p, hour))
    }

    /// The journey panel for the selected hour, `None` without a persona.
    pub fn hour_view(&self) -> Option<HourView> {
        let persona = self.persona?;
        let entry = persona.hour(self.hour);
        let panel = if !entry.data_available {
            SoundsPanel::NoData
        } else if entry.sounds.is_empty() {
            SoundsPanel::Quiet
        } else {
            SoundsPanel::Sounds(entry.sounds.to_vec())
        };
        Some(HourView {
            hour_title: clock::hour_title(self.hour),
            location: entry.location,
            description: entry.description,
            panel,
            decibels: entry.decibels,
        })
    }

    pub fn timeline(&self) -> [TimelineCell; 24] {
        clock::timeline(self.persona, self.persona.map(|_| self.hour))
    }

    /// Map a pointer position on the dial to an hour wedge.
    pub fn hit_test(&self, x: f32, y: f32) -> Option<u8> {
        let persona = self.persona?;
        self.layout.hit_test(persona, x, y)
    }

    /// One oscilloscope frame. Live engines show the tapped signal; engines
    /// without output fall back to the synthetic idle trace, driven by `t`.
    pub fn scope_frame(&mut self, t: f64, width: f32, height: f32) -> ScopeFrame {
        let color = self.persona.map(|p| p.color).unwrap_or(FALLBACK_ACCENT);
        if self.engine.is_live() {
            let feed = self.engine.scope_feed();
            feed.drain();
            ScopeFrame::live(feed.window(), color, width, height)
        } else {
            ScopeFrame::idle(t, color, width, height)
        }
    }

    pub fn layout(&self) -> &ClockLayout {
        &self.layout
    }

    pub fn meter(&self) -> &DbMeter {
        &self.meter
    }

    pub fn meter_mut(&mut self) -> &mut DbMeter {
        &mut self.meter
    }

    pub fn engine(&self) -> &SynthEngine {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut SynthEngine {
        &mut self.engine
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
