//! The synthesis engine: patch playback over a lock-free audio graph.

use rtrb::{Consumer, RingBuffer};
use tracing::{debug, trace};

use crate::automation::ParamSchedule;
use crate::graph::{AudioGraph, NodeHandle};
use crate::node::NodeId;
use crate::nodes::{CaptureSink, Gain, GainMessage, Osc, ScopeTap, Wave};
use crate::patch::{self, PatchPlan, SoundCategory};
use crate::scope::{ScopeFeed, WINDOW_SAMPLES};

#[cfg(feature = "cpal_sink")]
use crate::device::CpalDevice;
#[cfg(feature = "cpal_sink")]
use crate::nodes::CpalSink;

/// One-shot patch playback with a persistent output chain.
///
/// The graph keeps three permanent nodes: a [`ScopeTap`] feeding the
/// oscilloscope, a volume [`Gain`], and (depending on the constructor) a
/// sink. Each [`play`](Self::play) call builds a fresh voice set of
/// oscillators and envelopes in front of that chain and releases the
/// previous one, so at most one patch is ever audible.
///
/// All timing is absolute seconds on the graph clock: envelopes and tone
/// windows are scheduled as data at spawn time and need no further control
/// traffic while they run.
pub struct SynthEngine {
    graph: AudioGraph,
    live: bool,
    volume: NodeHandle<GainMessage>,
    tap_id: NodeId,
    voices: Vec<NodeId>,
    capture: Option<Consumer<f32>>,
    feed: ScopeFeed,
}

impl SynthEngine {
    fn base(sample_rate: u32) -> (AudioGraph, NodeHandle<GainMessage>, NodeId, ScopeFeed) {
        let mut graph = AudioGraph::new(sample_rate);
        let (tap_producer, tap_consumer) = RingBuffer::new(WINDOW_SAMPLES * 2);
        let tap = graph.add(ScopeTap::new(tap_producer));
        let volume = graph.add(Gain::new(1.0));
        graph.connect(&tap, &volume);
        (graph, volume, tap.id(), ScopeFeed::new(tap_consumer))
    }

    /// An engine with no audio sink.
    ///
    /// Every operation works, nothing sounds: [`play`](Self::play) releases
    /// the old voices and stops there. This is the degraded mode for hosts
    /// without an audio device.
    pub fn new(sample_rate: u32) -> Self {
        let (graph, volume, tap_id, feed) = Self::base(sample_rate);
        debug!(sample_rate, "engine created without audio output");
        Self {
            graph,
            live: false,
            volume,
            tap_id,
            voices: Vec::new(),
            capture: None,
            feed,
        }
    }

    /// An engine rendering into a ring buffer instead of a device.
    ///
    /// Drive it with [`render_secs`](Self::render_secs) to get the mono
    /// output back; used for offline export and tests.
    pub fn offline(sample_rate: u32) -> Self {
        let (mut graph, volume, tap_id, feed) = Self::base(sample_rate);
        let (producer, consumer) = RingBuffer::new(8192);
        let sink = graph.add(CaptureSink::new(producer));
        graph.connect(&volume, &sink);
        graph.set_terminal(&sink);
        Self {
            graph,
            live: true,
            volume,
            tap_id,
            voices: Vec::new(),
            capture: Some(consumer),
            feed,
        }
    }

    /// An engine playing through the given CPAL sink.
    #[cfg(feature = "cpal_sink")]
    pub fn with_sink(sample_rate: u32, sink: CpalSink) -> Self {
        let (mut graph, volume, tap_id, feed) = Self::base(sample_rate);
        let sink = graph.add(sink);
        graph.connect(&volume, &sink);
        graph.set_terminal(&sink);
        Self {
            graph,
            live: true,
            volume,
            tap_id,
            voices: Vec::new(),
            capture: None,
            feed,
        }
    }

    /// An engine on the system's default audio output, or `None` when no
    /// output device exists.
    #[cfg(feature = "cpal_sink")]
    pub fn default_output() -> Option<Self> {
        let device = CpalDevice::default_output()?;
        Some(Self::with_sink(device.sample_rate(), device.create_sink()))
    }

    /// Replace whatever is playing with the patch for `category`.
    pub fn play(&mut self, category: SoundCategory, decibels: f32) {
        if !self.live {
            debug!(%category, "no audio output, skipping playback");
            return;
        }
        self.stop_all();

        let now = self.graph.now();
        let plan = patch::plan(category, now);
        debug!(%category, decibels, now, tones = plan.tones.len(), "starting patch");
        self.spawn_voices(&plan, now, decibels);
    }

    /// Stop and release the current voice set. Idempotent.
    pub fn stop_all(&mut self) {
        if self.voices.is_empty() {
            return;
        }
        trace!(count = self.voices.len(), "releasing voice set");
        for id in self.voices.drain(..) {
            self.graph.remove(id);
        }
    }

    fn spawn_voices(&mut self, plan: &PatchPlan, now: f64, decibels: f32) {
        // Where tone outputs land: the shared loudness envelope, or the
        // volume stage directly for the tap-bypassing flatline
        let out_id = if plan.bypass_master {
            self.volume.id()
        } else {
            let master = self
                .graph
                .add(Gain::scheduled(patch::master_envelope(now, decibels)));
            self.graph.connect_ids(master.id(), self.tap_id);
            self.voices.push(master.id());
            master.id()
        };

        let mut first_tone = None;

        for tone in &plan.tones {
            let osc = self
                .graph
                .add(Osc::new(tone.wave, tone.freq.clone(), tone.start, tone.stop));
            let osc_id = osc.id();
            self.voices.push(osc_id);
            if first_tone.is_none() {
                first_tone = Some(osc_id);
            }

            match &tone.level {
                Some(level) => {
                    let env = self.graph.add(Gain::scheduled(level.clone()));
                    self.graph.connect_ids(osc_id, env.id());
                    self.graph.connect_ids(env.id(), out_id);
                    self.voices.push(env.id());
                }
                None => {
                    self.graph.connect_ids(osc_id, out_id);
                }
            }
        }

        if let Some(vibrato) = &plan.vibrato {
            if let Some(target) = first_tone {
                let lfo = self.graph.add(Osc::new(
                    Wave::Sine,
                    ParamSchedule::new(vibrato.rate_hz),
                    now,
                    now + patch::PATCH_SECS,
                ));
                let depth = self.graph.add(Gain::new(vibrato.depth_hz));
                self.graph.connect(&lfo, &depth);
                self.graph.connect_ids(depth.id(), target);
                self.voices.push(lfo.id());
                self.voices.push(depth.id());
            }
        }
    }

    /// Set the output volume (after the scope tap, before the sink).
    ///
    /// Sends on the volume node's message queue; a full queue drops the
    /// change rather than blocking.
    pub fn set_volume(&mut self, level: f32) {
        let _ = self.volume.send(GainMessage::SetGain(level));
    }

    /// Seconds of audio processed so far. This is the time base every patch
    /// is scheduled against.
    pub fn now(&self) -> f64 {
        self.graph.now()
    }

    /// Process one block through the graph and advance the clock.
    pub fn process_block(&mut self) {
        self.graph.process_block();
    }

    /// Render `secs` of audio and return the captured mono samples.
    ///
    /// Empty unless the engine was built with [`offline`](Self::offline).
    pub fn render_secs(&mut self, secs: f64) -> Vec<f32> {
        if self.capture.is_none() {
            return Vec::new();
        }

        let total = (secs * self.graph.sample_rate() as f64) as usize;
        let mut out = Vec::with_capacity(total);
        while out.len() < total {
            self.graph.process_block();
            if let Some(capture) = self.capture.as_mut() {
                while let Ok(sample) = capture.pop() {
                    out.push(sample);
                }
            }
        }
        out.truncate(total);
        out
    }

    /// True when playback reaches an audio sink.
    pub fn is_live(&self) -> bool {
        self.live
    }

    pub fn sample_rate(&self) -> u32 {
        self.graph.sample_rate()
    }

    /// The oscilloscope's sample feed. Drain it before drawing.
    pub fn scope_feed(&mut self) -> &mut ScopeFeed {
        &mut self.feed
    }

    /// Number of nodes in the active voice set.
    pub fn active_voices(&self) -> usize {
        self.voices.len()
    }

    /// Total nodes in the graph, including the persistent output chain.
    pub fn graph_nodes(&self) -> usize {
        self.graph.node_count()
    }
}
