use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use methane_core::audio::{AudioDriver, NullAudio};
use sdl2::audio::{AudioCallback, AudioDevice, AudioSpecDesired};
use tracing::{info, warn};

/// Output rate of the tone backend.
pub const SAMPLE_RATE: i32 = 22050;

/// Number of samples over which to fade in/out (~11.6 ms at 22.05 kHz).
const FADE_SAMPLES: u32 = 256;

/// Length of one sound effect blip.
const BLIP_SAMPLES: usize = (SAMPLE_RATE as usize) / 16;

/// Rate the game passes for "play at normal pitch".
const NOMINAL_RATE: i32 = 22050;

/// Upper bound on queued audio, so a stalled callback cannot build up lag.
const MAX_QUEUED: usize = SAMPLE_RATE as usize / 4;

const AMPLITUDE: i16 = 4000;

/// Linear ramp applied at device start and again on shutdown, so the
/// output never jumps straight to or from a non-zero level.
#[derive(Debug, Default)]
struct Envelope {
    opened: u32,
    closed: u32,
}

impl Envelope {
    /// Gain for the next output sample.
    fn step(&mut self, closing: bool) -> f32 {
        let ramp = |pos: u32| pos as f32 / FADE_SAMPLES as f32;
        if self.opened < FADE_SAMPLES {
            self.opened += 1;
            ramp(self.opened - 1)
        } else if !closing {
            1.0
        } else if self.closed < FADE_SAMPLES {
            self.closed += 1;
            1.0 - ramp(self.closed - 1)
        } else {
            0.0
        }
    }
}

pub(crate) struct TonePlayer {
    ring: AudioRing,
    envelope: Envelope,
    closing: Arc<AtomicBool>,
}

impl AudioCallback for TonePlayer {
    type Channel = i16;
    fn callback(&mut self, out: &mut [i16]) {
        let Ok(mut ring) = self.ring.lock() else {
            out.fill(0);
            return;
        };
        drop_backlog(&mut ring);

        let closing = self.closing.load(Ordering::Relaxed);
        for sample in out.iter_mut() {
            let gain = self.envelope.step(closing);
            *sample = (ring.pop_front().unwrap_or(0) as f32 * gain) as i16;
        }
    }
}

/// Shared ring: the game thread mixes blips in, the SDL callback pops them.
type AudioRing = Arc<Mutex<VecDeque<i16>>>;

/// Square-wave sound effects. Each sample id gets its own pitch; music
/// modules are not supported and their calls do nothing.
pub struct ToneAudio {
    device: AudioDevice<TonePlayer>,
    ring: AudioRing,
    fade_out: Arc<AtomicBool>,
}

impl ToneAudio {
    pub fn open(sdl_audio: &sdl2::AudioSubsystem) -> Result<Self, String> {
        let ring: AudioRing = Arc::new(Mutex::new(VecDeque::with_capacity(MAX_QUEUED)));
        let fade_out = Arc::new(AtomicBool::new(false));

        let desired_spec = AudioSpecDesired {
            freq: Some(SAMPLE_RATE),
            channels: Some(1),
            samples: Some(512),
        };

        let device = sdl_audio.open_playback(None, &desired_spec, |_spec| TonePlayer {
            ring: Arc::clone(&ring),
            envelope: Envelope::default(),
            closing: Arc::clone(&fade_out),
        })?;

        Ok(Self {
            device,
            ring,
            fade_out,
        })
    }
}

impl AudioDriver for ToneAudio {
    fn init(&mut self) {
        self.device.resume();
    }

    fn remove(&mut self) {
        self.fade_out.store(true, Ordering::Relaxed);
        // FADE_SAMPLES at 22050 Hz is ~11.6 ms.
        std::thread::sleep(Duration::from_millis(15));
        self.device.pause();
    }

    fn play_sample(&mut self, id: i32, _pos: i32, rate: i32) {
        let samples = blip(id, rate);
        if let Ok(mut ring) = self.ring.lock() {
            mix_into(&mut ring, &samples);
        }
    }

    fn play_module(&mut self, _id: i32) {}

    fn stop_module(&mut self) {}

    fn update_module(&mut self, _id: i32) {}
}

/// Pick the backend: tones when enabled and a device opens, silence otherwise.
pub fn select(sdl: &sdl2::Sdl, enabled: bool) -> Box<dyn AudioDriver> {
    if !enabled {
        return Box::new(NullAudio);
    }
    match sdl.audio().and_then(|audio| ToneAudio::open(&audio)) {
        Ok(tone) => {
            info!("audio: tone backend at {SAMPLE_RATE} Hz");
            Box::new(tone)
        }
        Err(e) => {
            warn!("audio unavailable, continuing silent: {e}");
            Box::new(NullAudio)
        }
    }
}

/// Base pitch for a sample id, scaled by the requested playback rate.
fn blip_frequency(id: i32, rate: i32) -> u32 {
    let base = 220 + (id.rem_euclid(16) as u32) * 55;
    let rate = if rate > 0 { rate } else { NOMINAL_RATE };
    ((base as u64 * rate as u64 / NOMINAL_RATE as u64) as u32).clamp(40, SAMPLE_RATE as u32 / 2)
}

/// One square-wave blip with a linear decay.
fn blip(id: i32, rate: i32) -> Vec<i16> {
    let half_period = (SAMPLE_RATE as u32 / blip_frequency(id, rate) / 2).max(1) as usize;
    (0..BLIP_SAMPLES)
        .map(|i| {
            let level = if (i / half_period) % 2 == 0 { AMPLITUDE } else { -AMPLITUDE };
            let decay = (BLIP_SAMPLES - i) as i32;
            (level as i32 * decay / BLIP_SAMPLES as i32) as i16
        })
        .collect()
}

/// Discard the oldest queued samples beyond `MAX_QUEUED`, so a stalled
/// device catches up instead of playing late.
fn drop_backlog(ring: &mut VecDeque<i16>) {
    if ring.len() > MAX_QUEUED {
        let excess = ring.len() - MAX_QUEUED;
        ring.drain(..excess);
    }
}

/// Add `samples` onto whatever is already queued, extending the queue as
/// needed. Overlapping sounds saturate instead of wrapping.
fn mix_into(ring: &mut VecDeque<i16>, samples: &[i16]) {
    for (i, &s) in samples.iter().enumerate() {
        match ring.get_mut(i) {
            Some(queued) => *queued = queued.saturating_add(s),
            None => ring.push_back(s),
        }
    }
}
