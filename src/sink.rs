//! Tone sinks: where compiled notes turn into sound.

use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use std::sync::mpsc;
use tracing::{debug, info, warn};

use crate::error::{Error, Result};

/// A single output channel that can sound a square wave.
///
/// Requests are fire-and-forget: the sink may return before the tone ends.
/// Timing between notes belongs to the player, not the sink.
pub trait ToneSink {
    fn emit_tone(&mut self, frequency_hz: u32, duration_ms: u32);
}

impl<T: ToneSink + ?Sized> ToneSink for &mut T {
    fn emit_tone(&mut self, frequency_hz: u32, duration_ms: u32) {
        (**self).emit_tone(frequency_hz, duration_ms)
    }
}

impl<T: ToneSink + ?Sized> ToneSink for Box<T> {
    fn emit_tone(&mut self, frequency_hz: u32, duration_ms: u32) {
        (**self).emit_tone(frequency_hz, duration_ms)
    }
}

/// A command sent to the audio thread
enum ToneCommand {
    /// Sound `freq` for `samples` output frames
    Tone { freq: f64, samples: usize },
    /// Silence the stream
    Stop,
}

const VOLUME: f32 = 0.2;

/// Square-wave sink on the default audio output device.
pub struct CpalSink {
    cmd_tx: mpsc::Sender<ToneCommand>,
    sample_rate: f64,
    _stream: cpal::Stream,
}

impl CpalSink {
    /// Open the default output device and start a silent stream.
    pub fn open() -> Result<Self> {
        let host = cpal::default_host();
        let device = host
            .default_output_device()
            .ok_or_else(|| Error::Audio("no output audio device available".into()))?;

        let config = device
            .default_output_config()
            .map_err(|e| Error::Audio(format!("failed to get default output config: {}", e)))?;

        let sample_rate = config.sample_rate() as f64;
        let channels = config.channels() as usize;

        let (cmd_tx, cmd_rx) = mpsc::channel::<ToneCommand>();

        let mut phase: f64 = 0.0;
        let mut step: f64 = 0.0;
        let mut samples_remaining: usize = 0;

        let stream = device
            .build_output_stream(
                &config.into(),
                move |data: &mut [f32], _: &cpal::OutputCallbackInfo| {
                    while let Ok(cmd) = cmd_rx.try_recv() {
                        match cmd {
                            ToneCommand::Tone { freq, samples } => {
                                step = freq / sample_rate;
                                samples_remaining = samples;
                                phase = 0.0;
                            }
                            ToneCommand::Stop => {
                                samples_remaining = 0;
                            }
                        }
                    }

                    for frame in data.chunks_mut(channels) {
                        let value = if samples_remaining > 0 {
                            samples_remaining -= 1;
                            let v = if phase < 0.5 { VOLUME } else { -VOLUME };
                            phase = (phase + step).fract();
                            v
                        } else {
                            0.0
                        };
                        for sample in frame.iter_mut() {
                            *sample = value;
                        }
                    }
                },
                move |err| {
                    warn!("audio stream error: {}", err);
                },
                None,
            )
            .map_err(|e| Error::Audio(format!("failed to build output stream: {}", e)))?;

        stream
            .play()
            .map_err(|e| Error::Audio(format!("failed to play stream: {}", e)))?;

        info!(sample_rate, channels, "audio output ready");

        Ok(Self {
            cmd_tx,
            sample_rate,
            _stream: stream,
        })
    }
}

impl ToneSink for CpalSink {
    fn emit_tone(&mut self, frequency_hz: u32, duration_ms: u32) {
        let samples = (duration_ms as f64 / 1000.0 * self.sample_rate) as usize;
        let cmd = ToneCommand::Tone {
            freq: frequency_hz as f64,
            samples,
        };
        // A dead audio thread means no sound; playback timing carries on.
        if self.cmd_tx.send(cmd).is_err() {
            warn!(frequency_hz, duration_ms, "audio thread disconnected");
        }
    }
}

impl Drop for CpalSink {
    fn drop(&mut self) {
        let _ = self.cmd_tx.send(ToneCommand::Stop);
    }
}

/// Sink that only logs each request. Used for dry runs and on hosts
/// without an audio device.
#[derive(Debug, Default)]
pub struct LogSink {
    emitted: usize,
}

impl LogSink {
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of tones requested so far
    pub fn emitted(&self) -> usize {
        self.emitted
    }
}

impl ToneSink for LogSink {
    fn emit_tone(&mut self, frequency_hz: u32, duration_ms: u32) {
        self.emitted += 1;
        debug!(frequency_hz, duration_ms, "tone");
    }
}
