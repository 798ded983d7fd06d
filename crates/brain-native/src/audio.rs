use crate::mixer::Mixer;
use brain_core::AudioCommand;
use cpal::traits::{DeviceTrait, HostTrait, StreamTrait};
use cpal::{FromSample, SizedSample};
use std::sync::{Arc, Mutex};

/// Output stream plus the mixer it reads. Dropping this stops playback.
pub struct NativeAudio {
    mixer: Arc<Mutex<Mixer>>,
    _stream: cpal::Stream,
}

impl NativeAudio {
    /// Open the default output device. `None` when there is no usable device;
    /// the app runs silently in that case.
    pub fn start() -> Option<Self> {
        let host = cpal::default_host();
        let device = host.default_output_device()?;
        let config = device.default_output_config().ok()?;
        let sample_rate = config.sample_rate().0 as f32;
        let channels = config.channels() as usize;
        let mixer = Arc::new(Mutex::new(Mixer::new(sample_rate)));

        let stream = match config.sample_format() {
            cpal::SampleFormat::F32 => {
                build_stream::<f32>(&device, &config.into(), channels, Arc::clone(&mixer))
            }
            cpal::SampleFormat::I16 => {
                build_stream::<i16>(&device, &config.into(), channels, Arc::clone(&mixer))
            }
            cpal::SampleFormat::U16 => {
                build_stream::<u16>(&device, &config.into(), channels, Arc::clone(&mixer))
            }
            other => {
                log::warn!("[audio] unsupported sample format {:?}", other);
                return None;
            }
        };
        let stream = match stream {
            Ok(s) => s,
            Err(e) => {
                log::warn!("[audio] stream error: {}", e);
                return None;
            }
        };
        if let Err(e) = stream.play() {
            log::warn!("[audio] play error: {}", e);
            return None;
        }
        log::info!("[audio] output {} Hz x{}", sample_rate, channels);
        Some(Self {
            mixer,
            _stream: stream,
        })
    }

    pub fn apply(&self, commands: &[AudioCommand]) {
        if commands.is_empty() {
            return;
        }
        if let Ok(mut mixer) = self.mixer.lock() {
            mixer.apply(commands);
        }
    }
}

fn build_stream<T>(
    device: &cpal::Device,
    config: &cpal::StreamConfig,
    channels: usize,
    mixer: Arc<Mutex<Mixer>>,
) -> Result<cpal::Stream, cpal::BuildStreamError>
where
    T: SizedSample + FromSample<f32>,
{
    let err_fn = |err| log::error!("audio stream error: {err}");
    device.build_output_stream(
        config,
        move |data: &mut [T], _| {
            let Ok(mut mixer) = mixer.lock() else {
                return;
            };
            for frame in data.chunks_mut(channels.max(1)) {
                let v = T::from_sample(mixer.next_sample());
                for out in frame.iter_mut() {
                    *out = v;
                }
            }
        },
        err_fn,
        None,
    )
}
