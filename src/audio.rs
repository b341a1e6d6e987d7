//! Microphone capture and song playback glue.
//!
//! Capture is awaited once at startup; if the browser has no capture API or
//! the user denies permission, the volume monitor simply never starts and
//! everything else keeps running.

use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

use crate::core::blow::mean_volume;

/// True when the browser exposes an audio-capture API at all.
pub fn microphone_supported() -> bool {
    web::window()
        .map(|w| w.navigator().media_devices().is_ok())
        .unwrap_or(false)
}

/// A live microphone stream routed into an analyser, plus the scratch buffer
/// the frequency bins are read into each tick.
pub struct Microphone {
    analyser: web::AnalyserNode,
    bins: Vec<u8>,
    // Keep the audio graph alive for the page's lifetime.
    _context: web::AudioContext,
    _source: web::MediaStreamAudioSourceNode,
}

impl Microphone {
    /// Request capture permission and wire stream -> source -> analyser.
    pub async fn capture() -> anyhow::Result<Self> {
        let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
        let devices = window
            .navigator()
            .media_devices()
            .map_err(|e| anyhow::anyhow!("mediaDevices unavailable: {:?}", e))?;

        let constraints = web::MediaStreamConstraints::new();
        constraints.set_audio(&JsValue::TRUE);
        let promise = devices
            .get_user_media_with_constraints(&constraints)
            .map_err(|e| anyhow::anyhow!("getUserMedia: {:?}", e))?;
        let stream: web::MediaStream = JsFuture::from(promise)
            .await
            .map_err(|e| anyhow::anyhow!("microphone permission: {:?}", e))?
            .dyn_into()
            .map_err(|e| anyhow::anyhow!("not a MediaStream: {:?}", e))?;

        let context =
            web::AudioContext::new().map_err(|e| anyhow::anyhow!("AudioContext: {:?}", e))?;
        let source = context
            .create_media_stream_source(&stream)
            .map_err(|e| anyhow::anyhow!("stream source: {:?}", e))?;
        let analyser = web::AnalyserNode::new(&context)
            .map_err(|e| anyhow::anyhow!("AnalyserNode: {:?}", e))?;
        analyser.set_fft_size(256);
        source
            .connect_with_audio_node(&analyser)
            .map_err(|e| anyhow::anyhow!("connect: {:?}", e))?;

        let bins = vec![0u8; analyser.frequency_bin_count() as usize];
        Ok(Self {
            analyser,
            bins,
            _context: context,
            _source: source,
        })
    }

    /// One volume sample: mean of the current byte frequency bins.
    pub fn volume(&mut self) -> f32 {
        self.analyser.get_byte_frequency_data(&mut self.bins);
        mean_volume(&self.bins)
    }
}

pub fn play_track(audio: &web::HtmlAudioElement) {
    _ = audio.play();
}

pub fn stop_track(audio: &web::HtmlAudioElement) {
    _ = audio.pause();
    audio.set_current_time(0.0);
}
