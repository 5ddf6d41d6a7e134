//! Native media element backend

use aurea_core::Track;
use tracing::debug;

use crate::backend::{BackendAdapter, BackendKind, SEEK_EPSILON};
use crate::error::{PlaybackError, Result};
use crate::host::{AudioElement, MediaHost};

/// Plays a directly reachable audio URL through the host's media element
///
/// The only backend with a controllable volume channel. Time reporting is
/// push-based: the host forwards the element's `timeupdate` events into
/// the controller, so this adapter needs no poll timer.
pub struct NativeAudioAdapter {
    url: String,
    element: Option<Box<dyn AudioElement>>,
}

impl NativeAudioAdapter {
    /// Create an adapter for one source URL
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            element: None,
        }
    }

    /// The source URL this adapter plays
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl BackendAdapter for NativeAudioAdapter {
    fn kind(&self) -> BackendKind {
        BackendKind::Native
    }

    fn load(&mut self, _track: &Track, host: &mut dyn MediaHost) -> Result<()> {
        let mut element = host
            .create_audio()
            .map_err(|e| PlaybackError::Load(e.to_string()))?;
        element.set_source(&self.url);
        self.element = Some(element);
        Ok(())
    }

    fn play(&mut self, _host: &mut dyn MediaHost) -> Result<()> {
        let element = self
            .element
            .as_mut()
            .ok_or_else(|| PlaybackError::Play("media element not loaded".to_string()))?;
        element
            .play()
            .map_err(|e| PlaybackError::Play(e.to_string()))
    }

    fn pause(&mut self) {
        if let Some(element) = self.element.as_mut() {
            element.pause();
        }
    }

    fn seek(&mut self, seconds: f64) -> Result<()> {
        let element = self
            .element
            .as_mut()
            .ok_or_else(|| PlaybackError::Seek("media element not loaded".to_string()))?;
        if (element.position() - seconds).abs() > SEEK_EPSILON {
            element.set_position(seconds);
        } else {
            debug!(seconds, "seek suppressed, already at target");
        }
        Ok(())
    }

    fn position(&self) -> f64 {
        self.element.as_ref().map_or(0.0, |e| e.position())
    }

    fn supports_volume(&self) -> bool {
        true
    }

    fn set_volume(&mut self, volume: f32) {
        if let Some(element) = self.element.as_mut() {
            element.set_volume(volume.clamp(0.0, 1.0));
        }
    }

    fn set_muted(&mut self, muted: bool) {
        if let Some(element) = self.element.as_mut() {
            element.set_muted(muted);
        }
    }

    fn teardown(&mut self) {
        if let Some(mut element) = self.element.take() {
            element.pause();
        }
    }
}
