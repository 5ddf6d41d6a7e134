//! External deep-link backend

use aurea_core::Track;

use crate::backend::{BackendAdapter, BackendKind};
use crate::error::Result;
use crate::host::MediaHost;

/// Convert a Spotify URI into an openable web URL
///
/// `spotify:track:abc` becomes `https://open.spotify.com/track/abc`.
/// Anything that is not a Spotify URI passes through unchanged.
pub fn spotify_open_url(uri: &str) -> String {
    match uri.strip_prefix("spotify:") {
        Some(rest) => format!("https://open.spotify.com/{}", rest.replace(':', "/")),
        None => uri.to_string(),
    }
}

/// Terminal backend: opens the track on an external service
///
/// There is nothing to preload and `play` cannot fail locally, but nothing
/// guarantees the external service actually plays either. Seeks only move
/// the UI-side position; the opened resource is out of reach. This is the
/// last link of every fallback chain.
pub struct ExternalLinkAdapter {
    url: String,
    position: f64,
}

impl ExternalLinkAdapter {
    /// Create an adapter that opens `url`
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            position: 0.0,
        }
    }

    /// The deep-link URL
    pub fn url(&self) -> &str {
        &self.url
    }
}

impl BackendAdapter for ExternalLinkAdapter {
    fn kind(&self) -> BackendKind {
        BackendKind::ExternalLink
    }

    fn load(&mut self, _track: &Track, _host: &mut dyn MediaHost) -> Result<()> {
        // Nothing to preload
        Ok(())
    }

    fn play(&mut self, host: &mut dyn MediaHost) -> Result<()> {
        host.open_external(&self.url);
        Ok(())
    }

    fn pause(&mut self) {}

    fn seek(&mut self, seconds: f64) -> Result<()> {
        self.position = seconds;
        Ok(())
    }

    fn position(&self) -> f64 {
        self.position
    }

    fn teardown(&mut self) {}
}
