//! Embedded video player backend

use std::time::Duration;

use aurea_core::{ExternalRef, Track};
use tracing::debug;

use crate::backend::{BackendAdapter, BackendKind, SEEK_EPSILON};
use crate::error::{PlaybackError, Result};
use crate::host::{IntervalGuard, MediaHost, VideoEmbed};

/// Fallback video shown when a track id has no mapping (Lateralus)
///
/// The embed always resolves to something playable rather than failing
/// silently on an unrecognized id.
pub const DEFAULT_VIDEO_ID: &str = "Y7JG63IuaWs";

/// How often the embed is polled for its current time
///
/// The embedded player has no push-based time events, so the adapter asks
/// the host for a recurring timer and reads the position on every tick.
pub const POLL_INTERVAL: Duration = Duration::from_millis(250);

/// Static track-id to video-id mapping
pub fn lookup_video_id(track_id: &str) -> Option<&'static str> {
    match track_id {
        "lateralus" => Some("Y7JG63IuaWs"),
        "schism" => Some("80RtBeB61LE"),
        // Forty Six & 2
        "fibonacci" => Some("GIuZUCpm9hc"),
        _ => None,
    }
}

/// Video id for a track id, falling back to [`DEFAULT_VIDEO_ID`]
pub fn resolve_video_id(track_id: &str) -> &'static str {
    lookup_video_id(track_id).unwrap_or(DEFAULT_VIDEO_ID)
}

/// Full watch URL for a video id, for the open-externally affordance
pub fn watch_url(video_id: &str) -> String {
    format!("https://www.youtube.com/watch?v={video_id}")
}

/// Plays through an embedded video player instance
///
/// Created per track; `load` instantiates the embed and starts the poll
/// timer, `teardown` destroys both. Reusing a stale embed instance is
/// undefined behavior in the third-party API, so the adapter never keeps
/// one across loads.
pub struct YouTubeAdapter {
    video_id: String,
    embed: Option<Box<dyn VideoEmbed>>,
    poll_guard: Option<Box<dyn IntervalGuard>>,
}

impl YouTubeAdapter {
    /// Create an adapter for a resolved video id
    pub fn new(video_id: impl Into<String>) -> Self {
        Self {
            video_id: video_id.into(),
            embed: None,
            poll_guard: None,
        }
    }

    /// Create an adapter for a track, resolving its video id
    ///
    /// An explicit YouTube reference wins; otherwise the static mapping
    /// (with its default) decides.
    pub fn for_track(track: &Track) -> Self {
        let video_id = match &track.external_ref {
            Some(ExternalRef::YouTube(id)) => id.clone(),
            _ => resolve_video_id(&track.id).to_string(),
        };
        Self::new(video_id)
    }

    /// The resolved video id
    pub fn video_id(&self) -> &str {
        &self.video_id
    }

    /// Watch URL for this adapter's video
    pub fn watch_url(&self) -> String {
        watch_url(&self.video_id)
    }
}

impl BackendAdapter for YouTubeAdapter {
    fn kind(&self) -> BackendKind {
        BackendKind::YouTube
    }

    fn load(&mut self, _track: &Track, host: &mut dyn MediaHost) -> Result<()> {
        // A fresh embed per load; never reuse a stale instance
        self.teardown();

        let embed = host
            .create_video(&self.video_id)
            .map_err(|e| PlaybackError::Load(e.to_string()))?;
        self.embed = Some(embed);
        self.poll_guard = Some(host.start_interval(POLL_INTERVAL));
        Ok(())
    }

    fn play(&mut self, _host: &mut dyn MediaHost) -> Result<()> {
        let embed = self
            .embed
            .as_mut()
            .ok_or_else(|| PlaybackError::Play("embed not loaded".to_string()))?;
        embed.play().map_err(|e| PlaybackError::Play(e.to_string()))
    }

    fn pause(&mut self) {
        if let Some(embed) = self.embed.as_mut() {
            embed.pause();
        }
    }

    fn seek(&mut self, seconds: f64) -> Result<()> {
        let embed = self
            .embed
            .as_mut()
            .ok_or_else(|| PlaybackError::Seek("embed not loaded".to_string()))?;
        if (embed.position() - seconds).abs() > SEEK_EPSILON {
            embed
                .seek_to(seconds)
                .map_err(|e| PlaybackError::Seek(e.to_string()))?;
        } else {
            debug!(seconds, "seek suppressed, already at target");
        }
        Ok(())
    }

    fn position(&self) -> f64 {
        self.embed.as_ref().map_or(0.0, |e| e.position())
    }

    fn teardown(&mut self) {
        // Cancel the poll timer before the embed it reads from goes away
        self.poll_guard = None;
        self.embed = None;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use aurea_core::catalog;

    #[test]
    fn known_ids_resolve() {
        assert_eq!(lookup_video_id("lateralus"), Some("Y7JG63IuaWs"));
        assert_eq!(lookup_video_id("schism"), Some("80RtBeB61LE"));
        assert_eq!(lookup_video_id("fibonacci"), Some("GIuZUCpm9hc"));
        assert_eq!(lookup_video_id("no-such-song"), None);
    }

    #[test]
    fn unknown_ids_fall_back_to_default() {
        assert_eq!(resolve_video_id("no-such-song"), DEFAULT_VIDEO_ID);
    }

    #[test]
    fn explicit_reference_wins_over_mapping() {
        let mut track = catalog::track_by_id("schism").unwrap().clone();
        track.external_ref = Some(aurea_core::ExternalRef::YouTube("abc123".to_string()));

        let adapter = YouTubeAdapter::for_track(&track);
        assert_eq!(adapter.video_id(), "abc123");
    }

    #[test]
    fn catalog_track_resolves_by_id() {
        // Catalog tracks carry Spotify refs; the video id comes from the
        // static mapping
        let track = catalog::track_by_id("fibonacci").unwrap();
        let adapter = YouTubeAdapter::for_track(track);
        assert_eq!(adapter.video_id(), "GIuZUCpm9hc");
        assert_eq!(
            adapter.watch_url(),
            "https://www.youtube.com/watch?v=GIuZUCpm9hc"
        );
    }
}
