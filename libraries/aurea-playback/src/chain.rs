//! Fallback chain
//!
//! Orders the backends to try for a track and owns the escalation
//! bookkeeping. The chain is one-directional: each route is attempted at
//! most once, and once the last route has failed the chain is exhausted
//! for the rest of the track's lifetime.

use aurea_core::{ExternalRef, Track};
use serde::{Deserialize, Serialize};
use url::Url;

use crate::backend::{lookup_video_id, spotify_open_url, BackendKind};

/// Derive the substitute audio URL for a primary source
///
/// The one rewrite the player knows: plain `s3.amazonaws.com` hosts are
/// retried against the region-qualified `s3.us-east-1.amazonaws.com`
/// endpoint. Any other host derives nothing.
pub fn fallback_source_url(primary: &str) -> Option<String> {
    let mut url = Url::parse(primary).ok()?;
    let host = url.host_str()?;

    let rewritten = if host == "s3.amazonaws.com" {
        "s3.us-east-1.amazonaws.com".to_string()
    } else if let Some(bucket) = host.strip_suffix(".s3.amazonaws.com") {
        format!("{bucket}.s3.us-east-1.amazonaws.com")
    } else {
        return None;
    };

    url.set_host(Some(&rewritten)).ok()?;
    Some(url.into())
}

/// How the terminal external backend reaches the track
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExternalRoute {
    /// Embedded video player bound to a resolved video id
    Embed {
        /// Resolved video id
        video_id: String,
    },

    /// Deep link opened in a new browsing context
    Link {
        /// Openable URL
        url: String,
    },
}

/// One link of the fallback chain
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum BackendRoute {
    /// Native media element on the track's own audio URL
    NativePrimary {
        /// Primary audio URL
        url: String,
    },

    /// Native media element on the rewrite-derived substitute URL
    NativeFallback {
        /// Derived audio URL, distinct from the primary
        url: String,
    },

    /// Terminal external backend; no further escalation past this
    External(ExternalRoute),
}

impl BackendRoute {
    /// The backend kind this route activates
    pub fn kind(&self) -> BackendKind {
        match self {
            Self::NativePrimary { .. } | Self::NativeFallback { .. } => BackendKind::Native,
            Self::External(ExternalRoute::Embed { .. }) => BackendKind::YouTube,
            Self::External(ExternalRoute::Link { .. }) => BackendKind::ExternalLink,
        }
    }
}

/// The ordered routes for one track, with the escalation cursor
///
/// Recomputed whenever the track changes. `attempt` indexes the route
/// currently (or last) active and only ever grows.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FallbackChain {
    routes: Vec<BackendRoute>,
    attempt: usize,
}

impl FallbackChain {
    /// Build the route plan for a track
    ///
    /// Order: native on the primary URL, native on the derived substitute
    /// URL (only when it differs), then the external backend (embedded
    /// video when a mapping exists, deep link otherwise). A track with
    /// neither an audio URL nor an external reference gets an empty,
    /// immediately exhausted chain.
    pub fn for_track(track: &Track) -> Self {
        let mut routes = Vec::new();

        if let Some(primary) = &track.primary_audio_url {
            routes.push(BackendRoute::NativePrimary {
                url: primary.clone(),
            });

            if let Some(fallback) = fallback_source_url(primary) {
                if fallback != *primary {
                    routes.push(BackendRoute::NativeFallback { url: fallback });
                }
            }
        }

        if let Some(route) = external_route(track) {
            routes.push(BackendRoute::External(route));
        }

        Self { routes, attempt: 0 }
    }

    /// An empty chain with nothing to try
    pub fn empty() -> Self {
        Self {
            routes: Vec::new(),
            attempt: 0,
        }
    }

    /// The route the cursor points at, unless exhausted
    pub fn current(&self) -> Option<&BackendRoute> {
        self.routes.get(self.attempt)
    }

    /// Move the cursor to the next route; `None` means exhausted
    pub fn advance(&mut self) -> Option<&BackendRoute> {
        if self.attempt < self.routes.len() {
            self.attempt += 1;
        }
        self.current()
    }

    /// Jump the cursor forward to the external route, if one lies ahead
    ///
    /// The chain stays one-directional: an external route already behind
    /// the cursor is not revisited.
    pub fn jump_to_external(&mut self) -> Option<&BackendRoute> {
        let target = self
            .routes
            .iter()
            .position(|r| matches!(r, BackendRoute::External(_)))?;
        if target < self.attempt {
            return None;
        }
        self.attempt = target;
        self.current()
    }

    /// Zero-based index of the active route; grows monotonically
    pub fn attempt(&self) -> usize {
        self.attempt
    }

    /// Whether any untried route remains after the current one
    pub fn has_next(&self) -> bool {
        self.attempt + 1 < self.routes.len()
    }

    /// Whether every route has been consumed
    pub fn is_exhausted(&self) -> bool {
        self.attempt >= self.routes.len()
    }

    /// Number of routes in the plan
    pub fn len(&self) -> usize {
        self.routes.len()
    }

    /// Whether the plan has no routes at all
    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

/// Resolve the external route for a track, if it has one
fn external_route(track: &Track) -> Option<ExternalRoute> {
    match &track.external_ref {
        None => None,
        Some(ExternalRef::YouTube(id)) => Some(ExternalRoute::Embed {
            video_id: id.clone(),
        }),
        Some(ExternalRef::Spotify(uri)) => match lookup_video_id(&track.id) {
            // A known video mapping beats the deep link: the embed can
            // actually play inline
            Some(video_id) => Some(ExternalRoute::Embed {
                video_id: video_id.to_string(),
            }),
            None => Some(ExternalRoute::Link {
                url: spotify_open_url(uri),
            }),
        },
    }
}
