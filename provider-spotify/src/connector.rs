//! Spotify Web API connector implementation
//!
//! Implements the `MusicProvider` trait against the Spotify Web API.

use async_trait::async_trait;
use bridge_traits::error::Result;
use bridge_traits::http::{
    AuthFailureHook, HttpClient, HttpMethod, HttpRequest, HttpResponse,
};
use bridge_traits::music::{LikedTrack, MusicProvider, NewPlaylist, Page, Playlist};
use chrono::{DateTime, Utc};
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::sync::Arc;
use tracing::{debug, info, instrument};

use crate::error::SpotifyError;
use crate::types::{
    CreatePlaylistRequest, ModifyTracksRequest, SnapshotResponse, SpotifyPaging, SpotifyPlaylist,
    SpotifySavedTrack,
};

/// Spotify Web API base URL
const SPOTIFY_API_BASE: &str = "https://api.spotify.com/v1";

/// Spotify Web API connector
///
/// Implements `MusicProvider` for the Spotify Web API.
///
/// # Features
///
/// - Paginated saved-tracks and playlists listings
/// - Playlist creation with visibility flags
/// - Ordered playlist content writes (replace and append)
/// - Typed status classification: credential rejection, rate limiting, and
///   generic API errors are distinct error values
/// - Optional [`AuthFailureHook`] fired when the service rejects the token
///
/// Requests are issued exactly once; retry policy belongs to the caller
/// because the write endpoints are not idempotent.
///
/// # Example
///
/// ```ignore
/// use provider_spotify::SpotifyConnector;
/// use bridge_traits::music::MusicProvider;
///
/// let connector = SpotifyConnector::new(http_client, access_token);
/// let page = connector.liked_page(50, 0).await?;
/// ```
pub struct SpotifyConnector {
    /// HTTP client for API requests
    http_client: Arc<dyn HttpClient>,

    /// OAuth 2.0 access token
    access_token: String,

    /// API base URL, overridable for tests
    api_base: String,

    /// Hook fired when the service rejects the credential
    auth_hook: Option<Arc<dyn AuthFailureHook>>,
}

impl SpotifyConnector {
    /// Create a new Spotify connector
    ///
    /// # Arguments
    ///
    /// * `http_client` - HTTP client implementation
    /// * `access_token` - OAuth 2.0 access token with the `user-library-read`
    ///   and `playlist-modify-private` scopes
    pub fn new(http_client: Arc<dyn HttpClient>, access_token: impl Into<String>) -> Self {
        Self {
            http_client,
            access_token: access_token.into(),
            api_base: SPOTIFY_API_BASE.to_string(),
            auth_hook: None,
        }
    }

    /// Override the API base URL (primarily for tests)
    pub fn with_api_base(mut self, api_base: impl Into<String>) -> Self {
        self.api_base = api_base.into();
        self
    }

    /// Install a hook fired when the service rejects the credential
    pub fn with_auth_failure_hook(mut self, hook: Arc<dyn AuthFailureHook>) -> Self {
        self.auth_hook = Some(hook);
        self
    }

    /// Parse RFC 3339 timestamp to Unix timestamp
    fn parse_timestamp(rfc3339: &str) -> Option<i64> {
        DateTime::parse_from_rfc3339(rfc3339)
            .ok()
            .map(|dt| dt.with_timezone(&Utc).timestamp())
    }

    /// Convert a saved-track entry to the provider-agnostic model
    fn convert_saved_track(entry: SpotifySavedTrack) -> LikedTrack {
        LikedTrack {
            uri: entry.track.and_then(|t| t.uri),
            added_at: entry.added_at.as_deref().and_then(Self::parse_timestamp),
        }
    }

    /// Convert a playlist resource to the provider-agnostic model
    fn convert_playlist(playlist: SpotifyPlaylist) -> Playlist {
        Playlist {
            id: playlist.id,
            name: playlist.name,
        }
    }

    /// Convert a wire paging object, mapping each item
    fn convert_page<W, M>(paging: SpotifyPaging<W>, convert: impl Fn(W) -> M) -> Page<M> {
        Page {
            items: paging.items.into_iter().map(convert).collect(),
            limit: paging.limit,
            offset: paging.offset,
            total: paging.total,
        }
    }

    /// Build an authenticated GET request
    fn get_request(&self, path_and_query: &str) -> HttpRequest {
        HttpRequest::new(
            HttpMethod::Get,
            format!("{}{}", self.api_base, path_and_query),
        )
        .bearer_token(self.access_token.as_str())
        .header("Accept", "application/json")
    }

    /// Build an authenticated request with a JSON body
    fn json_request<T: Serialize>(
        &self,
        method: HttpMethod,
        path: &str,
        body: &T,
    ) -> Result<HttpRequest> {
        HttpRequest::new(method, format!("{}{}", self.api_base, path))
            .bearer_token(self.access_token.as_str())
            .header("Accept", "application/json")
            .json(body)
    }

    /// Execute a request and classify the response status
    ///
    /// 2xx responses pass through. 401 fires the auth hook (if installed) and
    /// becomes `AuthenticationFailed`; 429 becomes `RateLimited` with the
    /// `Retry-After` value; every other status becomes an `ApiError` carrying
    /// the response body.
    async fn execute_checked(&self, request: HttpRequest) -> Result<HttpResponse> {
        let response = self.http_client.execute(request).await?;

        if response.is_success() {
            return Ok(response);
        }

        match response.status {
            401 => {
                if let Some(hook) = &self.auth_hook {
                    hook.on_auth_failure();
                }
                Err(SpotifyError::AuthenticationFailed(
                    "access token rejected by service".to_string(),
                )
                .into())
            }
            429 => Err(SpotifyError::RateLimited {
                retry_after_seconds: retry_after_seconds(&response),
            }
            .into()),
            status => Err(SpotifyError::ApiError {
                status_code: status,
                message: String::from_utf8_lossy(&response.body).to_string(),
            }
            .into()),
        }
    }
}

/// Parse the `Retry-After` header (seconds form) of a 429 response
///
/// Header names are matched case-insensitively; transports differ in how
/// they normalize them. Missing or malformed values collapse to zero.
fn retry_after_seconds(response: &HttpResponse) -> u64 {
    response
        .headers
        .iter()
        .find(|(name, _)| name.eq_ignore_ascii_case("retry-after"))
        .and_then(|(_, value)| value.trim().parse().ok())
        .unwrap_or(0)
}

/// Parse a response body, naming the payload in the error
fn parse_json<T: DeserializeOwned>(response: &HttpResponse, what: &str) -> Result<T> {
    serde_json::from_slice(&response.body)
        .map_err(|e| SpotifyError::ParseError(format!("Failed to parse {}: {}", what, e)).into())
}

/// Log the write acknowledgement if the body carries one
///
/// The write endpoints usually return a `snapshot_id`; it is informational
/// only, so a missing or malformed body is never an error.
fn log_snapshot(response: &HttpResponse, operation: &str) {
    match serde_json::from_slice::<SnapshotResponse>(&response.body) {
        Ok(snapshot) => {
            debug!(snapshot_id = %snapshot.snapshot_id, operation = operation, "Write acknowledged")
        }
        Err(_) => debug!(operation = operation, "Write acknowledged without snapshot id"),
    }
}

#[async_trait]
impl MusicProvider for SpotifyConnector {
    #[instrument(skip(self))]
    async fn liked_page(&self, limit: u32, offset: u32) -> Result<Page<LikedTrack>> {
        let request = self.get_request(&format!("/me/tracks?limit={}&offset={}", limit, offset));
        let response = self.execute_checked(request).await?;

        let paging: SpotifyPaging<SpotifySavedTrack> = parse_json(&response, "saved tracks page")?;

        debug!(
            items = paging.items.len(),
            total = paging.total,
            "Fetched saved tracks page"
        );

        Ok(Self::convert_page(paging, Self::convert_saved_track))
    }

    #[instrument(skip(self))]
    async fn playlists_page(&self, limit: u32, offset: u32) -> Result<Page<Playlist>> {
        let request =
            self.get_request(&format!("/me/playlists?limit={}&offset={}", limit, offset));
        let response = self.execute_checked(request).await?;

        let paging: SpotifyPaging<SpotifyPlaylist> = parse_json(&response, "playlists page")?;

        debug!(
            items = paging.items.len(),
            total = paging.total,
            "Fetched playlists page"
        );

        Ok(Self::convert_page(paging, Self::convert_playlist))
    }

    #[instrument(skip(self, new), fields(name = %new.name))]
    async fn create_playlist(&self, new: NewPlaylist) -> Result<Playlist> {
        let body = CreatePlaylistRequest {
            name: new.name,
            description: new.description,
            public: new.public,
            collaborative: new.collaborative,
        };

        let request = self.json_request(HttpMethod::Post, "/me/playlists", &body)?;
        let response = self.execute_checked(request).await?;

        let playlist: SpotifyPlaylist = parse_json(&response, "created playlist")?;

        info!(playlist_id = %playlist.id, "Created playlist");

        Ok(Self::convert_playlist(playlist))
    }

    #[instrument(skip(self, uris), fields(playlist_id = %playlist_id, count = uris.len()))]
    async fn replace_playlist_items(&self, playlist_id: &str, uris: &[String]) -> Result<()> {
        let body = ModifyTracksRequest {
            uris: uris.to_vec(),
        };

        let request = self.json_request(
            HttpMethod::Put,
            &format!("/playlists/{}/tracks", playlist_id),
            &body,
        )?;
        let response = self.execute_checked(request).await?;

        log_snapshot(&response, "replace");

        Ok(())
    }

    #[instrument(skip(self, uris), fields(playlist_id = %playlist_id, count = uris.len()))]
    async fn append_playlist_items(&self, playlist_id: &str, uris: &[String]) -> Result<()> {
        let body = ModifyTracksRequest {
            uris: uris.to_vec(),
        };

        let request = self.json_request(
            HttpMethod::Post,
            &format!("/playlists/{}/tracks", playlist_id),
            &body,
        )?;
        let response = self.execute_checked(request).await?;

        log_snapshot(&response, "append");

        Ok(())
    }
}
