//! Scripted [`MusicProvider`] fake shared by the stage unit tests.

use async_trait::async_trait;
use bridge_traits::error::{BridgeError, Result as BridgeResult};
use bridge_traits::music::{LikedTrack, MusicProvider, NewPlaylist, Page, Playlist};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Mutex;

type PageHandler<T> = Box<dyn Fn(u32, u32) -> BridgeResult<Page<T>> + Send + Sync>;

/// One recorded call to a write endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum WriteCall {
    Replace { playlist_id: String, uris: Vec<String> },
    Append { playlist_id: String, uris: Vec<String> },
}

/// Configurable in-memory provider.
///
/// Listings are driven by handlers so tests can serve sliced fixtures or
/// script failures; every write is recorded in issue order.
pub(crate) struct FakeProvider {
    liked: PageHandler<LikedTrack>,
    playlists: PageHandler<Playlist>,
    created: Option<Playlist>,
    pub liked_calls: AtomicUsize,
    pub playlist_calls: AtomicUsize,
    pub create_calls: AtomicUsize,
    pub writes: Mutex<Vec<WriteCall>>,
    /// Write call index (0-based, across replace and append) that fails.
    pub fail_write_at: Option<usize>,
}

impl FakeProvider {
    pub fn new() -> Self {
        Self {
            liked: Box::new(|_, _| panic!("liked_page not scripted")),
            playlists: Box::new(|_, _| panic!("playlists_page not scripted")),
            created: None,
            liked_calls: AtomicUsize::new(0),
            playlist_calls: AtomicUsize::new(0),
            create_calls: AtomicUsize::new(0),
            writes: Mutex::new(Vec::new()),
            fail_write_at: None,
        }
    }

    /// Serve a fixed liked set, applying `server_limit` as the page size
    /// regardless of the one requested.
    pub fn with_liked_set(mut self, uris: Vec<Option<&str>>, server_limit: u32) -> Self {
        let tracks: Vec<LikedTrack> = uris
            .into_iter()
            .map(|uri| LikedTrack {
                uri: uri.map(String::from),
                added_at: None,
            })
            .collect();
        self.liked = Box::new(move |limit, offset| Ok(slice_page(&tracks, limit, offset, server_limit)));
        self
    }

    pub fn with_liked_fn(
        mut self,
        f: impl Fn(u32, u32) -> BridgeResult<Page<LikedTrack>> + Send + Sync + 'static,
    ) -> Self {
        self.liked = Box::new(f);
        self
    }

    /// Serve a fixed playlist listing with the same slicing behavior.
    pub fn with_playlists(mut self, playlists: Vec<(&str, &str)>, server_limit: u32) -> Self {
        let playlists: Vec<Playlist> = playlists
            .into_iter()
            .map(|(id, name)| Playlist {
                id: id.to_string(),
                name: name.to_string(),
            })
            .collect();
        self.playlists =
            Box::new(move |limit, offset| Ok(slice_page(&playlists, limit, offset, server_limit)));
        self
    }

    pub fn with_playlists_fn(
        mut self,
        f: impl Fn(u32, u32) -> BridgeResult<Page<Playlist>> + Send + Sync + 'static,
    ) -> Self {
        self.playlists = Box::new(f);
        self
    }

    /// Value `create_playlist` returns, standing in for the server-assigned
    /// identity.
    pub fn with_created(mut self, id: &str, name: &str) -> Self {
        self.created = Some(Playlist {
            id: id.to_string(),
            name: name.to_string(),
        });
        self
    }

    pub fn failing_write_at(mut self, index: usize) -> Self {
        self.fail_write_at = Some(index);
        self
    }

    pub fn recorded_writes(&self) -> Vec<WriteCall> {
        self.writes.lock().unwrap().clone()
    }

    fn record_write(&self, call: WriteCall) -> BridgeResult<()> {
        let mut writes = self.writes.lock().unwrap();
        if self.fail_write_at == Some(writes.len()) {
            return Err(BridgeError::Network("connection reset".to_string()));
        }
        writes.push(call);
        Ok(())
    }
}

fn slice_page<T: Clone>(items: &[T], limit: u32, offset: u32, server_limit: u32) -> Page<T> {
    let applied = server_limit.min(limit);
    let start = (offset as usize).min(items.len());
    let end = (start + applied as usize).min(items.len());

    Page {
        items: items[start..end].to_vec(),
        limit: applied,
        offset,
        total: items.len() as u32,
    }
}

#[async_trait]
impl MusicProvider for FakeProvider {
    async fn liked_page(&self, limit: u32, offset: u32) -> BridgeResult<Page<LikedTrack>> {
        self.liked_calls.fetch_add(1, Ordering::SeqCst);
        (self.liked)(limit, offset)
    }

    async fn playlists_page(&self, limit: u32, offset: u32) -> BridgeResult<Page<Playlist>> {
        self.playlist_calls.fetch_add(1, Ordering::SeqCst);
        (self.playlists)(limit, offset)
    }

    async fn create_playlist(&self, _new: NewPlaylist) -> BridgeResult<Playlist> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        Ok(self
            .created
            .clone()
            .expect("create_playlist not scripted"))
    }

    async fn replace_playlist_items(&self, playlist_id: &str, uris: &[String]) -> BridgeResult<()> {
        self.record_write(WriteCall::Replace {
            playlist_id: playlist_id.to_string(),
            uris: uris.to_vec(),
        })
    }

    async fn append_playlist_items(&self, playlist_id: &str, uris: &[String]) -> BridgeResult<()> {
        self.record_write(WriteCall::Append {
            playlist_id: playlist_id.to_string(),
            uris: uris.to_vec(),
        })
    }
}
