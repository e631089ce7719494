//! Integration tests for the liked-mirror workflow
//!
//! These tests drive the full coordinator against a scripted provider and
//! verify:
//! - The reference scenario (230 liked tracks, absent destination)
//! - The empty liked set purging the destination
//! - Idempotent back-to-back runs
//! - Resolver fallback using the server-returned identity
//! - Authentication failures aborting the run
//! - Partial-write context after a mid-sequence append failure

use async_trait::async_trait;
use bridge_traits::error::{BridgeError, Result as BridgeResult};
use bridge_traits::music::{LikedTrack, MusicProvider, NewPlaylist, Page, Playlist};
use core_sync::{MirrorConfig, MirrorCoordinator, SyncError};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

// ============================================================================
// Scripted provider
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq)]
enum WriteCall {
    Replace { playlist_id: String, uris: Vec<String> },
    Append { playlist_id: String, uris: Vec<String> },
}

/// In-memory service: a liked set, a playlist listing, a scripted creation
/// response, and a log of every write in issue order.
struct ScriptedService {
    liked: Vec<LikedTrack>,
    playlists: Vec<Playlist>,
    created: Option<Playlist>,
    page_limit: u32,
    reject_credentials: bool,
    fail_write_at: Option<usize>,
    liked_pages_served: AtomicUsize,
    creates: AtomicUsize,
    writes: Mutex<Vec<WriteCall>>,
}

impl ScriptedService {
    fn new() -> Self {
        Self {
            liked: Vec::new(),
            playlists: Vec::new(),
            created: None,
            page_limit: 50,
            reject_credentials: false,
            fail_write_at: None,
            liked_pages_served: AtomicUsize::new(0),
            creates: AtomicUsize::new(0),
            writes: Mutex::new(Vec::new()),
        }
    }

    fn with_liked(mut self, count: usize) -> Self {
        self.liked = (0..count)
            .map(|i| LikedTrack {
                uri: Some(format!("spotify:track:{:04}", i)),
                added_at: Some(1_700_000_000 + i as i64),
            })
            .collect();
        self
    }

    fn with_playlist(mut self, id: &str, name: &str) -> Self {
        self.playlists.push(Playlist {
            id: id.to_string(),
            name: name.to_string(),
        });
        self
    }

    fn with_created(mut self, id: &str, name: &str) -> Self {
        self.created = Some(Playlist {
            id: id.to_string(),
            name: name.to_string(),
        });
        self
    }

    fn rejecting_credentials(mut self) -> Self {
        self.reject_credentials = true;
        self
    }

    fn failing_write_at(mut self, index: usize) -> Self {
        self.fail_write_at = Some(index);
        self
    }

    fn recorded_writes(&self) -> Vec<WriteCall> {
        self.writes.lock().unwrap().clone()
    }

    /// Flattened contents of the destination as the write log implies them.
    fn implied_contents(&self) -> Vec<String> {
        self.recorded_writes()
            .iter()
            .fold(Vec::new(), |mut contents, call| match call {
                WriteCall::Replace { uris, .. } => uris.clone(),
                WriteCall::Append { uris, .. } => {
                    contents.extend(uris.clone());
                    contents
                }
            })
    }

    fn page_of<T: Clone>(&self, items: &[T], limit: u32, offset: u32) -> Page<T> {
        let applied = self.page_limit.min(limit);
        let start = (offset as usize).min(items.len());
        let end = (start + applied as usize).min(items.len());

        Page {
            items: items[start..end].to_vec(),
            limit: applied,
            offset,
            total: items.len() as u32,
        }
    }

    fn check_credentials(&self) -> BridgeResult<()> {
        if self.reject_credentials {
            return Err(BridgeError::Unauthorized(
                "access token expired".to_string(),
            ));
        }
        Ok(())
    }

    fn record_write(&self, call: WriteCall) -> BridgeResult<()> {
        self.check_credentials()?;
        let mut writes = self.writes.lock().unwrap();
        if self.fail_write_at == Some(writes.len()) {
            return Err(BridgeError::Network("connection reset".to_string()));
        }
        writes.push(call);
        Ok(())
    }
}

#[async_trait]
impl MusicProvider for ScriptedService {
    async fn liked_page(&self, limit: u32, offset: u32) -> BridgeResult<Page<LikedTrack>> {
        self.check_credentials()?;
        self.liked_pages_served.fetch_add(1, Ordering::SeqCst);
        Ok(self.page_of(&self.liked, limit, offset))
    }

    async fn playlists_page(&self, limit: u32, offset: u32) -> BridgeResult<Page<Playlist>> {
        self.check_credentials()?;
        Ok(self.page_of(&self.playlists, limit, offset))
    }

    async fn create_playlist(&self, new: NewPlaylist) -> BridgeResult<Playlist> {
        self.check_credentials()?;
        self.creates.fetch_add(1, Ordering::SeqCst);
        Ok(self.created.clone().unwrap_or(Playlist {
            id: "generated".to_string(),
            name: new.name,
        }))
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

fn coordinator(service: &Arc<ScriptedService>) -> MirrorCoordinator {
    MirrorCoordinator::new(MirrorConfig::default(), service.clone())
}

// ============================================================================
// Scenarios
// ============================================================================

#[tokio::test]
async fn test_full_scenario_230_tracks_absent_destination() {
    let service = Arc::new(
        ScriptedService::new()
            .with_liked(230)
            .with_playlist("pl1", "Road Trip")
            .with_created("created_id", "Liked Mirror"),
    );

    let summary = coordinator(&service).sync().await.unwrap();

    // 5 fetch pages of 50, 50, 50, 50, 30.
    assert_eq!(service.liked_pages_served.load(Ordering::SeqCst), 5);
    assert_eq!(service.creates.load(Ordering::SeqCst), 1);

    // 1 replace of 100, then 2 appends of 100 and 30.
    let writes = service.recorded_writes();
    assert_eq!(writes.len(), 3);
    assert!(
        matches!(&writes[0], WriteCall::Replace { playlist_id, uris } if playlist_id == "created_id" && uris.len() == 100)
    );
    assert!(matches!(&writes[1], WriteCall::Append { uris, .. } if uris.len() == 100));
    assert!(matches!(&writes[2], WriteCall::Append { uris, .. } if uris.len() == 30));

    assert_eq!(summary.playlist_id, "created_id");
    assert_eq!(summary.playlist_name, "Liked Mirror");
    assert_eq!(summary.track_count, 230);

    // The write log reconstructs the liked set exactly, in order.
    let expected: Vec<String> = (0..230).map(|i| format!("spotify:track:{:04}", i)).collect();
    assert_eq!(service.implied_contents(), expected);
}

#[tokio::test]
async fn test_empty_liked_set_purges_with_single_replace() {
    let service = Arc::new(
        ScriptedService::new().with_playlist("pl2", "Liked Mirror"),
    );

    let summary = coordinator(&service).sync().await.unwrap();

    assert_eq!(summary.track_count, 0);
    assert_eq!(
        service.recorded_writes(),
        vec![WriteCall::Replace {
            playlist_id: "pl2".to_string(),
            uris: vec![],
        }]
    );
}

#[tokio::test]
async fn test_back_to_back_runs_are_idempotent() {
    let service = Arc::new(
        ScriptedService::new()
            .with_liked(130)
            .with_playlist("pl2", "Liked Mirror"),
    );

    let first = coordinator(&service).sync().await.unwrap();
    let writes_after_first = service.recorded_writes();

    let second = coordinator(&service).sync().await.unwrap();
    let writes_after_second = service.recorded_writes();

    assert_eq!(first, second);

    // The second run issued the same write sequence again.
    assert_eq!(writes_after_second.len(), writes_after_first.len() * 2);
    assert_eq!(
        &writes_after_second[writes_after_first.len()..],
        &writes_after_first[..]
    );
}

#[tokio::test]
async fn test_resolver_fallback_uses_server_echoed_identity() {
    // The service normalizes the requested name on creation; the replace
    // call and the summary must carry the echoed values.
    let service = Arc::new(
        ScriptedService::new()
            .with_liked(5)
            .with_created("server_id", "Liked Mirror (2)"),
    );

    let summary = coordinator(&service).sync().await.unwrap();

    assert_eq!(summary.playlist_id, "server_id");
    assert_eq!(summary.playlist_name, "Liked Mirror (2)");

    let writes = service.recorded_writes();
    assert!(
        matches!(&writes[0], WriteCall::Replace { playlist_id, .. } if playlist_id == "server_id")
    );
}

#[tokio::test]
async fn test_rejected_credentials_abort_as_authentication_error() {
    let service = Arc::new(ScriptedService::new().with_liked(10).rejecting_credentials());

    let err = coordinator(&service).sync().await.unwrap_err();

    assert!(matches!(err, SyncError::Authentication(_)));
    assert_eq!(service.creates.load(Ordering::SeqCst), 0);
    assert!(service.recorded_writes().is_empty());
}

#[tokio::test]
async fn test_append_failure_surfaces_partial_write_context() {
    // 350 tracks → 4 chunks; the write at index 2 (second append) fails.
    let service = Arc::new(
        ScriptedService::new()
            .with_liked(350)
            .with_playlist("pl2", "Liked Mirror")
            .failing_write_at(2),
    );

    let err = coordinator(&service).sync().await.unwrap_err();

    match err {
        SyncError::PartialWrite {
            failed_chunk,
            total_chunks,
            tracks_applied,
            ..
        } => {
            assert_eq!(failed_chunk, 2);
            assert_eq!(total_chunks, 4);
            assert_eq!(tracks_applied, 200);
        }
        other => panic!("expected PartialWrite, got {:?}", other),
    }

    // The destination holds chunks 0 and 1; a re-run starts from a clean
    // replace, so recovery is just running the sync again.
    assert_eq!(service.recorded_writes().len(), 2);
}
