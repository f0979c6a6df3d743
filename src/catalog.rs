// src/catalog.rs
// Catalog loader - enumerates playable tracks from the music directory

use std::path::{Path, PathBuf};

/// Audio extension accepted by the catalog (matched case-insensitively).
pub const AUDIO_EXT: &str = "mp3";

/// List every playable track under `dir`, sorted by full path ascending.
///
/// Pure function of the directory contents at call time. A missing or
/// unreadable directory yields an empty list, never an error; caching the
/// result is the session manager's job.
pub fn list_tracks(dir: &Path) -> Vec<PathBuf> {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return Vec::new();
    };

    let mut tracks: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok())
        .map(|entry| entry.path())
        .filter(|path| path.is_file() && has_audio_ext(path))
        .collect();
    tracks.sort();
    tracks
}

fn has_audio_ext(path: &Path) -> bool {
    path.extension()
        .map(|ext| ext.eq_ignore_ascii_case(AUDIO_EXT))
        .unwrap_or(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(dir: &Path, name: &str) {
        fs::write(dir.join(name), b"").unwrap();
    }

    #[test]
    fn test_lists_only_audio_files_sorted() {
        let tmp = tempfile::tempdir().unwrap();
        touch(tmp.path(), "b.mp3");
        touch(tmp.path(), "a.mp3");
        touch(tmp.path(), "cover.jpg");
        touch(tmp.path(), "notes.txt");

        let tracks = list_tracks(tmp.path());
        assert_eq!(tracks.len(), 2);
        assert_eq!(tracks[0].file_name().unwrap(), "a.mp3");
        assert_eq!(tracks[1].file_name().unwrap(), "b.mp3");
    }

    #[test]
    fn test_extension_match_is_case_insensitive() {
        let tmp = tempfile::tempdir().unwrap();
        touch(tmp.path(), "loud.MP3");
        touch(tmp.path(), "quiet.Mp3");

        assert_eq!(list_tracks(tmp.path()).len(), 2);
    }

    #[test]
    fn test_missing_directory_is_empty_not_error() {
        let tracks = list_tracks(Path::new("/nonexistent/music/dir"));
        assert!(tracks.is_empty());
    }

    #[test]
    fn test_subdirectories_are_skipped() {
        let tmp = tempfile::tempdir().unwrap();
        touch(tmp.path(), "song.mp3");
        fs::create_dir(tmp.path().join("album.mp3")).unwrap();

        let tracks = list_tracks(tmp.path());
        assert_eq!(tracks.len(), 1);
        assert!(tracks[0].is_file());
    }

    #[test]
    fn test_idempotent_across_calls() {
        let tmp = tempfile::tempdir().unwrap();
        touch(tmp.path(), "one.mp3");
        touch(tmp.path(), "two.mp3");

        assert_eq!(list_tracks(tmp.path()), list_tracks(tmp.path()));
    }
}
