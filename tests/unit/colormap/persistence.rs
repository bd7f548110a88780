//! Tests for the versioned colormap artifact

#[cfg(test)]
mod tests {
    use colormosaic::MosaicError;
    use colormosaic::color::average::Color;
    use colormosaic::colormap::index::{ColorIndex, ColorSample};
    use colormosaic::colormap::persistence::{load_colormap, save_colormap};
    use colormosaic::io::configuration::{COLORMAP_FILE_NAME, COLORMAP_FORMAT, COLORMAP_VERSION};
    use std::fs;
    use std::path::Path;

    const CANDIDATES: [&str; 3] = ["a.jpg", "b.jpg", "c.jpg"];

    fn touch_candidates(dir: &Path) {
        for name in CANDIDATES {
            fs::write(dir.join(name), b"").unwrap();
        }
    }

    fn sample_index(dir: &Path) -> ColorIndex {
        ColorIndex::new(vec![
            ColorSample::new(Color::new(1, 2, 3), dir.join("b.jpg")),
            ColorSample::new(Color::new(250, 128, 0), dir.join("a.jpg")),
            ColorSample::new(Color::gray(9), dir.join("c.jpg")),
        ])
    }

    fn assert_corrupt(result: colormosaic::Result<Option<ColorIndex>>) {
        assert!(
            matches!(result, Err(MosaicError::CacheCorrupt { .. })),
            "expected CacheCorrupt, got {result:?}"
        );
    }

    // Tests saving then loading yields the identical index
    // Verified by sorting samples by path on load
    #[test]
    fn test_round_trip_preserves_order_and_values() {
        let dir = tempfile::tempdir().unwrap();
        let artifact = dir.path().join(COLORMAP_FILE_NAME);
        let index = sample_index(dir.path());
        touch_candidates(dir.path());

        save_colormap(&index, dir.path(), &artifact).unwrap();
        let loaded = load_colormap(dir.path(), &artifact).unwrap();

        assert_eq!(loaded, Some(index));
    }

    // Tests candidates are stored relative to the collection
    // Verified by writing absolute paths into the artifact
    #[test]
    fn test_entries_are_relative_to_collection() {
        let original = tempfile::tempdir().unwrap();
        let moved = tempfile::tempdir().unwrap();
        let artifact = original.path().join(COLORMAP_FILE_NAME);

        save_colormap(&sample_index(original.path()), original.path(), &artifact).unwrap();
        let text = fs::read_to_string(&artifact).unwrap();
        assert!(!text.contains(&*original.path().to_string_lossy()));

        touch_candidates(moved.path());
        let loaded = load_colormap(moved.path(), &artifact).unwrap().unwrap();
        assert_eq!(loaded, sample_index(moved.path()));
    }

    // Tests a missing artifact is reported as absent rather than corrupt
    // Verified by treating NotFound as a corrupt cache
    #[test]
    fn test_missing_artifact_is_none() {
        let dir = tempfile::tempdir().unwrap();

        let loaded = load_colormap(dir.path(), &dir.path().join(COLORMAP_FILE_NAME)).unwrap();

        assert!(loaded.is_none());
    }

    // Tests garbage bytes are rejected
    // Verified by returning an empty index on parse failure
    #[test]
    fn test_garbage_is_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        let artifact = dir.path().join(COLORMAP_FILE_NAME);
        fs::write(&artifact, b"\x80\x02]q\x00(K\x01").unwrap();

        assert_corrupt(load_colormap(dir.path(), &artifact));
    }

    // Tests a foreign format tag is rejected
    // Verified by skipping the format tag check
    #[test]
    fn test_wrong_format_tag_is_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        let artifact = dir.path().join(COLORMAP_FILE_NAME);
        let document = format!(
            r#"{{"format":"something-else","version":{COLORMAP_VERSION},"samples":[]}}"#
        );
        fs::write(&artifact, document).unwrap();

        assert_corrupt(load_colormap(dir.path(), &artifact));
    }

    // Tests another schema version is rejected
    // Verified by skipping the version check
    #[test]
    fn test_wrong_version_is_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        let artifact = dir.path().join(COLORMAP_FILE_NAME);
        let document = format!(
            r#"{{"format":"{COLORMAP_FORMAT}","version":{},"samples":[]}}"#,
            COLORMAP_VERSION + 1
        );
        fs::write(&artifact, document).unwrap();

        assert_corrupt(load_colormap(dir.path(), &artifact));
    }

    // Tests entries escaping the collection are rejected
    // Verified by joining any stored path onto the collection
    #[test]
    fn test_non_file_name_entry_is_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        let artifact = dir.path().join(COLORMAP_FILE_NAME);
        let document = format!(
            r#"{{"format":"{COLORMAP_FORMAT}","version":{COLORMAP_VERSION},"samples":[{{"color":[1,2,3],"file":"../outside.jpg"}}]}}"#
        );
        fs::write(&artifact, document).unwrap();

        assert_corrupt(load_colormap(dir.path(), &artifact));
    }

    // Tests out-of-range channel values are rejected
    // Verified by storing channels as u16
    #[test]
    fn test_out_of_range_channel_is_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        let artifact = dir.path().join(COLORMAP_FILE_NAME);
        let document = format!(
            r#"{{"format":"{COLORMAP_FORMAT}","version":{COLORMAP_VERSION},"samples":[{{"color":[1,2,555],"file":"a.jpg"}}]}}"#
        );
        fs::write(&artifact, document).unwrap();

        assert_corrupt(load_colormap(dir.path(), &artifact));
    }

    // Tests saving leaves no staging file behind
    // Verified by writing the artifact without renaming
    #[test]
    fn test_save_leaves_no_staging_file() {
        let dir = tempfile::tempdir().unwrap();
        let artifact = dir.path().join(COLORMAP_FILE_NAME);

        save_colormap(&sample_index(dir.path()), dir.path(), &artifact).unwrap();
        save_colormap(&sample_index(dir.path()), dir.path(), &artifact).unwrap();

        let names: Vec<_> = fs::read_dir(dir.path())
            .unwrap()
            .map(|entry| entry.unwrap().file_name())
            .collect();
        assert_eq!(names, vec![std::ffi::OsString::from(COLORMAP_FILE_NAME)]);
    }

    // Tests writers racing on one collection each publish a complete artifact
    // Verified by staging every write under one fixed file name
    #[test]
    fn test_concurrent_saves_do_not_collide() {
        let dir = tempfile::tempdir().unwrap();
        let artifact = dir.path().join(COLORMAP_FILE_NAME);
        let index = sample_index(dir.path());
        touch_candidates(dir.path());

        std::thread::scope(|scope| {
            let writers: Vec<_> = (0..8)
                .map(|_| scope.spawn(|| save_colormap(&index, dir.path(), &artifact)))
                .collect();
            for writer in writers {
                assert!(writer.join().unwrap().is_ok());
            }
        });

        assert_eq!(load_colormap(dir.path(), &artifact).unwrap(), Some(index));
    }

    // Tests an entry whose candidate was deleted invalidates the artifact
    // Verified by resolving entries without checking they exist
    #[test]
    fn test_vanished_candidate_is_corrupt() {
        let dir = tempfile::tempdir().unwrap();
        let artifact = dir.path().join(COLORMAP_FILE_NAME);
        touch_candidates(dir.path());
        save_colormap(&sample_index(dir.path()), dir.path(), &artifact).unwrap();

        fs::remove_file(dir.path().join("b.jpg")).unwrap();

        assert_corrupt(load_colormap(dir.path(), &artifact));
    }
}
