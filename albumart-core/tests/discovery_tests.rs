// albumart-core/tests/discovery_tests.rs

use albumart_core::config::CoverConfig;
use albumart_core::discovery::{candidate_names, combine_names, find_common_art};
use std::fs::{self, File};
use tempfile::tempdir;

#[test]
fn test_find_common_art_follows_candidate_order() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let album = dir.path();

    File::create(album.join("folder.png"))?;
    File::create(album.join("front.jpg"))?;
    File::create(album.join("cover.png"))?;

    let config = CoverConfig::default();
    let found = find_common_art(album, &candidate_names(&config)).expect("art should be found");

    // "cover" comes before "folder" and "front" in the base name list.
    assert_eq!(found.path, album.join("cover.png"));
    assert!(found.common_name);

    dir.close()?;
    Ok(())
}

#[test]
fn test_resized_cover_takes_priority() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let album = dir.path();

    File::create(album.join("cover.jpg"))?;
    File::create(album.join("cover-resized.jpg"))?;

    let found = find_common_art(album, &candidate_names(&CoverConfig::default()))
        .expect("art should be found");
    assert_eq!(found.path, album.join("cover-resized.jpg"));

    dir.close()?;
    Ok(())
}

#[test]
fn test_subdirectories_are_not_searched() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let album = dir.path();

    fs::create_dir(album.join("scans"))?;
    File::create(album.join("scans").join("cover.jpg"))?;
    File::create(album.join("notes.txt"))?;

    let candidates = combine_names(&["cover", "folder"], &["jpg", "png"]);
    assert!(find_common_art(album, &candidates).is_none());

    dir.close()?;
    Ok(())
}

#[test]
fn test_directory_named_like_art_is_ignored() -> Result<(), Box<dyn std::error::Error>> {
    let dir = tempdir()?;
    let album = dir.path();

    fs::create_dir(album.join("cover.jpg"))?;

    let candidates = combine_names(&["cover"], &["jpg"]);
    assert!(find_common_art(album, &candidates).is_none());

    dir.close()?;
    Ok(())
}
