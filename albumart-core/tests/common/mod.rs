// albumart-core/tests/common/mod.rs
//
// Shared fixtures for the integration tests.

use ogg_pager::{CONTAINS_FIRST_PAGE_OF_BITSTREAM, CONTAINS_LAST_PAGE_OF_BITSTREAM, paginate};
use std::error::Error;
use std::fs;
use std::path::Path;

const SAMPLE_RATE: u32 = 44_100;

fn vorbis_packet(kind: u8, body: &[u8]) -> Vec<u8> {
    let mut packet = vec![kind];
    packet.extend_from_slice(b"vorbis");
    packet.extend_from_slice(body);
    packet
}

/// Writes a minimal Ogg Vorbis stream: identification, comment and setup
/// header packets followed by one page of (silent, undecodable) audio.
/// Enough for tag readers and writers, not for a decoder.
pub fn write_vorbis_track(path: &Path) -> Result<(), Box<dyn Error>> {
    let mut ident = Vec::new();
    ident.extend_from_slice(&0u32.to_le_bytes()); // version
    ident.push(2); // channels
    ident.extend_from_slice(&SAMPLE_RATE.to_le_bytes());
    ident.extend_from_slice(&0i32.to_le_bytes()); // bitrate max
    ident.extend_from_slice(&128_000i32.to_le_bytes()); // bitrate nominal
    ident.extend_from_slice(&0i32.to_le_bytes()); // bitrate min
    ident.push(0xB8); // blocksizes 256 / 2048
    ident.push(1); // framing
    let ident = vorbis_packet(1, &ident);

    let vendor = b"albumart fixture";
    let mut comment = Vec::new();
    comment.extend_from_slice(&(vendor.len() as u32).to_le_bytes());
    comment.extend_from_slice(vendor);
    comment.extend_from_slice(&0u32.to_le_bytes()); // no comments
    comment.push(1); // framing
    let comment = vorbis_packet(3, &comment);

    let setup = vorbis_packet(5, &[0u8; 16]);
    let audio = vec![0u8; 64];

    // One packet per page; the final page carries the stream's sample count.
    let mut pages = paginate(
        [ident.as_slice(), comment.as_slice(), setup.as_slice(), audio.as_slice()],
        0x5EED_0001,
        0,
        CONTAINS_FIRST_PAGE_OF_BITSTREAM | CONTAINS_LAST_PAGE_OF_BITSTREAM,
    )?;
    if let Some(last) = pages.last_mut() {
        last.header_mut().abgp = u64::from(SAMPLE_RATE);
    }

    let mut bytes = Vec::new();
    for page in &mut pages {
        page.gen_crc();
        bytes.extend_from_slice(&page.as_bytes());
    }
    fs::write(path, bytes)?;
    Ok(())
}
