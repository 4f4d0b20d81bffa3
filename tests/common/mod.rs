#![allow(dead_code)]

/// Wrap `payload` in a box with a 32-bit size.
pub fn boxed(box_type: &[u8; 4], payload: &[u8]) -> Vec<u8> {
    let mut out = Vec::with_capacity(payload.len() + 8);
    out.extend_from_slice(&((payload.len() + 8) as u32).to_be_bytes());
    out.extend_from_slice(box_type);
    out.extend_from_slice(payload);
    out
}

/// Version 0 mvhd payload, padded to the full 100 bytes.
pub fn mvhd_v0_payload(timescale: u32, duration: u32) -> Vec<u8> {
    let mut p = vec![0u8, 0, 0, 0];
    p.extend_from_slice(&0xd0c0_ffeeu32.to_be_bytes()); // creation
    p.extend_from_slice(&0xd0c0_fff0u32.to_be_bytes()); // modification
    p.extend_from_slice(&timescale.to_be_bytes());
    p.extend_from_slice(&duration.to_be_bytes());
    p.resize(100, 0);
    p
}

/// Version 1 mvhd payload, padded to the full 112 bytes.
pub fn mvhd_v1_payload(timescale: u32, duration: u64) -> Vec<u8> {
    let mut p = vec![1u8, 0, 0, 0];
    p.extend_from_slice(&0xd0c0_ffeeu64.to_be_bytes());
    p.extend_from_slice(&0xd0c0_fff0u64.to_be_bytes());
    p.extend_from_slice(&timescale.to_be_bytes());
    p.extend_from_slice(&duration.to_be_bytes());
    p.resize(112, 0);
    p
}

pub fn mvhd_v0_box(timescale: u32, duration: u32) -> Vec<u8> {
    boxed(b"mvhd", &mvhd_v0_payload(timescale, duration))
}

pub fn mvhd_v1_box(timescale: u32, duration: u64) -> Vec<u8> {
    boxed(b"mvhd", &mvhd_v1_payload(timescale, duration))
}

pub fn ftyp() -> Vec<u8> {
    boxed(b"ftyp", b"isom\0\0\x02\0isomiso2avc1mp41")
}

/// ftyp, moov holding `moov_children`, then a small mdat.
pub fn movie(moov_children: &[Vec<u8>]) -> Vec<u8> {
    let mut file = ftyp();
    file.extend(boxed(b"moov", &moov_children.concat()));
    file.extend(boxed(b"mdat", &[0xaa; 512]));
    file
}
