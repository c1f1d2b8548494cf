
use edid2info_core::{BASE_LEN, FIXED_HEADER, FormatError, RawEdid, Segment};
use test_helpers::*;

fn raw() -> RawEdid {
    RawEdid::new(canonical_edid()).expect("canonical fixture is valid")
}

#[test]
fn fixed_header_window_matches_magic() {
    let raw = raw();
    assert_eq!(raw.segment(Segment::FixedHeader), FIXED_HEADER);
    assert!(raw.has_valid_header());
}

#[test]
fn corrupted_header_is_detected() {
    let mut edid = canonical_edid();
    edid[0] = 0xAA;
    let raw = RawEdid::new(edid).unwrap();
    assert!(!raw.has_valid_header());
}

#[test]
fn segment_windows_match_offset_table() {
    let edid = canonical_edid();
    let raw = RawEdid::new(edid.clone()).unwrap();
    assert_eq!(raw.segment(Segment::ManufacturerId), &edid[8..10]);
    assert_eq!(raw.segment(Segment::ProductCode), &edid[10..12]);
    assert_eq!(raw.segment(Segment::SerialNumber), &edid[12..16]);
    assert_eq!(raw.segment(Segment::ManufactureWeek), &edid[16..17]);
    assert_eq!(raw.segment(Segment::ManufactureYear), &edid[17..18]);
    assert_eq!(raw.segment(Segment::EdidVersion), &edid[18..19]);
    assert_eq!(raw.segment(Segment::EdidRevision), &edid[19..20]);
    assert_eq!(raw.segment(Segment::HorizontalSize), &edid[21..22]);
    assert_eq!(raw.segment(Segment::VerticalSize), &edid[22..23]);
    assert_eq!(raw.segment(Segment::Descriptor1), &edid[54..72]);
    assert_eq!(raw.segment(Segment::Descriptor2), &edid[72..90]);
    assert_eq!(raw.segment(Segment::Descriptor3), &edid[90..108]);
    assert_eq!(raw.segment(Segment::Descriptor4), &edid[108..126]);
}

#[test]
fn descriptor_segments_are_eighteen_bytes_each() {
    for segment in Segment::DESCRIPTORS {
        let (_, length) = segment.span();
        assert_eq!(length, 18);
    }
}

#[test]
fn short_buffer_is_rejected_at_construction() {
    let err = RawEdid::new(vec![0u8; 64]).unwrap_err();
    assert_eq!(
        err,
        FormatError::OutOfRange {
            offset: 0,
            length: BASE_LEN,
            buffer_len: 64,
        }
    );
}

#[test]
fn minimal_base_block_is_accepted() {
    assert!(RawEdid::new(vec![0u8; BASE_LEN]).is_ok());
}

#[test]
fn get_returns_requested_range() {
    let raw = raw();
    assert_eq!(raw.get(0, 8).unwrap(), FIXED_HEADER);
    assert_eq!(raw.get(126, 2).unwrap(), &[0, 0]);
}

#[test]
fn get_past_end_is_out_of_range() {
    let raw = raw();
    let err = raw.get(120, 20).unwrap_err();
    assert_eq!(
        err,
        FormatError::OutOfRange {
            offset: 120,
            length: 20,
            buffer_len: 128,
        }
    );
}

#[test]
fn get_with_overflowing_span_is_out_of_range() {
    let raw = raw();
    assert!(matches!(
        raw.get(usize::MAX, 2),
        Err(FormatError::OutOfRange { .. })
    ));
}

#[test]
fn stable_id_depends_only_on_content() {
    let a = RawEdid::new(canonical_edid()).unwrap();
    let b = RawEdid::new(canonical_edid()).unwrap();
    assert_eq!(a.stable_id(), b.stable_id());

    let mut other = canonical_edid();
    other[16] = 1;
    let c = RawEdid::new(other).unwrap();
    assert_ne!(a.stable_id(), c.stable_id());
}

#[test]
fn equality_is_byte_equality() {
    let a = RawEdid::new(canonical_edid()).unwrap();
    let b = RawEdid::new(canonical_edid()).unwrap();
    assert_eq!(a, b);

    let mut other = canonical_edid();
    other[127] = 0x55;
    assert_ne!(a, RawEdid::new(other).unwrap());
}
