
use std::sync::atomic::Ordering;

use edid2info::{Monitor, MonitorError};
use edid2info_core::{FormatError, Geometry, PowerStatus, SourceError};
use test_helpers::*;

fn probe(source: FakeSource) -> Monitor {
    Monitor::probe(Box::new(source)).expect("fixture EDID probes cleanly")
}

#[test]
fn descriptor_texts_are_extracted() {
    let monitor = probe(FakeSource::new(canonical_edid(), "HDMI-A-1"));
    assert_eq!(monitor.name(), "TOSHIBA-TV");
    assert_eq!(monitor.serial_no(), "SN-12345");
    assert_eq!(monitor.text(), "hello");
}

#[test]
fn missing_descriptors_read_as_empty_strings() {
    let mut edid = canonical_edid();
    // blank out every descriptor block
    for block in [54usize, 72, 90, 108] {
        for b in &mut edid[block..block + 18] {
            *b = 0;
        }
    }
    let monitor = probe(FakeSource::new(edid, "HDMI-A-1"));
    assert_eq!(monitor.name(), "");
    assert_eq!(monitor.serial_no(), "");
    assert_eq!(monitor.text(), "");
}

#[test]
fn scalar_fields_come_from_the_edid() {
    let monitor = probe(FakeSource::new(canonical_edid(), "eDP-1"));
    assert_eq!(monitor.manufacturer_id(), "TSB");
    assert_eq!(monitor.manufacture_year(), 2009);
    assert_eq!(monitor.manufacture_week(), 255);
    assert_eq!(monitor.edid_version(), 1);
    assert_eq!(monitor.edid_revision(), 3);
    assert_eq!(monitor.width_in_cm(), 89);
    assert_eq!(monitor.height_in_cm(), 50);
    assert_eq!(monitor.product_code(), [0x9E, 0x21]);
    assert_eq!(monitor.serial_number_raw(), [0x01, 0x01, 0x01, 0x01]);
}

#[test]
fn platform_fields_come_from_the_source() {
    let monitor = probe(FakeSource::new(canonical_edid(), "DP-2"));
    assert_eq!(monitor.output_name(), "DP-2");
    assert_eq!(monitor.width_in_pixels(), 1920);
    assert_eq!(monitor.height_in_pixels(), 1080);
    assert_eq!(monitor.status(), PowerStatus::On);
    assert_eq!(
        monitor.geometry(),
        Geometry {
            x: 0,
            y: 120,
            width: 1920,
            height: 1080,
        }
    );
}

#[test]
fn platform_failures_degrade_to_defaults() {
    let monitor = probe(FakeSource::failing(canonical_edid(), "DP-2"));
    assert_eq!(monitor.output_name(), "");
    assert_eq!(monitor.width_in_pixels(), 0);
    assert_eq!(monitor.height_in_pixels(), 0);
    assert_eq!(monitor.geometry(), Geometry::default());
    assert_eq!(monitor.status(), PowerStatus::Off);
    // EDID-derived values are unaffected
    assert_eq!(monitor.name(), "TOSHIBA-TV");
}

#[test]
fn platform_fields_are_fetched_exactly_once() {
    let source = FakeSource::new(canonical_edid(), "eDP-1");
    let calls = source.resolution_calls.clone();
    let monitor = probe(source);

    assert_eq!(monitor.width_in_pixels(), 1920);
    assert_eq!(monitor.height_in_pixels(), 1080);
    assert_eq!(monitor.width_in_pixels(), 1920);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn failed_platform_fetch_is_not_retried() {
    let source = FakeSource::failing(canonical_edid(), "eDP-1");
    let calls = source.resolution_calls.clone();
    let monitor = probe(source);

    assert_eq!(monitor.width_in_pixels(), 0);
    assert_eq!(monitor.height_in_pixels(), 0);
    assert_eq!(calls.load(Ordering::SeqCst), 1);
}

#[test]
fn multiple_text_descriptors_are_joined() {
    let mut edid = canonical_edid();
    // turn the detailed-timing block into a second free-text descriptor
    edid[54..59].copy_from_slice(&[0x00, 0x00, 0x00, 0xFE, 0x00]);
    edid[59..64].copy_from_slice(b"alpha");
    for b in &mut edid[64..72] {
        *b = 0x0A;
    }
    let monitor = probe(FakeSource::new(edid, "eDP-1"));
    assert_eq!(monitor.text(), "alpha; hello");
}

#[test]
fn equality_is_edid_content_not_platform_handle() {
    let a = probe(FakeSource::new(canonical_edid(), "HDMI-A-1"));
    let b = probe(FakeSource::new(canonical_edid(), "DP-3"));
    assert_eq!(a, b);

    let mut other = canonical_edid();
    other[16] = 1;
    let c = probe(FakeSource::new(other, "HDMI-A-1"));
    assert_ne!(a, c);
}

#[test]
fn stable_id_survives_re_enumeration() {
    let a = probe(FakeSource::new(canonical_edid(), "HDMI-A-1"));
    let b = probe(FakeSource::new(canonical_edid(), "HDMI-A-2"));
    assert_eq!(a.stable_id(), b.stable_id());
}

#[test]
fn decoded_values_are_idempotent_across_accesses() {
    let monitor = probe(FakeSource::new(canonical_edid(), "eDP-1"));
    let first = monitor.fields().clone();
    let second = monitor.fields().clone();
    assert_eq!(first, second);
    assert_eq!(monitor.descriptors(), monitor.descriptors());
}

#[test]
fn probe_rejects_short_edid() {
    let err = Monitor::probe(Box::new(FakeSource::new(vec![0u8; 20], "X"))).unwrap_err();
    assert!(matches!(
        err,
        MonitorError::Format(FormatError::OutOfRange { buffer_len: 20, .. })
    ));
}

#[test]
fn probe_surfaces_source_failure() {
    let err = Monitor::probe(Box::new(FakeSource::new(Vec::new(), "X"))).unwrap_err();
    assert!(matches!(
        err,
        MonitorError::Source(SourceError::NoData { .. })
    ));
}

#[test]
fn display_shows_output_and_name() {
    let monitor = probe(FakeSource::new(canonical_edid(), "HDMI-A-1"));
    assert_eq!(monitor.to_string(), "Monitor(HDMI-A-1) -> TOSHIBA-TV");
}
