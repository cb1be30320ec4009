use std::{
    fs::{self, File},
    io::Cursor,
};

use simdat_core::{
    copy_payload, decode_fields, read_format_tag, HeaderReport, SimHeaderExt, SimReader,
    SimWriter,
};
use simdat_types::{DatError, FormatVersion, SimHeader, SkyPosition, FORMAT_TAG_SIZE};
use tempfile::NamedTempFile;

// ===========================================================================
// Helpers — детерминированные тест-данные
// ===========================================================================

/// Заголовок из сценария CRAB.
fn crab_header() -> SimHeader {
    SimHeader {
        format: FormatVersion::V1,
        name: "CRAB".to_string(),
        t1: 0.0,
        t2: 10.0,
        dt: 0.001,
        f1: 1200.0,
        f2: 1500.0,
        nf: 512,
        position: SkyPosition::angles(1.45, 0.38),
        use_angle: 1,
        seed: 42,
        has_labels: None,
    }
}

/// Файл FORMAT 1 с тремя выборками 1.0, 2.0, 3.0.
fn build_crab_file() -> Vec<u8> {
    let mut writer = SimWriter::new(Vec::<u8>::new(), &crab_header()).unwrap();
    writer.write_samples(&[1.0, 2.0, 3.0]).unwrap();
    writer.finish().unwrap()
}

/// Собирает файл вручную, поле за полем, как это делает симулятор.
fn build_format_1_2_by_hand(pos: i32) -> Vec<u8> {
    let mut raw = Vec::new();

    let mut tag = [b' '; FORMAT_TAG_SIZE];
    tag[..10].copy_from_slice(b"FORMAT 1.2");
    tag[10] = b'\n';
    raw.extend_from_slice(&tag);

    let mut name = [0u8; 128];
    name[..14].copy_from_slice(b"FAKE FRB #1000");
    raw.extend_from_slice(&name);

    for v in [0.0f32, 4.0, 1.31072e-3, 300.0, 500.0] {
        raw.extend_from_slice(&v.to_ne_bytes());
    }
    raw.extend_from_slice(&4096i32.to_ne_bytes());
    raw.extend_from_slice(&pos.to_ne_bytes());

    if pos == 1 {
        raw.extend_from_slice(&0.5f32.to_ne_bytes());
        raw.extend_from_slice(&(-0.25f32).to_ne_bytes());
    } else {
        let mut posf = [0u8; 128];
        posf[..11].copy_from_slice(b"sky.posfile");
        raw.extend_from_slice(&posf);
    }

    raw.extend_from_slice(&0i32.to_ne_bytes());
    raw.extend_from_slice(&(-17i64).to_ne_bytes());
    raw.extend_from_slice(&0i32.to_ne_bytes());
    raw
}

// ===========================================================================
// Сценарий CRAB
// ===========================================================================

#[test]
fn test_crab_report_and_payload() {
    let raw = build_crab_file();
    let mut reader = SimReader::new(Cursor::new(raw)).unwrap();

    let report = HeaderReport::new(reader.header()).to_string();
    for line in [
        "Format:       FORMAT 1",
        "Name:         CRAB",
        "t1 (sec):     0.000000",
        "t2 (sec):     10.000000",
        "dt (sec):     0.001",
        "f1 (MHz):     1200.000000",
        "f2 (MHz):     1500.000000",
        "nf:           512",
        "RAJ (rad):    1.45",
        "DECJ (rad):   0.38",
    ] {
        assert!(report.lines().any(|l| l == line), "missing line {line:?}");
    }

    let mut out: Vec<u8> = Vec::new();
    let stats = reader.copy_payload_to(&mut out).unwrap();

    let expected: Vec<u8> = [1.0f32, 2.0, 3.0]
        .iter()
        .flat_map(|v| v.to_ne_bytes())
        .collect();
    assert_eq!(out.len(), 12);
    assert_eq!(out, expected);
    assert_eq!(stats.samples, 3);
}

#[test]
fn test_crab_through_files() {
    let input = NamedTempFile::new().unwrap();
    let output = NamedTempFile::new().unwrap();
    fs::write(input.path(), build_crab_file()).unwrap();

    {
        let mut reader = SimReader::new(File::open(input.path()).unwrap()).unwrap();
        let mut out = File::create(output.path()).unwrap();
        reader.copy_payload_to(&mut out).unwrap();
    }

    let bytes = fs::read(output.path()).unwrap();
    assert_eq!(bytes.len(), 12);
    assert_eq!(&bytes[8..12], &3.0f32.to_ne_bytes());
}

// ===========================================================================
// Раскладка FORMAT 1.2, собранная вручную
// ===========================================================================

#[test]
fn test_hand_built_format_1_2_angles() {
    let raw = build_format_1_2_by_hand(1);
    let h = SimHeader::read_from(&mut Cursor::new(&raw)).unwrap();

    assert_eq!(h.format, FormatVersion::V1_2);
    assert_eq!(h.name, "FAKE FRB #1000");
    assert_eq!(h.nf, 4096);
    assert_eq!(h.dt, 1.31072e-3);
    assert_eq!(h.position, SkyPosition::angles(0.5, -0.25));
    assert_eq!(h.seed, -17);
    assert_eq!(h.has_labels, Some(0));
    assert_eq!(h.encoded_len(), raw.len());

    // Повторное кодирование отличается только слотом метки
    let again = h.serialize().unwrap();
    assert_eq!(&again[FORMAT_TAG_SIZE..], &raw[FORMAT_TAG_SIZE..]);
}

#[test]
fn test_hand_built_format_1_2_text_position() {
    let raw = build_format_1_2_by_hand(0);
    let h = SimHeader::read_from(&mut Cursor::new(&raw)).unwrap();

    assert_eq!(h.position, SkyPosition::named("sky.posfile"));
    assert_eq!(h.encoded_len(), raw.len());

    let report = HeaderReport::new(&h).to_string();
    assert!(report.contains("Position:     sky.posfile\n"));
}

// ===========================================================================
// Отказы
// ===========================================================================

#[test]
fn test_unrecognized_format_stops_before_fields() {
    let mut raw = build_crab_file();
    raw[..8].copy_from_slice(b"FORMAT 9");

    let mut cur = Cursor::new(raw);
    let tag = read_format_tag(&mut cur).unwrap();
    assert_eq!(tag, "FORMAT 9");
    assert_eq!(cur.position() as usize, FORMAT_TAG_SIZE);

    let res = decode_fields(&tag, &mut cur);
    assert!(matches!(res, Err(DatError::UnrecognizedFormat(ref t)) if t == "FORMAT 9"));
    assert_eq!(cur.position() as usize, FORMAT_TAG_SIZE);
}

#[test]
fn test_labels_rejected_before_payload() {
    let mut h = crab_header();
    h.format = FormatVersion::V2_1;
    h.has_labels = Some(1);

    let mut writer = SimWriter::new(Vec::<u8>::new(), &h).unwrap();
    writer.write_samples(&[1.0; 8]).unwrap();
    let raw = writer.finish().unwrap();

    assert!(matches!(
        SimReader::new(Cursor::new(raw)),
        Err(DatError::UnsupportedLabels)
    ));
}

#[test]
fn test_truncated_header() {
    let raw = build_crab_file();

    for cut in [0usize, 63, 64, 100, 200, 235] {
        let res = SimReader::new(Cursor::new(raw[..cut].to_vec()));
        assert!(
            matches!(res, Err(DatError::TruncatedHeader { .. })),
            "cut at {cut}: {:?}",
            res.err()
        );
    }
}

#[test]
fn test_partial_tail_after_header() {
    let mut raw = build_crab_file();
    raw.extend_from_slice(&[0x11, 0x22]);

    let mut cur = Cursor::new(raw);
    SimHeader::read_from(&mut cur).unwrap();

    let mut out: Vec<u8> = Vec::new();
    let stats = copy_payload(&mut cur, &mut out).unwrap();
    assert_eq!(stats.samples, 3);
    assert_eq!(stats.dropped_tail_bytes, 2);
    assert_eq!(out.len(), 12);
}
