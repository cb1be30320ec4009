use std::{hint::black_box, io::Cursor};

use criterion::{criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use rand::{rngs::StdRng, Rng, SeedableRng};
use simdat_core::{copy_payload, SimHeaderExt, SimWriter};
use simdat_types::{FormatVersion, SimHeader, SkyPosition};

fn make_header(nf: i32) -> SimHeader {
    let mut h = SimHeader::new("FAKE FRB #1000");
    h.format = FormatVersion::V1_2;
    h.t2 = 1.0;
    h.dt = 1.31072e-3;
    h.f1 = 300.0;
    h.f2 = 500.0;
    h.nf = nf;
    h.position = SkyPosition::angles(1.459_672, 0.384_225);
    h.has_labels = Some(0);
    h
}

fn make_file(
    nf: i32,
    spectra: usize,
) -> Vec<u8> {
    let mut rng = StdRng::seed_from_u64(42);
    let mut writer = SimWriter::new(Vec::<u8>::new(), &make_header(nf)).unwrap();
    for _ in 0..nf as usize * spectra {
        writer.write_sample(rng.gen::<f32>()).unwrap();
    }
    writer.finish().unwrap()
}

fn bench_decode_header(c: &mut Criterion) {
    let raw = make_header(4096).serialize().unwrap();

    c.bench_function("decode_header_1_2", |b| {
        b.iter(|| SimHeader::read_from(&mut Cursor::new(black_box(&raw))).unwrap())
    });
}

fn bench_copy_payload(c: &mut Criterion) {
    let mut group = c.benchmark_group("copy_payload");

    for spectra in [16usize, 256] {
        let raw = make_file(4096, spectra);
        let header_len = make_header(4096).encoded_len();
        let payload = &raw[header_len..];

        group.throughput(Throughput::Bytes(payload.len() as u64));
        group.bench_with_input(BenchmarkId::from_parameter(spectra), payload, |b, p| {
            b.iter(|| {
                let mut out = Vec::with_capacity(p.len());
                copy_payload(&mut Cursor::new(p), &mut out).unwrap();
                out
            })
        });
    }

    group.finish();
}

criterion_group!(benches, bench_decode_header, bench_copy_payload);
criterion_main!(benches);
