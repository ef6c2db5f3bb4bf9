use criterion::{Criterion, Throughput, criterion_group, criterion_main};
use hsds_types::{Decoder, Service, time::resolve};
use std::hint::black_box;

const TIMESTAMPS: &[&str] = &[
    "2024-03-28T15:00:00Z",
    "2024-03-28 15:00:00.000000+00",
    "2024-03-28T15:00:00",
    "2024-03-28",
    "15:04:05",
    "not-a-date",
];

fn service_page(page: usize, records: usize) -> Vec<u8> {
    let body: Vec<String> = (0..records)
        .map(|i| {
            format!(
                r#"{{"id":"svc-{i:06}","organization_id":"org-{page}","name":"Service {i}","status":"active","created_at":"2024-03-28 15:00:00.000000+00","last_modified":"2024-03-{day:02}T08:30:00Z","assured_date":"2024-01-15","alert":"closed on holidays"}}"#,
                day = page % 28 + 1
            )
        })
        .collect();
    format!("[{}]", body.join(",")).into_bytes()
}

/// Benchmark resolution against each accepted layout (and a miss)
fn bench_resolve(c: &mut Criterion) {
    let mut group = c.benchmark_group("resolve");
    for raw in TIMESTAMPS {
        group.bench_function(*raw, |b| b.iter(|| resolve(black_box(raw))));
    }
    group.finish();
}

/// Benchmark single-buffer decoding at different sizes
fn bench_decode_one(c: &mut Criterion) {
    let decoder = Decoder::default();
    let mut group = c.benchmark_group("decode_one");

    for size in [10, 100, 1000].iter() {
        let raw = service_page(0, *size);
        group.throughput(Throughput::Bytes(raw.len() as u64));
        group.bench_function(format!("records_{size}"), |b| {
            b.iter(|| {
                let services: Vec<Service> =
                    decoder.decode_one(black_box(&raw)).expect("decode should succeed");
                black_box(services);
            });
        });
    }

    group.finish();
}

/// Benchmark merging overlapping pages
fn bench_decode_merged(c: &mut Criterion) {
    let decoder = Decoder::default();
    let mut group = c.benchmark_group("decode_merged");

    for pages in [2, 8, 32].iter() {
        let buffers: Vec<Vec<u8>> = (0..*pages).map(|p| service_page(p, 200)).collect();
        group.throughput(Throughput::Elements((*pages * 200) as u64));
        group.bench_function(format!("pages_{pages}"), |b| {
            b.iter(|| {
                let services: Vec<Service> = decoder
                    .decode_merged(black_box(buffers.as_slice()))
                    .expect("merge should succeed");
                black_box(services);
            });
        });

        #[cfg(feature = "parallel")]
        group.bench_function(format!("par_pages_{pages}"), |b| {
            b.iter(|| {
                let services: Vec<Service> = decoder
                    .par_decode_merged(black_box(buffers.as_slice()))
                    .expect("merge should succeed");
                black_box(services);
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_resolve, bench_decode_one, bench_decode_merged);
criterion_main!(benches);
