//! A single decoder shared across threads gives the same results as serial use.

use std::sync::Arc;
use std::thread;

use hsds_types::{DecodeConfig, Decoder, Unit, decode_merged};

fn page(page: usize) -> Vec<u8> {
    let records: Vec<String> = (0..20)
        .map(|i| {
            format!(
                r#"{{"id":"unit-{i:02}","name":"page-{page}","created_at":"2024-03-{day:02} 08:00:00+00"}}"#,
                day = page + 1
            )
        })
        .collect();
    format!("[{}]", records.join(",")).into_bytes()
}

#[test]
fn shared_decoder_is_deterministic() {
    let decoder = Arc::new(Decoder::new(DecodeConfig::default()).expect("valid config"));
    let buffers: Arc<Vec<Vec<u8>>> = Arc::new((0..5).map(page).collect());

    let expected: Vec<Unit> = decoder.decode_merged(buffers.as_slice()).expect("serial merge");

    let handles: Vec<_> = (0..8)
        .map(|_| {
            let decoder = Arc::clone(&decoder);
            let buffers = Arc::clone(&buffers);
            thread::spawn(move || {
                decoder
                    .decode_merged::<Unit, _>(buffers.as_slice())
                    .expect("threaded merge")
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let result = handle.join().expect("thread completes");
        assert_eq!(result, expected, "thread {i} diverged");
    }
    assert_eq!(expected.len(), 20);
    assert!(expected.iter().all(|u| u.name == "page-4"));
}

#[test]
fn default_decoder_usable_from_many_threads() {
    let handles: Vec<_> = (0..4)
        .map(|t| {
            thread::spawn(move || {
                let units: Vec<Unit> = decode_merged(&[page(t), page(t + 1)]).expect("merge");
                units
            })
        })
        .collect();

    for (t, handle) in handles.into_iter().enumerate() {
        let units = handle.join().expect("thread completes");
        assert_eq!(units.len(), 20);
        assert_eq!(units[0].name, format!("page-{}", t + 1));
    }
}

#[cfg(feature = "parallel")]
#[test]
fn parallel_merge_matches_sequential() {
    let decoder = Decoder::default();
    let buffers: Vec<Vec<u8>> = (0..6).map(page).collect();

    let sequential: Vec<Unit> = decoder.decode_merged(&buffers).expect("sequential");
    let parallel: Vec<Unit> = decoder.par_decode_merged(&buffers).expect("parallel");
    assert_eq!(sequential, parallel);
}
