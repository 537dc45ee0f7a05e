use criterion::{black_box, criterion_group, criterion_main, Criterion};
use digitize_core::{sequential, TensorView, TensorViewMut};
use digitize_op::{digitize, DigitizeParams};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

const ROWS: usize = 512;
const BATCH: usize = 128;
const EDGES: usize = 64;

fn make_inputs() -> (Vec<f64>, Vec<f64>) {
    let mut rng = StdRng::seed_from_u64(42);
    let data: Vec<f64> = (0..ROWS * BATCH)
        .map(|_| rng.gen_range(0.0..1000.0))
        .collect();
    let bins: Vec<f64> = (0..ROWS)
        .flat_map(|row| {
            (0..EDGES).map(move |edge| edge as f64 * (1000.0 / EDGES as f64) + row as f64 * 1e-3)
        })
        .collect();
    (data, bins)
}

fn bench_digitize(c: &mut Criterion) {
    let (data, bins) = make_inputs();
    let data_shape = [ROWS, BATCH];
    let bins_shape = [ROWS, EDGES];
    let params = DigitizeParams::default();

    c.bench_function("digitize/f64xi32/sequential", |b| {
        let engine = sequential();
        let mut out = vec![0_i32; data.len()];
        b.iter(|| {
            digitize(
                TensorView::new(&data_shape, &data).unwrap(),
                TensorView::new(&bins_shape, &bins).unwrap(),
                TensorViewMut::new(&data_shape, &mut out).unwrap(),
                &params,
                &engine,
            )
            .unwrap();
            black_box(&out);
        })
    });

    #[cfg(feature = "parallel")]
    c.bench_function("digitize/f64xi32/parallel", |b| {
        let engine = digitize_core::parallel();
        let mut out = vec![0_i32; data.len()];
        b.iter(|| {
            digitize(
                TensorView::new(&data_shape, &data).unwrap(),
                TensorView::new(&bins_shape, &bins).unwrap(),
                TensorViewMut::new(&data_shape, &mut out).unwrap(),
                &params,
                &engine,
            )
            .unwrap();
            black_box(&out);
        })
    });
}

criterion_group!(benches, bench_digitize);
criterion_main!(benches);
