use criterion::{black_box, criterion_group, criterion_main, Criterion};

use mlp_classifier::{Backpropagation, ClassifierConfig, Dataset, MlpClassifier, Network};

fn network_forward_bench(c: &mut Criterion) {
    let mut network = Network::new_with_seed(64, &[32, 16], 10, 0).unwrap();
    let input = vec![0.1_f64; network.input_dim()];

    c.bench_function("network_forward_64_32_16_10", |b| {
        b.iter(|| {
            let out = network.forward(black_box(&input)).unwrap();
            black_box(out[0]);
        })
    });
}

fn backpropagate_bench(c: &mut Criterion) {
    let mut network = Network::new_with_seed(64, &[32, 16], 10, 0).unwrap();
    let trainer = Backpropagation::default();
    let input = vec![0.1_f64; network.input_dim()];
    let mut target = vec![0.0_f64; network.output_dim()];
    target[3] = 1.0;

    c.bench_function("backpropagate_64_32_16_10", |b| {
        b.iter(|| {
            network.forward(black_box(&input)).unwrap();
            trainer.backpropagate(&mut network, black_box(&target));
        })
    });
}

fn partial_train_bench(c: &mut Criterion) {
    let rows: Vec<Vec<f64>> = (0..64)
        .map(|i| (0..16).map(|j| ((i * 7 + j) % 11) as f64 / 11.0).collect())
        .collect();
    let targets: Vec<u32> = (0..64).map(|i| i % 4).collect();
    let data = Dataset::from_rows(&rows, &targets).unwrap();

    let mut cfg = ClassifierConfig::new(16, &[12]);
    cfg.iterations = 10;
    let mut mlp = MlpClassifier::with_config(cfg, [0, 1, 2, 3]).unwrap();

    c.bench_function("partial_train_64x16_10_passes", |b| {
        b.iter(|| {
            let report = mlp.partial_train_dataset(black_box(&data)).unwrap();
            black_box(report.final_loss);
        })
    });
}

criterion_group!(
    benches,
    network_forward_bench,
    backpropagate_bench,
    partial_train_bench
);
criterion_main!(benches);
