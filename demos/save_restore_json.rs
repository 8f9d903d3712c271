use mlp_classifier::{ClassifierBuilder, Label};

fn main() -> mlp_classifier::Result<()> {
    let samples = vec![
        vec![1.0, 0.0, 0.0, 0.0, 0.0],
        vec![0.0, 1.0, 0.0, 0.0, 0.0],
        vec![0.0, 0.0, 1.0, 1.0, 0.0],
        vec![1.0, 1.0, 1.0, 1.0, 1.0],
        vec![0.0, 0.0, 0.0, 0.0, 0.0],
    ];
    let targets = vec![
        Label::from("a"),
        Label::from("b"),
        Label::from("c"),
        Label::from("a"),
        Label::from(4),
    ];

    let mut mlp = ClassifierBuilder::new(5)?
        .hidden_layers(&[3, 2])?
        .iterations(2000)?
        .seed(0)
        .build(targets.iter().cloned())?;

    let report = mlp.train(&samples, &targets)?;
    println!("trained {} passes, final loss {:.6}", report.iterations, report.final_loss);

    let path = "target/tmp_mlp_classifier.json";
    mlp_classifier::save(&mlp, path)?;

    let mut restored = mlp_classifier::restore::<Label, _>(path)?;
    for (sample, target) in samples.iter().zip(&targets) {
        let before = mlp.predict(sample)?;
        let after = restored.predict(sample)?;
        println!("{sample:?}: expected {target}, trained {before}, restored {after}");
    }
    println!("saved and restored model: {path}");
    Ok(())
}
