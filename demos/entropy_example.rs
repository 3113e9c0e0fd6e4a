use ndarray::array;
use std::collections::HashMap;
use tabstats::estimators::entropy::{Entropy, GlobalValue, LocalValues};
use tabstats::{Column, entropy};

fn main() {
    // Example discrete data - a sequence of integer codes
    let data = array!(1, 2, 1, 3, 2, 1, 4, 2, 3, 1);

    let discrete_entropy = Entropy::new_discrete(data.clone());

    // Calculate entropy manually to verify
    let mut counts = HashMap::new();
    for &value in &data {
        *counts.entry(value).or_insert(0) += 1;
    }
    let n = data.len() as f64;
    let manual_entropy: f64 = counts
        .values()
        .map(|&count| {
            let p = count as f64 / n;
            -p * p.ln()
        })
        .sum();

    println!("Discrete data: {data:?}");
    println!(
        "Local Entropy Values: {:?}",
        discrete_entropy.local_values()
    );
    println!("Global Entropy Value: {}", discrete_entropy.global_value());
    println!("  Manual: {manual_entropy}");

    // Declared levels that never occur lower the normalized entropy
    let declared = Entropy::new_discrete_with_levels(data.clone(), 8).normalized(true);
    let observed = Entropy::new_discrete(data).normalized(true);
    println!(
        "Normalized over 4 observed levels: {}",
        observed.global_value()
    );
    println!(
        "Normalized over 8 declared levels: {}",
        declared.global_value()
    );

    // The same estimator behind a labeled column
    let weather = Column::from_labels("weather", &["sun", "rain", "sun", "fog", "sun", "rain"]);
    match entropy(&weather, false) {
        Ok(h) => println!("Entropy of '{}': {h:.4} nats", weather.name()),
        Err(e) => eprintln!("Error: {e}"),
    }
}
