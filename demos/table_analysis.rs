use tabstats::config::AnalysisConfig;
use tabstats::metrics::calc_metrics_with;
use tabstats::preprocessing::{CompareOp, Condition, apply_conditions};
use tabstats::{Column, Metrics, Table, correlation, discretize, feature_scaling};
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // RUST_LOG=tabstats=debug shows the dispatch decisions
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let config = AnalysisConfig::from_json_str(r#"{ "num_bins": 3, "algorithm": "EW" }"#)?;

    let table = Table::new(vec![
        Column::float("height", vec![1.52, 1.71, 1.64, 1.80, 1.55, 1.93, 1.68, 1.74]),
        Column::float("weight", vec![51.0, 70.5, 62.0, 81.2, 55.4, 90.1, 66.3, 72.8]),
        Column::from_labels(
            "team",
            &["red", "blue", "red", "blue", "green", "blue", "green", "red"],
        ),
    ])?;

    // Mixed table: mutual information between every pair
    let matrix = correlation(&table)?;
    println!("{:?} matrix over {:?}", matrix.measure(), matrix.names());
    println!("{}", matrix.values());

    // Continuous columns only: Pearson
    let numeric = Table::new(vec![
        table.column("height")?.clone(),
        table.column("weight")?.clone(),
    ])?;
    println!(
        "Pearson height/weight: {:?}",
        correlation(&numeric)?.get("height", "weight")
    );

    let binned = discretize(&table, config.num_bins, config.algorithm)?;
    println!("Cut points per column: {:?}", binned.cut_points);

    match calc_metrics_with(&table, &config)? {
        Metrics::Auc(auc) => println!("AUC: {auc}"),
        metrics => println!("Per-column metrics: {:?}", metrics.column_values()),
    }

    let scaled = feature_scaling(&numeric, config.scaling)?;
    let tall = apply_conditions(&scaled, &[Condition::keep("height", CompareOp::Gt, 0.5)])?;
    println!(
        "{} of {} rows in the upper half of the height range",
        tall.n_rows(),
        scaled.n_rows()
    );

    Ok(())
}
