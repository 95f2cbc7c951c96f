use homomorphic_ext::accumulator::{sum_with, NaiveSum};
use homomorphic_ext::{
    par_sum, Epsilon, GeMode, KbnSum, KbnWelford, Lg, NaiveWelford, ReductionConfig,
};
use tracing_subscriber::EnvFilter;

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    println!("homomorphic-ext {}", homomorphic_ext::VERSION);

    // Compensated vs naive summation on heavy cancellation
    let values: Vec<f64> = (0..1_000_000)
        .map(|i| match i % 4 {
            0 => 1e16,
            1 => 0.1,
            2 => -1e16,
            _ => 0.1,
        })
        .collect();
    println!("\nSumming {} terms (exact total 50000):", values.len());
    println!("  naive:        {}", sum_with::<NaiveSum<f64>, _>(values.iter().copied()));
    println!("  compensated:  {}", sum_with::<KbnSum<f64>, _>(values.iter().copied()));
    let config = ReductionConfig::default();
    println!(
        "  parallel ({} threads, chunk {}): {}",
        config.n_threads,
        config.chunk_size,
        par_sum(&values, &config)
    );

    // Online moments around a large offset
    let offset = 1e9;
    let samples = [4.0, 7.0, 13.0, 16.0];
    let naive: NaiveWelford<f64> = samples.iter().map(|x| x + offset).collect();
    let kbn: KbnWelford<f64> = samples.iter().map(|x| x + offset).collect();
    println!("\nWelford over {:?} + {}:", samples, offset);
    match (naive.sample_variance(), kbn.sample_variance()) {
        (Ok(n), Ok(k)) => println!("  sample variance naive {} / compensated {} (exact 30)", n, k),
        (Err(e), _) | (_, Err(e)) => println!("  {}", e),
    }
    if let Err(e) = KbnWelford::with_value(1.0f64).sample_variance() {
        println!("  single observation: {}", e);
    }

    // Tolerance chains
    let a = Epsilon::new(0.0f64, 1.0);
    let b = Epsilon::new(1.5f64, 1.0);
    let c = Epsilon::new(3.0f64, 1.0);
    println!("\nEpsilon comparisons (eps = 1):");
    println!("  0 ~ 1.5: {}", a.approx_eq(&b));
    println!("  1.5 ~ 3: {}", b.approx_eq(&c));
    println!("  0 ~ 3:   {}", a.approx_eq(&c));
    println!(
        "  0 >= 0.5 literal {} / corrected {}",
        a.approx_ge_with(&Epsilon::new(0.5, 1.0), GeMode::Literal),
        a.approx_ge_with(&Epsilon::new(0.5, 1.0), GeMode::Corrected)
    );

    // Log-domain products
    println!("\nLog-domain arithmetic:");
    let product = Lg::<f64>::factorial(200);
    println!(
        "  ln(200!) = {:.6}, overflows f64: {}",
        product.log_value(),
        product.would_overflow()
    );
    let ratio = product / Lg::<f64>::factorial(198);
    match ratio.checked_value() {
        Some(v) => println!("  200!/198! = {}", v),
        None => println!("  200!/198! out of range"),
    }
    match Lg::new(0.0f64) {
        Ok(_) => println!("  ln(0) accepted"),
        Err(e) => println!("  {}", e),
    }
}
