use fenwick::FenwickTree;
use rand::{rngs::SmallRng, Rng, SeedableRng};

// Weighted sampling with live weight updates: draw a point in `[0, total)`
// and find the first bucket whose prefix sum exceeds it.
fn main() -> Result<(), fenwick::Error> {
    let mut rng = SmallRng::seed_from_u64(21345);
    let mut weights = FenwickTree::from_slice(&[1.0f64, 2.0, 4.0, 8.0, 1.0]);
    let mut counts = vec![0u32; weights.len()];

    for round in 0..100_000 {
        let point = rng.gen_range(0.0..weights.total());
        let Some(stop) = weights.find_stop_strict(point) else {
            continue;
        };
        counts[stop - 1] += 1;

        // halfway through, make the heaviest bucket unreachable
        if round == 50_000 {
            weights.set(3, 0.0)?;
        }
    }

    println!("weights: {:?}", weights.frequencies());
    println!("counts:  {counts:?}");
    Ok(())
}
