use fenwick::FenwickTree;

fn banner(text: &str) {
    println!("*******************************************");
    for line in text.lines() {
        println!("* {line}");
    }
    println!("*******************************************");
    println!();
}

fn main() -> Result<(), fenwick::Error> {
    let n = 10;

    println!("Note: Indexing is 0-based.");
    println!();

    banner("Initialize FenwickTree and update\nfrequencies one at a time.");
    let mut tree = FenwickTree::new(n);
    for x in 0..n {
        tree.add(x, x as i64 + 1)?;
    }

    banner("Initialize FenwickTree using existing\nfrequencies.");
    let f: Vec<i64> = (1..=n as i64).collect();
    let mut tree = FenwickTree::new(n);
    tree.init(&f)?;

    banner("Calculate and print sum of all\nfrequencies.");
    println!("{}", tree.prefix_sum(n)?);
    println!();

    banner("Calculate and print sum of frequencies\n2 through 8.");
    println!("{}", tree.range_sum(2, 9)?);
    println!();

    banner("Calculate and print frequencies 5\nthrough 9.");
    for x in 5..10 {
        println!("{}", tree.get(x)?);
    }
    println!();

    banner("Retrieve and print all frequencies.");
    println!("{:?}", tree.frequencies());

    Ok(())
}
