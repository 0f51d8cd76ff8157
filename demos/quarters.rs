use gradnet::{Example, MseLoss, Network};

fn main() -> gradnet::Result<()> {
    let mut network = Network::new(&[2, 2, 1])?;

    let batch = vec![
        Example::new(vec![0.0, 0.0], vec![0.0]),
        Example::new(vec![0.0, 1.0], vec![0.5]),
        Example::new(vec![1.0, 0.0], vec![0.5]),
        Example::new(vec![1.0, 1.0], vec![1.0]),
    ];

    let learning_rate = 0.25;
    let iterations = 10_000;

    for iteration in 0..iterations {
        network.train(&batch, learning_rate)?;
        if iteration % 1000 == 0 {
            let mut loss = 0.0;
            for example in &batch {
                let out = network.predict(&example.input)?;
                loss += MseLoss::loss(&out, &example.output);
            }
            loss /= batch.len() as f64;
            println!("Iteration {iteration}: loss = {loss:.6}");
        }
    }

    // Sweep the unit square and print the prediction surface.
    println!("\nPrediction grid (x across, y down):");
    for y in 0..=10 {
        for x in 0..=10 {
            let out = network.predict(&[x as f64 / 10.0, y as f64 / 10.0])?;
            print!("{:.2} ", out[0]);
        }
        println!();
    }

    Ok(())
}
