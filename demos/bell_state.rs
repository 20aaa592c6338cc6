use qureg::{QuantumRegister, QuantumResult};
use rand::{rngs::StdRng, SeedableRng};

fn main() -> QuantumResult<()> {
    let mut rng = StdRng::seed_from_u64(0);

    // Create a bell state, a superposition of |00⟩ and |11⟩
    let mut register = QuantumRegister::new(2)?;
    register.h(0)?.cx(0, 1)?;
    println!("{:?}", register.amplitudes());

    // Peek at the distribution on a copy
    let mut counts = [0usize; 4];
    for _ in 0..1000 {
        counts[register.clone().observe(&mut rng)?] += 1;
    }
    println!("{counts:?}");

    let measurement = register.measure(&mut rng)?;
    dbg!(measurement);
    println!("{:?}", register.amplitudes());
    Ok(())
}
