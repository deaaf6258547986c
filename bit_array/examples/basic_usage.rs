use bit_array::handle::{self, allocate, grow, release, shrink};
use bit_array::{BitArray, BitArrayError, InitMode};

fn main() {
    env_logger::init();

    println!("=== Bit Array Examples ===\n");

    // Example 1: Allocation modes
    let _ = example_modes();

    // Example 2: Resizing
    let _ = example_resizing();

    // Example 3: Nullable handles
    example_handles();
}

fn example_modes() -> Result<(), BitArrayError> {
    println!("Example 1: Allocating 10 bits in each mode");

    for mode in [InitMode::Zeroes, InitMode::Ones, InitMode::Random] {
        let bits = BitArray::create(10, mode)?;
        println!("  {:<7} {}", format!("{:?}", mode), bits);
    }
    println!();

    Ok(())
}

fn example_resizing() -> Result<(), BitArrayError> {
    println!("Example 2: Growing and shrinking");

    let bits = BitArray::create(3, InitMode::Zeroes)?;
    println!("  start:     {}", bits.report());

    let bits = bits
        .extend(5, InitMode::Ones)
        .map_err(|rejected| rejected.into_parts().1)?;
    println!("  extend(5): {}", bits.report());

    match bits.contract(8).map_err(|rejected| rejected.into_parts().1)? {
        Some(bits) => println!("  contract(8): {}", bits.report()),
        None => println!("  contract(8): released"),
    }
    println!();

    Ok(())
}

fn example_handles() {
    println!("Example 3: Nullable handles");

    let mut bits = allocate(12, InitMode::Ones);
    println!("  {}", handle::report(bits.as_ref()));

    bits = grow(bits, usize::MAX, InitMode::Ones);
    println!("  after an impossible grow: {}", handle::report(bits.as_ref()));

    bits = shrink(bits, 100);
    println!("  after shrinking past capacity: {}", handle::report(bits.as_ref()));

    bits = release(bits);
    println!("  released: {}", handle::report(bits.as_ref()));
}
