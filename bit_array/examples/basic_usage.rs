use bit_array::{BitArray, BitArrayError};

fn main() {
    println!("=== Bit Array Examples ===\n");

    // Example 1: A 9x9 board
    let _ = example_board();

    // Example 2: Set algebra
    let _ = example_set_algebra();

    // Example 3: Misuse is reported, not fatal
    example_errors();
}

fn example_board() -> Result<(), BitArrayError> {
    println!("Example 1: Marking a diagonal on a 9x9 board");

    let mut board = BitArray::new(81)?;
    for i in 0..9 {
        board.set(i * 9 + i)?;
    }

    println!("  Occupied squares: {}", board.count());
    println!("  Board:{}", board.to_string_broken(9));

    // Shift every piece one column to the right.
    board.shift_left(1)?;
    println!("  After shifting right by one:{}", board.to_string_broken(9));
    println!();

    Ok(())
}

fn example_set_algebra() -> Result<(), BitArrayError> {
    println!("Example 2: Set algebra over 100 positions");

    let mut evens = BitArray::new(100)?;
    let mut threes = BitArray::new(100)?;
    for i in (0..100).step_by(2) {
        evens.set(i)?;
    }
    for i in (0..100).step_by(3) {
        threes.set(i)?;
    }

    let sixes = evens.clone().and(&threes)?.clone();
    let odds = evens.all().minus(&evens)?.clone();

    println!("  Multiples of 6: {:?}", sixes.ones().collect::<Vec<_>>());
    println!("  Odd numbers:    {}", odds.count());
    println!("  Raw words:\n{}", sixes);

    Ok(())
}

fn example_errors() {
    println!("Example 3: Error reporting");

    let mut b = BitArray::new(8).expect("Failed to create bit array");
    if let Err(e) = b.set(8) {
        println!("  set(8): {e}");
    }
    if let Err(e) = b.shift_right(65) {
        println!("  shift_right(65): {e}");
    }
    if let Err(e) = b.xor(&BitArray::new(9).expect("Failed to create bit array")) {
        println!("  xor with 9 bits: {e}");
    }
}
