use bit_array::handle::{self, allocate, duplicate, grow, read_bit, release, shrink, write_bit};
use bit_array::{BitArray, BitArrayError, ClockSeeded, InitMode};

fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

#[test]
fn ten_ones() {
    init_logging();

    let bits = BitArray::create(10, InitMode::Ones).unwrap();
    assert_eq!(bits.capacity(), 16);
    assert_eq!(bits.as_bytes(), &[0b1111_1111, 0b1100_0000]);
    assert!((0..10).all(|i| bits.get_bit(i) == Some(true)));
    assert!((10..16).all(|i| bits.get_bit(i) == Some(false)));
}

#[test]
fn ten_zeroes() {
    init_logging();

    let bits = BitArray::create(10, InitMode::Zeroes).unwrap();
    assert_eq!(bits.capacity(), 16);
    assert!((0..16).all(|i| bits.get_bit(i) == Some(false)));
}

#[test]
fn shrink_past_capacity_releases() {
    init_logging();

    assert!(shrink(allocate(20, InitMode::Zeroes), 25).is_none());
}

#[test]
fn shrink_clamps_occupancy() {
    init_logging();

    let bits = shrink(allocate(20, InitMode::Zeroes), 4).unwrap();
    assert_eq!(bits.capacity(), 16);
    assert_eq!(bits.occupancy(), 16);
}

#[test]
fn grow_fills_from_occupancy_without_advancing_it() {
    init_logging();

    let bits = grow(allocate(3, InitMode::Zeroes), 5, InitMode::Ones).unwrap();
    assert_eq!(bits.capacity(), 16);
    assert_eq!(bits.occupancy(), 3);
    assert!((0..3).all(|i| bits.get_bit(i) == Some(false)));
    assert!((3..8).all(|i| bits.get_bit(i) == Some(true)));
    assert!((8..16).all(|i| bits.get_bit(i) == Some(false)));
}

#[test]
fn handle_lifecycle() {
    init_logging();

    let mut bits = allocate(12, InitMode::Zeroes);
    write_bit(bits.as_mut(), 11, true);

    let copy = duplicate(bits.as_ref());
    write_bit(bits.as_mut(), 11, false);
    assert_eq!(read_bit(copy.as_ref(), 11), Some(true));
    assert_eq!(read_bit(bits.as_ref(), 11), Some(false));

    bits = grow(bits, 16, InitMode::Zeroes);
    assert_eq!(handle::capacity(bits.as_ref()), 32);
    assert_eq!(handle::occupancy(bits.as_ref()), 12);

    bits = release(bits);
    assert_eq!(read_bit(bits.as_ref(), 0), None);
    assert_eq!(
        handle::report(copy.as_ref()).to_string(),
        "Bit Array Contents (occupied=12, total=16):\n [ 0000 0000 0001 0000]"
    );
}

#[test]
fn random_fills_within_one_clock_second_match() {
    init_logging();

    let mut source = ClockSeeded::with_clock(|| 1_739_750_400);
    let a = BitArray::create_with(100, InitMode::Random, &mut source).unwrap();
    let b = BitArray::create_with(100, InitMode::Random, &mut source).unwrap();
    assert_eq!(a, b);

    let a = a.extend_with(50, InitMode::Random, &mut source).unwrap();
    let b = b.extend_with(50, InitMode::Random, &mut source).unwrap();
    assert_eq!(a, b);
}

#[test]
fn failed_resizes_keep_data() {
    init_logging();

    let mut bits = BitArray::create(30, InitMode::Ones).unwrap();
    bits.set_bit(31, true);
    let snapshot = bits.duplicate().unwrap();

    let rejected = bits.extend(usize::MAX - 7, InitMode::Random).unwrap_err();
    assert!(matches!(
        rejected.error(),
        BitArrayError::AllocationFailed { .. } | BitArrayError::CapacityOverflow { .. }
    ));
    let bits = rejected.into_inner();
    assert_eq!(bits, snapshot);

    let bits = grow(Some(bits), usize::MAX, InitMode::Ones);
    assert_eq!(bits, Some(snapshot));
}

#[test]
fn prompted_array_matches_typed_bits() {
    init_logging();

    let mut transcript = Vec::new();
    let bits = bit_array::input::prompt_bit_array("5\n1\n2\n0\n1 1 0\n".as_bytes(), &mut transcript)
        .unwrap();
    assert_eq!(bits.occupancy(), 5);
    assert_eq!(bits.as_bytes(), &[0b1011_0000]);

    let transcript = String::from_utf8(transcript).unwrap();
    assert!(transcript.contains("[ERROR] \"2\" is not 0 or 1"));
}
