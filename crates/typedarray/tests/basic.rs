use std::fmt::Debug;

use typedarray::{
    ArrayAccess, ArrayValue, DoubleArray, Error, FloatArray, OctetArray, Result,
    UnsignedByteArray, UnsignedLongArray, UnsignedLongLongArray, UnsignedShortArray,
};

/// Generic test function for the four array operations
fn run_array_operations<V>(x: V::T) -> Result<()>
where
    V: ArrayAccess + Default,
    V::T: Debug,
{
    let zero = <V::T as ArrayValue>::ZERO;
    let mut array = V::default();

    assert_eq!(array.length(), 0);

    array.set_length(3)?;
    assert_eq!(array.length(), 3);
    assert_eq!(array.as_typed().as_slice(), &[zero, zero, zero]);

    array.set_element(1, x)?;
    assert_eq!(array.element(1)?, x);
    assert_eq!(array.as_typed().as_slice(), &[zero, x, zero]);

    array.set_length(1)?;
    assert_eq!(array.length(), 1);
    assert_eq!(array.as_typed().as_slice(), &[zero]);

    array.set_length(2)?;
    assert_eq!(array.length(), 2);
    assert_eq!(array.as_typed().as_slice(), &[zero, zero]);

    assert!(matches!(
        array.element(2),
        Err(Error::IndexOutOfRange { index: 2, len: 2 })
    ));
    assert!(matches!(
        array.element(-1),
        Err(Error::IndexOutOfRange { index: -1, len: 2 })
    ));
    assert!(matches!(
        array.set_element(-1, x),
        Err(Error::IndexOutOfRange { index: -1, len: 2 })
    ));
    assert!(matches!(
        array.set_element(usize::MAX, x),
        Err(Error::IndexOutOfRange { .. })
    ));
    assert_eq!(array.as_typed().as_slice(), &[zero, zero]);

    assert!(matches!(
        array.set_length(-5),
        Err(Error::InvalidSize { size: -5, .. })
    ));
    assert_eq!(array.length(), 2);
    assert_eq!(array.as_typed().as_slice(), &[zero, zero]);

    array.set_length(2)?;
    assert_eq!(array.length(), 2);

    array.set_length(0)?;
    assert_eq!(array.length(), 0);
    assert!(array.element(0).is_err());

    Ok(())
}

#[test]
fn test_double_array() -> Result<()> {
    run_array_operations::<DoubleArray>(-1.5e300)
}

#[test]
fn test_float_array() -> Result<()> {
    run_array_operations::<FloatArray>(3.25)
}

#[test]
fn test_octet_array() -> Result<()> {
    run_array_operations::<OctetArray>(-128)
}

#[test]
fn test_unsigned_byte_array() -> Result<()> {
    run_array_operations::<UnsignedByteArray>(255)
}

#[test]
fn test_unsigned_short_array() -> Result<()> {
    run_array_operations::<UnsignedShortArray>(u16::MAX)
}

#[test]
fn test_unsigned_long_array() -> Result<()> {
    run_array_operations::<UnsignedLongArray>(u32::MAX)
}

#[test]
fn test_unsigned_long_long_array() -> Result<()> {
    run_array_operations::<UnsignedLongLongArray>(u64::MAX)
}

#[test]
fn test_round_trip_every_index() -> Result<()> {
    let mut array = UnsignedShortArray::with_len(64)?;

    for i in 0..64_u16 {
        array.set(i, i * 1000)?;
    }
    for i in 0..64_u16 {
        assert_eq!(array.get(i)?, i * 1000);
    }

    Ok(())
}

#[test]
fn test_float_bits_preserved() -> Result<()> {
    let mut doubles = DoubleArray::with_len(2)?;
    let nan = f64::from_bits(0x7ff8_0000_dead_beef);

    doubles.set(0, nan)?;
    doubles.set(1, -0.0)?;

    assert_eq!(doubles.get(0)?.to_bits(), nan.to_bits());
    assert_eq!(doubles.get(1)?.to_bits(), (-0.0_f64).to_bits());

    let mut floats = FloatArray::with_len(1)?;
    floats.set(0, f32::NEG_INFINITY)?;
    assert_eq!(floats.get(0)?, f32::NEG_INFINITY);

    Ok(())
}

#[test]
fn test_clone_owns_storage() -> Result<()> {
    let mut original = OctetArray::from(vec![1, 2, 3]);
    let copy = original.clone();

    original.set(0, 100)?;
    original.set_len(1)?;

    assert_eq!(copy.as_slice(), &[1, 2, 3]);
    assert_eq!(original.as_slice(), &[100]);

    Ok(())
}

#[test]
fn test_conversions() -> Result<()> {
    let from_iter: UnsignedLongArray = (1..=4).collect();
    assert_eq!(from_iter.len(), 4);
    assert_eq!(from_iter.iter().sum::<u32>(), 10);

    let from_slice = UnsignedLongArray::from(&[1, 2, 3, 4][..]);
    assert_eq!(from_iter, from_slice);

    let values: Vec<u32> = (&from_slice).into_iter().collect();
    assert_eq!(values, vec![1, 2, 3, 4]);
    assert_eq!(from_slice.into_inner().into_vec(), values);

    Ok(())
}

#[test]
fn test_fill_and_clear() -> Result<()> {
    let mut array = UnsignedByteArray::with_len(4)?;

    array.fill(9);
    assert_eq!(array.as_slice(), &[9, 9, 9, 9]);

    array.clear();
    assert!(array.is_empty());

    array.set_len(2)?;
    assert_eq!(array.as_slice(), &[0, 0]);

    Ok(())
}
