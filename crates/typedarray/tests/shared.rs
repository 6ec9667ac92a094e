use std::thread;

use typedarray::{Error, Result, SharedArray, TypedArray};

#[test]
fn test_handles_share_elements() -> Result<()> {
    let array = SharedArray::<u32>::with_len(2)?;
    let other = array.clone();

    other.set(1, 5)?;
    assert_eq!(array.get(1)?, 5);

    array.set_len(1)?;
    assert_eq!(other.len(), 1);
    assert!(matches!(other.get(1), Err(Error::IndexOutOfRange { .. })));

    Ok(())
}

#[test]
fn test_concurrent_writers() -> Result<()> {
    const THREADS: usize = 8;
    const PER_THREAD: usize = 1_000;

    let array = SharedArray::<u64>::with_len(THREADS * PER_THREAD)?;

    thread::scope(|s| -> Result<()> {
        let handles = (0..THREADS)
            .map(|t| {
                let array = array.clone();
                s.spawn(move || -> Result<()> {
                    for i in 0..PER_THREAD {
                        let index = t * PER_THREAD + i;
                        array.set(index, index as u64 * 3)?;
                    }
                    Ok(())
                })
            })
            .collect::<Vec<_>>();

        for handle in handles {
            handle.join().expect("writer thread panicked")?;
        }
        Ok(())
    })?;

    let snapshot = array.snapshot();
    assert_eq!(snapshot.len(), THREADS * PER_THREAD);
    assert!(snapshot.iter().enumerate().all(|(i, v)| v == i as u64 * 3));

    Ok(())
}

#[test]
fn test_write_guard_is_atomic() -> Result<()> {
    let array = SharedArray::from(TypedArray::<u8>::from(vec![1, 2, 3]));

    {
        let mut guard = array.write();
        guard.set_len(5)?;
        guard.set(4, 9)?;
    }
    assert_eq!(array.read().as_slice(), &[1, 2, 3, 0, 9]);

    let reader = array.clone();
    assert!(array.try_unwrap().is_err());
    let inner = reader.try_unwrap().ok().map(TypedArray::into_vec);
    assert_eq!(inner, Some(vec![1, 2, 3, 0, 9]));

    Ok(())
}
