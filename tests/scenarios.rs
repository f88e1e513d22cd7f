use fixed_heap::{heap_sort, is_max_heap, min_key, Heap, HeapError};

#[test]
fn test_insert_then_extract_twice() {
    let mut heap = Heap::new(10);
    for k in [15, 10, 20, 30, 5] {
        heap.insert(k).unwrap();
    }
    assert_eq!(Ok(30), heap.extract_max());
    assert_eq!(Ok(20), heap.extract_max());

    assert!(is_max_heap(heap.as_slice()));
    let mut rest = heap.as_slice().to_vec();
    rest.sort();
    assert_eq!(vec![5, 10, 15], rest);
}

#[test]
fn test_rebuild_then_verify_and_min() {
    let mut heap = Heap::new(10);
    for k in [15, 10, 20, 30, 5] {
        heap.insert(k).unwrap();
    }
    heap.extract_max().unwrap();
    heap.extract_max().unwrap();

    heap.build(vec![5, 10, 15, 20, 30]).unwrap();
    assert_eq!(5, heap.len());
    assert!(is_max_heap(heap.as_slice()));
    assert_eq!(Some(&5), min_key(heap.as_slice()));

    let mut keys = heap.as_slice().to_vec();
    keys.sort();
    assert_eq!(vec![5, 10, 15, 20, 30], keys);
}

#[test]
fn test_heap_sort_sample() {
    let mut data = [5, 2, 9, 1, 5, 6];
    heap_sort(&mut data);
    assert_eq!([1, 2, 5, 5, 6, 9], data);
}

#[test]
fn test_boundaries() {
    let mut heap = Heap::new(1);
    assert_eq!(Err(HeapError::Empty), heap.extract_max());
    heap.insert(1).unwrap();
    assert_eq!(Err(HeapError::Full { capacity: 1 }), heap.insert(2));
    assert_eq!(1, heap.len());
    assert!(matches!(
        heap.remove_at(0),
        Err(HeapError::InvalidIndex { .. })
    ));
    assert!(matches!(
        heap.remove_at(2),
        Err(HeapError::InvalidIndex { .. })
    ));
    assert_eq!(Ok(1), heap.remove_at(1));
    assert!(heap.is_empty());
}

#[test]
fn test_descending_extraction() {
    let mut heap = Heap::new(100);
    for k in (0..100).map(|i| (i * 37) % 100) {
        heap.insert(k).unwrap();
    }
    let mut prev = i32::MAX;
    while let Ok(k) = heap.extract_max() {
        assert!(k < prev);
        prev = k;
    }
    assert_eq!(0, prev);
}
