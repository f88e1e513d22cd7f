use fixed_heap::{is_max_heap, min_key, Heap};

fn main() -> fixed_heap::Result<()> {
    let mut heap = Heap::new(10);

    for k in [15, 10, 20, 30, 5] {
        heap.insert(k)?;
    }

    println!("Removed: {}", heap.extract_max()?);
    println!("Removed: {}", heap.extract_max()?);

    heap.build(vec![5, 10, 15, 20, 30])?;
    println!("Heap after build: {}", heap);

    println!("Is max heap: {}", is_max_heap(heap.as_slice()));
    if let Some(min) = min_key(heap.as_slice()) {
        println!("Min key: {}", min);
    }

    Ok(())
}
