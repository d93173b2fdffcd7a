use keyed_paths::{Error, HeapOrder, PriorityQueue};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

#[test]
fn test_extract_in_ascending_order() {
    let mut pq = PriorityQueue::ascending();
    for (priority, payload) in [(5, 'a'), (1, 'b'), (4, 'c'), (2, 'd'), (3, 'e')] {
        pq.insert(priority, payload);
        assert!(pq.is_heap());
    }

    let order: Vec<char> = std::iter::from_fn(|| pq.extract_top().ok()).collect();
    assert_eq!(order, vec!['b', 'd', 'e', 'c', 'a']);
    assert!(pq.is_empty());
}

#[test]
fn test_extract_in_descending_order() {
    let mut pq = PriorityQueue::descending();
    pq.build_heap(vec![(3, 1), (5, 2), (5, 3), (6, 4), (7, 5)]);
    assert!(pq.is_heap());

    let priorities: Vec<i32> = pq.into_sorted_vec().into_iter().map(|(_, p)| p).collect();
    assert_eq!(priorities, vec![7, 6, 5, 5, 3]);
}

#[test]
fn test_empty_queue_extraction_fails() {
    let mut pq: PriorityQueue<i32, u32> = PriorityQueue::new(HeapOrder::Ascending);
    assert!(matches!(pq.extract_top(), Err(Error::EmptyQueue)));
    assert!(pq.pop().is_none());

    pq.insert(1, 10);
    assert_eq!(pq.extract_top().unwrap(), 10);
    assert!(matches!(pq.extract_top(), Err(Error::EmptyQueue)));
}

#[test]
fn test_decrease_key_moves_entry_to_top() {
    let mut pq = PriorityQueue::ascending();
    pq.build_heap((0..10).map(|i| (10 + i, i)));

    assert!(pq.decrease_key(&7, 1));
    assert!(pq.is_heap());
    assert_eq!(pq.peek(), Some((&7, 1)));
    assert_eq!(pq.priority_of(&7), Some(1));
}

#[test]
fn test_increasing_priority_percolates_down() {
    let mut pq = PriorityQueue::ascending();
    pq.build_heap((0..8).map(|i| (i, i)));

    // Raising the root's priority under min-ordering must push it down
    assert!(pq.decrease_key(&0, 100));
    assert!(pq.is_heap());
    assert_eq!(pq.extract_top().unwrap(), 1);

    let mut max = PriorityQueue::descending();
    max.build_heap((0..8).map(|i| (i, i)));
    assert!(max.decrease_key(&0, 50));
    assert!(max.is_heap());
    assert_eq!(max.peek(), Some((&0, 50)));
}

#[test]
fn test_decrease_key_on_missing_payload_is_noop() {
    let mut pq = PriorityQueue::ascending();
    pq.build_heap(vec![(4, "d"), (2, "b"), (3, "c")]);
    let before: Vec<(&str, i32)> = pq.iter().map(|(payload, priority)| (*payload, priority)).collect();

    assert!(!pq.decrease_key(&"z", 0));

    let after: Vec<(&str, i32)> = pq.iter().map(|(payload, priority)| (*payload, priority)).collect();
    assert_eq!(before, after);
    assert!(pq.is_heap());
    assert_eq!(pq.len(), 3);
    assert!(!pq.contains(&"z"));
}

#[test]
fn test_build_heap_appends_to_existing_entries() {
    let mut pq = PriorityQueue::ascending();
    pq.insert(5, 'x');
    pq.build_heap(vec![(9, 'a'), (1, 'b'), (7, 'c')]);

    assert_eq!(pq.len(), 4);
    assert!(pq.is_heap());
    let order: Vec<char> = pq.into_sorted_vec().into_iter().map(|(c, _)| c).collect();
    assert_eq!(order, vec!['b', 'x', 'c', 'a']);
}

#[test]
fn test_ties_are_extracted_deterministically() {
    let build = || {
        let mut pq = PriorityQueue::ascending();
        pq.build_heap((0..16).map(|i| (i % 3, i)));
        pq.into_sorted_vec()
    };

    let first = build();
    assert_eq!(first, build());
    let priorities: Vec<i32> = first.iter().map(|(_, p)| *p).collect();
    assert!(priorities.windows(2).all(|w| w[0] <= w[1]));
}

// Random interleaving of insert / extract / decrease_key, checking the heap
// property after every operation and the extraction order at the end
#[test]
fn test_heap_invariant_under_random_operations() {
    let mut rng = StdRng::seed_from_u64(7);

    for order in [HeapOrder::Ascending, HeapOrder::Descending] {
        let mut pq = PriorityQueue::new(order);
        let mut next_payload = 0u32;
        let mut last_extracted: Option<i64> = None;

        for _ in 0..2_000 {
            match rng.gen_range(0..10) {
                0..=4 => {
                    pq.insert(rng.gen_range(-500..500), next_payload);
                    next_payload += 1;
                }
                5..=6 => {
                    // Payloads beyond next_payload were never inserted
                    let payload = rng.gen_range(0..next_payload + 10);
                    pq.decrease_key(&payload, rng.gen_range(-500..500));
                }
                _ => {
                    let _ = pq.pop();
                }
            }
            assert!(pq.is_heap(), "heap property violated");
        }

        while let Some((_, priority)) = pq.pop() {
            if let Some(last) = last_extracted {
                match order {
                    HeapOrder::Ascending => assert!(last <= priority),
                    HeapOrder::Descending => assert!(last >= priority),
                }
            }
            last_extracted = Some(priority);
            assert!(pq.is_heap());
        }
    }
}

#[test]
fn test_sorted_extraction_matches_sorted_multiset() {
    let mut rng = StdRng::seed_from_u64(99);
    let priorities: Vec<u32> = (0..300).map(|_| rng.gen_range(0..50)).collect();

    let mut pq = PriorityQueue::ascending();
    pq.build_heap(priorities.iter().copied().zip(0..));

    let extracted: Vec<u32> = pq.into_sorted_vec().into_iter().map(|(_, p)| p).collect();
    let mut expected = priorities.clone();
    expected.sort_unstable();
    assert_eq!(extracted, expected);
}
