//! Tests for `CellBitset` membership and word-wise set operations

#[cfg(test)]
mod tests {
    use islandcover::algorithm::bitset::CellBitset;

    // Verifies a new bitset is empty
    // Verified by allocating the backing vector filled with ones
    #[test]
    fn test_new_bitset() {
        let bitset = CellBitset::new(10);
        assert_eq!(bitset.count(), 0);
        assert!(bitset.is_empty());
        assert_eq!(bitset.capacity(), 10);
    }

    // Tests insertion and containment, including out-of-range cells
    // Verified by removing the range check in insert
    #[test]
    fn test_insert_and_contains() {
        let mut bitset = CellBitset::new(10);
        bitset.insert(5);
        bitset.insert(42);
        assert!(bitset.contains(5));
        assert!(!bitset.contains(3));
        assert!(!bitset.contains(42));
        assert_eq!(bitset.count(), 1);
    }

    // Intersection test across a word boundary
    // Verified by comparing only the first raw word
    #[test]
    fn test_intersects_across_words() {
        let a = CellBitset::from_cells(200, [3, 70, 150]);
        let b = CellBitset::from_cells(200, [4, 150]);
        let c = CellBitset::from_cells(200, [4, 71, 199]);

        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
        assert!(!a.intersects(&c));
    }

    // Subtracting a disjoint union restores the original set exactly
    // Verified by clearing the union result before subtracting
    #[test]
    fn test_union_then_subtract_restores() {
        let original = CellBitset::from_cells(130, [0, 64, 129]);
        let addition = CellBitset::from_cells(130, [1, 65, 128]);

        let mut working = original.clone();
        working.union_with(&addition);
        assert_eq!(working.count(), 6);
        assert!(working.contains(65));

        working.subtract(&addition);
        assert_eq!(working, original);
    }

    // Cells iterate in ascending order regardless of insertion order
    // Verified by collecting cells in insertion order
    #[test]
    fn test_cells_ascending() {
        let bitset = CellBitset::from_cells(100, [90, 2, 45, 2]);
        assert_eq!(bitset.to_vec(), vec![2, 45, 90]);
        assert_eq!(bitset.cells().collect::<Vec<_>>(), vec![2, 45, 90]);
    }

    #[test]
    fn test_display_lists_cells() {
        let bitset = CellBitset::from_cells(8, [1, 6]);
        assert_eq!(bitset.to_string(), "CellBitset(2 cells: [1, 6])");
    }
}
