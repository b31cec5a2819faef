use super::*;
use pretty_assertions::assert_eq;

#[test]
fn reserve_commits_nothing() {
    let region = Region::reserve(1 << 20);
    assert_eq!(region.committed(), 0);
    assert_eq!(region.used(), 0);
    assert_eq!(region.capacity(), 1 << 20);
}

#[test]
fn first_allocation_commits_one_page() {
    let mut region = Region::reserve(1 << 20);
    let block = region.allocate(10, 1).unwrap();
    assert_eq!(block, Block { offset: 0, size: 10 });
    assert_eq!(region.committed(), 4096);
}

#[test]
fn offsets_are_rounded_to_alignment() {
    let mut region = Region::reserve(1 << 20);
    region.allocate(3, 1).unwrap();
    let block = region.allocate(8, 8).unwrap();
    assert_eq!(block.offset, 8);
    assert_eq!(region.used(), 16);
}

#[test]
fn zero_sized_allocation_marks_current_offset() {
    let mut region = Region::reserve(64);
    region.allocate(5, 1).unwrap();
    let block = region.allocate(0, 1).unwrap();
    assert_eq!(block, Block { offset: 5, size: 0 });
    assert_eq!(region.bytes(block), &[] as &[u8]);
}

#[test]
fn straddling_allocation_keeps_earlier_contents() {
    let mut region = Region::with_page_size(1 << 20, 4096);

    let first = region.allocate(4000, 1).unwrap();
    for (i, byte) in region.bytes_mut(first).iter_mut().enumerate() {
        *byte = (i % 251) as u8;
    }
    assert_eq!(region.committed(), 4096);

    // Crosses the 4096 boundary: 4000..4200.
    let second = region.allocate(200, 1).unwrap();
    assert_eq!(second.offset, 4000);
    assert_eq!(region.committed(), 8192);
    region.bytes_mut(second).fill(0xAB);

    assert!(region
        .bytes(first)
        .iter()
        .enumerate()
        .all(|(i, &b)| b == (i % 251) as u8));
    assert!(region.bytes(second).iter().all(|&b| b == 0xAB));
}

#[test]
fn large_allocation_commits_whole_pages() {
    let mut region = Region::with_page_size(1 << 20, 1024);
    region.allocate(5000, 1).unwrap();
    assert_eq!(region.committed(), 5120);
}

#[test]
fn commit_is_clamped_to_capacity() {
    let mut region = Region::with_page_size(6000, 4096);
    region.allocate(5000, 1).unwrap();
    assert_eq!(region.committed(), 6000);
}

#[test]
fn exhausting_the_reservation_is_an_error() {
    let mut region = Region::reserve(100);
    region.allocate(90, 1).unwrap();
    let err = region.allocate(20, 1).unwrap_err();
    assert_eq!(
        err,
        ArenaError::Exhausted {
            pool: "string bytes",
            reserved: 100
        }
    );
    // A failed allocation leaves the offset untouched.
    assert_eq!(region.used(), 90);
    assert!(region.allocate(10, 1).is_ok());
}

#[test]
fn non_power_of_two_alignment_is_rejected() {
    let mut region = Region::reserve(100);
    assert_eq!(
        region.allocate(4, 3),
        Err(ArenaError::InvalidAlignment { alignment: 3 })
    );
}

#[test]
fn page_size_rounds_to_power_of_two() {
    let region = Region::with_page_size(100, 3000);
    assert_eq!(region.page_size(), 4096);
}
