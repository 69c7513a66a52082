use super::aligned_vec::{ALIGN, AlignedVec};

fn is_aligned(ptr: *const u8) -> bool {
    (ptr as usize).is_multiple_of(ALIGN)
}

#[test]
fn starts_on_alignment_boundary() {
    let data: Vec<u8> = (0..37).collect();
    let vec = AlignedVec::copy_from_slice(&data);

    assert!(is_aligned(vec.as_ptr()));
    assert_eq!(&*vec, &data[..]);
    assert_eq!(vec.len(), 37);
}

#[test]
fn empty_storage() {
    let vec = AlignedVec::copy_from_slice(&[]);
    assert!(vec.is_empty());
    assert_eq!(vec.as_slice(), &[] as &[u8]);
}

#[test]
fn clone_keeps_contents_and_alignment() {
    let vec = AlignedVec::copy_from_slice(&[1, 2, 3, 4, 5]);
    let cloned = vec.clone();

    assert!(is_aligned(cloned.as_ptr()));
    assert_eq!(cloned, vec);
}

#[test]
fn debug_reports_alignment() {
    let vec = AlignedVec::copy_from_slice(&[0; 20]);
    assert_eq!(
        format!("{vec:?}"),
        "AlignedVec { len: 20, aligned: true }"
    );
}
