#![no_main]

use arbitrary::Arbitrary;
use libfuzzer_sys::fuzz_target;
use mastergen::{Code, score};

/// Two codes of arbitrary colors.
#[derive(Arbitrary, Debug)]
struct ScoreInput {
    left: Vec<u8>,
    right: Vec<u8>,
}

fuzz_target!(|input: ScoreInput| {
    // Keep codes short enough to exercise both scoring paths cheaply
    let left = Code::from(input.left.into_iter().take(96).collect::<Vec<_>>());
    let right = Code::from(input.right.into_iter().take(96).collect::<Vec<_>>());

    let forward = score(&left, &right);
    let backward = score(&right, &left);

    if left.len() != right.len() {
        assert!(forward.is_err());
        assert!(backward.is_err());
        return;
    }

    let forward = forward.unwrap();
    assert_eq!(Ok(forward), backward, "score must be symmetric");
    assert!(forward.black + forward.white <= left.len());
    assert_eq!(score(&left, &left).unwrap().black, left.len());
});
