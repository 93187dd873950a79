use crate::cli::{run, GenerationRequest, RunOptions};

#[test]
fn single_positive_weight_is_deterministic() {
    let request = GenerationRequest::from_positionals(&["10", "1", "0", "0", "0"]).unwrap();
    let mut output = Vec::new();
    run(&request, &RunOptions::default(), &mut output).unwrap();
    assert_eq!(output, b"AAAAAAAAAA");
}

#[test]
fn zero_length_writes_nothing_in_either_mode() {
    for positionals in [vec!["0"], vec!["0", "1", "1", "1", "1"]] {
        let request = GenerationRequest::from_positionals(&positionals[..]).unwrap();
        let mut output = Vec::new();
        run(&request, &RunOptions::default(), &mut output).unwrap();
        assert!(output.is_empty());
    }
}
