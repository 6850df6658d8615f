use super::*;

#[test]
fn test_random_generator_collision() {
    let test_cases = vec![
        ("CandidateID", generate_cand_id as fn() -> String),
        ("PWD", generate_pwd as fn() -> String),
        ("Ufrag", generate_ufrag as fn() -> String),
    ];

    const N: usize = 10;
    const ITERATION: usize = 10;

    for (name, generate) in test_cases {
        for _ in 0..ITERATION {
            let rs: Vec<String> = (0..N).map(|_| generate()).collect();

            for i in 0..N {
                for j in i + 1..N {
                    assert_ne!(
                        rs[i], rs[j],
                        "{}: generateRandString caused collision: {} == {}",
                        name, rs[i], rs[j],
                    );
                }
            }
        }
    }
}

#[test]
fn test_random_lengths() {
    assert_eq!(generate_cand_id().len(), LEN_CANDIDATE_ID);
    assert_eq!(generate_ufrag().len(), 16);
    assert_eq!(generate_pwd().len(), 32);
}

#[test]
fn test_candidate_id_alphabet() {
    let id = RandomIdGenerator.generate_id();
    assert!(
        id.bytes()
            .all(|b| b.is_ascii_alphanumeric() || b == b'+' || b == b'/'),
        "unexpected char in {id}"
    );
}
