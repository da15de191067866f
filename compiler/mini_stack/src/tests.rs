use super::*;

/// Mimics a left-nested binary expression walk.
fn depth_of_chain(remaining: u32) -> u32 {
    ensure_sufficient_stack(|| {
        if remaining == 0 {
            0
        } else {
            depth_of_chain(remaining - 1) + 1
        }
    })
}

#[test]
fn passes_through_the_closure_value() {
    assert_eq!(ensure_sufficient_stack(|| "ok"), "ok");
}

#[test]
fn survives_nesting_far_beyond_the_default_stack() {
    assert_eq!(depth_of_chain(200_000), 200_000);
}

#[test]
fn propagates_results() {
    let r: Result<u8, String> = ensure_sufficient_stack(|| Err("internal".to_string()));
    assert_eq!(r, Err("internal".to_string()));
}
