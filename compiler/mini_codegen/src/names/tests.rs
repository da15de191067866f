use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::*;

fn number(name: &str, prefix: &str) -> u32 {
    name.strip_prefix(prefix)
        .and_then(|n| n.parse().ok())
        .unwrap_or_else(|| panic!("malformed name {name}"))
}

#[test]
fn starts_in_entry_block() {
    let names = NameAllocator::new();
    assert_eq!(names.current_label(), "entry");
}

#[test]
fn first_names() {
    let mut names = NameAllocator::new();
    assert_eq!(names.next_register(), "%r1");
    assert_eq!(names.next_label(), "L1");
    assert_eq!(names.next_register(), "%r2");
    assert_eq!(names.next_label(), "L2");
}

#[test]
fn allocating_a_label_does_not_open_it() {
    let mut names = NameAllocator::new();
    let label = names.next_label();
    assert_eq!(names.current_label(), "entry");
    names.declare_label(&label);
    assert_eq!(names.current_label(), "L1");
}

proptest! {
    /// Any interleaving of allocations yields strictly increasing, never
    /// repeated register and label numbers.
    #[test]
    fn names_strictly_increase(ops in proptest::collection::vec(any::<bool>(), 0..200)) {
        let mut names = NameAllocator::new();
        let mut last_register = 0;
        let mut last_label = 0;
        for take_register in ops {
            if take_register {
                let n = number(&names.next_register(), "%r");
                prop_assert!(n > last_register);
                last_register = n;
            } else {
                let label = names.next_label();
                let n = number(&label, "L");
                prop_assert!(n > last_label);
                last_label = n;
                names.declare_label(&label);
                prop_assert_eq!(names.current_label(), label.as_str());
            }
        }
    }
}
