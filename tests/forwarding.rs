//! Argument forwarding and receiver dispatch.

use bound_call::{bind, bind_mut, bind_mut_once, bind_ref};

fn label(prefix: String, n: i32) -> String {
    format!("{prefix}{n}")
}

fn spread(a: i32, b: i32, c: i32, d: i32, e: i32, f: i32, g: i32, h: i32) -> Vec<i32> {
    vec![a, b, c, d, e, f, g, h]
}

#[derive(Default)]
struct Adder {
    calls: i64,
}

impl Adder {
    fn sum(&self, a: i32, b: i32) -> i32 {
        a + b
    }
}

#[derive(Default)]
struct Tally {
    total: i64,
}

impl Tally {
    fn add(&mut self, amount: i64) {
        self.total += amount;
    }

    fn scaled_add(&mut self, factor: i64, amount: i64) {
        self.total += factor * amount;
    }
}

#[test]
fn free_function_with_bound_prefix() {
    let mut cb = bind(label, ("prefix-".to_string(),));
    assert_eq!(cb.run((42,)), "prefix-42");
}

#[test]
fn four_bound_then_four_call_time() {
    let mut cb = bind(spread, (1, 2, 3, 4));
    assert_eq!(cb.run((5, 6, 7, 8)), vec![1, 2, 3, 4, 5, 6, 7, 8]);
}

#[test]
fn no_arguments_at_all() {
    let mut cb = bind(|| 42, ());
    assert_eq!(cb.run(()), 42);
}

#[test]
fn everything_at_call_time() {
    let mut cb = bind(|a: i32, b: i32, c: i32, d: i32| vec![a, b, c, d], ());
    assert_eq!(cb.run((9, 8, 7, 6)), vec![9, 8, 7, 6]);
}

#[test]
fn method_through_shared_receiver_leaves_it_untouched() {
    let adder = Adder::default();
    let mut cb = bind_ref(&adder, Adder::sum, ());
    assert_eq!(cb.run((3, 4)), 7);
    drop(cb);
    assert_eq!(adder.calls, 0);
}

#[test]
fn method_mutations_visible_after_the_handle_drops() {
    let mut tally = Tally::default();
    let mut cb = bind_mut(&mut tally, Tally::scaled_add, (10,));
    cb.run((3,));
    cb.run((4,));
    drop(cb);
    assert_eq!(tally.total, 70);
}

#[test]
fn consuming_run_ends_the_receiver_borrow() {
    let mut tally = Tally::default();
    let cb = bind_mut_once(&mut tally, Tally::add, (5,));
    cb.run(());
    assert_eq!(tally.total, 5);
}

#[test]
fn repeated_runs_of_a_pure_target_agree() {
    let mut cb = bind(|a: i32, b: i32| a * 31 + b, (5,));
    let first = cb.run((1,));
    let second = cb.run((1,));
    assert_eq!(first, second);
}

#[test]
fn bound_values_are_captured_by_value() {
    let mut base = String::from("a");
    let mut cb = bind(|s: String, n: i32| format!("{s}{n}"), (base.clone(),));
    base.push('b');
    assert_eq!(cb.run((1,)), "a1");
}

#[test]
fn stateful_closure_targets_keep_their_state() {
    let mut cb = bind(
        {
            let mut seen = 0;
            move |n: i32| {
                seen += n;
                seen
            }
        },
        (),
    );
    assert_eq!(cb.run((2,)), 2);
    assert_eq!(cb.run((3,)), 5);
}

#[test]
fn debug_names_the_arguments_not_the_target() {
    let cb = bind(|a: i32| a, ());
    let repr = format!("{cb:?}");
    assert!(repr.contains("Callback"));
    assert!(repr.contains("arity: 1"));
}
