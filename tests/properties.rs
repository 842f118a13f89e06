use proptest::prelude::*;
use xmas::{Value, run};

fn eval(src: &str) -> Value {
    run(src, None).unwrap_or_else(|e| panic!("Script failed: {e}\n{src}"))
}

fn list_source(items: &[i64]) -> String {
    let parts: Vec<String> = items.iter().map(ToString::to_string).collect();
    format!("[{}]", parts.join(", "))
}

proptest! {
    #[test]
    fn division_and_remainder_recombine(a in -100_000i64..100_000, b in -1_000i64..1_000) {
        prop_assume!(b != 0);

        let src = format!("a = {a}\nb = {b}\n(a / b) * b + a % b");
        prop_assert_eq!(eval(&src), Value::Integer(a));

        let remainder = eval(&format!("{a} % {b}"));
        if let Value::Integer(r) = remainder {
            prop_assert!(r == 0 || r.signum() == a.signum());
        } else {
            prop_assert!(false, "remainder is not an integer");
        }
    }

    #[test]
    fn range_literal_covers_both_ends(a in -50i64..50, b in -50i64..50) {
        let Value::List(items) = eval(&format!("[{a}..{b}]")) else {
            return Err(TestCaseError::fail("range is not a list"));
        };
        let numbers: Vec<i64> = items.iter()
                                     .map(|v| match v {
                                         Value::Integer(n) => *n,
                                         other => panic!("unexpected element {other:?}"),
                                     })
                                     .collect();

        prop_assert_eq!(numbers.len() as i64, (a - b).abs() + 1);
        prop_assert_eq!(numbers.first().copied(), Some(a));
        prop_assert_eq!(numbers.last().copied(), Some(b));
        if a <= b {
            prop_assert!(numbers.windows(2).all(|w| w[0] < w[1]));
        } else {
            prop_assert!(numbers.windows(2).all(|w| w[0] > w[1]));
        }
    }

    #[test]
    fn full_slice_is_identity(items in prop::collection::vec(-1_000i64..1_000, 0..12)) {
        let list = list_source(&items);
        let src = format!("xs = {list}\nxs[0..len(xs)] == xs");

        prop_assert_eq!(eval(&src), Value::Bool(true));
    }

    #[test]
    fn adjacent_slices_concatenate(items in prop::collection::vec(-1_000i64..1_000, 0..12),
                                   cuts in prop::array::uniform3(0usize..13)) {
        let mut cuts = cuts.map(|c| c.min(items.len()));
        cuts.sort_unstable();
        let [a, b, c] = cuts;

        let list = list_source(&items);
        let src = format!("xs = {list}\nxs[{a}..{b}] + xs[{b}..{c}] == xs[{a}..{c}]");

        prop_assert_eq!(eval(&src), Value::Bool(true));
    }

    #[test]
    fn pipe_applies_left_stage_first(x in -10_000i64..10_000, k in -100i64..100) {
        let defs = format!("f(x) = x + {k}\ng(x) = x * 3");
        let piped = eval(&format!("{defs}\n(f |> g)({x})"));
        let nested = eval(&format!("{defs}\ng(f({x}))"));

        prop_assert_eq!(piped, nested);
    }

    #[test]
    fn empty_loop_returns_initial_accumulator(init in -1_000i64..1_000) {
        let src = format!("for(n of [], {{ _ = _ * n + 1 }}, {init})");

        prop_assert_eq!(eval(&src), Value::Integer(init));
    }

    #[test]
    fn loop_accumulator_sums(items in prop::collection::vec(-1_000i64..1_000, 0..20)) {
        let list = list_source(&items);
        let src = format!("for(n of {list}, {{ _ = _ + n }}, 0)");

        prop_assert_eq!(eval(&src), Value::Integer(items.iter().sum()));
    }
}
