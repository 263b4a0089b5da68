use proptest::prelude::*;
use tarn_runtime::{Runtime, RuntimeConfig, Value};

fn runtime() -> Runtime {
    Runtime::with_config(RuntimeConfig {
        seed: Some(0),
        capture_output: true,
        ..RuntimeConfig::default()
    })
}

proptest! {
    #[test]
    fn join_then_split_returns_the_parts(
        parts in prop::collection::vec("[a-z ]{0,6}", 1..8),
        delim in "[,;|]{1,2}",
    ) {
        let mut rt = runtime();
        let list = Value::list(parts.iter().map(|p| Value::text(p.as_str())).collect());
        let joined = rt.call("str.join", &[list.clone(), Value::text(delim.as_str())]).unwrap();
        let split = rt.call("str.split", &[joined, Value::text(delim.as_str())]).unwrap();
        prop_assert_eq!(split, list);
    }

    #[test]
    fn reverse_through_values_is_an_involution(s in "[ -~]{0,40}") {
        let mut rt = runtime();
        let once = rt.call("str.reverse", &[Value::text(s.as_str())]).unwrap();
        let twice = rt.call("str.reverse", &[once]).unwrap();
        prop_assert_eq!(twice, Value::text(s.as_str()));
    }

    #[test]
    fn int_text_round_trip(n in any::<i64>()) {
        let mut rt = runtime();
        let text = rt.call("str.fromInt", &[Value::Int(n)]).unwrap();
        prop_assert_eq!(rt.call("str.toInt", &[text]), Ok(Value::Int(n)));
    }
}
