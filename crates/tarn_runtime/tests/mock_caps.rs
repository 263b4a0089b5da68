use tarn_runtime::{Runtime, RuntimeConfig, Value};
use tarn_std::host::{BufferedConsole, Capabilities, Entropy, RngAlgorithm, StdFileSystem};

struct FixedEntropy;
impl Entropy for FixedEntropy {
    fn seed(&self) -> u64 {
        0
    }
}

struct MockRng;
impl RngAlgorithm for MockRng {
    fn next_u64(&self, state: &mut u64) -> u64 {
        *state = state.wrapping_add(1);
        *state
    }
}

fn mock_runtime(input: &str) -> (Runtime, BufferedConsole) {
    let console = BufferedConsole::with_input(input);
    let caps = Capabilities {
        fs: Box::new(StdFileSystem),
        console: Box::new(console.clone()),
        entropy: Box::new(FixedEntropy),
        rng: Box::new(MockRng),
    };
    (Runtime::with_capabilities(RuntimeConfig::default(), caps), console)
}

#[test]
fn mock_entropy_and_rng_are_used() {
    let (mut rt, _console) = mock_runtime("");
    assert_eq!(rt.call("math.randomInt", &[0.into(), 9.into()]), Ok(Value::Int(1)));
    assert_eq!(rt.call("math.randomInt", &[0.into(), 9.into()]), Ok(Value::Int(2)));
    rt.call("math.seed", &[0.into()]).unwrap();
    assert_eq!(rt.call("math.randomInt", &[0.into(), 9.into()]), Ok(Value::Int(1)));
}

#[test]
fn injected_console_receives_output_and_supplies_input() {
    let (mut rt, console) = mock_runtime("ada\n41 oops\n");
    rt.call("io.print", &["name? ".into()]).unwrap();
    let name = rt.call("io.readln", &[]).unwrap();
    assert_eq!(name, Value::text("ada"));
    let n = rt.call("io.readInt", &[]).unwrap();
    assert_eq!(n, Value::Int(41));
    assert_eq!(rt.call("io.readInt", &[(-1).into()]), Ok(Value::Int(-1)));
    rt.call("io.println", &[name]).unwrap();
    rt.call("io.eprintln", &["done".into()]).unwrap();
    assert_eq!(console.output(), "name? ada\n");
    assert_eq!(console.diagnostics(), "done\n");
}

#[test]
fn rng_algorithm_can_be_swapped_after_construction() {
    let mut rt = Runtime::with_config(RuntimeConfig {
        seed: Some(7),
        capture_output: true,
        ..RuntimeConfig::default()
    });
    rt.set_rng_algorithm(Box::new(MockRng));
    rt.call("math.seed", &[0.into()]).unwrap();
    assert_eq!(rt.call("math.randomInt", &[0.into(), 9.into()]), Ok(Value::Int(1)));
    assert_eq!(rt.call("math.randomInt", &[0.into(), 9.into()]), Ok(Value::Int(2)));
}
