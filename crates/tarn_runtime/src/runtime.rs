//! The runtime: owned host capabilities plus builtin dispatch.

use tarn_std::console::{Console, DEFAULT_DEBUG_LABEL};
use tarn_std::fs::Fs;
use tarn_std::host::{BufferedConsole, Capabilities, RngAlgorithm};
use tarn_std::num::RandomStream;

use crate::Value;
use crate::builtins_registry::{BuiltinFn, BuiltinProvider, BuiltinRegistry, StdBuiltinProvider};
use crate::diag::{DiagnosticKind, DiagnosticsFormatter, find_best_match};

/// Result of a run: the final value plus everything captured on the way.
#[derive(Debug)]
pub struct ExecResult {
    pub value: Value,
    pub output: String,
    pub diagnostics: Vec<String>,
}

#[derive(Clone, Debug)]
pub struct RuntimeConfig {
    /// Seed for the runtime's random stream; `None` draws from host entropy.
    pub seed: Option<u64>,
    /// Route console output into memory and return it in `ExecResult`.
    pub capture_output: bool,
    pub debug_label: String,
    /// Returned by `io.readInt` for a missing or malformed token.
    pub read_fallback_int: i64,
    /// Returned by `io.readFloat` for a missing or malformed token.
    pub read_fallback_float: f64,
}

impl Default for RuntimeConfig {
    fn default() -> Self {
        Self {
            seed: None,
            capture_output: false,
            debug_label: DEFAULT_DEBUG_LABEL.to_string(),
            read_fallback_int: 0,
            read_fallback_float: 0.0,
        }
    }
}

impl RuntimeConfig {
    pub const SEED_VAR: &'static str = "TARN_SEED";
    pub const DEBUG_LABEL_VAR: &'static str = "TARN_DEBUG_LABEL";

    /// Defaults overlaid with `TARN_SEED` and `TARN_DEBUG_LABEL`.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Like [`RuntimeConfig::from_env`] over an arbitrary variable source.
    /// Values that do not parse are ignored.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let mut config = Self::default();
        if let Some(raw) = lookup(Self::SEED_VAR) {
            match raw.trim().parse::<u64>() {
                Ok(seed) => config.seed = Some(seed),
                Err(_) => tracing::warn!(
                    "{}",
                    DiagnosticsFormatter::format(&DiagnosticKind::InvalidConfig {
                        key: Self::SEED_VAR.to_string(),
                        value: raw,
                    })
                ),
            }
        }
        if let Some(label) = lookup(Self::DEBUG_LABEL_VAR) {
            config.debug_label = label;
        }
        config
    }
}

pub struct Runtime {
    config: RuntimeConfig,
    rng: RandomStream,
    console: Console,
    fs: Fs,
    captured: Option<BufferedConsole>,
    builtins: BuiltinRegistry,
    diagnostics: Vec<String>,
}

impl Runtime {
    pub fn new() -> Self {
        Self::with_config(RuntimeConfig::default())
    }

    pub fn with_config(config: RuntimeConfig) -> Self {
        Self::with_capabilities(config, Capabilities::default())
    }

    pub fn with_capabilities(config: RuntimeConfig, caps: Capabilities) -> Self {
        let Capabilities {
            fs,
            console,
            entropy,
            rng,
        } = caps;
        let seed = config.seed.unwrap_or_else(|| entropy.seed());
        let (console, captured) = if config.capture_output {
            let buffered = BufferedConsole::new();
            (Console::new(Box::new(buffered.clone())), Some(buffered))
        } else {
            (Console::new(console), None)
        };
        let mut rt = Self {
            rng: RandomStream::with_algorithm(seed, rng),
            console,
            fs: Fs::new(fs),
            captured,
            builtins: BuiltinRegistry::new(),
            diagnostics: Vec::new(),
            config,
        };
        rt.console.set_debug_label(rt.config.debug_label.clone());
        rt.install(&StdBuiltinProvider);
        rt
    }

    pub fn config(&self) -> &RuntimeConfig {
        &self.config
    }

    pub fn install(&mut self, provider: &dyn BuiltinProvider) {
        provider.install(&mut self.builtins);
    }

    pub fn register_builtin(&mut self, name: &str, fun: BuiltinFn) {
        self.builtins.register(name, fun);
    }

    pub fn has_builtin(&self, name: &str) -> bool {
        self.builtins.contains(name)
    }

    pub fn builtin_names(&self) -> Vec<String> {
        self.builtins.names()
    }

    /// Call the builtin `name`. Guard failures are returned and also kept
    /// for the final [`ExecResult`].
    pub fn call(&mut self, name: &str, args: &[Value]) -> Result<Value, String> {
        let Some(fun) = self.builtins.get(name) else {
            let mut msg = DiagnosticsFormatter::format(&DiagnosticKind::UnknownBuiltin(name.to_string()));
            let names = self.builtins.names();
            if let Some(best) = find_best_match(name, names.iter().map(String::as_str)) {
                msg.push(' ');
                msg.push_str(&DiagnosticsFormatter::format(&DiagnosticKind::DidYouMean(best.to_string())));
            }
            self.diagnostics.push(msg.clone());
            return Err(msg);
        };
        fun(self, args).inspect_err(|e| {
            tracing::debug!(builtin = name, error = %e, "builtin call failed");
            self.diagnostics.push(e.clone());
        })
    }

    pub fn rng(&mut self) -> &mut RandomStream {
        &mut self.rng
    }

    pub fn set_rng_seed(&mut self, seed: u64) {
        self.rng.seed(seed);
    }

    pub fn set_rng_algorithm(&mut self, algo: Box<dyn RngAlgorithm>) {
        self.rng.set_algorithm(algo);
    }

    pub fn console(&mut self) -> &mut Console {
        &mut self.console
    }

    pub fn fs(&self) -> &Fs {
        &self.fs
    }

    /// Queue console input. Only meaningful when output is captured; the
    /// real stdin cannot be fed.
    pub fn push_input(&self, input: impl AsRef<[u8]>) {
        match &self.captured {
            Some(buffered) => buffered.push_input(input),
            None => tracing::debug!("push_input ignored without capture_output"),
        }
    }

    /// Captured output so far, drained.
    pub fn take_output(&mut self) -> String {
        self.console.flush();
        self.captured
            .as_ref()
            .map(|b| b.take_output().to_string_lossy())
            .unwrap_or_default()
    }

    /// Captured diagnostic stream so far, drained.
    pub fn take_stderr(&mut self) -> String {
        self.captured
            .as_ref()
            .map(|b| b.take_diagnostics().to_string_lossy())
            .unwrap_or_default()
    }

    pub fn finish(&mut self, value: Value) -> ExecResult {
        ExecResult {
            value,
            output: self.take_output(),
            diagnostics: std::mem::take(&mut self.diagnostics),
        }
    }
}
