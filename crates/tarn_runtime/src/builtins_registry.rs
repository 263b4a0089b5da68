use ahash::RandomState;
use indexmap::IndexMap;

use crate::Value;
use crate::builtins;
use crate::runtime::Runtime;

pub type BuiltinFn = fn(&mut Runtime, &[Value]) -> Result<Value, String>;

/// The callable surface generated code may name.
pub const BUILTIN_NAMES: &[&str] = &[
    // text
    "str.len",
    "str.isEmpty",
    "str.charAt",
    "str.substring",
    "str.slice",
    "str.indexOf",
    "str.lastIndexOf",
    "str.contains",
    "str.startsWith",
    "str.endsWith",
    "str.toUpper",
    "str.toLower",
    "str.capitalize",
    "str.trimLeft",
    "str.trimRight",
    "str.trim",
    "str.split",
    "str.join",
    "str.replace",
    "str.replaceFirst",
    "str.repeat",
    "str.padLeft",
    "str.padRight",
    "str.toInt",
    "str.toFloat",
    "str.fromInt",
    "str.fromFloat",
    "str.isDigit",
    "str.isAlpha",
    "str.isAlnum",
    "str.isSpace",
    "str.isNumeric",
    "str.reverse",
    // numeric
    "math.PI",
    "math.E",
    "math.TAU",
    "math.SQRT2",
    "math.LN2",
    "math.LN10",
    "math.abs",
    "math.floor",
    "math.ceil",
    "math.round",
    "math.trunc",
    "math.min",
    "math.max",
    "math.clamp",
    "math.pow",
    "math.sqrt",
    "math.cbrt",
    "math.exp",
    "math.log",
    "math.log2",
    "math.log10",
    "math.sin",
    "math.cos",
    "math.tan",
    "math.asin",
    "math.acos",
    "math.atan",
    "math.atan2",
    "math.sinh",
    "math.cosh",
    "math.tanh",
    "math.toRadians",
    "math.toDegrees",
    "math.random",
    "math.randomInt",
    "math.randomFloat",
    "math.seed",
    "math.isNaN",
    "math.isInf",
    "math.isFinite",
    "math.sign",
    "math.gcd",
    "math.lcm",
    "math.factorial",
    "math.fibonacci",
    "math.isPrime",
    // console
    "io.print",
    "io.println",
    "io.eprint",
    "io.eprintln",
    "io.readln",
    "io.readInt",
    "io.readFloat",
    "io.format",
    "io.printf",
    "io.dbg",
    // filesystem
    "fs.readFile",
    "fs.writeFile",
    "fs.appendFile",
    "fs.readLines",
    "fs.exists",
    "fs.isFile",
    "fs.isDir",
    "fs.fileSize",
    "fs.extension",
    "fs.filename",
    "fs.parent",
    "fs.mkdir",
    "fs.mkdirp",
    "fs.remove",
    "fs.removeAll",
    "fs.listDir",
    "fs.copy",
    "fs.move",
    "fs.join",
    "fs.absolute",
    "fs.cwd",
    "fs.chdir",
];

pub struct BuiltinRegistry {
    entries: IndexMap<String, BuiltinFn, RandomState>,
}

impl BuiltinRegistry {
    pub fn new() -> Self {
        Self {
            entries: IndexMap::with_hasher(RandomState::new()),
        }
    }

    /// Register `fun` under `name`, replacing an earlier entry in place.
    pub fn register(&mut self, name: &str, fun: BuiltinFn) {
        if self.entries.insert(name.to_string(), fun).is_some() {
            tracing::debug!(name, "builtin replaced");
        }
    }

    pub fn get(&self, name: &str) -> Option<BuiltinFn> {
        self.entries.get(name).copied()
    }

    pub fn contains(&self, name: &str) -> bool {
        self.entries.contains_key(name)
    }

    /// Names in registration order.
    pub fn names(&self) -> Vec<String> {
        self.entries.keys().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl Default for BuiltinRegistry {
    fn default() -> Self {
        Self::new()
    }
}

pub trait BuiltinProvider {
    fn install(&self, registry: &mut BuiltinRegistry);
}

pub struct StdBuiltinProvider;

impl BuiltinProvider for StdBuiltinProvider {
    fn install(&self, registry: &mut BuiltinRegistry) {
        builtins::text::install(registry);
        builtins::math::install(registry);
        builtins::console::install(registry);
        builtins::fs::install(registry);
    }
}
