use std::rc::Rc;

use tarn_std::console::{FormatArg, Render};
use tarn_std::text::Text;

#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Unit,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(Text),
    List(Rc<Vec<Value>>),
    Opt(Option<Box<Value>>),
}

impl Value {
    pub fn text(s: impl Into<Text>) -> Self {
        Value::Text(s.into())
    }

    pub fn list(items: Vec<Value>) -> Self {
        Value::List(Rc::new(items))
    }

    pub fn text_list(items: Vec<Text>) -> Self {
        Self::list(items.into_iter().map(Value::Text).collect())
    }

    pub fn some(v: Value) -> Self {
        Value::Opt(Some(Box::new(v)))
    }

    pub fn none() -> Self {
        Value::Opt(None)
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Unit => "unit",
            Value::Bool(_) => "bool",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
            Value::Text(_) => "text",
            Value::List(_) => "list",
            Value::Opt(_) => "option",
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Numeric view: floats as is, ints widened.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&Text> {
        match self {
            Value::Text(t) => Some(t),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(items) => Some(items),
            _ => None,
        }
    }

    /// Printf argument for the primitive kinds; `None` for unit, lists and
    /// options.
    pub fn to_format_arg(&self) -> Option<FormatArg> {
        match self {
            Value::Bool(b) => Some(FormatArg::Bool(*b)),
            Value::Int(i) => Some(FormatArg::Int(*i)),
            Value::Float(f) => Some(FormatArg::Float(*f)),
            Value::Text(t) => Some(FormatArg::Text(t.clone())),
            _ => None,
        }
    }
}

impl Render for Value {
    fn render_into(&self, out: &mut Vec<u8>) {
        match self {
            Value::Unit => out.extend_from_slice(b"()"),
            Value::Bool(b) => b.render_into(out),
            Value::Int(i) => i.render_into(out),
            Value::Float(f) => f.render_into(out),
            Value::Text(t) => t.render_into(out),
            Value::List(items) => {
                out.push(b'[');
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        out.extend_from_slice(b", ");
                    }
                    item.render_into(out);
                }
                out.push(b']');
            }
            Value::Opt(None) => out.extend_from_slice(b"none"),
            Value::Opt(Some(v)) => {
                out.extend_from_slice(b"some(");
                v.render_into(out);
                out.push(b')');
            }
        }
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<Text> for Value {
    fn from(v: Text) -> Self {
        Value::Text(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.into())
    }
}

impl From<Option<Text>> for Value {
    fn from(v: Option<Text>) -> Self {
        match v {
            Some(t) => Value::some(Value::Text(t)),
            None => Value::none(),
        }
    }
}
