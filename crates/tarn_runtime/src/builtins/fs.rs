use tarn_std::fs;
use tarn_std::text::Text;

use super::common::{expect_args, to_text};
use crate::Value;
use crate::builtins_registry::BuiltinRegistry;
use crate::runtime::Runtime;

pub fn install(registry: &mut BuiltinRegistry) {
    registry.register("fs.readFile", builtin_read_file);
    registry.register("fs.writeFile", builtin_write_file);
    registry.register("fs.appendFile", builtin_append_file);
    registry.register("fs.readLines", builtin_read_lines);
    registry.register("fs.exists", builtin_exists);
    registry.register("fs.isFile", builtin_is_file);
    registry.register("fs.isDir", builtin_is_dir);
    registry.register("fs.fileSize", builtin_file_size);
    registry.register("fs.extension", builtin_extension);
    registry.register("fs.filename", builtin_filename);
    registry.register("fs.parent", builtin_parent);
    registry.register("fs.mkdir", builtin_mkdir);
    registry.register("fs.mkdirp", builtin_mkdirp);
    registry.register("fs.remove", builtin_remove);
    registry.register("fs.removeAll", builtin_remove_all);
    registry.register("fs.listDir", builtin_list_dir);
    registry.register("fs.copy", builtin_copy);
    registry.register("fs.move", builtin_move);
    registry.register("fs.join", builtin_join);
    registry.register("fs.absolute", builtin_absolute);
    registry.register("fs.cwd", builtin_cwd);
    registry.register("fs.chdir", builtin_chdir);
}

fn path_arg(name: &str, args: &[Value]) -> Result<Text, String> {
    expect_args(name, args, 1, 1)?;
    Ok(to_text(name, "path", &args[0])?.clone())
}

fn path_pair(name: &str, args: &[Value], first: &str, second: &str) -> Result<(Text, Text), String> {
    expect_args(name, args, 2, 2)?;
    let a = to_text(name, first, &args[0])?.clone();
    let b = to_text(name, second, &args[1])?.clone();
    Ok((a, b))
}

fn builtin_read_file(rt: &mut Runtime, args: &[Value]) -> Result<Value, String> {
    let path = path_arg("fs.readFile", args)?;
    Ok(Value::from(rt.fs().read_file(path)))
}

fn builtin_write_file(rt: &mut Runtime, args: &[Value]) -> Result<Value, String> {
    let (path, content) = path_pair("fs.writeFile", args, "path", "content")?;
    Ok(Value::Bool(rt.fs().write_file(path, content)))
}

fn builtin_append_file(rt: &mut Runtime, args: &[Value]) -> Result<Value, String> {
    let (path, content) = path_pair("fs.appendFile", args, "path", "content")?;
    Ok(Value::Bool(rt.fs().append_file(path, content)))
}

fn builtin_read_lines(rt: &mut Runtime, args: &[Value]) -> Result<Value, String> {
    let path = path_arg("fs.readLines", args)?;
    Ok(Value::text_list(rt.fs().read_lines(path)))
}

fn builtin_exists(rt: &mut Runtime, args: &[Value]) -> Result<Value, String> {
    let path = path_arg("fs.exists", args)?;
    Ok(Value::Bool(rt.fs().exists(path)))
}

fn builtin_is_file(rt: &mut Runtime, args: &[Value]) -> Result<Value, String> {
    let path = path_arg("fs.isFile", args)?;
    Ok(Value::Bool(rt.fs().is_file(path)))
}

fn builtin_is_dir(rt: &mut Runtime, args: &[Value]) -> Result<Value, String> {
    let path = path_arg("fs.isDir", args)?;
    Ok(Value::Bool(rt.fs().is_dir(path)))
}

fn builtin_file_size(rt: &mut Runtime, args: &[Value]) -> Result<Value, String> {
    let path = path_arg("fs.fileSize", args)?;
    Ok(Value::Int(rt.fs().file_size(path)))
}

fn builtin_extension(_rt: &mut Runtime, args: &[Value]) -> Result<Value, String> {
    Ok(Value::Text(fs::extension(path_arg("fs.extension", args)?)))
}

fn builtin_filename(_rt: &mut Runtime, args: &[Value]) -> Result<Value, String> {
    Ok(Value::Text(fs::filename(path_arg("fs.filename", args)?)))
}

fn builtin_parent(_rt: &mut Runtime, args: &[Value]) -> Result<Value, String> {
    Ok(Value::Text(fs::parent(path_arg("fs.parent", args)?)))
}

fn builtin_mkdir(rt: &mut Runtime, args: &[Value]) -> Result<Value, String> {
    let path = path_arg("fs.mkdir", args)?;
    Ok(Value::Bool(rt.fs().mkdir(path)))
}

fn builtin_mkdirp(rt: &mut Runtime, args: &[Value]) -> Result<Value, String> {
    let path = path_arg("fs.mkdirp", args)?;
    Ok(Value::Bool(rt.fs().mkdirp(path)))
}

fn builtin_remove(rt: &mut Runtime, args: &[Value]) -> Result<Value, String> {
    let path = path_arg("fs.remove", args)?;
    Ok(Value::Bool(rt.fs().remove(path)))
}

fn builtin_remove_all(rt: &mut Runtime, args: &[Value]) -> Result<Value, String> {
    let path = path_arg("fs.removeAll", args)?;
    Ok(Value::Int(rt.fs().remove_all(path)))
}

fn builtin_list_dir(rt: &mut Runtime, args: &[Value]) -> Result<Value, String> {
    let path = path_arg("fs.listDir", args)?;
    Ok(Value::text_list(rt.fs().list_dir(path)))
}

fn builtin_copy(rt: &mut Runtime, args: &[Value]) -> Result<Value, String> {
    let (from, to) = path_pair("fs.copy", args, "src", "dst")?;
    Ok(Value::Bool(rt.fs().copy(from, to)))
}

fn builtin_move(rt: &mut Runtime, args: &[Value]) -> Result<Value, String> {
    let (from, to) = path_pair("fs.move", args, "src", "dst")?;
    Ok(Value::Bool(rt.fs().move_path(from, to)))
}

fn builtin_join(_rt: &mut Runtime, args: &[Value]) -> Result<Value, String> {
    let (a, b) = path_pair("fs.join", args, "a", "b")?;
    Ok(Value::Text(fs::join(a, b)))
}

fn builtin_absolute(rt: &mut Runtime, args: &[Value]) -> Result<Value, String> {
    let path = path_arg("fs.absolute", args)?;
    Ok(Value::Text(rt.fs().absolute(path)))
}

fn builtin_cwd(rt: &mut Runtime, args: &[Value]) -> Result<Value, String> {
    expect_args("fs.cwd", args, 0, 0)?;
    Ok(Value::Text(rt.fs().cwd()))
}

fn builtin_chdir(rt: &mut Runtime, args: &[Value]) -> Result<Value, String> {
    let path = path_arg("fs.chdir", args)?;
    Ok(Value::Bool(rt.fs().chdir(path)))
}
