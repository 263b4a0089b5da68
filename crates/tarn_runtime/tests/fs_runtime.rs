use tarn_runtime::{Runtime, RuntimeConfig, Value};

fn runtime() -> Runtime {
    Runtime::with_config(RuntimeConfig {
        seed: Some(1),
        capture_output: true,
        ..RuntimeConfig::default()
    })
}

fn path(dir: &tempfile::TempDir, name: &str) -> Value {
    Value::text(&*dir.path().join(name).to_string_lossy())
}

#[test]
fn write_read_and_list_through_builtins() {
    let dir = tempfile::tempdir().unwrap();
    let mut rt = runtime();
    let notes = path(&dir, "notes.txt");

    assert_eq!(
        rt.call("fs.writeFile", &[notes.clone(), "one\r\ntwo\n".into()]),
        Ok(Value::Bool(true))
    );
    assert_eq!(
        rt.call("fs.appendFile", &[notes.clone(), "three\n".into()]),
        Ok(Value::Bool(true))
    );
    assert_eq!(
        rt.call("fs.readLines", &[notes.clone()]),
        Ok(Value::list(vec![
            Value::text("one"),
            Value::text("two"),
            Value::text("three"),
        ]))
    );
    assert_eq!(rt.call("fs.fileSize", &[notes.clone()]), Ok(Value::Int(15)));
    assert_eq!(
        rt.call("fs.readFile", &[notes.clone()]),
        Ok(Value::some(Value::text("one\r\ntwo\nthree\n")))
    );
    assert_eq!(
        rt.call("fs.readFile", &[path(&dir, "missing")]),
        Ok(Value::none())
    );
    assert_eq!(
        rt.call("fs.listDir", &[Value::text(&*dir.path().to_string_lossy())]),
        Ok(Value::list(vec![Value::text("notes.txt")]))
    );
}

#[test]
fn directories_copy_move_and_remove() {
    let dir = tempfile::tempdir().unwrap();
    let mut rt = runtime();
    let nested = path(&dir, "a/b/c");

    assert_eq!(rt.call("fs.mkdir", &[nested.clone()]), Ok(Value::Bool(false)));
    assert_eq!(rt.call("fs.mkdirp", &[nested.clone()]), Ok(Value::Bool(true)));
    assert_eq!(rt.call("fs.isDir", &[nested.clone()]), Ok(Value::Bool(true)));

    let src = path(&dir, "a/b/c/x.txt");
    let copy = path(&dir, "a/y.txt");
    let moved = path(&dir, "z.txt");
    rt.call("fs.writeFile", &[src.clone(), "x".into()]).unwrap();
    assert_eq!(rt.call("fs.copy", &[src.clone(), copy.clone()]), Ok(Value::Bool(true)));
    assert_eq!(rt.call("fs.copy", &[nested.clone(), copy.clone()]), Ok(Value::Bool(false)));
    assert_eq!(rt.call("fs.move", &[copy.clone(), moved.clone()]), Ok(Value::Bool(true)));
    assert_eq!(rt.call("fs.exists", &[copy]), Ok(Value::Bool(false)));
    assert_eq!(rt.call("fs.isFile", &[moved.clone()]), Ok(Value::Bool(true)));

    // a, a/b, a/b/c, a/b/c/x.txt
    assert_eq!(rt.call("fs.removeAll", &[path(&dir, "a")]), Ok(Value::Int(4)));
    assert_eq!(rt.call("fs.removeAll", &[path(&dir, "a")]), Ok(Value::Int(0)));
    assert_eq!(rt.call("fs.remove", &[moved.clone()]), Ok(Value::Bool(true)));
    assert_eq!(rt.call("fs.remove", &[moved]), Ok(Value::Bool(false)));
    assert!(rt.finish(Value::Unit).diagnostics.is_empty());
}

#[test]
fn path_helpers_are_pure() {
    let mut rt = runtime();
    assert_eq!(
        rt.call("fs.extension", &["dir/archive.tar.gz".into()]),
        Ok(Value::text(".gz"))
    );
    assert_eq!(rt.call("fs.extension", &["Makefile".into()]), Ok(Value::text("")));
    assert_eq!(
        rt.call("fs.filename", &["dir/archive.tar.gz".into()]),
        Ok(Value::text("archive.tar.gz"))
    );
    assert_eq!(rt.call("fs.parent", &["dir/sub/f".into()]), Ok(Value::text("dir/sub")));
    assert_eq!(rt.call("fs.join", &["dir".into(), "f".into()]), Ok(Value::text("dir/f")));
    let Ok(Value::Text(cwd)) = rt.call("fs.cwd", &[]) else {
        panic!("fs.cwd should return text");
    };
    assert!(!cwd.is_empty());
    let err = rt.call("fs.join", &["dir".into(), 3.into()]).unwrap_err();
    assert_eq!(err, "fs.join: parameter 'b' expects text but got int");
}
