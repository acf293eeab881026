use std::fs;
use std::path::PathBuf;

use indoc::indoc;

use implgen_lib::BodyStyle;

use super::stub::{self, StubArgs};
use crate::error::CliError;

const MODULE: &str = indoc! {r#"
    {
      "path": "example.com/clock",
      "types": {
        "Clock": {
          "kind": "interface",
          "methods": [
            {
              "name": "Now",
              "type": {
                "kind": "signature",
                "results": [{ "type": { "kind": "named", "module": "time", "name": "Time" } }]
              }
            },
            {
              "name": "After",
              "type": {
                "kind": "signature",
                "params": [{ "name": "d", "type": { "kind": "named", "module": "time", "name": "Duration" } }],
                "results": [{ "type": { "kind": "chan", "dir": "recv", "elem": { "kind": "named", "module": "time", "name": "Time" } } }]
              }
            }
          ]
        }
      }
    }
"#};

fn args(module_path: PathBuf, output: Option<PathBuf>) -> StubArgs {
    StubArgs {
        module_path,
        type_name: "FakeClock".to_string(),
        receiver: "c".to_string(),
        pointer: true,
        interfaces: vec!["Clock".to_string()],
        body: BodyStyle::Zero,
        message: "not implemented".to_string(),
        declare_type: true,
        package: Some("clocktest".to_string()),
        package_path: None,
        header: true,
        output,
    }
}

#[test]
fn writes_stub_file() {
    let dir = tempfile::tempdir().unwrap();
    let module_path = dir.path().join("clock.json");
    let output = dir.path().join("fake_clock.go");
    fs::write(&module_path, MODULE).unwrap();

    stub::run(args(module_path, Some(output.clone()))).unwrap();

    let source = fs::read_to_string(&output).unwrap().replace('\t', "    ");
    insta::assert_snapshot!(source, @r#"
    // Code generated by implgen. DO NOT EDIT.

    package clocktest

    import "time"

    type FakeClock struct{}

    func (c *FakeClock) Now() time.Time {
        return *new(time.Time)
    }

    func (c *FakeClock) After(d time.Duration) <-chan time.Time {
        return nil
    }
    "#);
}

#[test]
fn missing_module_file() {
    let dir = tempfile::tempdir().unwrap();
    let module_path = dir.path().join("missing.json");
    let err = stub::run(args(module_path, None)).unwrap_err();
    assert!(matches!(err, CliError::Read { .. }));
    assert!(err.to_string().starts_with("failed to read "));
}

#[test]
fn invalid_module_file() {
    let dir = tempfile::tempdir().unwrap();
    let module_path = dir.path().join("bad.json");
    fs::write(&module_path, r#"{"path": "example.com/bad", "types": {"X": {"kind": "union"}}}"#)
        .unwrap();
    let err = stub::run(args(module_path, None)).unwrap_err();
    assert!(matches!(err, CliError::Load { .. }));
    assert!(err.to_string().contains("invalid module description"));
}

#[test]
fn config_follows_args() {
    let mut args = args(PathBuf::from("clock.json"), None);
    args.pointer = false;
    args.body = BodyStyle::Panic;
    args.header = false;
    args.declare_type = false;
    let module = implgen_core::Module::from_json(MODULE).unwrap();
    let source = stub::generate(&module, &args).unwrap();
    assert_eq!(
        source,
        "package clocktest\n\n\
         import \"time\"\n\n\
         func (c FakeClock) Now() time.Time {\n\tpanic(\"not implemented\")\n}\n\n\
         func (c FakeClock) After(d time.Duration) <-chan time.Time {\n\tpanic(\"not implemented\")\n}\n"
    );
}
