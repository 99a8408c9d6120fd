//! End-to-end rendering tests.
//!
//! Run `cargo insta review` to update snapshots when making intentional changes.

use ktpoet_codegen::builder::{
    Arg, ClassName, CodeBlock, FileSpec, FunSpec, MemberName, Modifier, ParameterSpec,
    PropertySpec, TypeAliasSpec, TypeName, TypeSpec, TypeVariableName,
};
use ktpoet_codegen::code_block;
use ktpoet_codegen::{FormatError, FormatOptions};
use ktpoet_core::{GeneratedFile, WriteResult};
use tempfile::TempDir;

fn class(package: &str, name: &str) -> ClassName {
    ClassName::new(package, [name]).unwrap()
}

fn property(name: &str, type_name: impl Into<TypeName>) -> PropertySpec {
    PropertySpec::builder(name, type_name).build().unwrap()
}

fn greeter() -> FileSpec {
    let name = PropertySpec::builder("name", TypeName::string())
        .initializer("%S", [Arg::from("World")])
        .unwrap()
        .build()
        .unwrap();
    let greet = FunSpec::builder("greet")
        .returns(TypeName::string())
        .add_statement("return %S + name", [Arg::from("Hello, ")])
        .unwrap()
        .build()
        .unwrap();
    let greeter = TypeSpec::class_builder("Greeter")
        .add_function(greet)
        .add_property(name)
        .build()
        .unwrap();
    FileSpec::get("com.example", greeter).unwrap()
}

#[test]
fn test_greeter() {
    let file = greeter();
    assert!(file.imports().is_empty());
    insta::assert_snapshot!(file.render(), @r#"
package com.example

class Greeter {
  val name: String = "World"

  fun greet(): String {
    return "Hello, " + name
  }
}
"#);
}

#[test]
fn test_rendering_is_deterministic() {
    let file = greeter();
    let first = file.render();
    assert_eq!(first, file.render());
    assert_eq!(first, file.clone().render());
    assert_eq!(first, file.to_string());
}

#[test]
fn test_colliding_names_stay_qualified() {
    let holder = TypeSpec::class_builder("Holder")
        .add_property(property("first", class("com.a", "Widget")))
        .add_property(property("second", class("com.b", "Widget")))
        .build()
        .unwrap();
    let file = FileSpec::get("app", holder).unwrap();

    assert!(file.imports().is_empty());
    insta::assert_snapshot!(file.render(), @r"
package app

class Holder {
  val first: com.a.Widget
  val second: com.b.Widget
}
");
}

#[test]
fn test_single_package_is_imported_and_short() {
    let json = class("org.json", "JSONObject");
    let parse = FunSpec::builder("parse")
        .add_param("raw", TypeName::string())
        .returns(json.clone())
        .add_statement("return %T(raw)", [Arg::from(json.clone())])
        .unwrap()
        .build()
        .unwrap();
    let users = ClassName::list()
        .parameterized_by([class("app.model", "User").into()])
        .unwrap();
    let parser = TypeSpec::object_builder("Parser")
        .add_property(property("cache", users))
        .add_function(parse)
        .build()
        .unwrap();
    let file = FileSpec::get("app", parser).unwrap();

    let imports: Vec<_> = file.imports().iter().map(ClassName::canonical_name).collect();
    assert_eq!(imports, ["app.model.User", "org.json.JSONObject"]);
    insta::assert_snapshot!(file.render(), @r"
package app

import app.model.User
import org.json.JSONObject

object Parser {
  val cache: List<User>

  fun parse(raw: String): JSONObject {
    return JSONObject(raw)
  }
}
");
}

#[test]
fn test_nested_types_are_never_imported() {
    let outer = class("com.example", "Outer");
    let inner = outer.nested_class("Inner").unwrap();
    let spec = TypeSpec::class_builder("Outer")
        .add_property(property("local", inner))
        .add_property(property("foreign", class("com.other", "Inner")))
        .add_type(TypeSpec::class_builder("Inner").build().unwrap())
        .build()
        .unwrap();
    let file = FileSpec::get("com.example", spec).unwrap();

    assert!(file.imports().is_empty());
    insta::assert_snapshot!(file.render(), @r"
package com.example

class Outer {
  val local: Inner
  val foreign: com.other.Inner

  class Inner
}
");
}

#[test]
fn test_sibling_nested_type_resolves_from_deeper_scope() {
    let outer = class("com.example", "Outer");
    let left = outer.nested_class("Left").unwrap();
    let right = TypeSpec::class_builder("Right")
        .add_property(property("sibling", left))
        .build()
        .unwrap();
    let spec = TypeSpec::class_builder("Outer")
        .add_type(TypeSpec::class_builder("Left").build().unwrap())
        .add_type(right)
        .build()
        .unwrap();
    let file = FileSpec::get("com.example", spec).unwrap();

    insta::assert_snapshot!(file.render(), @r"
package com.example

class Outer {
  class Left

  class Right {
    val sibling: Left
  }
}
");
}

#[test]
fn test_members_are_grouped_regardless_of_insertion_order() {
    let spec = TypeSpec::class_builder("Counter")
        .add_type(TypeSpec::object_builder("Defaults").build().unwrap())
        .add_function(FunSpec::builder("increment").build().unwrap())
        .add_function(
            FunSpec::constructor_builder()
                .add_param("start", TypeName::INT)
                .add_statement("count = start", Vec::new())
                .unwrap()
                .build()
                .unwrap(),
        )
        .add_initializer_block(code_block!("check(count >= 0)\n").unwrap())
        .add_property(
            PropertySpec::builder("count", TypeName::INT)
                .mutable()
                .initializer("%L", [Arg::from(0)])
                .unwrap()
                .build()
                .unwrap(),
        )
        .add_static_block(code_block!("println(%S)", "loaded").unwrap())
        .add_property(
            PropertySpec::builder("MAX", TypeName::INT)
                .static_()
                .add_modifier(Modifier::Const)
                .initializer("%L", [Arg::from(10)])
                .unwrap()
                .build()
                .unwrap(),
        )
        .add_function(FunSpec::builder("reset").build().unwrap())
        .build()
        .unwrap();

    insta::assert_snapshot!(spec.to_string(), @r#"
class Counter {
  companion object {
    const val MAX: Int = 10

    init {
      println("loaded")
    }
  }

  var count: Int = 0

  init {
    check(count >= 0)
  }

  constructor(start: Int) {
    count = start
  }

  fun increment() {
  }

  fun reset() {
  }

  object Defaults
}
"#);
}

#[test]
fn test_string_literal_escaping() {
    let tricky = PropertySpec::builder("message", TypeName::string())
        .initializer("%S", [Arg::from("say \"hi\"\\\n$total é")])
        .unwrap()
        .build()
        .unwrap();
    assert_eq!(
        tricky.to_string(),
        "val message: kotlin.String = \"say \\\"hi\\\"\\\\\\n\\$total \\u00e9\"\n"
    );
}

/// `abstract fun f(alpha: Int, ..., <last>: Int)` padded to `width` columns.
fn signature_of_width(width: usize) -> FunSpec {
    let names = ["alpha", "bravo", "charlie", "delta", "echo", "foxtrot"];
    let fixed = "abstract fun f(".len()
        + names.iter().map(|n| n.len() + ": Int, ".len()).sum::<usize>()
        + ": Int)".len();
    let last = "z".repeat(width - fixed);

    let mut builder = FunSpec::builder("f").add_modifier(Modifier::Abstract);
    for name in names.iter().copied().chain([last.as_str()]) {
        builder = builder.add_parameter(ParameterSpec::new(name, TypeName::INT));
    }
    builder.build().unwrap()
}

#[test]
fn test_wrap_boundary() {
    let exact = signature_of_width(100).to_string();
    assert_eq!(exact.lines().count(), 1);
    assert_eq!(exact.trim_end().chars().count(), 100);

    let over = signature_of_width(101).to_string();
    let lines: Vec<&str> = over.lines().collect();
    assert_eq!(lines.len(), 2);
    assert!(lines[0].ends_with("foxtrot: Int,"));
    assert!(lines[1].starts_with("  zzz"));
    assert!(!lines[1].starts_with("   "));
}

#[test]
fn test_statement_continuation_is_one_level_deeper() {
    let numbers = (1..=40).map(|n| code_block!("%L", n * 1000).unwrap());
    let call = FunSpec::builder("numbers")
        .returns(ClassName::list().parameterized_by([TypeName::INT]).unwrap())
        .add_statement(
            "return listOf(%L)",
            [Arg::from(CodeBlock::join(numbers, ",%W").unwrap())],
        )
        .unwrap()
        .build()
        .unwrap();
    let spec = TypeSpec::object_builder("Data")
        .add_function(call)
        .build()
        .unwrap();
    let rendered = spec.to_string();

    let body: Vec<&str> = rendered.lines().skip(2).take_while(|l| !l.starts_with("  }")).collect();
    assert!(body.len() > 1, "expected the statement to wrap:\n{rendered}");
    assert!(body[0].starts_with("    return listOf(1000,"));
    for continuation in &body[1..] {
        assert!(continuation.starts_with("      "));
        assert!(!continuation.starts_with("       "));
    }
    assert!(rendered.lines().all(|line| line.chars().count() <= 100));
}

#[test]
fn test_arity_mismatch_reports_missing_index() {
    let err = FunSpec::builder("f")
        .add_statement("println(%L, %L)", [Arg::from("only")])
        .unwrap_err();
    assert!(matches!(
        err,
        FormatError::MissingArgument {
            index: 1,
            received: 1,
            ..
        }
    ));
}

#[test]
fn test_type_variable_shadows_import() {
    let t = TypeVariableName::new("T");
    let spec = TypeSpec::class_builder("Box")
        .add_type_variable(t.clone())
        .add_property(property("value", t))
        .add_property(property("other", class("com.lib", "T")))
        .build()
        .unwrap();
    let file = FileSpec::get("app", spec).unwrap();

    assert!(file.imports().is_empty());
    insta::assert_snapshot!(file.render(), @r"
package app

class Box<T> {
  val value: T
  val other: com.lib.T
}
");
}

#[test]
fn test_class_named_like_a_builtin_qualifies_both() {
    let holder = TypeSpec::class_builder("Holder")
        .add_property(property("count", TypeName::INT))
        .add_property(property("custom", class("com.foo", "Int")))
        .add_property(property("bytes", TypeName::array_of(TypeName::BYTE)))
        .add_property(property("other", class("com.bar", "Array")))
        .build()
        .unwrap();
    let file = FileSpec::get("app", holder).unwrap();

    assert!(file.imports().is_empty());
    insta::assert_snapshot!(file.render(), @r"
package app

class Holder {
  val count: kotlin.Int
  val custom: com.foo.Int
  val bytes: kotlin.Array<Byte>
  val other: com.bar.Array
}
");
}

#[test]
fn test_members_import_and_render_short() {
    let list_of = MemberName::new("kotlin.collections", "listOf").unwrap();
    let create = MemberName::new("com.acme.util", "create").unwrap();
    let load = class("com.acme", "Config").member("load").unwrap();
    let shout = MemberName::new("com.acme.dsl", "shout").unwrap().extension();
    let run = FunSpec::builder("run")
        .add_statement(
            "val items = %M(%M(), %M())",
            [
                Arg::from(list_of),
                Arg::from(create.clone()),
                Arg::from(load),
            ],
        )
        .unwrap()
        .add_statement("%S.%M()", [Arg::from("hi"), Arg::from(shout.clone())])
        .unwrap()
        .build()
        .unwrap();
    let tool = TypeSpec::class_builder("Tool")
        .add_function(run)
        .build()
        .unwrap();
    let file = FileSpec::get("app", tool).unwrap();

    assert_eq!(file.imports(), [class("com.acme", "Config")]);
    assert_eq!(file.member_imports(), [shout, create]);
    insta::assert_snapshot!(file.render(), @r#"
package app

import com.acme.Config
import com.acme.dsl.shout
import com.acme.util.create

class Tool {
  fun run() {
    val items = listOf(create(), Config.load())
    "hi".shout()
  }
}
"#);
}

#[test]
fn test_member_shadowed_by_enclosing_function_stays_qualified() {
    let helper = MemberName::new("com.acme", "format").unwrap();
    let format = FunSpec::builder("format")
        .returns(TypeName::string())
        .add_statement("return %M(this)", [Arg::from(helper)])
        .unwrap()
        .build()
        .unwrap();
    let report = TypeSpec::class_builder("Report")
        .add_function(format)
        .build()
        .unwrap();
    let file = FileSpec::get("app", report).unwrap();

    assert!(file.member_imports().is_empty());
    insta::assert_snapshot!(file.render(), @r"
package app

class Report {
  fun format(): String {
    return com.acme.format(this)
  }
}
");
}

#[test]
fn test_aliased_imports() {
    let ours = class("com.a", "Widget");
    let theirs = class("com.b", "Widget");
    let make = MemberName::new("com.b", "make").unwrap();
    let made = PropertySpec::builder("made", TypeName::INT)
        .initializer("%M()", [Arg::from(make.clone())])
        .unwrap()
        .build()
        .unwrap();
    let holder = TypeSpec::class_builder("Holder")
        .add_property(property("ours", ours.clone()))
        .add_property(property("theirs", theirs.clone()))
        .add_property(property("entry", theirs.nested_class("Entry").unwrap()))
        .add_property(made)
        .build()
        .unwrap();
    let file = FileSpec::builder("app", "Holder")
        .add_aliased_import(&theirs, "BWidget")
        .add_aliased_member_import(&make, "makeB")
        .add_type(holder)
        .build()
        .unwrap();

    assert_eq!(file.imports(), [ours]);
    insta::assert_snapshot!(file.render(), @r"
package app

import com.a.Widget
import com.b.Widget as BWidget
import com.b.make as makeB

class Holder {
  val ours: Widget
  val theirs: BWidget
  val entry: BWidget.Entry
  val made: Int = makeB()
}
");
}

#[test]
fn test_type_alias_in_file() {
    let json = class("org.json", "JSONObject");
    let payloads = ClassName::list().parameterized_by([json.into()]).unwrap();
    let alias = TypeAliasSpec::builder("Payloads", payloads).build().unwrap();
    let inbox = TypeSpec::class_builder("Inbox")
        .add_property(property("items", class("app", "Payloads")))
        .add_property(property("foreign", class("com.other", "Payloads")))
        .build()
        .unwrap();
    let file = FileSpec::builder("app", "Inbox")
        .add_type_alias(alias)
        .add_type(inbox)
        .build()
        .unwrap();

    insta::assert_snapshot!(file.render(), @r"
package app

import org.json.JSONObject

typealias Payloads = List<JSONObject>

class Inbox {
  val items: Payloads
  val foreign: com.other.Payloads
}
");
}

#[test]
fn test_literal_type_keeps_canonical_text() {
    let json = class("org.json", "JSONObject");
    let parse = FunSpec::builder("parse")
        .add_statement(
            "val value: %T = %L()",
            [Arg::from(json.clone()), Arg::from(json)],
        )
        .unwrap()
        .build()
        .unwrap();
    let parser = TypeSpec::class_builder("Parser")
        .add_function(parse)
        .build()
        .unwrap();
    let file = FileSpec::get("app", parser).unwrap();

    insta::assert_snapshot!(file.render(), @r"
package app

import org.json.JSONObject

class Parser {
  fun parse() {
    val value: JSONObject = org.json.JSONObject()
  }
}
");
}

#[test]
fn test_options_from_toml() {
    let options = FormatOptions::from_toml("indent = 4").unwrap();
    let spec = TypeSpec::class_builder("Wide")
        .add_property(property("size", TypeName::INT))
        .build()
        .unwrap();
    let file = FileSpec::builder("app", "Wide")
        .options(options)
        .add_type(spec)
        .build()
        .unwrap();
    assert_eq!(
        file.render(),
        "package app\n\nclass Wide {\n    val size: Int\n}\n"
    );
}

#[test]
fn test_write_to_disk() {
    let temp = TempDir::new().unwrap();
    let file = greeter();

    let result = file.write(temp.path()).unwrap();

    let path = temp.path().join("com").join("example").join("Greeter.kt");
    assert_eq!(result, WriteResult::Written);
    assert_eq!(std::fs::read_to_string(path).unwrap(), file.render());
    assert_eq!(file.to_source_file().bytes(), file.render().as_bytes());
}
