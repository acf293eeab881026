use implgen_core::{BasicKind, ChanDir, Field, Interface, Signature, Struct, Type, Var};

use crate::{BodyStyle, Error, panic_body, zero_body, zero_value};

fn zero(ty: Type) -> String {
    zero_value(&ty).unwrap().render()
}

#[test]
fn panic_with_message() {
    assert_eq!(panic_body("not implemented").render(), r#"panic("not implemented")"#);
    assert_eq!(panic_body(r#"say "hi""#).render(), r#"panic("say \"hi\"")"#);
}

#[test]
fn basic_zero_values() {
    assert_eq!(zero(Type::basic(BasicKind::Bool)), "false");
    assert_eq!(zero(Type::basic(BasicKind::Int)), "0");
    assert_eq!(zero(Type::basic(BasicKind::Float64)), "0");
    assert_eq!(zero(Type::basic(BasicKind::Rune)), "0");
    assert_eq!(zero(Type::basic(BasicKind::String)), r#""""#);
    assert_eq!(zero(Type::basic(BasicKind::UnsafePointer)), "nil");
    assert_eq!(zero(Type::basic(BasicKind::UntypedNil)), "nil");
    assert_eq!(
        zero_value(&Type::basic(BasicKind::Invalid)),
        Err(Error::UnsupportedBasic(BasicKind::Invalid))
    );
}

#[test]
fn nil_zero_values() {
    let int = || Type::basic(BasicKind::Int);
    assert_eq!(zero(Type::universe("error")), "nil");
    assert_eq!(zero(Type::universe("any")), "nil");
    assert_eq!(zero(Type::pointer(int())), "nil");
    assert_eq!(zero(Type::slice(int())), "nil");
    assert_eq!(zero(Type::map(int(), int())), "nil");
    assert_eq!(zero(Type::chan(ChanDir::Recv, int())), "nil");
    assert_eq!(zero(Signature::default().into()), "nil");
    assert_eq!(zero(Interface::default().into()), "nil");
}

#[test]
fn composite_zero_values() {
    assert_eq!(zero(Type::array(2, Type::basic(BasicKind::Int))), "[2]int{}");
    assert_eq!(zero(Struct::default().into()), "struct{}{}");
    assert_eq!(
        zero(Struct::new([Field::new("X", Type::basic(BasicKind::Int))]).into()),
        "struct {\n\tX int\n}{}"
    );
}

#[test]
fn named_zero_value() {
    assert_eq!(zero(Type::named("example.com/kv", "Key")), "*new(kv.Key)");
    assert_eq!(zero(Type::named("time", "Time")), "*new(time.Time)");
}

#[test]
fn tuple_has_no_zero_value() {
    let err = zero_value(&Type::tuple([])).unwrap_err();
    assert_eq!(err, Error::UnsupportedShape("tuple has no zero value".to_string()));
}

#[test]
fn zero_body_returns_each_result() {
    let sig = Signature::new(
        [],
        [
            Var::unnamed(Type::basic(BasicKind::Int)),
            Var::unnamed(Type::universe("error")),
        ],
    );
    assert_eq!(zero_body(&sig).unwrap().render(), "return 0, nil");
}

#[test]
fn zero_body_bare_return() {
    assert_eq!(zero_body(&Signature::default()).unwrap().render(), "return");

    let named = Signature::new([], [Var::new("n", Type::basic(BasicKind::Int))]);
    assert_eq!(zero_body(&named).unwrap().render(), "return");
}

#[test]
fn default_style_panics() {
    assert_eq!(BodyStyle::default(), BodyStyle::Panic);
}
