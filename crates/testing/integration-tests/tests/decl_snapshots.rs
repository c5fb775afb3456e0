//! Snapshot tests of lowered files
//!
//! Each fixture is a single file, so locations start at `@1`.

use ag_syntax::{CodeBlockItem, Keyword, SyntaxBuilder, TokenKind};
use expect_test::expect;
use integration_tests::TestFixture;

fn empty_body(_: &mut SyntaxBuilder) -> Vec<CodeBlockItem> {
    Vec::new()
}

#[test]
fn test_class_with_method() {
    let mut fixture = TestFixture::new();
    fixture.add_file("shapes.swift", |builder| {
        vec![
            builder.import_decl(None, &["Swift"]),
            builder.class_decl("Shape", &["Base"], |members| {
                vec![members.func_decl("area", &[], Some("Int"), Some(&empty_body))]
            }),
        ]
    });
    let project = fixture.lower().unwrap();

    assert!(project.messages(0).is_empty());
    expect![[r#"
        import module @1 path=Swift@8
        class Shape @14 name=@20 braces=@32..@57
          inherited: [Base]
          members:
            func area @34 name=@39 -> Int
              params @43..@44 []
              brace @53..@55 []
    "#]]
    .assert_eq(&project.dump(0));
}

#[test]
fn test_protocol_and_class_members() {
    let mut fixture = TestFixture::new();
    fixture.add_file("container.swift", |builder| {
        vec![
            builder.protocol_decl("Container", &["Element"], |members| {
                vec![members.associatedtype_decl("Element")]
            }),
            builder.class_decl("Box", &[], |members| {
                vec![
                    members.init_decl(Some(TokenKind::PostfixQuestionMark), &[], None),
                    members.deinit_decl(None),
                ]
            }),
        ]
    });
    let project = fixture.lower().unwrap();

    assert!(project.messages(0).is_empty());
    expect![[r#"
        protocol Container @1 name=@10 braces=@29..@54 primary=[Element@20]
          members:
            associatedtype Element @31 name=@46
        class Box @56 name=@62 braces=@66..@83
          members:
            constructor @68 failable=@72 iuo=false
              params @73..@74 []
            destructor @76
    "#]]
    .assert_eq(&project.dump(0));
}

#[test]
fn test_enum_cases_and_bindings() {
    let mut fixture = TestFixture::new();
    fixture.add_file("color.swift", |builder| {
        vec![
            builder.enum_decl("Color", &[], |members| {
                vec![members.case_decl(&[("red", Some("1")), ("green", None)])]
            }),
            builder.var_decl(Keyword::Let, &[("first", None, Some("1")), ("second", None, Some("2"))]),
        ]
    });
    let project = fixture.lower().unwrap();

    assert!(project.messages(0).is_empty());
    expect![[r#"
        enum Color @1 name=@6 braces=@12..@34
          members:
            enum_case @14
              enum_element red @19 = 1 equals=@23
              enum_element green @28
        var let first @36 static=false init=1
    "#]]
    .assert_eq(&project.dump(0));
}
