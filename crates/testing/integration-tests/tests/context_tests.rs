//! Declaration contexts across nesting levels

use ag_ast::{DeclContext, DeclKind};
use ag_syntax::{CodeBlockItem, Keyword, SyntaxBuilder};
use integration_tests::TestFixture;

fn local_struct(builder: &mut SyntaxBuilder) -> Vec<CodeBlockItem> {
    let local = builder.struct_decl("Local", |members| {
        vec![members.var_decl(Keyword::Var, &[("count", Some("Int"), Some("0"))])]
    });
    vec![CodeBlockItem::Decl(local)]
}

#[test]
fn test_contexts_follow_nesting() {
    let mut fixture = TestFixture::new();
    fixture.add_file("nested.swift", |builder| {
        vec![
            builder.class_decl("Outer", &[], |members| {
                vec![members.func_decl("make", &[], None, Some(&local_struct))]
            }),
            builder.typealias_decl("After", "Int"),
        ]
    });
    let project = fixture.lower().unwrap();
    let file = project.file(0);
    let file_context = DeclContext::SourceFile(file.file);

    let outer = project.decl(0, 0).unwrap();
    assert_eq!(file.ast[outer].context, file_context);

    let [method] = file.ast.members(outer).unwrap() else {
        panic!("Outer should have exactly one member");
    };
    assert_eq!(file.ast[*method].context, DeclContext::Decl(outer));

    let locals = project.body_decls(0, *method);
    let [local] = locals[..] else {
        panic!("make should declare exactly one local");
    };
    assert_eq!(project.name(0, local), Some("Local"));
    assert_eq!(file.ast[local].context, DeclContext::Decl(*method));

    let [count] = file.ast.members(local).unwrap() else {
        panic!("Local should have exactly one member");
    };
    assert_eq!(file.ast[*count].context, DeclContext::Decl(local));
    assert!(matches!(file.ast[*count].kind, DeclKind::Var(_)));

    // Nesting three levels deep leaves the file context in place.
    let after = project.decl(0, 1).unwrap();
    assert_eq!(project.name(0, after), Some("After"));
    assert_eq!(file.ast[after].context, file_context);
}

#[test]
fn test_only_context_kinds_own_declarations() {
    let mut fixture = TestFixture::new();
    fixture.add_file("owners.swift", |builder| {
        vec![
            builder.struct_decl("Point", |members| {
                vec![members.var_decl(Keyword::Var, &[("x", Some("Int"), None)])]
            }),
            builder.extension_decl("Point", |members| {
                vec![members.func_decl("reset", &[], None, None)]
            }),
            builder.var_decl(Keyword::Let, &[("origin", None, Some("0"))]),
        ]
    });
    let project = fixture.lower().unwrap();
    let ast = &project.file(0).ast;

    for (id, decl) in ast.decls() {
        if let DeclContext::Decl(owner) = decl.context {
            assert!(
                ast[owner].is_decl_context(),
                "{} is owned by a {}",
                decl.kind.name(),
                ast[owner].kind.name()
            );
            assert!(ast.decls_in(decl.context).any(|registered| registered == id));
        }
    }

    let point = project.decl(0, 0).unwrap();
    let extension = project.decl(0, 1).unwrap();
    let origin = project.decl(0, 2).unwrap();
    assert!(ast[point].is_decl_context());
    assert!(ast[extension].is_decl_context());
    assert!(!ast[origin].is_decl_context());
    assert_eq!(project.member_kinds(0, extension), ["func"]);
}

#[test]
fn test_members_keep_source_order() {
    let mut fixture = TestFixture::new();
    fixture.add_file("order.swift", |builder| {
        vec![builder.struct_decl("Many", |members| {
            ["a", "b", "c", "d", "e"]
                .into_iter()
                .map(|name| members.var_decl(Keyword::Var, &[(name, Some("Int"), None)]))
                .collect()
        })]
    });
    let project = fixture.lower().unwrap();
    let many = project.decl(0, 0).unwrap();
    assert_eq!(project.member_kinds(0, many), ["var"; 5]);

    let dump = project.dump(0);
    let positions: Vec<_> = ["a", "b", "c", "d", "e"]
        .iter()
        .map(|name| dump.find(&format!("var var {name} ")).unwrap())
        .collect();
    assert!(positions.is_sorted(), "{dump}");
}
