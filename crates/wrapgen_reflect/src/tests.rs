use super::*;
use std::io::Write;

fn map_descriptor() -> TypeDescriptor {
    TypeDescriptor {
        full_name: "java.util.Map".to_string(),
        kind: TypeKind::Interface,
        type_variables: vec![TypeRef::variable("K"), TypeRef::variable("V")],
        methods: vec![MethodDescriptor {
            name: "get".to_string(),
            is_final: false,
            is_static: false,
            is_deprecated: false,
            type_variables: vec![],
            return_type: TypeRef::variable("V"),
            parameters: vec![Parameter::new(TypeRef::object(), "key")],
            throws: vec![],
        }],
    }
}

#[test]
fn simple_name_takes_last_segment() {
    assert_eq!(simple_name("java.sql.Connection"), "Connection");
    assert_eq!(simple_name("int"), "int");
}

#[test]
fn as_type_ref_applies_declared_variables() {
    let descriptor = map_descriptor();
    assert_eq!(
        descriptor.as_type_ref(),
        TypeRef::parameterized(
            "java.util.Map",
            vec![TypeRef::variable("K"), TypeRef::variable("V")]
        )
    );
}

#[test]
fn as_type_ref_of_plain_type_has_no_arguments() {
    let descriptor = TypeDescriptor {
        full_name: "java.io.InputStream".to_string(),
        kind: TypeKind::Class,
        type_variables: vec![],
        methods: vec![],
    };
    assert_eq!(descriptor.as_type_ref(), TypeRef::plain("java.io.InputStream"));
}

#[test]
fn descriptor_round_trips_through_json() {
    let descriptor = map_descriptor();
    let json = serde_json::to_string(&descriptor).unwrap();
    let back: TypeDescriptor = serde_json::from_str(&json).unwrap();
    assert_eq!(back, descriptor);
}

#[test]
fn metadata_defaults_apply_to_omitted_fields() {
    let json = r#"{
        "fullName": "demo.Plain",
        "kind": "class",
        "methods": [
            {
                "name": "run",
                "returnType": { "kind": "plain", "name": "void" }
            }
        ]
    }"#;
    let descriptor: TypeDescriptor = serde_json::from_str(json).unwrap();
    assert!(descriptor.type_variables.is_empty());
    let method = &descriptor.methods[0];
    assert!(!method.is_final);
    assert!(!method.is_static);
    assert!(method.parameters.is_empty());
    assert!(method.throws.is_empty());
}

#[test]
fn index_loads_metadata_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    let documents = vec![map_descriptor()];
    write!(file, "{}", serde_json::to_string(&documents).unwrap()).unwrap();

    let mut index = TypeIndex::new();
    index.load_file(file.path()).unwrap();
    assert_eq!(index.len(), 1);
    assert!(index.get("java.util.Map").is_some());
}

#[test]
fn resolve_reports_unknown_type() {
    let index = TypeIndex::new();
    let error = index.resolve("no.such.Type").unwrap_err();
    assert!(matches!(error, ReflectError::UnknownType { name } if name == "no.such.Type"));
}

#[test]
fn load_file_reports_parse_failure_with_path() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    write!(file, "not json").unwrap();

    let mut index = TypeIndex::new();
    let error = index.load_file(file.path()).unwrap_err();
    assert!(matches!(error, ReflectError::MetadataParse { .. }));
}
