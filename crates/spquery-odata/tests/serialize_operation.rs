use pretty_assertions::assert_eq;
use spquery_core::{
    plan::{Clause, FieldPath, Operation, Predicate, Sort},
    schema::{app::*, Name},
    stmt::{BinaryOp, Direction, Value},
    Dialect, Schema,
};
use spquery_odata::Serializer;
use uuid::Uuid;

const WEB: ModelId = ModelId(0);
const LIST: ModelId = ModelId(1);
const FIELD: ModelId = ModelId(2);

const WEB_ID: FieldId = WEB.field(0);
const WEB_TITLE: FieldId = WEB.field(1);
const WEB_LISTS: FieldId = WEB.field(2);
const WEB_GRAPH_ID: FieldId = WEB.field(3);

const LIST_ID: FieldId = LIST.field(0);
const LIST_TITLE: FieldId = LIST.field(1);
const LIST_FIELDS: FieldId = LIST.field(2);

const FIELD_ID: FieldId = FIELD.field(0);
const FIELD_NAME: FieldId = FIELD.field(1);

fn field(id: FieldId, name: &str, rest: Option<&str>, graph: Option<&str>) -> Field {
    Field {
        id,
        name: FieldName {
            app_name: name.to_string(),
            rest: rest.map(str::to_string),
            graph: graph.map(str::to_string),
        },
        ty: FieldTy::Primitive,
        primary_key: id.index == 0,
        default: true,
    }
}

fn expand(id: FieldId, name: &str, target: ModelId, graph: Option<&str>) -> Field {
    Field {
        id,
        name: FieldName {
            app_name: name.to_string(),
            rest: Some(name.to_string()),
            graph: graph.map(str::to_string),
        },
        ty: FieldTy::Expand(Expand {
            target,
            collection: true,
            separate_query: false,
            rest_path: None,
            graph_path: None,
        }),
        primary_key: false,
        default: false,
    }
}

fn endpoint(entity: &str, collection: Option<&str>) -> Endpoint {
    Endpoint {
        entity: entity.to_string(),
        collection: collection.map(str::to_string),
        default_select: DefaultSelect::Declared,
        required: vec![],
    }
}

fn schema() -> Schema {
    let web = Model {
        id: WEB,
        name: Name::new("Web"),
        fields: vec![
            field(WEB_ID, "Id", Some("Id"), Some("sharepointIds")),
            field(WEB_TITLE, "Title", Some("Title"), Some("displayName")),
            expand(WEB_LISTS, "Lists", LIST, Some("lists")),
            field(WEB_GRAPH_ID, "GraphId", None, Some("id")),
        ],
        primary_key: WEB_ID,
        rest: Some(endpoint("_api/web", None)),
        graph: Some(endpoint("sites/{hostname}:{serverrelativepath}", None)),
    };

    let list = Model {
        id: LIST,
        name: Name::new("List"),
        fields: vec![
            field(LIST_ID, "Id", Some("Id"), Some("id")),
            field(LIST_TITLE, "Title", Some("Title"), Some("displayName")),
            expand(LIST_FIELDS, "Fields", FIELD, Some("columns")),
        ],
        primary_key: LIST_ID,
        rest: Some(endpoint("_api/web/lists/getbyid({Id})", Some("_api/web/lists"))),
        graph: None,
    };

    let field_model = Model {
        id: FIELD,
        name: Name::new("Field"),
        fields: vec![
            field(FIELD_ID, "Id", Some("Id"), None),
            field(FIELD_NAME, "InternalName", Some("InternalName"), None),
        ],
        primary_key: FIELD_ID,
        rest: Some(endpoint("_api/web/fields/getbyid({Id})", None)),
        graph: None,
    };

    Schema::from_models([web, list, field_model]).unwrap()
}

fn path(steps: &[FieldId]) -> FieldPath {
    FieldPath(steps.to_vec())
}

#[test]
fn rest_select_and_expand() {
    let schema = schema();
    let mut op = Operation::new(Dialect::Rest, WEB, "_api/web");
    op.push(Clause::Select(vec![
        path(&[WEB_ID]),
        path(&[WEB_LISTS, LIST_TITLE]),
        path(&[WEB_LISTS, LIST_FIELDS, FIELD_NAME]),
    ]));
    op.push(Clause::Expand(vec![
        path(&[WEB_LISTS]),
        path(&[WEB_LISTS, LIST_FIELDS]),
    ]));

    let url = Serializer::rest(&schema).serialize(&op).unwrap();
    assert_eq!(
        url,
        "_api/web?$select=Id,Lists/Title,Lists/Fields/InternalName&$expand=Lists,Lists/Fields"
    );
}

#[test]
fn graph_uses_graph_names() {
    let schema = schema();
    let mut op = Operation::new(Dialect::Graph, WEB, "sites/{hostname}:{serverrelativepath}");
    op.push(Clause::Select(vec![
        path(&[WEB_ID]),
        path(&[WEB_TITLE]),
        path(&[WEB_GRAPH_ID]),
    ]));

    let url = Serializer::graph(&schema).serialize(&op).unwrap();
    assert_eq!(
        url,
        "sites/{hostname}:{serverrelativepath}?$select=sharepointIds,displayName,id"
    );
}

#[test]
fn no_clauses_renders_the_bare_path() {
    let schema = schema();
    let op = Operation::new(Dialect::Rest, WEB, "_api/web");

    let serializer = Serializer::for_dialect(&schema, Dialect::Rest);
    assert_eq!(serializer.serialize(&op).unwrap(), "_api/web");
    assert_eq!(serializer.serialize_encoded(&op).unwrap(), "_api/web");
}

#[test]
fn filter_order_and_paging() {
    let schema = schema();
    let id = Uuid::parse_str("67e55044-10b1-426f-9247-bb680e5fe0c8").unwrap();

    let mut op = Operation::new(Dialect::Rest, LIST, "_api/web/lists");
    op.push(Clause::Select(vec![path(&[LIST_ID]), path(&[LIST_TITLE])]));
    op.push(Clause::Filter(vec![
        Predicate {
            field: LIST_TITLE,
            op: BinaryOp::Eq,
            value: Value::from("Bob's list"),
        },
        Predicate {
            field: LIST_ID,
            op: BinaryOp::Ne,
            value: Value::Uuid(id),
        },
    ]));
    op.push(Clause::OrderBy(vec![Sort {
        field: LIST_TITLE,
        direction: Direction::Desc,
    }]));
    op.push(Clause::Top(10));
    op.push(Clause::Skip(5));

    let url = Serializer::rest(&schema).serialize(&op).unwrap();
    assert_eq!(
        url,
        "_api/web/lists?$select=Id,Title\
         &$filter=Title eq 'Bob''s list' and Id ne guid'67e55044-10b1-426f-9247-bb680e5fe0c8'\
         &$orderby=Title desc&$top=10&$skip=5"
    );
}

#[test]
fn graph_renders_bare_guids() {
    let schema = schema();
    let id = Uuid::parse_str("67e55044-10b1-426f-9247-bb680e5fe0c8").unwrap();

    let mut op = Operation::new(Dialect::Graph, WEB, "sites/root");
    op.push(Clause::Filter(vec![Predicate {
        field: WEB_GRAPH_ID,
        op: BinaryOp::Eq,
        value: Value::Uuid(id),
    }]));

    let url = Serializer::graph(&schema).serialize(&op).unwrap();
    assert_eq!(
        url,
        "sites/root?$filter=id eq 67e55044-10b1-426f-9247-bb680e5fe0c8"
    );
}

#[test]
fn encoded_form_escapes_query_values() {
    let schema = schema();
    let mut op = Operation::new(Dialect::Rest, WEB, "_api/web");
    op.push(Clause::Select(vec![path(&[WEB_ID]), path(&[WEB_LISTS, LIST_TITLE])]));
    op.push(Clause::Expand(vec![path(&[WEB_LISTS])]));

    let url = Serializer::rest(&schema).serialize_encoded(&op).unwrap();
    assert_eq!(url, "_api/web?$select=Id%2CLists%2FTitle&$expand=Lists");
}

#[test]
fn encoded_form_uses_percent_twenty_for_spaces() {
    let schema = schema();
    let mut op = Operation::new(Dialect::Rest, LIST, "_api/web/lists");
    op.push(Clause::Filter(vec![Predicate {
        field: LIST_TITLE,
        op: BinaryOp::Eq,
        value: Value::from("Site Pages"),
    }]));
    op.push(Clause::OrderBy(vec![Sort {
        field: LIST_TITLE,
        direction: Direction::Asc,
    }]));

    let url = Serializer::rest(&schema).serialize_encoded(&op).unwrap();
    assert_eq!(
        url,
        "_api/web/lists?$filter=Title%20eq%20%27Site%20Pages%27&$orderby=Title%20asc"
    );
    assert!(!url.contains('+'));
}

#[test]
fn rendering_is_deterministic() {
    let schema = schema();
    let mut op = Operation::new(Dialect::Rest, WEB, "_api/web");
    op.push(Clause::Select(vec![path(&[WEB_ID]), path(&[WEB_TITLE])]));

    let serializer = Serializer::rest(&schema);
    assert_eq!(
        serializer.serialize(&op).unwrap(),
        serializer.serialize(&op).unwrap()
    );
}

#[test]
fn dialect_mismatch_is_an_invalid_plan() {
    let schema = schema();
    let op = Operation::new(Dialect::Graph, WEB, "sites/root");

    let err = Serializer::rest(&schema).serialize(&op).unwrap_err();
    assert!(err.is_invalid_plan());
}

#[test]
fn field_without_wire_name_is_an_invalid_plan() {
    let schema = schema();
    let mut op = Operation::new(Dialect::Rest, WEB, "_api/web");
    op.push(Clause::Select(vec![path(&[WEB_GRAPH_ID])]));

    let err = Serializer::rest(&schema).serialize(&op).unwrap_err();
    assert!(err.is_invalid_plan());
    assert_eq!(err.to_string(), "invalid plan: field `Web::GraphId` has no REST name");
}

#[test]
fn graph_rejects_nested_and_collection_expansion() {
    let schema = schema();

    let mut nested = Operation::new(Dialect::Graph, WEB, "sites/root");
    nested.push(Clause::Expand(vec![path(&[WEB_LISTS, LIST_FIELDS])]));
    let err = Serializer::graph(&schema).serialize(&nested).unwrap_err();
    assert!(err.is_invalid_plan());

    let mut collection = Operation::new(Dialect::Graph, WEB, "sites/root");
    collection.push(Clause::Expand(vec![path(&[WEB_LISTS])]));
    let err = Serializer::graph(&schema).serialize(&collection).unwrap_err();
    assert!(err.is_invalid_plan());
}

#[test]
fn empty_and_repeated_clauses_are_invalid() {
    let schema = schema();
    let serializer = Serializer::rest(&schema);

    let mut empty = Operation::new(Dialect::Rest, WEB, "_api/web");
    empty.push(Clause::Select(vec![]));
    assert!(serializer.serialize(&empty).unwrap_err().is_invalid_plan());

    let mut repeated = Operation::new(Dialect::Rest, WEB, "_api/web");
    repeated.push(Clause::Top(1));
    repeated.push(Clause::Top(2));
    assert!(serializer.serialize(&repeated).unwrap_err().is_invalid_plan());

    let mut scalar_expand = Operation::new(Dialect::Rest, WEB, "_api/web");
    scalar_expand.push(Clause::Expand(vec![path(&[WEB_TITLE])]));
    assert!(serializer.serialize(&scalar_expand).unwrap_err().is_invalid_plan());
}
