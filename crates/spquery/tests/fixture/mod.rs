#![allow(dead_code)]

use spquery::{
    async_trait,
    schema::{Endpoint, Expand, Field, Model},
    Batch, Connection, Db, Query, Response, Result,
};

use std::sync::{Arc, Mutex};

pub fn web() -> Model {
    Model::new("Web")
        .key(Field::new("Id").graph("sharepointIds"))
        .field(Field::new("Title").graph("displayName").by_default())
        .field(Field::new("Description").graph_camel_case().by_default())
        .field(Field::new("Url").graph("webUrl").by_default())
        .field(Field::new("HasUniqueRoleAssignments").no_rest())
        .field(Field::graph_only("GraphId", "id"))
        .field(
            Field::expand(
                "Lists",
                Expand::many("List")
                    .rest_path("_api/web/lists")
                    .graph_path("sites/{hostname}:{serverrelativepath}:/lists"),
            )
            .graph("lists"),
        )
        .field(Field::expand(
            "ContentTypes",
            Expand::many("ContentType").rest_path("_api/web/contenttypes"),
        ))
        .rest(Endpoint::entity("_api/web").implicit_select())
        .graph(
            Endpoint::entity("sites/{hostname}:{serverrelativepath}")
                .implicit_select()
                .required(["GraphId"]),
        )
}

pub fn list() -> Model {
    Model::new("List")
        .key(Field::new("Id").graph("id"))
        .field(Field::new("Title").graph("displayName").by_default())
        .field(Field::new("Description").graph_camel_case().by_default())
        .field(Field::new("ListExperience").rest("ListExperienceOptions"))
        .field(Field::new("TemplateType").rest("BaseTemplate"))
        .field(Field::new("Created").graph("createdDateTime"))
        .field(
            Field::new("LastModified")
                .rest("LastItemModifiedDate")
                .graph("lastModifiedDateTime"),
        )
        .field(Field::graph_only("System", "system"))
        .field(Field::graph_only("ETag", "eTag"))
        .field(Field::graph_only("Name", "name"))
        .field(Field::graph_only("WebUrl", "webUrl"))
        .field(Field::graph_only("CreatedBy", "createdBy"))
        .field(Field::graph_only("LastModifiedBy", "lastModifiedBy"))
        .field(Field::graph_only("ParentReference", "parentReference"))
        .field(Field::graph_only("ListInfo", "list"))
        .field(Field::expand(
            "InformationRightsManagementSettings",
            Expand::one("InformationRightsManagementSettings"),
        ))
        .field(Field::expand(
            "Fields",
            Expand::many("Field").rest_path("_api/web/lists/getbyid({Parent.Id})/fields"),
        ))
        .field(Field::expand(
            "ContentTypes",
            Expand::many("ContentType")
                .rest_path("_api/web/lists/getbyid({Parent.Id})/contenttypes"),
        ))
        .field(Field::expand(
            "Items",
            Expand::many("ListItem")
                .separate_query()
                .rest_path("_api/web/lists/getbyid({Parent.Id})/items"),
        ))
        .rest(Endpoint::entity("_api/web/lists/getbyid({Id})").collection("_api/web/lists"))
        .graph(
            Endpoint::entity("sites/{Parent.GraphId}/lists/{Id}")
                .collection("sites/{Parent.GraphId}/lists")
                .default_select([
                    "System",
                    "Created",
                    "Description",
                    "ETag",
                    "Id",
                    "LastModified",
                    "Name",
                    "WebUrl",
                    "Title",
                    "CreatedBy",
                    "LastModifiedBy",
                    "ParentReference",
                    "ListInfo",
                ])
                .required(["System"]),
        )
}

pub fn content_type() -> Model {
    Model::new("ContentType")
        .key(Field::new("StringId"))
        .field(Field::new("Name").by_default())
        .field(Field::new("Description").by_default())
        .field(Field::new("Group").by_default())
        .field(Field::expand("FieldLinks", Expand::many("FieldLink")))
        .rest(
            Endpoint::entity("_api/web/contenttypes('{StringId}')")
                .collection("_api/web/contenttypes"),
        )
}

pub fn field_link() -> Model {
    Model::new("FieldLink")
        .key(Field::new("Id"))
        .field(Field::new("Name").by_default())
        .field(Field::new("Hidden").by_default())
        .field(Field::new("Required"))
}

pub fn field() -> Model {
    Model::new("Field")
        .key(Field::new("Id"))
        .field(Field::new("InternalName").by_default())
        .field(Field::new("Title").by_default())
        .field(Field::new("TypeAsString"))
        .rest(Endpoint::entity("_api/web/fields/getbyid({Id})").collection("_api/web/fields"))
}

pub fn irm_settings() -> Model {
    Model::new("InformationRightsManagementSettings")
        .key(Field::new("Id"))
        .field(Field::new("AllowPrint").by_default())
        .field(Field::new("AllowScript").by_default())
        .field(Field::new("DocumentAccessExpireDays"))
}

pub fn list_item() -> Model {
    Model::new("ListItem")
        .key(Field::new("Id"))
        .field(Field::new("Title").by_default())
        .rest(
            Endpoint::entity("_api/web/lists/getbyid({Parent.Id})/items({Id})")
                .collection("_api/web/lists/getbyid({Parent.Id})/items"),
        )
}

pub fn term_store() -> Model {
    Model::new("TermStore")
        .key(Field::graph_only("Id", "id"))
        .field(Field::graph_only("DefaultLanguage", "defaultLanguageTag").by_default())
        .field(Field::graph_only("Languages", "languageTags").by_default())
        .field(
            Field::expand("Groups", Expand::many("TermGroup").graph_path("termstore/groups"))
                .no_rest()
                .graph("groups"),
        )
        .graph(Endpoint::entity("termstore").implicit_select())
}

pub fn term_group() -> Model {
    Model::new("TermGroup")
        .key(Field::graph_only("Id", "id"))
        .field(Field::graph_only("Name", "displayName").by_default())
        .field(Field::graph_only("Description", "description").by_default())
        .field(Field::graph_only("Created", "createdDateTime"))
        .field(
            Field::expand(
                "Sets",
                Expand::many("TermSet").graph_path("termstore/groups/{Parent.Id}/sets"),
            )
            .no_rest()
            .graph("sets"),
        )
        .graph(
            Endpoint::entity("termstore/groups/{Id}")
                .collection("termstore/groups")
                .implicit_select(),
        )
}

pub fn term_set() -> Model {
    Model::new("TermSet")
        .key(Field::graph_only("Id", "id"))
        .field(Field::graph_only("Description", "description").by_default())
        .field(Field::graph_only("LocalizedNames", "localizedNames").by_default())
        .field(
            Field::expand(
                "Terms",
                Expand::many("Term").graph_path("termstore/sets/{Parent.Id}/terms"),
            )
            .no_rest()
            .graph("terms"),
        )
        .graph(
            Endpoint::entity("termstore/sets/{Id}")
                .collection("termstore/groups/{Parent.Id}/sets")
                .implicit_select(),
        )
}

pub fn term() -> Model {
    Model::new("Term")
        .key(Field::graph_only("Id", "id"))
        .field(Field::graph_only("Labels", "labels").by_default())
        .field(Field::graph_only("Descriptions", "descriptions").by_default())
        .graph(
            Endpoint::entity("termstore/sets/{Parent.Id}/terms/{Id}")
                .collection("termstore/sets/{Parent.Id}/terms")
                .implicit_select(),
        )
}

pub fn models() -> Vec<Model> {
    vec![
        web(),
        list(),
        content_type(),
        field_link(),
        field(),
        irm_settings(),
        list_item(),
        term_store(),
        term_group(),
        term_set(),
        term(),
    ]
}

/// Records every batch it receives and answers each request with an empty
/// JSON object.
#[derive(Debug, Default, Clone)]
pub struct MockConnection {
    pub batches: Arc<Mutex<Vec<Batch>>>,
}

#[async_trait]
impl Connection for MockConnection {
    async fn exec(&self, batch: &Batch) -> Result<Response> {
        self.batches.lock().unwrap().push(batch.clone());

        let mut response = Response::default();
        for request in &batch.requests {
            response.insert(request.id, "{}");
        }

        Ok(response)
    }
}

fn build(graph_first: bool) -> Db {
    let mut builder = Db::builder();
    builder.graph_first(graph_first);

    for model in models() {
        builder.register(model);
    }

    builder.build(MockConnection::default()).unwrap()
}

/// Registry with Graph preferred, the default.
pub fn db() -> Db {
    build(true)
}

/// Registry with REST preferred.
pub fn rest_db() -> Db {
    build(false)
}

/// Canonical urls of the rendered query, primary first.
pub fn urls(db: &Db, query: &Query) -> Vec<String> {
    let batch = db.prepare(query).unwrap();
    batch.urls().into_iter().map(str::to_string).collect()
}

/// Compares rendered urls ignoring ASCII case, the way the services compare
/// property names.
#[track_caller]
pub fn assert_urls(actual: Vec<String>, expected: &[&str]) {
    let actual: Vec<String> = actual.iter().map(|url| url.to_ascii_lowercase()).collect();
    let expected: Vec<String> = expected.iter().map(|url| url.to_ascii_lowercase()).collect();
    pretty_assertions::assert_eq!(actual, expected);
}
