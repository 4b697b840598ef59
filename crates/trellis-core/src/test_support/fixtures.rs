use std::sync::Arc;
use trellis_schema::{
    node::NodeType,
    value::{Options, Value},
};

/// `Author { name: unique }`
pub(crate) fn author() -> Arc<NodeType> {
    let ty = NodeType::builder("Author")
        .unwrap()
        .property("name", Options::new().with("index", Value::symbol("unique")))
        .unwrap()
        .has_edges(
            "author_of",
            "Book",
            Options::new().with("reflect", Value::symbol("authored_by")),
        )
        .unwrap()
        .build();

    Arc::new(ty)
}

/// `Publisher { name: indexed }`
pub(crate) fn publisher() -> Arc<NodeType> {
    let ty = NodeType::builder("Publisher")
        .unwrap()
        .property("name", Options::new().with("index", true))
        .unwrap()
        .build();

    Arc::new(ty)
}

/// `Book` with one single and one multiple edge, interleaved with properties.
pub(crate) fn book() -> Arc<NodeType> {
    let ty = NodeType::builder("Book")
        .unwrap()
        .property("title", Options::new().with("index", Value::symbol("unique")))
        .unwrap()
        .has_edge(
            "authored_by",
            "Author",
            Options::new().with("reflect", Value::symbol("author_of")),
        )
        .unwrap()
        .has_edges(
            "published_by",
            "Publisher",
            Options::new().with("reflect", Value::symbol("publisher_of")),
        )
        .unwrap()
        .property("pages", Options::new().with("default", 0i64))
        .unwrap()
        .build();

    Arc::new(ty)
}
