mod association;
mod node_type;
mod property;

pub use association::AssociationDescriptor;
pub use node_type::NodeType;
pub use property::PropertyDescriptor;
