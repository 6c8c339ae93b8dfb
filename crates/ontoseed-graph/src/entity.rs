//! Entity construction: turn an entity description into graph ops.

use ontoseed_core::system::{DESCRIPTION_PROPERTY, NAME_PROPERTY, TYPES_PROPERTY};
use ontoseed_core::{CreateEntity, CreateRelation, Id, Op, PropertyValue, Value};

use crate::client::GraphError;

/// Input to [`EntityConstructor::create_entity`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CreateEntityParams {
    /// Stable id to create the entity under. Generated when absent.
    pub id: Option<Id>,
    pub name: String,
    pub description: Option<String>,
    /// Type ids; one `TYPES_PROPERTY` relation is emitted per distinct type.
    pub types: Vec<Id>,
}

/// Ops produced for one entity, plus the id it was created under.
#[derive(Debug, Clone, PartialEq)]
pub struct CreatedEntity {
    pub id: Id,
    pub ops: Vec<Op>,
}

/// Builds the ops that create an entity.
pub trait EntityConstructor {
    fn create_entity(&self, params: CreateEntityParams) -> Result<CreatedEntity, GraphError>;
}

/// Default constructor.
///
/// Emits one `CreateEntity` op carrying the name and description values,
/// followed by one `CreateRelation` op per type. Relation ids are derived from
/// (entity, relation type, type) so re-running with the same entity id yields
/// the same relation ids.
#[derive(Debug, Clone, Copy, Default)]
pub struct Graph;

impl EntityConstructor for Graph {
    fn create_entity(&self, params: CreateEntityParams) -> Result<CreatedEntity, GraphError> {
        let name = params.name.trim();
        if name.is_empty() {
            return Err(GraphError::Construction(
                "entity name must not be empty".to_string(),
            ));
        }

        let id = params.id.unwrap_or_else(Id::generate);

        let mut values = vec![PropertyValue {
            property: NAME_PROPERTY,
            value: Value::Text(name.to_string()),
        }];
        let description = params.description.as_deref().map(str::trim).unwrap_or_default();
        if !description.is_empty() {
            values.push(PropertyValue {
                property: DESCRIPTION_PROPERTY,
                value: Value::Text(description.to_string()),
            });
        }

        let mut ops = vec![Op::CreateEntity(CreateEntity { id, values })];

        let mut seen: Vec<Id> = Vec::with_capacity(params.types.len());
        for type_id in params.types {
            if seen.contains(&type_id) {
                continue;
            }
            seen.push(type_id);
            ops.push(Op::CreateRelation(CreateRelation {
                id: Id::derived(&[id, TYPES_PROPERTY, type_id]),
                relation_type: TYPES_PROPERTY,
                from: id,
                to: type_id,
            }));
        }

        tracing::debug!(entity_id = %id, op_count = ops.len(), "Built entity ops");
        Ok(CreatedEntity { id, ops })
    }
}
