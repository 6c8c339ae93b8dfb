//! Well-known graph ids shared by every space.

use crate::types::Id;

// ── Meta-types ────────────────────────────────────────────────────

/// Meta-type for schema types ("Type").
pub const SCHEMA_TYPE: Id = Id::from_u128(0x56e58309_3bea_4e24_bfdd_3e32300f7a39);

/// Meta-type for properties ("Property").
pub const PROPERTY: Id = Id::from_u128(0xb6fdcc22_3812_47c6_8685_e6ec34e6927a);

// ── System properties ─────────────────────────────────────────────

/// Property holding an entity's display name.
pub const NAME_PROPERTY: Id = Id::from_u128(0xce89cc02_d783_4ce6_acb7_af798ea358ef);

/// Property holding an entity's short description.
pub const DESCRIPTION_PROPERTY: Id = Id::from_u128(0x5ea2f80b_a1ab_4774_aafa_b51da125c224);

/// Relation type linking an entity to each of its types.
pub const TYPES_PROPERTY: Id = Id::from_u128(0xd9586e9b_a0ad_4534_8d0d_54ac98f58b3d);
