//! The seed table: four schema types and seven properties.
//!
//! Ids are fixed so that re-seeding targets the same entities every run.

use ontoseed_core::system::{PROPERTY, SCHEMA_TYPE};
use ontoseed_core::Id;

// ── Type ids ──────────────────────────────────────────────────────

pub const TYPE_COURSE: Id = Id::from_u128(0x5a918869_7b06_45fc_8ac3_275b3691b383);
pub const TYPE_LESSON: Id = Id::from_u128(0xe0acdba3_76f0_4918_9c6d_4dbc707cb4d7);
pub const TYPE_TOPIC: Id = Id::from_u128(0xf6015caa_886b_420e_82a1_f77a94f68d8d);
pub const TYPE_ORGANIZATION: Id = Id::from_u128(0xfeaf8b47_4a5a_43d3_b6de_67801413d07b);

// ── Property ids ──────────────────────────────────────────────────

pub const PROPERTY_NAME: Id = Id::from_u128(0x877111f6_7f5f_499c_a607_0f5e2e32a7d4);
pub const PROPERTY_DESCRIPTION: Id = Id::from_u128(0x328dbcc2_7cb1_4abc_a490_b47fe19ae938);
pub const PROPERTY_URL: Id = Id::from_u128(0x609025df_5607_44fb_a882_cf13f5e4cbe8);
pub const PROPERTY_LESSON_ORDER: Id = Id::from_u128(0x7d2b5462_5ad2_4c0c_a91e_adab74ebb615);
pub const PROPERTY_HAS_LESSON: Id = Id::from_u128(0x8fae9626_7090_4bfa_84e8_12ee46ff7826);
pub const PROPERTY_COVERS_TOPIC: Id = Id::from_u128(0xdd8322d1_f9ad_41f2_9b12_da68f89da041);
pub const PROPERTY_PUBLISHED_BY: Id = Id::from_u128(0x21e3ad44_4f80_47d0_9bad_fdf1ee8ff198);

/// One entity to seed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedRow {
    pub id: Id,
    pub name: &'static str,
    pub description: &'static str,
}

/// Which meta-type a seed row is created with.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedKind {
    Type,
    Property,
}

impl SeedKind {
    pub fn meta_type(&self) -> Id {
        match self {
            Self::Type => SCHEMA_TYPE,
            Self::Property => PROPERTY,
        }
    }
}

pub const TYPE_SEED: [SeedRow; 4] = [
    SeedRow {
        id: TYPE_COURSE,
        name: "Course",
        description: "A structured collection of lessons.",
    },
    SeedRow {
        id: TYPE_LESSON,
        name: "Lesson",
        description: "A unit inside a course, usually a page or video.",
    },
    SeedRow {
        id: TYPE_TOPIC,
        name: "Topic",
        description: "A concept/tag used to organize courses and lessons.",
    },
    SeedRow {
        id: TYPE_ORGANIZATION,
        name: "Organization",
        description: "Publisher/provider of a course.",
    },
];

pub const PROPERTY_SEED: [SeedRow; 7] = [
    // Value properties
    SeedRow {
        id: PROPERTY_NAME,
        name: "name",
        description: "Display name/title.",
    },
    SeedRow {
        id: PROPERTY_DESCRIPTION,
        name: "description",
        description: "Short summary.",
    },
    SeedRow {
        id: PROPERTY_URL,
        name: "url",
        description: "Primary entry URL.",
    },
    SeedRow {
        id: PROPERTY_LESSON_ORDER,
        name: "lesson_order",
        description: "Ordering number within a course.",
    },
    // Relation properties
    SeedRow {
        id: PROPERTY_HAS_LESSON,
        name: "has_lesson",
        description: "Course → Lesson membership relation.",
    },
    SeedRow {
        id: PROPERTY_COVERS_TOPIC,
        name: "covers_topic",
        description: "Course/Lesson → Topic tagging relation.",
    },
    SeedRow {
        id: PROPERTY_PUBLISHED_BY,
        name: "published_by",
        description: "Course → Organization publisher/provider relation.",
    },
];

/// All seed rows in publish order: types first, then properties.
pub fn rows() -> impl Iterator<Item = (SeedKind, &'static SeedRow)> {
    TYPE_SEED
        .iter()
        .map(|row| (SeedKind::Type, row))
        .chain(PROPERTY_SEED.iter().map(|row| (SeedKind::Property, row)))
}
