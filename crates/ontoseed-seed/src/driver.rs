//! Publish driver: seed table → ops → print → publish.

use std::io::Write;

use ontoseed_core::{Op, SpaceId};
use ontoseed_graph::{CreateEntityParams, EntityConstructor, PublishReceipt, Publisher};

use crate::config::SeedConfig;
use crate::error::Result;
use crate::output::{print_ops, print_receipt};
use crate::seed;

/// Build the full op batch for the seed table.
///
/// Calls the constructor once per row, types first, and appends each row's
/// ops in table order. The first constructor error aborts the build.
pub fn build_ops<C: EntityConstructor + ?Sized>(constructor: &C) -> Result<Vec<Op>> {
    let mut ops = Vec::new();
    let mut entities = 0usize;

    for (kind, row) in seed::rows() {
        let created = constructor.create_entity(CreateEntityParams {
            id: Some(row.id),
            name: row.name.to_string(),
            description: Some(row.description.to_string()),
            types: vec![kind.meta_type()],
        })?;
        ops.extend(created.ops);
        entities += 1;
    }

    tracing::info!(entities, op_count = ops.len(), "Built seed ops");
    Ok(ops)
}

/// Publish a batch to `space_id` with a single publisher call.
pub async fn publish<P: Publisher + ?Sized>(
    publisher: &P,
    ops: &[Op],
    space_id: &SpaceId,
) -> Result<PublishReceipt> {
    let receipt = publisher.publish_ops(ops, space_id).await?;
    Ok(receipt)
}

/// Run a full seed.
///
/// The space id, and the signing key unless this is a dry run, are checked
/// before anything is built. In dry-run mode the ops are printed and `None`
/// is returned without contacting the publisher.
pub async fn run<C, P, W>(
    config: &SeedConfig,
    constructor: &C,
    publisher: &P,
    out: &mut W,
) -> Result<Option<PublishReceipt>>
where
    C: EntityConstructor + ?Sized,
    P: Publisher + ?Sized,
    W: Write,
{
    let space_id = config.require_space_id()?;
    if !config.dry_run {
        config.require_signing_key()?;
    }

    let ops = build_ops(constructor)?;
    print_ops(out, &ops)?;

    if config.dry_run {
        tracing::info!(space_id = %space_id, op_count = ops.len(), "Dry run, not publishing");
        return Ok(None);
    }

    let receipt = publish(publisher, &ops, &space_id).await?;
    print_receipt(out, &receipt)?;
    Ok(Some(receipt))
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use std::sync::atomic::{AtomicUsize, Ordering};

    use async_trait::async_trait;
    use chrono::Utc;
    use ontoseed_core::system::{PROPERTY, SCHEMA_TYPE};
    use ontoseed_core::Id;
    use ontoseed_graph::{CreatedEntity, Graph, GraphError};

    use crate::error::SeedError;
    use crate::seed::{PROPERTY_SEED, TYPE_COURSE, TYPE_SEED};

    /// Delegates to `Graph` and remembers every call.
    #[derive(Default)]
    struct RecordingConstructor {
        calls: RefCell<Vec<CreateEntityParams>>,
    }

    impl EntityConstructor for RecordingConstructor {
        fn create_entity(
            &self,
            params: CreateEntityParams,
        ) -> std::result::Result<CreatedEntity, GraphError> {
            self.calls.borrow_mut().push(params.clone());
            Graph.create_entity(params)
        }
    }

    /// Fails on the nth call (zero-based).
    struct FailingConstructor {
        fail_at: usize,
        calls: RefCell<usize>,
    }

    impl EntityConstructor for FailingConstructor {
        fn create_entity(
            &self,
            params: CreateEntityParams,
        ) -> std::result::Result<CreatedEntity, GraphError> {
            let n = *self.calls.borrow();
            *self.calls.borrow_mut() += 1;
            if n == self.fail_at {
                return Err(GraphError::Construction("boom".to_string()));
            }
            Graph.create_entity(params)
        }
    }

    struct FakePublisher {
        calls: AtomicUsize,
        reject: bool,
    }

    impl FakePublisher {
        fn accepting() -> Self {
            Self { calls: AtomicUsize::new(0), reject: false }
        }

        fn rejecting() -> Self {
            Self { calls: AtomicUsize::new(0), reject: true }
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl Publisher for FakePublisher {
        async fn publish_ops(
            &self,
            ops: &[Op],
            space_id: &SpaceId,
        ) -> std::result::Result<PublishReceipt, GraphError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            if self.reject {
                return Err(GraphError::Rejected {
                    status: 503,
                    body: "space unavailable".to_string(),
                });
            }
            Ok(PublishReceipt {
                space_id: space_id.clone(),
                edit_id: Id::from_u128(42),
                content_hash: "hash".to_string(),
                op_count: ops.len(),
                cid: Some("ipfs://seed".to_string()),
                tx_hash: None,
                published_at: Utc::now(),
            })
        }
    }

    fn config_with_space() -> SeedConfig {
        SeedConfig {
            space_id: Some("space-1".to_string()),
            signing_key: Some("secret".to_string()),
            ..Default::default()
        }
    }

    #[test]
    fn test_build_ops_calls_constructor_once_per_row() {
        let ctor = RecordingConstructor::default();
        build_ops(&ctor).unwrap();

        let calls = ctor.calls.borrow();
        assert_eq!(calls.len(), 11);

        let expected = TYPE_SEED
            .iter()
            .map(|row| (row, SCHEMA_TYPE))
            .chain(PROPERTY_SEED.iter().map(|row| (row, PROPERTY)));
        for (call, (row, meta)) in calls.iter().zip(expected) {
            assert_eq!(call.id, Some(row.id));
            assert_eq!(call.name, row.name);
            assert_eq!(call.description.as_deref(), Some(row.description));
            assert_eq!(call.types, vec![meta]);
        }
    }

    #[test]
    fn test_course_row_is_typed_as_schema_type() {
        let ctor = RecordingConstructor::default();
        build_ops(&ctor).unwrap();

        let calls = ctor.calls.borrow();
        let course = &calls[0];
        assert_eq!(course.id, Some(TYPE_COURSE));
        assert_eq!(course.name, "Course");
        assert_eq!(
            course.description.as_deref(),
            Some("A structured collection of lessons.")
        );
        assert_eq!(course.types, vec![SCHEMA_TYPE]);
    }

    #[test]
    fn test_build_ops_concatenates_per_row_output_in_order() {
        let ops = build_ops(&Graph).unwrap();

        let mut expected = Vec::new();
        for (kind, row) in seed::rows() {
            let created = Graph
                .create_entity(CreateEntityParams {
                    id: Some(row.id),
                    name: row.name.to_string(),
                    description: Some(row.description.to_string()),
                    types: vec![kind.meta_type()],
                })
                .unwrap();
            expected.extend(created.ops);
        }
        assert_eq!(ops, expected);
        // One entity op and one type relation per row.
        assert_eq!(ops.len(), 22);
    }

    #[test]
    fn test_rebuild_references_same_identities() {
        let first = build_ops(&Graph).unwrap();
        let second = build_ops(&Graph).unwrap();
        let ids = |ops: &[Op]| ops.iter().map(Op::id).collect::<Vec<_>>();
        assert_eq!(ids(&first), ids(&second));
        assert_eq!(first, second);
    }

    #[test]
    fn test_constructor_error_stops_build() {
        let ctor = FailingConstructor { fail_at: 5, calls: RefCell::new(0) };
        let err = build_ops(&ctor).unwrap_err();
        assert!(matches!(err, SeedError::Graph(GraphError::Construction(_))));
        assert_eq!(*ctor.calls.borrow(), 6);
    }

    #[tokio::test]
    async fn test_missing_space_id_does_no_work() {
        let ctor = RecordingConstructor::default();
        let publisher = FakePublisher::accepting();
        let mut out = Vec::new();

        let err = run(&SeedConfig::default(), &ctor, &publisher, &mut out)
            .await
            .unwrap_err();

        assert!(matches!(err, SeedError::Config(_)));
        assert!(ctor.calls.borrow().is_empty());
        assert_eq!(publisher.calls(), 0);
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_missing_signing_key_does_no_work() {
        let ctor = RecordingConstructor::default();
        let publisher = FakePublisher::accepting();
        let mut out = Vec::new();
        let config = SeedConfig {
            signing_key: None,
            ..config_with_space()
        };

        let err = run(&config, &ctor, &publisher, &mut out).await.unwrap_err();

        assert!(matches!(err, SeedError::Config(_)));
        assert!(ctor.calls.borrow().is_empty());
        assert_eq!(publisher.calls(), 0);
        assert!(out.is_empty());
    }

    #[tokio::test]
    async fn test_dry_run_needs_no_signing_key() {
        let publisher = FakePublisher::accepting();
        let mut out = Vec::new();
        let config = SeedConfig {
            signing_key: None,
            dry_run: true,
            ..config_with_space()
        };

        let outcome = run(&config, &Graph, &publisher, &mut out).await.unwrap();

        assert!(outcome.is_none());
        assert!(!out.is_empty());
    }

    #[tokio::test]
    async fn test_publish_failure_propagates_after_one_attempt() {
        let publisher = FakePublisher::rejecting();
        let mut out = Vec::new();

        let err = run(&config_with_space(), &Graph, &publisher, &mut out)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            SeedError::Graph(GraphError::Rejected { status: 503, .. })
        ));
        assert_eq!(publisher.calls(), 1);
        // Ops were printed before the publish attempt.
        assert!(!out.is_empty());
    }

    #[tokio::test]
    async fn test_run_prints_ops_then_receipt() {
        let publisher = FakePublisher::accepting();
        let mut out = Vec::new();

        let receipt = run(&config_with_space(), &Graph, &publisher, &mut out)
            .await
            .unwrap()
            .unwrap();

        assert_eq!(publisher.calls(), 1);
        assert_eq!(receipt.op_count, 22);
        assert_eq!(receipt.space_id.as_str(), "space-1");

        let text = String::from_utf8(out).unwrap();
        let marker = text.find("Seed ontology published:").unwrap();
        assert!(text.find("CREATE_ENTITY").unwrap() < marker);
        assert!(text.contains(&TYPE_COURSE.to_string()));
    }

    #[tokio::test]
    async fn test_dry_run_skips_publish() {
        let publisher = FakePublisher::accepting();
        let mut out = Vec::new();
        let config = SeedConfig {
            dry_run: true,
            ..config_with_space()
        };

        let outcome = run(&config, &Graph, &publisher, &mut out).await.unwrap();

        assert!(outcome.is_none());
        assert_eq!(publisher.calls(), 0);
        assert!(String::from_utf8(out).unwrap().contains("CREATE_RELATION"));
    }
}
