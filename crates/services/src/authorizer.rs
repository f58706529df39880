//! Role-based resource resolution.

use std::sync::Arc;

use podium_core::properties::EXTERNAL_REFERENCE_ID;
use podium_core::types::DbId;
use podium_stores::models::Resource;
use podium_stores::{ResourceDirectory, ResourceFilter};

use crate::error::{ServiceError, ServiceResult};

/// Resolves the unique acting resource for a (project, user) pair,
/// constrained to an allowed role set.
pub struct RoleAuthorizer {
    resources: Arc<dyn ResourceDirectory>,
}

impl RoleAuthorizer {
    pub fn new(resources: Arc<dyn ResourceDirectory>) -> Self {
        Self { resources }
    }

    /// Authorize `user_id` on `project_id` under one of `allowed_roles`.
    ///
    /// Role names are resolved against the directory's role catalog; names
    /// the directory does not know are dropped silently. The search then
    /// requires a resource holding any resolved role (OR) on the given
    /// project whose "External Reference ID" extension property equals the
    /// stringified user id; identity is a string comparison because the
    /// directory has no typed user field on resources. Exactly one match
    /// authorizes; zero or several is a failure.
    pub async fn authorize(
        &self,
        project_id: DbId,
        user_id: DbId,
        allowed_roles: &[&str],
    ) -> ServiceResult<Resource> {
        let roles = self.resources.get_all_resource_roles().await?;
        let role_ids: Vec<DbId> = roles
            .iter()
            .filter(|role| allowed_roles.contains(&role.name.as_str()))
            .map(|role| role.id)
            .collect();
        if role_ids.is_empty() {
            tracing::error!(user_id, ?allowed_roles, "no requested role exists");
            return Err(ServiceError::NoSuchRole);
        }

        let filter = ResourceFilter {
            role_ids,
            project_id,
            extension_property_name: EXTERNAL_REFERENCE_ID.to_string(),
            extension_property_value: user_id.to_string(),
        };
        let mut matches = self.resources.search_resources(&filter).await?;
        if matches.len() != 1 {
            tracing::error!(
                user_id,
                project_id,
                matches = matches.len(),
                "resource resolution was not unique"
            );
            return Err(ServiceError::AmbiguousOrMissingUser {
                user_id,
                matches: matches.len(),
            });
        }
        Ok(matches.swap_remove(0))
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use assert_matches::assert_matches;
    use podium_core::roles::{ROLE_SUBMITTER, SUBMITTER_ROLES, TEST_CASE_REVIEWER_ROLES};
    use podium_stores::memory::InMemoryStore;

    #[tokio::test]
    async fn single_match_authorizes() {
        let store = Arc::new(InMemoryStore::new());
        let role_id = store.seed_role(ROLE_SUBMITTER).await;
        let resource_id = store
            .seed_resource(Resource::new(0, role_id, 5).with_external_reference(42))
            .await;

        let authorizer = RoleAuthorizer::new(store);
        let resource = authorizer.authorize(5, 42, SUBMITTER_ROLES).await.unwrap();
        assert_eq!(resource.id, resource_id);
    }

    #[tokio::test]
    async fn zero_matches_fail() {
        let store = Arc::new(InMemoryStore::new());
        store.seed_role(ROLE_SUBMITTER).await;

        let authorizer = RoleAuthorizer::new(store);
        assert_matches!(
            authorizer.authorize(5, 42, SUBMITTER_ROLES).await,
            Err(ServiceError::AmbiguousOrMissingUser {
                user_id: 42,
                matches: 0
            })
        );
    }

    #[tokio::test]
    async fn several_matches_fail() {
        let store = Arc::new(InMemoryStore::new());
        let role_id = store.seed_role(ROLE_SUBMITTER).await;
        store
            .seed_resource(Resource::new(0, role_id, 5).with_external_reference(42))
            .await;
        store
            .seed_resource(Resource::new(0, role_id, 5).with_external_reference(42))
            .await;

        let authorizer = RoleAuthorizer::new(store);
        assert_matches!(
            authorizer.authorize(5, 42, SUBMITTER_ROLES).await,
            Err(ServiceError::AmbiguousOrMissingUser {
                user_id: 42,
                matches: 2
            })
        );
    }

    #[tokio::test]
    async fn unknown_role_names_are_dropped_silently() {
        // Only one of the three reviewer roles exists; a resource holding
        // it still authorizes.
        let store = Arc::new(InMemoryStore::new());
        let role_id = store.seed_role("Accuracy Reviewer").await;
        store
            .seed_resource(Resource::new(0, role_id, 5).with_external_reference(42))
            .await;

        let authorizer = RoleAuthorizer::new(store);
        let resource = authorizer
            .authorize(5, 42, TEST_CASE_REVIEWER_ROLES)
            .await
            .unwrap();
        assert_eq!(resource.role_id, role_id);
    }

    #[tokio::test]
    async fn wholly_unknown_role_set_fails_before_searching() {
        let store = Arc::new(InMemoryStore::new());
        // Directory knows no roles at all.
        let authorizer = RoleAuthorizer::new(store);
        assert_matches!(
            authorizer.authorize(5, 42, SUBMITTER_ROLES).await,
            Err(ServiceError::NoSuchRole)
        );
    }

    #[tokio::test]
    async fn identity_is_matched_as_a_string() {
        let store = Arc::new(InMemoryStore::new());
        let role_id = store.seed_role(ROLE_SUBMITTER).await;
        // Property "042" is not the string "42".
        let mut resource = Resource::new(0, role_id, 5);
        resource
            .properties
            .insert(EXTERNAL_REFERENCE_ID.to_string(), "042".to_string());
        store.seed_resource(resource).await;

        let authorizer = RoleAuthorizer::new(store);
        assert_matches!(
            authorizer.authorize(5, 42, SUBMITTER_ROLES).await,
            Err(ServiceError::AmbiguousOrMissingUser { matches: 0, .. })
        );
    }
}
