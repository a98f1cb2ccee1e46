//! Cache keys and the entity → keys invalidation table.
//!
//! Every fetched collection lives in the query cache under one of these
//! keys. Instead of each mutation call site naming the keys it thinks it
//! affects, the table below declares, per entity, every key that must be
//! invalidated after a successful write. Forgetting a key here is a
//! single place to fix; forgetting one at a call site was silent.

use serde::{Deserialize, Serialize};

/// Identifier of a cached collection. Admin variants fetch the whole
/// table; the public variants carry the visibility filter baked into
/// their loader.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum CacheKey {
    Services,
    Reviews,
    ReviewsAdmin,
    PendingReviewsCount,
    Demos,
    DemosAdmin,
    PortfolioProjects,
    PortfolioAdmin,
    ServiceTemplates,
    TemplatesAdmin,
    TeamMembers,
    TeamAdmin,
    CompanyInfo,
    Inquiries,
    InquiriesCount,
}

impl CacheKey {
    /// Stable string form, used for logging.
    pub fn as_str(&self) -> &'static str {
        match self {
            CacheKey::Services => "services",
            CacheKey::Reviews => "reviews",
            CacheKey::ReviewsAdmin => "reviews-admin",
            CacheKey::PendingReviewsCount => "pending-reviews-count",
            CacheKey::Demos => "demos",
            CacheKey::DemosAdmin => "demos-admin",
            CacheKey::PortfolioProjects => "portfolio-projects",
            CacheKey::PortfolioAdmin => "admin-portfolio",
            CacheKey::ServiceTemplates => "service-templates",
            CacheKey::TemplatesAdmin => "admin-templates",
            CacheKey::TeamMembers => "team-members",
            CacheKey::TeamAdmin => "admin-team-members",
            CacheKey::CompanyInfo => "company-info",
            CacheKey::Inquiries => "inquiries",
            CacheKey::InquiriesCount => "inquiries-count",
        }
    }
}

/// The mutable entities. `Service` is absent on purpose: services are
/// pre-configured rows with no mutation path in the UI.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Review,
    Demo,
    PortfolioProject,
    ServiceTemplate,
    TeamMember,
    CompanyInfo,
    ContactInquiry,
}

/// Every cache key that must be re-fetched after a successful write to
/// the given entity.
pub fn dependents(entity: Entity) -> &'static [CacheKey] {
    match entity {
        Entity::Review => &[
            CacheKey::Reviews,
            CacheKey::ReviewsAdmin,
            CacheKey::PendingReviewsCount,
        ],
        Entity::Demo => &[CacheKey::Demos, CacheKey::DemosAdmin],
        Entity::PortfolioProject => {
            &[CacheKey::PortfolioProjects, CacheKey::PortfolioAdmin]
        }
        Entity::ServiceTemplate => {
            &[CacheKey::ServiceTemplates, CacheKey::TemplatesAdmin]
        }
        Entity::TeamMember => &[CacheKey::TeamMembers, CacheKey::TeamAdmin],
        Entity::CompanyInfo => &[CacheKey::CompanyInfo],
        Entity::ContactInquiry => &[CacheKey::Inquiries, CacheKey::InquiriesCount],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ENTITIES: [Entity; 7] = [
        Entity::Review,
        Entity::Demo,
        Entity::PortfolioProject,
        Entity::ServiceTemplate,
        Entity::TeamMember,
        Entity::CompanyInfo,
        Entity::ContactInquiry,
    ];

    #[test]
    fn every_entity_declares_at_least_one_dependent_key() {
        for entity in ENTITIES {
            assert!(!dependents(entity).is_empty(), "{entity:?} has no keys");
        }
    }

    #[test]
    fn review_writes_invalidate_public_admin_and_count_views() {
        let keys = dependents(Entity::Review);
        assert!(keys.contains(&CacheKey::Reviews));
        assert!(keys.contains(&CacheKey::ReviewsAdmin));
        assert!(keys.contains(&CacheKey::PendingReviewsCount));
    }

    #[test]
    fn team_member_deletion_touches_no_other_entity() {
        // Removing a member refreshes both team views and nothing else.
        assert_eq!(
            dependents(Entity::TeamMember),
            &[CacheKey::TeamMembers, CacheKey::TeamAdmin]
        );
    }

    #[test]
    fn inquiry_writes_refresh_the_dashboard_count() {
        assert!(dependents(Entity::ContactInquiry).contains(&CacheKey::InquiriesCount));
    }

    #[test]
    fn key_strings_are_unique() {
        let all = [
            CacheKey::Services,
            CacheKey::Reviews,
            CacheKey::ReviewsAdmin,
            CacheKey::PendingReviewsCount,
            CacheKey::Demos,
            CacheKey::DemosAdmin,
            CacheKey::PortfolioProjects,
            CacheKey::PortfolioAdmin,
            CacheKey::ServiceTemplates,
            CacheKey::TemplatesAdmin,
            CacheKey::TeamMembers,
            CacheKey::TeamAdmin,
            CacheKey::CompanyInfo,
            CacheKey::Inquiries,
            CacheKey::InquiriesCount,
        ];
        let mut names: Vec<_> = all.iter().map(|k| k.as_str()).collect();
        names.sort();
        names.dedup();
        assert_eq!(names.len(), all.len());
    }
}
