use std::collections::BTreeSet;
use std::fmt::Display;
use std::future::Future;

use anyhow::Result;

use crate::application::ports::{CastMemberGateway, CategoryGateway, GenreGateway};
use crate::domain::{CastMemberId, CategoryId, GenreId, Notification, ValidationError, Video};

/// Reports ids from `expected` that `exists_by_ids` does not return.
///
/// Empty input short-circuits without calling the gateway. All missing ids
/// go into a single error, in the set's order.
pub async fn check_references<Id, F, Fut>(
    expected: &BTreeSet<Id>,
    exists_by_ids: F,
    entity: &str,
) -> Result<Notification>
where
    Id: Ord + Clone + Display,
    F: FnOnce(Vec<Id>) -> Fut,
    Fut: Future<Output = Result<Vec<Id>>>,
{
    let mut notification = Notification::new();
    if expected.is_empty() {
        return Ok(notification);
    }

    let found: BTreeSet<Id> = exists_by_ids(expected.iter().cloned().collect())
        .await?
        .into_iter()
        .collect();

    let missing: Vec<String> = expected.difference(&found).map(ToString::to_string).collect();
    if !missing.is_empty() {
        notification.append(ValidationError::new(format!(
            "Some {entity} could not be found: {}",
            missing.join(", ")
        )));
    }

    Ok(notification)
}

/// Checks the three reference sets of a video concurrently.
pub struct ReferenceValidator<'a> {
    pub categories: &'a dyn CategoryGateway,
    pub genres: &'a dyn GenreGateway,
    pub cast_members: &'a dyn CastMemberGateway,
}

impl ReferenceValidator<'_> {
    pub async fn validate(&self, video: &Video) -> Result<Notification> {
        let categories = self.categories;
        let genres = self.genres;
        let cast_members = self.cast_members;

        let (from_categories, from_genres, from_cast_members) = tokio::try_join!(
            check_references(
                video.categories(),
                move |ids: Vec<CategoryId>| async move { categories.exists_by_ids(&ids).await },
                "categories",
            ),
            check_references(
                video.genres(),
                move |ids: Vec<GenreId>| async move { genres.exists_by_ids(&ids).await },
                "genres",
            ),
            check_references(
                video.cast_members(),
                move |ids: Vec<CastMemberId>| async move { cast_members.exists_by_ids(&ids).await },
                "cast members",
            ),
        )?;

        let mut notification = Notification::new();
        notification
            .merge(from_categories)
            .merge(from_genres)
            .merge(from_cast_members);
        Ok(notification)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    fn ids(values: &[&str]) -> BTreeSet<CategoryId> {
        values.iter().map(|v| CategoryId::from_string(*v)).collect()
    }

    #[tokio::test]
    async fn test_empty_set_skips_gateway() {
        let calls = AtomicUsize::new(0);

        let notification = check_references(
            &BTreeSet::<CategoryId>::new(),
            |ids| {
                calls.fetch_add(1, Ordering::SeqCst);
                async move { Ok(ids) }
            },
            "categories",
        )
        .await
        .unwrap();

        assert!(!notification.has_errors());
        assert_eq!(calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn test_all_found_yields_no_error() {
        let expected = ids(&["a", "b"]);

        let notification = check_references(&expected, |ids| async move { Ok(ids) }, "categories")
            .await
            .unwrap();

        assert!(!notification.has_errors());
    }

    #[tokio::test]
    async fn test_missing_ids_are_joined_in_one_error() {
        let expected = ids(&["c", "a", "b"]);

        let notification = check_references(
            &expected,
            |_| async move { Ok(vec![CategoryId::from_string("b")]) },
            "categories",
        )
        .await
        .unwrap();

        assert_eq!(
            notification.messages(),
            vec!["Some categories could not be found: a, c"]
        );
    }

    #[tokio::test]
    async fn test_ids_differing_in_case_are_checked_separately() {
        let expected = ids(&["AbC", "abc"]);

        let notification = check_references(
            &expected,
            |requested| async move {
                assert_eq!(requested, ["AbC", "abc"].map(CategoryId::from_string).to_vec());
                Ok(vec![CategoryId::from_string("abc")])
            },
            "categories",
        )
        .await
        .unwrap();

        assert_eq!(
            notification.messages(),
            vec!["Some categories could not be found: AbC"]
        );
    }

    #[tokio::test]
    async fn test_gateway_failure_propagates() {
        let expected = ids(&["a"]);

        let result = check_references(
            &expected,
            |_| async move { Err::<Vec<CategoryId>, _>(anyhow::anyhow!("gateway down")) },
            "categories",
        )
        .await;

        assert!(result.is_err());
    }
}
