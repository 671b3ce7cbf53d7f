//! Per-user favourite dogs.
//!
//! Each (user, dog) pair is a two-state machine, [`FavouriteState`]. Adding
//! a dog that is already favourited and removing one that is not are both
//! rejected, never treated as no-ops.
//!
//! The operations are generic over [`FavouriteStore`] so the rules can be
//! exercised without a database. Every operation is scoped to the caller's
//! own `user_id`; there is no way to address another user's list.

use std::future::Future;

use serde_json::Value;

use crate::error::CoreError;
use crate::types::DbId;

// ---------------------------------------------------------------------------
// State machine
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavouriteState {
    NotFavourited,
    Favourited,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavouriteAction {
    Add,
    Remove,
}

impl FavouriteState {
    pub fn from_exists(exists: bool) -> Self {
        if exists {
            Self::Favourited
        } else {
            Self::NotFavourited
        }
    }

    /// Apply `action`, returning the next state or the conflict it causes.
    pub fn apply(self, action: FavouriteAction, dog_id: DbId) -> Result<Self, CoreError> {
        match (self, action) {
            (Self::NotFavourited, FavouriteAction::Add) => Ok(Self::Favourited),
            (Self::Favourited, FavouriteAction::Remove) => Ok(Self::NotFavourited),
            (Self::Favourited, FavouriteAction::Add) => {
                Err(CoreError::AlreadyFavourited { dog_id })
            }
            (Self::NotFavourited, FavouriteAction::Remove) => {
                Err(CoreError::NotFavourited { dog_id })
            }
        }
    }
}

// ---------------------------------------------------------------------------
// Dog id input
// ---------------------------------------------------------------------------

/// A dog id as it arrives from a client, before validation.
#[derive(Debug, Clone, Copy)]
pub enum RawDogId<'a> {
    /// A JSON body field (`{"dog_id": ...}`); `None` when the key is absent.
    Json(Option<&'a Value>),
    /// A URL path segment.
    Segment(&'a str),
}

impl RawDogId<'_> {
    /// Accepts JSON integers and strings holding an integer.
    pub fn parse(&self) -> Result<DbId, CoreError> {
        match self {
            Self::Json(None | Some(Value::Null)) => Err(CoreError::MissingId),
            Self::Json(Some(Value::Number(n))) => n
                .as_i64()
                .ok_or_else(|| CoreError::InvalidId(n.to_string())),
            Self::Json(Some(Value::String(s))) => parse_segment(s),
            Self::Segment(s) => parse_segment(s),
            Self::Json(Some(other)) => Err(CoreError::InvalidId(other.to_string())),
        }
    }
}

fn parse_segment(raw: &str) -> Result<DbId, CoreError> {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        return Err(CoreError::MissingId);
    }
    trimmed
        .parse::<DbId>()
        .map_err(|_| CoreError::InvalidId(raw.to_string()))
}

// ---------------------------------------------------------------------------
// Storage
// ---------------------------------------------------------------------------

/// Result of attempting to persist a favourite relation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    Inserted,
    /// The (user, dog) uniqueness constraint rejected the row.
    Duplicate,
    /// The dog was deleted before the row could reference it.
    DogMissing,
}

/// Storage needed by the favourite operations.
///
/// Implementations must enforce (user_id, dog_id) uniqueness themselves and
/// report a violation as [`InsertOutcome::Duplicate`].
pub trait FavouriteStore: Send + Sync {
    type Dog: Send;
    type Error: From<CoreError> + Send;

    fn dog_exists(&self, dog_id: DbId) -> impl Future<Output = Result<bool, Self::Error>> + Send;

    fn favourite_exists(
        &self,
        user_id: DbId,
        dog_id: DbId,
    ) -> impl Future<Output = Result<bool, Self::Error>> + Send;

    fn insert_favourite(
        &self,
        user_id: DbId,
        dog_id: DbId,
    ) -> impl Future<Output = Result<InsertOutcome, Self::Error>> + Send;

    /// Returns `true` if a relation was deleted.
    fn delete_favourite(
        &self,
        user_id: DbId,
        dog_id: DbId,
    ) -> impl Future<Output = Result<bool, Self::Error>> + Send;

    /// Dogs favourited by `user_id`, oldest relation first.
    fn list_favourite_dogs(
        &self,
        user_id: DbId,
    ) -> impl Future<Output = Result<Vec<Self::Dog>, Self::Error>> + Send;

    fn find_favourite_dog(
        &self,
        user_id: DbId,
        dog_id: DbId,
    ) -> impl Future<Output = Result<Option<Self::Dog>, Self::Error>> + Send;
}

// ---------------------------------------------------------------------------
// Operations
// ---------------------------------------------------------------------------

async fn require_dog<S: FavouriteStore>(store: &S, dog_id: DbId) -> Result<(), S::Error> {
    if store.dog_exists(dog_id).await? {
        Ok(())
    } else {
        Err(CoreError::NotFound {
            entity: "Dog",
            id: dog_id,
        }
        .into())
    }
}

/// Add a dog to the caller's favourites. Returns the dog id on success.
pub async fn add_favourite<S: FavouriteStore>(
    store: &S,
    user_id: DbId,
    raw_dog_id: RawDogId<'_>,
) -> Result<DbId, S::Error> {
    let dog_id = raw_dog_id.parse()?;
    require_dog(store, dog_id).await?;

    let current = FavouriteState::from_exists(store.favourite_exists(user_id, dog_id).await?);
    current.apply(FavouriteAction::Add, dog_id)?;

    // The check above can race with a concurrent add or a dog delete; the
    // store's constraints have the final word.
    match store.insert_favourite(user_id, dog_id).await? {
        InsertOutcome::Inserted => Ok(dog_id),
        InsertOutcome::Duplicate => Err(CoreError::AlreadyFavourited { dog_id }.into()),
        InsertOutcome::DogMissing => Err(CoreError::NotFound {
            entity: "Dog",
            id: dog_id,
        }
        .into()),
    }
}

/// Remove a dog from the caller's favourites. Returns the dog id on success.
pub async fn remove_favourite<S: FavouriteStore>(
    store: &S,
    user_id: DbId,
    raw_dog_id: RawDogId<'_>,
) -> Result<DbId, S::Error> {
    let dog_id = raw_dog_id.parse()?;
    require_dog(store, dog_id).await?;

    let current = FavouriteState::from_exists(store.favourite_exists(user_id, dog_id).await?);
    current.apply(FavouriteAction::Remove, dog_id)?;

    if store.delete_favourite(user_id, dog_id).await? {
        Ok(dog_id)
    } else {
        Err(CoreError::NotFavourited { dog_id }.into())
    }
}

/// Fetch one favourited dog of the caller.
pub async fn get_favourite<S: FavouriteStore>(
    store: &S,
    user_id: DbId,
    raw_dog_id: RawDogId<'_>,
) -> Result<S::Dog, S::Error> {
    let dog_id = raw_dog_id.parse()?;
    require_dog(store, dog_id).await?;

    store
        .find_favourite_dog(user_id, dog_id)
        .await?
        .ok_or_else(|| CoreError::NotFavourited { dog_id }.into())
}

/// All dogs the caller has favourited.
pub async fn list_favourites<S: FavouriteStore>(
    store: &S,
    user_id: DbId,
) -> Result<Vec<S::Dog>, S::Error> {
    store.list_favourite_dogs(user_id).await
}
